// ABOUTME: Core data models for anthropometric calculations
// ABOUTME: Re-exports the profile, gender, and caliper/tape measurement value objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Input value objects.
//!
//! All models are transient: constructed per calculation from caller-supplied
//! data and never mutated by the engine.

mod measurements;
mod profile;

pub use measurements::{CaliperMeasurements, CaliperSite, TapeMeasurements, TapeSite};
pub use profile::{AnthropometricProfile, Gender, ProfileInput};
