// ABOUTME: Core types and constants for the CalculEat anthropometric engine
// ABOUTME: Foundation crate with error handling, measurement models, unit helpers, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # CalculEat Core
//!
//! Foundation crate providing shared types and constants for the CalculEat
//! anthropometric engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Physiological and nutritional constants organized by domain
//! - **models**: Input value objects (`AnthropometricProfile`, caliper and tape measurements)
//! - **units**: Metric/imperial conversion helpers used by the historical formulas

/// Unified error handling system with standard error codes
pub mod errors;

/// Physiological and nutritional constants organized by domain
pub mod constants;

/// Input value objects for anthropometric calculations
pub mod models;

/// Unit conversion helpers (cm/in, kg/lb, cm/m)
pub mod units;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{AnthropometricProfile, CaliperMeasurements, Gender, TapeMeasurements};
