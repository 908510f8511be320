// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and reference profiles and measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `calculeat`

use calculeat::{AnthropometricProfile, CaliperMeasurements, Gender, TapeMeasurements};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Male, 30 years, 80 kg, 180 cm
pub fn reference_male() -> AnthropometricProfile {
    AnthropometricProfile::new(30, Gender::Male, 80.0, 180.0).unwrap()
}

/// Female, 35 years, 62 kg, 165 cm
pub fn reference_female() -> AnthropometricProfile {
    AnthropometricProfile::new(35, Gender::Female, 62.0, 165.0).unwrap()
}

/// Chest 10, abdominal 15, thigh 12 (sum 37)
pub fn jackson_pollock_3_male_sites() -> CaliperMeasurements {
    CaliperMeasurements {
        chest: Some(10.0),
        abdominal: Some(15.0),
        thigh: Some(12.0),
        ..CaliperMeasurements::default()
    }
}

/// All ten skinfold sites
pub fn full_caliper() -> CaliperMeasurements {
    CaliperMeasurements {
        chest: Some(12.0),
        abdominal: Some(20.0),
        thigh: Some(15.0),
        tricep: Some(11.0),
        subscapular: Some(14.0),
        suprailiac: Some(13.0),
        midaxillary: Some(10.0),
        bicep: Some(5.0),
        lower_back: Some(12.0),
        calf: Some(8.0),
    }
}

/// All eight girth sites
pub fn full_tape() -> TapeMeasurements {
    TapeMeasurements {
        neck: Some(38.0),
        waist: Some(84.0),
        hip: Some(98.0),
        wrist: Some(17.0),
        ankle: Some(22.0),
        forearm: Some(28.0),
        thigh: Some(56.0),
        calf: Some(37.0),
    }
}
