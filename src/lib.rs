// ABOUTME: Main library entry point for the CalculEat anthropometric engine
// ABOUTME: Wires engine configuration, logging setup, and the nutrition planner over the workspace crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # CalculEat
//!
//! Anthropometric and energy engine: BMR formulas, skinfold and girth body
//! composition methods, TDEE via several PAL systems, calorie goal bands, and
//! macro allocation.
//!
//! ## Architecture
//!
//! - **`calculeat-core`**: validated profile, measurement sets, errors, constants
//! - **`calculeat-intelligence`**: the formulas themselves
//! - **this crate**: configuration, logging setup, and the end-to-end planner
//!
//! ## Example Usage
//!
//! ```rust
//! use calculeat::config::EngineConfig;
//! use calculeat::planner::{plan, NutritionRequest};
//! use calculeat::{AnthropometricProfile, CalorieGoal, Gender};
//!
//! let profile = AnthropometricProfile::new(30, Gender::Male, 80.0, 180.0)?;
//! let request = NutritionRequest::new(profile, CalorieGoal::Maintain);
//! let result = plan(&request, &EngineConfig::default());
//! assert!(result.bmr.is_some_and(|bmr| (bmr - 1781.6).abs() < 0.1));
//! # Ok::<(), calculeat::AppError>(())
//! ```

/// Engine configuration with environment overrides
pub mod config;

/// Structured logging setup
pub mod logging;

/// End-to-end nutrition planning
pub mod planner;

pub use calculeat_core::{
    AnthropometricProfile, AppError, AppResult, CaliperMeasurements, ErrorCode, Gender,
    TapeMeasurements,
};
pub use calculeat_intelligence::{
    ActivityInputs, ActivityLevel, ActivityWizard, BmrFormula, BodyCompositionMethod, BodyMetrics,
    CalorieGoal, CalorieRange, DeficitLevel, DensityConversion, MacroMode, MacroRanges,
    MacroSplit, MethodVariation, PalSystem,
};
pub use config::{ConfigError, EngineConfig};
pub use planner::{plan, plan_batch, try_plan, NutritionPlan, NutritionRequest};
