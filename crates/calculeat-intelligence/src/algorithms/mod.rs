// ABOUTME: Formula abstraction layer with enum dispatch for every anthropometric calculation
// ABOUTME: Re-exports BMR, body composition, density, availability, PAL, calorie goal, and macro types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Formula Selection Module
//!
//! Each formula family is a closed enum with exhaustive matching, so adding a
//! formula is a compile-time-checked, localized change.
//!
//! # Design Philosophy
//!
//! - **Type Safety**: Formulas are enums, not strings
//! - **Missing data is not an error**: formulas return `Option`
//! - **Unknown keys fail loudly**: `FromStr` returns `AppError` with `UNKNOWN_SELECTOR`
//!
//! # Example
//!
//! ```rust
//! use calculeat_core::{AnthropometricProfile, Gender};
//! use calculeat_intelligence::algorithms::BmrFormula;
//!
//! let profile = AnthropometricProfile::new(30, Gender::Male, 80.0, 180.0)?;
//! let bmr = BmrFormula::MifflinStJeor.calculate(&profile);
//! assert!(bmr.is_some());
//! # Ok::<(), calculeat_core::AppError>(())
//! ```

pub mod availability;
pub mod bmr;
pub mod body_composition;
pub mod brackets;
pub mod calorie_goal;
pub mod density;
pub mod macros;
pub mod pal;

pub use availability::{available_methods, available_variations};
pub use bmr::{compute_bmr, BmrFormula};
pub use body_composition::{
    compute_body_fat, compute_body_fat_percent, BodyCompositionEstimate, BodyCompositionMethod,
    BodyCompositionParams, MeasurementRequirements, MethodVariation,
};
pub use calorie_goal::{
    compute_calorie_range, compute_calorie_range_with, compute_maintenance_range, CalorieGoal,
    CalorieRange, DeficitLevel, GoalSettings, MaintenanceBand,
};
pub use density::DensityConversion;
pub use macros::{
    allocate_auto, allocate_auto_with, allocate_custom, carb_requirement, convert_macro_unit,
    fat_requirement, protein_requirement, validate_macro_ranges, AutoMacroSettings,
    CarbRequirement, FatRequirement, MacroAllocation, MacroMode, MacroModeInputs,
    MacroModeTargets, MacroPreset, MacroRange, MacroRangeValidation, MacroRanges, MacroSplit,
    MacroUnit, MacroUnitContext, Macronutrient, ProteinRequirement, TrainingLoad,
};
pub use pal::{
    compute_tdee, ActivityInputs, ActivityLevel, ActivityWizard, IntensityLevel, PalSystem,
    StepBucket, WizardResult,
};
