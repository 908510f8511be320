// ABOUTME: Anthropometric formula engine for the CalculEat platform
// ABOUTME: BMR, body composition, density conversion, PAL/TDEE, calorie goals, and macro allocation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # CalculEat Intelligence
//!
//! A library of pure, deterministic formulas turning body measurements into
//! Basal Metabolic Rate, body fat percentage, Total Daily Energy Expenditure,
//! calorie targets, and macronutrient gram ranges.
//!
//! Every function here is synchronous and side-effect free apart from
//! `tracing` events. Insufficient data yields `None`; unknown selector keys are
//! rejected when parsed (`FromStr`) with a typed `AppError`.
//!
//! Data flow:
//!
//! ```text
//! measurements -> body composition -> body fat % -> BMR -> TDEE -> calorie goal -> macros
//! ```

/// Enum-dispatched formula families
pub mod algorithms;

/// Derived body metrics (BMI, FFMI, lean/fat mass, categories, time to goal)
pub mod body_metrics;

/// Natural muscular potential models
pub mod genetic_potential;

pub use algorithms::{
    allocate_auto, allocate_auto_with, allocate_custom, available_methods, available_variations,
    carb_requirement, compute_bmr, compute_body_fat, compute_body_fat_percent,
    compute_calorie_range, compute_calorie_range_with, compute_maintenance_range, compute_tdee,
    convert_macro_unit, fat_requirement, protein_requirement, validate_macro_ranges,
    ActivityInputs, ActivityLevel, ActivityWizard, AutoMacroSettings, BmrFormula,
    BodyCompositionEstimate, BodyCompositionMethod, BodyCompositionParams, CalorieGoal,
    CalorieRange, DeficitLevel, DensityConversion, GoalSettings, IntensityLevel, MacroAllocation,
    MacroMode, MacroModeInputs, MacroModeTargets, MacroPreset, MacroRange, MacroRangeValidation,
    MacroRanges, MacroSplit, MacroUnit, MacroUnitContext, Macronutrient, MaintenanceBand,
    MethodVariation, PalSystem, StepBucket, TrainingLoad, WizardResult,
};
pub use body_metrics::{
    max_fat_metabolism, BmiCategory, BodyFatCategory, BodyMetrics, FatOxidationLimit,
    FfmiCategory, TimeToGoal,
};
pub use genetic_potential::{
    estimate_all as estimate_genetic_potential, CaseyButtMethod, GeneticPotential,
    PotentialInput, PotentialModel,
};
