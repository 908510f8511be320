// ABOUTME: Nutrition planner chaining body fat, BMR, TDEE, calorie goal, and macro allocation
// ABOUTME: Single requests run sequentially; batches fan out over rayon and keep input order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Planner
//!
//! Each stage feeds the next and a missing value short-circuits everything
//! downstream of it to `None`. A body fat percentage already on the profile
//! wins over an estimate; otherwise the estimate feeds the BMR formula. Body
//! metrics are always produced because they only need the profile.
//!
//! Selections a request leaves open come from [`EngineConfig::defaults`].
//!
//! [`plan`] never fails. Callers that want bad input reported instead of
//! silently yielding `None` use [`try_plan`], which runs
//! [`NutritionRequest::validate`] first.

use crate::config::EngineConfig;
use crate::logging::EngineLogger;
use calculeat_core::{
    AnthropometricProfile, AppError, AppResult, CaliperMeasurements, TapeMeasurements,
};
use calculeat_intelligence::body_metrics::bmi;
use calculeat_intelligence::{
    allocate_auto_with, allocate_custom, compute_bmr, compute_body_fat_percent,
    compute_calorie_range_with, compute_tdee, ActivityInputs, ActivityLevel, BmrFormula,
    BodyCompositionMethod, BodyCompositionParams, BodyMetrics, CalorieGoal, CalorieRange,
    DeficitLevel, DensityConversion, MacroRanges, MacroSplit, MethodVariation, PalSystem,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

/// Everything needed to plan one person's intake
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionRequest {
    /// Validated body data
    pub profile: AnthropometricProfile,
    /// Skinfold readings (mm)
    #[serde(default)]
    pub caliper: CaliperMeasurements,
    /// Girth readings (cm)
    #[serde(default)]
    pub tape: TapeMeasurements,
    /// Method used to estimate body fat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_method: Option<BodyCompositionMethod>,
    /// Variation of `body_fat_method`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation: Option<MethodVariation>,
    /// Density to body fat conversion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density_conversion: Option<DensityConversion>,
    /// Measured BMR, read only by the reversed Cunningham method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measured_bmr: Option<f64>,
    /// BMR formula
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmr_formula: Option<BmrFormula>,
    /// PAL system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pal_system: Option<PalSystem>,
    /// Activity inputs; the gender is taken from `profile`
    pub activity: ActivityInputs,
    /// Weight goal
    #[serde(default)]
    pub goal: CalorieGoal,
    /// Loss pace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deficit: Option<DeficitLevel>,
    /// Custom macro bands; automatic allocation when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macro_ranges: Option<MacroRanges>,
}

impl NutritionRequest {
    /// Request with defaults for everything but the profile and goal
    #[must_use]
    pub fn new(profile: AnthropometricProfile, goal: CalorieGoal) -> Self {
        Self {
            profile,
            caliper: CaliperMeasurements::default(),
            tape: TapeMeasurements::default(),
            body_fat_method: None,
            variation: None,
            density_conversion: None,
            measured_bmr: None,
            bmr_formula: None,
            pal_system: None,
            activity: ActivityInputs::new(profile.gender(), ActivityLevel::default()),
            goal,
            deficit: None,
            macro_ranges: None,
        }
    }

    /// Check the request against the selections `config` fills in
    ///
    /// # Errors
    ///
    /// - `ErrorCode::InvalidInput` for a negative or non-finite measurement,
    ///   measured BMR, or custom PAL
    /// - `ErrorCode::MissingRequiredField` when the custom PAL system has no
    ///   `activity.custom_pal`, or the reversed Cunningham method has no
    ///   `measured_bmr`
    pub fn validate(&self, config: &EngineConfig) -> AppResult<()> {
        self.caliper.validate()?;
        self.tape.validate()?;
        check_positive("measured_bmr", self.measured_bmr)?;
        check_positive("activity.custom_pal", self.activity.custom_pal)?;

        let pal_system = self.pal_system.unwrap_or(config.defaults.pal_system);
        if pal_system == PalSystem::Custom && self.activity.custom_pal.is_none() {
            return Err(AppError::missing_field("activity.custom_pal"));
        }
        let method = self
            .body_fat_method
            .or(config.defaults.body_composition_method);
        if method == Some(BodyCompositionMethod::ReversedCunningham) && self.measured_bmr.is_none()
        {
            return Err(AppError::missing_field("measured_bmr"));
        }
        Ok(())
    }
}

fn check_positive(field: &str, value: Option<f64>) -> AppResult<()> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(AppError::invalid_input(format!(
            "{field} must be a positive number, got {v}"
        ))),
        _ => Ok(()),
    }
}

/// Result of a planner run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionPlan {
    /// Estimated or supplied body fat percentage
    pub body_fat_percent: Option<f64>,
    /// Basal metabolic rate (kcal/day)
    pub bmr: Option<f64>,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: Option<u32>,
    /// Calorie band for the goal
    pub calorie_range: Option<CalorieRange>,
    /// Macro split for the band
    pub macros: Option<MacroSplit>,
    /// BMI, FFMI, and related classes
    pub body_metrics: BodyMetrics,
}

/// Plan a single request
///
/// # Example
///
/// ```rust
/// use calculeat::config::EngineConfig;
/// use calculeat::planner::{plan, NutritionRequest};
/// use calculeat_core::{AnthropometricProfile, Gender};
/// use calculeat_intelligence::{ActivityLevel, CalorieGoal, DeficitLevel};
///
/// let profile = AnthropometricProfile::new(30, Gender::Male, 80.0, 180.0)?;
/// let mut request = NutritionRequest::new(profile, CalorieGoal::Lose);
/// request.activity.activity_level = ActivityLevel::ModeratelyActive;
/// request.deficit = Some(DeficitLevel::Moderate);
///
/// let result = plan(&request, &EngineConfig::default());
/// assert_eq!(result.tdee, Some(3029));
/// assert_eq!(result.calorie_range.map(|r| r.target), Some(2529));
/// # Ok::<(), calculeat_core::AppError>(())
/// ```
#[must_use]
pub fn plan(request: &NutritionRequest, config: &EngineConfig) -> NutritionPlan {
    let defaults = &config.defaults;
    let profile = &request.profile;

    let body_fat_percent = profile
        .body_fat_percent()
        .or_else(|| estimate_body_fat(request, config));
    let bmr_profile = profile_with_body_fat(profile, body_fat_percent);

    let formula = request.bmr_formula.unwrap_or(defaults.bmr_formula);
    let pal_system = request.pal_system.unwrap_or(defaults.pal_system);
    let activity = ActivityInputs {
        gender: profile.gender(),
        ..request.activity
    };

    let bmr = compute_bmr(formula, &bmr_profile);
    let tdee = bmr.and_then(|kcal| compute_tdee(kcal, pal_system, &activity));
    let calorie_range = tdee.map(|kcal| {
        compute_calorie_range_with(kcal, request.goal, request.deficit, &config.goals.settings())
    });
    let macros = calorie_range.map(|range| allocate_macros(request, config, &range));

    EngineLogger::log_plan(
        formula.name(),
        pal_system.name(),
        request.goal.name(),
        bmr,
        tdee,
        calorie_range.map(|range| range.target),
    );

    NutritionPlan {
        body_fat_percent,
        bmr,
        tdee,
        calorie_range,
        macros,
        body_metrics: BodyMetrics::from_profile(profile, body_fat_percent),
    }
}

/// Validate a request, then plan it
///
/// # Errors
///
/// Returns the first problem [`NutritionRequest::validate`] finds
pub fn try_plan(request: &NutritionRequest, config: &EngineConfig) -> AppResult<NutritionPlan> {
    request.validate(config).inspect_err(|e| {
        debug!(code = %e.code, message = %e.message, "Nutrition request rejected");
    })?;
    Ok(plan(request, config))
}

/// Plan many requests in parallel, returning results in input order
#[must_use]
pub fn plan_batch(requests: &[NutritionRequest], config: &EngineConfig) -> Vec<NutritionPlan> {
    let started = Instant::now();
    let plans: Vec<NutritionPlan> = requests
        .par_iter()
        .map(|request| plan(request, config))
        .collect();

    let with_targets = plans.iter().filter(|p| p.calorie_range.is_some()).count();
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    EngineLogger::log_batch(requests.len(), with_targets, duration_ms);

    plans
}

fn estimate_body_fat(request: &NutritionRequest, config: &EngineConfig) -> Option<f64> {
    let method = request
        .body_fat_method
        .or(config.defaults.body_composition_method)?;
    let profile = &request.profile;
    let mut params = BodyCompositionParams::from_profile(profile, request.caliper, request.tape)
        .with_bmi(bmi(profile.weight_kg(), profile.height_cm()));
    if let Some(measured) = request.measured_bmr {
        params = params.with_bmr(measured);
    }
    let conversion = request
        .density_conversion
        .unwrap_or(config.defaults.density_conversion);

    let percent = compute_body_fat_percent(method, request.variation, &params, conversion);
    EngineLogger::log_body_fat_estimate(
        method.name(),
        request.variation.as_ref().map(MethodVariation::name),
        percent,
    );
    percent
}

/// Attach an estimated body fat to a profile that has none
fn profile_with_body_fat(
    profile: &AnthropometricProfile,
    body_fat_percent: Option<f64>,
) -> AnthropometricProfile {
    match (profile.body_fat_percent(), body_fat_percent) {
        (None, Some(percent)) => profile.with_body_fat(percent).unwrap_or_else(|e| {
            debug!(percent, error = %e, "Estimated body fat not usable for BMR");
            *profile
        }),
        _ => *profile,
    }
}

fn allocate_macros(
    request: &NutritionRequest,
    config: &EngineConfig,
    range: &CalorieRange,
) -> MacroSplit {
    request.macro_ranges.map_or_else(
        || {
            allocate_auto_with(
                range.target,
                request.profile.weight_kg(),
                request.goal,
                &config.macros.settings(),
            )
        },
        |ranges| allocate_custom(range, &ranges),
    )
}
