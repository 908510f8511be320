// ABOUTME: Body composition method selection, variations, parameters, and dispatch
// ABOUTME: Twelve caliper, tape, and derived methods returning body density or body fat directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Composition Calculator
//!
//! Each [`BodyCompositionMethod`] returns either a body **density** (which must
//! go through a [`DensityConversion`]) or a body fat **percentage** directly.
//! [`BodyCompositionEstimate`] keeps the two apart in the type system.
//!
//! Missing measurements, a variation the method does not offer, or a
//! sex-restricted variation requested for the other sex all yield `None`.
//! Methods without variations ignore the variation argument.

mod circumference;
mod derived;
mod skinfold;

use super::density::DensityConversion;
use calculeat_core::models::{CaliperSite, TapeSite};
use calculeat_core::{
    AnthropometricProfile, AppError, CaliperMeasurements, Gender, TapeMeasurements,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Formula sub-mode within a method
///
/// Naming follows the regression terms: S is the skinfold sum, C a
/// circumference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MethodVariation {
    /// S, S², age
    Age,
    /// S, S², age, C
    AgeCircumference,
    /// S, S², C
    Circumference,
    /// Alternate site set reachable with clothes on
    Clothed,
    /// S, S² (body fat percentage directly)
    SumOnly,
}

impl MethodVariation {
    /// Get variation name for logging and serialization
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::AgeCircumference => "age_circumference",
            Self::Circumference => "circumference",
            Self::Clothed => "clothed",
            Self::SumOnly => "sum_only",
        }
    }

    /// Regression-term label as printed in the literature
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Age => "S, S², age",
            Self::AgeCircumference => "S, S², age, C",
            Self::Circumference => "S, S², C",
            Self::Clothed => "clothed",
            Self::SumOnly => "S, S²",
        }
    }
}

impl FromStr for MethodVariation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        match key.as_str() {
            "age" | "s,s²,age" | "s,s2,age" => Ok(Self::Age),
            "age_circumference" | "s,s²,age,c" | "s,s2,age,c" => Ok(Self::AgeCircumference),
            "circumference" | "s,s²,c" | "s,s2,c" => Ok(Self::Circumference),
            "clothed" => Ok(Self::Clothed),
            "sum_only" | "s,s²" | "s,s2" => Ok(Self::SumOnly),
            _ => Err(AppError::unknown_selector(
                "method variation",
                s.trim(),
                "age, age_circumference, circumference, clothed, sum_only",
            )),
        }
    }
}

/// Body fat estimation method
///
/// # Scientific References
///
/// - Jackson, A.S. & Pollock, M.L. (1978). "Generalized equations for predicting body density of men." *Br J Nutr*, 40(3), 497-504.
/// - Jackson, A.S., Pollock, M.L. & Ward, A. (1980). "Generalized equations for predicting body density of women." *Med Sci Sports Exerc*, 12(3), 175-181.
/// - Durnin, J.V. & Womersley, J. (1974). "Body fat assessed from total body density." *Br J Nutr*, 32(1), 77-97.
/// - Hodgdon, J.A. & Beckett, M.B. (1984). "Prediction of percent body fat for U.S. Navy men and women." NHRC Report 84-29.
/// - Jackson, A.S. et al. (2002). "The effect of sex, age and race on estimating percentage body fat from BMI: the Heritage Family Study." *Int J Obes*, 26(6), 789-796.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum BodyCompositionMethod {
    /// Jackson/Pollock 3-site caliper (male)
    JacksonPollock3Male,
    /// Jackson/Pollock 3-site caliper (female)
    JacksonPollock3Female,
    /// Jackson/Pollock 4-site caliper
    JacksonPollock4,
    /// Jackson/Pollock 7-site caliper
    JacksonPollock7,
    /// Durnin/Womersley 4-site caliper
    DurninWomersley,
    /// Parillo 9-site caliper
    Parillo,
    /// Covert Bailey tape
    CovertBailey,
    /// U.S. Navy tape
    UsNavy,
    /// YMCA tape
    Ymca,
    /// Modified YMCA tape
    ModifiedYmca,
    /// Heritage BMI to body fat
    HeritageBmi,
    /// Cunningham BMR equation solved for lean mass
    ReversedCunningham,
}

impl BodyCompositionMethod {
    /// Every method in declaration order
    pub const ALL: [Self; 12] = [
        Self::JacksonPollock3Male,
        Self::JacksonPollock3Female,
        Self::JacksonPollock4,
        Self::JacksonPollock7,
        Self::DurninWomersley,
        Self::Parillo,
        Self::CovertBailey,
        Self::UsNavy,
        Self::Ymca,
        Self::ModifiedYmca,
        Self::HeritageBmi,
        Self::ReversedCunningham,
    ];

    /// Variations offered by the method, default first
    #[must_use]
    pub const fn variations(&self) -> &'static [MethodVariation] {
        use MethodVariation::{Age, AgeCircumference, Circumference, Clothed, SumOnly};
        match self {
            Self::JacksonPollock3Male | Self::JacksonPollock3Female => {
                &[Age, AgeCircumference, Clothed]
            }
            Self::JacksonPollock4 => &[Age, Circumference, AgeCircumference, SumOnly],
            Self::JacksonPollock7 => &[Age, Circumference, AgeCircumference],
            _ => &[],
        }
    }

    /// Variation used when the caller passes none
    #[must_use]
    pub fn default_variation(&self) -> Option<MethodVariation> {
        self.variations().first().copied()
    }

    /// Sex the whole method is restricted to, if any
    #[must_use]
    pub const fn gender_restriction(&self) -> Option<Gender> {
        match self {
            Self::JacksonPollock3Male => Some(Gender::Male),
            Self::JacksonPollock3Female => Some(Gender::Female),
            _ => None,
        }
    }

    /// Inputs the method needs for a variation and sex
    ///
    /// `None` means the combination cannot be evaluated at all: the variation
    /// is not offered, or the formula is restricted to the other sex.
    #[must_use]
    pub fn requirements(
        &self,
        variation: Option<MethodVariation>,
        gender: Gender,
    ) -> Option<MeasurementRequirements> {
        if self.gender_restriction().is_some_and(|only| only != gender) {
            return None;
        }
        let variation = self.resolve_variation(variation)?;
        match self {
            Self::JacksonPollock3Male
            | Self::JacksonPollock3Female
            | Self::JacksonPollock4
            | Self::JacksonPollock7
            | Self::DurninWomersley
            | Self::Parillo => skinfold::requirements(*self, variation, gender),
            Self::CovertBailey | Self::UsNavy | Self::Ymca | Self::ModifiedYmca => {
                Some(circumference::requirements(*self, gender))
            }
            Self::HeritageBmi => Some(MeasurementRequirements {
                needs_bmi: true,
                ..MeasurementRequirements::default()
            }),
            Self::ReversedCunningham => Some(MeasurementRequirements {
                needs_bmr: true,
                ..MeasurementRequirements::default()
            }),
        }
    }

    /// Resolve the caller's variation against what the method offers
    ///
    /// Returns `Some(None)` for methods without variations.
    fn resolve_variation(
        &self,
        requested: Option<MethodVariation>,
    ) -> Option<Option<MethodVariation>> {
        if self.variations().is_empty() {
            return Some(None);
        }
        match requested {
            None => Some(self.default_variation()),
            Some(v) if self.variations().contains(&v) => Some(Some(v)),
            Some(_) => None,
        }
    }

    /// Get method name for logging and serialization
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::JacksonPollock3Male => "jackson_pollock_3_male",
            Self::JacksonPollock3Female => "jackson_pollock_3_female",
            Self::JacksonPollock4 => "jackson_pollock_4",
            Self::JacksonPollock7 => "jackson_pollock_7",
            Self::DurninWomersley => "durnin_womersley",
            Self::Parillo => "parillo",
            Self::CovertBailey => "covert_bailey",
            Self::UsNavy => "us_navy",
            Self::Ymca => "ymca",
            Self::ModifiedYmca => "modified_ymca",
            Self::HeritageBmi => "heritage_bmi",
            Self::ReversedCunningham => "reversed_cunningham",
        }
    }

    /// Display title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::JacksonPollock3Male => "Jackson/Pollock 3 Caliper Method (Male)",
            Self::JacksonPollock3Female => "Jackson/Pollock 3 Caliper Method (Female)",
            Self::JacksonPollock4 => "Jackson/Pollock 4 Caliper Method",
            Self::JacksonPollock7 => "Jackson/Pollock 7 Caliper Method",
            Self::DurninWomersley => "Durnin/Womersley Caliper Method",
            Self::Parillo => "Parillo Caliper Method",
            Self::CovertBailey => "Covert Bailey Measuring Tape Method",
            Self::UsNavy => "U.S. Navy Body Fat Formula",
            Self::Ymca => "YMCA Measuring Tape Method",
            Self::ModifiedYmca => "Modified YMCA Measuring Tape Method",
            Self::HeritageBmi => "Heritage BMI to Body Fat Method",
            Self::ReversedCunningham => "Reversed Cunningham equation",
        }
    }
}

impl FromStr for BodyCompositionMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let key = trimmed.to_lowercase().replace(['-', ' ', '/', '.'], "_");
        Self::ALL
            .into_iter()
            .find(|m| m.name() == key || m.title().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                AppError::unknown_selector(
                    "body composition method",
                    trimmed,
                    "jackson_pollock_3_male, jackson_pollock_3_female, jackson_pollock_4, \
                     jackson_pollock_7, durnin_womersley, parillo, covert_bailey, us_navy, ymca, \
                     modified_ymca, heritage_bmi, reversed_cunningham",
                )
            })
    }
}

/// Inputs a method/variation needs before it can be evaluated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeasurementRequirements {
    /// Skinfold sites that must be present
    pub caliper: &'static [CaliperSite],
    /// Circumference sites that must be present
    pub tape: &'static [TapeSite],
    /// Precomputed BMI required
    pub needs_bmi: bool,
    /// Precomputed BMR required
    pub needs_bmr: bool,
}

impl MeasurementRequirements {
    /// Whether `params` supplies everything listed
    #[must_use]
    pub fn satisfied_by(&self, params: &BodyCompositionParams) -> bool {
        params.caliper.has_all(self.caliper)
            && params.tape.has_all(self.tape)
            && (!self.needs_bmi || params.bmi().is_some())
            && (!self.needs_bmr || params.bmr().is_some())
    }
}

/// Everything a body composition method may read
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyCompositionParams {
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub gender: Gender,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Precomputed body mass index
    #[serde(default)]
    pub bmi: Option<f64>,
    /// Precomputed BMR (kcal/day), for the reversed Cunningham method
    #[serde(default)]
    pub bmr: Option<f64>,
    /// Skinfold measurements
    #[serde(default)]
    pub caliper: CaliperMeasurements,
    /// Circumference measurements
    #[serde(default)]
    pub tape: TapeMeasurements,
}

impl BodyCompositionParams {
    /// Build parameters from a validated profile and measurements
    #[must_use]
    pub fn from_profile(
        profile: &AnthropometricProfile,
        caliper: CaliperMeasurements,
        tape: TapeMeasurements,
    ) -> Self {
        Self {
            age: profile.age(),
            gender: profile.gender(),
            weight_kg: profile.weight_kg(),
            height_cm: profile.height_cm(),
            bmi: None,
            bmr: None,
            caliper,
            tape,
        }
    }

    /// Attach a precomputed BMI
    #[must_use]
    pub const fn with_bmi(mut self, bmi: f64) -> Self {
        self.bmi = Some(bmi);
        self
    }

    /// Attach a precomputed BMR
    #[must_use]
    pub const fn with_bmr(mut self, bmr: f64) -> Self {
        self.bmr = Some(bmr);
        self
    }

    /// Age as a float for regression terms
    #[must_use]
    pub fn age_years(&self) -> f64 {
        f64::from(self.age)
    }

    /// BMI when present and positive
    #[must_use]
    pub fn bmi(&self) -> Option<f64> {
        self.bmi.filter(|v| v.is_finite() && *v > 0.0)
    }

    /// BMR when present and positive
    #[must_use]
    pub fn bmr(&self) -> Option<f64> {
        self.bmr.filter(|v| v.is_finite() && *v > 0.0)
    }
}

/// Raw method output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum BodyCompositionEstimate {
    /// Body density (g/cm³), needs a density conversion
    Density(f64),
    /// Body fat percentage
    BodyFatPercent(f64),
}

impl BodyCompositionEstimate {
    /// Body fat percentage, converting density with the chosen equation
    #[must_use]
    pub fn body_fat_percent(&self, conversion: DensityConversion) -> f64 {
        match self {
            Self::Density(density) => conversion.convert(*density),
            Self::BodyFatPercent(percent) => *percent,
        }
    }

    /// Density, if the method produced one
    #[must_use]
    pub const fn density(&self) -> Option<f64> {
        match self {
            Self::Density(density) => Some(*density),
            Self::BodyFatPercent(_) => None,
        }
    }
}

/// Compute the raw estimate of a body composition method
///
/// `variation` of `None` selects the method's default variation.
///
/// # Example
///
/// ```rust
/// use calculeat_core::{CaliperMeasurements, Gender, TapeMeasurements};
/// use calculeat_intelligence::algorithms::{
///     compute_body_fat, BodyCompositionMethod, BodyCompositionParams, DensityConversion,
/// };
///
/// let params = BodyCompositionParams {
///     age: 30,
///     gender: Gender::Male,
///     weight_kg: 80.0,
///     height_cm: 180.0,
///     bmi: None,
///     bmr: None,
///     caliper: CaliperMeasurements {
///         chest: Some(10.0),
///         abdominal: Some(15.0),
///         thigh: Some(12.0),
///         ..CaliperMeasurements::default()
///     },
///     tape: TapeMeasurements::default(),
/// };
/// let estimate = compute_body_fat(BodyCompositionMethod::JacksonPollock3Male, None, &params);
/// let body_fat = estimate.map(|e| e.body_fat_percent(DensityConversion::Siri));
/// assert!(body_fat.is_some_and(|bf| (bf - 11.2).abs() < 0.1));
/// ```
#[must_use]
pub fn compute_body_fat(
    method: BodyCompositionMethod,
    variation: Option<MethodVariation>,
    params: &BodyCompositionParams,
) -> Option<BodyCompositionEstimate> {
    let Some(resolved) = method.resolve_variation(variation) else {
        debug!(
            method = method.name(),
            variation = ?variation,
            "Body composition unavailable: variation not offered by method"
        );
        return None;
    };
    if method
        .gender_restriction()
        .is_some_and(|only| only != params.gender)
    {
        debug!(
            method = method.name(),
            gender = params.gender.name(),
            "Body composition unavailable: method restricted to the other sex"
        );
        return None;
    }

    let estimate = match method {
        BodyCompositionMethod::JacksonPollock3Male
        | BodyCompositionMethod::JacksonPollock3Female
        | BodyCompositionMethod::JacksonPollock4
        | BodyCompositionMethod::JacksonPollock7
        | BodyCompositionMethod::DurninWomersley
        | BodyCompositionMethod::Parillo => skinfold::estimate(method, resolved, params),
        BodyCompositionMethod::CovertBailey => circumference::covert_bailey(params),
        BodyCompositionMethod::UsNavy => circumference::us_navy(params),
        BodyCompositionMethod::Ymca => circumference::ymca(params),
        BodyCompositionMethod::ModifiedYmca => circumference::modified_ymca(params),
        BodyCompositionMethod::HeritageBmi => derived::heritage_bmi(params),
        BodyCompositionMethod::ReversedCunningham => derived::reversed_cunningham(params),
    };

    if estimate.is_none() {
        debug!(
            method = method.name(),
            variation = ?resolved,
            "Body composition unavailable: missing measurements"
        );
    }
    estimate
}

/// Compute body fat percentage, converting density-returning methods
#[must_use]
pub fn compute_body_fat_percent(
    method: BodyCompositionMethod,
    variation: Option<MethodVariation>,
    params: &BodyCompositionParams,
    conversion: DensityConversion,
) -> Option<f64> {
    compute_body_fat(method, variation, params).map(|e| e.body_fat_percent(conversion))
}
