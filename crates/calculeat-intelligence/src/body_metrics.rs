// ABOUTME: Derived body metrics: BMI, ideal weight, lean and fat mass, FFMI, categories, time to goal
// ABOUTME: Pure helpers layered on top of a known weight, height, and body fat percentage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::algorithms::brackets;
use calculeat_core::constants::body_metrics::{
    BMI_IDEAL_UPPER, BMI_NORMAL, BMI_OVERWEIGHT, BMI_UNDERWEIGHT, FFMI_HEIGHT_SLOPE,
    FFMI_REFERENCE_HEIGHT_M, WEEKS_PER_MONTH,
};
use calculeat_core::constants::energy::KCAL_PER_KG_BODY_WEIGHT;
use calculeat_core::constants::fat_oxidation::{
    OBSERVED_KCAL_PER_KG_FAT, PRACTICAL_KCAL_PER_KG_FAT, THEORETICAL_KCAL_PER_KG_FAT,
};
use calculeat_core::units::{cm_to_m, round_whole};
use calculeat_core::{AnthropometricProfile, Gender};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lean (fat-free) mass in kg
#[must_use]
pub fn lean_mass(weight_kg: f64, body_fat_percent: f64) -> f64 {
    weight_kg * (1.0 - body_fat_percent / 100.0)
}

/// Fat mass in kg
#[must_use]
pub fn fat_mass(weight_kg: f64, body_fat_percent: f64) -> f64 {
    weight_kg * body_fat_percent / 100.0
}

/// Body mass index (kg/m²)
#[must_use]
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = cm_to_m(height_cm);
    weight_kg / (height_m * height_m)
}

/// WHO adult BMI classes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Below 18.5
    Underweight,
    /// 18.5 to below 25
    Normal,
    /// 25 to below 30
    Overweight,
    /// 30 and above
    Obese,
}

impl BmiCategory {
    const ALL: [Self; 4] = [Self::Underweight, Self::Normal, Self::Overweight, Self::Obese];
    const BOUNDS: [f64; 3] = [BMI_UNDERWEIGHT, BMI_NORMAL, BMI_OVERWEIGHT];

    /// Class containing `bmi`
    #[must_use]
    pub fn classify(bmi: f64) -> Self {
        brackets::select(bmi, &Self::BOUNDS, &Self::ALL)
            .copied()
            .unwrap_or(Self::Obese)
    }
}

/// Weight range giving a BMI of 18.5 to 24.9
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealWeightRange {
    /// Lower bound (kg)
    pub min_kg: f64,
    /// Upper bound (kg)
    pub max_kg: f64,
}

/// Healthy weight range for a height
#[must_use]
pub fn ideal_weight_range(height_cm: f64) -> IdealWeightRange {
    let height_m = cm_to_m(height_cm);
    let height_sq = height_m * height_m;
    IdealWeightRange {
        min_kg: BMI_UNDERWEIGHT * height_sq,
        max_kg: BMI_IDEAL_UPPER * height_sq,
    }
}

/// American Council on Exercise body fat classes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    /// Essential fat only
    Essential,
    /// Athletic
    Athletes,
    /// Fit
    Fitness,
    /// Average
    Average,
    /// Obese
    Obese,
}

impl BodyFatCategory {
    const ALL: [Self; 5] = [
        Self::Essential,
        Self::Athletes,
        Self::Fitness,
        Self::Average,
        Self::Obese,
    ];
    const MALE_BOUNDS: [f64; 4] = [6.0, 14.0, 18.0, 25.0];
    const FEMALE_BOUNDS: [f64; 4] = [14.0, 21.0, 25.0, 32.0];

    /// Class containing a body fat percentage
    #[must_use]
    pub fn classify(body_fat_percent: f64, gender: Gender) -> Self {
        let bounds = gender.select(&Self::MALE_BOUNDS, &Self::FEMALE_BOUNDS);
        brackets::select(body_fat_percent, bounds, &Self::ALL)
            .copied()
            .unwrap_or(Self::Obese)
    }
}

/// Fat-free mass index (kg/m²)
#[must_use]
pub fn ffmi(lean_mass_kg: f64, height_m: f64) -> f64 {
    lean_mass_kg / (height_m * height_m)
}

/// FFMI adjusted to a 1.8 m reference height
#[must_use]
pub fn normalized_ffmi(ffmi: f64, height_m: f64) -> f64 {
    FFMI_HEIGHT_SLOPE.mul_add(FFMI_REFERENCE_HEIGHT_M - height_m, ffmi)
}

/// Muscularity classes by normalized FFMI
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FfmiCategory {
    /// Below average
    BelowAverage,
    /// Average
    Average,
    /// Above average
    AboveAverage,
    /// Excellent
    Excellent,
    /// Superior
    Superior,
    /// Hard to reach without anabolic steroids
    SuspiciousSteroidUse,
    /// Very unlikely without anabolic steroids
    SteroidUseLikely,
}

impl FfmiCategory {
    const ALL: [Self; 7] = [
        Self::BelowAverage,
        Self::Average,
        Self::AboveAverage,
        Self::Excellent,
        Self::Superior,
        Self::SuspiciousSteroidUse,
        Self::SteroidUseLikely,
    ];
    const MALE_BOUNDS: [f64; 6] = [18.0, 20.0, 22.0, 23.0, 26.0, 28.0];
    const FEMALE_BOUNDS: [f64; 6] = [15.0, 17.0, 18.0, 19.0, 21.5, 25.0];

    /// Class containing an FFMI value
    #[must_use]
    pub fn classify(ffmi: f64, gender: Gender) -> Self {
        let bounds = gender.select(&Self::MALE_BOUNDS, &Self::FEMALE_BOUNDS);
        brackets::select(ffmi, bounds, &Self::ALL)
            .copied()
            .unwrap_or(Self::SteroidUseLikely)
    }
}

/// Estimated duration to reach a target weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeToGoal {
    /// Whole weeks, rounded up
    pub weeks: u32,
    /// Months at one decimal
    pub months: f64,
}

/// Weeks needed to move from `current_kg` to `target_kg` at a weekly rate
///
/// Returns `None` when the rate is zero or moves away from the target.
#[must_use]
pub fn weeks_to_goal(
    current_kg: f64,
    target_kg: f64,
    weekly_kg_change: f64,
) -> Option<TimeToGoal> {
    let delta = target_kg - current_kg;
    if delta.abs() < f64::EPSILON {
        return Some(TimeToGoal {
            weeks: 0,
            months: 0.0,
        });
    }
    if weekly_kg_change.abs() < f64::EPSILON || (delta > 0.0) != (weekly_kg_change > 0.0) {
        return None;
    }
    let weeks = (delta / weekly_kg_change).ceil();
    let months = (weeks / WEEKS_PER_MONTH * 10.0).round() / 10.0;
    Some(TimeToGoal {
        weeks: round_whole(weeks),
        months,
    })
}

/// Body weight change (kg) equivalent to an energy surplus or deficit
#[must_use]
pub fn calories_to_weight_kg(kcal: f64) -> f64 {
    kcal / KCAL_PER_KG_BODY_WEIGHT
}

/// Largest daily deficit the fat store can cover (kcal/day)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FatOxidationLimit {
    /// Recommended deficit ceiling, equal to `practical_max`
    pub kcal_deficit: u32,
    /// `practical_max` as a share of TDEE (%)
    pub percent_of_tdee: u32,
    /// 31 kcal per kg fat mass
    pub practical_max: u32,
    /// 69 kcal per kg fat mass
    pub observed_max: u32,
    /// 86 kcal per kg fat mass
    pub theoretical_max: u32,
}

/// Maximum fat metabolism for a body composition and energy expenditure
///
/// Returns `None` unless weight, lean mass, and TDEE are positive and some
/// fat mass remains.
#[must_use]
pub fn max_fat_metabolism(
    lean_mass_kg: f64,
    weight_kg: f64,
    tdee_kcal: f64,
) -> Option<FatOxidationLimit> {
    let fat_mass = weight_kg - lean_mass_kg;
    if lean_mass_kg <= 0.0 || weight_kg <= 0.0 || tdee_kcal <= 0.0 || fat_mass <= 0.0 {
        debug!(lean_mass_kg, weight_kg, tdee_kcal, "Fat oxidation limit unavailable");
        return None;
    }

    let practical = fat_mass * PRACTICAL_KCAL_PER_KG_FAT;
    Some(FatOxidationLimit {
        kcal_deficit: round_whole(practical),
        percent_of_tdee: round_whole(practical / tdee_kcal * 100.0),
        practical_max: round_whole(practical),
        observed_max: round_whole(fat_mass * OBSERVED_KCAL_PER_KG_FAT),
        theoretical_max: round_whole(fat_mass * THEORETICAL_KCAL_PER_KG_FAT),
    })
}

/// Everything derivable from a profile and a body fat estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    /// Body mass index
    pub bmi: f64,
    /// WHO class
    pub bmi_category: BmiCategory,
    /// Healthy weight range for the height
    pub ideal_weight: IdealWeightRange,
    /// Body fat percentage used for the rest
    pub body_fat_percent: Option<f64>,
    /// Lean mass (kg)
    pub lean_mass_kg: Option<f64>,
    /// Fat mass (kg)
    pub fat_mass_kg: Option<f64>,
    /// ACE class
    pub body_fat_category: Option<BodyFatCategory>,
    /// Fat-free mass index
    pub ffmi: Option<f64>,
    /// FFMI at reference height
    pub normalized_ffmi: Option<f64>,
    /// Muscularity class
    pub ffmi_category: Option<FfmiCategory>,
}

impl BodyMetrics {
    /// Derive metrics, using `body_fat_percent` or the profile's own value
    #[must_use]
    pub fn from_profile(profile: &AnthropometricProfile, body_fat_percent: Option<f64>) -> Self {
        let weight = profile.weight_kg();
        let height_m = cm_to_m(profile.height_cm());
        let body_mass_index = bmi(weight, profile.height_cm());
        let body_fat = body_fat_percent.or_else(|| profile.body_fat_percent());

        let lean = body_fat.map(|bf| lean_mass(weight, bf));
        let index = lean.map(|lbm| ffmi(lbm, height_m));
        let normalized = index.map(|value| normalized_ffmi(value, height_m));

        Self {
            bmi: body_mass_index,
            bmi_category: BmiCategory::classify(body_mass_index),
            ideal_weight: ideal_weight_range(profile.height_cm()),
            body_fat_percent: body_fat,
            lean_mass_kg: lean,
            fat_mass_kg: body_fat.map(|bf| fat_mass(weight, bf)),
            body_fat_category: body_fat.map(|bf| BodyFatCategory::classify(bf, profile.gender())),
            ffmi: index,
            normalized_ffmi: normalized,
            ffmi_category: normalized.map(|value| FfmiCategory::classify(value, profile.gender())),
        }
    }
}
