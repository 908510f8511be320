// ABOUTME: Macro allocator turning a calorie budget into fat, carb, and protein gram ranges
// ABOUTME: Custom percentage mode, automatic goal-based mode, presets, range checks, and unit conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Allocator
//!
//! Two modes:
//!
//! - **Custom**: each macro gets a `[min%, max%]` band. Gram bounds are computed
//!   independently per macro (`min` from the calorie minimum, `max` from the
//!   calorie maximum); the percentages do not have to sum to 100.
//! - **Auto**: protein by body weight and goal, fat as a fixed share of
//!   calories, carbohydrates fill the remainder.
//!
//! [`MacroMode`] turns a named mode into custom bands plus a calorie band
//! relative to TDEE. The `*_requirement` helpers give evidence-based gram
//! targets for each macro on their own.

use super::calorie_goal::{CalorieGoal, CalorieRange};
use calculeat_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use calculeat_core::constants::macro_modes::{
    FAT_FLOOR_PER_KG_FEMALE, FAT_FLOOR_PER_KG_MALE, FAT_MAX_PERCENT, FAT_MIN_PERCENT_FEMALE,
    FAT_MIN_PERCENT_MALE, NNR_CALORIES, OFF_SEASON_CALORIES, OFF_SEASON_FAT_PER_KG,
    OFF_SEASON_PROTEIN_PER_KG, ON_SEASON_CALORIES, ON_SEASON_FAT_FRACTION,
    ON_SEASON_PROTEIN_PER_KG_FFM,
};
use calculeat_core::constants::macros::{
    FAT_FRACTION_LOSE, FAT_FRACTION_OTHER, PROTEIN_PER_KG_GAIN, PROTEIN_PER_KG_LOSE,
    PROTEIN_PER_KG_MAINTAIN,
};
use calculeat_core::units::round_whole;
use calculeat_core::{AppError, AppResult, Gender};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Fat, carbohydrate, or protein
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Macronutrient {
    /// Dietary fat
    Fat,
    /// Carbohydrates
    Carbs,
    /// Protein
    Protein,
}

impl Macronutrient {
    /// Energy density (kcal/g)
    #[must_use]
    pub const fn kcal_per_gram(&self) -> f64 {
        match self {
            Self::Fat => KCAL_PER_GRAM_FAT,
            Self::Carbs => KCAL_PER_GRAM_CARBS,
            Self::Protein => KCAL_PER_GRAM_PROTEIN,
        }
    }
}

/// Percentage-of-calories band for one macro
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRange {
    /// Lower bound (% of calories)
    pub min_percent: f64,
    /// Upper bound (% of calories)
    pub max_percent: f64,
}

impl MacroRange {
    /// Band from two percentages
    #[must_use]
    pub const fn new(min_percent: f64, max_percent: f64) -> Self {
        Self {
            min_percent,
            max_percent,
        }
    }

    /// Midpoint percentage
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min_percent + self.max_percent) / 2.0
    }
}

/// Bands for all three macros
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRanges {
    /// Fat band
    pub fat: MacroRange,
    /// Carbohydrate band
    pub carbs: MacroRange,
    /// Protein band
    pub protein: MacroRange,
}

impl Default for MacroRanges {
    fn default() -> Self {
        Self {
            fat: MacroRange::new(25.0, 40.0),
            carbs: MacroRange::new(45.0, 60.0),
            protein: MacroRange::new(10.0, 20.0),
        }
    }
}

/// Named macro distributions
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MacroPreset {
    /// Fat 25-35%, carbs 40-50%, protein 20-30%
    #[default]
    Balanced,
    /// Fat 35-45%, carbs 25-35%, protein 25-35%
    LowCarb,
    /// Fat 20-30%, carbs 50-60%, protein 15-25%
    HighCarb,
    /// Fat 25-35%, carbs 30-40%, protein 30-40%
    HighProtein,
}

impl MacroPreset {
    /// Percentage bands for the preset
    #[must_use]
    pub const fn ranges(&self) -> MacroRanges {
        let (fat, carbs, protein) = match self {
            Self::Balanced => ((25.0, 35.0), (40.0, 50.0), (20.0, 30.0)),
            Self::LowCarb => ((35.0, 45.0), (25.0, 35.0), (25.0, 35.0)),
            Self::HighCarb => ((20.0, 30.0), (50.0, 60.0), (15.0, 25.0)),
            Self::HighProtein => ((25.0, 35.0), (30.0, 40.0), (30.0, 40.0)),
        };
        MacroRanges {
            fat: MacroRange::new(fat.0, fat.1),
            carbs: MacroRange::new(carbs.0, carbs.1),
            protein: MacroRange::new(protein.0, protein.1),
        }
    }

    /// Get preset name for logging and serialization
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::LowCarb => "low_carb",
            Self::HighCarb => "high_carb",
            Self::HighProtein => "high_protein",
        }
    }
}

impl FromStr for MacroPreset {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "balanced" => Ok(Self::Balanced),
            "low_carb" => Ok(Self::LowCarb),
            "high_carb" => Ok(Self::HighCarb),
            "high_protein" => Ok(Self::HighProtein),
            _ => Err(AppError::unknown_selector(
                "macro preset",
                s.trim(),
                "balanced, low_carb, high_carb, high_protein",
            )),
        }
    }
}

/// Named calorie band and macro distribution
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MacroMode {
    /// Nordic Nutrition Recommendations at maintenance
    #[default]
    Nnr,
    /// Bodybuilding bulk, 10-20% over TDEE
    OffSeason,
    /// Contest preparation cut, 20-25% under TDEE
    OnSeason,
}

/// What a [`MacroMode`] needs to size its bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroModeInputs {
    /// Body weight (kg), read by the off-season mode
    pub weight_kg: f64,
    /// Fat-free mass (kg), required by the on-season mode
    #[serde(default)]
    pub fat_free_mass_kg: Option<f64>,
    /// Lower edge of the calorie band (kcal/day)
    pub calories_min: f64,
    /// Upper edge of the calorie band (kcal/day)
    pub calories_max: f64,
}

/// Bands produced by a [`MacroMode`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroModeTargets {
    /// Mode that produced the targets
    pub mode: MacroMode,
    /// Weight goal the mode implies
    pub goal: CalorieGoal,
    /// Percentage bands; carbohydrates take the remainder of fat and protein
    pub ranges: MacroRanges,
    /// Calorie band as multiples of TDEE, `(min, max)`
    pub calorie_multipliers: (f64, f64),
}

impl MacroMode {
    /// Every mode in declaration order
    pub const ALL: [Self; 3] = [Self::Nnr, Self::OffSeason, Self::OnSeason];

    /// Get mode name for logging and serialization
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Nnr => "nnr",
            Self::OffSeason => "off_season",
            Self::OnSeason => "on_season",
        }
    }

    /// Weight goal the mode implies
    #[must_use]
    pub const fn goal(&self) -> CalorieGoal {
        match self {
            Self::Nnr => CalorieGoal::Maintain,
            Self::OffSeason => CalorieGoal::Gain,
            Self::OnSeason => CalorieGoal::Lose,
        }
    }

    /// Calorie band as multiples of TDEE, `(min, max)`
    #[must_use]
    pub const fn calorie_multipliers(&self) -> (f64, f64) {
        match self {
            Self::Nnr => NNR_CALORIES,
            Self::OffSeason => OFF_SEASON_CALORIES,
            Self::OnSeason => ON_SEASON_CALORIES,
        }
    }

    /// Calorie band for a TDEE, rounded to whole kcal
    #[must_use]
    pub fn calorie_range(&self, tdee: u32) -> (u32, u32) {
        let (min, max) = self.calorie_multipliers();
        let tdee = f64::from(tdee);
        (round_whole(tdee * min), round_whole(tdee * max))
    }

    /// Percentage bands for a calorie band
    ///
    /// The off-season mode sets fat and protein in g/kg of body weight; the
    /// on-season mode sets protein in g/kg of fat-free mass and fat as a share
    /// of calories. Gram floors convert against `calories_min` and gram
    /// ceilings against `calories_max`, so the carbohydrate band is what the
    /// other two leave over.
    ///
    /// # Errors
    ///
    /// - `ErrorCode::InvalidInput` when the calorie band, or the body weight
    ///   the off-season mode reads, is not positive and finite
    /// - `ErrorCode::MissingRequiredField` when the on-season mode has no
    ///   positive fat-free mass
    pub fn apply(&self, inputs: &MacroModeInputs) -> AppResult<MacroModeTargets> {
        let positive = |value: f64| value.is_finite() && value > 0.0;
        if !positive(inputs.calories_min) || !positive(inputs.calories_max) {
            return Err(AppError::invalid_input(format!(
                "Calorie band must be positive, got {} to {}",
                inputs.calories_min, inputs.calories_max
            )));
        }
        let percent_of = |grams: f64, macronutrient: Macronutrient, calories: f64| {
            grams * macronutrient.kcal_per_gram() / calories * 100.0
        };

        let (fat, protein) = match self {
            Self::Nnr => {
                let ranges = MacroRanges::default();
                (ranges.fat, ranges.protein)
            }
            Self::OffSeason => {
                if !positive(inputs.weight_kg) {
                    return Err(AppError::invalid_input(format!(
                        "Body weight must be positive, got {}",
                        inputs.weight_kg
                    )));
                }
                let weight = inputs.weight_kg;
                let fat = OFF_SEASON_FAT_PER_KG;
                let protein = OFF_SEASON_PROTEIN_PER_KG;
                (
                    MacroRange::new(
                        percent_of(weight * fat.0, Macronutrient::Fat, inputs.calories_min),
                        percent_of(weight * fat.1, Macronutrient::Fat, inputs.calories_max),
                    ),
                    MacroRange::new(
                        percent_of(weight * protein.0, Macronutrient::Protein, inputs.calories_min),
                        percent_of(weight * protein.1, Macronutrient::Protein, inputs.calories_max),
                    ),
                )
            }
            Self::OnSeason => {
                let ffm = inputs
                    .fat_free_mass_kg
                    .filter(|kg| positive(*kg))
                    .ok_or_else(|| AppError::missing_field("fat_free_mass_kg"))?;
                let protein = ON_SEASON_PROTEIN_PER_KG_FFM;
                (
                    MacroRange::new(
                        ON_SEASON_FAT_FRACTION.0 * 100.0,
                        ON_SEASON_FAT_FRACTION.1 * 100.0,
                    ),
                    MacroRange::new(
                        percent_of(ffm * protein.0, Macronutrient::Protein, inputs.calories_min),
                        percent_of(ffm * protein.1, Macronutrient::Protein, inputs.calories_max),
                    ),
                )
            }
        };
        let carbs = match self {
            Self::Nnr => MacroRanges::default().carbs,
            Self::OffSeason | Self::OnSeason => MacroRange::new(
                100.0 - (fat.max_percent + protein.max_percent),
                100.0 - (fat.min_percent + protein.min_percent),
            ),
        };

        Ok(MacroModeTargets {
            mode: *self,
            goal: self.goal(),
            ranges: MacroRanges {
                fat,
                carbs,
                protein,
            },
            calorie_multipliers: self.calorie_multipliers(),
        })
    }
}

impl FromStr for MacroMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "nnr" => Ok(Self::Nnr),
            "off_season" | "offseason" => Ok(Self::OffSeason),
            "on_season" | "onseason" => Ok(Self::OnSeason),
            _ => Err(AppError::unknown_selector(
                "macro mode",
                s.trim(),
                "nnr, off_season, on_season",
            )),
        }
    }
}

/// Training load used to pick a protein band
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrainingLoad {
    /// Little or no training
    #[default]
    Sedentary,
    /// Regular training
    Active,
    /// Hard training most days
    VeryActive,
}

/// Protein band in grams per day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProteinRequirement {
    /// Lower bound (g)
    pub min_grams: u32,
    /// Upper bound (g)
    pub max_grams: u32,
    /// Lower bound per kg of reference weight
    pub min_per_kg: f64,
    /// Upper bound per kg of reference weight
    pub max_per_kg: f64,
}

/// Protein band for a goal and training load
///
/// Scales with fat-free mass when known, else with body weight.
#[must_use]
pub fn protein_requirement(
    body_weight_kg: f64,
    fat_free_mass_kg: Option<f64>,
    goal: CalorieGoal,
    load: TrainingLoad,
) -> ProteinRequirement {
    let (min_per_kg, max_per_kg) = match (goal, load) {
        (CalorieGoal::Lose, TrainingLoad::Sedentary) => (1.6, 2.2),
        (CalorieGoal::Lose, TrainingLoad::Active) => (2.0, 2.4),
        (CalorieGoal::Lose, TrainingLoad::VeryActive) => (2.2, 2.7),
        (CalorieGoal::Gain, TrainingLoad::Sedentary) => (1.4, 1.8),
        (CalorieGoal::Gain, TrainingLoad::Active) => (1.6, 2.2),
        (CalorieGoal::Gain, TrainingLoad::VeryActive) => (1.8, 2.4),
        (CalorieGoal::Maintain, TrainingLoad::Sedentary) => (1.2, 1.6),
        (CalorieGoal::Maintain, TrainingLoad::Active) => (1.4, 2.0),
        (CalorieGoal::Maintain, TrainingLoad::VeryActive) => (1.6, 2.2),
    };
    let reference = fat_free_mass_kg
        .filter(|kg| *kg > 0.0)
        .unwrap_or(body_weight_kg);

    ProteinRequirement {
        min_grams: round_whole(min_per_kg * reference),
        max_grams: round_whole(max_per_kg * reference),
        min_per_kg,
        max_per_kg,
    }
}

/// Fat band in grams per day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FatRequirement {
    /// Lower bound (g), never below the per-kg floor
    pub min_grams: u32,
    /// Upper bound (g)
    pub max_grams: u32,
    /// Lower bound (% of calories)
    pub min_percent: f64,
    /// Upper bound (% of calories)
    pub max_percent: f64,
}

/// Fat band for hormonal health
///
/// Women get a 25% minimum and a 0.8 g/kg floor; men 20% and 0.7 g/kg. The
/// ceiling is 40% for both.
#[must_use]
pub fn fat_requirement(body_weight_kg: f64, gender: Gender, total_kcal: f64) -> FatRequirement {
    let min_percent = gender.select(FAT_MIN_PERCENT_MALE, FAT_MIN_PERCENT_FEMALE);
    let floor_grams =
        body_weight_kg * gender.select(FAT_FLOOR_PER_KG_MALE, FAT_FLOOR_PER_KG_FEMALE);
    let grams_at = |percent: f64| total_kcal * percent / 100.0 / KCAL_PER_GRAM_FAT;

    FatRequirement {
        min_grams: round_whole(grams_at(min_percent).max(floor_grams)),
        max_grams: round_whole(grams_at(FAT_MAX_PERCENT)),
        min_percent,
        max_percent: FAT_MAX_PERCENT,
    }
}

/// Carbohydrates filling the calories protein and fat leave over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarbRequirement {
    /// Grams
    pub grams: u32,
    /// Share of calories (%)
    pub percent: u32,
    /// Calories
    pub kcal: u32,
}

/// Carbohydrate grams left after protein and fat; zero when nothing is left
#[must_use]
pub fn carb_requirement(total_kcal: f64, protein_grams: u32, fat_grams: u32) -> CarbRequirement {
    let remaining = f64::from(fat_grams).mul_add(
        -KCAL_PER_GRAM_FAT,
        f64::from(protein_grams).mul_add(-KCAL_PER_GRAM_PROTEIN, total_kcal),
    );
    let percent = if total_kcal > 0.0 {
        remaining / total_kcal * 100.0
    } else {
        0.0
    };

    CarbRequirement {
        grams: round_whole(remaining / KCAL_PER_GRAM_CARBS),
        percent: round_whole(percent),
        kcal: round_whole(remaining),
    }
}

/// Gram and calorie allocation for one macro
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroAllocation {
    /// Lower gram bound
    pub min_grams: u32,
    /// Upper gram bound
    pub max_grams: u32,
    /// Displayed grams
    pub grams: u32,
    /// Calories from the displayed grams
    pub kcal: u32,
    /// Displayed share of calories (%)
    pub percent: f64,
}

impl MacroAllocation {
    fn fixed(grams: u32, macronutrient: Macronutrient, total_kcal: f64) -> Self {
        let kcal = round_whole(f64::from(grams) * macronutrient.kcal_per_gram());
        let percent = if total_kcal > 0.0 {
            f64::from(kcal) / total_kcal * 100.0
        } else {
            0.0
        };
        Self {
            min_grams: grams,
            max_grams: grams,
            grams,
            kcal,
            percent,
        }
    }
}

/// Allocation for all three macros
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Fat
    pub fat: MacroAllocation,
    /// Carbohydrates
    pub carbs: MacroAllocation,
    /// Protein
    pub protein: MacroAllocation,
}

impl MacroSplit {
    /// Calories from the displayed grams of all three macros
    #[must_use]
    pub const fn total_kcal(&self) -> u32 {
        self.fat.kcal + self.carbs.kcal + self.protein.kcal
    }
}

/// Custom percentage mode
///
/// `min_grams` derives from `range.min`, `max_grams` from `range.max`; the
/// displayed grams and percentage are the midpoints.
#[must_use]
pub fn allocate_custom(range: &CalorieRange, ranges: &MacroRanges) -> MacroSplit {
    let allocate = |band: &MacroRange, macronutrient: Macronutrient| {
        let kcal_per_gram = macronutrient.kcal_per_gram();
        let min_kcal = f64::from(range.min) * band.min_percent / 100.0;
        let max_kcal = f64::from(range.max) * band.max_percent / 100.0;
        let min_grams = round_whole(min_kcal / kcal_per_gram);
        let max_grams = round_whole(max_kcal / kcal_per_gram);
        let grams = round_whole(f64::from(min_grams + max_grams) / 2.0);
        MacroAllocation {
            min_grams,
            max_grams,
            grams,
            kcal: round_whole(f64::from(grams) * kcal_per_gram),
            percent: band.midpoint(),
        }
    };

    MacroSplit {
        fat: allocate(&ranges.fat, Macronutrient::Fat),
        carbs: allocate(&ranges.carbs, Macronutrient::Carbs),
        protein: allocate(&ranges.protein, Macronutrient::Protein),
    }
}

/// Per-goal protein and fat targets for [`allocate_auto_with`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoMacroSettings {
    /// Protein g/kg when losing
    pub protein_per_kg_lose: f64,
    /// Protein g/kg when gaining
    pub protein_per_kg_gain: f64,
    /// Protein g/kg when maintaining
    pub protein_per_kg_maintain: f64,
    /// Share of calories from fat when losing
    pub fat_fraction_lose: f64,
    /// Share of calories from fat otherwise
    pub fat_fraction_other: f64,
}

impl Default for AutoMacroSettings {
    fn default() -> Self {
        Self {
            protein_per_kg_lose: PROTEIN_PER_KG_LOSE,
            protein_per_kg_gain: PROTEIN_PER_KG_GAIN,
            protein_per_kg_maintain: PROTEIN_PER_KG_MAINTAIN,
            fat_fraction_lose: FAT_FRACTION_LOSE,
            fat_fraction_other: FAT_FRACTION_OTHER,
        }
    }
}

impl AutoMacroSettings {
    /// Protein g/kg and fat fraction for a goal
    #[must_use]
    pub const fn for_goal(&self, goal: CalorieGoal) -> (f64, f64) {
        match goal {
            CalorieGoal::Lose => (self.protein_per_kg_lose, self.fat_fraction_lose),
            CalorieGoal::Gain => (self.protein_per_kg_gain, self.fat_fraction_other),
            CalorieGoal::Maintain => (self.protein_per_kg_maintain, self.fat_fraction_other),
        }
    }
}

/// Automatic goal-based mode
///
/// Protein is 2.0, 1.8, or 1.6 g/kg for lose, gain, and maintain. Fat is 25%
/// of calories when losing and 30% otherwise. Carbohydrates take what is left,
/// never below zero.
///
/// # Example
///
/// ```rust
/// use calculeat_intelligence::algorithms::macros::allocate_auto;
/// use calculeat_intelligence::algorithms::CalorieGoal;
///
/// let split = allocate_auto(2529, 80.0, CalorieGoal::Lose);
/// assert_eq!((split.protein.grams, split.fat.grams, split.carbs.grams), (160, 70, 315));
/// ```
#[must_use]
pub fn allocate_auto(total_kcal: u32, weight_kg: f64, goal: CalorieGoal) -> MacroSplit {
    allocate_auto_with(total_kcal, weight_kg, goal, &AutoMacroSettings::default())
}

/// Automatic goal-based mode with explicit protein and fat targets
#[must_use]
pub fn allocate_auto_with(
    total_kcal: u32,
    weight_kg: f64,
    goal: CalorieGoal,
    settings: &AutoMacroSettings,
) -> MacroSplit {
    let total = f64::from(total_kcal);
    let (protein_per_kg, fat_fraction) = settings.for_goal(goal);

    let protein = MacroAllocation::fixed(
        round_whole(weight_kg * protein_per_kg),
        Macronutrient::Protein,
        total,
    );
    let fat = MacroAllocation::fixed(
        round_whole(total * fat_fraction / KCAL_PER_GRAM_FAT),
        Macronutrient::Fat,
        total,
    );
    let remaining = total - f64::from(protein.kcal) - f64::from(fat.kcal);
    let carbs = MacroAllocation::fixed(
        round_whole(remaining.max(0.0) / KCAL_PER_GRAM_CARBS),
        Macronutrient::Carbs,
        total,
    );

    MacroSplit {
        fat,
        carbs,
        protein,
    }
}

/// Advisory check on custom percentage bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRangeValidation {
    /// Whether 100% lies between the summed minimums and maximums
    pub valid: bool,
    /// Sum of the three minimum percentages
    pub min_sum: f64,
    /// Sum of the three maximum percentages
    pub max_sum: f64,
}

/// Check whether 100% of calories is reachable within the bands
///
/// The allocator itself never requires this; the result is for display.
#[must_use]
pub fn validate_macro_ranges(ranges: &MacroRanges) -> MacroRangeValidation {
    let min_sum = ranges.fat.min_percent + ranges.carbs.min_percent + ranges.protein.min_percent;
    let max_sum = ranges.fat.max_percent + ranges.carbs.max_percent + ranges.protein.max_percent;
    MacroRangeValidation {
        valid: min_sum <= 100.0 && max_sum >= 100.0,
        min_sum,
        max_sum,
    }
}

/// Unit a macro amount is expressed in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MacroUnit {
    /// Percent of total calories
    Percent,
    /// Grams
    Gram,
    /// Kilocalories
    Kcal,
    /// Grams per kg of body weight
    GramPerKgBodyWeight,
    /// Grams per kg of fat-free mass
    GramPerKgFfm,
}

/// Reference values a unit conversion may need
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroUnitContext {
    /// Macro being converted
    pub macronutrient: Macronutrient,
    /// Daily calories, for percentages
    pub total_kcal: Option<f64>,
    /// Body weight (kg), for g/kg
    pub body_weight_kg: Option<f64>,
    /// Fat-free mass (kg), for g/kg FFM
    pub fat_free_mass_kg: Option<f64>,
}

impl MacroUnitContext {
    fn reference(&self, unit: MacroUnit) -> Option<f64> {
        let value = match unit {
            MacroUnit::Percent => self.total_kcal,
            MacroUnit::GramPerKgBodyWeight => self.body_weight_kg,
            MacroUnit::GramPerKgFfm => self.fat_free_mass_kg,
            MacroUnit::Gram | MacroUnit::Kcal => Some(1.0),
        };
        value.filter(|v| v.is_finite() && *v > 0.0)
    }
}

/// Convert a macro amount between units, via grams
///
/// Returns `None` when the reference value a unit needs is missing.
#[must_use]
pub fn convert_macro_unit(
    value: f64,
    from: MacroUnit,
    to: MacroUnit,
    context: &MacroUnitContext,
) -> Option<f64> {
    if from == to {
        return Some(value);
    }
    let kcal_per_gram = context.macronutrient.kcal_per_gram();

    let grams = match from {
        MacroUnit::Gram => value,
        MacroUnit::Kcal => value / kcal_per_gram,
        MacroUnit::Percent => value / 100.0 * context.reference(from)? / kcal_per_gram,
        MacroUnit::GramPerKgBodyWeight | MacroUnit::GramPerKgFfm => {
            value * context.reference(from)?
        }
    };

    Some(match to {
        MacroUnit::Gram => grams,
        MacroUnit::Kcal => grams * kcal_per_gram,
        MacroUnit::Percent => grams * kcal_per_gram / context.reference(to)? * 100.0,
        MacroUnit::GramPerKgBodyWeight | MacroUnit::GramPerKgFfm => {
            grams / context.reference(to)?
        }
    })
}
