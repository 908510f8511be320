// ABOUTME: Physical activity level (PAL) systems converting BMR into total daily energy expenditure
// ABOUTME: FAO/WHO/UNU, DAMNRIPPED, Pro Physique, Fitness Stuff, basic multipliers, and custom PAL

//! TDEE / PAL Calculator
//!
//! Each [`PalSystem`] reads a different subset of [`ActivityInputs`]:
//!
//! | System        | Inputs read                                      |
//! |---------------|--------------------------------------------------|
//! | FAO/WHO/UNU   | gender, activity level                           |
//! | DAMNRIPPED    | activity level, intensity level                  |
//! | Pro Physique  | activity level, intensity, frequency, duration   |
//! | Fitness Stuff | frequency, duration, step bucket                 |
//! | Basic         | activity level                                   |
//! | Custom        | `custom_pal`                                     |

use super::brackets;
use calculeat_core::constants::activity_wizard::{
    DEFAULT_HOUSEHOLD_MET, DEFAULT_SPA_FACTOR, DEFAULT_TRAINING_MET, KCAL_PER_STEP,
    STANDING_KCAL_PER_HOUR,
};
use calculeat_core::units::round_whole;
use calculeat_core::{AppError, AppResult, Gender};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// FAO/WHO/UNU PAL by activity level
const FAO_MALE: [f64; 5] = [1.3, 1.6, 1.7, 2.1, 2.4];
const FAO_FEMALE: [f64; 5] = [1.3, 1.5, 1.6, 1.9, 2.2];

/// Widely circulated sedentary-to-extreme multipliers
const BASIC_MULTIPLIERS: [f64; 5] = [1.2, 1.375, 1.55, 1.725, 1.9];

/// DAMNRIPPED PAL indexed `[activity level][intensity level]`
const DAMNRIPPED: [[f64; 5]; 5] = [
    [1.1, 1.2, 1.35, 1.45, 1.55],
    [1.2, 1.4, 1.45, 1.55, 1.6],
    [1.4, 1.45, 1.6, 1.65, 1.7],
    [1.6, 1.7, 1.75, 1.8, 1.9],
    [1.8, 1.9, 2.0, 2.1, 2.2],
];

/// Pro Physique base multiplier by activity level
const PRO_PHYSIQUE_BASE: [f64; 5] = [1.15, 1.25, 1.35, 1.4, 1.5];
/// Pro Physique training burn (kcal/min) by intensity level
const PRO_PHYSIQUE_KCAL_PER_MINUTE: [f64; 5] = [0.0, 5.0, 7.5, 10.0, 12.0];

/// Fitness Stuff weekly training hours brackets
const FITNESS_STUFF_HOUR_BRACKETS: [f64; 4] = [1.0, 3.0, 5.5, 8.0];
const FITNESS_STUFF_MULTIPLIERS: [f64; 5] = [1.2, 1.3, 1.4, 1.5, 1.6];

const DAYS_PER_WEEK: f64 = 7.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Occupational and lifestyle activity outside training
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Desk job, little walking
    #[default]
    Sedentary,
    /// Light activity most days
    LightlyActive,
    /// On your feet much of the day
    ModeratelyActive,
    /// Physical job or daily hard exercise
    VeryActive,
    /// Heavy labor or twice-daily training
    ExtremelyActive,
}

impl ActivityLevel {
    /// Every level from least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtremelyActive,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    /// Get level name for logging and serialization
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
            Self::ExtremelyActive => "extremely_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|level| level.name() == key)
            .ok_or_else(|| {
                AppError::unknown_selector(
                    "activity level",
                    s.trim(),
                    "sedentary, lightly_active, moderately_active, very_active, extremely_active",
                )
            })
    }
}

/// Training intensity
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    /// No structured training
    #[default]
    None,
    /// Easy sessions
    Light,
    /// Moderate sessions
    Moderate,
    /// Hard sessions
    Difficult,
    /// Very hard sessions
    Intense,
}

impl IntensityLevel {
    /// Every level from easiest to hardest
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Light,
        Self::Moderate,
        Self::Difficult,
        Self::Intense,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    /// Get intensity name for logging and serialization
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Difficult => "difficult",
            Self::Intense => "intense",
        }
    }
}

impl FromStr for IntensityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.name() == key)
            .ok_or_else(|| {
                AppError::unknown_selector(
                    "intensity level",
                    s.trim(),
                    "none, light, moderate, difficult, intense",
                )
            })
    }
}

/// Average daily step count bucket
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StepBucket {
    /// Fewer than 5,000 steps
    #[default]
    Steps3000To4999,
    /// 5,000 to 6,999 steps
    Steps5000To6999,
    /// 7,000 to 8,999 steps
    Steps7000To8999,
    /// 9,000 to 10,999 steps
    Steps9000To10999,
    /// 11,000 to 12,999 steps
    Steps11000To12999,
    /// 13,000 steps or more
    Steps13000Plus,
}

impl StepBucket {
    /// Every bucket in ascending order
    pub const ALL: [Self; 6] = [
        Self::Steps3000To4999,
        Self::Steps5000To6999,
        Self::Steps7000To8999,
        Self::Steps9000To10999,
        Self::Steps11000To12999,
        Self::Steps13000Plus,
    ];

    const STEP_BRACKETS: [f64; 5] = [5_000.0, 7_000.0, 9_000.0, 11_000.0, 13_000.0];

    /// Bucket containing a daily step count
    #[must_use]
    pub fn for_steps(steps: u32) -> Self {
        let index = brackets::bracket_index(f64::from(steps), &Self::STEP_BRACKETS);
        Self::ALL.get(index).copied().unwrap_or(Self::Steps13000Plus)
    }

    /// PAL increment added by the Fitness Stuff system
    #[must_use]
    pub const fn pal_increment(&self) -> f64 {
        match self {
            Self::Steps3000To4999 => 0.0,
            Self::Steps5000To6999 => 0.1,
            Self::Steps7000To8999 => 0.2,
            Self::Steps9000To10999 => 0.3,
            Self::Steps11000To12999 => 0.4,
            Self::Steps13000Plus => 0.5,
        }
    }

    /// Get bucket name for logging and serialization
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Steps3000To4999 => "steps3000_to4999",
            Self::Steps5000To6999 => "steps5000_to6999",
            Self::Steps7000To8999 => "steps7000_to8999",
            Self::Steps9000To10999 => "steps9000_to10999",
            Self::Steps11000To12999 => "steps11000_to12999",
            Self::Steps13000Plus => "steps13000_plus",
        }
    }

    /// Step range as written on activity forms, such as `5000_6999`
    const fn range_key(self) -> &'static str {
        match self {
            Self::Steps3000To4999 => "3000_4999",
            Self::Steps5000To6999 => "5000_6999",
            Self::Steps7000To8999 => "7000_8999",
            Self::Steps9000To10999 => "9000_10999",
            Self::Steps11000To12999 => "11000_12999",
            Self::Steps13000Plus => "13000_plus",
        }
    }
}

impl FromStr for StepBucket {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['-', ' ', ','], "_");
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.name() == key || bucket.range_key() == key)
            .ok_or_else(|| {
                AppError::unknown_selector(
                    "step bucket",
                    s.trim(),
                    "3000_4999, 5000_6999, 7000_8999, 9000_10999, 11000_12999, 13000_plus",
                )
            })
    }
}

/// Inputs shared by every PAL system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityInputs {
    /// Biological sex (FAO/WHO/UNU)
    pub gender: Gender,
    /// Lifestyle activity
    #[serde(default)]
    pub activity_level: ActivityLevel,
    /// Training intensity
    #[serde(default)]
    pub intensity_level: IntensityLevel,
    /// Training sessions per week
    #[serde(default)]
    pub training_frequency_per_week: f64,
    /// Minutes per training session
    #[serde(default)]
    pub training_duration_minutes: f64,
    /// Average daily steps
    #[serde(default)]
    pub step_bucket: StepBucket,
    /// Caller-supplied PAL for the custom system
    #[serde(default)]
    pub custom_pal: Option<f64>,
}

impl ActivityInputs {
    /// Inputs with only sex and activity level set
    #[must_use]
    pub fn new(gender: Gender, activity_level: ActivityLevel) -> Self {
        Self {
            gender,
            activity_level,
            intensity_level: IntensityLevel::default(),
            training_frequency_per_week: 0.0,
            training_duration_minutes: 0.0,
            step_bucket: StepBucket::default(),
            custom_pal: None,
        }
    }

    /// Weekly training hours
    #[must_use]
    pub fn weekly_training_hours(&self) -> f64 {
        self.training_frequency_per_week * self.training_duration_minutes / MINUTES_PER_HOUR
    }
}

/// PAL system converting BMR to TDEE
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PalSystem {
    /// FAO/WHO/UNU (2004) sex-specific PAL
    #[default]
    FaoWhoUnu,
    /// DAMNRIPPED activity × intensity table
    DamnRipped,
    /// Pro Physique base multiplier plus training burn
    ProPhysique,
    /// Fitness Stuff weekly hours plus daily steps
    FitnessStuff,
    /// Common sedentary-to-extreme multipliers
    BasicInternet,
    /// Caller-supplied PAL
    Custom,
}

impl PalSystem {
    /// Every system in declaration order
    pub const ALL: [Self; 6] = [
        Self::FaoWhoUnu,
        Self::DamnRipped,
        Self::ProPhysique,
        Self::FitnessStuff,
        Self::BasicInternet,
        Self::Custom,
    ];

    /// Unrounded total daily energy expenditure (kcal/day)
    ///
    /// Returns `None` only for [`PalSystem::Custom`] without a `custom_pal`.
    #[must_use]
    pub fn tdee(&self, bmr: f64, inputs: &ActivityInputs) -> Option<f64> {
        let level = inputs.activity_level.index();
        let intensity = inputs.intensity_level.index();
        match self {
            Self::FaoWhoUnu => {
                let table = inputs.gender.select(&FAO_MALE, &FAO_FEMALE);
                table.get(level).map(|pal| bmr * pal)
            }
            Self::DamnRipped => DAMNRIPPED
                .get(level)
                .and_then(|row| row.get(intensity))
                .map(|pal| bmr * pal),
            Self::ProPhysique => {
                let base = PRO_PHYSIQUE_BASE.get(level)?;
                let kcal_per_minute = PRO_PHYSIQUE_KCAL_PER_MINUTE.get(intensity)?;
                let daily_training = inputs.training_frequency_per_week / DAYS_PER_WEEK
                    * inputs.training_duration_minutes
                    * kcal_per_minute;
                Some(bmr.mul_add(*base, daily_training))
            }
            Self::FitnessStuff => {
                let multiplier = brackets::select(
                    inputs.weekly_training_hours(),
                    &FITNESS_STUFF_HOUR_BRACKETS,
                    &FITNESS_STUFF_MULTIPLIERS,
                )?;
                Some(bmr * (multiplier + inputs.step_bucket.pal_increment()))
            }
            Self::BasicInternet => BASIC_MULTIPLIERS.get(level).map(|pal| bmr * pal),
            Self::Custom => {
                let Some(pal) = inputs.custom_pal else {
                    debug!(system = self.name(), "TDEE unavailable: custom PAL not provided");
                    return None;
                };
                Some(bmr * pal)
            }
        }
    }

    /// Get system name for logging and serialization
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FaoWhoUnu => "fao_who_unu",
            Self::DamnRipped => "damn_ripped",
            Self::ProPhysique => "pro_physique",
            Self::FitnessStuff => "fitness_stuff",
            Self::BasicInternet => "basic_internet",
            Self::Custom => "custom",
        }
    }

    /// Short description of what the system reads
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::FaoWhoUnu => "FAO/WHO/UNU sex-specific PAL by activity level",
            Self::DamnRipped => "PAL from activity level and training intensity",
            Self::ProPhysique => "Base multiplier plus training calories per day",
            Self::FitnessStuff => "Multiplier from weekly training hours plus daily step increment",
            Self::BasicInternet => "Common 1.2 to 1.9 activity multipliers",
            Self::Custom => "Caller-supplied PAL value",
        }
    }
}

impl FromStr for PalSystem {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['-', ' ', '/'], "_");
        match key.as_str() {
            "fao_who_unu" | "fao" | "who" => Ok(Self::FaoWhoUnu),
            "damn_ripped" | "damnripped" => Ok(Self::DamnRipped),
            "pro_physique" | "prophysique" => Ok(Self::ProPhysique),
            "fitness_stuff" => Ok(Self::FitnessStuff),
            "basic_internet" | "basic" => Ok(Self::BasicInternet),
            "custom" => Ok(Self::Custom),
            _ => Err(AppError::unknown_selector(
                "PAL system",
                s.trim(),
                "fao_who_unu, damn_ripped, pro_physique, fitness_stuff, basic_internet, custom",
            )),
        }
    }
}

/// Detailed breakdown of a typical day, for deriving a personal PAL
///
/// Feed [`WizardResult::pal`] into [`ActivityInputs::custom_pal`] to use it
/// with [`PalSystem::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityWizard {
    /// Training days per week (0-7)
    #[serde(default)]
    pub training_days_per_week: f64,
    /// Minutes per training session (0-300)
    #[serde(default)]
    pub training_minutes_per_session: f64,
    /// MET of the chosen training activity
    #[serde(default)]
    pub training_met: Option<f64>,
    /// Average daily steps (0-30,000)
    #[serde(default)]
    pub steps_per_day: f64,
    /// Hours standing per day (0-16)
    #[serde(default)]
    pub standing_hours_per_day: f64,
    /// Hours of household work per day (0-12)
    #[serde(default)]
    pub household_hours_per_day: f64,
    /// MET of the chosen household activity
    #[serde(default)]
    pub household_met: Option<f64>,
    /// Spontaneous physical activity factor (0.8-1.2)
    #[serde(default = "default_spa_factor")]
    pub spa_factor: f64,
}

const fn default_spa_factor() -> f64 {
    DEFAULT_SPA_FACTOR
}

impl Default for ActivityWizard {
    fn default() -> Self {
        Self {
            training_days_per_week: 0.0,
            training_minutes_per_session: 0.0,
            training_met: None,
            steps_per_day: 0.0,
            standing_hours_per_day: 0.0,
            household_hours_per_day: 0.0,
            household_met: None,
            spa_factor: DEFAULT_SPA_FACTOR,
        }
    }
}

/// PAL, TDEE, and BMR derived from an [`ActivityWizard`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WizardResult {
    /// Physical activity level, two decimals
    pub pal: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: u32,
    /// Basal metabolic rate (kcal/day)
    pub bmr: u32,
}

impl ActivityWizard {
    /// Check every answer against its allowed range
    ///
    /// # Errors
    ///
    /// - `ErrorCode::InvalidInput` for a non-finite answer
    /// - `ErrorCode::ValueOutOfRange` for an answer outside its range
    /// - `ErrorCode::MissingRequiredField` when training days are given
    ///   without session minutes
    pub fn validate(&self) -> AppResult<()> {
        check_range("training_days_per_week", self.training_days_per_week, 0.0, 7.0)?;
        check_range(
            "training_minutes_per_session",
            self.training_minutes_per_session,
            0.0,
            300.0,
        )?;
        if self.training_days_per_week > 0.0 && self.training_minutes_per_session <= 0.0 {
            return Err(AppError::missing_field("training_minutes_per_session"));
        }
        check_range("steps_per_day", self.steps_per_day, 0.0, 30_000.0)?;
        check_range("standing_hours_per_day", self.standing_hours_per_day, 0.0, 16.0)?;
        check_range("household_hours_per_day", self.household_hours_per_day, 0.0, 12.0)?;
        check_range("spa_factor", self.spa_factor, 0.8, 1.2)
    }

    /// Average activity energy per day before the SPA factor (kcal/day)
    #[must_use]
    pub fn activity_kcal(&self, weight_kg: f64) -> f64 {
        let training_met = self.training_met.unwrap_or(DEFAULT_TRAINING_MET);
        let household_met = self.household_met.unwrap_or(DEFAULT_HOUSEHOLD_MET);

        let training = self.training_days_per_week * self.training_minutes_per_session
            / MINUTES_PER_HOUR
            / DAYS_PER_WEEK
            * training_met
            * weight_kg;
        let walking = self.steps_per_day * KCAL_PER_STEP;
        let standing = self.standing_hours_per_day * STANDING_KCAL_PER_HOUR;
        let household = self.household_hours_per_day * household_met * weight_kg;

        training + walking + standing + household
    }

    /// Personal PAL for a BMR and body weight
    ///
    /// Returns `None` unless BMR and weight are positive.
    #[must_use]
    pub fn pal(&self, bmr: f64, weight_kg: f64) -> Option<WizardResult> {
        let usable = |value: f64| value.is_finite() && value > 0.0;
        if !usable(bmr) || !usable(weight_kg) {
            debug!(bmr, weight_kg, "Wizard PAL unavailable: BMR and weight must be positive");
            return None;
        }
        let tdee = self.activity_kcal(weight_kg).mul_add(self.spa_factor, bmr);
        Some(WizardResult {
            pal: (tdee / bmr * 100.0).round() / 100.0,
            tdee: round_whole(tdee),
            bmr: round_whole(bmr),
        })
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::invalid_input(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    if !(min..=max).contains(&value) {
        return Err(AppError::value_out_of_range(format!(
            "{field} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}

/// Total daily energy expenditure rounded to the nearest kcal
///
/// # Example
///
/// ```rust
/// use calculeat_core::Gender;
/// use calculeat_intelligence::algorithms::{
///     compute_tdee, ActivityInputs, ActivityLevel, PalSystem,
/// };
///
/// let inputs = ActivityInputs::new(Gender::Male, ActivityLevel::ModeratelyActive);
/// assert_eq!(compute_tdee(1782.0, PalSystem::FaoWhoUnu, &inputs), Some(3029));
/// ```
#[must_use]
pub fn compute_tdee(bmr: f64, system: PalSystem, inputs: &ActivityInputs) -> Option<u32> {
    system.tdee(bmr, inputs).map(round_whole)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(level: ActivityLevel) -> ActivityInputs {
        ActivityInputs::new(Gender::Male, level)
    }

    #[test]
    fn fao_scenario() {
        let moderately_active = inputs(ActivityLevel::ModeratelyActive);
        assert_eq!(
            compute_tdee(1782.0, PalSystem::FaoWhoUnu, &moderately_active),
            Some(3029)
        );
    }

    #[test]
    fn fao_uses_sex_specific_table() {
        let mut female = inputs(ActivityLevel::VeryActive);
        female.gender = Gender::Female;
        assert_eq!(compute_tdee(1000.0, PalSystem::FaoWhoUnu, &female), Some(1900));
        assert_eq!(
            compute_tdee(1000.0, PalSystem::FaoWhoUnu, &inputs(ActivityLevel::VeryActive)),
            Some(2100)
        );
    }

    #[test]
    fn damn_ripped_reads_activity_and_intensity() {
        let mut i = inputs(ActivityLevel::ModeratelyActive);
        i.intensity_level = IntensityLevel::Difficult;
        assert_eq!(compute_tdee(2000.0, PalSystem::DamnRipped, &i), Some(3300));

        i.activity_level = ActivityLevel::ExtremelyActive;
        i.intensity_level = IntensityLevel::Intense;
        assert_eq!(compute_tdee(2000.0, PalSystem::DamnRipped, &i), Some(4400));
    }

    #[test]
    fn pro_physique_adds_training_burn() {
        let mut i = inputs(ActivityLevel::LightlyActive);
        i.intensity_level = IntensityLevel::Difficult;
        i.training_frequency_per_week = 4.0;
        i.training_duration_minutes = 70.0;
        // 1800·1.25 + 4/7·70·10 = 2250 + 400
        assert_eq!(compute_tdee(1800.0, PalSystem::ProPhysique, &i), Some(2650));
    }

    #[test]
    fn fitness_stuff_buckets_hours_and_steps() {
        let mut i = inputs(ActivityLevel::Sedentary);
        i.training_frequency_per_week = 3.0;
        i.training_duration_minutes = 60.0;
        i.step_bucket = StepBucket::Steps9000To10999;
        // 3 h/week lands in the [3, 5.5) bracket: 1.4 + 0.3
        assert_eq!(compute_tdee(2000.0, PalSystem::FitnessStuff, &i), Some(3400));

        i.training_frequency_per_week = 0.0;
        i.step_bucket = StepBucket::Steps3000To4999;
        assert_eq!(compute_tdee(2000.0, PalSystem::FitnessStuff, &i), Some(2400));
    }

    #[test]
    fn custom_requires_a_pal() {
        let mut i = inputs(ActivityLevel::Sedentary);
        assert_eq!(compute_tdee(1800.0, PalSystem::Custom, &i), None);
        i.custom_pal = Some(1.45);
        assert_eq!(compute_tdee(1800.0, PalSystem::Custom, &i), Some(2610));
    }

    #[test]
    fn every_table_system_always_answers() {
        for system in PalSystem::ALL.into_iter().filter(|s| *s != PalSystem::Custom) {
            for level in ActivityLevel::ALL {
                for intensity in IntensityLevel::ALL {
                    let mut i = inputs(level);
                    i.intensity_level = intensity;
                    assert!(compute_tdee(1700.0, system, &i).is_some());
                }
            }
        }
    }

    fn wizard() -> ActivityWizard {
        ActivityWizard {
            training_days_per_week: 4.0,
            training_minutes_per_session: 60.0,
            training_met: Some(6.0),
            steps_per_day: 8000.0,
            standing_hours_per_day: 2.0,
            household_hours_per_day: 1.0,
            ..ActivityWizard::default()
        }
    }

    #[test]
    fn wizard_adds_up_daily_activity() {
        let answers = wizard();
        assert!(answers.validate().is_ok());
        // training 4·60·6·80/60/7 = 274.29, steps 320, standing 100, household 1·2·80
        let activity = answers.activity_kcal(80.0);
        assert!((activity - 854.2857).abs() < 1e-3);

        let result = answers.pal(1800.0, 80.0).unwrap();
        assert_eq!(result.tdee, 2654);
        assert_eq!(result.bmr, 1800);
        assert!((result.pal - 1.47).abs() < 1e-9);

        let mut fidgety = answers;
        fidgety.spa_factor = 1.2;
        let result = fidgety.pal(1800.0, 80.0).unwrap();
        assert_eq!(result.tdee, 2825);
        assert!((result.pal - 1.57).abs() < 1e-9);
    }

    #[test]
    fn wizard_pal_feeds_the_custom_system() {
        let result = wizard().pal(1800.0, 80.0).unwrap();
        let mut i = inputs(ActivityLevel::Sedentary);
        i.custom_pal = Some(result.pal);
        // 1800 · 1.47
        assert_eq!(compute_tdee(1800.0, PalSystem::Custom, &i), Some(2646));
        assert_eq!(wizard().pal(0.0, 80.0), None);
    }

    #[test]
    fn wizard_validation_errors() {
        use calculeat_core::ErrorCode;

        let mut answers = wizard();
        answers.training_minutes_per_session = 0.0;
        assert_eq!(
            answers.validate().unwrap_err().code,
            ErrorCode::MissingRequiredField
        );

        let mut answers = wizard();
        answers.training_days_per_week = 8.0;
        assert_eq!(answers.validate().unwrap_err().code, ErrorCode::ValueOutOfRange);

        let mut answers = wizard();
        answers.spa_factor = f64::NAN;
        assert_eq!(answers.validate().unwrap_err().code, ErrorCode::InvalidInput);

        assert!(ActivityWizard::default().validate().is_ok());
    }

    #[test]
    fn step_counts_map_to_buckets() {
        assert_eq!(StepBucket::for_steps(1200), StepBucket::Steps3000To4999);
        assert_eq!(StepBucket::for_steps(5000), StepBucket::Steps5000To6999);
        assert_eq!(StepBucket::for_steps(12_999), StepBucket::Steps11000To12999);
        assert_eq!(StepBucket::for_steps(25_000), StepBucket::Steps13000Plus);
    }

    #[test]
    fn selectors_parse() {
        assert_eq!("Basic".parse::<PalSystem>().ok(), Some(PalSystem::BasicInternet));
        assert_eq!(
            "very active".parse::<ActivityLevel>().ok(),
            Some(ActivityLevel::VeryActive)
        );
        assert!("couch".parse::<IntensityLevel>().is_err());
        assert!("fitness_stuff_podcast".parse::<PalSystem>().is_err());
    }

    #[test]
    fn step_buckets_parse_by_name_or_range() {
        assert_eq!(
            "9000-10999".parse::<StepBucket>().ok(),
            Some(StepBucket::Steps9000To10999)
        );
        assert_eq!(
            "13000 plus".parse::<StepBucket>().ok(),
            Some(StepBucket::Steps13000Plus)
        );
        assert_eq!(
            "steps5000_to6999".parse::<StepBucket>().ok(),
            Some(StepBucket::Steps5000To6999)
        );
        for bucket in StepBucket::ALL {
            assert_eq!(bucket.name().parse::<StepBucket>().ok(), Some(bucket));
        }

        let err = "a lot".parse::<StepBucket>().unwrap_err();
        assert_eq!(err.code, calculeat_core::ErrorCode::UnknownSelector);
    }
}
