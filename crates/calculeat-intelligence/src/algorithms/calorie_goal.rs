// ABOUTME: Calorie goal resolver turning TDEE into a target band for maintain, gain, or lose goals
// ABOUTME: Loss targets never drop below a calorie floor; gain and maintain use fixed surplus bands

use calculeat_core::constants::calorie_goals::{
    AGGRESSIVE_DEFICIT_KCAL, AGGRESSIVE_WEEKLY_KG, DEFAULT_CALORIE_FLOOR, GAIN_MAX_KCAL,
    GAIN_MIN_KCAL, GAIN_TARGET_KCAL, GAIN_WEEKLY_KG, LOSS_BAND_KCAL, MAINTENANCE_BAND_NARROW,
    MAINTENANCE_BAND_STANDARD, MODERATE_DEFICIT_KCAL, MODERATE_WEEKLY_KG, SLOW_DEFICIT_KCAL,
    SLOW_WEEKLY_KG,
};
use calculeat_core::units::round_whole;
use calculeat_core::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Body weight goal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CalorieGoal {
    /// Hold weight
    #[default]
    Maintain,
    /// Gain weight
    Gain,
    /// Lose weight
    Lose,
}

impl CalorieGoal {
    /// Get goal name for logging and serialization
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Maintain => "maintain",
            Self::Gain => "gain",
            Self::Lose => "lose",
        }
    }
}

impl FromStr for CalorieGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "maintain" | "maintenance" => Ok(Self::Maintain),
            "gain" | "bulk" => Ok(Self::Gain),
            "lose" | "cut" => Ok(Self::Lose),
            _ => Err(AppError::unknown_selector(
                "calorie goal",
                s.trim(),
                "maintain, gain, lose",
            )),
        }
    }
}

/// Size of the daily deficit for weight loss
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DeficitLevel {
    /// −300 kcal/day, about −0.3 kg/week
    Slow,
    /// −500 kcal/day, about −0.5 kg/week
    #[default]
    Moderate,
    /// −750 kcal/day, about −0.75 kg/week
    Aggressive,
}

impl DeficitLevel {
    /// Daily calorie adjustment (negative)
    #[must_use]
    pub const fn daily_kcal(&self) -> f64 {
        match self {
            Self::Slow => SLOW_DEFICIT_KCAL,
            Self::Moderate => MODERATE_DEFICIT_KCAL,
            Self::Aggressive => AGGRESSIVE_DEFICIT_KCAL,
        }
    }

    /// Expected weekly weight change (kg, negative)
    #[must_use]
    pub const fn weekly_kg(&self) -> f64 {
        match self {
            Self::Slow => SLOW_WEEKLY_KG,
            Self::Moderate => MODERATE_WEEKLY_KG,
            Self::Aggressive => AGGRESSIVE_WEEKLY_KG,
        }
    }

    /// Get level name for logging and serialization
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Moderate => "moderate",
            Self::Aggressive => "aggressive",
        }
    }
}

impl FromStr for DeficitLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "slow" => Ok(Self::Slow),
            "moderate" => Ok(Self::Moderate),
            "aggressive" => Ok(Self::Aggressive),
            _ => Err(AppError::unknown_selector(
                "deficit level",
                s.trim(),
                "slow, moderate, aggressive",
            )),
        }
    }
}

/// Width of the maintenance band around TDEE
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceBand {
    /// ±5%
    #[default]
    Standard,
    /// ±3%
    Narrow,
}

impl MaintenanceBand {
    /// Fractional half-width of the band
    #[must_use]
    pub const fn fraction(&self) -> f64 {
        match self {
            Self::Standard => MAINTENANCE_BAND_STANDARD,
            Self::Narrow => MAINTENANCE_BAND_NARROW,
        }
    }
}

/// Daily calorie band with its target and expected weight trend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieRange {
    /// Lower bound (kcal/day)
    pub min: u32,
    /// Upper bound (kcal/day)
    pub max: u32,
    /// Target intake (kcal/day)
    pub target: u32,
    /// Expected weekly weight change (kg)
    pub weekly_kg_change: f64,
}

/// Tunable offsets behind [`compute_calorie_range_with`]
///
/// `Default` carries the published constants: 1200 kcal floor, ±5%
/// maintenance, ±100 kcal around a loss target, and +250/+400/+550 kcal for
/// gain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalSettings {
    /// Lowest loss figure ever reported (kcal/day)
    pub calorie_floor: f64,
    /// Maintenance half-width as a fraction of TDEE
    pub maintenance_fraction: f64,
    /// Half-width of the band around a loss target (kcal/day)
    pub loss_band_kcal: f64,
    /// Gain target above TDEE (kcal/day)
    pub gain_target_kcal: f64,
    /// Gain minimum above TDEE (kcal/day)
    pub gain_min_kcal: f64,
    /// Gain maximum above TDEE (kcal/day)
    pub gain_max_kcal: f64,
}

impl Default for GoalSettings {
    fn default() -> Self {
        Self {
            calorie_floor: DEFAULT_CALORIE_FLOOR,
            maintenance_fraction: MaintenanceBand::Standard.fraction(),
            loss_band_kcal: LOSS_BAND_KCAL,
            gain_target_kcal: GAIN_TARGET_KCAL,
            gain_min_kcal: GAIN_MIN_KCAL,
            gain_max_kcal: GAIN_MAX_KCAL,
        }
    }
}

/// Maintenance band around TDEE
#[must_use]
pub fn compute_maintenance_range(tdee: u32, band: MaintenanceBand) -> CalorieRange {
    maintenance_range(tdee, band.fraction())
}

fn maintenance_range(tdee: u32, fraction: f64) -> CalorieRange {
    let tdee_kcal = f64::from(tdee);
    CalorieRange {
        min: round_whole(tdee_kcal * (1.0 - fraction)),
        max: round_whole(tdee_kcal * (1.0 + fraction)),
        target: tdee,
        weekly_kg_change: 0.0,
    }
}

/// Calorie band for a goal
///
/// `deficit` is only read for [`CalorieGoal::Lose`] and defaults to
/// [`DeficitLevel::Moderate`]. `calorie_floor` defaults to 1200 kcal and bounds
/// every loss figure from below.
///
/// # Example
///
/// ```rust
/// use calculeat_intelligence::algorithms::{compute_calorie_range, CalorieGoal, DeficitLevel};
///
/// let range = compute_calorie_range(3029, CalorieGoal::Lose, Some(DeficitLevel::Moderate), None);
/// assert_eq!((range.min, range.target, range.max), (2429, 2529, 2629));
/// ```
#[must_use]
pub fn compute_calorie_range(
    tdee: u32,
    goal: CalorieGoal,
    deficit: Option<DeficitLevel>,
    calorie_floor: Option<u32>,
) -> CalorieRange {
    let settings = GoalSettings {
        calorie_floor: calorie_floor.map_or(DEFAULT_CALORIE_FLOOR, f64::from),
        ..GoalSettings::default()
    };
    compute_calorie_range_with(tdee, goal, deficit, &settings)
}

/// Calorie band for a goal using explicit offsets
#[must_use]
pub fn compute_calorie_range_with(
    tdee: u32,
    goal: CalorieGoal,
    deficit: Option<DeficitLevel>,
    settings: &GoalSettings,
) -> CalorieRange {
    let tdee_kcal = f64::from(tdee);
    match goal {
        CalorieGoal::Maintain => maintenance_range(tdee, settings.maintenance_fraction),
        CalorieGoal::Gain => CalorieRange {
            min: round_whole(tdee_kcal + settings.gain_min_kcal),
            max: round_whole(tdee_kcal + settings.gain_max_kcal),
            target: round_whole(tdee_kcal + settings.gain_target_kcal),
            weekly_kg_change: GAIN_WEEKLY_KG,
        },
        CalorieGoal::Lose => {
            let deficit = deficit.unwrap_or_default();
            let floor = settings.calorie_floor;
            let unclamped = tdee_kcal + deficit.daily_kcal();
            if unclamped < floor {
                debug!(
                    tdee,
                    deficit = deficit.name(),
                    floor,
                    "Loss target clamped to calorie floor"
                );
            }
            let target = unclamped.max(floor);
            CalorieRange {
                min: round_whole((target - settings.loss_band_kcal).max(floor)),
                max: round_whole(target + settings.loss_band_kcal),
                target: round_whole(target),
                weekly_kg_change: deficit.weekly_kg(),
            }
        }
    }
}
