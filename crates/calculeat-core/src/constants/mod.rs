// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Physiological, energy, and goal constants shared by the formula engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file. Per-formula regression coefficients live next to the formula
//! that uses them; only values shared across stages are collected here.

/// Unit conversion factors
pub mod units {
    /// Centimeters in one inch
    pub const CM_PER_INCH: f64 = 2.54;
    /// Pounds in one kilogram
    pub const LB_PER_KG: f64 = 2.20462;
    /// Centimeters in one meter
    pub const CM_PER_METER: f64 = 100.0;
}

/// Energy density of macronutrients and body tissue
///
/// References:
/// - Atwater general factors (USDA Agriculture Handbook No. 74)
/// - Wishnofsky, M. (1958). Caloric equivalents of gained or lost weight
pub mod energy {
    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Kilocalories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Kilocalories stored in one kilogram of body weight
    pub const KCAL_PER_KG_BODY_WEIGHT: f64 = 7700.0;
}

/// Body density to body fat conversion
///
/// References:
/// - Siri, W.E. (1961). Body composition from fluid spaces and density
/// - Brozek, J. et al. (1963). Densitometric analysis of body composition
pub mod density {
    /// Siri numerator (495 / density)
    pub const SIRI_NUMERATOR: f64 = 495.0;
    /// Siri offset (- 450)
    pub const SIRI_OFFSET: f64 = 450.0;
    /// Brozek numerator (457 / density)
    pub const BROZEK_NUMERATOR: f64 = 457.0;
    /// Brozek offset (- 414.2)
    pub const BROZEK_OFFSET: f64 = 414.2;
}

/// Cunningham lean-mass BMR equation
///
/// Reference: Cunningham, J.J. (1980). A reanalysis of the factors influencing basal metabolic rate
pub mod cunningham {
    /// Intercept (kcal/day)
    pub const INTERCEPT: f64 = 370.0;
    /// Kilocalories per kilogram of lean mass
    pub const LEAN_MASS_COEFFICIENT: f64 = 21.6;
    /// Upper bound of a plausible body fat percentage when inverting the equation
    pub const MAX_PLAUSIBLE_BODY_FAT_PERCENT: f64 = 60.0;
}

/// Calorie goal bands and weekly change rates
pub mod calorie_goals {
    /// Safety floor applied to weight-loss targets when the caller supplies none
    pub const DEFAULT_CALORIE_FLOOR: f64 = 1200.0;
    /// Standard maintenance band (±5%)
    pub const MAINTENANCE_BAND_STANDARD: f64 = 0.05;
    /// Narrow maintenance band (±3%)
    pub const MAINTENANCE_BAND_NARROW: f64 = 0.03;
    /// Half-width of the weight-loss band around the target
    pub const LOSS_BAND_KCAL: f64 = 100.0;
    /// Slow deficit
    pub const SLOW_DEFICIT_KCAL: f64 = -300.0;
    /// Moderate deficit
    pub const MODERATE_DEFICIT_KCAL: f64 = -500.0;
    /// Aggressive deficit
    pub const AGGRESSIVE_DEFICIT_KCAL: f64 = -750.0;
    /// Expected weekly change for the slow deficit
    pub const SLOW_WEEKLY_KG: f64 = -0.3;
    /// Expected weekly change for the moderate deficit
    pub const MODERATE_WEEKLY_KG: f64 = -0.5;
    /// Expected weekly change for the aggressive deficit
    pub const AGGRESSIVE_WEEKLY_KG: f64 = -0.75;
    /// Surplus applied to the weight-gain target
    pub const GAIN_TARGET_KCAL: f64 = 400.0;
    /// Lower edge of the weight-gain band
    pub const GAIN_MIN_KCAL: f64 = 250.0;
    /// Upper edge of the weight-gain band
    pub const GAIN_MAX_KCAL: f64 = 550.0;
    /// Expected weekly change when gaining
    pub const GAIN_WEEKLY_KG: f64 = 0.4;
}

/// Automatic macro allocation
///
/// Reference: Phillips, S.M. & Van Loon, L.J. (2011). Dietary protein for athletes
pub mod macros {
    /// Protein per kg body weight while losing
    pub const PROTEIN_PER_KG_LOSE: f64 = 2.0;
    /// Protein per kg body weight while gaining
    pub const PROTEIN_PER_KG_GAIN: f64 = 1.8;
    /// Protein per kg body weight at maintenance
    pub const PROTEIN_PER_KG_MAINTAIN: f64 = 1.6;
    /// Share of calories from fat while losing
    pub const FAT_FRACTION_LOSE: f64 = 0.25;
    /// Share of calories from fat otherwise
    pub const FAT_FRACTION_OTHER: f64 = 0.30;
}

/// Body mass index and fat-free mass index thresholds
pub mod body_metrics {
    /// WHO underweight upper bound
    pub const BMI_UNDERWEIGHT: f64 = 18.5;
    /// WHO normal upper bound (exclusive)
    pub const BMI_NORMAL: f64 = 25.0;
    /// WHO overweight upper bound (exclusive)
    pub const BMI_OVERWEIGHT: f64 = 30.0;
    /// Upper BMI used for the ideal weight range
    pub const BMI_IDEAL_UPPER: f64 = 24.9;
    /// Reference height for normalized FFMI (m)
    pub const FFMI_REFERENCE_HEIGHT_M: f64 = 1.8;
    /// Normalized FFMI slope per meter of height difference
    pub const FFMI_HEIGHT_SLOPE: f64 = 6.1;
    /// Average weeks per month used for time-to-goal estimates
    pub const WEEKS_PER_MONTH: f64 = 4.33;
}

/// Maximum rate at which stored fat can cover an energy deficit
///
/// Reference: Alpert, S.S. (2005). A limit on the energy transfer rate from the human fat store in hypophagia
pub mod fat_oxidation {
    /// Conservative practical limit (kcal per kg fat mass per day)
    pub const PRACTICAL_KCAL_PER_KG_FAT: f64 = 31.0;
    /// Empirically observed limit (kcal per kg fat mass per day)
    pub const OBSERVED_KCAL_PER_KG_FAT: f64 = 69.0;
    /// Theoretical optimum (kcal per kg fat mass per day)
    pub const THEORETICAL_KCAL_PER_KG_FAT: f64 = 86.0;
}

/// Energy terms of the detailed activity questionnaire
pub mod activity_wizard {
    /// Walking cost per step for an average adult (kcal)
    pub const KCAL_PER_STEP: f64 = 0.04;
    /// Extra cost of standing over sitting (kcal/hour)
    pub const STANDING_KCAL_PER_HOUR: f64 = 50.0;
    /// MET assumed when no training activity is chosen
    pub const DEFAULT_TRAINING_MET: f64 = 1.0;
    /// MET assumed when no household activity is chosen
    pub const DEFAULT_HOUSEHOLD_MET: f64 = 2.0;
    /// Neutral spontaneous physical activity factor
    pub const DEFAULT_SPA_FACTOR: f64 = 1.0;
}

/// Predefined macro modes
///
/// The off-season and on-season modes follow common bodybuilding practice for
/// bulking and contest preparation.
pub mod macro_modes {
    /// Maintenance calorie band as a share of TDEE
    pub const NNR_CALORIES: (f64, f64) = (0.97, 1.03);
    /// Bulking calorie band as a share of TDEE
    pub const OFF_SEASON_CALORIES: (f64, f64) = (1.1, 1.2);
    /// Cutting calorie band as a share of TDEE
    pub const ON_SEASON_CALORIES: (f64, f64) = (0.75, 0.8);
    /// Off-season fat (g per kg body weight)
    pub const OFF_SEASON_FAT_PER_KG: (f64, f64) = (0.5, 1.5);
    /// Off-season protein (g per kg body weight)
    pub const OFF_SEASON_PROTEIN_PER_KG: (f64, f64) = (1.6, 2.2);
    /// On-season fat (share of calories)
    pub const ON_SEASON_FAT_FRACTION: (f64, f64) = (0.15, 0.30);
    /// On-season protein (g per kg fat-free mass)
    pub const ON_SEASON_PROTEIN_PER_KG_FFM: (f64, f64) = (2.3, 3.1);
    /// Upper bound of the fat share recommended for everyone
    pub const FAT_MAX_PERCENT: f64 = 40.0;
    /// Minimum fat share for men (% of calories)
    pub const FAT_MIN_PERCENT_MALE: f64 = 20.0;
    /// Minimum fat share for women (% of calories)
    pub const FAT_MIN_PERCENT_FEMALE: f64 = 25.0;
    /// Absolute fat floor for men (g per kg body weight)
    pub const FAT_FLOOR_PER_KG_MALE: f64 = 0.7;
    /// Absolute fat floor for women (g per kg body weight)
    pub const FAT_FLOOR_PER_KG_FEMALE: f64 = 0.8;
}

/// Natural muscular potential models
///
/// References:
/// - Butt, C. (2009). Your Muscular Potential
/// - Berkhan, M. Leangains maximum stage weight guideline
/// - McDonald, L. and Aragon, A. yearly and monthly lean gain guidelines
pub mod genetic_potential {
    /// Berkhan body fat at stage weight (%)
    pub const BERKHAN_BODY_FAT_PERCENT: f64 = 5.0;
    /// McDonald and Aragon reference body fat (%)
    pub const REFERENCE_BODY_FAT_PERCENT: f64 = 10.0;
    /// Offset subtracted from height (cm) in McDonald's model
    pub const MCDONALD_HEIGHT_OFFSET_CM: f64 = 100.0;
    /// Aragon projection: average monthly lean gain of an intermediate lifter
    pub const ARAGON_MONTHLY_GAIN_FRACTION: f64 = 0.0075;
    /// Aragon projection horizon (years)
    pub const ARAGON_PROJECTION_YEARS: f64 = 10.0;
    /// Casey Butt wrist divisor
    pub const BUTT_WRIST_DIVISOR: f64 = 22.667;
    /// Casey Butt ankle divisor
    pub const BUTT_ANKLE_DIVISOR: f64 = 17.0104;
    /// Casey Butt body fat divisor
    pub const BUTT_BODY_FAT_DIVISOR: f64 = 224.0;
    /// Extra weight carried at the top of a bulk
    pub const BUTT_BULK_FACTOR: f64 = 1.04;
    /// Wrist-to-height ratio at or below which the upper body is a hardgainer
    pub const BUTT_WRIST_HEIGHT_RATIO: f64 = 0.1045;
    /// Ankle-to-height ratio at or below which the lower body is a hardgainer
    pub const BUTT_ANKLE_HEIGHT_RATIO: f64 = 0.1296;
}
