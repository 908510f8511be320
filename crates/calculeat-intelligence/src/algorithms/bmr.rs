// ABOUTME: Basal Metabolic Rate formulas with enum dispatch and body-fat preconditions
// ABOUTME: Mifflin-St Jeor, Cunningham, Oxford/Henry, Schofield, Harris-Benedict, MacroFactor, Fitness Stuff
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::brackets;
use calculeat_core::constants::cunningham::{INTERCEPT, LEAN_MASS_COEFFICIENT};
use calculeat_core::units::cm_to_m;
use calculeat_core::{AnthropometricProfile, AppError, Gender};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Upper bounds of the Schofield and Oxford/Henry age brackets
const AGE_BRACKETS: [f64; 5] = [3.0, 10.0, 18.0, 30.0, 60.0];

/// Age at which the MacroFactor age coefficient steepens
const MACROFACTOR_AGE_BREAK: f64 = 61.0;

/// Weight-only bracket row: `weight * W + intercept`
#[derive(Debug, Clone, Copy)]
struct WeightTerm {
    weight: f64,
    intercept: f64,
}

/// Weight and height (m) bracket row: `weight * W + height * h + intercept`
#[derive(Debug, Clone, Copy)]
struct WeightHeightTerm {
    weight: f64,
    height_m: f64,
    intercept: f64,
}

const fn wt(weight: f64, intercept: f64) -> WeightTerm {
    WeightTerm { weight, intercept }
}

const fn wht(weight: f64, height_m: f64, intercept: f64) -> WeightHeightTerm {
    WeightHeightTerm {
        weight,
        height_m,
        intercept,
    }
}

/// Schofield (FAO/WHO/UNU 1985) male rows
const SCHOFIELD_MALE: [WeightTerm; 6] = [
    wt(60.9, -54.0),
    wt(22.7, 495.0),
    wt(17.5, 651.0),
    wt(15.3, 679.0),
    wt(11.6, 879.0),
    wt(13.5, 487.0),
];

/// Schofield (FAO/WHO/UNU 1985) female rows
const SCHOFIELD_FEMALE: [WeightTerm; 6] = [
    wt(61.0, -51.0),
    wt(22.5, 499.0),
    wt(12.2, 746.0),
    wt(14.7, 496.0),
    wt(8.7, 829.0),
    wt(10.5, 596.0),
];

/// Henry (2005) Oxford male rows
const OXFORD_MALE: [WeightHeightTerm; 6] = [
    wht(28.2, 859.0, -371.0),
    wht(15.1, 313.0, 306.0),
    wht(15.6, 266.0, 299.0),
    wht(14.4, 313.0, 113.0),
    wht(11.4, 541.0, -137.0),
    wht(11.4, 541.0, -256.0),
];

/// Henry (2005) Oxford female rows
const OXFORD_FEMALE: [WeightHeightTerm; 6] = [
    wht(30.4, 703.0, -287.0),
    wht(15.9, 210.0, 349.0),
    wht(9.40, 249.0, 462.0),
    wht(10.4, 615.0, -282.0),
    wht(8.18, 502.0, -11.6),
    wht(8.52, 421.0, 10.7),
];

/// Basal Metabolic Rate formula
///
/// Four of the ten formulas are driven by lean mass and therefore need a body
/// fat percentage; without one they return `None`.
///
/// # Scientific References
///
/// - Mifflin, M.D. et al. (1990). "A new predictive equation for resting energy expenditure." *Am J Clin Nutr*, 51(2), 241-247.
/// - Cunningham, J.J. (1980). "A reanalysis of the factors influencing basal metabolic rate." *Am J Clin Nutr*, 33(11), 2372-2374.
/// - Henry, C.J.K. (2005). "Basal metabolic rate studies in humans." *Public Health Nutr*, 8(7A), 1133-1152.
/// - Schofield, W.N. (1985). "Predicting basal metabolic rate." *Hum Nutr Clin Nutr*, 39 Suppl 1, 5-41.
/// - Roza, A.M. & Shizgal, H.M. (1984). "The Harris Benedict equation reevaluated." *Am J Clin Nutr*, 40(1), 168-182.
/// - Harris, J.A. & Benedict, F.G. (1918). "A biometric study of human basal metabolism." *PNAS*, 4(12), 370-373.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmrFormula {
    /// Mifflin-St Jeor: 9.99W + 6.25H - 4.92A + (5 | -161)
    ///
    /// Best general-population accuracy; default
    #[default]
    MifflinStJeor,

    /// Cunningham: 370 + 21.6 x lean mass
    ///
    /// Requires body fat
    Cunningham,

    /// Oxford/Henry (2005): age-bracketed, weight and height in meters
    OxfordHenry,

    /// Schofield (1985): age-bracketed, weight only
    Schofield,

    /// Harris-Benedict revised by Roza and Shizgal (1984)
    RevisedHarrisBenedict,

    /// Harris-Benedict as published in 1918
    OriginalHarrisBenedict,

    /// MacroFactor standard: power law in weight plus height squared
    MacroFactorStandard,

    /// MacroFactor fat-free mass variant
    ///
    /// Requires body fat
    MacroFactorFfm,

    /// MacroFactor athlete variant
    ///
    /// Requires body fat
    MacroFactorAthlete,

    /// Fitness Stuff Podcast: Cunningham base with Mifflin sex term
    ///
    /// Requires body fat
    FitnessStuffPodcast,
}

impl BmrFormula {
    /// Every formula in declaration order
    pub const ALL: [Self; 10] = [
        Self::MifflinStJeor,
        Self::Cunningham,
        Self::OxfordHenry,
        Self::Schofield,
        Self::RevisedHarrisBenedict,
        Self::OriginalHarrisBenedict,
        Self::MacroFactorStandard,
        Self::MacroFactorFfm,
        Self::MacroFactorAthlete,
        Self::FitnessStuffPodcast,
    ];

    /// Calculate BMR in kcal/day
    ///
    /// Returns `None` when the formula needs body fat and the profile has
    /// none (or a non-positive value).
    ///
    /// # Example
    ///
    /// ```rust
    /// use calculeat_core::{AnthropometricProfile, Gender};
    /// use calculeat_intelligence::algorithms::BmrFormula;
    ///
    /// let profile = AnthropometricProfile::new(30, Gender::Male, 80.0, 180.0)?;
    /// let bmr = BmrFormula::MifflinStJeor.calculate(&profile);
    /// assert_eq!(bmr.map(f64::round), Some(1782.0)); // 1781.6
    /// # Ok::<(), calculeat_core::AppError>(())
    /// ```
    #[must_use]
    pub fn calculate(&self, profile: &AnthropometricProfile) -> Option<f64> {
        let weight = profile.weight_kg();
        let height = profile.height_cm();
        let age = profile.age_years();
        let gender = profile.gender();

        let bmr = match self {
            Self::MifflinStJeor => mifflin_st_jeor(weight, height, age, gender),
            Self::RevisedHarrisBenedict => revised_harris_benedict(weight, height, age, gender),
            Self::OriginalHarrisBenedict => original_harris_benedict(weight, height, age, gender),
            Self::Schofield => schofield(weight, age, gender)?,
            Self::OxfordHenry => oxford_henry(weight, cm_to_m(height), age, gender)?,
            Self::MacroFactorStandard => macrofactor_standard(weight, cm_to_m(height), age, gender),
            Self::Cunningham => cunningham(self.lean_mass(profile)?),
            Self::MacroFactorFfm => macrofactor_ffm(self.lean_mass(profile)?, age, gender),
            Self::MacroFactorAthlete => {
                macrofactor_athlete(self.lean_mass(profile)?, age, gender)
            }
            Self::FitnessStuffPodcast => {
                cunningham(self.lean_mass(profile)?) + gender.select(5.0, -161.0)
            }
        };

        Some(bmr)
    }

    fn lean_mass(self, profile: &AnthropometricProfile) -> Option<f64> {
        let lean_mass = profile.lean_mass_kg();
        if lean_mass.is_none() {
            debug!(
                formula = self.name(),
                "BMR unavailable: formula requires body fat percentage"
            );
        }
        lean_mass
    }

    /// Whether the formula needs a body fat percentage
    #[must_use]
    pub const fn requires_body_fat(&self) -> bool {
        matches!(
            self,
            Self::Cunningham
                | Self::MacroFactorFfm
                | Self::MacroFactorAthlete
                | Self::FitnessStuffPodcast
        )
    }

    /// Get formula name for logging and debugging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MifflinStJeor => "mifflin_st_jeor",
            Self::Cunningham => "cunningham",
            Self::OxfordHenry => "oxford_henry",
            Self::Schofield => "schofield",
            Self::RevisedHarrisBenedict => "revised_harris_benedict",
            Self::OriginalHarrisBenedict => "original_harris_benedict",
            Self::MacroFactorStandard => "macrofactor_standard",
            Self::MacroFactorFfm => "macrofactor_ffm",
            Self::MacroFactorAthlete => "macrofactor_athlete",
            Self::FitnessStuffPodcast => "fitness_stuff_podcast",
        }
    }

    /// Get formula description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::MifflinStJeor => "Mifflin-St Jeor (1990): general population, most validated",
            Self::Cunningham => "Cunningham (1980): lean-mass based, suits lean athletes",
            Self::OxfordHenry => "Oxford/Henry (2005): age-bracketed weight and height equations",
            Self::Schofield => "Schofield (1985): age-bracketed weight-only equations",
            Self::RevisedHarrisBenedict => "Harris-Benedict revised by Roza and Shizgal (1984)",
            Self::OriginalHarrisBenedict => "Harris-Benedict original (1918)",
            Self::MacroFactorStandard => "MacroFactor standard: power law in weight and height",
            Self::MacroFactorFfm => "MacroFactor FFM: power law in fat-free mass",
            Self::MacroFactorAthlete => "MacroFactor athlete: fat-free mass, active tissue",
            Self::FitnessStuffPodcast => "Fitness Stuff Podcast: Cunningham with sex adjustment",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::MifflinStJeor => "9.99 x W + 6.25 x H - 4.92 x A + (5 | -161)",
            Self::Cunningham => "370 + 21.6 x LBM",
            Self::OxfordHenry => "a x W + b x H(m) + c per age bracket",
            Self::Schofield => "a x W + c per age bracket",
            Self::RevisedHarrisBenedict => {
                "88.362 + 13.397W + 4.799H - 5.677A | 447.593 + 9.247W + 3.098H - 4.330A"
            }
            Self::OriginalHarrisBenedict => {
                "66.473 + 13.7516W + 5.0033H - 6.755A | 655.0955 + 9.5634W + 1.8496H - 4.6756A"
            }
            Self::MacroFactorStandard => "110 x W^0.55 + 180 x H(m)^2 - age term + (63 | -100)",
            Self::MacroFactorFfm => "200 x LBM^0.52 - 1.5 x A + (45 | 0)",
            Self::MacroFactorAthlete => "185 x LBM^0.56 - 1.0 x A + (40 | 0)",
            Self::FitnessStuffPodcast => "370 + 21.6 x LBM + (5 | -161)",
        }
    }
}

impl FromStr for BmrFormula {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['-', ' ', '/'], "_");
        Self::ALL
            .into_iter()
            .find(|formula| formula.name() == key)
            .or(match key.as_str() {
                "mifflin" | "msj" => Some(Self::MifflinStJeor),
                "henry" | "oxford" => Some(Self::OxfordHenry),
                "harris_benedict" => Some(Self::RevisedHarrisBenedict),
                _ => None,
            })
            .ok_or_else(|| {
                AppError::unknown_selector(
                    "BMR formula",
                    &key,
                    "mifflin_st_jeor, cunningham, oxford_henry, schofield, \
                     revised_harris_benedict, original_harris_benedict, macrofactor_standard, \
                     macrofactor_ffm, macrofactor_athlete, fitness_stuff_podcast",
                )
            })
    }
}

/// Compute BMR with the selected formula
#[must_use]
pub fn compute_bmr(formula: BmrFormula, profile: &AnthropometricProfile) -> Option<f64> {
    formula.calculate(profile)
}

fn mifflin_st_jeor(weight: f64, height: f64, age: f64, gender: Gender) -> f64 {
    9.99f64.mul_add(
        weight,
        6.25f64.mul_add(height, (-4.92f64).mul_add(age, gender.select(5.0, -161.0))),
    )
}

fn cunningham(lean_mass: f64) -> f64 {
    LEAN_MASS_COEFFICIENT.mul_add(lean_mass, INTERCEPT)
}

fn macrofactor_ffm(lean_mass: f64, age: f64, gender: Gender) -> f64 {
    200.0f64.mul_add(
        lean_mass.powf(0.52),
        (-1.5f64).mul_add(age, gender.select(45.0, 0.0)),
    )
}

fn macrofactor_athlete(lean_mass: f64, age: f64, gender: Gender) -> f64 {
    185.0f64.mul_add(
        lean_mass.powf(0.56),
        (-1.0f64).mul_add(age, gender.select(40.0, 0.0)),
    )
}

fn revised_harris_benedict(weight: f64, height: f64, age: f64, gender: Gender) -> f64 {
    match gender {
        Gender::Male => 13.397f64.mul_add(
            weight,
            4.799f64.mul_add(height, (-5.677f64).mul_add(age, 88.362)),
        ),
        Gender::Female => 9.247f64.mul_add(
            weight,
            3.098f64.mul_add(height, (-4.330f64).mul_add(age, 447.593)),
        ),
    }
}

fn original_harris_benedict(weight: f64, height: f64, age: f64, gender: Gender) -> f64 {
    match gender {
        Gender::Male => 13.7516f64.mul_add(
            weight,
            5.0033f64.mul_add(height, (-6.7550f64).mul_add(age, 66.4730)),
        ),
        Gender::Female => 9.5634f64.mul_add(
            weight,
            1.8496f64.mul_add(height, (-4.6756f64).mul_add(age, 655.0955)),
        ),
    }
}

fn schofield(weight: f64, age: f64, gender: Gender) -> Option<f64> {
    let table = gender.select(&SCHOFIELD_MALE, &SCHOFIELD_FEMALE);
    brackets::select(age, &AGE_BRACKETS, table).map(|row| row.weight.mul_add(weight, row.intercept))
}

fn oxford_henry(weight: f64, height_m: f64, age: f64, gender: Gender) -> Option<f64> {
    let table = gender.select(&OXFORD_MALE, &OXFORD_FEMALE);
    brackets::select(age, &AGE_BRACKETS, table)
        .map(|row| row.weight.mul_add(weight, row.height_m.mul_add(height_m, row.intercept)))
}

fn macrofactor_standard(weight: f64, height_m: f64, age: f64, gender: Gender) -> f64 {
    // Continuous at the break: the steeper slope only applies past it
    let age_term = 3.0f64.mul_add(
        age.min(MACROFACTOR_AGE_BREAK),
        4.5 * (age - MACROFACTOR_AGE_BREAK).max(0.0),
    );
    110.0f64.mul_add(
        weight.powf(0.55),
        180.0f64.mul_add(height_m * height_m, gender.select(63.0, -100.0) - age_term),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(age: u32, gender: Gender, weight: f64, height: f64) -> AnthropometricProfile {
        AnthropometricProfile::new(age, gender, weight, height)
            .expect("reference profile is valid")
    }

    #[test]
    fn mifflin_male_reference_value() {
        let male = profile(30, Gender::Male, 80.0, 180.0);
        let bmr = compute_bmr(BmrFormula::MifflinStJeor, &male);
        // 9.99*80 + 6.25*180 - 4.92*30 + 5 = 1781.6
        assert!(bmr.is_some_and(|b| (b - 1781.6).abs() < 1e-9));
    }

    #[test]
    fn schofield_age_eighteen_uses_adult_bracket() {
        let adult = profile(18, Gender::Male, 70.0, 175.0);
        let bmr = BmrFormula::Schofield.calculate(&adult);
        // 15.3*70 + 679 = 1750
        assert!(bmr.is_some_and(|b| (b - 1750.0).abs() < 1e-9));

        let teen = profile(17, Gender::Male, 70.0, 175.0);
        let bmr = BmrFormula::Schofield.calculate(&teen);
        // 17.5*70 + 651 = 1876
        assert!(bmr.is_some_and(|b| (b - 1876.0).abs() < 1e-9));
    }

    #[test]
    fn lean_mass_formulas_need_body_fat() {
        let without = profile(30, Gender::Female, 60.0, 165.0);
        let with = without.with_body_fat(25.0).expect("25% is a valid body fat");
        for formula in BmrFormula::ALL {
            assert_eq!(
                formula.calculate(&without).is_none(),
                formula.requires_body_fat(),
                "{} body fat precondition",
                formula.name()
            );
            assert!(formula.calculate(&with).is_some(), "{}", formula.name());
        }
    }

    #[test]
    fn cunningham_uses_lean_mass() {
        let lean = profile(30, Gender::Male, 80.0, 180.0)
            .with_body_fat(15.0)
            .expect("15% is a valid body fat");
        let bmr = BmrFormula::Cunningham.calculate(&lean);
        // 370 + 21.6 * 68 = 1838.8
        assert!(bmr.is_some_and(|b| (b - 1838.8).abs() < 1e-9));

        // Podcast variant adds the Mifflin sex constant
        let podcast = BmrFormula::FitnessStuffPodcast.calculate(&lean);
        assert!(podcast.is_some_and(|b| (b - 1843.8).abs() < 1e-9));
    }

    #[test]
    fn macrofactor_age_term_is_continuous_at_break() {
        let at = |age| {
            BmrFormula::MacroFactorStandard
                .calculate(&profile(age, Gender::Male, 80.0, 180.0))
                .expect("standard formula needs no body fat")
        };
        let (b60, b61, b62) = (at(60), at(61), at(62));
        assert!((b60 - b61 - 3.0).abs() < 1e-9);
        assert!((b61 - b62 - 4.5).abs() < 1e-9);
    }

    #[test]
    fn parses_names_and_rejects_unknown() {
        assert_eq!(
            "Mifflin-St Jeor".parse::<BmrFormula>().ok(),
            Some(BmrFormula::MifflinStJeor)
        );
        assert_eq!(
            "oxford/henry".parse::<BmrFormula>().ok(),
            Some(BmrFormula::OxfordHenry)
        );
        assert!("katch_mcardle".parse::<BmrFormula>().is_err());
    }
}
