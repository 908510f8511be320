// ABOUTME: Natural muscular potential models: Berkhan, Casey Butt, Lyle McDonald, Alan Aragon
// ABOUTME: Maximum lean mass and stage weight by height, bone structure, or current lean mass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Genetic Muscular Potential
//!
//! Each model estimates the most lean mass a drug-free man can carry. The
//! models were fitted on male lifters only, so [`estimate_all`] returns an
//! empty list for women.
//!
//! | Model       | Inputs                                  |
//! |-------------|-----------------------------------------|
//! | Berkhan     | height                                  |
//! | Casey Butt  | height, wrist, ankle, optional body fat |
//! | McDonald    | height                                  |
//! | Aragon      | current lean mass                       |

use crate::algorithms::brackets;
use crate::body_metrics::lean_mass;
use calculeat_core::constants::genetic_potential::{
    ARAGON_MONTHLY_GAIN_FRACTION, ARAGON_PROJECTION_YEARS, BERKHAN_BODY_FAT_PERCENT,
    BUTT_ANKLE_DIVISOR, BUTT_ANKLE_HEIGHT_RATIO, BUTT_BODY_FAT_DIVISOR, BUTT_BULK_FACTOR,
    BUTT_WRIST_DIVISOR, BUTT_WRIST_HEIGHT_RATIO, MCDONALD_HEIGHT_OFFSET_CM,
    REFERENCE_BODY_FAT_PERCENT,
};
use calculeat_core::units::{cm_to_inches, inches_to_cm, lb_to_kg};
use calculeat_core::{AppError, Gender};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Berkhan stage weight offset from height by height bracket
const BERKHAN_HEIGHT_BRACKETS: [f64; 3] = [170.0, 180.0, 190.0];
const BERKHAN_OFFSETS_CM: [f64; 4] = [98.0, 99.0, 100.0, 101.0];

/// Body fat levels listed by [`target_weights`]
const TARGET_BODY_FAT_LEVELS: [f64; 8] = [5.0, 8.0, 10.0, 12.0, 15.0, 18.0, 20.0, 25.0];

/// Potential model
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PotentialModel {
    /// Stage weight at 5% body fat from height
    Berkhan,
    /// Lean mass from height and wrist and ankle girths
    CaseyButt,
    /// Weight at 10% body fat from height
    McDonald,
    /// Ten-year projection from current lean mass
    Aragon,
}

impl PotentialModel {
    /// Every model in presentation order
    pub const ALL: [Self; 4] = [Self::Berkhan, Self::CaseyButt, Self::McDonald, Self::Aragon];

    /// Get model name for logging and serialization
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Berkhan => "berkhan",
            Self::CaseyButt => "casey_butt",
            Self::McDonald => "mcdonald",
            Self::Aragon => "aragon",
        }
    }
}

impl FromStr for PotentialModel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|model| model.name() == key)
            .ok_or_else(|| {
                AppError::unknown_selector(
                    "potential model",
                    s.trim(),
                    "berkhan, casey_butt, mcdonald, aragon",
                )
            })
    }
}

/// Which body fat the Casey Butt model assumes
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CaseyButtMethod {
    /// Lean mass at 10% body fat, converted to weight at the current body fat
    #[default]
    Standard,
    /// Current body fat in both steps
    Personalized,
}

/// Bone-structure class of one half of the body
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GainerType {
    /// Light frame relative to height
    Hard,
    /// Heavy frame relative to height
    Easy,
}

/// Maximum girths at full development (cm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxMeasurements {
    /// Chest
    pub chest_cm: f64,
    /// Flexed biceps
    pub biceps_cm: f64,
    /// Forearm
    pub forearm_cm: f64,
    /// Neck
    pub neck_cm: f64,
    /// Thigh
    pub thigh_cm: f64,
    /// Calf
    pub calf_cm: f64,
}

/// Extra output of the Casey Butt model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaseyButtDetails {
    /// Method actually applied
    pub method: CaseyButtMethod,
    /// Body fat used for the lean mass step (%)
    pub lean_mass_body_fat: f64,
    /// Body fat used to convert lean mass to weight (%)
    pub conversion_body_fat: f64,
    /// Upper body class from the wrist
    pub upper_body: GainerType,
    /// Lower body class from the ankle
    pub lower_body: GainerType,
    /// Girth ceilings
    pub max_measurements: MaxMeasurements,
}

/// Outcome of one potential model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneticPotential {
    /// Model that produced the estimate
    pub model: PotentialModel,
    /// Maximum lean body mass (kg)
    pub max_lean_mass_kg: f64,
    /// Maximum body weight at the model's body fat (kg)
    pub max_weight_kg: f64,
    /// Weight at the top of a bulk (kg), Casey Butt only
    pub max_bulked_weight_kg: Option<f64>,
    /// Current lean mass as a share of the maximum, capped at 100
    pub progress_percent: Option<f64>,
    /// Lean mass still to gain (kg), never negative
    pub remaining_lean_mass_kg: Option<f64>,
    /// Casey Butt specifics
    pub casey_butt: Option<CaseyButtDetails>,
}

impl GeneticPotential {
    const fn new(model: PotentialModel, max_lean_mass_kg: f64, max_weight_kg: f64) -> Self {
        Self {
            model,
            max_lean_mass_kg,
            max_weight_kg,
            max_bulked_weight_kg: None,
            progress_percent: None,
            remaining_lean_mass_kg: None,
            casey_butt: None,
        }
    }

    fn with_progress(self, current_lean_mass_kg: f64) -> Self {
        Self {
            progress_percent: Some(progress_percent(current_lean_mass_kg, self.max_lean_mass_kg)),
            remaining_lean_mass_kg: Some(remaining_lean_mass(
                current_lean_mass_kg,
                self.max_lean_mass_kg,
            )),
            ..self
        }
    }
}

/// Lean gain guideline for one training year (McDonald)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyGain {
    /// Year of proper training
    pub year: u32,
    /// Lower yearly gain (kg)
    pub min_kg: f64,
    /// Upper yearly gain (kg)
    pub max_kg: f64,
    /// Typical monthly gain (kg)
    pub per_month_kg: f64,
}

/// McDonald's lean gain guideline by training year
pub const MCDONALD_YEARLY_GAINS: [YearlyGain; 4] = [
    YearlyGain {
        year: 1,
        min_kg: 9.0,
        max_kg: 11.3,
        per_month_kg: 0.9,
    },
    YearlyGain {
        year: 2,
        min_kg: 4.5,
        max_kg: 5.4,
        per_month_kg: 0.45,
    },
    YearlyGain {
        year: 3,
        min_kg: 2.3,
        max_kg: 2.7,
        per_month_kg: 0.23,
    },
    YearlyGain {
        year: 4,
        min_kg: 0.9,
        max_kg: 1.4,
        per_month_kg: 0.1,
    },
];

/// Training experience tier in Aragon's guideline
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrainingExperience {
    /// Under one year of proper training
    Beginner,
    /// One to three years
    Intermediate,
    /// Three years or more
    Advanced,
}

impl TrainingExperience {
    /// Monthly lean gain as a percentage of body weight, `(min, max)`
    #[must_use]
    pub const fn monthly_gain_percent(&self) -> (f64, f64) {
        match self {
            Self::Beginner => (1.0, 1.5),
            Self::Intermediate => (0.5, 1.0),
            Self::Advanced => (0.25, 0.5),
        }
    }
}

/// Berkhan: stage weight at 5% body fat is height minus 98 to 101 cm
#[must_use]
pub fn berkhan(height_cm: f64) -> GeneticPotential {
    let offset = brackets::select(height_cm, &BERKHAN_HEIGHT_BRACKETS, &BERKHAN_OFFSETS_CM)
        .copied()
        .unwrap_or(BERKHAN_OFFSETS_CM[3]);
    let max_weight = height_cm - offset;
    GeneticPotential::new(
        PotentialModel::Berkhan,
        lean_mass(max_weight, BERKHAN_BODY_FAT_PERCENT),
        max_weight,
    )
}

/// Casey Butt: lean mass from height, wrist, and ankle
///
/// The standard method fixes 10% body fat for the lean mass step and uses
/// `current_body_fat` (or 10%) to convert to weight. The personalized method
/// uses `current_body_fat` in both steps and falls back to standard without
/// one.
#[must_use]
pub fn casey_butt(
    height_cm: f64,
    wrist_cm: f64,
    ankle_cm: f64,
    method: CaseyButtMethod,
    current_body_fat: Option<f64>,
) -> GeneticPotential {
    let known_body_fat = current_body_fat.filter(|bf| *bf > 0.0);
    let (method, lean_mass_body_fat, conversion_body_fat) = match (method, known_body_fat) {
        (CaseyButtMethod::Personalized, Some(bf)) => (CaseyButtMethod::Personalized, bf, bf),
        (_, bf) => (
            CaseyButtMethod::Standard,
            REFERENCE_BODY_FAT_PERCENT,
            bf.unwrap_or(REFERENCE_BODY_FAT_PERCENT),
        ),
    };

    let height_in = cm_to_inches(height_cm);
    let wrist_in = cm_to_inches(wrist_cm);
    let ankle_in = cm_to_inches(ankle_cm);

    let frame = wrist_in.sqrt() / BUTT_WRIST_DIVISOR + ankle_in.sqrt() / BUTT_ANKLE_DIVISOR;
    let max_lean_lb =
        height_in.powf(1.5) * frame * (lean_mass_body_fat / BUTT_BODY_FAT_DIVISOR + 1.0);
    let max_lean_mass = lb_to_kg(max_lean_lb);
    let max_weight = max_lean_mass / (100.0 - conversion_body_fat) * 100.0;

    let upper_body = if wrist_cm <= BUTT_WRIST_HEIGHT_RATIO * height_cm {
        GainerType::Hard
    } else {
        GainerType::Easy
    };
    let lower_body = if ankle_cm <= BUTT_ANKLE_HEIGHT_RATIO * height_cm {
        GainerType::Hard
    } else {
        GainerType::Easy
    };

    GeneticPotential {
        max_bulked_weight_kg: Some(max_weight * BUTT_BULK_FACTOR),
        casey_butt: Some(CaseyButtDetails {
            method,
            lean_mass_body_fat,
            conversion_body_fat,
            upper_body,
            lower_body,
            max_measurements: max_measurements(
                height_in,
                wrist_in,
                ankle_in,
                upper_body,
                lower_body,
            ),
        }),
        ..GeneticPotential::new(PotentialModel::CaseyButt, max_lean_mass, max_weight)
    }
}

fn max_measurements(
    height_in: f64,
    wrist_in: f64,
    ankle_in: f64,
    upper_body: GainerType,
    lower_body: GainerType,
) -> MaxMeasurements {
    let (chest, biceps, forearm, neck) = match upper_body {
        GainerType::Easy => (
            1.6817f64.mul_add(wrist_in, 1.3759f64.mul_add(ankle_in, 0.3314 * height_in)),
            1.2033f64.mul_add(wrist_in, 0.1236 * height_in),
            0.9626f64.mul_add(wrist_in, 0.0989 * height_in),
            1.1424f64.mul_add(wrist_in, 0.1236 * height_in),
        ),
        GainerType::Hard => (
            3.15f64.mul_add(wrist_in, 2.54 * ankle_in),
            2.28 * wrist_in,
            1.83 * wrist_in,
            2.3 * wrist_in,
        ),
    };
    let (thigh, calf) = match lower_body {
        GainerType::Easy => (
            1.3868f64.mul_add(ankle_in, 0.1805 * height_in),
            0.9298f64.mul_add(ankle_in, 0.121 * height_in),
        ),
        GainerType::Hard => (2.65 * ankle_in, 1.8 * ankle_in),
    };

    MaxMeasurements {
        chest_cm: inches_to_cm(chest),
        biceps_cm: inches_to_cm(biceps),
        forearm_cm: inches_to_cm(forearm),
        neck_cm: inches_to_cm(neck),
        thigh_cm: inches_to_cm(thigh),
        calf_cm: inches_to_cm(calf),
    }
}

/// McDonald: weight at 10% body fat is height minus 100 cm
#[must_use]
pub fn mcdonald(height_cm: f64) -> GeneticPotential {
    let max_weight = height_cm - MCDONALD_HEIGHT_OFFSET_CM;
    GeneticPotential::new(
        PotentialModel::McDonald,
        lean_mass(max_weight, REFERENCE_BODY_FAT_PERCENT),
        max_weight,
    )
}

/// Aragon: ten years of intermediate gains (0.75% per month) on current lean mass
#[must_use]
pub fn aragon(current_lean_mass_kg: f64) -> GeneticPotential {
    let months = 12.0 * ARAGON_PROJECTION_YEARS;
    let max_lean_mass =
        (current_lean_mass_kg * ARAGON_MONTHLY_GAIN_FRACTION).mul_add(months, current_lean_mass_kg);
    GeneticPotential::new(
        PotentialModel::Aragon,
        max_lean_mass,
        max_lean_mass / (1.0 - REFERENCE_BODY_FAT_PERCENT / 100.0),
    )
}

/// Current lean mass as a share of the maximum, capped at 100%
#[must_use]
pub fn progress_percent(current_lean_mass_kg: f64, max_lean_mass_kg: f64) -> f64 {
    (current_lean_mass_kg / max_lean_mass_kg * 100.0).min(100.0)
}

/// Lean mass left to gain, never negative
#[must_use]
pub fn remaining_lean_mass(current_lean_mass_kg: f64, max_lean_mass_kg: f64) -> f64 {
    (max_lean_mass_kg - current_lean_mass_kg).max(0.0)
}

/// Body weight carrying `max_lean_mass_kg` at a body fat level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetWeight {
    /// Body fat (%)
    pub body_fat_percent: f64,
    /// Body weight (kg)
    pub weight_kg: f64,
}

/// Weights holding a given lean mass at 5% to 25% body fat
#[must_use]
pub fn target_weights(max_lean_mass_kg: f64) -> Vec<TargetWeight> {
    TARGET_BODY_FAT_LEVELS
        .iter()
        .map(|bf| TargetWeight {
            body_fat_percent: *bf,
            weight_kg: max_lean_mass_kg / (1.0 - bf / 100.0),
        })
        .collect()
}

/// Everything the models can read
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PotentialInput {
    /// Height (cm)
    pub height_cm: f64,
    /// Biological sex
    pub gender: Gender,
    /// Wrist girth (cm)
    #[serde(default)]
    pub wrist_cm: Option<f64>,
    /// Ankle girth (cm)
    #[serde(default)]
    pub ankle_cm: Option<f64>,
    /// Current weight (kg)
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Current body fat (%)
    #[serde(default)]
    pub body_fat_percent: Option<f64>,
    /// Casey Butt body fat handling
    #[serde(default)]
    pub casey_butt_method: CaseyButtMethod,
}

/// Run every model the input supports
///
/// Berkhan and McDonald always run for men. Casey Butt needs wrist and ankle;
/// Aragon needs weight and body fat. With weight and body fat known, every
/// result also carries progress and remaining lean mass.
#[must_use]
pub fn estimate_all(input: &PotentialInput) -> Vec<GeneticPotential> {
    if input.gender == Gender::Female {
        debug!("Genetic potential models are calibrated on men only");
        return Vec::new();
    }
    let positive = |value: Option<f64>| value.filter(|v| v.is_finite() && *v > 0.0);

    let mut results = vec![berkhan(input.height_cm)];
    if let (Some(wrist), Some(ankle)) = (positive(input.wrist_cm), positive(input.ankle_cm)) {
        results.push(casey_butt(
            input.height_cm,
            wrist,
            ankle,
            input.casey_butt_method,
            input.body_fat_percent,
        ));
    }
    results.push(mcdonald(input.height_cm));

    let current_lean = positive(input.weight_kg)
        .zip(positive(input.body_fat_percent))
        .map(|(weight, bf)| lean_mass(weight, bf));
    if let Some(current) = current_lean {
        results.push(aragon(current));
        results = results
            .into_iter()
            .map(|result| result.with_progress(current))
            .collect();
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-3
    }

    #[test]
    fn berkhan_offset_grows_with_height() {
        let short = berkhan(165.0);
        assert!(close(short.max_weight_kg, 67.0));
        assert!(close(short.max_lean_mass_kg, 63.65));
        assert!(close(berkhan(180.0).max_weight_kg, 80.0));
        assert!(close(berkhan(195.0).max_weight_kg, 94.0));
    }

    #[test]
    fn mcdonald_and_aragon_reference_values() {
        let by_height = mcdonald(180.0);
        assert!(close(by_height.max_weight_kg, 80.0));
        assert!(close(by_height.max_lean_mass_kg, 72.0));

        // 68 + 68·0.0075·120 = 129.2
        let projected = aragon(68.0);
        assert!(close(projected.max_lean_mass_kg, 129.2));
        assert!(close(projected.max_weight_kg, 129.2 / 0.9));
    }

    #[test]
    fn casey_butt_hardgainer_reference_case() {
        let result = casey_butt(180.0, 17.5, 22.5, CaseyButtMethod::Standard, None);
        assert!((result.max_lean_mass_kg - 82.194).abs() < 0.01);
        assert!((result.max_weight_kg - 91.327).abs() < 0.01);
        assert!(result
            .max_bulked_weight_kg
            .is_some_and(|w| (w - 94.980).abs() < 0.01));

        let details = result.casey_butt.expect("Casey Butt details");
        assert_eq!(details.upper_body, GainerType::Hard);
        assert_eq!(details.lower_body, GainerType::Hard);
        // Hardgainer girths scale with the bone in either unit
        assert!(close(details.max_measurements.biceps_cm, 2.28 * 17.5));
        assert!(close(details.max_measurements.chest_cm, 3.15 * 17.5 + 2.54 * 22.5));
        assert!(close(details.max_measurements.calf_cm, 1.8 * 22.5));
    }

    #[test]
    fn casey_butt_body_fat_methods() {
        let standard = casey_butt(180.0, 17.5, 22.5, CaseyButtMethod::Standard, Some(15.0));
        let details = standard.casey_butt.expect("Casey Butt details");
        assert_eq!(details.method, CaseyButtMethod::Standard);
        assert!(close(details.lean_mass_body_fat, 10.0));
        assert!(close(details.conversion_body_fat, 15.0));
        assert!((standard.max_weight_kg - 96.699).abs() < 0.01);

        let personalized =
            casey_butt(180.0, 17.5, 22.5, CaseyButtMethod::Personalized, Some(15.0));
        assert!((personalized.max_lean_mass_kg - 83.950).abs() < 0.01);
        assert!((personalized.max_weight_kg - 98.765).abs() < 0.01);

        // Without a body fat reading the personalized method falls back
        let fallback = casey_butt(180.0, 17.5, 22.5, CaseyButtMethod::Personalized, None);
        assert_eq!(
            fallback.casey_butt.map(|d| d.method),
            Some(CaseyButtMethod::Standard)
        );
    }

    #[test]
    fn casey_butt_easygainer_girths() {
        let result = casey_butt(180.0, 19.5, 24.0, CaseyButtMethod::Standard, None);
        let details = result.casey_butt.expect("Casey Butt details");
        assert_eq!(details.upper_body, GainerType::Easy);
        assert_eq!(details.lower_body, GainerType::Easy);
        // 1.6817·19.5 + 1.3759·24 + 0.3314·180
        assert!(close(details.max_measurements.chest_cm, 125.466_75));
        assert!(close(details.max_measurements.thigh_cm, 65.7732));
    }

    #[test]
    fn estimate_all_picks_models_from_inputs() {
        let mut input = PotentialInput {
            height_cm: 180.0,
            gender: Gender::Male,
            wrist_cm: None,
            ankle_cm: None,
            weight_kg: None,
            body_fat_percent: None,
            casey_butt_method: CaseyButtMethod::Standard,
        };
        let models: Vec<_> = estimate_all(&input).iter().map(|r| r.model).collect();
        assert_eq!(models, vec![PotentialModel::Berkhan, PotentialModel::McDonald]);

        input.wrist_cm = Some(17.5);
        input.ankle_cm = Some(22.5);
        input.weight_kg = Some(80.0);
        input.body_fat_percent = Some(15.0);
        let results = estimate_all(&input);
        let models: Vec<_> = results.iter().map(|r| r.model).collect();
        assert_eq!(models, PotentialModel::ALL.to_vec());

        // Current lean mass is 68 kg, 4 kg short of McDonald's 72 kg
        let by_height = results[2];
        assert!(by_height.remaining_lean_mass_kg.is_some_and(|kg| close(kg, 4.0)));
        assert!(by_height
            .progress_percent
            .is_some_and(|p| close(p, 68.0 / 72.0 * 100.0)));
        // Berkhan's 76 kg ceiling
        assert!(results[0].progress_percent.is_some_and(|p| p < 100.0));

        input.gender = Gender::Female;
        assert!(estimate_all(&input).is_empty());
    }

    #[test]
    fn progress_is_capped_and_remaining_floored() {
        assert!(close(progress_percent(80.0, 72.0), 100.0));
        assert!(close(remaining_lean_mass(80.0, 72.0), 0.0));
    }

    #[test]
    fn target_weights_hold_lean_mass() {
        let targets = target_weights(72.0);
        assert_eq!(targets.len(), 8);
        assert!(close(targets[2].weight_kg, 80.0));
        assert!(targets.windows(2).all(|w| w[0].weight_kg < w[1].weight_kg));
    }

    #[test]
    fn model_names_parse() {
        assert_eq!(
            "Casey Butt".parse::<PotentialModel>().ok(),
            Some(PotentialModel::CaseyButt)
        );
        assert!("arnold".parse::<PotentialModel>().is_err());
        let (low, high) = TrainingExperience::Beginner.monthly_gain_percent();
        assert!(close(low, 1.0) && close(high, 1.5));
        assert_eq!(MCDONALD_YEARLY_GAINS[0].year, 1);
    }
}
