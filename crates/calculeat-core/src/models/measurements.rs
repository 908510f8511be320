// ABOUTME: Caliper skinfold and tape circumference measurement value objects
// ABOUTME: Site enums give formulas a uniform way to read and sum present measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A measurement is present when supplied and strictly positive
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Reject readings that are negative or not finite
fn check_readings(kind: &str, unit: &str, readings: &[(&str, Option<f64>)]) -> AppResult<()> {
    for &(site, value) in readings {
        let Some(value) = value else { continue };
        if !value.is_finite() || value < 0.0 {
            debug!(kind, site, value, "Rejected measurement");
            return Err(AppError::invalid_input(format!(
                "{kind} reading at {site} must be a non-negative number of {unit}, got {value}"
            )));
        }
    }
    Ok(())
}

/// Skinfold sites measured with a caliper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaliperSite {
    /// Pectoral (diagonal fold)
    Chest,
    /// Abdominal (vertical fold beside the navel)
    Abdominal,
    /// Anterior thigh
    Thigh,
    /// Posterior upper arm
    Tricep,
    /// Below the shoulder blade
    Subscapular,
    /// Above the iliac crest
    Suprailiac,
    /// Mid-axillary line
    Midaxillary,
    /// Anterior upper arm
    Bicep,
    /// Lower back
    LowerBack,
    /// Medial calf
    Calf,
}

/// Skinfold thicknesses in millimeters
///
/// Values are expected in `[0, 100]` mm; the range is enforced by callers,
/// not by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaliperMeasurements {
    /// Chest skinfold (mm)
    pub chest: Option<f64>,
    /// Abdominal skinfold (mm)
    pub abdominal: Option<f64>,
    /// Thigh skinfold (mm)
    pub thigh: Option<f64>,
    /// Tricep skinfold (mm)
    pub tricep: Option<f64>,
    /// Subscapular skinfold (mm)
    pub subscapular: Option<f64>,
    /// Suprailiac skinfold (mm)
    pub suprailiac: Option<f64>,
    /// Midaxillary skinfold (mm)
    pub midaxillary: Option<f64>,
    /// Bicep skinfold (mm)
    pub bicep: Option<f64>,
    /// Lower back skinfold (mm)
    pub lower_back: Option<f64>,
    /// Calf skinfold (mm)
    pub calf: Option<f64>,
}

impl CaliperMeasurements {
    /// Present value at a site
    #[must_use]
    pub fn get(&self, site: CaliperSite) -> Option<f64> {
        present(match site {
            CaliperSite::Chest => self.chest,
            CaliperSite::Abdominal => self.abdominal,
            CaliperSite::Thigh => self.thigh,
            CaliperSite::Tricep => self.tricep,
            CaliperSite::Subscapular => self.subscapular,
            CaliperSite::Suprailiac => self.suprailiac,
            CaliperSite::Midaxillary => self.midaxillary,
            CaliperSite::Bicep => self.bicep,
            CaliperSite::LowerBack => self.lower_back,
            CaliperSite::Calf => self.calf,
        })
    }

    /// Whether every listed site has a present value
    #[must_use]
    pub fn has_all(&self, sites: &[CaliperSite]) -> bool {
        sites.iter().all(|site| self.get(*site).is_some())
    }

    /// Reject non-finite or negative readings
    ///
    /// Zero stays allowed and simply counts as not measured.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` naming the first offending site
    pub fn validate(&self) -> AppResult<()> {
        check_readings(
            "Skinfold",
            "millimeters",
            &[
                ("chest", self.chest),
                ("abdominal", self.abdominal),
                ("thigh", self.thigh),
                ("tricep", self.tricep),
                ("subscapular", self.subscapular),
                ("suprailiac", self.suprailiac),
                ("midaxillary", self.midaxillary),
                ("bicep", self.bicep),
                ("lower_back", self.lower_back),
                ("calf", self.calf),
            ],
        )
    }

    /// Sum of the listed sites, or `None` if any is missing
    #[must_use]
    pub fn sum(&self, sites: &[CaliperSite]) -> Option<f64> {
        sites
            .iter()
            .try_fold(0.0, |acc, site| self.get(*site).map(|v| acc + v))
    }
}

/// Circumference sites measured with a tape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TapeSite {
    /// Neck, below the larynx
    Neck,
    /// Waist at the navel
    Waist,
    /// Hip at the widest point
    Hip,
    /// Wrist
    Wrist,
    /// Ankle
    Ankle,
    /// Forearm at the widest point
    Forearm,
    /// Thigh circumference
    Thigh,
    /// Calf circumference
    Calf,
}

/// Circumferences in centimeters
///
/// Plausible ranges are method-specific (for example waist 40-200 cm) and
/// advisory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TapeMeasurements {
    /// Neck circumference (cm)
    pub neck: Option<f64>,
    /// Waist circumference (cm)
    pub waist: Option<f64>,
    /// Hip circumference (cm)
    pub hip: Option<f64>,
    /// Wrist circumference (cm)
    pub wrist: Option<f64>,
    /// Ankle circumference (cm)
    pub ankle: Option<f64>,
    /// Forearm circumference (cm)
    pub forearm: Option<f64>,
    /// Thigh circumference (cm)
    pub thigh: Option<f64>,
    /// Calf circumference (cm)
    pub calf: Option<f64>,
}

impl TapeMeasurements {
    /// Present value at a site
    #[must_use]
    pub fn get(&self, site: TapeSite) -> Option<f64> {
        present(match site {
            TapeSite::Neck => self.neck,
            TapeSite::Waist => self.waist,
            TapeSite::Hip => self.hip,
            TapeSite::Wrist => self.wrist,
            TapeSite::Ankle => self.ankle,
            TapeSite::Forearm => self.forearm,
            TapeSite::Thigh => self.thigh,
            TapeSite::Calf => self.calf,
        })
    }

    /// Whether every listed site has a present value
    #[must_use]
    pub fn has_all(&self, sites: &[TapeSite]) -> bool {
        sites.iter().all(|site| self.get(*site).is_some())
    }

    /// Reject non-finite or negative readings
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` naming the first offending site
    pub fn validate(&self) -> AppResult<()> {
        check_readings(
            "Circumference",
            "centimeters",
            &[
                ("neck", self.neck),
                ("waist", self.waist),
                ("hip", self.hip),
                ("wrist", self.wrist),
                ("ankle", self.ankle),
                ("forearm", self.forearm),
                ("thigh", self.thigh),
                ("calf", self.calf),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn zero_and_missing_sites_are_absent() {
        let caliper = CaliperMeasurements {
            chest: Some(10.0),
            abdominal: Some(0.0),
            ..CaliperMeasurements::default()
        };
        assert_eq!(caliper.get(CaliperSite::Chest), Some(10.0));
        assert_eq!(caliper.get(CaliperSite::Abdominal), None);
        assert_eq!(caliper.get(CaliperSite::Thigh), None);
    }

    #[test]
    fn sum_requires_every_site() {
        let caliper = CaliperMeasurements {
            chest: Some(10.0),
            abdominal: Some(15.0),
            thigh: Some(12.0),
            ..CaliperMeasurements::default()
        };
        let sites = [CaliperSite::Chest, CaliperSite::Abdominal, CaliperSite::Thigh];
        assert_eq!(caliper.sum(&sites), Some(37.0));
        assert_eq!(caliper.sum(&[CaliperSite::Chest, CaliperSite::Calf]), None);
    }

    #[test]
    fn tape_has_all_checks_presence() {
        let tape = TapeMeasurements {
            neck: Some(38.0),
            waist: Some(85.0),
            ..TapeMeasurements::default()
        };
        assert!(tape.has_all(&[TapeSite::Neck, TapeSite::Waist]));
        assert!(!tape.has_all(&[TapeSite::Neck, TapeSite::Hip]));
    }

    #[test]
    fn validation_rejects_impossible_readings() {
        let caliper = CaliperMeasurements {
            chest: Some(0.0),
            thigh: Some(12.0),
            ..CaliperMeasurements::default()
        };
        assert!(caliper.validate().is_ok());

        let negative = CaliperMeasurements {
            suprailiac: Some(-3.0),
            ..caliper
        };
        let err = negative.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("suprailiac"));

        let tape = TapeMeasurements {
            waist: Some(f64::NAN),
            ..TapeMeasurements::default()
        };
        let err = tape.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("waist"));
        assert!(TapeMeasurements::default().validate().is_ok());
    }
}
