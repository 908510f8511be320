// ABOUTME: Body density to body fat percentage conversion (Siri and Brozek equations)
// ABOUTME: Caller selects the equation; the engine never picks one automatically

use calculeat_core::constants::density::{
    BROZEK_NUMERATOR, BROZEK_OFFSET, SIRI_NUMERATOR, SIRI_OFFSET,
};
use calculeat_core::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Siri (1961): `495 / density - 450`
#[must_use]
pub fn siri(density: f64) -> f64 {
    SIRI_NUMERATOR / density - SIRI_OFFSET
}

/// Brozek (1963): `457 / density - 414.2`
#[must_use]
pub fn brozek(density: f64) -> f64 {
    BROZEK_NUMERATOR / density - BROZEK_OFFSET
}

/// Two-compartment density conversion equation
///
/// # Scientific References
///
/// - Siri, W.E. (1961). "Body composition from fluid spaces and density." *Techniques for Measuring Body Composition*, 223-244.
/// - Brozek, J. et al. (1963). "Densitometric analysis of body composition." *Ann N Y Acad Sci*, 110, 113-140.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DensityConversion {
    /// Siri equation (default)
    #[default]
    Siri,
    /// Brozek equation
    Brozek,
}

impl DensityConversion {
    /// Convert body density (g/cm³) to body fat percentage
    #[must_use]
    pub fn convert(&self, density: f64) -> f64 {
        match self {
            Self::Siri => siri(density),
            Self::Brozek => brozek(density),
        }
    }

    /// Get equation name for logging and debugging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Siri => "siri",
            Self::Brozek => "brozek",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Siri => "BF% = 495 / density - 450",
            Self::Brozek => "BF% = 457 / density - 414.2",
        }
    }
}

impl FromStr for DensityConversion {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "siri" => Ok(Self::Siri),
            "brozek" => Ok(Self::Brozek),
            other => Err(AppError::unknown_selector(
                "density conversion",
                other,
                "siri, brozek",
            )),
        }
    }
}
