// ABOUTME: Engine configuration with formula defaults, calorie goal offsets, and auto macro targets
// ABOUTME: Loads defaults, applies CALCULEAT_* environment overrides, then validates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration
//!
//! Three sections:
//! - `defaults` - formula and method selection used when a request leaves it open
//! - `goals` - calorie floor and the offsets behind each calorie goal band
//! - `macros` - protein per kilogram and fat share for automatic allocation
//!
//! `EngineConfig::default()` reproduces the published constants, so a planner
//! run with defaults matches the plain algorithm functions exactly.

pub mod error;

pub use error::ConfigError;

use calculeat_core::constants::calorie_goals::{
    DEFAULT_CALORIE_FLOOR, GAIN_MAX_KCAL, GAIN_MIN_KCAL, GAIN_TARGET_KCAL, LOSS_BAND_KCAL,
    MAINTENANCE_BAND_STANDARD,
};
use calculeat_core::constants::macros::{
    FAT_FRACTION_LOSE, FAT_FRACTION_OTHER, PROTEIN_PER_KG_GAIN, PROTEIN_PER_KG_LOSE,
    PROTEIN_PER_KG_MAINTAIN,
};
use calculeat_intelligence::{
    AutoMacroSettings, BmrFormula, BodyCompositionMethod, DensityConversion, GoalSettings,
    PalSystem,
};
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Formula and method selection used when a request does not name one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// BMR formula
    pub bmr_formula: BmrFormula,
    /// PAL system
    pub pal_system: PalSystem,
    /// Density to body fat conversion
    pub density_conversion: DensityConversion,
    /// Body composition method, if body fat should be estimated by default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_composition_method: Option<BodyCompositionMethod>,
}

/// Calorie goal offsets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalsConfig {
    /// Lowest loss figure (kcal/day)
    pub calorie_floor: f64,
    /// Maintenance half-width as a percentage of TDEE
    pub maintenance_band_percent: f64,
    /// Half-width around a loss target (kcal/day)
    pub loss_band_kcal: f64,
    /// Gain target above TDEE (kcal/day)
    pub gain_target_kcal: f64,
    /// Gain minimum above TDEE (kcal/day)
    pub gain_min_kcal: f64,
    /// Gain maximum above TDEE (kcal/day)
    pub gain_max_kcal: f64,
}

impl Default for GoalsConfig {
    fn default() -> Self {
        Self {
            calorie_floor: DEFAULT_CALORIE_FLOOR,
            maintenance_band_percent: MAINTENANCE_BAND_STANDARD * 100.0,
            loss_band_kcal: LOSS_BAND_KCAL,
            gain_target_kcal: GAIN_TARGET_KCAL,
            gain_min_kcal: GAIN_MIN_KCAL,
            gain_max_kcal: GAIN_MAX_KCAL,
        }
    }
}

impl GoalsConfig {
    /// Settings handed to the calorie goal resolver
    #[must_use]
    pub fn settings(&self) -> GoalSettings {
        GoalSettings {
            calorie_floor: self.calorie_floor,
            maintenance_fraction: self.maintenance_band_percent / 100.0,
            loss_band_kcal: self.loss_band_kcal,
            gain_target_kcal: self.gain_target_kcal,
            gain_min_kcal: self.gain_min_kcal,
            gain_max_kcal: self.gain_max_kcal,
        }
    }
}

/// Automatic macro targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacrosConfig {
    /// Protein g/kg when losing
    pub protein_per_kg_lose: f64,
    /// Protein g/kg when gaining
    pub protein_per_kg_gain: f64,
    /// Protein g/kg when maintaining
    pub protein_per_kg_maintain: f64,
    /// Fat share of calories when losing
    pub fat_fraction_lose: f64,
    /// Fat share of calories otherwise
    pub fat_fraction_other: f64,
}

impl Default for MacrosConfig {
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

impl MacrosConfig {
    /// Settings handed to the automatic macro allocator
    #[must_use]
    pub const fn settings(&self) -> AutoMacroSettings {
        AutoMacroSettings {
            protein_per_kg_lose: self.protein_per_kg_lose,
            protein_per_kg_gain: self.protein_per_kg_gain,
            protein_per_kg_maintain: self.protein_per_kg_maintain,
            fat_fraction_lose: self.fat_fraction_lose,
            fat_fraction_other: self.fat_fraction_other,
        }
    }
}

/// Main engine configuration container
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Formula and method defaults
    pub defaults: DefaultsConfig,
    /// Calorie goal offsets
    pub goals: GoalsConfig,
    /// Automatic macro targets
    pub macros: MacrosConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Check bounds and orderings
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        let goals = &self.goals;
        if !goals.calorie_floor.is_finite() || goals.calorie_floor < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "calorie_floor must be a non-negative number of kcal",
            ));
        }
        if !(0.0..50.0).contains(&goals.maintenance_band_percent) {
            return Err(ConfigError::ValueOutOfRange(
                "maintenance_band_percent must be in [0, 50)",
            ));
        }
        if !goals.loss_band_kcal.is_finite() || goals.loss_band_kcal < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "loss_band_kcal must be non-negative",
            ));
        }
        if goals.gain_min_kcal > goals.gain_target_kcal
            || goals.gain_target_kcal > goals.gain_max_kcal
        {
            return Err(ConfigError::InvalidRange(
                "gain offsets must satisfy min <= target <= max",
            ));
        }

        let macros = &self.macros;
        let protein = [
            macros.protein_per_kg_lose,
            macros.protein_per_kg_gain,
            macros.protein_per_kg_maintain,
        ];
        if protein.iter().any(|g| !g.is_finite() || *g <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "protein per kg must be positive",
            ));
        }
        let fat = [macros.fat_fraction_lose, macros.fat_fraction_other];
        if fat.iter().any(|f| !(0.0..1.0).contains(f)) {
            return Err(ConfigError::ValueOutOfRange(
                "fat fractions must be in [0, 1)",
            ));
        }

        Ok(())
    }

    /// Apply a single environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Some(val) = Self::read_env(env_var_name)? {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn read_env(env_var_name: &str) -> Result<Option<String>, ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => Ok(Some(val)),
            Err(VarError::NotPresent) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Selection defaults
        Self::apply_env_var("CALCULEAT_BMR_FORMULA", &mut self.defaults.bmr_formula)?;
        Self::apply_env_var("CALCULEAT_PAL_SYSTEM", &mut self.defaults.pal_system)?;
        Self::apply_env_var(
            "CALCULEAT_DENSITY_CONVERSION",
            &mut self.defaults.density_conversion,
        )?;
        if let Some(val) = Self::read_env("CALCULEAT_BODY_COMPOSITION_METHOD")? {
            self.defaults.body_composition_method = if val.trim().eq_ignore_ascii_case("none") {
                None
            } else {
                Some(val.parse().map_err(|_| {
                    ConfigError::Parse("Invalid CALCULEAT_BODY_COMPOSITION_METHOD".to_owned())
                })?)
            };
        }

        // Calorie goals
        Self::apply_env_var("CALCULEAT_CALORIE_FLOOR", &mut self.goals.calorie_floor)?;
        Self::apply_env_var(
            "CALCULEAT_MAINTENANCE_BAND_PERCENT",
            &mut self.goals.maintenance_band_percent,
        )?;
        Self::apply_env_var("CALCULEAT_LOSS_BAND_KCAL", &mut self.goals.loss_band_kcal)?;
        Self::apply_env_var(
            "CALCULEAT_GAIN_TARGET_KCAL",
            &mut self.goals.gain_target_kcal,
        )?;
        Self::apply_env_var("CALCULEAT_GAIN_MIN_KCAL", &mut self.goals.gain_min_kcal)?;
        Self::apply_env_var("CALCULEAT_GAIN_MAX_KCAL", &mut self.goals.gain_max_kcal)?;

        // Automatic macros
        Self::apply_env_var(
            "CALCULEAT_PROTEIN_PER_KG_LOSE",
            &mut self.macros.protein_per_kg_lose,
        )?;
        Self::apply_env_var(
            "CALCULEAT_PROTEIN_PER_KG_GAIN",
            &mut self.macros.protein_per_kg_gain,
        )?;
        Self::apply_env_var(
            "CALCULEAT_PROTEIN_PER_KG_MAINTAIN",
            &mut self.macros.protein_per_kg_maintain,
        )?;
        Self::apply_env_var(
            "CALCULEAT_FAT_FRACTION_LOSE",
            &mut self.macros.fat_fraction_lose,
        )?;
        Self::apply_env_var(
            "CALCULEAT_FAT_FRACTION_OTHER",
            &mut self.macros.fat_fraction_other,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_algorithm_constants() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.goals.settings(), GoalSettings::default());
        assert_eq!(config.macros.settings(), AutoMacroSettings::default());
        assert_eq!(config.defaults.bmr_formula, BmrFormula::MifflinStJeor);
        assert!(config.defaults.body_composition_method.is_none());
    }

    #[test]
    fn validate_rejects_unordered_gain_offsets() {
        let mut config = EngineConfig::default();
        config.goals.gain_min_kcal = 600.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        let mut config = EngineConfig::default();
        config.macros.fat_fraction_lose = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));

        let mut config = EngineConfig::default();
        config.goals.maintenance_band_percent = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_error_maps_to_config_code() {
        let err: calculeat_core::AppError = ConfigError::Parse("Invalid X".to_owned()).into();
        assert_eq!(err.code, calculeat_core::ErrorCode::ConfigInvalid);
    }
}
