// ABOUTME: Anthropometric profile and gender types with boundary validation
// ABOUTME: The validated profile is the only way body data enters the formula engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Biological sex used by sex-branching formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male coefficients
    Male,
    /// Female coefficients
    Female,
}

impl Gender {
    /// Get gender name for logging and serialization
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Pick the male or female value
    #[must_use]
    pub fn select<T>(&self, male: T, female: T) -> T {
        match self {
            Self::Male => male,
            Self::Female => female,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::unknown_selector("gender", other, "male, female")),
        }
    }
}

/// Unvalidated profile fields as received from a caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    /// Age in whole years
    pub age: u32,
    /// Biological sex
    pub gender: Gender,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Measured or estimated body fat percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
}

/// Validated anthropometric input for every formula in the engine
///
/// Construction goes through [`AnthropometricProfile::new`], which rejects
/// non-positive age, weight, or height and body fat outside `[0, 100]`.
/// Formulas can therefore take logarithms and powers without re-checking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileInput", into = "ProfileInput")]
pub struct AnthropometricProfile {
    age: u32,
    gender: Gender,
    weight_kg: f64,
    height_cm: f64,
    body_fat_percent: Option<f64>,
}

impl AnthropometricProfile {
    /// Build a profile without body fat
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` if weight or height is not finite, and
    /// `ErrorCode::ValueOutOfRange` if age, weight, or height is not positive
    pub fn new(age: u32, gender: Gender, weight_kg: f64, height_cm: f64) -> AppResult<Self> {
        Self::try_from(ProfileInput {
            age,
            gender,
            weight_kg,
            height_cm,
            body_fat_percent: None,
        })
    }

    /// Return a copy carrying the given body fat percentage
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` for a non-finite percentage and
    /// `ErrorCode::ValueOutOfRange` for one outside `[0, 100]`
    pub fn with_body_fat(self, body_fat_percent: f64) -> AppResult<Self> {
        validate_body_fat(body_fat_percent)?;
        Ok(Self {
            body_fat_percent: Some(body_fat_percent),
            ..self
        })
    }

    /// Age in years
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Age as a float for regression terms
    #[must_use]
    pub fn age_years(&self) -> f64 {
        f64::from(self.age)
    }

    /// Biological sex
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Body fat percentage, if known
    #[must_use]
    pub const fn body_fat_percent(&self) -> Option<f64> {
        self.body_fat_percent
    }

    /// Lean body mass in kilograms when a positive body fat percentage is known
    #[must_use]
    pub fn lean_mass_kg(&self) -> Option<f64> {
        self.body_fat_percent
            .filter(|bf| *bf > 0.0)
            .map(|bf| self.weight_kg * (1.0 - bf / 100.0))
    }
}

impl TryFrom<ProfileInput> for AnthropometricProfile {
    type Error = AppError;

    fn try_from(input: ProfileInput) -> Result<Self, Self::Error> {
        validate_profile(&input).inspect_err(|e| {
            debug!(
                age = input.age,
                weight_kg = input.weight_kg,
                height_cm = input.height_cm,
                code = %e.code,
                "Rejected anthropometric profile"
            );
        })?;

        Ok(Self {
            age: input.age,
            gender: input.gender,
            weight_kg: input.weight_kg,
            height_cm: input.height_cm,
            body_fat_percent: input.body_fat_percent,
        })
    }
}

impl From<AnthropometricProfile> for ProfileInput {
    fn from(profile: AnthropometricProfile) -> Self {
        Self {
            age: profile.age,
            gender: profile.gender,
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
            body_fat_percent: profile.body_fat_percent,
        }
    }
}

fn validate_profile(input: &ProfileInput) -> AppResult<()> {
    if input.age == 0 {
        return Err(AppError::value_out_of_range("Age must be at least 1 year"));
    }
    validate_positive("Weight", "kilograms", input.weight_kg)?;
    validate_positive("Height", "centimeters", input.height_cm)?;
    if let Some(bf) = input.body_fat_percent {
        validate_body_fat(bf)?;
    }
    Ok(())
}

fn validate_positive(field: &str, unit: &str, value: f64) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::invalid_input(format!(
            "{field} must be a finite number of {unit}, got {value}"
        )));
    }
    if value <= 0.0 {
        return Err(AppError::value_out_of_range(format!(
            "{field} must be a positive number of {unit}, got {value}"
        )));
    }
    Ok(())
}

fn validate_body_fat(body_fat_percent: f64) -> AppResult<()> {
    if !body_fat_percent.is_finite() {
        return Err(AppError::invalid_input(format!(
            "Body fat percentage must be a finite number, got {body_fat_percent}"
        )));
    }
    if !(0.0..=100.0).contains(&body_fat_percent) {
        return Err(AppError::value_out_of_range(format!(
            "Body fat percentage must be between 0 and 100, got {body_fat_percent}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn rejects_non_positive_dimensions() {
        let zero_age = AnthropometricProfile::new(0, Gender::Male, 80.0, 180.0);
        assert!(matches!(zero_age, Err(e) if e.code == ErrorCode::ValueOutOfRange));

        let negative = AnthropometricProfile::new(30, Gender::Male, -1.0, 180.0);
        assert!(matches!(negative, Err(e) if e.code == ErrorCode::ValueOutOfRange));
        assert!(AnthropometricProfile::new(30, Gender::Male, 80.0, 0.0).is_err());
    }

    #[test]
    fn non_finite_numbers_are_invalid_input() {
        let nan_weight = AnthropometricProfile::new(30, Gender::Female, f64::NAN, 165.0);
        assert!(matches!(nan_weight, Err(e) if e.code == ErrorCode::InvalidInput));

        let infinite_height = AnthropometricProfile::new(30, Gender::Male, 80.0, f64::INFINITY);
        assert!(matches!(infinite_height, Err(e) if e.code == ErrorCode::InvalidInput));

        let profile = AnthropometricProfile::new(30, Gender::Male, 80.0, 180.0).unwrap();
        let nan_fat = profile.with_body_fat(f64::NAN).unwrap_err();
        assert_eq!(nan_fat.code, ErrorCode::InvalidInput);
        assert_eq!(
            profile.with_body_fat(-2.0).unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
    }

    #[test]
    fn body_fat_must_be_a_percentage() {
        let profile = AnthropometricProfile::new(30, Gender::Female, 60.0, 165.0);
        assert!(profile.is_ok_and(|p| p.with_body_fat(101.0).is_err()));
    }

    #[test]
    fn lean_mass_requires_positive_body_fat() {
        let profile = AnthropometricProfile::new(30, Gender::Male, 80.0, 180.0).unwrap();
        assert_eq!(profile.lean_mass_kg(), None);

        let with_zero = profile.with_body_fat(0.0).ok();
        assert_eq!(with_zero.and_then(|p| p.lean_mass_kg()), None);

        let lean = profile.with_body_fat(15.0).ok().and_then(|p| p.lean_mass_kg());
        assert!(lean.is_some_and(|lbm| (lbm - 68.0).abs() < 1e-9));
    }

    #[test]
    fn deserialization_runs_boundary_validation() {
        let bad = r#"{"age":30,"gender":"male","weight_kg":-5.0,"height_cm":180.0}"#;
        assert!(serde_json::from_str::<AnthropometricProfile>(bad).is_err());

        let good = r#"{"age":30,"gender":"female","weight_kg":60.0,"height_cm":165.0,"body_fat_percent":24.0}"#;
        let profile = serde_json::from_str::<AnthropometricProfile>(good).ok();
        assert_eq!(profile.and_then(|p| p.body_fat_percent()), Some(24.0));
    }

    #[test]
    fn gender_parses_case_insensitively() {
        assert_eq!("Female".parse::<Gender>().ok(), Some(Gender::Female));
        assert!("other".parse::<Gender>().is_err());
    }
}
