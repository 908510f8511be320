// ABOUTME: Unified error types for the anthropometric engine boundary
// ABOUTME: Defines ErrorCode, AppError, and constructors for invalid input and unknown selectors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! The engine itself never fails for missing data (it returns `None`). Errors
//! only arise at the boundary: when a caller hands in out-of-domain numbers,
//! or names a formula, method, or PAL system the engine does not know.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field was not supplied
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A numeric value is outside its domain
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,
    /// Unrecognized formula, method, variation, or PAL system key
    #[serde(rename = "UNKNOWN_SELECTOR")]
    UnknownSelector = 3004,

    // Configuration (6000-6999)
    /// Configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::UnknownSelector => "The requested formula or method is not recognized",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
        }
    }

    /// Stable string form, matching the serde representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            Self::ValueOutOfRange => "VALUE_OUT_OF_RANGE",
            Self::UnknownSelector => "UNKNOWN_SELECTOR",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the engine boundary
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required field missing
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Missing required field: {field}"),
        )
    }

    /// Numeric value outside its domain
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Unknown selector key, listing the accepted values
    pub fn unknown_selector(kind: &str, value: &str, valid: &str) -> Self {
        Self::new(
            ErrorCode::UnknownSelector,
            format!("Unknown {kind}: '{value}'. Valid options: {valid}"),
        )
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Result alias used across the workspace
pub type AppResult<T> = Result<T, AppError>;
