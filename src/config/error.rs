// ABOUTME: Configuration error type raised while loading and validating engine settings
// ABOUTME: Converts into the engine-wide AppError with the CONFIG_INVALID code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use calculeat_core::AppError;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Lower and upper bounds are out of order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// An environment variable could not be read
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// An environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value lies outside its accepted domain
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string())
    }
}
