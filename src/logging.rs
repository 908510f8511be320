// ABOUTME: Logging configuration and structured logging setup for the nutrition engine
// ABOUTME: Configures log levels, formatters, and output destinations plus domain log helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging setup
//!
//! The engine crates only emit `tracing` events. Installing a subscriber is
//! left to the embedding application, which can call [`init_from_env`] or
//! build a [`LoggingConfig`] by hand.

use calculeat_core::{AppError, AppResult};
use serde_json::json;
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Default service name reported at startup
pub const SERVICE_NAME: &str = "calculeat";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Include span information for tracing
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, falling back to pretty output
    #[must_use]
    pub fn from_env_value(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = env::var("LOG_FORMAT")
            .map_or(LogFormat::Pretty, |value| LogFormat::from_env_value(&value));
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        // Production always gets location and thread detail
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: is_production || env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| SERVICE_NAME.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Build the filter: `RUST_LOG` when set, else the configured level
    fn env_filter(&self) -> EnvFilter {
        env::var("RUST_LOG")
            .map_or_else(
                |_| EnvFilter::new(&self.level),
                |env_directive| EnvFilter::new(&env_directive),
            )
            .add_directive(
                format!("calculeat={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::INFO.into()),
            )
    }

    fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> AppResult<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let installed = match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(self.span_events())
                    .json();

                registry.with(json_layer).try_init()
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(self.span_events());

                registry.with(pretty_layer).try_init()
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(io::stdout)
                    .with_span_events(FmtSpan::NONE);

                registry.with(compact_layer).try_init()
            }
        };
        installed.map_err(|e| AppError::internal(format!("Failed to install logger: {e}")))?;

        self.log_startup_info();

        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "CalculEat engine logging initialized"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                    "spans": self.include_spans
                }
            }
        });

        info!("Configuration loaded: {}", config_summary);
    }
}

/// Initialize logging with default configuration
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_default() -> AppResult<()> {
    LoggingConfig::default().init()
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> AppResult<()> {
    LoggingConfig::from_env().init()
}

/// Engine-specific logging utilities
pub struct EngineLogger;

impl EngineLogger {
    /// Log the outcome of one nutrition plan
    pub fn log_plan(
        bmr_formula: &str,
        pal_system: &str,
        goal: &str,
        bmr: Option<f64>,
        tdee: Option<u32>,
        target_kcal: Option<u32>,
    ) {
        tracing::debug!(
            plan.bmr_formula = %bmr_formula,
            plan.pal_system = %pal_system,
            plan.goal = %goal,
            plan.bmr = ?bmr,
            plan.tdee = ?tdee,
            plan.target_kcal = ?target_kcal,
            "Nutrition plan computed"
        );
    }

    /// Log body fat estimation
    pub fn log_body_fat_estimate(method: &str, variation: Option<&str>, percent: Option<f64>) {
        tracing::debug!(
            body_fat.method = %method,
            body_fat.variation = variation.unwrap_or("default"),
            body_fat.percent = ?percent,
            "Body fat estimated"
        );
    }

    /// Log a completed batch
    pub fn log_batch(requests: usize, planned_kcal: usize, duration_ms: u64) {
        info!(
            batch.requests = %requests,
            batch.with_targets = %planned_kcal,
            batch.duration_ms = %duration_ms,
            "Nutrition plan batch completed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parsing_falls_back_to_pretty() {
        assert_eq!(LogFormat::from_env_value("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_env_value("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::from_env_value("fancy"), LogFormat::Pretty);
    }

    #[test]
    fn default_config_is_pretty_info() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.service_name, SERVICE_NAME);
        assert!(!config.include_spans);
    }
}
