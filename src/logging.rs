// ABOUTME: Logging configuration and structured logging setup for the ridecast binary
// ABOUTME: EnvFilter registry with json, pretty, or compact output written to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging setup
//!
//! Logs always go to stderr so that `--format json` output on stdout stays
//! machine readable.

use crate::config::{Environment, LogLevel};
use crate::constants::{env_vars, service_names};
use anyhow::Result;
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, testing, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for interactive use
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to compact
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            service_name: service_names::RIDECAST.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// `LOG_LEVEL` takes precedence over a `RUST_LOG` filter directive.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let level = match env::var(env_vars::LOG_LEVEL) {
            Ok(value) => LogLevel::from_str_or_default(&value).to_string(),
            Err(_) => env::var(env_vars::RUST_LOG).unwrap_or(defaults.level),
        };
        let format = env::var(env_vars::LOG_FORMAT)
            .map_or(defaults.format, |value| LogFormat::from_str_or_default(&value));
        let environment =
            Environment::from_str_or_default(&env::var(env_vars::ENVIRONMENT).unwrap_or_default());
        let include_location =
            environment.is_production() || env::var(env_vars::LOG_INCLUDE_LOCATION).is_ok();

        Self {
            level,
            format,
            include_location,
            environment: environment.to_string(),
            ..defaults
        }
    }

    /// Raise the level to debug, as requested by `--verbose`
    #[must_use]
    pub fn verbose(self) -> Self {
        Self {
            level: "debug".into(),
            ..self
        }
    }

    /// Build the filter applied to every layer
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.level)
            .add_directive(
                format!("ridecast={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| LogLevel::default().to_tracing_level().into()),
            )
            .add_directive(
                format!("ridecast_intelligence={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| LogLevel::default().to_tracing_level().into()),
            )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE)
                    .json();
                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr);
                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_target(false)
                    .with_writer(io::stderr);
                registry.with(compact_layer).try_init()?;
            }
        }

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "ridecast starting up"
        );
        Ok(())
    }
}
