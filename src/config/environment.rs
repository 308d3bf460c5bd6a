// ABOUTME: Environment-based application configuration for Ridecast
// ABOUTME: Log level, deployment environment, and forecast cache settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-only configuration. There are no config files: every setting
//! has a default and may be overridden through an environment variable.

use crate::constants::{cache::DEFAULT_FORECAST_TTL_MINUTES, env_vars};
use crate::errors::{AppError, AppResult};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::Level;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Forecast cache settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheSettings {
    /// Minutes a fetched forecast stays fresh
    pub ttl_minutes: u32,
}

impl CacheSettings {
    /// Freshness window as a duration
    #[must_use]
    pub fn ttl(self) -> Duration {
        Duration::minutes(i64::from(self.ttl_minutes))
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_minutes: DEFAULT_FORECAST_TTL_MINUTES,
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Application log level
    pub log_level: LogLevel,
    /// Forecast cache settings
    pub cache: CacheSettings,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a numeric variable cannot be parsed or is zero
    pub fn from_env() -> AppResult<Self> {
        let environment =
            Environment::from_str_or_default(&env::var(env_vars::ENVIRONMENT).unwrap_or_default());

        let log_level = LogLevel::from_str_or_default(
            &env::var(env_vars::LOG_LEVEL)
                .or_else(|_| env::var(env_vars::RUST_LOG))
                .unwrap_or_default(),
        );

        let ttl_minutes = match env::var(env_vars::CACHE_TTL_MINUTES) {
            Ok(value) => value.trim().parse::<u32>().map_err(|e| {
                AppError::config(format!("Invalid {}: {e}", env_vars::CACHE_TTL_MINUTES))
                    .with_source(e)
            })?,
            Err(_) => DEFAULT_FORECAST_TTL_MINUTES,
        };
        if ttl_minutes == 0 {
            return Err(AppError::config(format!(
                "{} must be at least 1 minute",
                env_vars::CACHE_TTL_MINUTES
            )));
        }

        Ok(Self {
            environment,
            log_level,
            cache: CacheSettings { ttl_minutes },
        })
    }
}
