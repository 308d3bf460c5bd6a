// ABOUTME: Application-level constants for the ridecast crate
// ABOUTME: Environment variable names, service identity, and cache defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Riding engine thresholds live in `ridecast_intelligence::riding_constants`.

pub use ridecast_core::constants::{observation_limits, unit_conversions};

/// Service identity
pub mod service_names {
    /// Name reported in startup logs
    pub const RIDECAST: &str = "ridecast";
}

/// Environment variable names read by the application crate
pub mod env_vars {
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Tracing filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Explicit log level, takes precedence over `RUST_LOG`
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    /// Log output format
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Include file and line in log records
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Forecast freshness window in minutes
    pub const CACHE_TTL_MINUTES: &str = "RIDECAST_CACHE_TTL_MINUTES";
}

/// Forecast cache defaults
pub mod cache {
    /// Minutes a fetched forecast stays fresh
    pub const DEFAULT_FORECAST_TTL_MINUTES: u32 = 30;
}
