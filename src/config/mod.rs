// ABOUTME: Configuration module for the Ridecast application crate
// ABOUTME: Environment settings plus re-exports of the riding engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based application settings
pub mod environment;

pub use environment::{AppConfig, CacheSettings, Environment, LogLevel};
pub use ridecast_intelligence::config::{ConfigError, RidingConfig};
