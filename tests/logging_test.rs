// ABOUTME: Integration tests for logging configuration
// ABOUTME: Validates environment handling, verbose override, and filter construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ridecast::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

fn clear_logging_vars() {
    for key in [
        "LOG_LEVEL",
        "RUST_LOG",
        "LOG_FORMAT",
        "ENVIRONMENT",
        "LOG_INCLUDE_LOCATION",
    ] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_logging_vars();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    clear_logging_vars();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert!(config.include_location);
    assert_eq!(config.service_name, "ridecast");
}

#[test]
#[serial]
fn test_logging_config_from_env_defaults() {
    clear_logging_vars();
    let config = LoggingConfig::from_env();
    assert_eq!(config, LoggingConfig::default());
    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_log_level_takes_precedence_over_rust_log() {
    clear_logging_vars();
    env::set_var("RUST_LOG", "error");
    env::set_var("LOG_LEVEL", "DEBUG");

    let config = LoggingConfig::from_env();
    clear_logging_vars();

    assert_eq!(config.level, "debug");
}

#[test]
#[serial]
fn test_unknown_log_level_falls_back_to_info() {
    clear_logging_vars();
    env::set_var("LOG_LEVEL", "loud");

    let config = LoggingConfig::from_env();
    clear_logging_vars();

    assert_eq!(config.level, "info");
}

#[test]
#[serial]
fn test_environment_alias_enables_location() {
    clear_logging_vars();
    env::set_var("ENVIRONMENT", "prod");

    let config = LoggingConfig::from_env();
    clear_logging_vars();

    assert_eq!(config.environment, "production");
    assert!(config.include_location);
}

#[test]
fn test_verbose_raises_level_to_debug() {
    let config = LoggingConfig::default().verbose();
    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Compact);
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Compact);
}

#[test]
fn test_env_filter_includes_crate_directives() {
    let config = LoggingConfig::default().verbose();
    let filter = config.env_filter().to_string().to_lowercase();
    assert!(filter.contains("ridecast=debug"));
    assert!(filter.contains("ridecast_intelligence=debug"));
}

#[test]
fn test_second_init_reports_error() {
    let config = LoggingConfig::default();
    let first = config.init();
    let second = config.init();
    assert!(first.is_ok());
    assert!(second.is_err());
}
