// ABOUTME: Integration tests for environment-based application configuration
// ABOUTME: Validates log level and environment parsing plus cache TTL overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Duration;
use ridecast::config::{AppConfig, CacheSettings, Environment, LogLevel};
use ridecast::errors::ErrorCode;
use serial_test::serial;
use std::env;
use tracing::Level;

const APP_VARS: [&str; 5] = [
    "ENVIRONMENT",
    "LOG_LEVEL",
    "RUST_LOG",
    "RIDECAST_CACHE_TTL_MINUTES",
    "LOG_FORMAT",
];

fn clear_app_vars() {
    for key in APP_VARS {
        env::remove_var(key);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("info"), LogLevel::Info);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info);
}

#[test]
fn test_log_level_to_tracing() {
    assert_eq!(LogLevel::Debug.to_tracing_level(), Level::DEBUG);
    assert_eq!(LogLevel::Error.to_string(), "error");
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
    assert!(!Environment::Testing.is_production());
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_app_vars();
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.cache.ttl_minutes, 30);
    assert_eq!(config.cache.ttl(), Duration::minutes(30));
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
    clear_app_vars();
    env::set_var("ENVIRONMENT", "production");
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("RIDECAST_CACHE_TTL_MINUTES", "45");

    let config = AppConfig::from_env().unwrap();
    clear_app_vars();

    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.cache, CacheSettings { ttl_minutes: 45 });
}

#[test]
#[serial]
fn test_log_level_falls_back_to_rust_log() {
    clear_app_vars();
    env::set_var("RUST_LOG", "trace");
    let config = AppConfig::from_env().unwrap();
    clear_app_vars();
    assert_eq!(config.log_level, LogLevel::Trace);
}

#[test]
#[serial]
fn test_invalid_cache_ttl_is_a_config_error() {
    clear_app_vars();
    env::set_var("RIDECAST_CACHE_TTL_MINUTES", "soon");
    let err = AppConfig::from_env().unwrap_err();
    env::set_var("RIDECAST_CACHE_TTL_MINUTES", "0");
    let zero = AppConfig::from_env().unwrap_err();
    clear_app_vars();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("RIDECAST_CACHE_TTL_MINUTES"));
    assert_eq!(zero.code, ErrorCode::ConfigInvalid);
}
