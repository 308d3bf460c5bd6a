// ABOUTME: Shared test utilities and observation builders for integration tests
// ABOUTME: Provides hourly and daily series constructors and a deterministic analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `ridecast`

use chrono::{DateTime, Duration, TimeZone, Utc};
use ridecast::intelligence::{RidingAnalyzer, RidingConfig};
use ridecast::models::WeatherObservation;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Analyzer with default thresholds, independent of the environment
pub fn analyzer() -> RidingAnalyzer {
    RidingAnalyzer::with_config(RidingConfig::default())
}

/// Fixed reference instant: 2026-06-01 06:00 UTC
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 6, 0, 0).unwrap()
}

/// Timestamp `hours` after [`base_time`]
pub fn at_hour(hours: i64) -> DateTime<Utc> {
    base_time() + Duration::hours(hours)
}

/// Observation with clear visibility
pub fn observation(temperature: f64, wind_kmh: f64, precipitation: f64) -> WeatherObservation {
    WeatherObservation::new(base_time(), temperature, wind_kmh, precipitation).with_visibility(10.0)
}

/// Hour that passes the safe window predicate and scores 100
pub fn good_hour(hours: i64) -> WeatherObservation {
    WeatherObservation::new(at_hour(hours), 22.0, 10.0, 0.0).with_visibility(10.0)
}

/// Hour that fails the safe window predicate (heavy rain chance)
pub fn wet_hour(hours: i64) -> WeatherObservation {
    WeatherObservation::new(at_hour(hours), 22.0, 10.0, 60.0).with_visibility(10.0)
}

/// Hour rated unsafe: rain plus poor visibility scores 40
pub fn unsafe_hour(hours: i64) -> WeatherObservation {
    WeatherObservation::new(at_hour(hours), 22.0, 10.0, 60.0).with_visibility(2.0)
}

/// Build an hourly series from a pattern, one character per hour
///
/// `G` good, `W` wet (fails the window but scores 60), `U` unsafe.
pub fn hourly_from_pattern(pattern: &str) -> Vec<WeatherObservation> {
    pattern
        .chars()
        .zip(0_i64..)
        .map(|(c, hour)| match c {
            'G' => good_hour(hour),
            'U' => unsafe_hour(hour),
            _ => wet_hour(hour),
        })
        .collect()
}

/// Daily aggregate for day `day` with the given riding inputs
pub fn day(day: i64, temperature: f64, wind_kmh: f64, precipitation: f64) -> WeatherObservation {
    WeatherObservation::new(
        base_time() + Duration::days(day),
        temperature,
        wind_kmh,
        precipitation,
    )
    .with_visibility(10.0)
    .with_daily_range(temperature + 4.0, temperature - 4.0)
}
