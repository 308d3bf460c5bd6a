// ABOUTME: Benchmark fixtures generating deterministic hourly and daily forecast series
// ABOUTME: Mixes good, marginal, and unsafe hours so every scan branch is exercised
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark forecast fixtures.
//!
//! Values follow a fixed pattern so runs are reproducible.

use chrono::{DateTime, Duration, TimeZone, Utc};
use ridecast::models::WeatherObservation;

/// Predefined forecast lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum ForecastLength {
    /// Two days of hourly data, a typical provider response
    TwoDays,
    /// Two weeks of hourly data
    TwoWeeks,
    /// A full year of hourly data - stress test
    Year,
}

impl ForecastLength {
    #[must_use]
    pub const fn hours(self) -> usize {
        match self {
            Self::TwoDays => 48,
            Self::TwoWeeks => 336,
            Self::Year => 8760,
        }
    }
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Generate an hourly series cycling through dry, windy, and wet spells
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_hourly(length: ForecastLength) -> Vec<WeatherObservation> {
    let base = base_time();
    (0..length.hours())
        .map(|hour| {
            let phase = hour % 24;
            let temperature = 12.0 + (phase as f64) * 0.9;
            let wind = 8.0 + ((hour * 7) % 35) as f64;
            let rain = if hour % 11 < 3 { 60.0 } else { 0.0 };
            WeatherObservation::new(
                base + Duration::hours(hour as i64),
                temperature,
                wind,
                rain,
            )
            .with_visibility(if hour % 17 == 0 { 2.0 } else { 10.0 })
        })
        .collect()
}

/// Generate a daily series of `days` aggregates
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_daily(days: usize) -> Vec<WeatherObservation> {
    let base = base_time();
    (0..days)
        .map(|day| {
            let high = 18.0 + ((day * 5) % 17) as f64;
            let low = high - 9.0;
            WeatherObservation::new(
                base + Duration::days(day as i64),
                (high + low) / 2.0,
                10.0 + ((day * 3) % 25) as f64,
                ((day * 13) % 70) as f64,
            )
            .with_visibility(10.0)
            .with_daily_range(high, low)
        })
        .collect()
}
