// ABOUTME: Safe riding window search over an hourly forecast series
// ABOUTME: Single-pass longest-run scan plus the longest unsafe stretch dual
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Window Finder
//!
//! Both searches are one left-to-right pass over a time-ordered slice. They only
//! look at sequence order and each element's own fields, so the cadence of the
//! series is not assumed.

use crate::condition::RidingCondition;
use crate::config::{ScoringConfig, WindowConfig};
use crate::scoring;
use chrono::{DateTime, Duration, Utc};
use ridecast_core::models::WeatherObservation;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Contiguous span of good riding hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RidingWindow {
    /// Timestamp of the first passing observation
    pub start: DateTime<Utc>,
    /// Timestamp of the last passing observation
    pub end: DateTime<Utc>,
}

impl RidingWindow {
    /// Length of the window, from endpoint timestamps
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Contiguous run of hours rated [`RidingCondition::Unsafe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsafeStretch {
    /// Timestamp of the first unsafe observation
    pub start: DateTime<Utc>,
    /// Timestamp of the last unsafe observation
    pub end: DateTime<Utc>,
    /// Number of consecutive unsafe observations
    pub hours: usize,
}

/// Whether one observation passes the good riding predicate
///
/// `precipitation < max AND wind < max AND min <= temperature <= max`
#[must_use]
pub fn is_good_riding_hour(observation: &WeatherObservation, config: &WindowConfig) -> bool {
    observation.precipitation_chance < config.max_precipitation_chance
        && observation.wind_speed_kmh < config.max_wind_kmh
        && observation.temperature >= config.min_temperature_celsius
        && observation.temperature <= config.max_temperature_celsius
}

/// Longest contiguous run of good hours, if it lasts at least the minimum
///
/// Runs are measured between their first and last observation timestamps.
/// A longer run replaces the best only when strictly longer, so the earliest
/// run wins ties. A run still open at the end of the input is closed on the
/// final observation.
#[must_use]
pub fn find_safe_riding_window(
    hourly: &[WeatherObservation],
    config: &WindowConfig,
) -> Option<RidingWindow> {
    let mut best: Option<RidingWindow> = None;
    let mut open: Option<RidingWindow> = None;

    for observation in hourly {
        if is_good_riding_hour(observation, config) {
            open = Some(open.map_or(
                RidingWindow {
                    start: observation.timestamp,
                    end: observation.timestamp,
                },
                |run| RidingWindow {
                    end: observation.timestamp,
                    ..run
                },
            ));
        } else if let Some(run) = open.take() {
            keep_longer(&mut best, run);
        }
    }

    if let Some(run) = open {
        keep_longer(&mut best, run);
    }

    let minimum = Duration::hours(i64::from(config.min_window_hours));
    debug!(
        observations = hourly.len(),
        best_minutes = best.map(|w| w.duration().num_minutes()),
        minimum_hours = config.min_window_hours,
        "safe riding window scan complete"
    );
    best.filter(|window| window.duration() >= minimum)
}

fn keep_longer(best: &mut Option<RidingWindow>, candidate: RidingWindow) {
    if best.is_none_or(|current| candidate.duration() > current.duration()) {
        *best = Some(candidate);
    }
}

/// Longest run of consecutive unsafe hours, if it spans at least the minimum count
///
/// Hours are scored with `scoring`; the run length is the observation count.
/// The earliest run wins ties.
#[must_use]
pub fn find_longest_unsafe_stretch(
    hourly: &[WeatherObservation],
    scoring_config: &ScoringConfig,
    config: &WindowConfig,
) -> Option<UnsafeStretch> {
    let mut best: Option<UnsafeStretch> = None;
    let mut open: Option<UnsafeStretch> = None;

    for observation in hourly {
        let unsafe_hour = scoring::score(observation, scoring_config).condition
            == RidingCondition::Unsafe;
        if unsafe_hour {
            open = Some(open.map_or(
                UnsafeStretch {
                    start: observation.timestamp,
                    end: observation.timestamp,
                    hours: 1,
                },
                |run| UnsafeStretch {
                    end: observation.timestamp,
                    hours: run.hours + 1,
                    ..run
                },
            ));
        } else if let Some(run) = open.take() {
            keep_more_hours(&mut best, run);
        }
    }

    if let Some(run) = open {
        keep_more_hours(&mut best, run);
    }

    debug!(
        observations = hourly.len(),
        longest_hours = best.map(|s| s.hours),
        "unsafe stretch scan complete"
    );
    best.filter(|stretch| stretch.hours >= config.min_unsafe_stretch_hours)
}

fn keep_more_hours(best: &mut Option<UnsafeStretch>, candidate: UnsafeStretch) {
    if best.is_none_or(|current| candidate.hours > current.hours) {
        *best = Some(candidate);
    }
}
