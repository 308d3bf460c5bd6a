// ABOUTME: Safe riding window search configuration
// ABOUTME: Good-hour predicate limits, minimum window length, and unsafe stretch length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::riding_constants::window_defaults::{
    MAX_PRECIPITATION_CHANCE, MAX_TEMPERATURE_CELSIUS, MAX_WIND_KMH, MIN_TEMPERATURE_CELSIUS,
    MIN_UNSAFE_STRETCH_HOURS, MIN_WINDOW_HOURS,
};
use serde::{Deserialize, Serialize};

/// Window Finder configuration
///
/// The good-hour predicate is a direct field check, separate from the
/// confidence score bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Precipitation chance must be strictly below this (%)
    pub max_precipitation_chance: f64,
    /// Wind must be strictly below this (km/h)
    pub max_wind_kmh: f64,
    /// Inclusive lower temperature bound (°C)
    pub min_temperature_celsius: f64,
    /// Inclusive upper temperature bound (°C)
    pub max_temperature_celsius: f64,
    /// Shortest window to report, in hours
    pub min_window_hours: u32,
    /// Shortest unsafe stretch to report, in consecutive observations
    pub min_unsafe_stretch_hours: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            max_precipitation_chance: MAX_PRECIPITATION_CHANCE,
            max_wind_kmh: MAX_WIND_KMH,
            min_temperature_celsius: MIN_TEMPERATURE_CELSIUS,
            max_temperature_celsius: MAX_TEMPERATURE_CELSIUS,
            min_window_hours: MIN_WINDOW_HOURS,
            min_unsafe_stretch_hours: MIN_UNSAFE_STRETCH_HOURS,
        }
    }
}
