// ABOUTME: Canonical weather observation consumed by the riding-condition engine
// ABOUTME: One immutable data point (current, hourly, or daily aggregate) in canonical units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single normalized weather data point
///
/// All values are in canonical units: degrees Celsius, km/h, kilometers and
/// percent. Optional fields use `None` for "unknown", never a sentinel zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Point in time the observation applies to
    pub timestamp: DateTime<Utc>,
    /// Air temperature in Celsius
    pub temperature: f64,
    /// Apparent temperature in Celsius
    pub feels_like: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Wind speed in km/h
    pub wind_speed_kmh: f64,
    /// Probability of precipitation percentage (0-100)
    pub precipitation_chance: f64,
    /// Visibility in kilometers, `None` when the provider did not report it
    pub visibility_km: Option<f64>,
    /// UV index
    pub uv_index: Option<f64>,
    /// Provider description (e.g. "light rain")
    pub description: String,
    /// Provider icon code
    pub icon_code: String,
    /// Daily high in Celsius (daily aggregates only)
    pub high_temp: Option<f64>,
    /// Daily low in Celsius (daily aggregates only)
    pub low_temp: Option<f64>,
}

impl WeatherObservation {
    /// Create an observation with the fields the engine reads
    ///
    /// `feels_like` starts equal to `temperature`, humidity at zero, and every
    /// optional field absent.
    #[must_use]
    pub fn new(
        timestamp: DateTime<Utc>,
        temperature: f64,
        wind_speed_kmh: f64,
        precipitation_chance: f64,
    ) -> Self {
        Self {
            timestamp,
            temperature,
            feels_like: temperature,
            humidity: 0,
            wind_speed_kmh,
            precipitation_chance,
            visibility_km: None,
            uv_index: None,
            description: String::new(),
            icon_code: String::new(),
            high_temp: None,
            low_temp: None,
        }
    }

    /// Set visibility in kilometers
    #[must_use]
    pub const fn with_visibility(mut self, visibility_km: f64) -> Self {
        self.visibility_km = Some(visibility_km);
        self
    }

    /// Mark as a daily aggregate with its high and low
    #[must_use]
    pub const fn with_daily_range(mut self, high_temp: f64, low_temp: f64) -> Self {
        self.high_temp = Some(high_temp);
        self.low_temp = Some(low_temp);
        self
    }

    /// Whether this observation summarizes a whole day
    #[must_use]
    pub const fn is_daily_aggregate(&self) -> bool {
        self.high_temp.is_some() || self.low_temp.is_some()
    }
}
