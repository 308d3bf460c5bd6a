// ABOUTME: Confidence scoring configuration for riding-condition analysis
// ABOUTME: Temperature, wind, precipitation, and visibility bands with their penalties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring Configuration
//!
//! Thresholds and penalty points for the additive confidence model.

use crate::riding_constants::{
    penalties::{
        EXTREME_TEMPERATURE, MILD_TEMPERATURE, MODERATE_WIND, POOR_VISIBILITY, PRECIPITATION,
        STRONG_WIND,
    },
    temperature_thresholds::{
        COMFORT_MAX_CELSIUS, COMFORT_MIN_CELSIUS, EXTREME_COLD_CELSIUS, EXTREME_HOT_CELSIUS,
    },
    visibility_thresholds::POOR_VISIBILITY_KM,
    wind_thresholds::{MODERATE_WIND_KMH, STRONG_WIND_KMH},
};
use serde::{Deserialize, Serialize};

/// Confidence scoring configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Temperature bands and penalties
    pub temperature: TemperatureBands,
    /// Wind bands and penalties
    pub wind: WindBands,
    /// Precipitation penalty
    pub precipitation: PrecipitationPenalty,
    /// Visibility threshold and penalty
    pub visibility: VisibilityBand,
}

/// Temperature bands in Celsius
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureBands {
    /// Full penalty strictly below this
    pub extreme_cold_celsius: f64,
    /// Full penalty strictly above this
    pub extreme_hot_celsius: f64,
    /// Mild penalty strictly below this
    pub comfort_min_celsius: f64,
    /// Mild penalty strictly above this
    pub comfort_max_celsius: f64,
    /// Points deducted outside the extreme limits
    pub extreme_penalty: u8,
    /// Points deducted between the extreme limits and the comfort band
    pub mild_penalty: u8,
}

/// Wind bands in km/h
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindBands {
    /// Strong-wind penalty strictly above this
    pub strong_kmh: f64,
    /// Moderate-wind penalty strictly above this
    pub moderate_kmh: f64,
    /// Points deducted for strong wind
    pub strong_penalty: u8,
    /// Points deducted for moderate wind
    pub moderate_penalty: u8,
}

/// Binary precipitation penalty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecipitationPenalty {
    /// Points deducted for any nonzero chance of precipitation
    pub penalty: u8,
}

/// Visibility threshold in kilometers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityBand {
    /// Penalty strictly below this, or when visibility is unreported
    pub poor_km: f64,
    /// Points deducted for poor visibility
    pub penalty: u8,
}

impl Default for TemperatureBands {
    fn default() -> Self {
        Self {
            extreme_cold_celsius: EXTREME_COLD_CELSIUS,
            extreme_hot_celsius: EXTREME_HOT_CELSIUS,
            comfort_min_celsius: COMFORT_MIN_CELSIUS,
            comfort_max_celsius: COMFORT_MAX_CELSIUS,
            extreme_penalty: EXTREME_TEMPERATURE,
            mild_penalty: MILD_TEMPERATURE,
        }
    }
}

impl Default for WindBands {
    fn default() -> Self {
        Self {
            strong_kmh: STRONG_WIND_KMH,
            moderate_kmh: MODERATE_WIND_KMH,
            strong_penalty: STRONG_WIND,
            moderate_penalty: MODERATE_WIND,
        }
    }
}

impl Default for PrecipitationPenalty {
    fn default() -> Self {
        Self {
            penalty: PRECIPITATION,
        }
    }
}

impl Default for VisibilityBand {
    fn default() -> Self {
        Self {
            poor_km: POOR_VISIBILITY_KM,
            penalty: POOR_VISIBILITY,
        }
    }
}
