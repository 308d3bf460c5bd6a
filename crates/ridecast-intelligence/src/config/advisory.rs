// ABOUTME: Advisory and gear recommendation thresholds
// ABOUTME: Controls when hot, cold, wind, rain, and visibility lines are emitted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::riding_constants::advisory_thresholds::{
    COLD_ADVISORY_CELSIUS, COLD_GEAR_CELSIUS, HOT_ADVISORY_CELSIUS, HOT_GEAR_CELSIUS,
    VISIBILITY_ADVISORY_KM, WIND_ADVISORY_KMH,
};
use serde::{Deserialize, Serialize};

/// Advisory and gear thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryConfig {
    /// Hot-weather advisory strictly above this (°C)
    pub hot_celsius: f64,
    /// Cold-weather advisory strictly below this (°C)
    pub cold_celsius: f64,
    /// Wind advisory strictly above this (km/h)
    pub high_wind_kmh: f64,
    /// Visibility advisory strictly below this (km), only when reported
    pub low_visibility_km: f64,
    /// Cold-weather layers strictly below this (°C)
    pub cold_gear_celsius: f64,
    /// Ventilated gear strictly above this (°C)
    pub hot_gear_celsius: f64,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            hot_celsius: HOT_ADVISORY_CELSIUS,
            cold_celsius: COLD_ADVISORY_CELSIUS,
            high_wind_kmh: WIND_ADVISORY_KMH,
            low_visibility_km: VISIBILITY_ADVISORY_KM,
            cold_gear_celsius: COLD_GEAR_CELSIUS,
            hot_gear_celsius: HOT_GEAR_CELSIUS,
        }
    }
}
