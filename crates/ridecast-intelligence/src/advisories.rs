// ABOUTME: Ordered riding advisories and gear suggestions for one observation
// ABOUTME: Fixed checklist order for advisories, base-plus-conditional list for gear
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Advisory and gear recommendations
//!
//! Advisories are evaluated in a fixed order: high temperature, low temperature,
//! high wind, precipitation, low visibility. Each check contributes at most one
//! line. When nothing fires the list holds exactly one "good conditions" line.
//!
//! Gear always starts with the base kit; cold, wet and hot additions are
//! independent and can all apply at once.

use crate::config::AdvisoryConfig;
use ridecast_core::models::WeatherObservation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One advisory line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideAdvisory {
    /// Temperature above the hot threshold
    HighTemperature,
    /// Temperature below the cold threshold
    LowTemperature,
    /// Wind above the advisory threshold
    HighWind,
    /// Nonzero precipitation chance
    Precipitation,
    /// Reported visibility below the threshold
    LowVisibility,
    /// Nothing else fired
    GoodConditions,
}

impl RideAdvisory {
    /// Human-readable advisory text
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::HighTemperature => {
                "High temperatures: stay hydrated and take regular breaks in the shade"
            }
            Self::LowTemperature => {
                "Cold conditions: allow tires to warm up and watch for slick patches"
            }
            Self::HighWind => "Strong winds: keep a relaxed grip and expect gusts on open roads",
            Self::Precipitation => {
                "Rain possible: reduce speed and increase your following distance"
            }
            Self::LowVisibility => "Reduced visibility: use your headlight and ride defensively",
            Self::GoodConditions => "Conditions look good for riding. Enjoy the ride!",
        }
    }
}

impl fmt::Display for RideAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One gear suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GearItem {
    /// Always recommended
    BaseProtection,
    /// Temperature below the cold gear threshold
    ColdWeatherLayers,
    /// Nonzero precipitation chance
    WetWeatherGear,
    /// Temperature above the hot gear threshold
    VentilatedGear,
}

impl GearItem {
    /// Human-readable gear text
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::BaseProtection => "DOT-approved helmet, armored jacket, gloves, and riding boots",
            Self::ColdWeatherLayers => "Thermal base layer, insulated gloves, and a neck warmer",
            Self::WetWeatherGear => "Waterproof rain suit, boot covers, and an anti-fog visor",
            Self::VentilatedGear => "Mesh jacket, cooling vest, and moisture-wicking layers",
        }
    }
}

impl fmt::Display for GearItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Advisories for an observation, in checklist order
#[must_use]
pub fn advisories(observation: &WeatherObservation, config: &AdvisoryConfig) -> Vec<RideAdvisory> {
    let low_visibility = observation
        .visibility_km
        .is_some_and(|km| km < config.low_visibility_km);

    let checks = [
        (
            observation.temperature > config.hot_celsius,
            RideAdvisory::HighTemperature,
        ),
        (
            observation.temperature < config.cold_celsius,
            RideAdvisory::LowTemperature,
        ),
        (
            observation.wind_speed_kmh > config.high_wind_kmh,
            RideAdvisory::HighWind,
        ),
        (
            observation.precipitation_chance > 0.0,
            RideAdvisory::Precipitation,
        ),
        (low_visibility, RideAdvisory::LowVisibility),
    ];

    let fired: Vec<RideAdvisory> = checks
        .into_iter()
        .filter_map(|(fires, advisory)| fires.then_some(advisory))
        .collect();

    if fired.is_empty() {
        vec![RideAdvisory::GoodConditions]
    } else {
        fired
    }
}

/// Gear for an observation, base kit first
#[must_use]
pub fn gear(observation: &WeatherObservation, config: &AdvisoryConfig) -> Vec<GearItem> {
    let mut items = vec![GearItem::BaseProtection];
    if observation.temperature < config.cold_gear_celsius {
        items.push(GearItem::ColdWeatherLayers);
    }
    if observation.precipitation_chance > 0.0 {
        items.push(GearItem::WetWeatherGear);
    }
    if observation.temperature > config.hot_gear_celsius {
        items.push(GearItem::VentilatedGear);
    }
    items
}
