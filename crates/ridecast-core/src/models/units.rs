// ABOUTME: Measurement unit types for incoming weather data
// ABOUTME: Converts provider units into the canonical Celsius, km/h, and kilometer units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Measurement units accepted at the snapshot boundary.
//!
//! The engine only ever sees Celsius, km/h and kilometers. Everything else is
//! converted once, when a forecast snapshot is normalized.

use crate::constants::unit_conversions::{
    FAHRENHEIT_OFFSET, FAHRENHEIT_PER_CELSIUS, METERS_PER_KILOMETER, MILES_TO_KM_FACTOR,
    MPH_TO_KMH_FACTOR, MS_TO_KMH_FACTOR,
};
use serde::{Deserialize, Serialize};

/// Temperature unit of incoming values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    /// Degrees Celsius (canonical)
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert a value in this unit to degrees Celsius
    #[must_use]
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - FAHRENHEIT_OFFSET) / FAHRENHEIT_PER_CELSIUS,
        }
    }
}

/// Wind speed unit of incoming values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindSpeedUnit {
    /// Kilometers per hour (canonical)
    #[default]
    KilometersPerHour,
    /// Meters per second, as returned by most metric weather APIs
    MetersPerSecond,
    /// Miles per hour
    MilesPerHour,
}

impl WindSpeedUnit {
    /// Convert a value in this unit to km/h
    #[must_use]
    pub fn to_kmh(self, value: f64) -> f64 {
        match self {
            Self::KilometersPerHour => value,
            Self::MetersPerSecond => value * MS_TO_KMH_FACTOR,
            Self::MilesPerHour => value * MPH_TO_KMH_FACTOR,
        }
    }
}

/// Visibility unit of incoming values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityUnit {
    /// Kilometers (canonical)
    #[default]
    Kilometers,
    /// Meters
    Meters,
    /// Statute miles
    Miles,
}

impl VisibilityUnit {
    /// Convert a value in this unit to kilometers
    #[must_use]
    pub fn to_km(self, value: f64) -> f64 {
        match self {
            Self::Kilometers => value,
            Self::Meters => value / METERS_PER_KILOMETER,
            Self::Miles => value * MILES_TO_KM_FACTOR,
        }
    }
}

/// Units declared by a forecast document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurementUnits {
    /// Unit of every temperature field
    pub temperature: TemperatureUnit,
    /// Unit of every wind speed field
    pub wind_speed: WindSpeedUnit,
    /// Unit of every visibility field
    pub visibility: VisibilityUnit,
}
