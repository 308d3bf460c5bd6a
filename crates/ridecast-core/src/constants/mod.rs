// ABOUTME: Application-wide constants for Ridecast organized by domain
// ABOUTME: Unit conversion factors and observation value domains
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Shared constants

/// Unit conversion factors used at the normalization boundary
pub mod unit_conversions {
    /// Meters per second to kilometers per hour
    pub const MS_TO_KMH_FACTOR: f64 = 3.6;

    /// Miles per hour to kilometers per hour
    pub const MPH_TO_KMH_FACTOR: f64 = 1.609_344;

    /// Meters in one kilometer
    pub const METERS_PER_KILOMETER: f64 = 1000.0;

    /// Statute miles to kilometers
    pub const MILES_TO_KM_FACTOR: f64 = 1.609_344;

    /// Fahrenheit offset used in the Celsius conversion
    pub const FAHRENHEIT_OFFSET: f64 = 32.0;

    /// Fahrenheit degrees per Celsius degree
    pub const FAHRENHEIT_PER_CELSIUS: f64 = 1.8;
}

/// Valid domains for percentage-valued observation fields
pub mod observation_limits {
    /// Lowest valid percentage (humidity, precipitation chance)
    pub const MIN_PERCENT: f64 = 0.0;

    /// Highest valid percentage (humidity, precipitation chance)
    pub const MAX_PERCENT: f64 = 100.0;
}
