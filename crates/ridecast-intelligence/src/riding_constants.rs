// ABOUTME: Default thresholds and penalties for riding-condition analysis
// ABOUTME: Temperature, wind, precipitation, and visibility limits plus window defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Riding-condition constants
//!
//! These are the defaults behind [`crate::config::RidingConfig`]. Temperatures are
//! in Celsius, wind speeds in km/h, visibility in kilometers, chances in percent.

/// Temperature bands used by the confidence score
pub mod temperature_thresholds {
    /// Below this the cold is severe enough for the full penalty (°C)
    pub const EXTREME_COLD_CELSIUS: f64 = 10.0;

    /// Above this the heat is severe enough for the full penalty (°C)
    pub const EXTREME_HOT_CELSIUS: f64 = 35.0;

    /// Lower edge of the comfort band (°C)
    pub const COMFORT_MIN_CELSIUS: f64 = 15.0;

    /// Upper edge of the comfort band (°C)
    pub const COMFORT_MAX_CELSIUS: f64 = 30.0;
}

/// Wind bands used by the confidence score (km/h)
pub mod wind_thresholds {
    /// Wind strictly above this takes the strong-wind penalty
    pub const STRONG_WIND_KMH: f64 = 30.0;

    /// Wind strictly above this takes the moderate-wind penalty
    pub const MODERATE_WIND_KMH: f64 = 20.0;
}

/// Visibility limits (km)
pub mod visibility_thresholds {
    /// Visibility strictly below this is poor
    pub const POOR_VISIBILITY_KM: f64 = 5.0;
}

/// Points deducted from a perfect score of 100
pub mod penalties {
    /// Temperature outside the extreme limits
    pub const EXTREME_TEMPERATURE: u8 = 30;

    /// Temperature between the extreme limits and the comfort band
    pub const MILD_TEMPERATURE: u8 = 15;

    /// Wind above the strong threshold
    pub const STRONG_WIND: u8 = 25;

    /// Wind above the moderate threshold
    pub const MODERATE_WIND: u8 = 15;

    /// Any nonzero chance of precipitation
    pub const PRECIPITATION: u8 = 40;

    /// Poor or unreported visibility
    pub const POOR_VISIBILITY: u8 = 20;
}

/// Confidence tiers
pub mod confidence_tiers {
    /// Perfect score before penalties
    pub const MAX_CONFIDENCE: u8 = 100;

    /// Lowest confidence still rated Good
    pub const GOOD_MIN_CONFIDENCE: u8 = 80;

    /// Lowest confidence still rated Moderate
    pub const MODERATE_MIN_CONFIDENCE: u8 = 50;
}

/// Thresholds for advisory and gear lines
pub mod advisory_thresholds {
    /// Hot-weather advisory above this (°C)
    pub const HOT_ADVISORY_CELSIUS: f64 = 30.0;

    /// Cold-weather advisory below this (°C)
    pub const COLD_ADVISORY_CELSIUS: f64 = 10.0;

    /// Wind advisory above this (km/h)
    pub const WIND_ADVISORY_KMH: f64 = 20.0;

    /// Visibility advisory below this (km)
    pub const VISIBILITY_ADVISORY_KM: f64 = 5.0;

    /// Cold-weather layers below this (°C)
    pub const COLD_GEAR_CELSIUS: f64 = 15.0;

    /// Ventilated gear above this (°C)
    pub const HOT_GEAR_CELSIUS: f64 = 25.0;
}

/// Safe riding window search defaults
pub mod window_defaults {
    /// Precipitation chance must stay strictly below this (%)
    pub const MAX_PRECIPITATION_CHANCE: f64 = 30.0;

    /// Wind must stay strictly below this (km/h)
    pub const MAX_WIND_KMH: f64 = 30.0;

    /// Inclusive lower temperature bound (°C)
    pub const MIN_TEMPERATURE_CELSIUS: f64 = 15.0;

    /// Inclusive upper temperature bound (°C)
    pub const MAX_TEMPERATURE_CELSIUS: f64 = 30.0;

    /// Shortest window worth recommending (hours)
    pub const MIN_WINDOW_HOURS: u32 = 3;

    /// Shortest run of unsafe hours worth flagging (observations)
    pub const MIN_UNSAFE_STRETCH_HOURS: usize = 3;
}
