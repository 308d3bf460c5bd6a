// ABOUTME: Core data models shared by the engine and the application crate
// ABOUTME: Re-exports the weather observation and measurement unit types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Normalized weather observation
pub mod observation;
/// Provider measurement units and conversions
pub mod units;

pub use observation::WeatherObservation;
pub use units::{MeasurementUnits, TemperatureUnit, VisibilityUnit, WindSpeedUnit};
