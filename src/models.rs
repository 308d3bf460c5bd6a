// ABOUTME: Data model re-exports for the Ridecast application crate
// ABOUTME: Canonical weather observations and measurement units from ridecast-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use ridecast_core::models::{
    MeasurementUnits, TemperatureUnit, VisibilityUnit, WeatherObservation, WindSpeedUnit,
};
