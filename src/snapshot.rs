// ABOUTME: Forecast snapshot normalization from a provider-neutral JSON document
// ABOUTME: Converts units, rejects out-of-range readings, and time-orders the series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Forecast snapshots
//!
//! A [`ForecastDocument`] is what a provider adapter hands over: raw numbers in
//! whatever units the provider reports. [`ForecastDocument::normalize`] turns it
//! into a [`ForecastSnapshot`] holding only canonical, validated observations
//! sorted by timestamp. The engine only ever sees snapshots.

use crate::constants::observation_limits::{MAX_PERCENT, MIN_PERCENT};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{MeasurementUnits, WeatherObservation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// One observation as reported by a provider, in document units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    /// RFC 3339 timestamp
    pub timestamp: DateTime<Utc>,
    /// Air temperature
    pub temperature: f64,
    /// Apparent temperature, defaults to `temperature`
    #[serde(default)]
    pub feels_like: Option<f64>,
    /// Relative humidity percentage, required
    #[serde(default)]
    pub humidity: Option<f64>,
    /// Wind speed
    pub wind_speed: f64,
    /// Probability of precipitation percentage, required
    #[serde(default)]
    pub precipitation_chance: Option<f64>,
    /// Visibility, absent when not reported
    #[serde(default)]
    pub visibility: Option<f64>,
    /// UV index
    #[serde(default)]
    pub uv_index: Option<f64>,
    /// Provider description
    #[serde(default)]
    pub description: String,
    /// Provider icon code
    #[serde(default)]
    pub icon_code: String,
    /// Daily high
    #[serde(default)]
    pub high_temp: Option<f64>,
    /// Daily low
    #[serde(default)]
    pub low_temp: Option<f64>,
}

/// Forecast document as handed over by a provider adapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDocument {
    /// Display name of the forecast location
    pub location: String,
    /// When the provider produced this forecast
    pub fetched_at: DateTime<Utc>,
    /// Units of every numeric value in the document
    #[serde(default)]
    pub units: MeasurementUnits,
    /// Current conditions
    pub current: ObservationRecord,
    /// Hourly forecast
    #[serde(default)]
    pub hourly: Vec<ObservationRecord>,
    /// Daily forecast
    #[serde(default)]
    pub daily: Vec<ObservationRecord>,
}

/// Immutable, normalized, time-ordered forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSnapshot {
    /// Display name of the forecast location
    pub location: String,
    /// When the provider produced this forecast
    pub fetched_at: DateTime<Utc>,
    /// Current conditions
    pub current: WeatherObservation,
    /// Hourly observations sorted by timestamp
    pub hourly: Vec<WeatherObservation>,
    /// Daily aggregates sorted by timestamp
    pub daily: Vec<WeatherObservation>,
}

impl ForecastDocument {
    /// Parse a document from JSON text
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the text is not a valid forecast document
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert to canonical units and validate every observation
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when a record omits its humidity or
    /// precipitation chance, and `ValueOutOfRange` for a non-finite reading, a
    /// negative wind speed or visibility, or a percentage outside 0-100
    pub fn normalize(self) -> AppResult<ForecastSnapshot> {
        let units = self.units;
        let current = normalize_record(self.current, units, "current")?;
        let hourly = normalize_series(self.hourly, units, "hourly")?;
        let daily = normalize_series(self.daily, units, "daily")?;

        debug!(
            location = %self.location,
            hourly = hourly.len(),
            daily = daily.len(),
            "forecast snapshot normalized"
        );

        Ok(ForecastSnapshot {
            location: self.location,
            fetched_at: self.fetched_at,
            current,
            hourly,
            daily,
        })
    }
}

impl ForecastSnapshot {
    /// Parse and normalize a forecast document
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or normalization fails
    pub fn from_json(json: &str) -> AppResult<Self> {
        ForecastDocument::from_json(json)?.normalize()
    }

    /// Read, parse and normalize a forecast document file
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the file does not exist, `StorageError` if it
    /// cannot be read, and parsing or normalization errors otherwise
    pub async fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                AppError::not_found(format!("Forecast file {}", path.display())).with_source(e)
            } else {
                AppError::new(
                    ErrorCode::StorageError,
                    format!("Failed to read forecast file {}: {e}", path.display()),
                )
                .with_source(e)
            }
        })?;
        let snapshot = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            location = %snapshot.location,
            "forecast snapshot loaded"
        );
        Ok(snapshot)
    }
}

fn normalize_series(
    records: Vec<ObservationRecord>,
    units: MeasurementUnits,
    series: &str,
) -> AppResult<Vec<WeatherObservation>> {
    let mut observations = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| normalize_record(record, units, &format!("{series}[{index}]")))
        .collect::<AppResult<Vec<_>>>()?;
    // Stable: equal timestamps keep document order
    observations.sort_by_key(|observation| observation.timestamp);
    Ok(observations)
}

fn normalize_record(
    record: ObservationRecord,
    units: MeasurementUnits,
    at: &str,
) -> AppResult<WeatherObservation> {
    let temperature = finite(record.temperature, at, "temperature")?;
    let feels_like = finite(record.feels_like.unwrap_or(temperature), at, "feels_like")?;
    let wind_speed = non_negative(record.wind_speed, at, "wind_speed")?;
    let humidity = percent(required(record.humidity, at, "humidity")?, at, "humidity")?;
    let precipitation_chance = percent(
        required(record.precipitation_chance, at, "precipitation_chance")?,
        at,
        "precipitation_chance",
    )?;
    let visibility = record
        .visibility
        .map(|value| non_negative(value, at, "visibility"))
        .transpose()?;

    Ok(WeatherObservation {
        timestamp: record.timestamp,
        temperature: units.temperature.to_celsius(temperature),
        feels_like: units.temperature.to_celsius(feels_like),
        humidity: humidity_percent(humidity),
        wind_speed_kmh: units.wind_speed.to_kmh(wind_speed),
        precipitation_chance,
        visibility_km: visibility.map(|value| units.visibility.to_km(value)),
        uv_index: optional_finite(record.uv_index, at, "uv_index")?,
        description: record.description,
        icon_code: record.icon_code,
        high_temp: optional_finite(record.high_temp, at, "high_temp")?
            .map(|value| units.temperature.to_celsius(value)),
        low_temp: optional_finite(record.low_temp, at, "low_temp")?
            .map(|value| units.temperature.to_celsius(value)),
    })
}

fn finite(value: f64, at: &str, field: &str) -> AppResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::value_out_of_range(format!(
            "{at}.{field} must be a finite number"
        )))
    }
}

fn required(value: Option<f64>, at: &str, field: &str) -> AppResult<f64> {
    value.ok_or_else(|| AppError::missing_field(&format!("{at}.{field}")))
}

fn non_negative(value: f64, at: &str, field: &str) -> AppResult<f64> {
    let value = finite(value, at, field)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(AppError::value_out_of_range(format!(
            "{at}.{field} must not be negative, got {value}"
        )))
    }
}

fn optional_finite(value: Option<f64>, at: &str, field: &str) -> AppResult<Option<f64>> {
    value.map(|v| finite(v, at, field)).transpose()
}

fn percent(value: f64, at: &str, field: &str) -> AppResult<f64> {
    let value = finite(value, at, field)?;
    if (MIN_PERCENT..=MAX_PERCENT).contains(&value) {
        Ok(value)
    } else {
        Err(AppError::value_out_of_range(format!(
            "{at}.{field} must be between {MIN_PERCENT} and {MAX_PERCENT}, got {value}"
        )))
    }
}

// Input already checked to lie within 0-100
fn humidity_percent(value: f64) -> u8 {
    value.round() as u8
}
