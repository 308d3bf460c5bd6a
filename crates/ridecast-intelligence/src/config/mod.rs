// ABOUTME: Riding engine configuration with environment overrides and validation
// ABOUTME: Orchestrates scoring, advisory, and window configs behind a lazily loaded global
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Riding Engine Configuration
//!
//! Configuration is organized into domain-specific modules:
//! - `scoring` - confidence bands and penalty points
//! - `advisory` - advisory and gear line thresholds
//! - `window` - safe riding window predicate and minimum lengths
//!
//! Defaults come from [`crate::riding_constants`]. Any value can be overridden
//! through a `RIDECAST_*` environment variable; the result is validated before use.

pub mod advisory;
pub mod error;
pub mod scoring;
pub mod window;

pub use advisory::AdvisoryConfig;
pub use error::ConfigError;
pub use scoring::{
    PrecipitationPenalty, ScoringConfig, TemperatureBands, VisibilityBand, WindBands,
};
pub use window::WindowConfig;

use crate::riding_constants::confidence_tiers::MAX_CONFIDENCE;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static RIDING_CONFIG: OnceLock<RidingConfig> = OnceLock::new();

/// Main riding engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RidingConfig {
    /// Confidence scoring bands and penalties
    pub scoring: ScoringConfig,
    /// Advisory and gear thresholds
    pub advisories: AdvisoryConfig,
    /// Safe window and unsafe stretch search
    pub window: WindowConfig,
}

impl RidingConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        RIDING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load riding config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate threshold ordering and value domains
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_finite()?;
        self.validate_scoring()?;
        self.validate_advisories()?;
        self.validate_window()
    }

    // NaN compares false against every bound, so it must be rejected up front
    fn validate_finite(&self) -> Result<(), ConfigError> {
        let temp = &self.scoring.temperature;
        let wind = &self.scoring.wind;
        let advisories = &self.advisories;
        let window = &self.window;
        let thresholds = [
            temp.extreme_cold_celsius,
            temp.extreme_hot_celsius,
            temp.comfort_min_celsius,
            temp.comfort_max_celsius,
            wind.strong_kmh,
            wind.moderate_kmh,
            self.scoring.visibility.poor_km,
            advisories.hot_celsius,
            advisories.cold_celsius,
            advisories.high_wind_kmh,
            advisories.low_visibility_km,
            advisories.cold_gear_celsius,
            advisories.hot_gear_celsius,
            window.max_precipitation_chance,
            window.max_wind_kmh,
            window.min_temperature_celsius,
            window.max_temperature_celsius,
        ];
        if thresholds.iter().all(|value| value.is_finite()) {
            Ok(())
        } else {
            Err(ConfigError::ValueOutOfRange(
                "thresholds must be finite numbers",
            ))
        }
    }

    fn validate_scoring(&self) -> Result<(), ConfigError> {
        let temp = &self.scoring.temperature;
        if temp.extreme_cold_celsius > temp.comfort_min_celsius {
            return Err(ConfigError::InvalidRange(
                "extreme_cold_celsius must be <= comfort_min_celsius",
            ));
        }
        if temp.comfort_min_celsius > temp.comfort_max_celsius {
            return Err(ConfigError::InvalidRange(
                "comfort_min_celsius must be <= comfort_max_celsius",
            ));
        }
        if temp.comfort_max_celsius > temp.extreme_hot_celsius {
            return Err(ConfigError::InvalidRange(
                "comfort_max_celsius must be <= extreme_hot_celsius",
            ));
        }
        if temp.mild_penalty > temp.extreme_penalty {
            return Err(ConfigError::InvalidRange(
                "mild temperature penalty must be <= extreme temperature penalty",
            ));
        }

        let wind = &self.scoring.wind;
        if wind.moderate_kmh >= wind.strong_kmh {
            return Err(ConfigError::InvalidRange(
                "moderate wind threshold must be < strong wind threshold",
            ));
        }
        if wind.moderate_penalty > wind.strong_penalty {
            return Err(ConfigError::InvalidRange(
                "moderate wind penalty must be <= strong wind penalty",
            ));
        }

        if self.scoring.visibility.poor_km <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "poor visibility threshold must be positive",
            ));
        }

        let penalties = [
            temp.extreme_penalty,
            wind.strong_penalty,
            self.scoring.precipitation.penalty,
            self.scoring.visibility.penalty,
        ];
        if penalties.iter().any(|&points| points > MAX_CONFIDENCE) {
            return Err(ConfigError::ValueOutOfRange(
                "penalties must be between 0 and 100 points",
            ));
        }
        Ok(())
    }

    fn validate_advisories(&self) -> Result<(), ConfigError> {
        let advisories = &self.advisories;
        if advisories.cold_celsius >= advisories.hot_celsius {
            return Err(ConfigError::InvalidRange(
                "cold advisory threshold must be < hot advisory threshold",
            ));
        }
        if advisories.cold_gear_celsius >= advisories.hot_gear_celsius {
            return Err(ConfigError::InvalidRange(
                "cold gear threshold must be < hot gear threshold",
            ));
        }
        if advisories.high_wind_kmh <= 0.0 || advisories.low_visibility_km <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "wind and visibility advisory thresholds must be positive",
            ));
        }
        Ok(())
    }

    fn validate_window(&self) -> Result<(), ConfigError> {
        let window = &self.window;
        if window.min_temperature_celsius > window.max_temperature_celsius {
            return Err(ConfigError::InvalidRange(
                "window min temperature must be <= max temperature",
            ));
        }
        if window.max_precipitation_chance <= 0.0 || window.max_precipitation_chance > 100.0 {
            return Err(ConfigError::ValueOutOfRange(
                "window max precipitation chance must be in (0, 100]",
            ));
        }
        if window.max_wind_kmh <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("window max wind must be positive"));
        }
        if window.min_window_hours == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "minimum window length must be at least 1 hour",
            ));
        }
        if window.min_unsafe_stretch_hours == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "minimum unsafe stretch must be at least 1 hour",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Scoring overrides
        let temp = &mut self.scoring.temperature;
        Self::apply_env_var(
            "RIDECAST_SCORING_EXTREME_COLD_CELSIUS",
            &mut temp.extreme_cold_celsius,
        )?;
        Self::apply_env_var(
            "RIDECAST_SCORING_EXTREME_HOT_CELSIUS",
            &mut temp.extreme_hot_celsius,
        )?;
        Self::apply_env_var(
            "RIDECAST_SCORING_COMFORT_MIN_CELSIUS",
            &mut temp.comfort_min_celsius,
        )?;
        Self::apply_env_var(
            "RIDECAST_SCORING_COMFORT_MAX_CELSIUS",
            &mut temp.comfort_max_celsius,
        )?;

        let wind = &mut self.scoring.wind;
        Self::apply_env_var("RIDECAST_SCORING_STRONG_WIND_KMH", &mut wind.strong_kmh)?;
        Self::apply_env_var("RIDECAST_SCORING_MODERATE_WIND_KMH", &mut wind.moderate_kmh)?;

        Self::apply_env_var(
            "RIDECAST_SCORING_PRECIPITATION_PENALTY",
            &mut self.scoring.precipitation.penalty,
        )?;
        Self::apply_env_var(
            "RIDECAST_SCORING_POOR_VISIBILITY_KM",
            &mut self.scoring.visibility.poor_km,
        )?;

        // Advisory overrides
        Self::apply_env_var("RIDECAST_ADVISORY_HOT_CELSIUS", &mut self.advisories.hot_celsius)?;
        Self::apply_env_var(
            "RIDECAST_ADVISORY_COLD_CELSIUS",
            &mut self.advisories.cold_celsius,
        )?;
        Self::apply_env_var(
            "RIDECAST_ADVISORY_HIGH_WIND_KMH",
            &mut self.advisories.high_wind_kmh,
        )?;

        // Window overrides
        let window = &mut self.window;
        Self::apply_env_var(
            "RIDECAST_WINDOW_MAX_PRECIPITATION",
            &mut window.max_precipitation_chance,
        )?;
        Self::apply_env_var("RIDECAST_WINDOW_MAX_WIND_KMH", &mut window.max_wind_kmh)?;
        Self::apply_env_var(
            "RIDECAST_WINDOW_MIN_TEMP_CELSIUS",
            &mut window.min_temperature_celsius,
        )?;
        Self::apply_env_var(
            "RIDECAST_WINDOW_MAX_TEMP_CELSIUS",
            &mut window.max_temperature_celsius,
        )?;
        Self::apply_env_var("RIDECAST_WINDOW_MIN_HOURS", &mut window.min_window_hours)?;
        Self::apply_env_var(
            "RIDECAST_WINDOW_MIN_UNSAFE_HOURS",
            &mut window.min_unsafe_stretch_hours,
        )?;

        Ok(self)
    }
}
