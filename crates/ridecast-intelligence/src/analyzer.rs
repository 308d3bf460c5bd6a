// ABOUTME: Riding analyzer facade injecting one configuration into every engine operation
// ABOUTME: Scores observations, builds advisories and gear, and searches forecast series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::advisories::{self, GearItem, RideAdvisory};
use crate::condition::{RidingScore, ScorePenalty};
use crate::config::RidingConfig;
use crate::daily::{self, DailyExtremes};
use crate::scoring;
use crate::window::{self, RidingWindow, UnsafeStretch};
use ridecast_core::models::WeatherObservation;

/// Stateless riding-condition analyzer
///
/// Every method is a pure function of its arguments and the configuration the
/// analyzer was built with. Callers re-invoke with a fresh snapshot when new
/// data arrives. [`Default`] is the same as [`RidingAnalyzer::new`].
#[derive(Debug, Clone)]
pub struct RidingAnalyzer {
    config: RidingConfig,
}

impl Default for RidingAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl RidingAnalyzer {
    /// Create an analyzer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RidingConfig::global().clone())
    }

    /// Create an analyzer with an explicit configuration
    #[must_use]
    pub const fn with_config(config: RidingConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &RidingConfig {
        &self.config
    }

    /// Confidence score and condition for one observation
    #[must_use]
    pub fn score(&self, observation: &WeatherObservation) -> RidingScore {
        scoring::score(observation, &self.config.scoring)
    }

    /// Per-factor breakdown behind [`Self::score`]
    #[must_use]
    pub fn penalties(&self, observation: &WeatherObservation) -> Vec<ScorePenalty> {
        scoring::penalties(observation, &self.config.scoring)
    }

    /// Advisories in checklist order
    #[must_use]
    pub fn advisories(&self, observation: &WeatherObservation) -> Vec<RideAdvisory> {
        advisories::advisories(observation, &self.config.advisories)
    }

    /// Advisory text in checklist order
    #[must_use]
    pub fn recommendations(&self, observation: &WeatherObservation) -> Vec<String> {
        self.advisories(observation)
            .into_iter()
            .map(|advisory| advisory.message().to_owned())
            .collect()
    }

    /// Gear items, base kit first
    #[must_use]
    pub fn gear(&self, observation: &WeatherObservation) -> Vec<GearItem> {
        advisories::gear(observation, &self.config.advisories)
    }

    /// Gear text, base kit first
    #[must_use]
    pub fn gear_recommendations(&self, observation: &WeatherObservation) -> Vec<String> {
        self.gear(observation)
            .into_iter()
            .map(|item| item.message().to_owned())
            .collect()
    }

    /// Whether an hour passes the safe window predicate
    #[must_use]
    pub fn is_good_riding_hour(&self, observation: &WeatherObservation) -> bool {
        window::is_good_riding_hour(observation, &self.config.window)
    }

    /// Longest safe riding window of at least the configured length
    #[must_use]
    pub fn find_safe_riding_window(&self, hourly: &[WeatherObservation]) -> Option<RidingWindow> {
        window::find_safe_riding_window(hourly, &self.config.window)
    }

    /// Longest stretch of consecutive unsafe hours of at least the configured length
    #[must_use]
    pub fn find_longest_unsafe_stretch(
        &self,
        hourly: &[WeatherObservation],
    ) -> Option<UnsafeStretch> {
        window::find_longest_unsafe_stretch(hourly, &self.config.scoring, &self.config.window)
    }

    /// Best and worst day of a daily series
    #[must_use]
    pub fn best_and_worst_day<'a>(
        &self,
        daily: &'a [WeatherObservation],
    ) -> Option<DailyExtremes<'a>> {
        daily::best_and_worst_day(daily, &self.config.scoring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_global_config() {
        assert_eq!(RidingAnalyzer::default().config(), RidingConfig::global());
        assert_eq!(
            RidingAnalyzer::default().config(),
            RidingAnalyzer::new().config()
        );
    }
}
