// ABOUTME: Ride outlook assembly over a normalized forecast snapshot
// ABOUTME: Bundles current scoring, advisories, gear, windows, and daily extremes for presentation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::intelligence::{
    RideAdvisory, RidingAnalyzer, RidingScore, RidingWindow, ScorePenalty, ScoredDay,
    UnsafeStretch,
};
use crate::models::WeatherObservation;
use crate::snapshot::ForecastSnapshot;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// Analysis of the current conditions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentOutlook {
    /// The observation analyzed
    pub observation: WeatherObservation,
    /// Confidence and condition
    pub score: RidingScore,
    /// Per-factor breakdown of the score
    pub penalties: Vec<ScorePenalty>,
    /// Advisory codes in checklist order
    pub advisories: Vec<RideAdvisory>,
    /// Advisory text in checklist order
    pub recommendations: Vec<String>,
    /// Gear text, base kit first
    pub gear: Vec<String>,
}

/// One day of the daily series with its score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayOutlook {
    /// Position in the daily series
    pub index: usize,
    /// The daily aggregate
    pub observation: WeatherObservation,
    /// Its riding score
    pub score: RidingScore,
}

impl From<ScoredDay<'_>> for DayOutlook {
    fn from(day: ScoredDay<'_>) -> Self {
        Self {
            index: day.index,
            observation: day.observation.clone(),
            score: day.score,
        }
    }
}

/// Everything the presentation layer shows for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RideOutlook {
    /// Forecast location
    pub location: String,
    /// When the forecast was fetched
    pub fetched_at: DateTime<Utc>,
    /// Current conditions analysis
    pub current: CurrentOutlook,
    /// Longest safe riding window in the hourly series
    pub safe_window: Option<RidingWindow>,
    /// Longest unsafe stretch in the hourly series
    pub unsafe_stretch: Option<UnsafeStretch>,
    /// Highest scoring day
    pub best_day: Option<DayOutlook>,
    /// Lowest scoring day
    pub worst_day: Option<DayOutlook>,
}

impl RideOutlook {
    /// Run every engine operation over a snapshot
    #[must_use]
    pub fn build(analyzer: &RidingAnalyzer, snapshot: &ForecastSnapshot) -> Self {
        let current = CurrentOutlook {
            observation: snapshot.current.clone(),
            score: analyzer.score(&snapshot.current),
            penalties: analyzer.penalties(&snapshot.current),
            advisories: analyzer.advisories(&snapshot.current),
            recommendations: analyzer.recommendations(&snapshot.current),
            gear: analyzer.gear_recommendations(&snapshot.current),
        };
        let extremes = analyzer.best_and_worst_day(&snapshot.daily);

        let outlook = Self {
            location: snapshot.location.clone(),
            fetched_at: snapshot.fetched_at,
            current,
            safe_window: analyzer.find_safe_riding_window(&snapshot.hourly),
            unsafe_stretch: analyzer.find_longest_unsafe_stretch(&snapshot.hourly),
            best_day: extremes.map(|e| e.best.into()),
            worst_day: extremes.map(|e| e.worst.into()),
        };

        debug!(
            location = %outlook.location,
            confidence = outlook.current.score.confidence,
            condition = %outlook.current.score.condition,
            has_window = outlook.safe_window.is_some(),
            "ride outlook assembled"
        );
        outlook
    }
}
