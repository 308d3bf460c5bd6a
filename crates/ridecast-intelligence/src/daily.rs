// ABOUTME: Best and worst riding day selection over daily aggregate observations
// ABOUTME: Max and min confidence with first-occurrence tie-breaking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::condition::RidingScore;
use crate::config::ScoringConfig;
use crate::scoring;
use ridecast_core::models::WeatherObservation;
use serde::Serialize;

/// A daily observation with its score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredDay<'a> {
    /// Position in the input series
    pub index: usize,
    /// The daily aggregate
    pub observation: &'a WeatherObservation,
    /// Its riding score
    pub score: RidingScore,
}

/// Highest and lowest scoring days of a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyExtremes<'a> {
    /// First day with the maximum confidence
    pub best: ScoredDay<'a>,
    /// First day with the minimum confidence
    pub worst: ScoredDay<'a>,
}

/// Select the best and worst day
///
/// Returns `None` for an empty series. A single day is both best and worst.
#[must_use]
pub fn best_and_worst_day<'a>(
    daily: &'a [WeatherObservation],
    config: &ScoringConfig,
) -> Option<DailyExtremes<'a>> {
    let mut scored = daily
        .iter()
        .enumerate()
        .map(|(index, observation)| ScoredDay {
            index,
            observation,
            score: scoring::score(observation, config),
        });

    let first = scored.next()?;
    let mut extremes = DailyExtremes {
        best: first,
        worst: first,
    };
    for day in scored {
        if day.score.confidence > extremes.best.score.confidence {
            extremes.best = day;
        }
        if day.score.confidence < extremes.worst.score.confidence {
            extremes.worst = day;
        }
    }
    Some(extremes)
}
