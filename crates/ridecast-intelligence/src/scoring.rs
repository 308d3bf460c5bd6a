// ABOUTME: Additive penalty model turning one observation into a riding confidence score
// ABOUTME: Temperature, wind, precipitation, and visibility penalties clamped to 0-100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Riding confidence scoring
//!
//! Starts from 100 and subtracts one independent penalty per risk factor:
//!
//! | Factor | Condition | Default penalty |
//! |---|---|---|
//! | Temperature | `< 10` or `> 35` °C | 30 |
//! | Temperature | `< 15` or `> 30` °C | 15 |
//! | Wind | `> 30` km/h | 25 |
//! | Wind | `> 20` km/h | 15 |
//! | Precipitation | chance `> 0` | 40 |
//! | Visibility | `< 5` km or unreported | 20 |
//!
//! Non-finite readings take the harshest branch of their factor, so the score
//! is total over any `WeatherObservation`.

use crate::condition::{RidingScore, RiskFactor, ScorePenalty};
use crate::config::ScoringConfig;
use crate::riding_constants::confidence_tiers::MAX_CONFIDENCE;
use ridecast_core::models::WeatherObservation;

/// Score a single observation
#[must_use]
pub fn score(observation: &WeatherObservation, config: &ScoringConfig) -> RidingScore {
    let deducted: i32 = penalties(observation, config)
        .iter()
        .map(|penalty| i32::from(penalty.points))
        .sum();
    let remaining = (i32::from(MAX_CONFIDENCE) - deducted).clamp(0, i32::from(MAX_CONFIDENCE));
    RidingScore::from_confidence(u8::try_from(remaining).unwrap_or(0))
}

/// Penalties applied to an observation, in factor order
///
/// The sum may exceed 100; [`score`] clamps, this does not.
#[must_use]
pub fn penalties(observation: &WeatherObservation, config: &ScoringConfig) -> Vec<ScorePenalty> {
    [
        temperature_penalty(observation.temperature, config),
        wind_penalty(observation.wind_speed_kmh, config),
        precipitation_penalty(observation.precipitation_chance, config),
        visibility_penalty(observation.visibility_km, config),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn temperature_penalty(temperature: f64, config: &ScoringConfig) -> Option<ScorePenalty> {
    let bands = &config.temperature;
    if !temperature.is_finite()
        || temperature < bands.extreme_cold_celsius
        || temperature > bands.extreme_hot_celsius
    {
        Some(ScorePenalty {
            factor: RiskFactor::ExtremeTemperature,
            points: bands.extreme_penalty,
        })
    } else if temperature < bands.comfort_min_celsius || temperature > bands.comfort_max_celsius {
        Some(ScorePenalty {
            factor: RiskFactor::MildTemperature,
            points: bands.mild_penalty,
        })
    } else {
        None
    }
}

fn wind_penalty(wind_speed_kmh: f64, config: &ScoringConfig) -> Option<ScorePenalty> {
    let bands = &config.wind;
    if !wind_speed_kmh.is_finite() || wind_speed_kmh > bands.strong_kmh {
        Some(ScorePenalty {
            factor: RiskFactor::StrongWind,
            points: bands.strong_penalty,
        })
    } else if wind_speed_kmh > bands.moderate_kmh {
        Some(ScorePenalty {
            factor: RiskFactor::ModerateWind,
            points: bands.moderate_penalty,
        })
    } else {
        None
    }
}

fn precipitation_penalty(chance: f64, config: &ScoringConfig) -> Option<ScorePenalty> {
    // Binary: any chance at all costs the full penalty
    (!chance.is_finite() || chance > 0.0).then_some(ScorePenalty {
        factor: RiskFactor::Precipitation,
        points: config.precipitation.penalty,
    })
}

fn visibility_penalty(visibility_km: Option<f64>, config: &ScoringConfig) -> Option<ScorePenalty> {
    let band = &config.visibility;
    match visibility_km {
        None => Some(ScorePenalty {
            factor: RiskFactor::UnknownVisibility,
            points: band.penalty,
        }),
        Some(km) if !km.is_finite() || km < band.poor_km => Some(ScorePenalty {
            factor: RiskFactor::PoorVisibility,
            points: band.penalty,
        }),
        Some(_) => None,
    }
}
