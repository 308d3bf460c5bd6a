// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Score subcommand: rate one ad-hoc observation
// ABOUTME: Prints confidence, penalties, advisories, and gear

use crate::helpers::display;
use crate::OutputFormat;
use chrono::Utc;
use ridecast::constants::observation_limits::{MAX_PERCENT, MIN_PERCENT};
use ridecast::errors::{AppError, AppResult};
use ridecast::intelligence::{RidingAnalyzer, RidingScore, ScorePenalty};
use ridecast::models::WeatherObservation;
use serde::Serialize;

/// Observation values as given on the command line, canonical units
pub struct ScoreArgs {
    pub temperature: f64,
    pub wind: f64,
    pub precipitation: f64,
    pub visibility: Option<f64>,
}

#[derive(Serialize)]
pub struct ScoreReport {
    pub observation: WeatherObservation,
    pub score: RidingScore,
    pub penalties: Vec<ScorePenalty>,
    pub recommendations: Vec<String>,
    pub gear: Vec<String>,
}

pub fn run(analyzer: &RidingAnalyzer, args: ScoreArgs, format: OutputFormat) -> AppResult<()> {
    if !(MIN_PERCENT..=MAX_PERCENT).contains(&args.precipitation) {
        return Err(AppError::value_out_of_range(format!(
            "precipitation must be between {MIN_PERCENT} and {MAX_PERCENT}, got {}",
            args.precipitation
        )));
    }

    let observation = WeatherObservation::new(
        Utc::now(),
        args.temperature,
        args.wind,
        args.precipitation,
    );
    let observation = match args.visibility {
        Some(km) => observation.with_visibility(km),
        None => observation,
    };

    let report = ScoreReport {
        score: analyzer.score(&observation),
        penalties: analyzer.penalties(&observation),
        recommendations: analyzer.recommendations(&observation),
        gear: analyzer.gear_recommendations(&observation),
        observation,
    };

    match format {
        OutputFormat::Json => display::print_json(&report),
        OutputFormat::Text => {
            display::display_score(&report);
            Ok(())
        }
    }
}
