// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Outlook subcommand: load a forecast document and print the ride outlook
// ABOUTME: Reports forecast freshness against the configured cache TTL

use crate::helpers::display;
use crate::OutputFormat;
use chrono::Utc;
use ridecast::cache::ForecastCache;
use ridecast::config::AppConfig;
use ridecast::errors::AppResult;
use ridecast::intelligence::RidingAnalyzer;
use ridecast::outlook::RideOutlook;
use ridecast::snapshot::ForecastSnapshot;
use std::path::Path;
use tracing::{info, warn};

pub async fn run(
    analyzer: &RidingAnalyzer,
    app_config: &AppConfig,
    file: &Path,
    format: OutputFormat,
) -> AppResult<()> {
    let snapshot = ForecastSnapshot::load(file).await?;
    let outlook = RideOutlook::build(analyzer, &snapshot);
    info!(
        location = %outlook.location,
        confidence = outlook.current.score.confidence,
        "outlook ready"
    );

    let mut cache = ForecastCache::from_settings(app_config.cache);
    cache.store(snapshot);
    let now = Utc::now();
    let fresh = cache.is_fresh(now);
    let age = cache.age(now);
    if !fresh {
        warn!(
            location = %outlook.location,
            age_minutes = age.map(|a| a.num_minutes()),
            ttl_minutes = app_config.cache.ttl_minutes,
            "forecast is older than the cache TTL"
        );
    }

    match format {
        OutputFormat::Json => display::print_json(&outlook),
        OutputFormat::Text => {
            display::display_outlook(&outlook, age, fresh);
            Ok(())
        }
    }
}
