// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for the ridecast CLI
// ABOUTME: Text reports for outlooks and scores, plus pretty JSON output

use crate::commands::score::ScoreReport;
use chrono::{DateTime, Duration, Utc};
use ridecast::errors::AppResult;
use ridecast::intelligence::{RidingScore, RidingWindow, ScorePenalty, UnsafeStretch};
use ridecast::models::WeatherObservation;
use ridecast::outlook::{DayOutlook, RideOutlook};
use serde::Serialize;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display the full ride outlook
pub fn display_outlook(outlook: &RideOutlook, age: Option<Duration>, fresh: bool) {
    println!("\nRide outlook for {}", outlook.location);
    println!("{}", "=".repeat(60));
    println!(
        "Forecast fetched: {}{}",
        format_timestamp(outlook.fetched_at),
        age.map_or_else(String::new, |a| format!(
            " ({} ago{})",
            format_duration(a),
            if fresh { "" } else { ", stale" }
        ))
    );

    println!("\nCURRENT CONDITIONS:");
    display_score_line(&outlook.current.score);
    display_observation(&outlook.current.observation);
    display_penalties(&outlook.current.penalties);
    display_lines("Advisories", &outlook.current.recommendations);
    display_lines("Gear", &outlook.current.gear);

    println!("\nHOURLY FORECAST:");
    println!("   Safe riding window: {}", format_window(outlook.safe_window));
    println!("   Unsafe stretch: {}", format_stretch(outlook.unsafe_stretch));

    println!("\nDAILY FORECAST:");
    println!("   Best day: {}", format_day(outlook.best_day.as_ref()));
    println!("   Worst day: {}", format_day(outlook.worst_day.as_ref()));
}

/// Display a single observation score
pub fn display_score(report: &ScoreReport) {
    println!("\nRiding score");
    println!("{}", "=".repeat(60));
    display_score_line(&report.score);
    display_observation(&report.observation);
    display_penalties(&report.penalties);
    display_lines("Advisories", &report.recommendations);
    display_lines("Gear", &report.gear);
}

fn display_score_line(score: &RidingScore) {
    println!(
        "   Confidence: {}% ({})",
        score.confidence,
        score.condition.label()
    );
}

fn display_observation(observation: &WeatherObservation) {
    println!(
        "   Temperature: {:.1}°C (feels like {:.1}°C)",
        observation.temperature, observation.feels_like
    );
    println!("   Wind: {:.1} km/h", observation.wind_speed_kmh);
    println!(
        "   Precipitation chance: {:.0}%",
        observation.precipitation_chance
    );
    println!(
        "   Visibility: {}",
        observation
            .visibility_km
            .map_or_else(|| "unknown".to_owned(), |km| format!("{km:.1} km"))
    );
    if !observation.description.is_empty() {
        println!("   Sky: {}", observation.description);
    }
}

fn display_penalties(penalties: &[ScorePenalty]) {
    if penalties.is_empty() {
        return;
    }
    println!("   Penalties:");
    for penalty in penalties {
        println!("     - {:?}: -{}", penalty.factor, penalty.points);
    }
}

fn display_lines(title: &str, lines: &[String]) {
    println!("   {title}:");
    for line in lines {
        println!("     • {line}");
    }
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M UTC").to_string()
}

fn format_duration(duration: Duration) -> String {
    let minutes = duration.num_minutes();
    if minutes.abs() < 60 {
        format!("{minutes}m")
    } else {
        format!("{}h {}m", minutes / 60, (minutes % 60).abs())
    }
}

fn format_window(window: Option<RidingWindow>) -> String {
    window.map_or_else(
        || "none long enough".to_owned(),
        |w| {
            format!(
                "{} to {} ({})",
                format_timestamp(w.start),
                format_timestamp(w.end),
                format_duration(w.duration())
            )
        },
    )
}

fn format_stretch(stretch: Option<UnsafeStretch>) -> String {
    stretch.map_or_else(
        || "none".to_owned(),
        |s| {
            format!(
                "{} to {} ({} hours)",
                format_timestamp(s.start),
                format_timestamp(s.end),
                s.hours
            )
        },
    )
}

fn format_day(day: Option<&DayOutlook>) -> String {
    day.map_or_else(
        || "no daily forecast".to_owned(),
        |d| {
            let range = match (d.observation.high_temp, d.observation.low_temp) {
                (Some(high), Some(low)) => format!(", {low:.0}-{high:.0}°C"),
                _ => String::new(),
            };
            format!(
                "{} ({}%, {}{range})",
                d.observation.timestamp.format("%a %Y-%m-%d"),
                d.score.confidence,
                d.score.condition
            )
        },
    )
}
