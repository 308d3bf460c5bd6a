// ABOUTME: Integration tests for the safe riding window and unsafe stretch searches
// ABOUTME: Validates minimum length, tie-breaking, open runs, and irregular spacing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{analyzer, at_hour, good_hour, hourly_from_pattern, wet_hour};
use ridecast::intelligence::{RidingAnalyzer, RidingCondition, RidingConfig};
use ridecast::models::WeatherObservation;

#[test]
fn test_empty_series_has_no_window() {
    assert_eq!(analyzer().find_safe_riding_window(&[]), None);
    assert_eq!(analyzer().find_longest_unsafe_stretch(&[]), None);
}

#[test]
fn test_two_hour_run_is_too_short() {
    // Three consecutive good observations span only two hours
    let hourly = hourly_from_pattern("GGGWGG");
    assert_eq!(analyzer().find_safe_riding_window(&hourly), None);
}

#[test]
fn test_three_hour_run_is_reported() {
    let hourly = hourly_from_pattern("WGGGGW");
    let window = analyzer().find_safe_riding_window(&hourly).unwrap();
    assert_eq!(window.start, at_hour(1));
    assert_eq!(window.end, at_hour(4));
    assert_eq!(window.duration(), Duration::hours(3));
}

#[test]
fn test_equal_runs_keep_the_earlier() {
    let hourly = hourly_from_pattern("GGGGGWGGGGG");
    let window = analyzer().find_safe_riding_window(&hourly).unwrap();
    assert_eq!(window.start, at_hour(0));
    assert_eq!(window.end, at_hour(4));
}

#[test]
fn test_longer_later_run_wins() {
    let hourly = hourly_from_pattern("GGGGWGGGGGG");
    let window = analyzer().find_safe_riding_window(&hourly).unwrap();
    assert_eq!(window.start, at_hour(5));
    assert_eq!(window.end, at_hour(10));
}

#[test]
fn test_run_open_at_end_is_considered() {
    let hourly = hourly_from_pattern("WGGWGGGGGG");
    let window = analyzer().find_safe_riding_window(&hourly).unwrap();
    assert_eq!(window.start, at_hour(4));
    assert_eq!(window.end, at_hour(9));
}

#[test]
fn test_all_good_series_is_one_window() {
    let hourly = hourly_from_pattern("GGGGGGGG");
    let window = analyzer().find_safe_riding_window(&hourly).unwrap();
    assert_eq!(window.start, at_hour(0));
    assert_eq!(window.end, at_hour(7));
}

#[test]
fn test_irregular_spacing_uses_timestamps() {
    // Three observations, but five hours between first and last
    let hourly = vec![good_hour(0), good_hour(1), good_hour(5)];
    let window = analyzer().find_safe_riding_window(&hourly).unwrap();
    assert_eq!(window.duration(), Duration::hours(5));

    // Many observations packed into less than three hours
    let dense: Vec<WeatherObservation> = (0..10)
        .map(|i| {
            let mut obs = good_hour(0);
            obs.timestamp = at_hour(0) + Duration::minutes(15 * i);
            obs
        })
        .collect();
    assert_eq!(analyzer().find_safe_riding_window(&dense), None);
}

#[test]
fn test_window_predicate_bounds() {
    let analyzer = analyzer();
    let mut obs = good_hour(0);
    for (temperature, expected) in [(14.9, false), (15.0, true), (30.0, true), (30.1, false)] {
        obs.temperature = temperature;
        assert_eq!(analyzer.is_good_riding_hour(&obs), expected, "{temperature}");
    }

    let mut obs = good_hour(0);
    obs.wind_speed_kmh = 29.9;
    assert!(analyzer.is_good_riding_hour(&obs));
    obs.wind_speed_kmh = 30.0;
    assert!(!analyzer.is_good_riding_hour(&obs));

    let mut obs = good_hour(0);
    obs.precipitation_chance = 29.0;
    assert!(analyzer.is_good_riding_hour(&obs));
    obs.precipitation_chance = 30.0;
    assert!(!analyzer.is_good_riding_hour(&obs));
}

#[test]
fn test_window_ignores_visibility() {
    let hourly: Vec<WeatherObservation> = (0..4)
        .map(|h| good_hour(h).with_visibility(0.5))
        .collect();
    assert!(analyzer().find_safe_riding_window(&hourly).is_some());
}

#[test]
fn test_configured_minimum_hours() {
    let mut config = RidingConfig::default();
    config.window.min_window_hours = 2;
    let analyzer = RidingAnalyzer::with_config(config);
    let hourly = hourly_from_pattern("GGGW");
    assert!(analyzer.find_safe_riding_window(&hourly).is_some());
}

#[test]
fn test_unsafe_stretch_requires_minimum_count() {
    let analyzer = analyzer();
    assert_eq!(
        analyzer.find_longest_unsafe_stretch(&hourly_from_pattern("GUUGUUG")),
        None
    );

    let stretch = analyzer
        .find_longest_unsafe_stretch(&hourly_from_pattern("GUUUG"))
        .unwrap();
    assert_eq!(stretch.hours, 3);
    assert_eq!(stretch.start, at_hour(1));
    assert_eq!(stretch.end, at_hour(3));
}

#[test]
fn test_unsafe_stretch_tie_keeps_the_earlier() {
    let stretch = analyzer()
        .find_longest_unsafe_stretch(&hourly_from_pattern("UUUGUUU"))
        .unwrap();
    assert_eq!(stretch.start, at_hour(0));
    assert_eq!(stretch.hours, 3);
}

#[test]
fn test_unsafe_stretch_open_at_end_is_considered() {
    let stretch = analyzer()
        .find_longest_unsafe_stretch(&hourly_from_pattern("UUUGUUUU"))
        .unwrap();
    assert_eq!(stretch.start, at_hour(4));
    assert_eq!(stretch.end, at_hour(7));
    assert_eq!(stretch.hours, 4);
}

#[test]
fn test_moderate_hours_break_unsafe_stretch() {
    // Wet hours score 60 and fail the window but are not unsafe
    let analyzer = analyzer();
    assert!(!analyzer.is_good_riding_hour(&wet_hour(0)));
    assert_eq!(
        analyzer.score(&wet_hour(0)).condition,
        RidingCondition::Moderate
    );
    assert_eq!(
        analyzer.find_longest_unsafe_stretch(&hourly_from_pattern("UUWUUW")),
        None
    );
}
