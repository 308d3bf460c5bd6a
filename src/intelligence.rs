// ABOUTME: Riding engine re-exports for the Ridecast application crate
// ABOUTME: Scoring, advisories, window search, and daily selection from ridecast-intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use ridecast_intelligence::config::{
    AdvisoryConfig, ConfigError, RidingConfig, ScoringConfig, WindowConfig,
};
pub use ridecast_intelligence::{
    advisories, analyzer, condition, daily, riding_constants, scoring, window, DailyExtremes,
    GearItem, RideAdvisory, RidingAnalyzer, RidingCondition, RidingScore, RidingWindow, RiskFactor,
    ScorePenalty, ScoredDay, UnsafeStretch,
};
