// ABOUTME: Riding-condition intelligence engine for Ridecast
// ABOUTME: Confidence scoring, advisories, safe riding windows, and daily selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ridecast Intelligence
//!
//! Pure, synchronous analysis over already-normalized weather observations.
//! Nothing here performs I/O or holds mutable state: every operation reads a
//! borrowed observation or slice and returns a fresh value.
//!
//! - **scoring**: additive penalty model producing a 0-100 confidence
//! - **advisories**: ordered advisory lines and gear suggestions
//! - **window**: longest safe riding window and longest unsafe stretch
//! - **daily**: best and worst day of a daily series
//! - **analyzer**: facade binding a [`config::RidingConfig`] to all of the above

/// Advisory and gear recommendations
pub mod advisories;
/// Analyzer facade
pub mod analyzer;
/// Score and condition types
pub mod condition;
/// Engine configuration with environment overrides
pub mod config;
/// Best and worst day selection
pub mod daily;
/// Default thresholds and penalties
pub mod riding_constants;
/// Confidence scoring
pub mod scoring;
/// Safe window and unsafe stretch search
pub mod window;

pub use advisories::{GearItem, RideAdvisory};
pub use analyzer::RidingAnalyzer;
pub use condition::{RidingCondition, RidingScore, RiskFactor, ScorePenalty};
pub use daily::{DailyExtremes, ScoredDay};
pub use window::{RidingWindow, UnsafeStretch};
