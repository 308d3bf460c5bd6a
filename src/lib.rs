// ABOUTME: Main library entry point for the Ridecast riding-conditions application
// ABOUTME: Snapshot normalization, forecast cache, ride outlook, logging, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ridecast
//!
//! Motorcycle riding-condition forecasts. A provider adapter produces a
//! forecast document, this crate normalizes it into a time-ordered snapshot,
//! and the riding engine turns that snapshot into an outlook: a confidence
//! score for the current conditions, advisories and gear, the best safe riding
//! window, the longest unsafe stretch, and the best and worst day.
//!
//! ## Architecture
//!
//! - **ridecast-core**: observation model, units, errors
//! - **ridecast-intelligence**: scoring and window search engine
//! - **snapshot**: forecast document normalization
//! - **cache**: single-slot forecast cache with a TTL
//! - **outlook**: assembled per-snapshot result
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ridecast::errors::AppResult;
//! use ridecast::intelligence::RidingAnalyzer;
//! use ridecast::outlook::RideOutlook;
//! use ridecast::snapshot::ForecastSnapshot;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let snapshot = ForecastSnapshot::load(Path::new("forecast.json")).await?;
//!     let outlook = RideOutlook::build(&RidingAnalyzer::new(), &snapshot);
//!     println!("{}: {}", outlook.location, outlook.current.score.condition);
//!     Ok(())
//! }
//! ```

/// Forecast cache
pub mod cache;

/// Application configuration
pub mod config;

/// Application constants
pub mod constants;

/// Error types, re-exported from `ridecast-core`
pub mod errors;

/// Riding engine, re-exported from `ridecast-intelligence`
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Observation model, re-exported from `ridecast-core`
pub mod models;

/// Ride outlook assembly
pub mod outlook;

/// Forecast snapshot normalization
pub mod snapshot;
