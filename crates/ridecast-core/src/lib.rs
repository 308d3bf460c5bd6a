// ABOUTME: Core types and constants for the Ridecast riding-weather engine
// ABOUTME: Foundation crate with the observation model, unit conversions, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ridecast Core
//!
//! Foundation crate providing shared types for Ridecast. It changes rarely so
//! the engine and application crates compile incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: unit conversion factors and value domains
//! - **models**: `WeatherObservation` and measurement units

/// Unified error handling with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
