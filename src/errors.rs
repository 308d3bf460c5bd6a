// ABOUTME: Error handling re-exports for the Ridecast application crate
// ABOUTME: AppError, ErrorCode, and AppResult live in ridecast-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use ridecast_core::errors::{AppError, AppResult, ErrorCode};
