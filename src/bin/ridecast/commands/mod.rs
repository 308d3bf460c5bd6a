// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Subcommand implementations for the ridecast CLI
// ABOUTME: Outlook over a forecast file and single-observation scoring

pub mod outlook;
pub mod score;
