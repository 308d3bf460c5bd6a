// ABOUTME: Common benchmark utilities and forecast fixtures for performance testing
// ABOUTME: Provides reusable hourly and daily series generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities and forecast fixtures.

pub mod fixtures;
