// ABOUTME: Explicit forecast cache value owned by the caller
// ABOUTME: Holds the last normalized snapshot with its fetch time and a freshness TTL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::CacheSettings;
use crate::snapshot::ForecastSnapshot;
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// Cached forecast with the time it was fetched
#[derive(Debug, Clone, PartialEq)]
pub struct CachedForecast {
    /// Normalized snapshot
    pub snapshot: ForecastSnapshot,
    /// When the snapshot was fetched
    pub fetched_at: DateTime<Utc>,
}

/// Single-slot forecast cache
///
/// There is no global instance: whoever fetches forecasts owns one of these and
/// decides when to refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastCache {
    ttl: Duration,
    entry: Option<CachedForecast>,
}

impl ForecastCache {
    /// Create an empty cache with the given freshness window
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    /// Create an empty cache from application settings
    #[must_use]
    pub fn from_settings(settings: CacheSettings) -> Self {
        Self::new(settings.ttl())
    }

    /// Freshness window
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Replace the cached snapshot, using the snapshot's own fetch time
    pub fn store(&mut self, snapshot: ForecastSnapshot) {
        let fetched_at = snapshot.fetched_at;
        self.store_at(snapshot, fetched_at);
    }

    /// Replace the cached snapshot with an explicit fetch time
    pub fn store_at(&mut self, snapshot: ForecastSnapshot, fetched_at: DateTime<Utc>) {
        debug!(location = %snapshot.location, %fetched_at, "forecast cached");
        self.entry = Some(CachedForecast {
            snapshot,
            fetched_at,
        });
    }

    /// Cached entry, fresh or not
    #[must_use]
    pub const fn entry(&self) -> Option<&CachedForecast> {
        self.entry.as_ref()
    }

    /// Snapshot only if still fresh at `now`
    #[must_use]
    pub fn get_fresh(&self, now: DateTime<Utc>) -> Option<&ForecastSnapshot> {
        self.entry
            .as_ref()
            .filter(|_| self.is_fresh(now))
            .map(|entry| &entry.snapshot)
    }

    /// Time since the cached snapshot was fetched
    ///
    /// Negative when `now` is earlier than the fetch time.
    #[must_use]
    pub fn age(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.entry.as_ref().map(|entry| now - entry.fetched_at)
    }

    /// Whether a snapshot is cached and younger than the TTL
    ///
    /// A snapshot exactly `ttl` old is stale.
    #[must_use]
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.age(now).is_some_and(|age| age < self.ttl)
    }

    /// Drop the cached snapshot
    pub fn clear(&mut self) {
        self.entry = None;
    }
}

impl Default for ForecastCache {
    fn default() -> Self {
        Self::from_settings(CacheSettings::default())
    }
}
