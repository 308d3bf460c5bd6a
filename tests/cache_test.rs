// ABOUTME: Integration tests for the single-slot forecast cache
// ABOUTME: Validates freshness against the TTL, age reporting, and replacement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{base_time, good_hour};
use ridecast::cache::ForecastCache;
use ridecast::config::CacheSettings;
use ridecast::snapshot::ForecastSnapshot;

fn snapshot(location: &str) -> ForecastSnapshot {
    ForecastSnapshot {
        location: location.into(),
        fetched_at: base_time(),
        current: good_hour(0),
        hourly: vec![good_hour(0), good_hour(1)],
        daily: Vec::new(),
    }
}

#[test]
fn test_empty_cache_is_never_fresh() {
    let cache = ForecastCache::default();
    assert_eq!(cache.ttl(), Duration::minutes(30));
    assert!(!cache.is_fresh(base_time()));
    assert_eq!(cache.age(base_time()), None);
    assert!(cache.get_fresh(base_time()).is_none());
}

#[test]
fn test_snapshot_is_fresh_until_ttl_elapses() {
    let mut cache = ForecastCache::new(Duration::minutes(30));
    cache.store(snapshot("Lyon"));

    let now = base_time() + Duration::minutes(29);
    assert!(cache.is_fresh(now));
    assert_eq!(cache.age(now), Some(Duration::minutes(29)));
    assert_eq!(cache.get_fresh(now).unwrap().location, "Lyon");

    let expired = base_time() + Duration::minutes(30);
    assert!(!cache.is_fresh(expired));
    assert!(cache.get_fresh(expired).is_none());
    assert!(cache.entry().is_some());
}

#[test]
fn test_store_at_overrides_fetch_time() {
    let mut cache = ForecastCache::from_settings(CacheSettings { ttl_minutes: 10 });
    let refreshed = base_time() + Duration::hours(2);
    cache.store_at(snapshot("Lyon"), refreshed);

    assert!(cache.is_fresh(refreshed + Duration::minutes(5)));
    assert_eq!(cache.entry().unwrap().fetched_at, refreshed);
}

#[test]
fn test_store_replaces_previous_snapshot() {
    let mut cache = ForecastCache::default();
    cache.store(snapshot("Lyon"));
    cache.store(snapshot("Grenoble"));
    assert_eq!(cache.entry().unwrap().snapshot.location, "Grenoble");

    cache.clear();
    assert!(cache.entry().is_none());
}
