// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup plus activity catalogs and weather snapshots
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `weather_planner`

use std::sync::Once;

use weather_planner::models::{
    Activity, ActivityBuilder, TemperatureReading, WeatherInfoTier, WeatherSnapshot,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Activity with the given id and bounds
pub fn activity(id: &str, min_temp: Option<i32>, max_temp: Option<i32>) -> Activity {
    ActivityBuilder::new(id, format!("Activity {id}"))
        .short_description(format!("Teaser for {id}"))
        .min_temp_opt(min_temp)
        .max_temp_opt(max_temp)
        .build()
}

/// `count` unbounded activities with ids `"0"`, `"1"`, ...
pub fn unbounded_catalog(count: usize) -> Vec<Activity> {
    (0..count)
        .map(|i| activity(&i.to_string(), None, None))
        .collect()
}

/// `count` activities that are never suitable above freezing
pub fn frozen_catalog(count: usize) -> Vec<Activity> {
    (0..count)
        .map(|i| activity(&i.to_string(), None, Some(-100)))
        .collect()
}

/// Ids in list order
pub fn ids(activities: &[Activity]) -> Vec<&str> {
    activities.iter().map(|a| a.id.as_str()).collect()
}

/// Snapshot at `value` degrees Celsius without tiers
pub fn celsius(value: f64) -> WeatherSnapshot {
    WeatherSnapshot::new(TemperatureReading::celsius(value))
}

/// The two-tier table: cold from 0 to 10, warm from 11 up
pub fn cold_warm_tiers() -> Vec<WeatherInfoTier> {
    vec![
        WeatherInfoTier::new(Some(0), Some(10), "cold {{CELSIUS}}", "Wrap up warm"),
        WeatherInfoTier::new(Some(11), None, "warm", "Enjoy the sun"),
    ]
}
