// ABOUTME: Integration tests for the weather headline resolved from the tier table
// ABOUTME: Tests first-match lookup, placeholder rendering, unit handling and gaps in the table
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use common::{celsius, cold_warm_tiers};
use weather_planner::engine::{describe, SelectionEngine};
use weather_planner::models::{TemperatureReading, TemperatureUnit, WeatherSnapshot};

#[test]
fn test_cold_tier_renders_temperature() {
    let snapshot = celsius(5.0).with_tiers(cold_warm_tiers());
    let description = describe(Some(&snapshot)).unwrap();
    assert_eq!(description.temperature, 5);
    assert_eq!(description.title.as_deref(), Some("cold 5"));
    assert_eq!(description.description.as_deref(), Some("Wrap up warm"));
}

#[test]
fn test_open_ended_tier() {
    let snapshot = celsius(15.0).with_tiers(cold_warm_tiers());
    let description = describe(Some(&snapshot)).unwrap();
    assert_eq!(description.title.as_deref(), Some("warm"));
}

#[test]
fn test_below_every_tier_has_no_text() {
    let snapshot = celsius(-5.0).with_tiers(cold_warm_tiers());
    let description = describe(Some(&snapshot)).unwrap();
    assert_eq!(description.temperature, -5);
    assert!(!description.is_matched());
    assert!(description.title.is_none());
    assert!(description.description.is_none());
}

#[test]
fn test_tier_edges_are_inclusive() {
    let snapshot = celsius(10.0).with_tiers(cold_warm_tiers());
    assert_eq!(
        describe(Some(&snapshot)).unwrap().title.as_deref(),
        Some("cold 10")
    );
    let snapshot = celsius(11.0).with_tiers(cold_warm_tiers());
    assert_eq!(
        describe(Some(&snapshot)).unwrap().title.as_deref(),
        Some("warm")
    );
}

#[test]
fn test_fahrenheit_reading_is_converted_before_lookup() {
    let snapshot = WeatherSnapshot::new(TemperatureReading::fahrenheit(41.0))
        .with_tiers(cold_warm_tiers());
    let description = describe(Some(&snapshot)).unwrap();
    assert_eq!(description.title.as_deref(), Some("cold 5"));
}

#[test]
fn test_unknown_unit_reads_as_celsius() {
    let snapshot = WeatherSnapshot::new(TemperatureReading::new(
        15.0,
        TemperatureUnit::from_tag("KELVIN"),
    ))
    .with_tiers(cold_warm_tiers());
    assert_eq!(describe(Some(&snapshot)).unwrap().temperature, 15);
}

#[test]
fn test_empty_tier_table() {
    let description = describe(Some(&celsius(20.0))).unwrap();
    assert_eq!(description.temperature, 20);
    assert!(!description.is_matched());
}

#[test]
fn test_engine_describes_current_snapshot() {
    let mut engine = SelectionEngine::with_page_size(3);
    assert!(engine.describe().is_none());

    engine.set_snapshot(Some(Arc::new(celsius(7.4).with_tiers(cold_warm_tiers()))));
    assert_eq!(
        engine.describe().unwrap().title.as_deref(),
        Some("cold 7")
    );
}
