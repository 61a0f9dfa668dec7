// ABOUTME: Integration tests for loading upstream JSON documents from disk
// ABOUTME: Tests lenient decoding, unit fallbacks, error codes and end-to-end selection from files
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;
use std::path::PathBuf;

use common::{ids, init_test_logging};
use tempfile::TempDir;
use weather_planner::engine::{describe, select, PartitionSide};
use weather_planner::errors::{AppError, ErrorCode};
use weather_planner::models::{TemperatureReading, TemperatureUnit};
use weather_planner::payload::{
    load_activities, load_forecast, load_weather, parse_activities, parse_weather, PayloadError,
};

const WEATHER: &str = r#"{
  "temperature": { "temp": 50, "metric": "FAHRENHEIT" },
  "weatherInfo": [
    { "minTemp": 0, "maxTemp": 10, "title": "cold {{CELSIUS}}", "description": "Bring a coat" },
    { "minTemp": 11, "maxTemp": null, "title": "warm", "description": "Shorts weather" }
  ]
}"#;

const ACTIVITIES: &str = r#"{
  "activities": [
    { "id": 1, "title": "Canal walk", "shortDescription": "Easy loop", "minTemp": 5, "maxTemp": 15,
      "mainImageUrl": "/walk.jpg" },
    { "id": 2, "title": "Museum", "shortDescription": "Indoors", "minTemp": null, "maxTemp": null },
    { "id": 3, "title": "Beach", "shortDescription": "Sun and sand", "minTemp": 20, "maxTemp": null,
      "images": ["/beach-1.jpg", "/beach-2.jpg"] }
  ]
}"#;

const FORECAST: &str = r#"{
  "forecast": [
    { "date": "2024-06-03", "minTemp": 8, "maxTemp": 14, "metric": "CELSIUS",
      "condition": { "icon": "heavy-rain", "description": "Showers" },
      "precipitation": 4.2, "windDirection": "W" },
    { "date": "2024-06-04T06:00:00Z", "minTemp": 9, "maxTemp": 16, "metric": "CELSIUS",
      "condition": { "icon": "sunny", "description": "Bright" },
      "precipitation": 0, "windDirection": "NE" }
  ]
}"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_files_drive_selection_end_to_end() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let snapshot = load_weather(&write(&dir, "weather.json", WEATHER))
        .unwrap()
        .unwrap();
    let catalog = load_activities(&write(&dir, "activities.json", ACTIVITIES)).unwrap();

    assert_eq!(snapshot.temperature, TemperatureReading::fahrenheit(50.0));
    assert_eq!(catalog[0].images, vec!["/walk.jpg"]);
    assert_eq!(catalog[2].images, vec!["/beach-1.jpg", "/beach-2.jpg"]);

    let result = select(&catalog, Some(&snapshot), false, false, 3);
    assert_eq!(result.temperature, Some(10));
    assert_eq!(ids(&result.list(PartitionSide::Suitable).all), vec!["1", "2"]);
    assert_eq!(ids(&result.list(PartitionSide::Unsuitable).all), vec!["3"]);

    let description = describe(Some(&snapshot)).unwrap();
    assert_eq!(description.title.as_deref(), Some("cold 10"));
}

#[test]
fn test_forecast_file() {
    let dir = TempDir::new().unwrap();
    let days = load_forecast(&write(&dir, "forecast.json", FORECAST)).unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[1].date.to_string(), "2024-06-04");
    assert_eq!(days[0].wind_direction, "W");
    assert!((days[0].precipitation_mm - 4.2).abs() < f64::EPSILON);
}

#[test]
fn test_numeric_temperature_and_unknown_metric() {
    let snapshot = parse_weather(r#"{"temperature": 21}"#).unwrap().unwrap();
    assert_eq!(snapshot.temperature.unit, TemperatureUnit::Celsius);

    let snapshot = parse_weather(r#"{"temperature": {"temp": 21, "metric": "KELVIN"}}"#)
        .unwrap()
        .unwrap();
    assert!(!snapshot.temperature.unit.is_recognized());
    let description = describe(Some(&snapshot)).unwrap();
    assert_eq!(description.temperature, 21);
}

#[test]
fn test_catalog_without_array_is_empty() {
    assert!(parse_activities(r#"{"somethingElse": []}"#)
        .unwrap()
        .is_empty());
}

#[test]
fn test_malformed_document_is_invalid_format() {
    let error = parse_activities(r#"{"activities": "nope"}"#).unwrap_err();
    assert!(matches!(
        error,
        PayloadError::Json {
            document: "activities",
            ..
        }
    ));
    let app_error = AppError::from(error);
    assert_eq!(app_error.code, ErrorCode::InvalidFormat);
    assert_eq!(app_error.code.exit_code(), 65);
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let error = load_weather(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(error, PayloadError::Io { .. }));
    assert!(error.to_string().contains("absent.json"));
    assert_eq!(AppError::from(error).code, ErrorCode::ResourceNotFound);
}
