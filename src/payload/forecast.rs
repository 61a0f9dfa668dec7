// ABOUTME: Forecast payload decoding for the upcoming-days panel
// ABOUTME: Parses ISO dates and unit tags; days with unreadable dates are skipped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use tracing::warn;

use super::{decode, read_file, unit_from_metric, PayloadError};
use crate::models::{ForecastCondition, ForecastDay};

/// Condition block of a forecast day
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConditionDto {
    /// Icon key
    pub icon: Option<String>,
    /// Condition text
    pub description: Option<String>,
}

/// One forecast day as sent upstream
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForecastDayDto {
    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    pub date: String,
    /// Daily low in `metric`
    pub min_temp: f64,
    /// Daily high in `metric`
    pub max_temp: f64,
    /// Unit tag; absent means Celsius
    pub metric: Option<String>,
    /// Dominant condition
    pub condition: Option<ConditionDto>,
    /// Precipitation in millimetres
    pub precipitation: f64,
    /// Compass point
    pub wind_direction: String,
}

/// Parse a calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

impl ForecastDayDto {
    /// Convert to a domain day; `None` if the date cannot be read
    #[must_use]
    pub fn into_domain(self) -> Option<ForecastDay> {
        let Some(date) = parse_date(&self.date) else {
            warn!(date = %self.date, "skipping forecast day with unreadable date");
            return None;
        };
        Some(ForecastDay {
            date,
            min_temp: self.min_temp,
            max_temp: self.max_temp,
            unit: unit_from_metric(self.metric.as_deref()),
            condition: self.condition.map(|c| ForecastCondition {
                icon: c.icon,
                description: c.description,
            }),
            precipitation_mm: self.precipitation,
            wind_direction: self.wind_direction,
        })
    }
}

/// The forecast document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ForecastPayload {
    /// Days in upstream order
    #[serde(default)]
    pub forecast: Option<Vec<ForecastDayDto>>,
}

impl ForecastPayload {
    /// Convert to domain days, dropping those with unreadable dates
    #[must_use]
    pub fn into_domain(self) -> Vec<ForecastDay> {
        self.forecast
            .unwrap_or_default()
            .into_iter()
            .filter_map(ForecastDayDto::into_domain)
            .collect()
    }
}

/// Decode a forecast document
///
/// # Errors
///
/// Returns [`PayloadError::Json`] if `json` is not a valid forecast document
pub fn parse_forecast(json: &str) -> Result<Vec<ForecastDay>, PayloadError> {
    decode::<ForecastPayload>("forecast", json).map(ForecastPayload::into_domain)
}

/// Read and decode a forecast document from disk
///
/// # Errors
///
/// Returns [`PayloadError`] if the file cannot be read or decoded
pub fn load_forecast(path: &Path) -> Result<Vec<ForecastDay>, PayloadError> {
    parse_forecast(&read_file(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TemperatureUnit;

    #[test]
    fn test_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        assert_eq!(parse_date("2024-06-03"), Some(expected));
        assert_eq!(parse_date("2024-06-03T08:00:00Z"), Some(expected));
        assert_eq!(parse_date("2024-06-03T23:30:00+02:00"), Some(expected));
        assert_eq!(parse_date("June 3rd"), None);
    }

    #[test]
    fn test_unreadable_dates_are_skipped() {
        let days = parse_forecast(
            r#"{"forecast":[
                {"date":"soon","minTemp":1,"maxTemp":2},
                {"date":"2024-06-04","minTemp":50,"maxTemp":68,"metric":"FAHRENHEIT",
                 "condition":{"icon":"fog","description":"Foggy"},
                 "precipitation":1.5,"windDirection":"SW"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(days.len(), 1);
        let day = &days[0];
        assert_eq!(day.unit, TemperatureUnit::Fahrenheit);
        assert_eq!(day.wind_direction, "SW");
        assert_eq!(
            day.condition.as_ref().and_then(|c| c.icon.as_deref()),
            Some("fog")
        );
    }

    #[test]
    fn test_missing_forecast_is_empty() {
        assert!(parse_forecast("{}").unwrap().is_empty());
    }
}
