// ABOUTME: Forecast day model for the upcoming-days panel
// ABOUTME: Holds per-day temperature range, condition, precipitation and wind direction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::TemperatureUnit;

/// Icon key and text for a day's dominant condition
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ForecastCondition {
    /// Upstream icon key such as `sunny` or `heavy-rain`
    pub icon: Option<String>,
    /// Human-readable condition
    pub description: Option<String>,
}

/// One day of the upcoming forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    /// Calendar day
    pub date: NaiveDate,
    /// Daily low in `unit`
    pub min_temp: f64,
    /// Daily high in `unit`
    pub max_temp: f64,
    /// Unit of `min_temp` and `max_temp`
    pub unit: TemperatureUnit,
    /// Dominant condition, if reported
    pub condition: Option<ForecastCondition>,
    /// Expected precipitation in millimetres
    pub precipitation_mm: f64,
    /// Compass point the wind blows from, e.g. `NW`
    pub wind_direction: String,
}
