// ABOUTME: Forecast panel summaries for the upcoming days
// ABOUTME: Formats day labels with ordinals, maps condition icons and wind rotation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Upcoming-days forecast formatting
//!
//! Turns raw [`ForecastDay`] records into display-ready summaries. Temperatures
//! go through the same normalizer as the current reading so the panel and the
//! activity lists agree on units.

use chrono::{Datelike, NaiveDate};
use planner_core::constants::forecast::{CLOUD_ICON_PATH, SUN_ICON_PATH};
use planner_core::models::ForecastDay;
use serde::{Deserialize, Serialize};

use crate::temperature::normalize;

/// Icon shown next to a forecast day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherIcon {
    /// Clear skies, also the fallback
    #[default]
    Sun,
    /// Clouds, rain, hail, fog or storms
    Cloud,
}

impl WeatherIcon {
    /// Map an upstream icon key; unknown or missing keys fall back to the sun
    #[must_use]
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some("heavy-rain" | "hail" | "thunderstorm" | "fog" | "cloudy") => Self::Cloud,
            _ => Self::Sun,
        }
    }

    /// Static asset path for the icon
    #[must_use]
    pub const fn asset_path(self) -> &'static str {
        match self {
            Self::Sun => SUN_ICON_PATH,
            Self::Cloud => CLOUD_ICON_PATH,
        }
    }
}

/// English ordinal suffix for a day of the month
#[must_use]
pub const fn ordinal_suffix(day: u32) -> &'static str {
    if day > 3 && day < 21 {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Label such as `Monday 3rd Jun`
#[must_use]
pub fn format_day_label(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{} {day}{} {}",
        date.format("%A"),
        ordinal_suffix(day),
        date.format("%b")
    )
}

/// Rotation in degrees for a wind arrow pointing from `direction`; unknown points give 0
#[must_use]
pub fn wind_rotation_degrees(direction: &str) -> u16 {
    match direction {
        "NE" => 45,
        "E" => 90,
        "SE" => 135,
        "S" => 180,
        "SW" => 225,
        "W" => 270,
        "NW" => 315,
        _ => 0,
    }
}

/// Display-ready forecast for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    /// Calendar day
    pub date: NaiveDate,
    /// Human label, e.g. `Monday 3rd Jun`
    pub label: String,
    /// Daily low in whole degrees Celsius
    pub min_celsius: i32,
    /// Daily high in whole degrees Celsius
    pub max_celsius: i32,
    /// Condition icon
    pub icon: WeatherIcon,
    /// Condition text, if reported
    pub condition: Option<String>,
    /// Expected precipitation in millimetres
    pub precipitation_mm: f64,
    /// Compass point as reported
    pub wind_direction: String,
    /// Arrow rotation derived from `wind_direction`
    pub wind_rotation_degrees: u16,
}

impl ForecastSummary {
    /// Summarize one forecast day
    #[must_use]
    pub fn from_day(day: &ForecastDay) -> Self {
        let condition = day.condition.as_ref();
        Self {
            date: day.date,
            label: format_day_label(day.date),
            min_celsius: normalize(day.min_temp, day.unit),
            max_celsius: normalize(day.max_temp, day.unit),
            icon: WeatherIcon::from_key(condition.and_then(|c| c.icon.as_deref())),
            condition: condition.and_then(|c| c.description.clone()),
            precipitation_mm: day.precipitation_mm,
            wind_direction: day.wind_direction.clone(),
            wind_rotation_degrees: wind_rotation_degrees(&day.wind_direction),
        }
    }
}

/// Summaries for the first `limit` days, in feed order
#[must_use]
pub fn upcoming(days: &[ForecastDay], limit: usize) -> Vec<ForecastSummary> {
    days.iter().take(limit).map(ForecastSummary::from_day).collect()
}
