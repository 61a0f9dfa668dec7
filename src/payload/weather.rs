// ABOUTME: Current-weather payload: temperature reading plus descriptive tier table
// ABOUTME: Accepts structured or bare-number temperatures and converts to WeatherSnapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{decode, lower_bound, read_file, unit_from_metric, upper_bound, PayloadError};
use crate::models::{TemperatureReading, TemperatureUnit, WeatherInfoTier, WeatherSnapshot};

/// Temperature as sent upstream
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TemperatureDto {
    /// `{ "temp": 59, "metric": "FAHRENHEIT" }`
    Reading {
        /// Numeric value
        temp: f64,
        /// Unit tag; absent means Celsius
        #[serde(default)]
        metric: Option<String>,
    },
    /// A bare number, read as Celsius
    Bare(f64),
}

impl TemperatureDto {
    /// Convert to a domain reading
    #[must_use]
    pub fn into_reading(self) -> TemperatureReading {
        match self {
            Self::Reading { temp, metric } => {
                TemperatureReading::new(temp, unit_from_metric(metric.as_deref()))
            }
            Self::Bare(value) => TemperatureReading::new(value, TemperatureUnit::Celsius),
        }
    }
}

/// One entry of the `weatherInfo` table
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeatherInfoDto {
    /// Inclusive lower bound in Celsius
    pub min_temp: Option<f64>,
    /// Inclusive upper bound in Celsius
    pub max_temp: Option<f64>,
    /// Title template
    pub title: String,
    /// Supporting text
    pub description: String,
}

impl WeatherInfoDto {
    fn into_tier(self) -> WeatherInfoTier {
        WeatherInfoTier::new(
            lower_bound(self.min_temp),
            upper_bound(self.max_temp),
            self.title,
            self.description,
        )
    }
}

/// The current-weather document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherPayload {
    /// Current temperature; absent while upstream has no reading
    #[serde(default)]
    pub temperature: Option<TemperatureDto>,
    /// Tier table in priority order
    #[serde(default)]
    pub weather_info: Option<Vec<WeatherInfoDto>>,
}

impl WeatherPayload {
    /// Convert to a snapshot; `None` when the document carries no temperature
    #[must_use]
    pub fn into_domain(self) -> Option<WeatherSnapshot> {
        let Some(temperature) = self.temperature else {
            debug!("weather payload has no temperature");
            return None;
        };
        let tiers = self
            .weather_info
            .unwrap_or_default()
            .into_iter()
            .map(WeatherInfoDto::into_tier)
            .collect();
        Some(WeatherSnapshot::new(temperature.into_reading()).with_tiers(tiers))
    }
}

/// Decode a weather document
///
/// # Errors
///
/// Returns [`PayloadError::Json`] if `json` is not a valid weather document
pub fn parse_weather(json: &str) -> Result<Option<WeatherSnapshot>, PayloadError> {
    decode::<WeatherPayload>("weather", json).map(WeatherPayload::into_domain)
}

/// Read and decode a weather document from disk
///
/// # Errors
///
/// Returns [`PayloadError`] if the file cannot be read or decoded
pub fn load_weather(path: &Path) -> Result<Option<WeatherSnapshot>, PayloadError> {
    parse_weather(&read_file(path)?)
}
