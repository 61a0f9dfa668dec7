// ABOUTME: Weather snapshot model with the current reading and descriptive tiers
// ABOUTME: Tiers map temperature ranges to templated headline text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::{TemperatureBounds, TemperatureReading};

/// One entry of the ordered weather description table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherInfoTier {
    /// Lowest matching temperature in Celsius, inclusive
    pub min_temp: Option<i32>,
    /// Highest matching temperature in Celsius, inclusive
    pub max_temp: Option<i32>,
    /// Headline; may contain the `{{CELSIUS}}` placeholder
    pub title: String,
    /// Supporting text
    pub description: String,
}

impl WeatherInfoTier {
    /// Create a tier
    #[must_use]
    pub fn new(
        min_temp: Option<i32>,
        max_temp: Option<i32>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            min_temp,
            max_temp,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Temperature range this tier covers
    #[must_use]
    pub const fn bounds(&self) -> TemperatureBounds {
        TemperatureBounds::new(self.min_temp, self.max_temp)
    }
}

/// Current conditions as supplied by the weather feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// Current temperature reading
    pub temperature: TemperatureReading,
    /// Description tiers in priority order
    pub weather_info_tiers: Vec<WeatherInfoTier>,
}

impl WeatherSnapshot {
    /// Snapshot with a reading and no description tiers
    #[must_use]
    pub const fn new(temperature: TemperatureReading) -> Self {
        Self {
            temperature,
            weather_info_tiers: Vec::new(),
        }
    }

    /// Attach description tiers
    #[must_use]
    pub fn with_tiers(mut self, tiers: Vec<WeatherInfoTier>) -> Self {
        self.weather_info_tiers = tiers;
        self
    }
}
