// ABOUTME: Benchmark fixtures for generating activity catalogs and weather snapshots
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures with deterministic bounds spread across a realistic range.

use weather_planner::models::{
    Activity, ActivityBuilder, TemperatureReading, WeatherInfoTier, WeatherSnapshot,
};

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// A typical upstream catalog
    Small,
    /// A large regional catalog
    Medium,
    /// Stress size
    Large,
}

impl CatalogSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 20,
            Self::Medium => 200,
            Self::Large => 2_000,
        }
    }
}

/// Generate `count` activities; roughly a third are open-ended on each side
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_catalog(count: usize) -> Vec<Activity> {
    (0..count)
        .map(|index| {
            let floor = ((index * 7) % 30) as i32 - 10;
            let ceiling = floor + 5 + ((index * 11) % 20) as i32;
            let min_temp = (index % 3 != 0).then_some(floor);
            let max_temp = (index % 3 != 1).then_some(ceiling);
            ActivityBuilder::new(index.to_string(), format!("Benchmark activity {index}"))
                .short_description("Generated for benchmarking")
                .min_temp_opt(min_temp)
                .max_temp_opt(max_temp)
                .image(format!("/img/{index}.jpg"))
                .build()
        })
        .collect()
}

/// Snapshot in Fahrenheit with a five-tier table
#[must_use]
pub fn snapshot(fahrenheit: f64) -> WeatherSnapshot {
    WeatherSnapshot::new(TemperatureReading::fahrenheit(fahrenheit)).with_tiers(vec![
        WeatherInfoTier::new(None, Some(-1), "freezing at {{CELSIUS}}", ""),
        WeatherInfoTier::new(Some(0), Some(9), "cold at {{CELSIUS}}", ""),
        WeatherInfoTier::new(Some(10), Some(17), "mild at {{CELSIUS}}", ""),
        WeatherInfoTier::new(Some(18), Some(25), "warm at {{CELSIUS}}", ""),
        WeatherInfoTier::new(Some(26), None, "hot at {{CELSIUS}}", ""),
    ])
}
