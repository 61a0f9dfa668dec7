// ABOUTME: Core data models for the weather-driven activity planner
// ABOUTME: Re-exports Activity, WeatherSnapshot, ForecastDay and temperature types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Domain types consumed by the selection engine. They are produced by the
//! payload layer from upstream JSON and treated as read-only by everything
//! downstream.
//!
//! ## Core Models
//!
//! - `Activity`: A candidate activity with optional temperature bounds
//! - `WeatherSnapshot`: Current temperature plus the descriptive tier table
//! - `ForecastDay`: One day of the upcoming forecast
//! - `TemperatureBounds`: Inclusive, optionally open-ended Celsius range

// Domain modules
mod activity;
mod forecast;
mod temperature;
mod weather;

// Activity domain
pub use activity::{Activity, ActivityBuilder};

// Temperature domain
pub use temperature::{TemperatureBounds, TemperatureReading, TemperatureUnit};

// Weather domain
pub use weather::{WeatherInfoTier, WeatherSnapshot};

// Forecast domain
pub use forecast::{ForecastCondition, ForecastDay};
