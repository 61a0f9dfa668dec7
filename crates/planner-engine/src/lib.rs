// ABOUTME: Weather-conditioned activity selection engine for the planner workspace
// ABOUTME: Normalizes temperatures, partitions and orders activities, resolves descriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Planner Engine
//!
//! Pure, synchronous logic that decides which activities suit the current
//! weather and in what order to show them. Nothing in this crate performs I/O
//! or fails on domain data: missing snapshots, empty catalogs, unknown units and
//! inverted bounds all degrade to empty or default results.
//!
//! ## Pipeline
//!
//! reading → [`temperature::normalize`] → [`classifier::classify`] →
//! [`shuffle::shuffle`] (one stream per side) → [`pagination`](planner_core::pagination)
//!
//! [`description::describe`] and [`forecast::upcoming`] run off the same inputs.

/// Engine configuration (page size, forecast length)
pub mod config;

/// Temperature normalization to whole Celsius degrees
pub mod temperature;

/// Suitable/unsuitable partitioning
pub mod classifier;

/// Deterministic seed-keyed shuffling
pub mod shuffle;

/// Selection pipeline and memoizing engine
pub mod selection;

/// Tiered weather description
pub mod description;

/// Upcoming-days forecast summaries
pub mod forecast;

pub use classifier::{classify, Partition};
pub use config::{ConfigError, EngineConfig};
pub use description::{describe, WeatherDescription};
pub use forecast::{upcoming, ForecastSummary, WeatherIcon};
pub use selection::{
    select, seed_for, Expansion, PartitionSide, SelectionEngine, SelectionResult,
};
pub use shuffle::shuffle;
pub use temperature::{normalize, normalize_reading};
