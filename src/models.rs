// ABOUTME: Domain models for the weather planner
// ABOUTME: Re-exports Activity, WeatherSnapshot, ForecastDay and temperature types from planner-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The canonical definitions live in `planner-core` so that the engine crate
//! and this crate agree on a single type for each concept. Upstream JSON shapes
//! are handled separately in [`crate::payload`] and converted into these.

pub use planner_core::models::*;
