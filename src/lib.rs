// ABOUTME: Main library entry point for the weather planner
// ABOUTME: Wires payload decoding, the selection engine, report shaping and output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Weather Planner
//!
//! Suggests activities that suit the current temperature and lists the ones
//! to avoid, each in a stable order derived from the temperature, alongside a
//! short weather headline and an upcoming-days forecast.
//!
//! ## Architecture
//!
//! - **`planner-core`**: domain models, error codes, constants, paging
//! - **`planner-engine`**: normalization, classification, seeded ordering,
//!   the memoizing [`engine::SelectionEngine`], descriptions and forecast summaries
//! - **this crate**: upstream JSON decoding ([`payload`]), the
//!   [`report::PlannerReport`] view model, output [`formatters`], logging and the
//!   `weather-planner` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use weather_planner::engine::SelectionEngine;
//! use weather_planner::payload::{parse_activities, parse_weather};
//!
//! # fn main() -> Result<(), weather_planner::payload::PayloadError> {
//! let snapshot = parse_weather(r#"{"temperature":{"temp":10,"metric":"CELSIUS"}}"#)?;
//! let catalog = parse_activities(r#"{"activities":[{"title":"Walk","minTemp":5}]}"#)?;
//!
//! let mut engine = SelectionEngine::with_page_size(3);
//! engine.set_catalog(Arc::from(catalog));
//! engine.set_snapshot(snapshot.map(Arc::new));
//! let result = engine.result();
//! println!("{} suitable", result.suitable.total());
//! # Ok(())
//! # }
//! ```

/// Command-line flag and exit status helpers
pub mod cli;

/// Shared constants
pub mod constants;

/// Selection engine re-exports
pub mod engine;

/// Unified error handling
pub mod errors;

/// Output formats for planner reports
pub mod formatters;

/// Logging configuration
pub mod logging;

/// Domain models
pub mod models;

/// Collapsible list paging
pub mod pagination;

/// Upstream JSON payloads
pub mod payload;

/// Presentation-ready report
pub mod report;
