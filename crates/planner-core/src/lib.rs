// ABOUTME: Core types and constants for the weather-driven activity planner
// ABOUTME: Foundation crate with domain models, error handling, pagination, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Planner Core
//!
//! Foundation crate providing the shared vocabulary of the weather planner:
//! activities, weather snapshots, forecast days and the paged list views the
//! selection engine hands to the presentation layer. It has no behavior of its
//! own beyond small helpers on those types.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Seed derivation, template tokens and paging defaults
//! - **pagination**: Collapsed/expanded "top-N / show all" list views
//! - **models**: Activity, weather and forecast domain types

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Collapsed/expanded list pagination
pub mod pagination;

/// Core data models (Activity, WeatherSnapshot, ForecastDay)
pub mod models;
