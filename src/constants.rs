// ABOUTME: Re-exports planner constants (seeding, templates, units, paging, forecast)
// ABOUTME: Single import path for binaries and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use planner_core::constants::*;
