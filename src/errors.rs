// ABOUTME: Re-exports the unified error type from planner-core
// ABOUTME: AppError, ErrorCode and AppResult are shared by every workspace crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use planner_core::errors::*;
