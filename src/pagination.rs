// ABOUTME: Re-exports paging types from planner-core for unified type identity
// ABOUTME: Keeps PagedList/PageMode the same type across engine, payload and CLI code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use planner_core::pagination::*;
