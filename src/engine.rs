// ABOUTME: Re-exports the selection engine from planner-engine
// ABOUTME: Normalizer, classifier, shuffler, selection, description and forecast formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use planner_engine::*;
