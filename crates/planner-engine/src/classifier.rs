// ABOUTME: Suitability classification of activities against the current temperature
// ABOUTME: Splits a catalog into suitable and unsuitable buckets, preserving input order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use planner_core::models::Activity;

/// Suitable/unsuitable split of a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition<T> {
    /// Items whose bounds contain the temperature
    pub suitable: Vec<T>,
    /// Everything else
    pub unsuitable: Vec<T>,
}

impl<T> Partition<T> {
    /// Total number of classified items
    #[must_use]
    pub fn len(&self) -> usize {
        self.suitable.len() + self.unsuitable.len()
    }

    /// Whether nothing was classified
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suitable.is_empty() && self.unsuitable.is_empty()
    }
}

/// Partition `activities` by whether `celsius` lies within each activity's
/// inclusive bounds. Every activity lands in exactly one bucket, in input order.
#[must_use]
pub fn classify(activities: &[Activity], celsius: i32) -> Partition<Activity> {
    let (suitable, unsuitable) = activities
        .iter()
        .cloned()
        .partition(|activity| activity.is_suitable_at(celsius));
    Partition {
        suitable,
        unsuitable,
    }
}
