// ABOUTME: Presentation-ready planner report assembled from a selection, description and forecast
// ABOUTME: Shapes each activity list into a headed section with visible cards and a hidden count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Planner Report
//!
//! The engine produces [`SelectionResult`], [`WeatherDescription`] and
//! [`ForecastSummary`] values. A [`PlannerReport`] bundles them into the shape
//! a screen or the CLI shows: two headed sections of cards plus the forecast.
//! Only visible activities become cards; collapsed lists report how many were
//! held back.

use serde::Serialize;

use crate::constants::headings;
use crate::engine::{ForecastSummary, SelectionResult, WeatherDescription};
use crate::models::Activity;
use crate::pagination::PagedList;

/// Card-sized view of an activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCard {
    /// Activity id
    pub id: String,
    /// Display title
    pub title: String,
    /// Card teaser
    pub short_description: String,
    /// Card image, if any
    pub main_image: Option<String>,
    /// Inclusive lower bound in Celsius
    pub min_temp: Option<i32>,
    /// Inclusive upper bound in Celsius
    pub max_temp: Option<i32>,
}

impl From<&Activity> for ActivityCard {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id.clone(),
            title: activity.title.clone(),
            short_description: activity.short_description.clone(),
            main_image: activity.main_image().map(str::to_owned),
            min_temp: activity.min_temp,
            max_temp: activity.max_temp,
        }
    }
}

/// One headed activity list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySection {
    /// Section heading
    pub heading: &'static str,
    /// Whether the list shows everything
    pub expanded: bool,
    /// Activities in the partition
    pub total: usize,
    /// Activities held back by a collapsed list
    pub hidden: usize,
    /// Visible activities in display order
    pub activities: Vec<ActivityCard>,
}

impl ActivitySection {
    fn from_list(heading: &'static str, list: &PagedList<Activity>) -> Self {
        Self {
            heading,
            expanded: list.mode.is_expanded(),
            total: list.total(),
            hidden: list.hidden_count(),
            activities: list.visible().iter().map(ActivityCard::from).collect(),
        }
    }
}

/// Everything the planner shows for one set of inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerReport {
    /// Headline for the current temperature; absent without a reading
    pub weather: Option<WeatherDescription>,
    /// Seed behind the suitable ordering
    pub seed: Option<i64>,
    /// Activities advisable now
    pub suitable: ActivitySection,
    /// Activities to avoid now
    pub unsuitable: ActivitySection,
    /// Upcoming days
    pub forecast: Vec<ForecastSummary>,
}

impl PlannerReport {
    /// Assemble a report
    #[must_use]
    pub fn new(
        selection: &SelectionResult,
        weather: Option<WeatherDescription>,
        forecast: Vec<ForecastSummary>,
    ) -> Self {
        Self {
            weather,
            seed: selection.seed,
            suitable: ActivitySection::from_list(headings::SUITABLE, &selection.suitable),
            unsuitable: ActivitySection::from_list(headings::UNSUITABLE, &selection.unsuitable),
            forecast,
        }
    }
}
