// ABOUTME: Activity model representing one candidate thing to do
// ABOUTME: Carries display text, images and the temperature bounds used for suitability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::TemperatureBounds;

/// A candidate activity from the catalog
///
/// Only `min_temp` and `max_temp` matter to the selection engine; the text and
/// image fields are carried through untouched for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Stable identity; the catalog position when upstream supplies none
    pub id: String,
    /// Display title
    pub title: String,
    /// One-line teaser shown on cards
    pub short_description: String,
    /// Full description shown in the detail view
    pub description: String,
    /// Lowest suitable temperature in Celsius, inclusive
    pub min_temp: Option<i32>,
    /// Highest suitable temperature in Celsius, inclusive
    pub max_temp: Option<i32>,
    /// Image URIs, main image first
    pub images: Vec<String>,
}

impl Activity {
    /// Temperature bounds of this activity
    #[must_use]
    pub const fn bounds(&self) -> TemperatureBounds {
        TemperatureBounds::new(self.min_temp, self.max_temp)
    }

    /// Whether the activity is advisable at `celsius`
    #[must_use]
    pub fn is_suitable_at(&self, celsius: i32) -> bool {
        self.bounds().contains(celsius)
    }

    /// The card image, if any
    #[must_use]
    pub fn main_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Builder for [`Activity`]
#[derive(Debug, Clone)]
pub struct ActivityBuilder {
    activity: Activity,
}

impl ActivityBuilder {
    /// Creates a new `ActivityBuilder` with required fields
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            activity: Activity {
                id: id.into(),
                title: title.into(),
                short_description: String::new(),
                description: String::new(),
                min_temp: None,
                max_temp: None,
                images: Vec::new(),
            },
        }
    }

    /// Sets the card teaser
    #[must_use]
    pub fn short_description(mut self, value: impl Into<String>) -> Self {
        self.activity.short_description = value.into();
        self
    }

    /// Sets the detail description
    #[must_use]
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.activity.description = value.into();
        self
    }

    /// Sets the lower temperature bound
    #[must_use]
    pub const fn min_temp(mut self, value: i32) -> Self {
        self.activity.min_temp = Some(value);
        self
    }

    /// Sets the lower temperature bound (optional)
    #[must_use]
    pub const fn min_temp_opt(mut self, value: Option<i32>) -> Self {
        self.activity.min_temp = value;
        self
    }

    /// Sets the upper temperature bound
    #[must_use]
    pub const fn max_temp(mut self, value: i32) -> Self {
        self.activity.max_temp = Some(value);
        self
    }

    /// Sets the upper temperature bound (optional)
    #[must_use]
    pub const fn max_temp_opt(mut self, value: Option<i32>) -> Self {
        self.activity.max_temp = value;
        self
    }

    /// Appends an image URI
    #[must_use]
    pub fn image(mut self, uri: impl Into<String>) -> Self {
        self.activity.images.push(uri.into());
        self
    }

    /// Replaces all image URIs
    #[must_use]
    pub fn images(mut self, uris: Vec<String>) -> Self {
        self.activity.images = uris;
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> Activity {
        self.activity
    }
}
