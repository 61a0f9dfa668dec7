// ABOUTME: Activity catalog payload decoding
// ABOUTME: Defaults missing ids to catalog position and folds main-image fields into the image list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{decode, lower_bound, read_file, upper_bound, PayloadError};
use crate::models::{Activity, ActivityBuilder};

/// Upstream ids come as strings or numbers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ActivityId {
    /// `"id": "hike-12"`
    Text(String),
    /// `"id": 12`
    Number(i64),
}

impl ActivityId {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

/// One activity as sent upstream
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityDto {
    /// Stable id, if upstream provides one
    pub id: Option<ActivityId>,
    /// Display title
    pub title: String,
    /// Card teaser
    pub short_description: String,
    /// Full description
    pub description: String,
    /// Preferred card image
    pub main_image_url: Option<String>,
    /// Older name for the card image
    pub main_image: Option<String>,
    /// Gallery images
    pub images: Option<Vec<String>>,
    /// Inclusive lower suitability bound in Celsius
    pub min_temp: Option<f64>,
    /// Inclusive upper suitability bound in Celsius
    pub max_temp: Option<f64>,
}

impl ActivityDto {
    /// Convert to a domain activity; `position` supplies the id when upstream has none
    #[must_use]
    pub fn into_domain(self, position: usize) -> Activity {
        let id = self
            .id
            .map_or_else(|| position.to_string(), ActivityId::into_string);

        // Card image first, then gallery images that are not already present
        let mut images: Vec<String> = self
            .main_image_url
            .or(self.main_image)
            .into_iter()
            .collect();
        for image in self.images.unwrap_or_default() {
            if !images.contains(&image) {
                images.push(image);
            }
        }

        ActivityBuilder::new(id, self.title)
            .short_description(self.short_description)
            .description(self.description)
            .min_temp_opt(lower_bound(self.min_temp))
            .max_temp_opt(upper_bound(self.max_temp))
            .images(images)
            .build()
    }
}

/// The activity catalog document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActivitiesPayload {
    /// Catalog in upstream order
    #[serde(default)]
    pub activities: Option<Vec<ActivityDto>>,
}

impl ActivitiesPayload {
    /// Convert to domain activities, preserving order
    #[must_use]
    pub fn into_domain(self) -> Vec<Activity> {
        let activities: Vec<Activity> = self
            .activities
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(position, dto)| dto.into_domain(position))
            .collect();
        debug!(count = activities.len(), "decoded activity catalog");
        activities
    }
}

/// Decode an activity catalog document
///
/// # Errors
///
/// Returns [`PayloadError::Json`] if `json` is not a valid catalog document
pub fn parse_activities(json: &str) -> Result<Vec<Activity>, PayloadError> {
    decode::<ActivitiesPayload>("activities", json).map(ActivitiesPayload::into_domain)
}

/// Read and decode an activity catalog from disk
///
/// # Errors
///
/// Returns [`PayloadError`] if the file cannot be read or decoded
pub fn load_activities(path: &Path) -> Result<Vec<Activity>, PayloadError> {
    parse_activities(&read_file(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_default_to_position() {
        let activities = parse_activities(
            r#"{"activities":[{"title":"a"},{"id":"kayak","title":"b"},{"id":7,"title":"c"}]}"#,
        )
        .unwrap();
        let ids: Vec<&str> = activities.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "kayak", "7"]);
    }

    #[test]
    fn test_main_image_folded_first_without_duplicates() {
        let activities = parse_activities(
            r#"{"activities":[{"title":"a","mainImageUrl":"/m.jpg","images":["/x.jpg","/m.jpg"]}]}"#,
        )
        .unwrap();
        assert_eq!(activities[0].images, vec!["/m.jpg", "/x.jpg"]);
        assert_eq!(activities[0].main_image(), Some("/m.jpg"));
    }

    #[test]
    fn test_legacy_main_image_used_when_url_absent() {
        let activities =
            parse_activities(r#"{"activities":[{"title":"a","mainImage":"/legacy.jpg"}]}"#)
                .unwrap();
        assert_eq!(activities[0].images, vec!["/legacy.jpg"]);
    }

    #[test]
    fn test_missing_or_null_catalog_is_empty() {
        assert!(parse_activities("{}").unwrap().is_empty());
        assert!(parse_activities(r#"{"activities":null}"#).unwrap().is_empty());
    }

    #[test]
    fn test_null_bounds_stay_open() {
        let activities = parse_activities(
            r#"{"activities":[{"title":"a","minTemp":null,"maxTemp":25}]}"#,
        )
        .unwrap();
        assert_eq!(activities[0].min_temp, None);
        assert_eq!(activities[0].max_temp, Some(25));
    }
}
