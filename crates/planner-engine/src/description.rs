// ABOUTME: Weather description resolution from an ordered tier table
// ABOUTME: First matching tier wins; its title placeholder is filled with the Celsius value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use planner_core::constants::templates::CELSIUS_PLACEHOLDER;
use planner_core::models::{WeatherInfoTier, WeatherSnapshot};
use serde::{Deserialize, Serialize};

use crate::temperature::normalize_reading;

/// Headline text for the current temperature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherDescription {
    /// Normalized temperature in Celsius
    pub temperature: i32,
    /// Rendered tier title; `None` when no tier matched
    pub title: Option<String>,
    /// Tier description; `None` when no tier matched
    pub description: Option<String>,
}

impl WeatherDescription {
    /// Whether a tier matched
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        self.title.is_some()
    }
}

/// First tier in table order whose inclusive bounds contain `celsius`
#[must_use]
pub fn matching_tier(tiers: &[WeatherInfoTier], celsius: i32) -> Option<&WeatherInfoTier> {
    tiers.iter().find(|tier| tier.bounds().contains(celsius))
}

/// Replace every `{{CELSIUS}}` in `template` with `celsius`
#[must_use]
pub fn render_title(template: &str, celsius: i32) -> String {
    template.replace(CELSIUS_PLACEHOLDER, &celsius.to_string())
}

/// Describe the current weather, or `None` if no snapshot is available yet.
#[must_use]
pub fn describe(snapshot: Option<&WeatherSnapshot>) -> Option<WeatherDescription> {
    let snapshot = snapshot?;
    let temperature = normalize_reading(&snapshot.temperature);
    let tier = matching_tier(&snapshot.weather_info_tiers, temperature);

    Some(WeatherDescription {
        temperature,
        title: tier.map(|tier| render_title(&tier.title, temperature)),
        description: tier.map(|tier| tier.description.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_every_placeholder() {
        assert_eq!(
            render_title("{{CELSIUS}}° now, {{CELSIUS}}° later", -3),
            "-3° now, -3° later"
        );
        assert_eq!(render_title("no token", 12), "no token");
    }

    #[test]
    fn test_first_match_wins_over_narrower_tier() {
        let tiers = vec![
            WeatherInfoTier::new(None, None, "anything", ""),
            WeatherInfoTier::new(Some(10), Some(12), "narrow", ""),
        ];
        let tier = matching_tier(&tiers, 11).unwrap();
        assert_eq!(tier.title, "anything");
    }

    #[test]
    fn test_no_snapshot_no_description() {
        assert!(describe(None).is_none());
    }
}
