// ABOUTME: Temperature reading, unit and inclusive bound types
// ABOUTME: Shared by activity suitability checks and weather tier matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::units::{CELSIUS_TAG, FAHRENHEIT_TAG};

/// Unit attached to a raw temperature reading
///
/// Tags other than `CELSIUS` and `FAHRENHEIT` deserialize to `Unrecognized`,
/// which downstream code treats as Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TemperatureUnit {
    /// Degrees Celsius
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Missing or unknown unit tag
    #[serde(other)]
    Unrecognized,
}

impl TemperatureUnit {
    /// Parse an upstream unit tag. Matching is exact, as upstream sends upper-case tags.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            CELSIUS_TAG => Self::Celsius,
            FAHRENHEIT_TAG => Self::Fahrenheit,
            _ => Self::Unrecognized,
        }
    }

    /// Whether this is one of the two known units
    #[must_use]
    pub const fn is_recognized(self) -> bool {
        !matches!(self, Self::Unrecognized)
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Celsius => write!(f, "{CELSIUS_TAG}"),
            Self::Fahrenheit => write!(f, "{FAHRENHEIT_TAG}"),
            Self::Unrecognized => write!(f, "UNRECOGNIZED"),
        }
    }
}

/// A raw temperature value together with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    /// Reading as reported upstream
    pub value: f64,
    /// Unit of `value`
    pub unit: TemperatureUnit,
}

impl TemperatureReading {
    /// Create a reading
    #[must_use]
    pub const fn new(value: f64, unit: TemperatureUnit) -> Self {
        Self { value, unit }
    }

    /// Create a Celsius reading
    #[must_use]
    pub const fn celsius(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Celsius)
    }

    /// Create a Fahrenheit reading
    #[must_use]
    pub const fn fahrenheit(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Fahrenheit)
    }
}

/// Inclusive Celsius range where `None` leaves that side open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TemperatureBounds {
    /// Lowest admissible temperature, inclusive
    pub min: Option<i32>,
    /// Highest admissible temperature, inclusive
    pub max: Option<i32>,
}

impl TemperatureBounds {
    /// Create bounds from optional limits
    #[must_use]
    pub const fn new(min: Option<i32>, max: Option<i32>) -> Self {
        Self { min, max }
    }

    /// Whether `celsius` lies within the bounds, both ends inclusive.
    ///
    /// Inverted bounds (`min > max`) contain nothing.
    #[must_use]
    pub fn contains(&self, celsius: i32) -> bool {
        let min_ok = match self.min {
            Some(min) => celsius >= min,
            None => true,
        };
        let max_ok = match self.max {
            Some(max) => celsius <= max,
            None => true,
        };
        min_ok && max_ok
    }

    /// Whether both limits are present and `min > max`
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_tag() {
        assert_eq!(TemperatureUnit::from_tag("CELSIUS"), TemperatureUnit::Celsius);
        assert_eq!(
            TemperatureUnit::from_tag("FAHRENHEIT"),
            TemperatureUnit::Fahrenheit
        );
        assert_eq!(
            TemperatureUnit::from_tag("kelvin"),
            TemperatureUnit::Unrecognized
        );
        assert!(!TemperatureUnit::from_tag("").is_recognized());
    }

    #[test]
    fn test_unit_deserializes_unknown_tag() {
        let unit: TemperatureUnit = serde_json::from_str("\"KELVIN\"").unwrap();
        assert_eq!(unit, TemperatureUnit::Unrecognized);
    }

    #[test]
    fn test_bounds_inclusive() {
        let bounds = TemperatureBounds::new(Some(10), Some(20));
        assert!(bounds.contains(10));
        assert!(bounds.contains(20));
        assert!(!bounds.contains(9));
        assert!(!bounds.contains(21));
    }

    #[test]
    fn test_inverted_bounds_contain_nothing() {
        let bounds = TemperatureBounds::new(Some(20), Some(10));
        assert!(bounds.is_inverted());
        assert!((-50..=60).all(|t| !bounds.contains(t)));
    }
}
