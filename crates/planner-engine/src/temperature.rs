// ABOUTME: Temperature normalization into whole Celsius degrees
// ABOUTME: Converts Fahrenheit, rounds half away from zero, treats unknown units as Celsius
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Temperature normalization
//!
//! Every downstream decision (suitability, seeding, tier lookup) works on the
//! integer Celsius value produced here.

use planner_core::constants::units::{
    FAHRENHEIT_OFFSET, FAHRENHEIT_SCALE_DIVISOR, FAHRENHEIT_SCALE_NUMERATOR,
};
use planner_core::models::{TemperatureReading, TemperatureUnit};

/// Convert `value` in `unit` to whole degrees Celsius.
///
/// Rounds half away from zero. `Unrecognized` units are taken as Celsius.
#[must_use]
pub fn normalize(value: f64, unit: TemperatureUnit) -> i32 {
    let celsius = match unit {
        // (v - 32) * 5 / 9, evaluated left to right; a precomputed 5/9 rounds differently at .5
        TemperatureUnit::Fahrenheit => {
            (value - FAHRENHEIT_OFFSET) * FAHRENHEIT_SCALE_NUMERATOR / FAHRENHEIT_SCALE_DIVISOR
        }
        TemperatureUnit::Celsius | TemperatureUnit::Unrecognized => value,
    };
    celsius.round() as i32
}

/// Normalize a reading
#[must_use]
pub fn normalize_reading(reading: &TemperatureReading) -> i32 {
    normalize(reading.value, reading.unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fahrenheit_body_temperature() {
        assert_eq!(normalize(98.6, TemperatureUnit::Fahrenheit), 37);
    }

    #[test]
    fn test_celsius_passthrough() {
        assert_eq!(normalize(15.0, TemperatureUnit::Celsius), 15);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(normalize(2.5, TemperatureUnit::Celsius), 3);
        assert_eq!(normalize(-2.5, TemperatureUnit::Celsius), -3);
        assert_eq!(normalize(2.49, TemperatureUnit::Celsius), 2);
    }

    #[test]
    fn test_freezing_and_boiling_points() {
        assert_eq!(normalize(32.0, TemperatureUnit::Fahrenheit), 0);
        assert_eq!(normalize(212.0, TemperatureUnit::Fahrenheit), 100);
        assert_eq!(normalize(-40.0, TemperatureUnit::Fahrenheit), -40);
    }

    #[test]
    fn test_fahrenheit_landing_on_half_degree_rounds_up() {
        // 85.1°F is exactly 29.5°C, 142.7°F is exactly 61.5°C
        assert_eq!(normalize(85.1, TemperatureUnit::Fahrenheit), 30);
        assert_eq!(normalize(142.7, TemperatureUnit::Fahrenheit), 62);
    }

    #[test]
    fn test_unrecognized_unit_is_celsius() {
        assert_eq!(normalize(21.4, TemperatureUnit::Unrecognized), 21);
    }
}
