// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Seed derivation, template tokens, paging defaults and forecast presentation values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Values that must stay identical across runs and implementations live here
//! rather than in runtime configuration, so that a given temperature always
//! produces the same activity ordering.

/// Shuffle seed derivation
pub mod seeding {
    /// Multiplier applied to the normalized Celsius temperature to form the seed
    pub const TEMPERATURE_SEED_MULTIPLIER: i64 = 137;

    /// Offset added to the seed for the unsuitable partition
    pub const UNSUITABLE_SEED_OFFSET: i64 = 100;

    /// Scale applied to `sin(seed)` before taking the fractional part
    pub const PRNG_SCALE: f64 = 10_000.0;
}

/// Weather description templating
pub mod templates {
    /// Placeholder replaced with the normalized Celsius temperature in tier titles
    pub const CELSIUS_PLACEHOLDER: &str = "{{CELSIUS}}";
}

/// Unit tags used by the upstream weather payloads
pub mod units {
    /// Tag for Celsius readings
    pub const CELSIUS_TAG: &str = "CELSIUS";
    /// Tag for Fahrenheit readings
    pub const FAHRENHEIT_TAG: &str = "FAHRENHEIT";
    /// Fahrenheit freezing point offset
    pub const FAHRENHEIT_OFFSET: f64 = 32.0;
    /// Numerator of the Fahrenheit to Celsius scale; multiply before dividing
    pub const FAHRENHEIT_SCALE_NUMERATOR: f64 = 5.0;
    /// Divisor of the Fahrenheit to Celsius scale
    pub const FAHRENHEIT_SCALE_DIVISOR: f64 = 9.0;
}

/// Paging defaults for activity lists
pub mod paging {
    /// Number of activities shown per list before "show all"
    pub const DEFAULT_PAGE_SIZE: usize = 3;
}

/// Section headings for the two activity lists
pub mod headings {
    /// Heading above the suitable list
    pub const SUITABLE: &str = "Some things you could do:";

    /// Heading above the unsuitable list
    pub const UNSUITABLE: &str = "Some things you should not do:";

    /// Leading word of the forecast heading, followed by the day count
    pub const FORECAST_PREFIX: &str = "Upcoming";
}

/// Forecast panel defaults
pub mod forecast {
    /// Number of upcoming days shown in the forecast panel
    pub const DEFAULT_FORECAST_DAYS: usize = 5;

    /// Asset path for the sun icon
    pub const SUN_ICON_PATH: &str = "/sun-icon.svg";

    /// Asset path for the cloud icon
    pub const CLOUD_ICON_PATH: &str = "/cloudy-icon.svg";
}

/// Service identification for structured logging
pub mod service_names {
    /// Service name reported in startup logs
    pub const WEATHER_PLANNER: &str = "weather-planner";
}
