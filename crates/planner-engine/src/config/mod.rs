// ABOUTME: Engine configuration with environment overrides and a global instance
// ABOUTME: Covers list page size and the number of forecast days shown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration Module
//!
//! Runtime-tunable presentation limits. Values that determine activity
//! ordering (seed multiplier and offset) are constants in
//! `planner_core::constants::seeding`.
//!
//! Environment overrides:
//! - `PLANNER_PAGE_SIZE` - activities shown per list while collapsed
//! - `PLANNER_FORECAST_DAYS` - upcoming days in the forecast panel

pub mod error;

pub use error::ConfigError;

use planner_core::constants::{forecast::DEFAULT_FORECAST_DAYS, paging::DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Environment variable overriding [`SelectionConfig::page_size`]
pub const PAGE_SIZE_ENV: &str = "PLANNER_PAGE_SIZE";

/// Environment variable overriding [`ForecastConfig::days`]
pub const FORECAST_DAYS_ENV: &str = "PLANNER_FORECAST_DAYS";

/// Main engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Activity list presentation
    pub selection: SelectionConfig,
    /// Forecast panel presentation
    pub forecast: ForecastConfig,
}

/// Activity list presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Activities shown per list while collapsed
    pub page_size: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Forecast panel settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Number of upcoming days summarized
    pub days: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_FORECAST_DAYS,
        }
    }
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a limit is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.selection.page_size == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "selection.page_size must be at least 1",
            ));
        }
        if self.forecast.days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "forecast.days must be at least 1",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(PAGE_SIZE_ENV, &mut self.selection.page_size)?;
        Self::apply_env_var(FORECAST_DAYS_ENV, &mut self.forecast.days)?;
        Ok(self)
    }
}
