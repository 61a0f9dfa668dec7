// ABOUTME: Upstream JSON payload decoding for weather, activities and forecast documents
// ABOUTME: Lenient serde DTOs converted into planner-core domain models, plus file loaders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Payload Layer
//!
//! Upstream documents are loosely shaped: arrays may be missing or `null`,
//! temperatures arrive either as `{ "temp", "metric" }` or as a bare number,
//! and activity ids are optional. The DTOs here absorb that looseness and
//! hand the engine clean domain values. Only undecodable JSON and unreadable
//! files are errors.

/// Activity catalog documents
pub mod activities;
/// Forecast documents
pub mod forecast;
/// Current-weather documents
pub mod weather;

pub use activities::{load_activities, parse_activities, ActivitiesPayload, ActivityDto};
pub use forecast::{load_forecast, parse_forecast, ForecastDayDto, ForecastPayload};
pub use weather::{load_weather, parse_weather, TemperatureDto, WeatherInfoDto, WeatherPayload};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

use crate::errors::{AppError, ErrorCode};
use crate::models::TemperatureUnit;

/// Errors raised while reading or decoding a payload
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The file could not be read
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The document is not valid JSON for the expected shape
    #[error("invalid {document} payload: {source}")]
    Json {
        /// Which document was being decoded
        document: &'static str,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },
}

impl From<PayloadError> for AppError {
    fn from(error: PayloadError) -> Self {
        let code = match &error {
            PayloadError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                ErrorCode::ResourceNotFound
            }
            PayloadError::Io { .. } => ErrorCode::StorageError,
            PayloadError::Json { .. } => ErrorCode::InvalidFormat,
        };
        let message = error.to_string();
        Self::new(code, message).with_source(error)
    }
}

/// Decode `json` as `T`, tagging failures with the document name
pub(crate) fn decode<T: DeserializeOwned>(
    document: &'static str,
    json: &str,
) -> Result<T, PayloadError> {
    serde_json::from_str(json).map_err(|source| PayloadError::Json { document, source })
}

/// Read a whole payload file into memory
pub(crate) fn read_file(path: &Path) -> Result<String, PayloadError> {
    fs::read_to_string(path).map_err(|source| PayloadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve an optional upstream unit tag; absent or unknown tags read as Celsius
pub(crate) fn unit_from_metric(metric: Option<&str>) -> TemperatureUnit {
    let Some(tag) = metric else {
        return TemperatureUnit::Celsius;
    };
    let unit = TemperatureUnit::from_tag(tag);
    if !unit.is_recognized() {
        warn!(metric = tag, "unrecognized temperature unit, treating value as Celsius");
    }
    unit
}

/// Lower bound from a possibly fractional upstream value: the smallest whole degree not below it
pub(crate) fn lower_bound(value: Option<f64>) -> Option<i32> {
    value.filter(|v| v.is_finite()).map(|v| v.ceil() as i32)
}

/// Upper bound from a possibly fractional upstream value: the largest whole degree not above it
pub(crate) fn upper_bound(value: Option<f64>) -> Option<i32> {
    value.filter(|v| v.is_finite()).map(|v| v.floor() as i32)
}
