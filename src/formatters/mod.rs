// ABOUTME: Output format abstraction for rendering planner reports
// ABOUTME: Supports plain text (default, for terminals) and JSON (for scripting)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: Default format, headed lists for a terminal
//! - **JSON**: Pretty-printed [`PlannerReport`] for other tools

use std::fmt::{self, Write};

use serde::Serialize;
use thiserror::Error;

use crate::constants::headings;
use crate::errors::{AppError, ErrorCode};
use crate::report::{ActivityCard, ActivitySection, PlannerReport};

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Text => "text/plain",
            Self::Json => "application/json",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the rendered data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered report
    pub data: String,
    /// The format used
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone, Error)]
#[error("Format error ({format}): {message}")]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        let message = error.to_string();
        Self::new(ErrorCode::SerializationError, message).with_source(error)
    }
}

/// Render a planner report in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization or text rendering fails
pub fn format_report(
    report: &PlannerReport,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => to_json(report, format)?,
        OutputFormat::Text => render_text(report).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

fn to_json<T: Serialize>(data: &T, format: OutputFormat) -> Result<String, FormatError> {
    serde_json::to_string_pretty(data).map_err(|e| FormatError {
        message: e.to_string(),
        format,
    })
}

/// Human label for an activity's suitability range
#[must_use]
pub fn bounds_label(min: Option<i32>, max: Option<i32>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("{min}°C to {max}°C"),
        (Some(min), None) => format!("from {min}°C"),
        (None, Some(max)) => format!("up to {max}°C"),
        (None, None) => "any temperature".to_owned(),
    }
}

fn render_text(report: &PlannerReport) -> Result<String, fmt::Error> {
    let mut out = String::new();

    match &report.weather {
        Some(weather) => {
            writeln!(out, "Now: {}°C", weather.temperature)?;
            if let Some(title) = &weather.title {
                writeln!(out, "{title}")?;
            }
            if let Some(description) = weather.description.as_deref().filter(|d| !d.is_empty()) {
                writeln!(out, "{description}")?;
            }
        }
        None => writeln!(out, "No weather reading available")?,
    }

    for section in [&report.suitable, &report.unsuitable] {
        writeln!(out)?;
        render_section(&mut out, section)?;
    }

    if !report.forecast.is_empty() {
        writeln!(out)?;
        let count = report.forecast.len();
        let noun = if count == 1 { "day" } else { "days" };
        writeln!(out, "{} {count} {noun}", headings::FORECAST_PREFIX)?;
        for day in &report.forecast {
            write!(
                out,
                "  {}  {}° / {}°  {}mm  wind {}",
                day.label, day.min_celsius, day.max_celsius, day.precipitation_mm, day.wind_direction
            )?;
            if let Some(condition) = &day.condition {
                write!(out, "  {condition}")?;
            }
            writeln!(out)?;
        }
    }

    Ok(out)
}

fn render_section(out: &mut String, section: &ActivitySection) -> fmt::Result {
    writeln!(out, "{}", section.heading)?;
    if section.activities.is_empty() {
        return writeln!(out, "  (none)");
    }
    for card in &section.activities {
        render_card(out, card)?;
    }
    if section.hidden > 0 {
        writeln!(out, "  ... and {} more", section.hidden)?;
    }
    Ok(())
}

fn render_card(out: &mut String, card: &ActivityCard) -> fmt::Result {
    write!(
        out,
        "  - {} [{}]",
        card.title,
        bounds_label(card.min_temp, card.max_temp)
    )?;
    if !card.short_description.is_empty() {
        write!(out, ": {}", card.short_description)?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_param() {
        assert_eq!(OutputFormat::from_str_param("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str_param("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str_param("yaml"), OutputFormat::Text);
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_bounds_label() {
        assert_eq!(bounds_label(Some(5), Some(15)), "5°C to 15°C");
        assert_eq!(bounds_label(Some(20), None), "from 20°C");
        assert_eq!(bounds_label(None, Some(-1)), "up to -1°C");
        assert_eq!(bounds_label(None, None), "any temperature");
    }

    #[test]
    fn test_format_error_is_serialization_error() {
        let error = AppError::from(FormatError {
            message: "writer closed".to_owned(),
            format: OutputFormat::Text,
        });
        assert_eq!(error.code, ErrorCode::SerializationError);
        assert_eq!(error.code.exit_code(), 70);
        assert!(error.message.contains("writer closed"));
    }
}
