// ABOUTME: weather-planner CLI - suggests activities for the current weather from JSON payloads
// ABOUTME: Loads weather, activity and forecast documents, runs the selection engine, prints a report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show the first three suggestions on each side
//! weather-planner --weather weather.json --activities activities.json
//!
//! # Everything, with a forecast, as JSON
//! weather-planner --weather weather.json --activities activities.json \
//!     --forecast forecast.json --expand-suitable --expand-unsuitable --format json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use weather_planner::cli::{apply_page_size_override, exit_code};
use weather_planner::engine::{upcoming, EngineConfig, PartitionSide, SelectionEngine};
use weather_planner::errors::AppError;
use weather_planner::formatters::{format_report, OutputFormat};
use weather_planner::logging::LoggingConfig;
use weather_planner::payload::{load_activities, load_forecast, load_weather};
use weather_planner::report::PlannerReport;

#[derive(Parser)]
#[command(
    name = "weather-planner",
    about = "Suggest things to do for the current weather",
    long_about = "Reads current weather, an activity catalog and optionally a forecast, then lists \
                  the activities that suit the current temperature and the ones to avoid."
)]
struct Cli {
    /// Current-weather JSON document
    #[arg(long, value_name = "FILE")]
    weather: PathBuf,

    /// Activity catalog JSON document
    #[arg(long, value_name = "FILE")]
    activities: PathBuf,

    /// Forecast JSON document
    #[arg(long, value_name = "FILE")]
    forecast: Option<PathBuf>,

    /// Show every suitable activity instead of the first page
    #[arg(long)]
    expand_suitable: bool,

    /// Show every unsuitable activity instead of the first page
    #[arg(long)]
    expand_unsuitable: bool,

    /// Activities per collapsed list (overrides PLANNER_PAGE_SIZE)
    #[arg(long, value_name = "N")]
    page_size: Option<usize>,

    /// Output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().verbose(cli.verbose).init() {
        eprintln!("Warning: logging disabled: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = EngineConfig::load()
        .map_err(AppError::from)
        .context("Failed to load engine configuration")?;
    apply_page_size_override(&mut config, cli.page_size)?;
    debug!(
        page_size = config.selection.page_size,
        forecast_days = config.forecast.days,
        "Engine configuration"
    );

    let snapshot = load_weather(&cli.weather)
        .map_err(AppError::from)
        .with_context(|| format!("Failed to load weather from {}", cli.weather.display()))?;
    let catalog = load_activities(&cli.activities)
        .map_err(AppError::from)
        .with_context(|| {
            format!(
                "Failed to load activities from {}",
                cli.activities.display()
            )
        })?;
    let forecast = match &cli.forecast {
        Some(path) => load_forecast(path)
            .map_err(AppError::from)
            .with_context(|| format!("Failed to load forecast from {}", path.display()))?,
        None => Vec::new(),
    };
    info!(
        activities = catalog.len(),
        forecast_days = forecast.len(),
        has_reading = snapshot.is_some(),
        "Payloads loaded"
    );

    let mut engine = SelectionEngine::with_config(&config);
    engine.set_catalog(Arc::from(catalog));
    // Snapshot first: a new temperature collapses both lists
    engine.set_snapshot(snapshot.map(Arc::new));
    engine.set_expanded(PartitionSide::Suitable, cli.expand_suitable);
    engine.set_expanded(PartitionSide::Unsuitable, cli.expand_unsuitable);

    let selection = engine.result();
    let report = PlannerReport::new(
        &selection,
        engine.describe(),
        upcoming(&forecast, config.forecast.days),
    );

    let output = format_report(&report, OutputFormat::from_str_param(&cli.format))
        .map_err(AppError::from)?;
    if output.data.ends_with('\n') {
        print!("{}", output.data);
    } else {
        println!("{}", output.data);
    }
    Ok(())
}
