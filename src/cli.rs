// ABOUTME: Helpers behind the weather-planner binary's flag handling and exit status
// ABOUTME: Applies the --page-size override and maps failures to sysexits-style codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Error;

use crate::engine::EngineConfig;
use crate::errors::{AppError, AppResult, ErrorCode};

/// Exit status for failures that carry no `AppError`
pub const GENERIC_FAILURE: u8 = 1;

/// Apply a `--page-size` flag on top of the loaded configuration
///
/// # Errors
///
/// Returns a `ValueOutOfRange` error when the flag is zero
pub fn apply_page_size_override(
    config: &mut EngineConfig,
    page_size: Option<usize>,
) -> AppResult<()> {
    match page_size {
        Some(0) => Err(AppError::new(
            ErrorCode::ValueOutOfRange,
            "--page-size must be at least 1",
        )),
        Some(page_size) => {
            config.selection.page_size = page_size;
            Ok(())
        }
        None => Ok(()),
    }
}

/// Process exit status for a failed run
///
/// Looks through the context chain for an `AppError`; anything else exits with
/// [`GENERIC_FAILURE`].
#[must_use]
pub fn exit_code(error: &Error) -> u8 {
    error
        .downcast_ref::<AppError>()
        .and_then(|app_error| u8::try_from(app_error.code.exit_code()).ok())
        .unwrap_or(GENERIC_FAILURE)
}
