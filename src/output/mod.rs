//! Output formatting for habitr.
//!
//! This module provides formatters for displaying habits and statistics in
//! pretty (colored, human-readable) and JSON formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::HabitrError;
use crate::habit::Habit;
use crate::storage::CompletionMap;
use chrono::NaiveDate;

pub use json::*;
pub use pretty::*;

/// Format the daily habit checklist.
///
/// # Errors
///
/// Returns `HabitrError::Json` if JSON serialization fails.
pub fn format_checklist(
    habits: &[Habit],
    completions: &CompletionMap,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, HabitrError> {
    match format {
        OutputFormat::Pretty => Ok(format_checklist_pretty(habits, completions, today)),
        OutputFormat::Json => format_checklist_json(habits, completions, today),
    }
}
