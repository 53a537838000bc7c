//! The `habitr stats` and `habitr week` commands.

use chrono::Local;

use crate::cli::args::OutputFormat;
use crate::error::HabitrError;
use crate::output::{format_overview_pretty, format_week_pretty, to_json};
use crate::stats::{weekly_summary, ProgressOverview};
use crate::storage::HabitStore;

use super::{completions_or_empty, habits_or_empty};

/// Show the overall progress dashboard.
///
/// # Errors
///
/// Returns `HabitrError::Json` if JSON serialization fails.
pub fn stats(store: &HabitStore, format: OutputFormat) -> Result<String, HabitrError> {
    let habits = habits_or_empty(store);
    let completions = completions_or_empty(store);
    let today = Local::now().date_naive();

    let overview = ProgressOverview::calculate(&habits, &completions, today);

    match format {
        OutputFormat::Json => to_json(&overview),
        OutputFormat::Pretty => Ok(format_overview_pretty(&overview)),
    }
}

/// Show the weekly completion chart (7 days ending today, oldest first).
///
/// # Errors
///
/// Returns `HabitrError::Json` if JSON serialization fails.
pub fn week(store: &HabitStore, format: OutputFormat) -> Result<String, HabitrError> {
    let habits = habits_or_empty(store);
    let completions = completions_or_empty(store);
    let today = Local::now().date_naive();

    let summary = weekly_summary(&habits, &completions, today);

    match format {
        OutputFormat::Json => to_json(&summary),
        OutputFormat::Pretty => Ok(format_week_pretty(&summary)),
    }
}
