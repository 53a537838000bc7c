//! The `habitr show` command: per-habit detail.

use chrono::{Local, Utc};
use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::error::HabitrError;
use crate::output::{format_habit_detail_pretty, to_json};
use crate::stats::HabitStats;
use crate::storage::HabitStore;

use super::find_habit;

/// Show a habit with its current streak, best streak, completion rate,
/// and total completions.
///
/// # Errors
///
/// Returns `HabitrError::NotFound` for an unknown habit, or a storage
/// error if a load fails.
pub fn show(
    store: &HabitStore,
    selector: &str,
    format: OutputFormat,
) -> Result<String, HabitrError> {
    let habits = store.load_habits()?;
    let habit = find_habit(&habits, selector)?;

    let completions = store.load_completions()?;
    let empty = Vec::new();
    let keys = completions.get(&habit.id).unwrap_or(&empty);

    let today = Local::now().date_naive();
    let stats = HabitStats::calculate(habit, keys, today, Utc::now());

    match format {
        OutputFormat::Json => to_json(&json!({ "habit": habit, "stats": stats })),
        OutputFormat::Pretty => Ok(format_habit_detail_pretty(habit, &stats)),
    }
}
