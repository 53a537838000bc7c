//! The `habitr remove` command.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::error::HabitrError;
use crate::output::to_json;
use crate::storage::HabitStore;

use super::find_habit;

/// Delete a habit from the collection.
///
/// # Errors
///
/// Returns `HabitrError::NotFound` for an unknown habit, or a storage
/// error if the load or save fails.
pub fn remove(
    store: &HabitStore,
    selector: &str,
    format: OutputFormat,
) -> Result<String, HabitrError> {
    let habits = store.load_habits()?;
    let habit = find_habit(&habits, selector)?.clone();

    store.delete_habit(&habit.id)?;

    match format {
        OutputFormat::Json => to_json(&json!({ "deleted": habit.id })),
        OutputFormat::Pretty => Ok(format!(
            "{} Deleted habit {}",
            "✓".green(),
            habit.name.bold()
        )),
    }
}
