//! The `habitr add` command.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{AddArgs, OutputFormat};
use crate::config::Config;
use crate::error::HabitrError;
use crate::habit::Habit;
use crate::output::to_json;
use crate::storage::HabitStore;

/// Create a new habit and append it to the collection.
///
/// Icon and color fall back to the configured defaults.
///
/// # Errors
///
/// Returns `HabitrError::InvalidInput` if validation fails, or a storage
/// error if the habit cannot be persisted.
pub fn add(
    store: &HabitStore,
    config: &Config,
    args: AddArgs,
    format: OutputFormat,
) -> Result<String, HabitrError> {
    let icon = args
        .icon
        .unwrap_or_else(|| config.habits.default_icon.clone());
    let color = args
        .color
        .unwrap_or_else(|| config.habits.default_color.clone());

    let habit = Habit::new(&args.name, &args.description, &icon, &color)?;
    store.add_habit(habit.clone())?;

    match format {
        OutputFormat::Json => to_json(&json!({ "created": habit })),
        OutputFormat::Pretty => Ok(format!(
            "{} Created habit {} ({})",
            "✓".green(),
            habit.name.bold(),
            habit.id.dimmed()
        )),
    }
}
