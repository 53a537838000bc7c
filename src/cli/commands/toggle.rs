//! The `habitr done` and `habitr undo` commands.

use chrono::Local;
use colored::Colorize;
use serde_json::json;

use crate::cli::args::{OutputFormat, ToggleArgs};
use crate::core::{date_key, parse_date_arg};
use crate::error::HabitrError;
use crate::output::to_json;
use crate::stats::{current_streak, date_set};
use crate::storage::HabitStore;

use super::find_habit;

/// Mark a habit as completed on the given date (idempotent).
///
/// # Errors
///
/// Returns `HabitrError::InvalidInput` for an unparseable date,
/// `HabitrError::NotFound` for an unknown habit, or a storage error.
pub fn done(
    store: &HabitStore,
    args: &ToggleArgs,
    format: OutputFormat,
) -> Result<String, HabitrError> {
    let today = Local::now().date_naive();
    let date = parse_date_arg(&args.date, today)
        .ok_or_else(|| HabitrError::InvalidInput(format!("could not parse date '{}'", args.date)))?;

    let habits = store.load_habits()?;
    let habit = find_habit(&habits, &args.habit)?;

    store.save_completion(&habit.id, date)?;

    let completions = store.load_completions()?;
    let dates = completions
        .get(&habit.id)
        .map_or_else(Default::default, |keys| date_set(keys));
    let streak = current_streak(&dates, today);

    match format {
        OutputFormat::Json => to_json(&json!({
            "habitId": habit.id,
            "date": date_key(date),
            "completed": true,
            "streak": streak,
        })),
        OutputFormat::Pretty => {
            let mut line = format!(
                "{} {} done for {}",
                "✓".green(),
                habit.name.bold(),
                date_key(date)
            );
            if streak > 1 {
                line.push_str(&format!("  {}", format!("🔥 {streak} day streak").yellow()));
            }
            Ok(line)
        }
    }
}

/// Remove a habit's completion on the given date (no-op if absent).
///
/// # Errors
///
/// Returns `HabitrError::InvalidInput` for an unparseable date,
/// `HabitrError::NotFound` for an unknown habit, or a storage error.
pub fn undo(
    store: &HabitStore,
    args: &ToggleArgs,
    format: OutputFormat,
) -> Result<String, HabitrError> {
    let today = Local::now().date_naive();
    let date = parse_date_arg(&args.date, today)
        .ok_or_else(|| HabitrError::InvalidInput(format!("could not parse date '{}'", args.date)))?;

    let habits = store.load_habits()?;
    let habit = find_habit(&habits, &args.habit)?;

    store.remove_completion(&habit.id, date)?;

    match format {
        OutputFormat::Json => to_json(&json!({
            "habitId": habit.id,
            "date": date_key(date),
            "completed": false,
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {} unmarked for {}",
            "✗".red(),
            habit.name.bold(),
            date_key(date)
        )),
    }
}
