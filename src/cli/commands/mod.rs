//! Command implementations for habitr.
//!
//! Each command returns its rendered output as a `String`; `main` prints
//! it. Collection views (`list`, `stats`, `week`) degrade a failed read to
//! an empty state with a warning on stderr, matching how the habit screens
//! behave when the store is unreadable. Mutating commands propagate
//! storage errors.

mod add;
mod icons;
mod list;
mod remove;
mod shell;
mod show;
mod stats;
mod toggle;

use colored::Colorize;

use crate::cli::args::{Commands, OutputFormat};
use crate::config::Config;
use crate::error::HabitrError;
use crate::habit::Habit;
use crate::storage::{CompletionMap, HabitStore};

pub use add::add;
pub use icons::icons;
pub use list::list;
pub use remove::remove;
pub use shell::completions;
pub use show::show;
pub use stats::{stats, week};
pub use toggle::{done, undo};

/// Dispatch a parsed command to its implementation.
///
/// # Errors
///
/// Returns the underlying command error.
pub fn dispatch(
    store: &HabitStore,
    config: &Config,
    command: Commands,
    format: OutputFormat,
) -> Result<String, HabitrError> {
    match command {
        Commands::Add(args) => add(store, config, args, format),
        Commands::List => list(store, format),
        Commands::Done(args) => done(store, &args, format),
        Commands::Undo(args) => undo(store, &args, format),
        Commands::Remove { habit } => remove(store, &habit, format),
        Commands::Show { habit } => show(store, &habit, format),
        Commands::Stats => stats(store, format),
        Commands::Week => week(store, format),
        Commands::Icons => icons(format),
        Commands::Completions { shell } => completions(shell),
    }
}

/// Load habits, degrading a failed read to an empty list with a warning.
pub(crate) fn habits_or_empty(store: &HabitStore) -> Vec<Habit> {
    store.load_habits().unwrap_or_else(|e| {
        eprintln!("{}: {}", "warning".yellow().bold(), e);
        Vec::new()
    })
}

/// Load completions, degrading a failed read to an empty mapping.
pub(crate) fn completions_or_empty(store: &HabitStore) -> CompletionMap {
    store.load_completions().unwrap_or_else(|e| {
        eprintln!("{}: {}", "warning".yellow().bold(), e);
        CompletionMap::new()
    })
}

/// Resolve a habit selector: exact id, exact name (case-insensitive), or
/// unique case-insensitive name prefix.
pub(crate) fn find_habit<'a>(
    habits: &'a [Habit],
    selector: &str,
) -> Result<&'a Habit, HabitrError> {
    if let Some(habit) = habits.iter().find(|h| h.id == selector) {
        return Ok(habit);
    }

    let needle = selector.to_lowercase();

    if let Some(habit) = habits.iter().find(|h| h.name.to_lowercase() == needle) {
        return Ok(habit);
    }

    let matches: Vec<&Habit> = habits
        .iter()
        .filter(|h| h.name.to_lowercase().starts_with(&needle))
        .collect();

    match matches.as_slice() {
        [habit] => Ok(habit),
        [] => Err(HabitrError::NotFound(format!("habit '{selector}'"))),
        _ => Err(HabitrError::InvalidInput(format!(
            "'{selector}' matches {} habits: {}",
            matches.len(),
            matches
                .iter()
                .map(|h| h.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ))),
    }
}
