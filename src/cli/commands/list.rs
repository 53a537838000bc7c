//! The `habitr list` command: today's checklist.

use chrono::Local;
use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::error::HabitrError;
use crate::output::format_checklist;
use crate::storage::HabitStore;

use super::{completions_or_empty, habits_or_empty};

/// Show today's habits with their completion state and streaks.
///
/// On the very first run a short quickstart notice is shown once, then the
/// `@hasLaunched` flag is set.
///
/// # Errors
///
/// Returns `HabitrError::Json` if JSON serialization fails.
pub fn list(store: &HabitStore, format: OutputFormat) -> Result<String, HabitrError> {
    let habits = habits_or_empty(store);
    let completions = completions_or_empty(store);
    let today = Local::now().date_naive();

    let mut output = String::new();

    // Treat an unreadable flag as already seen rather than nagging
    let onboarded = store.has_completed_onboarding().unwrap_or(true);
    if !onboarded && format == OutputFormat::Pretty {
        output.push_str(&quickstart_notice());
        output.push('\n');
        if let Err(e) = store.set_onboarding_complete() {
            eprintln!("{}: {}", "warning".yellow().bold(), e);
        }
    }

    output.push_str(&format_checklist(&habits, &completions, today, format)?);
    Ok(output)
}

fn quickstart_notice() -> String {
    format!(
        "{}\n  {}   create a habit\n  {}          check it off for today\n  {}              see your streaks\n",
        "Welcome to habitr!".bold(),
        "habitr add \"Read\"".cyan(),
        "habitr done read".cyan(),
        "habitr stats".cyan()
    )
}
