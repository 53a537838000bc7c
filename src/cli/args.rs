use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "habitr")]
#[command(about = "A habit tracker for your terminal")]
#[command(long_about = "habitr - track daily habits, streaks, and progress

Define habits, check them off each day, and watch your streaks grow.
All data lives locally in ~/.habitr/.

QUICK START:
  habitr add \"Read\"         Create a habit
  habitr list               Show today's checklist
  habitr done read          Check a habit off for today
  habitr stats              See streaks and totals

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  habitr <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new habit
    ///
    /// # Examples
    ///
    ///   habitr add "Read"
    ///   habitr add "Run" -d "5k minimum" -i fitness -c "#51CF66"
    #[command(alias = "a")]
    Add(AddArgs),

    /// Show today's habit checklist
    #[command(alias = "ls")]
    List,

    /// Mark a habit as completed
    ///
    /// The habit can be given by id, exact name, or unique name prefix.
    /// The date defaults to today.
    ///
    /// # Examples
    ///
    ///   habitr done read
    ///   habitr done read --date yesterday
    ///   habitr done read --date 2024-06-01
    #[command(alias = "d")]
    Done(ToggleArgs),

    /// Un-mark a completed habit
    Undo(ToggleArgs),

    /// Delete a habit
    #[command(alias = "rm")]
    Remove {
        /// Habit id, name, or unique name prefix
        habit: String,
    },

    /// Show a habit's streaks and completion rate
    Show {
        /// Habit id, name, or unique name prefix
        habit: String,
    },

    /// Show overall progress across all habits
    Stats,

    /// Show this week's completion chart
    Week,

    /// List the available icons and color palette
    Icons,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `habitr add`.
#[derive(Args)]
pub struct AddArgs {
    /// Habit name (at most 50 characters)
    pub name: String,

    /// Optional description (at most 150 characters)
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Icon name (see `habitr icons`)
    #[arg(short, long)]
    pub icon: Option<String>,

    /// Hex color, e.g. "#6C5CE7"
    #[arg(short, long)]
    pub color: Option<String>,
}

/// Arguments for `habitr done` / `habitr undo`.
#[derive(Args)]
pub struct ToggleArgs {
    /// Habit id, name, or unique name prefix
    pub habit: String,

    /// Date to toggle: today, yesterday, "N days ago", or YYYY-MM-DD
    #[arg(long, default_value = "today")]
    pub date: String,
}
