//! The `habitr icons` command.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::error::HabitrError;
use crate::habit::{HABIT_COLORS, HABIT_ICONS};
use crate::output::to_json;

/// List the fixed icon set and the built-in color palette.
///
/// # Errors
///
/// Returns `HabitrError::Json` if JSON serialization fails.
pub fn icons(format: OutputFormat) -> Result<String, HabitrError> {
    match format {
        OutputFormat::Json => to_json(&json!({
            "icons": HABIT_ICONS,
            "colors": HABIT_COLORS,
        })),
        OutputFormat::Pretty => {
            let mut output = format!("{}\n  {}\n\n", "Icons".bold(), HABIT_ICONS.join(", "));
            output.push_str(&format!(
                "{}\n  {}\n\nAny custom #RRGGBB value is also accepted.",
                "Colors".bold(),
                HABIT_COLORS.join(", ")
            ));
            Ok(output)
        }
    }
}
