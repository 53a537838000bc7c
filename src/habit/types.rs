use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::generate_habit_id;
use crate::error::HabitrError;

/// Maximum habit name length, in characters.
pub const MAX_NAME_LEN: usize = 50;

/// Maximum habit description length, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 150;

/// The fixed set of symbolic icon names a habit may use.
pub const HABIT_ICONS: [&str; 16] = [
    "fitness",
    "book",
    "water",
    "bed",
    "restaurant",
    "musical-notes",
    "bicycle",
    "leaf",
    "heart",
    "sunny",
    "moon",
    "star",
    "flame",
    "flower",
    "sparkles",
    "telescope",
];

/// The built-in color palette. Custom `#RRGGBB` values are also accepted.
pub const HABIT_COLORS: [&str; 12] = [
    "#6C5CE7", "#00D2FF", "#FF6B9D", "#FFA94D", "#51CF66", "#FFD93D", "#20E3B2", "#FF6B9D",
    "#9775FA", "#FF8787", "#51CF66", "#FFA94D",
];

/// Icon assigned when none is chosen.
pub const DEFAULT_ICON: &str = "fitness";

/// Color assigned when none is chosen.
pub const DEFAULT_COLOR: &str = "#6C5CE7";

/// A user-defined recurring activity tracked for daily completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique id, generated at creation time. Immutable.
    pub id: String,
    /// Display name, trimmed, non-empty, at most [`MAX_NAME_LEN`] characters.
    pub name: String,
    /// Optional description, trimmed, at most [`MAX_DESCRIPTION_LEN`] characters.
    #[serde(default)]
    pub description: String,
    /// Symbolic icon name from [`HABIT_ICONS`].
    pub icon: String,
    /// Hex color, from [`HABIT_COLORS`] or any custom `#RRGGBB` value.
    pub color: String,
    /// Creation timestamp, set once. Immutable.
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit with a generated id and the current timestamp.
    ///
    /// Name and description are trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns `HabitrError::InvalidInput` if the name is empty or too long,
    /// the description is too long, the icon is not one of [`HABIT_ICONS`],
    /// or the color is not a valid hex value.
    pub fn new(
        name: &str,
        description: &str,
        icon: &str,
        color: &str,
    ) -> Result<Self, HabitrError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HabitrError::InvalidInput(
                "habit name must not be empty".to_string(),
            ));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(HabitrError::InvalidInput(format!(
                "habit name must be at most {MAX_NAME_LEN} characters"
            )));
        }

        let description = description.trim();
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(HabitrError::InvalidInput(format!(
                "description must be at most {MAX_DESCRIPTION_LEN} characters"
            )));
        }

        if !HABIT_ICONS.contains(&icon) {
            return Err(HabitrError::InvalidInput(format!(
                "unknown icon '{icon}' (run `habitr icons` to list valid icons)"
            )));
        }

        if !is_valid_color(color) {
            return Err(HabitrError::InvalidInput(format!(
                "invalid color '{color}' (expected a #RRGGBB hex value)"
            )));
        }

        Ok(Self {
            id: generate_habit_id(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            created_at: Utc::now(),
        })
    }
}

/// Check whether a color is a `#RGB` or `#RRGGBB` hex value.
fn is_valid_color(color: &str) -> bool {
    let Some(hex) = color.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}
