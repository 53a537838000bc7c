//! Habit domain model.
//!
//! Defines the `Habit` record, the fixed icon set and color palette, and
//! the validation rules applied when habits are created.

mod types;

pub use types::{
    Habit, DEFAULT_COLOR, DEFAULT_ICON, HABIT_COLORS, HABIT_ICONS, MAX_DESCRIPTION_LEN,
    MAX_NAME_LEN,
};
