//! JSON output formatting for habitr.

use serde::Serialize;
use serde_json::json;

use crate::core::date_key;
use crate::error::HabitrError;
use crate::habit::Habit;
use crate::stats::{current_streak, date_set};
use crate::storage::CompletionMap;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Format the daily checklist as JSON.
///
/// # Errors
///
/// Returns `HabitrError::Json` if serialization fails.
pub fn format_checklist_json(
    habits: &[Habit],
    completions: &CompletionMap,
    today: NaiveDate,
) -> Result<String, HabitrError> {
    let key = date_key(today);

    let items: Vec<serde_json::Value> = habits
        .iter()
        .map(|h| {
            let keys = completions.get(&h.id);
            let done = keys.is_some_and(|dates| dates.iter().any(|d| d == &key));
            let dates = keys.map_or_else(HashSet::new, |k| date_set(k));
            json!({
                "id": h.id,
                "name": h.name,
                "icon": h.icon,
                "color": h.color,
                "completedToday": done,
                "streak": current_streak(&dates, today),
            })
        })
        .collect();

    let output = json!({
        "date": key,
        "count": habits.len(),
        "items": items,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type.
///
/// # Errors
///
/// Returns `HabitrError::Json` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, HabitrError> {
    Ok(serde_json::to_string_pretty(value)?)
}
