//! Metric calculations for habit statistics.
//!
//! All date comparisons operate on calendar dates parsed from `YYYY-MM-DD`
//! keys in the device's local timezone. Malformed keys are skipped.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::parse_date_key;
use crate::habit::Habit;
use crate::storage::CompletionMap;

/// How many days back a streak walk will scan. Streaks at or beyond this
/// bound are reported as the bound itself.
pub const STREAK_SCAN_DAYS: usize = 365;

/// Day names indexed by `Datelike::weekday().num_days_from_sunday()`.
const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Parse a habit's completion date keys into a set of calendar dates.
///
/// Malformed keys are dropped; duplicates collapse.
#[must_use]
pub fn date_set(keys: &[String]) -> HashSet<NaiveDate> {
    keys.iter().filter_map(|k| parse_date_key(k)).collect()
}

/// Count consecutive completed days ending at `today` (inclusive).
///
/// Walks backward day by day for up to [`STREAK_SCAN_DAYS`] days and stops
/// at the first missing day. Returns 0 when today itself is missing.
#[must_use]
pub fn current_streak(dates: &HashSet<NaiveDate>, today: NaiveDate) -> usize {
    let mut streak = 0;
    let mut day = today;

    for _ in 0..STREAK_SCAN_DAYS {
        if !dates.contains(&day) {
            break;
        }
        streak += 1;
        day -= Duration::days(1);
    }

    streak
}

/// The longest run of consecutive completed days ever recorded.
///
/// Returns 0 for an empty set and 1 for a single date.
#[must_use]
pub fn best_streak(dates: &HashSet<NaiveDate>) -> usize {
    if dates.is_empty() {
        return 0;
    }

    let mut sorted: Vec<NaiveDate> = dates.iter().copied().collect();
    sorted.sort_unstable();

    let mut best = 1;
    let mut run = 1;

    for pair in sorted.windows(2) {
        if (pair[1] - pair[0]).num_days() == 1 {
            run += 1;
            best = best.max(run);
        } else {
            run = 1;
        }
    }

    best
}

/// Completion rate as a percentage of days since the habit was created.
///
/// `days = ceil(elapsed days) + 1`, counting the creation day itself.
/// Returns 0 when there are no completions. Deliberately not clamped at
/// 100: back-filled completions beyond the day count will exceed it.
#[must_use]
pub fn completion_rate(
    dates: &HashSet<NaiveDate>,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> usize {
    if dates.is_empty() {
        return 0;
    }

    let elapsed = (now - created_at).num_seconds();
    let days = (elapsed as f64 / 86_400.0).ceil() as i64 + 1;
    // A same-instant creation would otherwise divide by zero
    let days = days.max(1);

    ((dates.len() as f64 / days as f64) * 100.0).round() as usize
}

/// Progress for one day of the weekly summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    /// Short day name (`Sun`..`Sat`).
    pub day: String,
    /// The calendar date.
    pub date: NaiveDate,
    /// How many habits were completed that day.
    pub completed: usize,
    /// Total number of habits.
    pub total: usize,
    /// `round(100 * completed / total)`, 0 when there are no habits.
    pub percentage: usize,
}

/// Per-day completion counts for the 7 days ending at `today`, oldest first.
#[must_use]
pub fn weekly_summary(
    habits: &[Habit],
    completions: &CompletionMap,
    today: NaiveDate,
) -> Vec<DaySummary> {
    let mut summary = Vec::with_capacity(7);

    for offset in (0..7).rev() {
        let date = today - Duration::days(offset);
        let key = crate::core::date_key(date);

        let completed = habits
            .iter()
            .filter(|h| has_completion(completions, &h.id, &key))
            .count();

        let percentage = if habits.is_empty() {
            0
        } else {
            ((completed as f64 / habits.len() as f64) * 100.0).round() as usize
        };

        summary.push(DaySummary {
            day: DAY_NAMES[date.weekday().num_days_from_sunday() as usize].to_string(),
            date,
            completed,
            total: habits.len(),
            percentage,
        });
    }

    summary
}

/// Count consecutive days ending at `today` where every habit was completed.
///
/// Same 365-day scan bound as [`current_streak`]. Returns 0 when there are
/// no habits.
#[must_use]
pub fn all_completed_streak(
    habits: &[Habit],
    completions: &CompletionMap,
    today: NaiveDate,
) -> usize {
    if habits.is_empty() {
        return 0;
    }

    let mut streak = 0;
    let mut day = today;

    for _ in 0..STREAK_SCAN_DAYS {
        let key = crate::core::date_key(day);
        let all_completed = habits
            .iter()
            .all(|h| has_completion(completions, &h.id, &key));

        if !all_completed {
            break;
        }
        streak += 1;
        day -= Duration::days(1);
    }

    streak
}

/// Total completions recorded across all habits.
#[must_use]
pub fn total_completions(completions: &CompletionMap) -> usize {
    completions.values().map(Vec::len).sum()
}

/// Percent of habits completed on `today`. 0 when there are no habits.
#[must_use]
pub fn today_progress(habits: &[Habit], completions: &CompletionMap, today: NaiveDate) -> usize {
    if habits.is_empty() {
        return 0;
    }

    let key = crate::core::date_key(today);
    let completed = habits
        .iter()
        .filter(|h| has_completion(completions, &h.id, &key))
        .count();

    ((completed as f64 / habits.len() as f64) * 100.0).round() as usize
}

/// Membership test on the raw date-key list for one habit.
fn has_completion(completions: &CompletionMap, habit_id: &str, key: &str) -> bool {
    completions
        .get(habit_id)
        .is_some_and(|dates| dates.iter().any(|d| d == key))
}

/// Derived statistics for a single habit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStats {
    /// Consecutive completed days ending today.
    pub current_streak: usize,
    /// Longest run of consecutive completed days ever.
    pub best_streak: usize,
    /// Percent of days completed since creation (uncapped).
    pub completion_rate: usize,
    /// Total completions recorded.
    pub total_completions: usize,
}

impl HabitStats {
    /// Calculate all per-habit statistics from its raw date keys.
    #[must_use]
    pub fn calculate(
        habit: &Habit,
        keys: &[String],
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Self {
        let dates = date_set(keys);

        Self {
            current_streak: current_streak(&dates, today),
            best_streak: best_streak(&dates),
            completion_rate: completion_rate(&dates, habit.created_at, now),
            total_completions: keys.len(),
        }
    }
}

/// One row of the progress overview: a habit and its current streak.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStreakRow {
    /// Habit id.
    pub id: String,
    /// Habit name.
    pub name: String,
    /// Consecutive completed days ending today.
    pub streak: usize,
}

/// Overall progress across all habits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressOverview {
    /// Consecutive days where every habit was completed.
    pub day_streak: usize,
    /// Total completions across all habits.
    pub total_completions: usize,
    /// Number of habits.
    pub habit_count: usize,
    /// Per-habit current streaks, in display order.
    pub habits: Vec<HabitStreakRow>,
}

impl ProgressOverview {
    /// Calculate the overall progress dashboard.
    #[must_use]
    pub fn calculate(habits: &[Habit], completions: &CompletionMap, today: NaiveDate) -> Self {
        let rows = habits
            .iter()
            .map(|h| {
                let dates = completions
                    .get(&h.id)
                    .map_or_else(HashSet::new, |keys| date_set(keys));
                HabitStreakRow {
                    id: h.id.clone(),
                    name: h.name.clone(),
                    streak: current_streak(&dates, today),
                }
            })
            .collect();

        Self {
            day_streak: all_completed_streak(habits, completions, today),
            total_completions: total_completions(completions),
            habit_count: habits.len(),
            habits: rows,
        }
    }
}
