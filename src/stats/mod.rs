//! Statistics over habits and their completion dates.
//!
//! Pure, stateless computations:
//! - Current and best streaks
//! - Completion rate since creation
//! - Weekly progress summary
//! - All-habits streak and totals
//!
//! Every function takes "today" (or "now") explicitly; nothing here reads
//! the clock or the store.

pub mod metrics;
pub mod visualization;

pub use metrics::{
    all_completed_streak, best_streak, completion_rate, current_streak, date_set,
    today_progress, total_completions, weekly_summary, DaySummary, HabitStats,
    HabitStreakRow, ProgressOverview, STREAK_SCAN_DAYS,
};
pub use visualization::{render_bar_chart, render_sparkline};
