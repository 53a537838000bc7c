use colored::Colorize;

use crate::core::date_key;
use crate::habit::Habit;
use crate::stats::{
    current_streak, date_set, today_progress, DaySummary, HabitStats, ProgressOverview,
};
use crate::storage::CompletionMap;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Format the daily habit checklist.
pub fn format_checklist_pretty(
    habits: &[Habit],
    completions: &CompletionMap,
    today: NaiveDate,
) -> String {
    if habits.is_empty() {
        return format!(
            "No habits yet. Create one with {}",
            "habitr add \"Habit name\"".cyan()
        );
    }

    let key = date_key(today);
    let done = habits
        .iter()
        .filter(|h| {
            completions
                .get(&h.id)
                .is_some_and(|dates| dates.iter().any(|d| d == &key))
        })
        .count();
    let progress = today_progress(habits, completions, today);

    let mut output = format!(
        "{} — {} of {} habits completed ({}%)\n",
        today.format("%A, %B %-d").to_string().bold(),
        done,
        habits.len(),
        progress
    );
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for habit in habits {
        let keys = completions.get(&habit.id);
        let completed = keys.is_some_and(|dates| dates.iter().any(|d| d == &key));
        let dates = keys.map_or_else(HashSet::new, |k| date_set(k));
        let streak = current_streak(&dates, today);

        let check = if completed {
            "[x]".green()
        } else {
            "[ ]".white()
        };

        let mut line = format!("{} {}", check, habit.name.bold());
        if streak > 0 {
            line.push_str(&format!("  {}", format!("🔥 {streak}d").yellow()));
        }
        if !habit.description.is_empty() {
            line.push_str(&format!("  {}", habit.description.dimmed()));
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a single habit with its derived statistics.
pub fn format_habit_detail_pretty(habit: &Habit, stats: &HabitStats) -> String {
    let mut output = format!("{}\n", habit.name.bold());
    if !habit.description.is_empty() {
        output.push_str(&format!("{}\n", habit.description.dimmed()));
    }
    output.push_str(&"─".repeat(40));
    output.push('\n');

    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), habit.id));
    output.push_str(&format!("  {}: {}\n", "Icon".dimmed(), habit.icon));
    output.push_str(&format!("  {}: {}\n", "Color".dimmed(), habit.color));
    output.push_str(&format!(
        "  {}: {}\n",
        "Created".dimmed(),
        habit.created_at.format("%Y-%m-%d")
    ));
    output.push('\n');

    output.push_str(&format!(
        "  {}: {} days\n",
        "Current streak".dimmed(),
        stats.current_streak.to_string().yellow()
    ));
    output.push_str(&format!(
        "  {}: {} days\n",
        "Best streak".dimmed(),
        stats.best_streak.to_string().yellow()
    ));
    output.push_str(&format!(
        "  {}: {}%\n",
        "Completion rate".dimmed(),
        stats.completion_rate.to_string().green()
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Total completions".dimmed(),
        stats.total_completions.to_string().cyan()
    ));

    output
}

/// Format the overall progress dashboard.
pub fn format_overview_pretty(overview: &ProgressOverview) -> String {
    let mut output = format!("{}\n", "Your Progress".bold());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    output.push_str(&format!(
        "  {}: {} days\n",
        "Day streak (all habits)".dimmed(),
        overview.day_streak.to_string().yellow()
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Total completions".dimmed(),
        overview.total_completions.to_string().green()
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Habits".dimmed(),
        overview.habit_count.to_string().cyan()
    ));

    if !overview.habits.is_empty() {
        output.push('\n');
        for row in &overview.habits {
            output.push_str(&format!(
                "  {}  {}\n",
                format!("🔥 {:>3}d", row.streak).yellow(),
                row.name
            ));
        }
    }

    output
}

/// Format the weekly summary as a bar chart.
pub fn format_week_pretty(summary: &[DaySummary]) -> String {
    let mut output = format!("{}\n", "This Week".bold());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    let data: Vec<(String, usize)> = summary
        .iter()
        .map(|d| (d.day.clone(), d.completed))
        .collect();
    let max = summary.iter().map(|d| d.total).max().unwrap_or(0);

    output.push_str(&crate::stats::render_bar_chart(&data, max, 20));
    output.push('\n');

    let values: Vec<usize> = summary.iter().map(|d| d.completed).collect();
    output.push_str(&format!(
        "\n  {} {}\n",
        "trend".dimmed(),
        crate::stats::render_sparkline(&values)
    ));

    output
}
