//! Habit id generation.
//!
//! Ids are timestamp-based unique tokens: milliseconds since the Unix epoch
//! plus a short random suffix so two habits created in the same millisecond
//! still get distinct ids.

use rand::Rng;

/// Current timestamp in milliseconds since the Unix epoch.
fn now_ms() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Generate a unique habit id.
///
/// Format: `{timestamp_ms}-{random_hex}`
/// Example: `1738300800123-a1b2`
#[must_use]
pub fn generate_habit_id() -> String {
    let timestamp = now_ms();
    let random: u16 = rand::thread_rng().gen();
    format!("{timestamp}-{random:04x}")
}
