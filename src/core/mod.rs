//! Core abstractions for habitr.
//!
//! Shared date-key handling and id generation used across the store,
//! the statistics engine, and the CLI.

mod datetime;
mod id;

pub use datetime::{date_key, parse_date_arg, parse_date_key};
pub use id::generate_habit_id;
