//! Storage layer for habitr.
//!
//! A small key-value interface with a durable SQLite implementation and an
//! in-memory one for tests, plus the `HabitStore` that owns the habit
//! collection, the completions mapping, and the onboarding flag.

mod kv;
mod store;

pub use kv::{KeyValueStore, MemoryStore, SqliteStore};
pub use store::{CompletionMap, HabitStore};
