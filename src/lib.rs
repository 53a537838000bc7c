//! habitr - a habit tracker for your terminal
//!
//! This crate provides a small local persistence store for habits and
//! date-keyed completions, a pure statistics engine (streaks, completion
//! rate, weekly progress), and a CLI that drives both.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod habit;
pub mod output;
pub mod stats;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::HabitrError;
pub use habit::Habit;
pub use storage::HabitStore;
