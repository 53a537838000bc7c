//! Command-line interface for habitr.

pub mod args;
pub mod commands;
