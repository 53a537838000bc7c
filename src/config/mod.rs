//! Configuration management for habitr.
//!
//! This module handles loading and saving configuration from `~/.habitr/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, HabitDefaults};
