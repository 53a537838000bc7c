//! Path resolution for habitr configuration and data files.
//!
//! All habitr data is stored in `~/.habitr/`:
//! - `config.yaml` - Main configuration file
//! - `habitr.db` - SQLite key-value store for habits and completions

use std::path::PathBuf;

use crate::error::HabitrError;

/// Paths to habitr configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.habitr/`
    pub root: PathBuf,
    /// Config file: `~/.habitr/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.habitr/habitr.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, HabitrError> {
        let home = std::env::var("HOME")
            .map_err(|_| HabitrError::Config("Could not determine home directory".to_string()))?;

        let root = PathBuf::from(home).join(".habitr");

        Ok(Self {
            config_file: root.join("config.yaml"),
            database: root.join("habitr.db"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("habitr.db"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), HabitrError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                HabitrError::Config(format!("Failed to create directory {:?}: {}", self.root, e))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".habitr"))
        })
    }
}
