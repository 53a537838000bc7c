//! Key-value backends.
//!
//! The store talks to persistence through the [`KeyValueStore`] trait so
//! the real SQLite backend can be swapped for an in-memory fake in tests.
//! The SQLite backend keeps everything in a single `kv(key, value)` table
//! and versions its schema through `PRAGMA user_version`.

use std::collections::HashMap;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};

use crate::config::Paths;
use crate::error::HabitrError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// A string-keyed store holding serialized collections.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Read the value for a key, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `HabitrError::StorageRead` if the backend fails.
    fn get(&self, key: &str) -> Result<Option<String>, HabitrError>;

    /// Write a value, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns `HabitrError::StorageWrite` if the backend fails.
    fn set(&self, key: &str, value: &str) -> Result<(), HabitrError>;

    /// Remove a key. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `HabitrError::StorageWrite` if the backend fails.
    fn remove(&self, key: &str) -> Result<(), HabitrError>;
}

/// SQLite-backed key-value store.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the store at the default location (`~/.habitr/habitr.db`).
    ///
    /// Creates the database file and runs migrations if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, HabitrError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        Self::open_at(&paths.database)
    }

    /// Open the store at a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: &std::path::Path) -> Result<Self, HabitrError> {
        let conn = Connection::open(path).map_err(|e| {
            HabitrError::StorageRead(format!("Failed to open database {}: {e}", path.display()))
        })?;

        let store = Self { conn };
        store.migrate()?;

        Ok(store)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_in_memory() -> Result<Self, HabitrError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            HabitrError::StorageRead(format!("Failed to open in-memory database: {e}"))
        })?;

        let store = Self { conn };
        store.migrate()?;

        Ok(store)
    }

    /// Run pending schema migrations.
    fn migrate(&self) -> Result<(), HabitrError> {
        let current: i32 = self
            .conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .map_err(|e| HabitrError::StorageRead(format!("Failed to get schema version: {e}")))?;

        if current >= CURRENT_VERSION {
            return Ok(());
        }

        self.conn
            .execute_batch(
                r"
                CREATE TABLE IF NOT EXISTS kv (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );
                PRAGMA user_version = 1;
                ",
            )
            .map_err(|e| HabitrError::StorageWrite(format!("Migration failed: {e}")))
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, HabitrError> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| HabitrError::StorageRead(format!("Failed to read key '{key}': {e}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), HabitrError> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
                params![key, value],
            )
            .map_err(|e| HabitrError::StorageWrite(format!("Failed to write key '{key}': {e}")))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), HabitrError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", [key])
            .map_err(|e| HabitrError::StorageWrite(format!("Failed to remove key '{key}': {e}")))?;
        Ok(())
    }
}

/// In-memory key-value store for tests.
#[derive(Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.map
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, HabitrError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), HabitrError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), HabitrError> {
        self.lock().remove(key);
        Ok(())
    }
}
