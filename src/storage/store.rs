//! Habit and completion persistence.
//!
//! The store owns three persisted values, each a JSON document in the
//! key-value backend:
//! - `@habits`: the ordered habit collection
//! - `@completions`: habit id -> list of `YYYY-MM-DD` date keys
//! - `@hasLaunched`: `"true"` once the quickstart notice has been shown
//!
//! Every operation performs its own full load/save round trip against the
//! backend. There is no caching and no cross-call batching, so callers must
//! reload to observe changes made elsewhere. With a single logical writer
//! (the CLI) this is sufficient; the read-modify-write cycle is not safe
//! against concurrent writers.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::core::date_key;
use crate::error::HabitrError;
use crate::habit::Habit;

use super::kv::{KeyValueStore, SqliteStore};

const HABITS_KEY: &str = "@habits";
const COMPLETIONS_KEY: &str = "@completions";
const ONBOARDING_KEY: &str = "@hasLaunched";

/// Mapping from habit id to its completion date keys.
pub type CompletionMap = BTreeMap<String, Vec<String>>;

/// Persistence store for habits, completions, and the onboarding flag.
pub struct HabitStore {
    kv: Box<dyn KeyValueStore>,
}

impl HabitStore {
    /// Open the store backed by the default SQLite database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open() -> Result<Self, HabitrError> {
        Ok(Self {
            kv: Box::new(SqliteStore::open()?),
        })
    }

    /// Open the store backed by a SQLite database at a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open_at(path: &std::path::Path) -> Result<Self, HabitrError> {
        Ok(Self {
            kv: Box::new(SqliteStore::open_at(path)?),
        })
    }

    /// Create a store over an arbitrary backend (useful for testing).
    #[must_use]
    pub fn with_backend(kv: Box<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Load the persisted habit list, in insertion order.
    ///
    /// An absent key is an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns `HabitrError::StorageRead` if the backend fails or the
    /// stored payload is malformed.
    pub fn load_habits(&self) -> Result<Vec<Habit>, HabitrError> {
        match self.kv.get(HABITS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                HabitrError::StorageRead(format!("Malformed habit data: {e}"))
            }),
            None => Ok(Vec::new()),
        }
    }

    /// Overwrite the entire stored habit collection.
    ///
    /// # Errors
    ///
    /// Returns `HabitrError::StorageWrite` if persisting fails.
    pub fn save_habits(&self, habits: &[Habit]) -> Result<(), HabitrError> {
        let raw = serde_json::to_string(habits)?;
        self.kv.set(HABITS_KEY, &raw)
    }

    /// Append a habit to the collection.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the load or save fails.
    pub fn add_habit(&self, habit: Habit) -> Result<(), HabitrError> {
        let mut habits = self.load_habits()?;
        habits.push(habit);
        self.save_habits(&habits)
    }

    /// Delete a habit by id. Returns whether a habit was removed.
    ///
    /// The habit's completion entry is left in place; once the habit is
    /// gone it is unreachable, and absent-vs-present both read as "no
    /// completions".
    ///
    /// # Errors
    ///
    /// Returns a storage error if the load or save fails.
    pub fn delete_habit(&self, id: &str) -> Result<bool, HabitrError> {
        let mut habits = self.load_habits()?;
        let before = habits.len();
        habits.retain(|h| h.id != id);

        if habits.len() == before {
            return Ok(false);
        }

        self.save_habits(&habits)?;
        Ok(true)
    }

    /// Load the persisted completions mapping.
    ///
    /// An absent key is an empty mapping, not an error.
    ///
    /// # Errors
    ///
    /// Returns `HabitrError::StorageRead` if the backend fails or the
    /// stored payload is malformed.
    pub fn load_completions(&self) -> Result<CompletionMap, HabitrError> {
        match self.kv.get(COMPLETIONS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                HabitrError::StorageRead(format!("Malformed completion data: {e}"))
            }),
            None => Ok(CompletionMap::new()),
        }
    }

    /// Persist the entire completions mapping.
    ///
    /// # Errors
    ///
    /// Returns `HabitrError::StorageWrite` if persisting fails.
    fn save_completions(&self, completions: &CompletionMap) -> Result<(), HabitrError> {
        let raw = serde_json::to_string(completions)?;
        self.kv.set(COMPLETIONS_KEY, &raw)
    }

    /// Record a completion for a habit on the given date.
    ///
    /// Idempotent: adding a date that is already present is a no-op and
    /// nothing is written.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the load or save fails.
    pub fn save_completion(&self, habit_id: &str, date: NaiveDate) -> Result<(), HabitrError> {
        let mut completions = self.load_completions()?;
        let key = date_key(date);

        let dates = completions.entry(habit_id.to_string()).or_default();
        if dates.contains(&key) {
            return Ok(());
        }

        dates.push(key);
        self.save_completions(&completions)
    }

    /// Remove a completion for a habit on the given date.
    ///
    /// A no-op if the habit has no completion entry at all.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the load or save fails.
    pub fn remove_completion(&self, habit_id: &str, date: NaiveDate) -> Result<(), HabitrError> {
        let mut completions = self.load_completions()?;
        let key = date_key(date);

        let Some(dates) = completions.get_mut(habit_id) else {
            return Ok(());
        };

        dates.retain(|d| d != &key);
        self.save_completions(&completions)
    }

    /// Check whether a habit has a completion on the given date.
    ///
    /// # Errors
    ///
    /// Returns `HabitrError::StorageRead` if the load fails.
    pub fn is_completed_on(&self, habit_id: &str, date: NaiveDate) -> Result<bool, HabitrError> {
        let completions = self.load_completions()?;
        let key = date_key(date);

        Ok(completions
            .get(habit_id)
            .is_some_and(|dates| dates.contains(&key)))
    }

    /// Mark the one-time onboarding notice as shown.
    ///
    /// # Errors
    ///
    /// Returns `HabitrError::StorageWrite` if persisting fails.
    pub fn set_onboarding_complete(&self) -> Result<(), HabitrError> {
        self.kv.set(ONBOARDING_KEY, "true")
    }

    /// Check whether the onboarding notice has been shown.
    ///
    /// # Errors
    ///
    /// Returns `HabitrError::StorageRead` if the load fails.
    pub fn has_completed_onboarding(&self) -> Result<bool, HabitrError> {
        Ok(self.kv.get(ONBOARDING_KEY)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::super::kv::{MemoryStore, MockKeyValueStore};
    use super::*;

    fn test_store() -> HabitStore {
        HabitStore::with_backend(Box::new(MemoryStore::new()))
    }

    fn habit(name: &str) -> Habit {
        Habit::new(name, "", "fitness", "#6C5CE7").unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_run_is_empty_not_an_error() {
        let store = test_store();

        assert!(store.load_habits().unwrap().is_empty());
        assert!(store.load_completions().unwrap().is_empty());
        assert!(!store.has_completed_onboarding().unwrap());
    }

    #[test]
    fn test_habits_round_trip_preserves_order() {
        let store = test_store();
        let habits = vec![habit("Run"), habit("Read"), habit("Meditate")];

        store.save_habits(&habits).unwrap();
        let loaded = store.load_habits().unwrap();

        assert_eq!(loaded, habits);
    }

    #[test]
    fn test_add_habit_appends() {
        let store = test_store();

        store.add_habit(habit("Run")).unwrap();
        store.add_habit(habit("Read")).unwrap();

        let loaded = store.load_habits().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "Run");
        assert_eq!(loaded[1].name, "Read");
    }

    #[test]
    fn test_delete_habit() {
        let store = test_store();
        let h = habit("Run");
        let id = h.id.clone();
        store.add_habit(h).unwrap();
        store.add_habit(habit("Read")).unwrap();

        assert!(store.delete_habit(&id).unwrap());
        assert!(!store.delete_habit(&id).unwrap());

        let loaded = store.load_habits().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Read");
    }

    #[test]
    fn test_delete_habit_keeps_completions_entry() {
        let store = test_store();
        let h = habit("Run");
        let id = h.id.clone();
        store.add_habit(h).unwrap();
        store.save_completion(&id, date(2024, 1, 1)).unwrap();

        store.delete_habit(&id).unwrap();

        // The orphaned entry remains; it simply becomes unreachable.
        assert!(store.load_completions().unwrap().contains_key(&id));
    }

    #[test]
    fn test_save_completion_is_idempotent() {
        let store = test_store();
        let d = date(2024, 1, 1);

        store.save_completion("h1", d).unwrap();
        store.save_completion("h1", d).unwrap();

        let completions = store.load_completions().unwrap();
        assert_eq!(completions["h1"], vec!["2024-01-01"]);
    }

    #[test]
    fn test_remove_completion_is_inverse_of_save() {
        let store = test_store();
        let d = date(2024, 1, 1);
        store.save_completion("h1", date(2023, 12, 31)).unwrap();
        let before = store.load_completions().unwrap();

        store.save_completion("h1", d).unwrap();
        store.remove_completion("h1", d).unwrap();

        assert_eq!(store.load_completions().unwrap(), before);
    }

    #[test]
    fn test_remove_completion_without_entry_is_noop() {
        let store = test_store();

        store.remove_completion("nobody", date(2024, 1, 1)).unwrap();
        assert!(store.load_completions().unwrap().is_empty());
    }

    #[test]
    fn test_is_completed_on() {
        let store = test_store();
        let d = date(2024, 1, 1);

        assert!(!store.is_completed_on("h1", d).unwrap());
        store.save_completion("h1", d).unwrap();
        assert!(store.is_completed_on("h1", d).unwrap());
        assert!(!store.is_completed_on("h1", date(2024, 1, 2)).unwrap());
    }

    #[test]
    fn test_empty_list_and_absent_key_both_read_as_incomplete() {
        let store = test_store();
        let d = date(2024, 1, 1);

        store.save_completion("h1", d).unwrap();
        store.remove_completion("h1", d).unwrap();

        // Entry exists but is empty
        assert!(store.load_completions().unwrap().contains_key("h1"));
        assert!(!store.is_completed_on("h1", d).unwrap());
        // No entry at all
        assert!(!store.is_completed_on("h2", d).unwrap());
    }

    #[test]
    fn test_onboarding_flag_lifecycle() {
        let store = test_store();

        assert!(!store.has_completed_onboarding().unwrap());
        store.set_onboarding_complete().unwrap();
        assert!(store.has_completed_onboarding().unwrap());
    }

    #[test]
    fn test_malformed_habits_payload_is_a_read_error() {
        let backend = MemoryStore::new();
        use super::super::kv::KeyValueStore;
        backend.set("@habits", "not json").unwrap();
        let store = HabitStore::with_backend(Box::new(backend));

        assert!(matches!(
            store.load_habits(),
            Err(HabitrError::StorageRead(_))
        ));
    }

    #[test]
    fn test_backend_read_failure_surfaces_as_storage_read() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_get()
            .returning(|_| Err(HabitrError::StorageRead("disk on fire".to_string())));
        let store = HabitStore::with_backend(Box::new(mock));

        assert!(matches!(
            store.load_habits(),
            Err(HabitrError::StorageRead(_))
        ));
        assert!(matches!(
            store.is_completed_on("h1", date(2024, 1, 1)),
            Err(HabitrError::StorageRead(_))
        ));
    }

    #[test]
    fn test_backend_write_failure_surfaces_as_storage_write() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_get().returning(|_| Ok(None));
        mock.expect_set()
            .returning(|_, _| Err(HabitrError::StorageWrite("read-only".to_string())));
        let store = HabitStore::with_backend(Box::new(mock));

        assert!(matches!(
            store.save_completion("h1", date(2024, 1, 1)),
            Err(HabitrError::StorageWrite(_))
        ));
        assert!(matches!(
            store.set_onboarding_complete(),
            Err(HabitrError::StorageWrite(_))
        ));
    }
}
