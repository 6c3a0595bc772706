//! Quota store implementations: durable JSON file and in-memory.

use std::path::PathBuf;

use parking_lot::Mutex;
use tracing::warn;

use voxvault_core::Result;

use crate::{today_stamp, QuotaState, QuotaStore};

/// File-backed store holding one small JSON record. Unreadable or corrupt
/// state fails open to a fresh counter for today.
pub struct FileQuotaStore {
    path: PathBuf,
}

impl FileQuotaStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> QuotaState {
        if !self.path.exists() {
            // First use, not corruption: initialize silently.
            return QuotaState::fresh(today_stamp());
        }
        match self.read_state() {
            Ok(state) => state,
            Err(e) => {
                warn!(
                    "quota state unreadable, failing open to a fresh counter: {}",
                    e
                );
                QuotaState::fresh(today_stamp())
            }
        }
    }

    fn read_state(&self) -> Result<QuotaState> {
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn persist(&self, state: &QuotaState) {
        if let Err(e) = self.write_state(state) {
            warn!("failed to persist quota state: {}", e);
        }
    }

    fn write_state(&self, state: &QuotaState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl QuotaStore for FileQuotaStore {
    fn peek(&self) -> QuotaState {
        let loaded = self.load();
        let current = loaded.rolled_to(&today_stamp());
        if current != loaded {
            self.persist(&current);
        }
        current
    }

    fn increment(&self) -> QuotaState {
        let mut state = self.load().rolled_to(&today_stamp());
        state.count += 1;
        self.persist(&state);
        state
    }

    fn reset(&self) -> QuotaState {
        let state = QuotaState::fresh(today_stamp());
        self.persist(&state);
        state
    }
}

/// In-memory store with the same rollover rules — the substitutable test
/// double, also usable as a no-persistence fallback.
pub struct MemoryQuotaStore {
    state: Mutex<QuotaState>,
}

impl MemoryQuotaStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(QuotaState::fresh(today_stamp())),
        }
    }

    /// Seed with an arbitrary state (e.g. yesterday's) for rollover tests.
    pub fn with_state(state: QuotaState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }
}

impl Default for MemoryQuotaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuotaStore for MemoryQuotaStore {
    fn peek(&self) -> QuotaState {
        let mut state = self.state.lock();
        let rolled = state.rolled_to(&today_stamp());
        *state = rolled.clone();
        rolled
    }

    fn increment(&self) -> QuotaState {
        let mut state = self.state.lock();
        let mut rolled = state.rolled_to(&today_stamp());
        rolled.count += 1;
        *state = rolled.clone();
        rolled
    }

    fn reset(&self) -> QuotaState {
        let mut state = self.state.lock();
        let fresh = QuotaState::fresh(today_stamp());
        *state = fresh.clone();
        fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yesterday_stamp() -> String {
        (chrono::Local::now() - chrono::Duration::days(1))
            .format("%Y-%m-%d")
            .to_string()
    }

    fn store_in(dir: &tempfile::TempDir) -> FileQuotaStore {
        FileQuotaStore::new(dir.path().join("quota.json"))
    }

    #[test]
    fn first_use_initializes_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let state = store.peek();
        assert_eq!(state.count, 0);
        assert_eq!(state.reset_date, today_stamp());
    }

    #[test]
    fn increment_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quota.json");

        let store = FileQuotaStore::new(&path);
        store.increment();
        store.increment();

        let reopened = FileQuotaStore::new(&path);
        assert_eq!(reopened.peek().count, 2);
    }

    #[test]
    fn stale_day_rolls_over_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quota.json");
        let stale = QuotaState {
            count: 5,
            reset_date: yesterday_stamp(),
        };
        std::fs::write(&path, serde_json::to_string(&stale).unwrap()).unwrap();

        let store = FileQuotaStore::new(&path);
        let state = store.peek();
        assert_eq!(state.count, 0);
        assert_eq!(state.reset_date, today_stamp());

        // The rollover was written back, not just computed.
        let reopened = FileQuotaStore::new(&path);
        assert_eq!(reopened.peek(), state);
    }

    #[test]
    fn stale_day_rolls_over_on_increment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quota.json");
        let stale = QuotaState {
            count: 19,
            reset_date: yesterday_stamp(),
        };
        std::fs::write(&path, serde_json::to_string(&stale).unwrap()).unwrap();

        let state = FileQuotaStore::new(&path).increment();
        assert_eq!(state.count, 1);
        assert_eq!(state.reset_date, today_stamp());
    }

    #[test]
    fn corrupt_state_fails_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quota.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FileQuotaStore::new(&path);
        assert_eq!(store.peek().count, 0);
        assert_eq!(store.increment().count, 1);
    }

    #[test]
    fn reset_forces_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.increment();
        store.increment();
        store.increment();

        let state = store.reset();
        assert_eq!(state.count, 0);
        assert_eq!(store.peek().count, 0);
    }

    #[test]
    fn memory_store_matches_rollover_rules() {
        let store = MemoryQuotaStore::with_state(QuotaState {
            count: 7,
            reset_date: yesterday_stamp(),
        });
        assert_eq!(store.peek().count, 0);
        assert_eq!(store.increment().count, 1);
        assert_eq!(store.reset().count, 0);
    }
}
