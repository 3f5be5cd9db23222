//! In-memory session store.

use std::collections::HashMap;
use std::sync::RwLock;

use super::traits::{LOGGED_IN_KEY, SessionFlag, SessionStore};
use crate::error::{DocdeskError, Result};

/// Key/value session store held in memory.
///
/// Share it through an `Arc` to make it process-wide.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing flag value.
    pub fn with_flag(flag: SessionFlag) -> Self {
        let store = Self::new();
        if let Some(value) = flag.as_stored() {
            if let Ok(mut entries) = store.entries.write() {
                entries.insert(LOGGED_IN_KEY.to_string(), value.to_string());
            }
        }
        store
    }

    fn set(&self, flag: SessionFlag) -> Result<()> {
        let mut entries = self.entries.write().map_err(|e| DocdeskError::Session(e.to_string()))?;
        match flag.as_stored() {
            Some(value) => {
                entries.insert(LOGGED_IN_KEY.to_string(), value.to_string());
            }
            None => {
                entries.remove(LOGGED_IN_KEY);
            }
        }
        Ok(())
    }
}

impl SessionStore for MemorySessionStore {
    fn flag(&self) -> Result<SessionFlag> {
        let entries = self.entries.read().map_err(|e| DocdeskError::Session(e.to_string()))?;
        Ok(SessionFlag::from_stored(entries.get(LOGGED_IN_KEY).map(String::as_str)))
    }

    fn invalidate(&self) -> Result<()> {
        self.set(SessionFlag::LoggedOut)
    }

    fn clear(&self) -> Result<()> {
        self.set(SessionFlag::Absent)
    }

    fn mark_logged_in(&self) -> Result<()> {
        self.set(SessionFlag::LoggedIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_starts_absent() {
        let store = MemorySessionStore::new();
        assert_eq!(store.flag().unwrap(), SessionFlag::Absent);
    }

    #[test]
    fn test_invalidate_sets_false() {
        let store = MemorySessionStore::with_flag(SessionFlag::LoggedIn);
        store.invalidate().unwrap();
        assert_eq!(store.flag().unwrap(), SessionFlag::LoggedOut);
    }

    #[test]
    fn test_clear_removes_flag() {
        let store = MemorySessionStore::with_flag(SessionFlag::LoggedOut);
        store.clear().unwrap();
        assert_eq!(store.flag().unwrap(), SessionFlag::Absent);
    }

    #[test]
    fn test_invalidate_is_idempotent() {
        let store = MemorySessionStore::new();
        store.invalidate().unwrap();
        let once = store.flag().unwrap();
        store.invalidate().unwrap();
        assert_eq!(store.flag().unwrap(), once);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = MemorySessionStore::with_flag(SessionFlag::LoggedIn);
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.flag().unwrap(), SessionFlag::Absent);
    }

    #[test]
    fn test_last_write_wins_across_threads() {
        let store = Arc::new(MemorySessionStore::with_flag(SessionFlag::LoggedIn));
        let writes: [fn(&MemorySessionStore) -> Result<()>; 4] = [
            MemorySessionStore::invalidate,
            MemorySessionStore::mark_logged_in,
            MemorySessionStore::clear,
            MemorySessionStore::invalidate,
        ];

        // Each writer runs on its own thread and finishes before the next starts
        for write in writes {
            let store = Arc::clone(&store);
            std::thread::spawn(move || write(&store)).join().unwrap().unwrap();
        }

        assert_eq!(store.flag().unwrap(), SessionFlag::LoggedOut);

        let store_clone = Arc::clone(&store);
        std::thread::spawn(move || store_clone.clear()).join().unwrap().unwrap();
        assert_eq!(store.flag().unwrap(), SessionFlag::Absent);
    }
}
