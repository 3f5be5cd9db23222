//! File-backed session store.
//!
//! Entries are kept in memory and the whole map is rewritten as a JSON object
//! whenever it changes, so the flag survives restarts.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::traits::{LOGGED_IN_KEY, SessionFlag, SessionStore};
use crate::error::{DocdeskError, Result};

/// Session store persisted to a JSON file.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    cache: RwLock<HashMap<String, String>>,
}

impl FileSessionStore {
    /// Open the store at `path`, loading existing entries if the file exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let entries: HashMap<String, String> = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            HashMap::new()
        };

        log::debug!("Opened session store at {}", path.display());
        Ok(Self {
            path,
            cache: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Update the cached flag and rewrite the file when the value changed.
    fn set(&self, flag: SessionFlag) -> Result<()> {
        let mut cache = self.cache.write().map_err(|e| DocdeskError::Session(e.to_string()))?;

        let current = cache.get(LOGGED_IN_KEY).map(String::as_str);
        if current == flag.as_stored() {
            return Ok(());
        }

        match flag.as_stored() {
            Some(value) => {
                cache.insert(LOGGED_IN_KEY.to_string(), value.to_string());
            }
            None => {
                cache.remove(LOGGED_IN_KEY);
            }
        }

        self.rewrite_file(&cache)
    }

    fn rewrite_file(&self, entries: &HashMap<String, String>) -> Result<()> {
        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = File::create(&tmp)?;
            writeln!(file, "{}", serde_json::to_string_pretty(entries)?)?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn flag(&self) -> Result<SessionFlag> {
        let cache = self.cache.read().map_err(|e| DocdeskError::Session(e.to_string()))?;
        Ok(SessionFlag::from_stored(cache.get(LOGGED_IN_KEY).map(String::as_str)))
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
    use tempfile::TempDir;

    fn create_test_store() -> (FileSessionStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::open(temp_dir.path().join("session.json")).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_new_store_is_absent() {
        let (store, _temp) = create_test_store();
        assert_eq!(store.flag().unwrap(), SessionFlag::Absent);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_invalidate_persists() {
        let (store, temp) = create_test_store();
        store.invalidate().unwrap();

        let reopened = FileSessionStore::open(temp.path().join("session.json")).unwrap();
        assert_eq!(reopened.flag().unwrap(), SessionFlag::LoggedOut);

        let raw: HashMap<String, String> =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw.get(LOGGED_IN_KEY).map(String::as_str), Some("false"));
    }

    #[test]
    fn test_clear_removes_key_from_file() {
        let (store, temp) = create_test_store();
        store.mark_logged_in().unwrap();
        store.clear().unwrap();

        let reopened = FileSessionStore::open(temp.path().join("session.json")).unwrap();
        assert_eq!(reopened.flag().unwrap(), SessionFlag::Absent);
    }

    #[test]
    fn test_clear_on_absent_does_not_create_file() {
        let (store, _temp) = create_test_store();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
        assert_eq!(store.flag().unwrap(), SessionFlag::Absent);
    }

    #[test]
    fn test_invalidate_twice_same_state() {
        let (store, _temp) = create_test_store();
        store.invalidate().unwrap();
        store.invalidate().unwrap();
        assert_eq!(store.flag().unwrap(), SessionFlag::LoggedOut);
    }

    #[test]
    fn test_other_keys_preserved() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.json");
        fs::write(&path, r#"{"theme": "dark", "LOGGEDIN": "true"}"#).unwrap();

        let store = FileSessionStore::open(&path).unwrap();
        assert_eq!(store.flag().unwrap(), SessionFlag::LoggedIn);
        store.clear().unwrap();

        let raw: HashMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw.get("theme").map(String::as_str), Some("dark"));
        assert!(!raw.contains_key(LOGGED_IN_KEY));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(FileSessionStore::open(&path), Err(DocdeskError::Json(_))));
    }
}
