//! Preference persistence
//!
//! A flat JSON key-value store playing the role browser-local storage
//! plays for a web dashboard. Reads are tolerant: a missing or corrupt
//! file simply yields no value. Writes go through read-modify-write so
//! unrelated keys survive.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr};

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences persisted as a single JSON object on disk.
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The default store location under the user data directory.
    pub fn in_data_dir() -> Self {
        Self::new(crate::utils::get_data_dir().join("preferences.json"))
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
        }
        let mut all = self.read_all();
        all.insert(key.to_string(), value.to_string());
        let raw = serde_json::to_string_pretty(&all)?;
        fs::write(&self.path, raw)
            .wrap_err_with(|| format!("Failed to write {}", self.path.display()))
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryPreferences(BTreeMap<String, String>);

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_get_missing_file_yields_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FilePreferences::new(dir.path().join("preferences.json"));

        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_set_then_get_roundtrips() -> Result<()> {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = FilePreferences::new(dir.path().join("preferences.json"));

        store.set("theme", "dark")?;
        assert_eq!(store.get("theme"), Some(String::from("dark")));
        Ok(())
    }

    #[test]
    fn test_set_creates_missing_directories() -> Result<()> {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = FilePreferences::new(dir.path().join("nested/prefs/preferences.json"));

        store.set("theme", "light")?;
        assert_eq!(store.get("theme"), Some(String::from("light")));
        Ok(())
    }

    #[test]
    fn test_set_preserves_unrelated_keys() -> Result<()> {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = FilePreferences::new(dir.path().join("preferences.json"));

        store.set("theme", "dark")?;
        store.set("other", "value")?;
        store.set("theme", "light")?;

        assert_eq!(store.get("theme"), Some(String::from("light")));
        assert_eq!(store.get("other"), Some(String::from("value")));
        Ok(())
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() -> Result<()> {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("preferences.json");
        fs::write(&path, "not json at all")?;

        let store = FilePreferences::new(path);
        assert_eq!(store.get("theme"), None);
        Ok(())
    }

    #[test]
    fn test_memory_store_roundtrips() -> Result<()> {
        let mut store = MemoryPreferences::default();
        assert_eq!(store.get("theme"), None);

        store.set("theme", "dark")?;
        assert_eq!(store.get("theme"), Some(String::from("dark")));
        Ok(())
    }
}
