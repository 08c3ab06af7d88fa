//! JSON-file preference store.
//!
//! Holds the handful of key-value preferences outside the editor core
//! (currently just the theme). Reads are served from memory; every `set`
//! persists the whole map. A missing or unreadable file falls back to an
//! empty map rather than failing startup.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ntepd_core::sinks::PreferenceStore;

pub const PREFERENCES_FILE: &str = "preferences.json";

pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Load preferences from `path`, starting empty when the file is absent
    /// or malformed.
    #[must_use]
    pub fn load(path: PathBuf) -> Self {
        let values = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|error| {
                tracing::warn!(path = %path.display(), %error, "ignoring malformed preferences file");
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };

        Self { path, values }
    }

    /// Default preference file under the platform config directory.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ntepd")
            .join(PREFERENCES_FILE)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(error) = std::fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), %error, "could not create preference directory");
                return;
            }
        }

        match serde_json::to_string_pretty(&self.values) {
            Ok(serialized) => {
                if let Err(error) = std::fs::write(&self.path, serialized) {
                    tracing::warn!(path = %self.path.display(), %error, "could not persist preferences");
                }
            }
            Err(error) => {
                tracing::warn!(%error, "could not serialize preferences");
            }
        }
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.persist();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = FilePreferences::load(dir.path().join(PREFERENCES_FILE));
        assert_eq!(prefs.get("theme"), None);
    }

    #[test]
    fn set_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(PREFERENCES_FILE);

        let mut prefs = FilePreferences::load(path.clone());
        prefs.set("theme", "light");
        assert_eq!(prefs.get("theme"), Some("light".to_string()));

        let reloaded = FilePreferences::load(path);
        assert_eq!(reloaded.get("theme"), Some("light".to_string()));
    }

    #[test]
    fn malformed_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        std::fs::write(&path, "{not json").unwrap();

        let prefs = FilePreferences::load(path);
        assert_eq!(prefs.get("theme"), None);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = FilePreferences::load(dir.path().join(PREFERENCES_FILE));

        prefs.set("theme", "light");
        prefs.set("theme", "dark");
        assert_eq!(prefs.get("theme"), Some("dark".to_string()));
    }
}
