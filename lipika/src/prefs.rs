use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{LipikaError, Result};
use crate::language::Language;

const PREFS_FILE: &str = "preferences.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferencesFile {
    language: String,
}

/// Persisted user preferences.
///
/// Only the interface language survives between runs; everything else the
/// tool touches is transient. Unknown or corrupt contents fall back to
/// English instead of failing.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Store under the platform config directory.
    pub fn open_default() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "lipika", "lipika").ok_or_else(|| {
            LipikaError::Preferences("Could not determine config directory".to_string())
        })?;
        Ok(Self::at(dirs.config_dir().join(PREFS_FILE)))
    }

    /// Store backed by an explicit file path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the preferred interface language.
    pub fn language(&self) -> Language {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return Language::English,
        };
        match toml::from_str::<PreferencesFile>(&contents) {
            Ok(prefs) => Language::from_tag(&prefs.language).unwrap_or_else(|| {
                warn!(
                    "Unknown language tag '{}' in preferences, falling back to English",
                    prefs.language
                );
                Language::English
            }),
            Err(e) => {
                warn!("Ignoring unreadable preferences file: {e}");
                Language::English
            }
        }
    }

    /// Persist the preferred interface language.
    pub fn set_language(&self, language: Language) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let prefs = PreferencesFile {
            language: language.short_tag().to_string(),
        };
        let contents = toml::to_string_pretty(&prefs)
            .map_err(|e| LipikaError::Preferences(format!("Failed to encode preferences: {e}")))?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(dir: &tempfile::TempDir) -> PreferenceStore {
        PreferenceStore::at(dir.path().join("prefs").join(PREFS_FILE))
    }

    #[test]
    fn test_language_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        store.set_language(Language::Sinhala).unwrap();
        assert_eq!(store.language(), Language::Sinhala);

        store.set_language(Language::Nepali).unwrap();
        assert_eq!(store.language(), Language::Nepali);
    }

    #[test]
    fn test_missing_file_falls_back_to_english() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        assert_eq!(store.language(), Language::English);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_english() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFS_FILE);
        fs::write(&path, "this is not toml {{{{").unwrap();

        let store = PreferenceStore::at(path);
        assert_eq!(store.language(), Language::English);
    }

    #[test]
    fn test_unknown_tag_falls_back_to_english() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFS_FILE);
        fs::write(&path, "language = \"xx\"\n").unwrap();

        let store = PreferenceStore::at(path);
        assert_eq!(store.language(), Language::English);
    }
}
