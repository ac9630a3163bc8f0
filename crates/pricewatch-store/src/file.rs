//! JSON file persistence.

use directories::ProjectDirs;
use pricewatch_types::ObservationSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{ObservationStore, Result, StoreError};

/// File name used under the default data directory.
const DEFAULT_FILE_NAME: &str = "observations.json";

/// Stores observations as one pretty-printed JSON object keyed by symbol.
///
/// Writes go to a sibling temporary file which is then renamed over the
/// target, so a crash mid-write leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given file. The file need not exist.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default observation file path.
    ///
    /// Uses the `directories` crate to find the appropriate location:
    /// - Linux: `~/.local/share/pricewatch/observations.json`
    /// - macOS: `~/Library/Application Support/pricewatch/observations.json`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\pricewatch\observations.json`
    ///
    /// Falls back to `~/.pricewatch/observations.json` if the platform-specific
    /// location cannot be determined.
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "pricewatch")
            .map_or_else(dirs_fallback, |proj_dirs| proj_dirs.data_dir().to_path_buf())
            .join(DEFAULT_FILE_NAME)
    }

    /// Creates a store at the default path.
    #[must_use]
    pub fn with_default_path() -> Self {
        Self::new(Self::default_path())
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ObservationStore for JsonFileStore {
    fn load_all(&self) -> Result<ObservationSet> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no observation file yet");
            return Ok(ObservationSet::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::ReadFile {
            path: self.path.clone(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| StoreError::ParseJson {
            path: self.path.clone(),
            source: e,
        })
    }

    fn save_all(&self, observations: &ObservationSet) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(observations)?;
        let temp = self.temp_path();

        fs::write(&temp, json).map_err(|e| StoreError::WriteFile {
            path: temp.clone(),
            source: e,
        })?;

        fs::rename(&temp, &self.path).map_err(|e| StoreError::WriteFile {
            path: self.path.clone(),
            source: e,
        })?;

        debug!(path = %self.path.display(), count = observations.len(), "observations saved");
        Ok(())
    }
}

/// Fallback for determining the data directory.
fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".pricewatch")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pricewatch_types::Observation;
    use tempfile::TempDir;

    fn sample_set() -> ObservationSet {
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 8, 0, 0).unwrap();
        [
            Observation::new("bitcoin", 95_000.0, at),
            Observation::new("ethereum", 4_000.0, at),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("observations.json"));

        let set = store.load_all().unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("observations.json"));

        store.save_all(&sample_set()).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded, sample_set());
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_save_replaces_previous_content() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("observations.json"));
        store.save_all(&sample_set()).unwrap();

        let at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap();
        let only_btc: ObservationSet = [Observation::new("bitcoin", 96_000.0, at)]
            .into_iter()
            .collect();
        store.save_all(&only_btc).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(!loaded.contains("ethereum"));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("obs.json");
        let store = JsonFileStore::new(&path);

        store.save_all(&sample_set()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("observations.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.load_all(),
            Err(StoreError::ParseJson { .. })
        ));
    }

    #[test]
    fn test_write_into_file_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        // parent "directory" is a regular file
        let store = JsonFileStore::new(blocker.join("observations.json"));
        assert!(store.save_all(&sample_set()).is_err());
    }

    #[test]
    fn test_default_path() {
        let path = JsonFileStore::default_path();
        assert!(path.to_string_lossy().contains("pricewatch"));
        assert!(path.to_string_lossy().ends_with("observations.json"));
    }
}
