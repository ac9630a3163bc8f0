//! The persistence interface and its errors.

use pricewatch_types::ObservationSet;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing observations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to create a directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse JSON.
    #[error("Failed to parse observation file '{path}': {source}")]
    ParseJson {
        /// The path that could not be parsed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Failed to serialize JSON.
    #[error("Failed to serialize observations: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// The store is unavailable (used by non-file backends).
    #[error("Observation store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Whole-set persistence for the watcher's baseline.
///
/// Implementations read and replace the full set; there is no per-symbol
/// update and no locking between processes.
pub trait ObservationStore: Send + Sync {
    /// Reads every stored observation.
    ///
    /// A store that has never been written returns an empty set.
    ///
    /// # Errors
    ///
    /// Returns an error if stored data exists but cannot be read or parsed.
    fn load_all(&self) -> Result<ObservationSet>;

    /// Replaces the stored observations with `observations`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be serialized or written.
    fn save_all(&self, observations: &ObservationSet) -> Result<()>;
}

impl<S: ObservationStore + ?Sized> ObservationStore for &S {
    fn load_all(&self) -> Result<ObservationSet> {
        (**self).load_all()
    }

    fn save_all(&self, observations: &ObservationSet) -> Result<()> {
        (**self).save_all(observations)
    }
}
