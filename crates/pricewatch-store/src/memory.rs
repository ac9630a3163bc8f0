//! In-process observation store.

use pricewatch_types::ObservationSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::{ObservationStore, Result, StoreError};

/// Observation store held in memory.
///
/// Reads and writes can be made to fail, which lets callers exercise the
/// degraded paths of whatever sits on top of the store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    observations: Mutex<ObservationSet>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store primed with observations.
    #[must_use]
    pub fn with_observations(observations: ObservationSet) -> Self {
        Self {
            observations: Mutex::new(observations),
            ..Self::default()
        }
    }

    /// Makes subsequent reads fail (or succeed again).
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes subsequent writes fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Returns a copy of the current contents, bypassing failure injection.
    #[must_use]
    pub fn snapshot(&self) -> ObservationSet {
        self.lock().clone()
    }

    /// Returns how many successful saves have happened.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ObservationSet> {
        // a poisoned lock still holds a consistent whole-set value
        self.observations
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl ObservationStore for MemoryStore {
    fn load_all(&self) -> Result<ObservationSet> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("reads disabled".to_string()));
        }
        Ok(self.lock().clone())
    }

    fn save_all(&self, observations: &ObservationSet) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("writes disabled".to_string()));
        }
        *self.lock() = observations.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pricewatch_types::Observation;

    #[test]
    fn test_memory_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load_all().unwrap().is_empty());

        let set: ObservationSet = [Observation::new("bitcoin", 1.0, Utc::now())]
            .into_iter()
            .collect();
        store.save_all(&set).unwrap();

        assert_eq!(store.load_all().unwrap(), set);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_failure_injection() {
        let store = MemoryStore::new();
        store.set_fail_reads(true);
        store.set_fail_writes(true);

        assert!(store.load_all().is_err());
        assert!(store.save_all(&ObservationSet::new()).is_err());
        assert_eq!(store.save_count(), 0);

        store.set_fail_reads(false);
        assert!(store.load_all().is_ok());
    }
}
