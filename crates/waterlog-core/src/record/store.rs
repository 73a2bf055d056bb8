//! Persistence of [`DailyRecordSet`] under a single storage key.
//!
//! The whole set is read and written as one JSON value, so a save is one
//! `kv_set` and no half-written day is ever observable. Reads never fail:
//! a missing, unreadable, or malformed value is treated as "no records".

use chrono::{DateTime, Utc};

use super::model::{CheckInRecord, DailyRecordSet, DayBoundary, DayKey};
use crate::error::Result;
use crate::storage::{Config, KeyValueStore};

/// Reads and writes per-day check-in lists.
#[derive(Debug)]
pub struct RecordStore<S> {
    backend: S,
    key: String,
    day_boundary: DayBoundary,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(backend: S, key: impl Into<String>, day_boundary: DayBoundary) -> Self {
        Self {
            backend,
            key: key.into(),
            day_boundary,
        }
    }

    /// Build a store using the configured key and day boundary.
    pub fn from_config(backend: S, config: &Config) -> Self {
        Self::new(backend, config.storage.key.clone(), config.storage.day_boundary)
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn day_boundary(&self) -> DayBoundary {
        self.day_boundary
    }

    /// The day `at` belongs to under this store's boundary.
    pub fn day_key(&self, at: DateTime<Utc>) -> DayKey {
        DayKey::of(at, self.day_boundary)
    }

    /// Every stored day. Unreadable data yields an empty set.
    pub fn load_all(&self) -> DailyRecordSet {
        let raw = match self.backend.kv_get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return DailyRecordSet::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "record storage unreadable");
                return DailyRecordSet::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(set) => set,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "ignoring malformed record data");
                DailyRecordSet::new()
            }
        }
    }

    /// Records for `day`, newest first.
    pub fn load_day(&self, day: &DayKey) -> Vec<CheckInRecord> {
        self.load_all().day(day).to_vec()
    }

    /// Replace `day`'s records, keeping every other day as stored.
    ///
    /// # Errors
    /// Returns an error if the set cannot be serialized or the backend
    /// rejects the write. Nothing is written in that case.
    pub fn save_day(&self, day: &DayKey, records: &[CheckInRecord]) -> Result<()> {
        let mut set = self.load_all();
        set.set_day(day.clone(), records.to_vec());
        let json = serde_json::to_string(&set)?;
        self.backend.kv_set(&self.key, &json)?;
        tracing::debug!(key = %self.key, day = %day, count = records.len(), "records saved");
        Ok(())
    }

    /// Today's records, newest first.
    pub fn load_today(&self) -> Vec<CheckInRecord> {
        self.load_day(&self.day_key(Utc::now()))
    }

    /// Replace today's records.
    ///
    /// # Errors
    /// See [`RecordStore::save_day`].
    pub fn save_today(&self, records: &[CheckInRecord]) -> Result<()> {
        self.save_day(&self.day_key(Utc::now()), records)
    }
}
