//! Check-in records and the per-day record map.
//!
//! The serialized shape is the durable contract:
//!
//! ```text
//! { "2026-10-19": [ { "time": 1760860800000, "formatted": "08:00:00", "index": 2 }, ... ] }
//! ```
//!
//! Each day's array is newest first.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// One registered drink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInRecord {
    /// Milliseconds since epoch.
    #[serde(rename = "time")]
    pub timestamp: i64,

    /// Local wall-clock `HH:MM:SS` of `timestamp`.
    #[serde(rename = "formatted")]
    pub formatted_time: String,

    /// 1-based position among the day's check-ins when it was created.
    /// Never renumbered.
    #[serde(rename = "index")]
    pub sequence_index: u32,
}

impl CheckInRecord {
    pub fn new(at: DateTime<Utc>, sequence_index: u32) -> Self {
        Self {
            timestamp: at.timestamp_millis(),
            formatted_time: format_time(at),
            sequence_index,
        }
    }
}

/// `HH:MM:SS` in the machine's local time zone.
pub fn format_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// Which calendar decides the date a check-in belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayBoundary {
    /// Days roll over at UTC midnight.
    #[default]
    Utc,
    /// Days roll over at local midnight.
    Local,
}

/// A `YYYY-MM-DD` calendar date used as a record map key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(String);

impl DayKey {
    pub fn of(at: DateTime<Utc>, boundary: DayBoundary) -> Self {
        let date = match boundary {
            DayBoundary::Utc => at.date_naive(),
            DayBoundary::Local => at.with_timezone(&Local).date_naive(),
        };
        Self(date.format("%Y-%m-%d").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Every stored day, keyed by date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyRecordSet {
    days: BTreeMap<DayKey, Vec<CheckInRecord>>,
}

impl DailyRecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records for `day`, newest first. Empty when the day was never written.
    pub fn day(&self, day: &DayKey) -> &[CheckInRecord] {
        self.days.get(day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace a day's entry.
    pub fn set_day(&mut self, day: DayKey, records: Vec<CheckInRecord>) {
        self.days.insert(day, records);
    }

    /// Days with their records, most recent date first.
    pub fn iter_recent(&self) -> impl Iterator<Item = (&DayKey, &[CheckInRecord])> {
        self.days.iter().rev().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
