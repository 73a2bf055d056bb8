//! Check-in controller.
//!
//! The controller is the only state-transition logic in the system. It owns
//! no record state: every operation reloads the day from the [`RecordStore`]
//! and derives a fresh [`DailyView`]. The single piece of memory it keeps is
//! the time of the last accepted trigger, used to collapse the click and
//! touch-end events one physical tap produces.
//!
//! ## Usage
//!
//! ```ignore
//! let store = RecordStore::new(Database::open()?, "drink_records", DayBoundary::Utc);
//! let mut controller = CheckInController::new(store, TrackerSettings::default());
//! let view = controller.initialize();
//! // On each tap:
//! let event = controller.handle_check_in(Utc::now());
//! ```

use chrono::{DateTime, Utc};

use crate::events::Event;
use crate::messages::MessageTable;
use crate::record::{CheckInRecord, DayKey, RecordStore};
use crate::storage::KeyValueStore;
use crate::view::DailyView;

/// Limits the controller enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerSettings {
    /// Cups that make progress 100%.
    pub daily_goal: u32,
    /// A day holding more records than this is cleared.
    pub max_daily_records: usize,
    /// Triggers closer than this to the last accepted one are dropped.
    pub debounce_ms: i64,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            daily_goal: 15,
            max_daily_records: 20,
            debounce_ms: 500,
        }
    }
}

pub struct CheckInController<S> {
    store: RecordStore<S>,
    settings: TrackerSettings,
    messages: MessageTable,
    last_accepted_ms: Option<i64>,
}

impl<S: KeyValueStore> CheckInController<S> {
    pub fn new(store: RecordStore<S>, settings: TrackerSettings) -> Self {
        Self {
            store,
            settings,
            messages: MessageTable::DEFAULT,
            last_accepted_ms: None,
        }
    }

    pub fn with_messages(mut self, messages: MessageTable) -> Self {
        self.messages = messages;
        self
    }

    /// Seed the debounce window, e.g. from a previous process.
    pub fn with_last_accepted(mut self, last_accepted_ms: Option<i64>) -> Self {
        self.last_accepted_ms = last_accepted_ms;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    pub fn settings(&self) -> TrackerSettings {
        self.settings
    }

    pub fn messages(&self) -> &MessageTable {
        &self.messages
    }

    pub fn last_accepted_ms(&self) -> Option<i64> {
        self.last_accepted_ms
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Startup pass: load today, clear it if it overflowed, return the view.
    pub fn initialize(&self) -> DailyView {
        self.initialize_at(Utc::now())
    }

    pub fn initialize_at(&self, now: DateTime<Utc>) -> DailyView {
        let day = self.store.day_key(now);
        let mut records = self.store.load_day(&day);

        let reset = records.len() > self.settings.max_daily_records;
        if reset {
            tracing::info!(day = %day, count = records.len(), "stored records over cap, clearing");
            records.clear();
            self.persist(&day, &records);
        }

        self.view(day, &records, reset)
    }

    /// Register one drink at `now`.
    pub fn handle_check_in(&mut self, now: DateTime<Utc>) -> Event {
        let now_ms = now.timestamp_millis();
        if let Some(last) = self.last_accepted_ms {
            let elapsed_ms = now_ms - last;
            if elapsed_ms < self.settings.debounce_ms {
                tracing::debug!(elapsed_ms, "check-in debounced");
                return Event::Debounced { elapsed_ms, at: now };
            }
        }
        self.last_accepted_ms = Some(now_ms);

        let day = self.store.day_key(now);
        let mut records = self.store.load_day(&day);

        let sequence_index = u32::try_from(records.len() + 1).unwrap_or(u32::MAX);
        let record = CheckInRecord::new(now, sequence_index);
        records.insert(0, record.clone());

        let reset = records.len() > self.settings.max_daily_records;
        if reset {
            tracing::info!(day = %day, "daily record cap exceeded, starting over");
            records.clear();
        }

        self.persist(&day, &records);
        tracing::debug!(day = %day, count = records.len(), index = sequence_index, "check-in recorded");

        Event::CheckedIn {
            record,
            view: self.view(day, &records, reset),
            at: now,
        }
    }

    fn persist(&self, day: &DayKey, records: &[CheckInRecord]) {
        if let Err(e) = self.store.save_day(day, records) {
            tracing::warn!(day = %day, error = %e, "failed to save records; view reflects unsaved state");
        }
    }

    fn view(&self, day: DayKey, records: &[CheckInRecord], reset: bool) -> DailyView {
        DailyView::build(day, records, self.settings.daily_goal, &self.messages, reset)
    }
}
