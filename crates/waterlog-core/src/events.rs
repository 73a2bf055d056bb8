use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::CheckInRecord;
use crate::view::DailyView;

/// Result of a check-in trigger.
/// Adapters render the view; the event tag tells them what happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A drink was registered. If `view.reset` is set the day overflowed and
    /// was cleared, so `record` is not part of the stored list.
    CheckedIn {
        record: CheckInRecord,
        view: DailyView,
        at: DateTime<Utc>,
    },
    /// Trigger arrived inside the debounce window and was ignored.
    Debounced {
        elapsed_ms: i64,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// The view carried by this event, if any.
    pub fn view(&self) -> Option<&DailyView> {
        match self {
            Event::CheckedIn { view, .. } => Some(view),
            Event::Debounced { .. } => None,
        }
    }
}
