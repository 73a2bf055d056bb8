//! Derived view of a day's check-ins.
//!
//! Everything here is a pure function of the record list (mostly of its
//! length). Adapters render a [`DailyView`]; they never look at storage.

use serde::{Deserialize, Serialize};

use crate::messages::MessageTable;
use crate::record::{CheckInRecord, DayKey};

/// How lively the tracker should look, from calm (0) to surging (4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityTier {
    Calm,
    Gentle,
    Lively,
    Strong,
    Surging,
}

impl IntensityTier {
    pub fn from_count(count: usize) -> Self {
        match count {
            0..=3 => IntensityTier::Calm,
            4..=7 => IntensityTier::Gentle,
            8..=12 => IntensityTier::Lively,
            13..=17 => IntensityTier::Strong,
            _ => IntensityTier::Surging,
        }
    }

    /// Ordinal 0..=4.
    pub fn level(self) -> u8 {
        self as u8
    }
}

/// One line of the records list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRow {
    pub formatted_time: String,
    pub sequence_index: u32,
}

impl From<&CheckInRecord> for RecordRow {
    fn from(record: &CheckInRecord) -> Self {
        Self {
            formatted_time: record.formatted_time.clone(),
            sequence_index: record.sequence_index,
        }
    }
}

/// The records list, or the placeholder shown when there is nothing yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum RecordList {
    Empty,
    Entries(Vec<RecordRow>),
}

/// Progress towards the daily goal, clamped to 100.
pub fn progress_percent(count: usize, daily_goal: u32) -> f64 {
    if daily_goal == 0 {
        return 100.0;
    }
    (count as f64 / daily_goal as f64 * 100.0).min(100.0)
}

/// Everything a UI needs to draw one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyView {
    pub date: DayKey,
    pub count: usize,
    pub records: RecordList,
    pub progress_percent: f64,
    pub daily_goal: u32,
    /// Goal celebration cue. Stays set for every view at or past the goal.
    pub goal_reached: bool,
    pub message: String,
    pub intensity: IntensityTier,
    /// The overflow reset fired while producing this view.
    pub reset: bool,
}

impl DailyView {
    /// Build the view for `records` (newest first).
    pub fn build(
        date: DayKey,
        records: &[CheckInRecord],
        daily_goal: u32,
        messages: &MessageTable,
        reset: bool,
    ) -> Self {
        let count = records.len();
        let list = if records.is_empty() {
            RecordList::Empty
        } else {
            RecordList::Entries(records.iter().map(RecordRow::from).collect())
        };

        Self {
            date,
            count,
            records: list,
            progress_percent: progress_percent(count, daily_goal),
            daily_goal,
            goal_reached: count >= daily_goal as usize,
            message: messages.message_for(count).to_string(),
            intensity: IntensityTier::from_count(count),
            reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DayBoundary;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn records(n: u32) -> Vec<CheckInRecord> {
        let base = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
        (1..=n)
            .rev()
            .map(|i| CheckInRecord::new(base + chrono::Duration::minutes(i as i64), i))
            .collect()
    }

    fn view(n: u32) -> DailyView {
        let day = DayKey::of(Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap(), DayBoundary::Utc);
        DailyView::build(day, &records(n), 15, &MessageTable::DEFAULT, false)
    }

    #[test]
    fn tier_boundaries() {
        let cases = [
            (0, 0),
            (3, 0),
            (4, 1),
            (7, 1),
            (8, 2),
            (12, 2),
            (13, 3),
            (17, 3),
            (18, 4),
            (20, 4),
        ];
        for (count, level) in cases {
            assert_eq!(IntensityTier::from_count(count).level(), level, "count {count}");
        }
    }

    #[test]
    fn every_tier_is_reached() {
        let levels: std::collections::BTreeSet<u8> =
            (0..=20).map(|c| IntensityTier::from_count(c).level()).collect();
        assert_eq!(levels.into_iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    proptest! {
        #[test]
        fn tier_is_monotonic(a in 0usize..40, b in 0usize..40) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(IntensityTier::from_count(lo) <= IntensityTier::from_count(hi));
        }

        #[test]
        fn tier_steps_by_at_most_one(count in 0usize..40) {
            let here = IntensityTier::from_count(count).level();
            let next = IntensityTier::from_count(count + 1).level();
            prop_assert!(next == here || next == here + 1);
        }

        #[test]
        fn progress_stays_in_range(count in 0usize..100, goal in 1u32..50) {
            let pct = progress_percent(count, goal);
            prop_assert!((0.0..=100.0).contains(&pct));
        }
    }

    #[test]
    fn progress_values() {
        assert_eq!(progress_percent(0, 15), 0.0);
        assert_eq!(progress_percent(15, 15), 100.0);
        assert_eq!(progress_percent(20, 15), 100.0);
        assert!((progress_percent(1, 15) - 6.666_666).abs() < 1e-3);
    }

    #[test]
    fn empty_day_shows_placeholder() {
        let v = view(0);
        assert_eq!(v.count, 0);
        assert_eq!(v.records, RecordList::Empty);
        assert_eq!(v.message, MessageTable::DEFAULT.start_prompt());
        assert!(!v.goal_reached);
    }

    #[test]
    fn rows_keep_store_order() {
        let v = view(3);
        match v.records {
            RecordList::Entries(rows) => {
                let indices: Vec<_> = rows.iter().map(|r| r.sequence_index).collect();
                assert_eq!(indices, vec![3, 2, 1]);
            }
            RecordList::Empty => panic!("expected rows"),
        }
    }

    #[test]
    fn goal_reached_from_fifteen() {
        assert!(!view(14).goal_reached);
        assert!(view(15).goal_reached);
        assert!(view(20).goal_reached);
    }

    #[test]
    fn twenty_shows_completion() {
        assert_eq!(view(20).message, MessageTable::DEFAULT.completion());
    }

    #[test]
    fn view_serializes_placeholder_tag() {
        let json = serde_json::to_value(view(0)).unwrap();
        assert_eq!(json["records"]["kind"], "empty");
        assert_eq!(json["intensity"], "calm");
        assert_eq!(json["date"], "2026-10-19");
    }
}
