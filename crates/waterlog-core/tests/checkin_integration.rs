//! Integration tests for the check-in flow over SQLite storage.

use chrono::{DateTime, Duration, TimeZone, Utc};
use waterlog_core::{
    CheckInController, Config, Database, DayBoundary, Event, IntensityTier, KeyValueStore,
    MessageTable, RecordList, RecordStore, TrackerSettings,
};

fn morning() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 7, 30, 0).unwrap()
}

fn controller(db: &Database) -> CheckInController<&Database> {
    let store = RecordStore::from_config(db, &Config::default());
    CheckInController::new(store, Config::default().tracker_settings())
}

#[test]
fn full_day_walkthrough() {
    let db = Database::open_memory().unwrap();
    let mut c = controller(&db);

    let start = c.initialize_at(morning());
    assert_eq!(start.count, 0);
    assert_eq!(start.records, RecordList::Empty);
    assert_eq!(start.intensity, IntensityTier::Calm);

    let mut tiers = Vec::new();
    for i in 0..20 {
        let at = morning() + Duration::minutes(30 * i);
        let event = c.handle_check_in(at);
        let view = event.view().expect("accepted").clone();
        assert_eq!(view.count, (i + 1) as usize);
        tiers.push(view.intensity.level());
    }
    assert!(tiers.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*tiers.last().unwrap(), 4);

    let full = c.initialize_at(morning());
    assert_eq!(full.count, 20);
    assert!(full.goal_reached);
    assert_eq!(full.progress_percent, 100.0);
    assert_eq!(full.message, MessageTable::DEFAULT.completion());

    let overflow = c.handle_check_in(morning() + Duration::hours(12));
    let view = overflow.view().unwrap();
    assert!(view.reset);
    assert_eq!(view.count, 0);
    assert_ne!(view.message, MessageTable::DEFAULT.completion());
}

#[test]
fn click_and_touch_for_one_tap_register_once() {
    let db = Database::open_memory().unwrap();
    let mut c = controller(&db);

    let click = c.handle_check_in(morning());
    let touch = c.handle_check_in(morning() + Duration::milliseconds(40));
    assert!(matches!(click, Event::CheckedIn { .. }));
    assert!(matches!(touch, Event::Debounced { elapsed_ms: 40, .. }));
    assert_eq!(c.initialize_at(morning()).count, 1);
}

#[test]
fn reads_layout_written_by_earlier_clients() {
    let db = Database::open_memory().unwrap();
    db.kv_set(
        "drink_records",
        r#"{"2026-10-19":[{"time":1760859000000,"formatted":"15:30:00","index":2},{"time":1760855400000,"formatted":"14:30:00","index":1}]}"#,
    )
    .unwrap();

    let c = controller(&db);
    let view = c.initialize_at(morning());
    assert_eq!(view.count, 2);
    match &view.records {
        RecordList::Entries(rows) => {
            assert_eq!(rows[0].formatted_time, "15:30:00");
            assert_eq!(rows[0].sequence_index, 2);
        }
        RecordList::Empty => panic!("expected rows"),
    }
}

#[test]
fn state_survives_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("waterlog.db");
    {
        let db = Database::open_at(&path).unwrap();
        let mut c = controller(&db);
        c.handle_check_in(morning());
        c.handle_check_in(morning() + Duration::seconds(5));
    }

    let db = Database::open_at(&path).unwrap();
    let c = controller(&db);
    assert_eq!(c.initialize_at(morning()).count, 2);
}

#[test]
fn injected_storage_key_isolates_trackers() {
    let db = Database::open_memory().unwrap();
    let settings = TrackerSettings::default();
    let mut work = CheckInController::new(RecordStore::new(&db, "work", DayBoundary::Utc), settings);
    let home = CheckInController::new(RecordStore::new(&db, "home", DayBoundary::Utc), settings);

    work.handle_check_in(morning());
    assert_eq!(work.initialize_at(morning()).count, 1);
    assert_eq!(home.initialize_at(morning()).count, 0);
}

#[test]
fn corrupt_storage_never_breaks_the_flow() {
    let db = Database::open_memory().unwrap();
    db.kv_set("drink_records", "{garbage").unwrap();

    let mut c = controller(&db);
    assert_eq!(c.initialize_at(morning()).count, 0);
    let view = c.handle_check_in(morning()).view().cloned().unwrap();
    assert_eq!(view.count, 1);
    assert_eq!(c.initialize_at(morning()).count, 1);
}
