use chrono::{DateTime, Utc};
use waterlog_core::{Config, Event, KeyValueStore};

use super::open_controller;
use crate::render;

fn marker_key(config: &Config) -> String {
    format!("{}.last_check_in", config.storage.key)
}

/// Last accepted check-in from a previous run.
///
/// A marker later than `now` means the clock moved backwards since it was
/// written; it is dropped so it cannot hold the debounce window open.
fn load_marker(backend: &impl KeyValueStore, key: &str, now: DateTime<Utc>) -> Option<i64> {
    let ms = backend
        .kv_get(key)
        .ok()
        .flatten()
        .and_then(|v| v.parse::<i64>().ok())?;
    if ms > now.timestamp_millis() {
        tracing::warn!(marker_ms = ms, "ignoring debounce marker from the future");
        return None;
    }
    Some(ms)
}

pub fn drink(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let controller = open_controller(&config)?;
    let marker = marker_key(&config);
    let now = Utc::now();

    // Each invocation is a fresh process, so the debounce window lives in the store.
    let last = load_marker(controller.store().backend(), &marker, now);
    let mut controller = controller.with_last_accepted(last);

    let event = controller.handle_check_in(now);
    if let (Event::CheckedIn { .. }, Some(ms)) = (&event, controller.last_accepted_ms()) {
        if let Err(e) = controller.store().backend().kv_set(&marker, &ms.to_string()) {
            tracing::warn!(error = %e, "could not persist debounce marker");
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&event)?);
    } else {
        print!("{}", render::event(&event));
    }
    Ok(())
}

pub fn status(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let controller = open_controller(&config)?;
    let view = controller.initialize();

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render::view(&view));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use waterlog_core::MemoryStore;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn marker_in_the_past_is_kept() {
        let store = MemoryStore::new();
        let earlier = (noon() - Duration::seconds(1)).timestamp_millis();
        store.kv_set("k", &earlier.to_string()).unwrap();
        assert_eq!(load_marker(&store, "k", noon()), Some(earlier));
    }

    #[test]
    fn marker_in_the_future_is_dropped() {
        let store = MemoryStore::new();
        let later = (noon() + Duration::hours(6)).timestamp_millis();
        store.kv_set("k", &later.to_string()).unwrap();
        assert_eq!(load_marker(&store, "k", noon()), None);
    }

    #[test]
    fn missing_or_garbled_marker_is_none() {
        let store = MemoryStore::new();
        assert_eq!(load_marker(&store, "k", noon()), None);
        store.kv_set("k", "yesterday").unwrap();
        assert_eq!(load_marker(&store, "k", noon()), None);
    }
}
