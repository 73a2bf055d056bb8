use serde::Serialize;
use waterlog_core::{Config, Database, RecordStore};

#[derive(Debug, Serialize)]
struct DaySummary {
    date: String,
    count: usize,
    /// Time of the newest check-in that day.
    last: Option<String>,
}

pub fn run(days: usize, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = RecordStore::from_config(Database::open()?, &config);

    let summaries: Vec<DaySummary> = store
        .load_all()
        .iter_recent()
        .take(days)
        .map(|(date, records)| DaySummary {
            date: date.to_string(),
            count: records.len(),
            last: records.first().map(|r| r.formatted_time.clone()),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No check-ins recorded yet");
        return Ok(());
    }
    for day in &summaries {
        match &day.last {
            Some(last) => println!("{}  {:>2} cups  (last at {last})", day.date, day.count),
            None => println!("{}  {:>2} cups", day.date, day.count),
        }
    }
    Ok(())
}
