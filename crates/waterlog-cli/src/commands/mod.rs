pub mod checkin;
pub mod config;
pub mod history;

use waterlog_core::{CheckInController, Config, Database, RecordStore};

/// Open the on-disk database and build a controller from the stored config.
pub fn open_controller(config: &Config) -> Result<CheckInController<Database>, Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let store = RecordStore::from_config(db, config);
    Ok(CheckInController::new(store, config.tracker_settings()))
}
