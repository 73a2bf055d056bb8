mod model;
mod store;

pub use model::{format_time, CheckInRecord, DailyRecordSet, DayBoundary, DayKey};
pub use store::RecordStore;
