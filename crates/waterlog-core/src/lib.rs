//! # Waterlog Core Library
//!
//! This library provides the core logic for Waterlog, a daily hydration
//! check-in tracker. Every operation is available to any UI adapter through
//! plain data: the controller never touches presentation objects, it returns
//! view models for the adapter to render. The bundled `waterlog` CLI is one
//! such adapter.
//!
//! ## Architecture
//!
//! - **Record Store**: per-day check-in lists persisted as one JSON document
//!   under a single storage key
//! - **Check-in Controller**: debounce, overflow reset, and derived views
//! - **Storage**: SQLite key-value store and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`CheckInController`]: the only state-transition logic
//! - [`RecordStore`]: load/save of [`DailyRecordSet`] entries
//! - [`DailyView`]: everything a UI needs to draw today's state
//! - [`Config`]: application configuration management

pub mod controller;
pub mod error;
pub mod events;
pub mod messages;
pub mod record;
pub mod storage;
pub mod view;

pub use controller::{CheckInController, TrackerSettings};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use messages::MessageTable;
pub use record::{CheckInRecord, DailyRecordSet, DayBoundary, DayKey, RecordStore};
pub use storage::{Config, Database, KeyValueStore, MemoryStore};
pub use view::{DailyView, IntensityTier, RecordList, RecordRow};
