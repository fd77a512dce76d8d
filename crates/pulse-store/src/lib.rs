//! Session persistence and derived analytics

mod clock;
mod config;
mod error;
mod export;
mod store;
mod streak;
mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::StoreConfig;
pub use error::StoreError;
pub use export::{export_filename, report_to_json, ExportKind};
pub use store::{Confirm, SessionStore, CLEAR_PROMPT};
pub use streak::calculate_streak;
pub use types::{AnalyticsAggregate, Session, SessionId, UserStats};
