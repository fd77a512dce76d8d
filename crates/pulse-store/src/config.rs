//! Configuration for the session store

use chrono::{FixedOffset, Offset, Utc};

pub const DEFAULT_SESSIONS_KEY: &str = "creative_pulse_sessions";
pub const DEFAULT_ANALYTICS_KEY: &str = "creative_pulse_analytics";

/// Store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Slot holding the JSON array of sessions
    pub sessions_key: String,

    /// Slot holding the JSON analytics aggregate
    pub analytics_key: String,

    /// Offset whose midnight separates calendar days for streaks
    pub utc_offset: FixedOffset,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self {
            sessions_key: DEFAULT_SESSIONS_KEY.to_string(),
            analytics_key: DEFAULT_ANALYTICS_KEY.to_string(),
            utc_offset: Utc.fix(),
        }
    }

    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = offset;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}
