//! In-progress session before it is finalized

use crate::types::{Bucket, Mode, SessionData};
use serde::{Deserialize, Serialize};

/// Session under construction: entries can be added and removed freely
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDraft {
    pub mode: Mode,
    #[serde(default)]
    pub data: SessionData,
}

impl SessionDraft {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            data: SessionData::new(),
        }
    }

    pub fn with_data(mode: Mode, data: SessionData) -> Self {
        Self { mode, data }
    }

    /// Add a trimmed entry; blank input is ignored. Returns whether it was added.
    pub fn add_item(&mut self, bucket: Bucket, text: &str) -> bool {
        let value = text.trim();
        if value.is_empty() {
            return false;
        }
        self.data.push(bucket, value.to_string());
        true
    }

    pub fn remove_item(&mut self, bucket: Bucket, index: usize) -> Option<String> {
        self.data.remove(bucket, index)
    }

    pub fn items(&self, bucket: Bucket) -> &[String] {
        self.data.items(bucket)
    }
}
