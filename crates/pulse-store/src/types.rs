//! Persisted session records and analytics

use chrono::{DateTime, Utc};
use pulse_core::{Mode, SessionData, SessionDraft};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type SessionId = u64;

/// A finalized session; never mutated once persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub mode: Mode,
    #[serde(default)]
    pub data: SessionData,
    pub timestamp: DateTime<Utc>,
}

impl Session {
    pub fn finalize(draft: SessionDraft, id: SessionId, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            mode: draft.mode,
            data: draft.data,
            timestamp,
        }
    }
}

/// Running counts kept alongside the session list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsAggregate {
    pub total_sessions: u64,
    pub mode_breakdown: BTreeMap<String, u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_session_date: Option<DateTime<Utc>>,
}

impl AnalyticsAggregate {
    /// Count one more finalized session
    pub fn record(&mut self, mode: Mode, at: DateTime<Utc>) {
        self.total_sessions += 1;
        *self
            .mode_breakdown
            .entry(mode.as_str().to_string())
            .or_insert(0) += 1;
        self.last_session_date = Some(at);
    }

    /// Recompute the aggregate from the full session list
    pub fn rebuild(sessions: &[Session]) -> Self {
        let mut aggregate = Self::default();
        for session in sessions {
            aggregate.record(session.mode, session.timestamp);
        }
        aggregate
    }

    pub fn count_for(&self, mode: Mode) -> u64 {
        self.mode_breakdown.get(mode.as_str()).copied().unwrap_or(0)
    }
}

/// Summary shown on the history screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_sessions: usize,
    pub mode_breakdown: BTreeMap<String, u64>,
    pub last_session: Option<DateTime<Utc>>,
    pub streak: u32,
}
