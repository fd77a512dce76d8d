//! Session store over an injected slot backend

use crate::clock::Clock;
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::export::to_pretty_json;
use crate::streak::calculate_streak;
use crate::types::{AnalyticsAggregate, Session, SessionId, UserStats};
use pulse_core::{Mode, SessionDraft};
use pulse_storage::StorageBackend;

/// Question asked before wiping all data
pub const CLEAR_PROMPT: &str = "This will delete all your sessions. Are you sure?";

/// Collaborator that asks the user to confirm a destructive action
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Persists finalized sessions and keeps running analytics.
///
/// Every read goes back to the backend; the store holds no cached copy.
/// Unreadable or corrupt slots are treated as empty.
pub struct SessionStore<B, C> {
    backend: B,
    clock: C,
    config: StoreConfig,
}

impl<B: StorageBackend, C: Clock> SessionStore<B, C> {
    pub fn new(backend: B, clock: C) -> Self {
        Self::with_config(backend, clock, StoreConfig::default())
    }

    pub fn with_config(backend: B, clock: C, config: StoreConfig) -> Self {
        Self {
            backend,
            clock,
            config,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Finalize a draft, append it and update analytics. Returns the new id.
    ///
    /// The sessions slot is written before the analytics slot. If the second
    /// write fails the session is already stored, so retrying would save it
    /// twice; `rebuild_analytics` repairs the aggregate instead.
    ///
    /// When the stored sessions had to be recovered, or the aggregate is
    /// missing or unreadable, the aggregate is rebuilt from the surviving
    /// sessions before counting the new one.
    pub fn save_session(&mut self, draft: SessionDraft) -> Result<SessionId, StoreError> {
        let (mut sessions, recovered) = self.load_sessions();
        let now = self.clock.now();

        // ids follow the clock in milliseconds but never repeat or go backward
        let next_id = match sessions.iter().map(|s| s.id).max() {
            Some(last) => last.checked_add(1).ok_or(StoreError::IdsExhausted(last))?,
            None => 0,
        };
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = millis.max(next_id);

        let mut analytics = match self.load_analytics() {
            Some(analytics) if !recovered => analytics,
            _ => AnalyticsAggregate::rebuild(&sessions),
        };

        let mode = draft.mode;
        sessions.push(Session::finalize(draft, id, now));
        let bytes = serde_json::to_vec(&sessions)?;
        self.backend.write(&self.config.sessions_key, &bytes)?;

        analytics.record(mode, now);
        self.write_analytics(&analytics)?;

        tracing::debug!(id, mode = %mode, total = sessions.len(), "session saved");
        Ok(id)
    }

    pub fn all_sessions(&self) -> Vec<Session> {
        self.load_sessions().0
    }

    /// Stored sessions, plus whether anything had to be dropped to read them
    fn load_sessions(&self) -> (Vec<Session>, bool) {
        let Some(bytes) = self.read_slot(&self.config.sessions_key) else {
            return (Vec::new(), false);
        };

        let records: Vec<serde_json::Value> = match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(slot = %self.config.sessions_key, error = %e, "corrupt sessions slot, treating as empty");
                return (Vec::new(), true);
            }
        };

        let total = records.len();
        let sessions: Vec<Session> = records
            .into_iter()
            .filter_map(|record| match serde_json::from_value(record) {
                Ok(session) => Some(session),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed session record");
                    None
                }
            })
            .collect();
        let recovered = sessions.len() != total;
        (sessions, recovered)
    }

    pub fn sessions_by_mode(&self, mode: Mode) -> Vec<Session> {
        self.all_sessions()
            .into_iter()
            .filter(|s| s.mode == mode)
            .collect()
    }

    pub fn session(&self, id: SessionId) -> Option<Session> {
        self.all_sessions().into_iter().find(|s| s.id == id)
    }

    /// Persisted aggregate, or the empty aggregate if missing or corrupt
    pub fn analytics(&self) -> AnalyticsAggregate {
        self.load_analytics().unwrap_or_default()
    }

    fn load_analytics(&self) -> Option<AnalyticsAggregate> {
        let bytes = self.read_slot(&self.config.analytics_key)?;
        match serde_json::from_slice(&bytes) {
            Ok(analytics) => Some(analytics),
            Err(e) => {
                tracing::warn!(slot = %self.config.analytics_key, error = %e, "corrupt analytics slot, treating as empty");
                None
            }
        }
    }

    pub fn user_stats(&self) -> UserStats {
        let sessions = self.all_sessions();
        let analytics = self.analytics();

        UserStats {
            total_sessions: sessions.len(),
            mode_breakdown: analytics.mode_breakdown,
            last_session: sessions.last().map(|s| s.timestamp),
            streak: calculate_streak(&sessions, self.config.utc_offset),
        }
    }

    /// Recompute analytics from the session list and persist the result
    pub fn rebuild_analytics(&mut self) -> Result<AnalyticsAggregate, StoreError> {
        let analytics = AnalyticsAggregate::rebuild(&self.all_sessions());
        self.write_analytics(&analytics)?;
        tracing::debug!(total = analytics.total_sessions, "analytics rebuilt");
        Ok(analytics)
    }

    /// Pretty JSON of the given sessions, or of every stored session
    pub fn export_as_json(&self, sessions: Option<&[Session]>) -> Result<Vec<u8>, StoreError> {
        match sessions {
            Some(sessions) => to_pretty_json(sessions),
            None => to_pretty_json(&self.all_sessions()),
        }
    }

    /// Delete sessions and analytics once the user confirms. Returns whether anything was cleared.
    pub fn clear_all_data(&mut self, confirm: &impl Confirm) -> Result<bool, StoreError> {
        if !confirm.confirm(CLEAR_PROMPT) {
            return Ok(false);
        }

        self.backend.remove(&self.config.sessions_key)?;
        self.backend.remove(&self.config.analytics_key)?;
        tracing::debug!("all session data cleared");
        Ok(true)
    }

    fn write_analytics(&mut self, analytics: &AnalyticsAggregate) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(analytics)?;
        self.backend.write(&self.config.analytics_key, &bytes)?;
        Ok(())
    }

    fn read_slot(&self, key: &str) -> Option<Vec<u8>> {
        match self.backend.read(key) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(slot = key, error = %e, "failed to read slot, treating as empty");
                None
            }
        }
    }
}
