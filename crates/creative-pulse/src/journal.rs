//! Session lifecycle: draft, analyze, persist, export

use anyhow::Context;
use chrono::NaiveDate;
use pulse_core::{analyze, FeedbackReport, Mode, SessionDraft};
use pulse_storage::{atomic_write, FileBackend, Paths, StorageBackend};
use pulse_store::{
    export_filename, report_to_json, Clock, Confirm, ExportKind, Session, SessionId, SessionStore,
    SystemClock, UserStats,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A session that has been analyzed and saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finalized {
    pub id: SessionId,
    pub report: FeedbackReport,
}

/// Drives the analyzer and the store; neither knows about the other
pub struct Journal<B, C> {
    store: SessionStore<B, C>,
}

impl Journal<FileBackend, SystemClock> {
    /// File-backed journal rooted at `paths`
    pub fn open(paths: Paths) -> Self {
        Self::new(SessionStore::new(FileBackend::new(paths), SystemClock))
    }

    /// File-backed journal in the platform data directory
    pub fn open_default() -> anyhow::Result<Self> {
        let paths = Paths::new().context("resolving journal data directory")?;
        Ok(Self::open(paths))
    }
}

impl<C: Clock> Journal<FileBackend, C> {
    /// Default target for `export_feedback` and `export_sessions`
    pub fn exports_dir(&self) -> PathBuf {
        self.store.backend().paths().exports_dir()
    }
}

impl<B: StorageBackend, C: Clock> Journal<B, C> {
    pub fn new(store: SessionStore<B, C>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SessionStore<B, C> {
        &self.store
    }

    pub fn start(&self, mode: Mode) -> SessionDraft {
        SessionDraft::new(mode)
    }

    /// Analyze the draft, then persist it
    pub fn finalize(&mut self, draft: SessionDraft) -> anyhow::Result<Finalized> {
        let report = analyze(draft.mode, &draft.data);
        let id = self
            .store
            .save_session(draft)
            .context("saving finalized session")?;
        tracing::debug!(id, mode = %report.kind, "session finalized");
        Ok(Finalized { id, report })
    }

    pub fn stats(&self) -> UserStats {
        self.store.user_stats()
    }

    /// Saved sessions, optionally restricted to one mode
    pub fn history(&self, mode: Option<Mode>) -> Vec<Session> {
        match mode {
            Some(mode) => self.store.sessions_by_mode(mode),
            None => self.store.all_sessions(),
        }
    }

    pub fn clear(&mut self, confirm: &impl Confirm) -> anyhow::Result<bool> {
        Ok(self.store.clear_all_data(confirm)?)
    }

    /// Write a report as `feedback-<date>.json` into `dir`
    pub fn export_feedback(&self, report: &FeedbackReport, dir: &Path) -> anyhow::Result<PathBuf> {
        let path = dir.join(export_filename(ExportKind::Feedback, self.today()));
        let bytes = report_to_json(report)?;
        atomic_write(&path, &bytes)
            .with_context(|| format!("writing feedback export {}", path.display()))?;
        tracing::debug!(path = %path.display(), "feedback exported");
        Ok(path)
    }

    /// Write every saved session as `sessions-<date>.json` into `dir`
    pub fn export_sessions(&self, dir: &Path) -> anyhow::Result<PathBuf> {
        let path = dir.join(export_filename(ExportKind::Sessions, self.today()));
        let bytes = self.store.export_as_json(None)?;
        atomic_write(&path, &bytes)
            .with_context(|| format!("writing sessions export {}", path.display()))?;
        tracing::debug!(path = %path.display(), "sessions exported");
        Ok(path)
    }

    fn today(&self) -> NaiveDate {
        self.store
            .clock()
            .now()
            .with_timezone(&self.store.config().utc_offset)
            .date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pulse_core::Bucket;
    use pulse_storage::MemoryBackend;
    use pulse_store::ManualClock;

    fn journal() -> Journal<MemoryBackend, ManualClock> {
        let start = Utc.with_ymd_and_hms(2025, 2, 14, 18, 0, 0).unwrap();
        Journal::new(SessionStore::new(MemoryBackend::new(), ManualClock::new(start)))
    }

    #[test]
    fn test_finalize_returns_report_and_id() {
        let mut journal = journal();
        let mut draft = journal.start(Mode::Organize);
        draft.add_item(Bucket::Priorities, "Launch newsletter");

        let finalized = journal.finalize(draft).unwrap();
        assert_eq!(finalized.report.kind, Mode::Organize);
        assert_eq!(journal.history(None).len(), 1);
        assert_eq!(journal.history(Some(Mode::Organize))[0].id, finalized.id);
        assert!(journal.history(Some(Mode::Inspire)).is_empty());
    }

    #[test]
    fn test_today_uses_clock() {
        let journal = journal();
        assert_eq!(journal.today(), NaiveDate::from_ymd_opt(2025, 2, 14).unwrap());
    }
}
