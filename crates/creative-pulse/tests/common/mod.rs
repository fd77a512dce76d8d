#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use creative_pulse::{
    Bucket, FileBackend, Journal, ManualClock, MemoryBackend, Mode, Paths, SessionDraft,
    SessionStore,
};
use std::path::Path;

pub fn morning(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 9, 15, 0).unwrap()
}

pub fn memory_journal(start: DateTime<Utc>) -> (Journal<MemoryBackend, ManualClock>, ManualClock) {
    let clock = ManualClock::new(start);
    let store = SessionStore::new(MemoryBackend::new(), clock.clone());
    (Journal::new(store), clock)
}

pub fn file_journal(root: &Path, clock: ManualClock) -> Journal<FileBackend, ManualClock> {
    let backend = FileBackend::new(Paths::with_root(root));
    Journal::new(SessionStore::new(backend, clock))
}

pub fn sample_draft(mode: Mode) -> SessionDraft {
    let mut draft = SessionDraft::new(mode);
    match mode {
        Mode::Brainstorm => {
            draft.add_item(Bucket::Ideas, "Poster series about city birds");
            draft.add_item(Bucket::Ideas, "City birds sticker pack");
            draft.add_item(Bucket::Scenarios, "What if birds designed posters?");
        }
        Mode::Organize => {
            draft.add_item(Bucket::Priorities, "Finish portfolio");
            draft.add_item(Bucket::Timeline, "End of month");
        }
        Mode::Inspire => {
            draft.add_item(Bucket::References, "Swiss typography");
            draft.add_item(Bucket::Twists, "Swiss grid with hand lettering");
        }
        Mode::Experiment => {
            draft.add_item(Bucket::Test, "Post two cover variants and compare saves");
            draft.add_item(Bucket::Metrics, "saves");
        }
    }
    draft
}
