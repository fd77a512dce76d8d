mod common;

use creative_pulse::{FeedbackReport, Mode, Session};

#[test]
fn test_export_feedback_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let (mut journal, _clock) = common::memory_journal(common::morning(21));
    let finalized = journal.finalize(common::sample_draft(Mode::Experiment)).unwrap();

    let path = journal.export_feedback(&finalized.report, temp.path()).unwrap();
    assert_eq!(path, temp.path().join("feedback-2025-03-21.json"));

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("{\n  \"type\": \"experiment\""));
    let parsed: FeedbackReport = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, finalized.report);
}

#[test]
fn test_export_sessions_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let (mut journal, _clock) = common::memory_journal(common::morning(2));
    for mode in Mode::ALL {
        journal.finalize(common::sample_draft(mode)).unwrap();
    }

    let exports = temp.path().join("exports");
    let path = journal.export_sessions(&exports).unwrap();
    assert_eq!(path, exports.join("sessions-2025-03-02.json"));

    let sessions: Vec<Session> = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(sessions, journal.history(None));
}

#[test]
fn test_exports_land_in_data_root_exports_dir() {
    let temp = tempfile::TempDir::new().unwrap();
    let clock = creative_pulse::ManualClock::new(common::morning(9));
    let mut journal = common::file_journal(temp.path(), clock);
    let finalized = journal.finalize(common::sample_draft(Mode::Inspire)).unwrap();

    let dir = journal.exports_dir();
    assert_eq!(dir, temp.path().join("exports"));

    let feedback = journal.export_feedback(&finalized.report, &dir).unwrap();
    let sessions = journal.export_sessions(&dir).unwrap();
    assert_eq!(feedback, dir.join("feedback-2025-03-09.json"));
    assert_eq!(sessions, dir.join("sessions-2025-03-09.json"));
    assert!(!feedback.with_extension("tmp").exists());
    assert!(!sessions.with_extension("tmp").exists());
}
