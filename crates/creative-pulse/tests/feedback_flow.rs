mod common;

use chrono::Duration;
use creative_pulse::{
    generate_feedback, mode_title, prompts_for, Bucket, FeedbackOutcome, Mode, SessionData,
};

#[test]
fn test_invalid_mode_is_structured() {
    let outcome = generate_feedback("bogus", &SessionData::new());
    assert!(outcome.is_error());
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        serde_json::json!({ "error": "Invalid mode" })
    );
}

#[test]
fn test_report_json_shape() {
    let outcome = generate_feedback("brainstorm", &common::sample_draft(Mode::Brainstorm).data);
    let FeedbackOutcome::Report(report) = &outcome else {
        panic!("expected a report");
    };
    assert!(report.insights[0].content.contains("city"));
    assert!(report.insights[0].content.contains("birds"));

    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["type"], "brainstorm");
    assert_eq!(value["title"], "💡 Brainstorm Analysis");
    assert_eq!(value["nextSteps"].as_array().unwrap().len(), 3);
    assert!(value.get("error").is_none());
}

#[test]
fn test_draft_built_from_prompts() {
    let (mut journal, _clock) = common::memory_journal(common::morning(1));
    let mut draft = journal.start(Mode::Inspire);
    assert_eq!(mode_title(draft.mode), "🌟 Inspire");

    for card in prompts_for(draft.mode) {
        draft.add_item(card.bucket, &format!("answer to {}", card.title));
    }
    draft.add_item(Bucket::Twists, "  ");
    draft.remove_item(Bucket::References, 0);

    let finalized = journal.finalize(draft).unwrap();
    assert!(finalized
        .report
        .summary
        .starts_with("0 references + 1 variations explored."));
}

#[test]
fn test_streak_across_a_week() {
    let (mut journal, clock) = common::memory_journal(common::morning(1));

    // days 1, 2, 2, 3, then a gap to 6, then 7
    journal.finalize(common::sample_draft(Mode::Brainstorm)).unwrap();
    for hours in [24, 5, 20] {
        clock.advance(Duration::hours(hours));
        journal.finalize(common::sample_draft(Mode::Organize)).unwrap();
    }
    assert_eq!(journal.stats().streak, 4);

    clock.set(common::morning(6));
    journal.finalize(common::sample_draft(Mode::Inspire)).unwrap();
    assert_eq!(journal.stats().streak, 1);

    clock.advance(Duration::days(1));
    journal.finalize(common::sample_draft(Mode::Experiment)).unwrap();

    let stats = journal.stats();
    assert_eq!(stats.streak, 2);
    assert_eq!(stats.total_sessions, 6);
    assert_eq!(stats.last_session, Some(common::morning(7)));
}
