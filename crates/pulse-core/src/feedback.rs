//! Per-mode feedback heuristics

use crate::themes::extract_themes;
use crate::thresholds::*;
use crate::types::{Bucket, FeedbackOutcome, FeedbackReport, Insight, Mode, SessionData};

/// Error text returned for an unrecognized mode string
pub const INVALID_MODE: &str = "Invalid mode";

/// Analyze a session whose mode arrives as an untyped string.
///
/// Unknown modes produce `FeedbackOutcome::Error` so callers can render a
/// fallback instead of failing.
pub fn generate_feedback(mode: &str, data: &SessionData) -> FeedbackOutcome {
    match mode.parse::<Mode>() {
        Ok(mode) => FeedbackOutcome::Report(analyze(mode, data)),
        Err(_) => FeedbackOutcome::Error {
            error: INVALID_MODE.to_string(),
        },
    }
}

/// Build the feedback report for a session of a known mode
pub fn analyze(mode: Mode, data: &SessionData) -> FeedbackReport {
    match mode {
        Mode::Brainstorm => analyze_brainstorm(data),
        Mode::Organize => analyze_organize(data),
        Mode::Inspire => analyze_inspire(data),
        Mode::Experiment => analyze_experiment(data),
    }
}

fn steps(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn analyze_brainstorm(data: &SessionData) -> FeedbackReport {
    let ideas = data.items(Bucket::Ideas);
    let scenarios = data.items(Bucket::Scenarios);
    let combined: Vec<&String> = ideas.iter().chain(scenarios).collect();
    let themes = extract_themes(&combined);

    let tier = if ideas.len() < BRAINSTORM_STARTING {
        "You're building momentum! Keep adding more ideas."
    } else if ideas.len() < BRAINSTORM_GOOD_START {
        "Good start! 5+ ideas help spot patterns."
    } else if ideas.len() < BRAINSTORM_EXCELLENT {
        "Excellent volume across multiple angles!"
    } else {
        "Outstanding! You're finding surprising combinations."
    };

    let themes_content = if themes.is_empty() {
        "Great breadth! Spot unexpected connections.".to_string()
    } else {
        format!("Themes: {}. Look for how to merge these.", themes.join(", "))
    };

    let volume_content = if ideas.len() < BRAINSTORM_STARTING {
        "Aim for 3-5 ideas"
    } else {
        "Now identify your top 3 strongest ideas"
    };

    FeedbackReport {
        kind: Mode::Brainstorm,
        title: "💡 Brainstorm Analysis".to_string(),
        summary: format!(
            "You generated {} ideas and {} scenarios. {}",
            ideas.len(),
            scenarios.len(),
            tier
        ),
        insights: vec![
            Insight::new("💫 Your Idea Themes", themes_content, "🎯"),
            Insight::new("⚡ Volume Check", volume_content, "✓"),
        ],
        next_steps: steps(&[
            "Combine your top 2-3 themes into 1 concept",
            "Ask: \"What if I merged the best of each?\"",
            "Test your strongest idea with someone",
        ]),
    }
}

fn analyze_organize(data: &SessionData) -> FeedbackReport {
    let priorities = data.items(Bucket::Priorities).len();
    let timeline = data.items(Bucket::Timeline).len();
    let is_focused = priorities <= ORGANIZE_FOCUSED_MAX;

    let tier = if priorities == 0 {
        "Ready to add your first priority?".to_string()
    } else if priorities < ORGANIZE_NARROW {
        format!("{} priority is focused!", priorities)
    } else if priorities <= ORGANIZE_FOCUSED_MAX {
        format!("{} priorities is the sweet spot!", priorities)
    } else {
        format!("{} priorities - consider narrowing to top 3-5.", priorities)
    };

    let health = if is_focused {
        "Perfect! This is manageable."
    } else {
        "Tip: Focus multiplies impact. Try narrowing to 3."
    };

    let alignment = if timeline == 0 {
        "Add when each priority happens".to_string()
    } else {
        format!("Good coverage across {} time slots.", timeline)
    };

    let next_steps = if is_focused {
        steps(&[
            "Assign 1 owner per priority",
            "Weekly check-ins",
            "Track progress",
        ])
    } else {
        steps(&[
            "Pick your top 3",
            "Consolidate similar items",
            "Re-time to 3-5 slots",
        ])
    };

    FeedbackReport {
        kind: Mode::Organize,
        title: "📋 Organization Assessment".to_string(),
        summary: format!(
            "{} priorities across {} time slots. {}",
            priorities, timeline, tier
        ),
        insights: vec![
            Insight::new("🎯 Priority Health", health, "⏱️"),
            Insight::new("📅 Timeline Alignment", alignment, "📆"),
        ],
        next_steps,
    }
}

fn analyze_inspire(data: &SessionData) -> FeedbackReport {
    let references = data.items(Bucket::References).len();
    let twists = data.items(Bucket::Twists).len();

    let tier = if references < INSPIRE_STARTING {
        "Start collecting references!"
    } else if references < INSPIRE_FOUNDATION {
        "Good foundation! Keep finding patterns."
    } else if references < INSPIRE_BREADTH {
        "Impressive research breadth!"
    } else {
        "Expert level - time to remix and synthesize."
    };

    let depth = if references < INSPIRE_RESEARCH_MIN {
        "Gather 3-5 references".to_string()
    } else {
        format!("You have {} references - look for patterns.", references)
    };

    let remix = if twists > 0 {
        format!("Great! You're exploring {} variations.", twists)
    } else {
        "Try combining 2-3 references unexpectedly.".to_string()
    };

    FeedbackReport {
        kind: Mode::Inspire,
        title: "🌟 Inspiration Audit".to_string(),
        summary: format!(
            "{} references + {} variations explored. {}",
            references, twists, tier
        ),
        insights: vec![
            Insight::new("📚 Research Depth", depth, "🔍"),
            Insight::new("✨ Remixing", remix, "⚡"),
        ],
        next_steps: steps(&[
            "Create 1 mood board from references",
            "Design 2 mashups",
            "Share for feedback",
        ]),
    }
}

fn analyze_experiment(data: &SessionData) -> FeedbackReport {
    let metrics = data.items(Bucket::Metrics);
    let is_focused = data
        .items(Bucket::Test)
        .first()
        .is_some_and(|t| t.chars().count() > EXPERIMENT_FOCUSED_CHARS);
    let has_metrics = !metrics.is_empty();

    let scope = if is_focused {
        "Perfect - narrow enough to learn fast."
    } else {
        "Make it narrower - pick ONE thing to test."
    };

    let tracking = if has_metrics {
        let echoed: Vec<&str> = metrics
            .iter()
            .take(EXPERIMENT_METRICS_ECHOED)
            .map(String::as_str)
            .collect();
        format!("You can track: {}", echoed.join(", "))
    } else {
        "Define how you'll measure success.".to_string()
    };

    FeedbackReport {
        kind: Mode::Experiment,
        title: "🧪 Experiment Validation".to_string(),
        summary: format!(
            "Scope: {} | Metrics: {}",
            if is_focused { "✓ focused" } else { "⚠️ broad" },
            if has_metrics { "✓ defined" } else { "⚠️ undefined" }
        ),
        insights: vec![
            Insight::new("🔬 Test Scope", scope, "🎯"),
            Insight::new("📊 Metrics", tracking, "✓"),
        ],
        next_steps: steps(&[
            "Set your baseline",
            "Run test for 7 days",
            "Document 3 learnings",
            "Plan next iteration",
        ]),
    }
}
