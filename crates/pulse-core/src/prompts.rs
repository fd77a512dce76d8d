//! Prompt cards shown for each mode

use crate::types::{Bucket, Mode};

/// A titled prompt whose answers fill one bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptCard {
    pub title: &'static str,
    pub prompt: &'static str,
    pub bucket: Bucket,
}

const BRAINSTORM: [PromptCard; 2] = [
    PromptCard {
        title: "Rapid Fire Ideas",
        prompt: "Write 3-5 quick ideas WITHOUT overthinking:",
        bucket: Bucket::Ideas,
    },
    PromptCard {
        title: "What if Scenarios",
        prompt: "Explore \"what if\" possibilities:",
        bucket: Bucket::Scenarios,
    },
];

const ORGANIZE: [PromptCard; 2] = [
    PromptCard {
        title: "Priority Matrix",
        prompt: "What are your 3 most important next steps?",
        bucket: Bucket::Priorities,
    },
    PromptCard {
        title: "Timeline",
        prompt: "When do you want to complete each? (Week 1, End of month, etc)",
        bucket: Bucket::Timeline,
    },
];

const INSPIRE: [PromptCard; 2] = [
    PromptCard {
        title: "Reference Hunt",
        prompt: "What existing projects/trends inspire you?",
        bucket: Bucket::References,
    },
    PromptCard {
        title: "Remix Ideas",
        prompt: "How can you combine different ideas?",
        bucket: Bucket::Twists,
    },
];

const EXPERIMENT: [PromptCard; 2] = [
    PromptCard {
        title: "Quick Test",
        prompt: "What is the fastest way to test your idea?",
        bucket: Bucket::Test,
    },
    PromptCard {
        title: "Success Metrics",
        prompt: "How will you know if it works?",
        bucket: Bucket::Metrics,
    },
];

pub fn prompts_for(mode: Mode) -> &'static [PromptCard] {
    match mode {
        Mode::Brainstorm => &BRAINSTORM,
        Mode::Organize => &ORGANIZE,
        Mode::Inspire => &INSPIRE,
        Mode::Experiment => &EXPERIMENT,
    }
}

/// Heading shown while a session of this mode is open
pub fn mode_title(mode: Mode) -> &'static str {
    match mode {
        Mode::Brainstorm => "💡 Brainstorm",
        Mode::Organize => "📋 Organize",
        Mode::Inspire => "🌟 Inspire",
        Mode::Experiment => "🧪 Experiment",
    }
}
