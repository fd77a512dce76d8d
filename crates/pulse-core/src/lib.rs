//! Core journaling types and the per-mode feedback analyzer

mod draft;
mod feedback;
mod prompts;
mod themes;
pub mod thresholds;
mod types;

pub use draft::SessionDraft;
pub use feedback::{analyze, generate_feedback, INVALID_MODE};
pub use prompts::{mode_title, prompts_for, PromptCard};
pub use themes::extract_themes;
pub use types::{Bucket, FeedbackOutcome, FeedbackReport, Insight, Mode, ModeError, SessionData};
