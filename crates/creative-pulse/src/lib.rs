//! Creative Pulse: guided creative sessions with templated feedback and local history

mod journal;

pub use journal::{Finalized, Journal};
pub use pulse_core::{
    analyze, extract_themes, generate_feedback, mode_title, prompts_for, Bucket, FeedbackOutcome,
    FeedbackReport, Insight, Mode, PromptCard, SessionData, SessionDraft,
};
pub use pulse_storage::{FileBackend, MemoryBackend, Paths, StorageBackend};
pub use pulse_store::{
    calculate_streak, AnalyticsAggregate, Clock, Confirm, ManualClock, Session, SessionId,
    SessionStore, StoreConfig, SystemClock, UserStats,
};
