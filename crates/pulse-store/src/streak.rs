//! Consecutive-day streak over the session history

use crate::types::Session;
use chrono::FixedOffset;

/// Count the run of consecutive calendar days ending at the newest session.
///
/// Sessions are taken in insertion order. Walking backward from the last one,
/// each earlier session on the same or the previous calendar day extends the
/// streak; the first larger gap ends it.
pub fn calculate_streak(sessions: &[Session], offset: FixedOffset) -> u32 {
    if sessions.is_empty() {
        return 0;
    }

    let day = |s: &Session| s.timestamp.with_timezone(&offset).date_naive();

    let mut streak = 1;
    for pair in sessions.windows(2).rev() {
        let previous = day(&pair[0]);
        let current = day(&pair[1]);
        if current.signed_duration_since(previous).num_days() <= 1 {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}
