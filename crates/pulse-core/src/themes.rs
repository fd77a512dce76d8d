//! Recurring-word theme extraction

use crate::thresholds::{THEME_LIMIT, THEME_MIN_FREQUENCY, THEME_MIN_TOKEN_CHARS};
use std::collections::HashMap;

/// Extract up to three recurring words from free-text entries.
///
/// Words are lowercased and split on whitespace; only words longer than three
/// characters that occur more than once qualify. Results are ordered by
/// descending frequency, ties keeping the order in which words first appeared.
pub fn extract_themes<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let joined = items
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
        .to_lowercase();

    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for word in joined
        .split_whitespace()
        .filter(|w| w.chars().count() > THEME_MIN_TOKEN_CHARS)
    {
        match index.get(word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }

    counts.retain(|&(_, c)| c > THEME_MIN_FREQUENCY);
    // stable: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(THEME_LIMIT)
        .map(|(w, _)| w.to_string())
        .collect()
}
