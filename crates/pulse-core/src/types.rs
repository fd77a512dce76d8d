//! Core types for creative sessions and feedback

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Creative session category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Brainstorm,
    Organize,
    Inspire,
    Experiment,
}

impl Mode {
    pub const ALL: [Mode; 4] = [
        Mode::Brainstorm,
        Mode::Organize,
        Mode::Inspire,
        Mode::Experiment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Brainstorm => "brainstorm",
            Mode::Organize => "organize",
            Mode::Inspire => "inspire",
            Mode::Experiment => "experiment",
        }
    }

    /// Input buckets filled during a session of this mode
    pub fn buckets(&self) -> [Bucket; 2] {
        match self {
            Mode::Brainstorm => [Bucket::Ideas, Bucket::Scenarios],
            Mode::Organize => [Bucket::Priorities, Bucket::Timeline],
            Mode::Inspire => [Bucket::References, Bucket::Twists],
            Mode::Experiment => [Bucket::Test, Bucket::Metrics],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModeError {
    #[error("unknown mode: {0}")]
    Unknown(String),
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ModeError::Unknown(s.to_string()))
    }
}

/// Named input collection within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Ideas,
    Scenarios,
    Priorities,
    Timeline,
    References,
    Twists,
    Test,
    Metrics,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Ideas => "ideas",
            Bucket::Scenarios => "scenarios",
            Bucket::Priorities => "priorities",
            Bucket::Timeline => "timeline",
            Bucket::References => "references",
            Bucket::Twists => "twists",
            Bucket::Test => "test",
            Bucket::Metrics => "metrics",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket name -> ordered entries. Missing buckets read as empty.
///
/// Keys are plain strings so records written with unknown buckets still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionData(BTreeMap<String, Vec<String>>);

impl SessionData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used by callers that already hold complete buckets
    pub fn with<I, S>(mut self, bucket: Bucket, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.insert(
            bucket.as_str().to_string(),
            items.into_iter().map(Into::into).collect(),
        );
        self
    }

    pub fn items(&self, bucket: Bucket) -> &[String] {
        self.items_named(bucket.as_str())
    }

    pub fn items_named(&self, name: &str) -> &[String] {
        self.0.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn push(&mut self, bucket: Bucket, item: String) {
        self.0
            .entry(bucket.as_str().to_string())
            .or_default()
            .push(item);
    }

    pub fn remove(&mut self, bucket: Bucket, index: usize) -> Option<String> {
        let items = self.0.get_mut(bucket.as_str())?;
        if index < items.len() {
            Some(items.remove(index))
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}

/// One observation in a feedback report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub content: String,
    pub icon: String,
}

impl Insight {
    pub fn new(title: &str, content: impl Into<String>, icon: &str) -> Self {
        Self {
            title: title.to_string(),
            content: content.into(),
            icon: icon.to_string(),
        }
    }
}

/// Templated feedback for a finished session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackReport {
    #[serde(rename = "type")]
    pub kind: Mode,
    pub title: String,
    pub summary: String,
    pub insights: Vec<Insight>,
    pub next_steps: Vec<String>,
}

/// Result of analyzing an untyped mode string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeedbackOutcome {
    Report(FeedbackReport),
    Error { error: String },
}

impl FeedbackOutcome {
    pub fn report(&self) -> Option<&FeedbackReport> {
        match self {
            FeedbackOutcome::Report(report) => Some(report),
            FeedbackOutcome::Error { .. } => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FeedbackOutcome::Error { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!("organize".parse::<Mode>(), Ok(Mode::Organize));
        assert_eq!(
            "bogus".parse::<Mode>(),
            Err(ModeError::Unknown("bogus".to_string()))
        );
        assert!("Brainstorm".parse::<Mode>().is_err());
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Mode::Experiment).unwrap(),
            "\"experiment\""
        );
    }

    #[test]
    fn test_missing_bucket_is_empty() {
        let data = SessionData::new().with(Bucket::Ideas, ["one"]);
        assert_eq!(data.items(Bucket::Ideas), ["one".to_string()]);
        assert!(data.items(Bucket::Scenarios).is_empty());
    }

    #[test]
    fn test_session_data_keeps_unknown_keys() {
        let json = r#"{"ideas":["a"],"sketches":["b"]}"#;
        let data: SessionData = serde_json::from_str(json).unwrap();
        assert_eq!(data.items_named("sketches"), ["b".to_string()]);
        assert_eq!(serde_json::to_string(&data).unwrap(), json);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut data = SessionData::new().with(Bucket::Metrics, ["signups"]);
        assert_eq!(data.remove(Bucket::Metrics, 3), None);
        assert_eq!(data.remove(Bucket::Test, 0), None);
        assert_eq!(data.remove(Bucket::Metrics, 0), Some("signups".to_string()));
        assert!(data.is_empty());
    }

    #[test]
    fn test_report_field_names() {
        let report = FeedbackReport {
            kind: Mode::Inspire,
            title: "t".to_string(),
            summary: "s".to_string(),
            insights: vec![Insight::new("a", "b", "c")],
            next_steps: vec!["x".to_string()],
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["type"], "inspire");
        assert_eq!(value["nextSteps"][0], "x");
        assert_eq!(value["insights"][0]["icon"], "c");
    }

    #[test]
    fn test_error_outcome_shape() {
        let outcome = FeedbackOutcome::Error {
            error: "Invalid mode".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&outcome).unwrap(),
            r#"{"error":"Invalid mode"}"#
        );
        assert!(outcome.is_error());
        assert!(outcome.report().is_none());
    }
}
