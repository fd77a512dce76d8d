//! JSON export artifacts

use crate::error::StoreError;
use chrono::NaiveDate;
use pulse_core::FeedbackReport;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Feedback,
    Sessions,
}

impl ExportKind {
    fn prefix(&self) -> &'static str {
        match self {
            ExportKind::Feedback => "feedback",
            ExportKind::Sessions => "sessions",
        }
    }
}

/// Download filename stamped with the calendar date, e.g. `feedback-2025-01-31.json`
pub fn export_filename(kind: ExportKind, date: NaiveDate) -> String {
    format!("{}-{}.json", kind.prefix(), date.format("%Y-%m-%d"))
}

/// Pretty-print with 2-space indentation
pub(crate) fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, StoreError> {
    Ok(serde_json::to_vec_pretty(value)?)
}

/// A single feedback report as a downloadable JSON document
pub fn report_to_json(report: &FeedbackReport) -> Result<Vec<u8>, StoreError> {
    to_pretty_json(report)
}
