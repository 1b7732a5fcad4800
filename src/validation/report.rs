use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::data::error::SchemaError;
use crate::data::model::{GoldstandardTable, PredictionTable};
use crate::data::schema::ColumnSchema;

use super::checks;

/// Messages longer than this are cut down before they are sent on.
pub const MAX_MESSAGE_CHARS: usize = 500;
/// Characters kept when truncating; the ellipsis is appended after them.
pub const TRUNCATED_CHARS: usize = 496;
const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    Validated,
    Invalid,
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionStatus::Validated => write!(f, "VALIDATED"),
            SubmissionStatus::Invalid => write!(f, "INVALID"),
        }
    }
}

// ---------------------------------------------------------------------------
// ValidationReport – ordered check results
// ---------------------------------------------------------------------------

/// One entry per check that ran; an empty entry means the check passed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Run every content check, in order, against a well-typed table.
    pub fn from_checks(gold: &GoldstandardTable, pred: &PredictionTable) -> Self {
        let errors = vec![
            checks::check_duplicates(pred),
            checks::check_missing_ids(gold, pred),
            checks::check_unknown_ids(gold, pred),
            checks::check_nan_values(pred),
            checks::check_ga_range(pred),
        ];
        for (i, err) in errors.iter().enumerate() {
            debug!("check {i}: {}", if err.is_empty() { "ok" } else { err.as_str() });
        }
        ValidationReport { errors }
    }

    /// A schema failure replaces all content checks with a single message.
    pub fn from_schema_error(err: &SchemaError, schema: &ColumnSchema) -> Self {
        warn!("prediction file failed schema checks, skipping content checks: {err}");
        ValidationReport {
            errors: vec![format!(
                "Invalid column names and/or types: {err}. Expecting: {schema}."
            )],
        }
    }

    /// Non-empty entries joined by newlines, before truncation.
    pub fn joined(&self) -> String {
        self.errors
            .iter()
            .filter(|e| !e.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn status(&self) -> SubmissionStatus {
        if self.errors.iter().all(String::is_empty) {
            SubmissionStatus::Validated
        } else {
            SubmissionStatus::Invalid
        }
    }

    /// The message as delivered: joined, then truncated to fit the limit.
    pub fn message(&self) -> String {
        truncate_message(self.joined())
    }
}

/// Cut to [`TRUNCATED_CHARS`] characters plus an ellipsis when longer than
/// [`MAX_MESSAGE_CHARS`]. Counts characters, not bytes.
pub fn truncate_message(message: String) -> String {
    let len = message.chars().count();
    if len <= MAX_MESSAGE_CHARS {
        return message;
    }
    warn!("truncating {len}-character error message");
    let mut out: String = message.chars().take(TRUNCATED_CHARS).collect();
    out.push_str(ELLIPSIS);
    out
}
