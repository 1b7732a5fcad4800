//! The machine-readable verdict and how it is written out.
//!
//! Downstream tooling compares the JSON text itself, so the layout is fixed:
//! `", "` between members, `": "` after keys, and ASCII only.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;

use super::report::{SubmissionStatus, ValidationReport};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub submission_status: SubmissionStatus,
    pub submission_errors: String,
}

impl From<&ValidationReport> for SubmissionResult {
    fn from(report: &ValidationReport) -> Self {
        SubmissionResult {
            submission_status: report.status(),
            submission_errors: report.message(),
        }
    }
}

impl SubmissionResult {
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
        self.serialize(&mut ser).context("serializing verdict")?;
        String::from_utf8(buf).context("verdict is not UTF-8")
    }

    /// Write to `output` without a trailing newline, or print to stdout.
    pub fn emit(&self, output: Option<&Path>) -> Result<()> {
        let json = self.to_json()?;
        match output {
            Some(path) => fs::write(path, json)
                .with_context(|| format!("writing verdict to {}", path.display())),
            None => {
                println!("{json}");
                Ok(())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Formatter
// ---------------------------------------------------------------------------

/// Compact layout with a space after separators; non-ASCII escaped as
/// `\uXXXX` (surrogate pairs above the BMP).
struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(status: SubmissionStatus, errors: &str) -> SubmissionResult {
        SubmissionResult {
            submission_status: status,
            submission_errors: errors.to_string(),
        }
    }

    #[test]
    fn validated_layout() {
        let json = result(SubmissionStatus::Validated, "").to_json().unwrap();
        assert_eq!(
            json,
            r#"{"submission_status": "VALIDATED", "submission_errors": ""}"#
        );
    }

    #[test]
    fn escapes_newlines_quotes_and_non_ascii() {
        let json = result(SubmissionStatus::Invalid, "a\n'b' \"c\" é 😀")
            .to_json()
            .unwrap();
        assert_eq!(
            json,
            r#"{"submission_status": "INVALID", "submission_errors": "a\n'b' \"c\" \u00e9 \ud83d\ude00"}"#
        );
        assert!(json.is_ascii());
    }

    #[test]
    fn json_parses_back() {
        let original = result(SubmissionStatus::Invalid, "Found 1 unknown Sample ID(s): ['ß']");
        let parsed: SubmissionResult = serde_json::from_str(&original.to_json().unwrap()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn file_mode_has_no_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        result(SubmissionStatus::Validated, "").emit(Some(path.as_path())).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.ends_with('}'));
    }

    #[test]
    fn from_report_folds_status_and_message() {
        let report = ValidationReport {
            errors: vec![String::new(), "bad".into()],
        };
        let res = SubmissionResult::from(&report);
        assert_eq!(res, result(SubmissionStatus::Invalid, "bad"));
    }
}
