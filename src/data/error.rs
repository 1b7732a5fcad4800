//! Load failures, split by who is at fault.
//!
//! A [`SchemaError`] means the submitted file does not have the expected
//! shape and becomes a validation message. Everything else in [`LoadError`]
//! aborts the run.

use std::path::PathBuf;

use thiserror::Error;

use crate::listing::{quote, quoted_list};

use super::schema::ColumnType;

/// The prediction file does not match its task schema.
#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("No columns to parse from file")]
    Empty,

    #[error("columns expected but not found: {}", quoted_list(.0))]
    MissingColumns(Vec<String>),

    #[error("unexpected columns found: {}", quoted_list(.0))]
    UnexpectedColumns(Vec<String>),

    #[error(
        "could not convert {} to {expected} in column {} (line {line})",
        quote(.value),
        quote(.column)
    )]
    InvalidValue {
        column: String,
        line: u64,
        value: String,
        expected: ColumnType,
    },

    #[error("Expected {expected} fields in line {line}, saw {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{0}")]
    Malformed(String),
}

/// Errors from loading the prediction file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("task schema lacks required column '{0}'")]
    Config(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_errors_render_quoted_names() {
        assert_eq!(
            SchemaError::UnexpectedColumns(vec!["Notes".into()]).to_string(),
            "unexpected columns found: ['Notes']"
        );
        assert_eq!(
            SchemaError::InvalidValue {
                column: "GA_prediction".into(),
                line: 3,
                value: "abc".into(),
                expected: ColumnType::Float64,
            }
            .to_string(),
            "could not convert 'abc' to float64 in column 'GA_prediction' (line 3)"
        );
    }
}
