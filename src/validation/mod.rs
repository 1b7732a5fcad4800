//! Validation pipeline: load, check, report.
//!
//! ```text
//!   GoldstandardTable + predictions path
//!        │
//!        ▼
//!   ┌──────────────┐  SchemaError ──► single schema message
//!   │ load_predictions │
//!   └──────────────┘
//!        │ PredictionTable
//!        ▼
//!   ┌──────────┐
//!   │  checks   │  duplicates, missing, unknown, NaN, range
//!   └──────────┘
//!        │
//!        ▼
//!   ValidationReport ──► SubmissionResult (JSON)
//! ```

pub mod checks;
pub mod output;
pub mod report;

use std::path::Path;

use anyhow::Result;
use log::info;

use crate::data::error::LoadError;
use crate::data::loader::load_predictions;
use crate::data::model::GoldstandardTable;
use crate::data::schema::ColumnSchema;

use report::ValidationReport;

/// Validate the prediction file at `pred_path` against `gold`.
///
/// Schema problems in the prediction file end up in the report; I/O and
/// configuration failures are returned as errors.
pub fn validate(gold: &GoldstandardTable, pred_path: &Path, schema: &ColumnSchema) -> Result<ValidationReport> {
    let report = match load_predictions(pred_path, schema) {
        Ok(pred) => {
            info!("loaded {} prediction rows", pred.len());
            ValidationReport::from_checks(gold, &pred)
        }
        Err(LoadError::Schema(err)) => ValidationReport::from_schema_error(&err, schema),
        Err(err) => return Err(err.into()),
    };
    info!("submission status: {}", report.status());
    Ok(report)
}
