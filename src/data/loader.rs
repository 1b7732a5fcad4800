use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use super::error::{LoadError, SchemaError};
use super::model::{GoldstandardTable, PredictionRow, PredictionTable};
use super::schema::{ColumnSchema, ColumnType, PREDICTION_COLUMN, SAMPLE_COLUMN};

/// Cells that load as a missing value in float columns.
pub const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ---------------------------------------------------------------------------
// Goldstandard loader
// ---------------------------------------------------------------------------

/// Load the reference file indexed by its `Sample` column.
///
/// The goldstandard is a trusted artifact: every failure here is an
/// operational error, not a problem with the submission.
pub fn load_goldstandard(path: &Path) -> Result<GoldstandardTable> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening goldstandard {}", path.display()))?;

    let sample_idx = reader
        .headers()
        .context("reading goldstandard headers")?
        .iter()
        .position(|h| h == SAMPLE_COLUMN)
        .with_context(|| format!("goldstandard missing '{SAMPLE_COLUMN}' column"))?;

    let mut samples = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("goldstandard row {row_no}"))?;
        samples.push(record.get(sample_idx).unwrap_or("").to_string());
    }

    let table = GoldstandardTable::from_samples(samples);
    info!("loaded goldstandard with {} samples", table.len());
    Ok(table)
}

// ---------------------------------------------------------------------------
// Schema-checked prediction loader
// ---------------------------------------------------------------------------

/// Load a prediction file, restricted to and typed by `schema`.
///
/// Header rules:
/// * every schema column must be present, in any order
/// * any other column (including a repeated schema column) is rejected
///
/// Rows shorter than the header are padded with empty cells; longer rows are
/// rejected. Failing to open or read the file is a [`LoadError::Io`].
pub fn load_predictions(path: &Path, schema: &ColumnSchema) -> Result<PredictionTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| csv_error(path, e))?
        .clone();
    if headers.is_empty() {
        return Err(SchemaError::Empty.into());
    }

    let positions = resolve_columns(&headers, schema)?;
    let sample_col = position_of(schema, &positions, SAMPLE_COLUMN)?;
    let prediction_col = position_of(schema, &positions, PREDICTION_COLUMN)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| csv_error(path, e))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() > headers.len() {
            return Err(SchemaError::RaggedRow {
                line,
                expected: headers.len(),
                found: record.len(),
            }
            .into());
        }

        let cell = |idx: usize| record.get(idx).unwrap_or("");
        for ((name, ty), &idx) in schema.columns().zip(&positions) {
            coerce(ty, cell(idx)).ok_or_else(|| SchemaError::InvalidValue {
                column: name.to_string(),
                line,
                value: cell(idx).to_string(),
                expected: ty,
            })?;
        }

        let ga_prediction = parse_float(cell(prediction_col)).unwrap_or(f64::NAN);
        rows.push(PredictionRow::new(cell(sample_col), ga_prediction));
    }

    debug!("parsed {} prediction rows from {}", rows.len(), path.display());
    Ok(PredictionTable::from_rows(rows))
}

/// Map each schema column to its header position.
fn resolve_columns(headers: &csv::StringRecord, schema: &ColumnSchema) -> Result<Vec<usize>, SchemaError> {
    let names: Vec<&str> = schema.columns().map(|(n, _)| n).collect();
    let mut positions: Vec<Option<usize>> = vec![None; names.len()];
    let mut unexpected = Vec::new();

    for (idx, header) in headers.iter().enumerate() {
        match names.iter().position(|n| *n == header) {
            Some(col) if positions[col].is_none() => positions[col] = Some(idx),
            _ => unexpected.push(header.to_string()),
        }
    }

    let missing: Vec<String> = names
        .iter()
        .zip(&positions)
        .filter(|(_, p)| p.is_none())
        .map(|(n, _)| n.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(SchemaError::MissingColumns(missing));
    }
    if !unexpected.is_empty() {
        return Err(SchemaError::UnexpectedColumns(unexpected));
    }

    Ok(positions.into_iter().flatten().collect())
}

fn position_of(schema: &ColumnSchema, positions: &[usize], name: &'static str) -> Result<usize, LoadError> {
    schema
        .columns()
        .position(|(n, _)| n == name)
        .map(|i| positions[i])
        .ok_or(LoadError::Config(name))
}

/// I/O failures stay operational; anything the parser rejects is the
/// submission's fault.
fn csv_error(path: &Path, err: csv::Error) -> LoadError {
    if !err.is_io_error() {
        return SchemaError::Malformed(err.to_string()).into();
    }
    match err.into_kind() {
        csv::ErrorKind::Io(source) => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => SchemaError::Malformed(format!("{other:?}")).into(),
    }
}

/// `None` when `raw` cannot be represented as `ty`.
fn coerce(ty: ColumnType, raw: &str) -> Option<()> {
    match ty {
        ColumnType::Str => Some(()),
        ColumnType::Float64 => parse_float(raw).map(|_| ()),
    }
}

/// Parse a float cell. NA tokens become NaN; Rust's parser is correctly
/// rounded so the written decimal maps to the nearest `f64`.
pub fn parse_float(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if NA_TOKENS.contains(&trimmed) {
        return Some(f64::NAN);
    }
    trimmed.parse::<f64>().ok()
}
