use std::collections::{BTreeSet, HashSet};

use crate::data::model::{GoldstandardTable, PredictionTable};
use crate::listing::quoted_list;

/// Accepted gestational-age range in weeks, inclusive on both ends.
pub const GA_MIN: f64 = 10.0;
pub const GA_MAX: f64 = 43.0;

// ---------------------------------------------------------------------------
// Content checks
//
// Each check returns an empty string on success, otherwise one message.
// ---------------------------------------------------------------------------

/// Every occurrence of a `Sample` after its first, in table order.
pub fn check_duplicates(pred: &PredictionTable) -> String {
    let mut seen = HashSet::new();
    let duplicates: Vec<&str> = pred.samples().filter(|s| !seen.insert(*s)).collect();

    if duplicates.is_empty() {
        return String::new();
    }
    format!(
        "Found {} duplicate Sample(s): {}",
        duplicates.len(),
        quoted_list(&duplicates)
    )
}

/// Goldstandard samples absent from the predictions, deduplicated and sorted.
pub fn check_missing_ids(gold: &GoldstandardTable, pred: &PredictionTable) -> String {
    let index = pred.sample_index();
    let missing: BTreeSet<&str> = gold
        .samples()
        .iter()
        .map(String::as_str)
        .filter(|s| !index.contains(s))
        .collect();

    if missing.is_empty() {
        return String::new();
    }
    format!(
        "Found {} missing Sample ID(s): {}",
        missing.len(),
        quoted_list(&missing)
    )
}

/// Predicted samples absent from the goldstandard, deduplicated and sorted.
pub fn check_unknown_ids(gold: &GoldstandardTable, pred: &PredictionTable) -> String {
    let unknown: BTreeSet<&str> = pred.samples().filter(|s| !gold.contains(s)).collect();

    if unknown.is_empty() {
        return String::new();
    }
    format!(
        "Found {} unknown Sample ID(s): {}",
        unknown.len(),
        quoted_list(&unknown)
    )
}

pub fn check_nan_values(pred: &PredictionTable) -> String {
    let missing = pred.predictions().filter(|v| v.is_nan()).count();
    if missing == 0 {
        return String::new();
    }
    format!("'GA_prediction' column contains {missing} NaN value(s).")
}

/// Boolean range check: the message does not say which values failed.
/// NaN compares false both ways and is left to [`check_nan_values`].
pub fn check_ga_range(pred: &PredictionTable) -> String {
    if pred.predictions().any(|v| v < GA_MIN || v > GA_MAX) {
        return format!("'GA_prediction' column should be between [{GA_MIN}, {GA_MAX}] inclusive.");
    }
    String::new()
}
