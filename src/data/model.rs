use std::collections::HashSet;

// ---------------------------------------------------------------------------
// GoldstandardTable – reference samples keyed by `Sample`
// ---------------------------------------------------------------------------

/// The reference table. Only its `Sample` keys take part in validation.
#[derive(Debug, Clone, Default)]
pub struct GoldstandardTable {
    /// Unique keys in file order.
    samples: Vec<String>,
    index: HashSet<String>,
}

impl GoldstandardTable {
    /// Build from keys in file order. Repeated keys keep their first position.
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut table = GoldstandardTable::default();
        for sample in samples {
            if table.index.insert(sample.clone()) {
                table.samples.push(sample);
            }
        }
        table
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    pub fn contains(&self, sample: &str) -> bool {
        self.index.contains(sample)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }
}

// ---------------------------------------------------------------------------
// PredictionRow / PredictionTable – the submitted file
// ---------------------------------------------------------------------------

/// One row of a prediction file.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRow {
    pub sample: String,
    /// NaN when the cell was empty or an NA token.
    pub ga_prediction: f64,
}

impl PredictionRow {
    pub fn new(sample: impl Into<String>, ga_prediction: f64) -> Self {
        PredictionRow {
            sample: sample.into(),
            ga_prediction,
        }
    }
}

/// Typed prediction rows in file order. `Sample` values are not assumed unique.
#[derive(Debug, Clone, Default)]
pub struct PredictionTable {
    pub rows: Vec<PredictionRow>,
}

impl PredictionTable {
    pub fn from_rows(rows: Vec<PredictionRow>) -> Self {
        PredictionTable { rows }
    }

    pub fn samples(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.sample.as_str())
    }

    pub fn predictions(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|r| r.ga_prediction)
    }

    /// Set of distinct sample identifiers.
    pub fn sample_index(&self) -> HashSet<&str> {
        self.samples().collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goldstandard_keeps_first_occurrence_order() {
        let gold = GoldstandardTable::from_samples(
            ["B", "A", "B", "C"].iter().map(|s| s.to_string()),
        );
        assert_eq!(gold.samples(), ["B", "A", "C"]);
        assert_eq!(gold.len(), 3);
        assert!(gold.contains("C"));
        assert!(!gold.contains("D"));
    }

    #[test]
    fn prediction_index_collapses_repeats() {
        let table = PredictionTable::from_rows(vec![
            PredictionRow::new("S1", 20.0),
            PredictionRow::new("S1", 21.0),
            PredictionRow::new("S2", 22.0),
        ]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.sample_index().len(), 2);
    }
}
