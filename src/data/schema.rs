use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// ColumnType – the semantic type a column is coerced to on load
// ---------------------------------------------------------------------------

/// Declared type of a prediction column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Kept verbatim as text.
    Str,
    /// Parsed as a 64-bit float; NA tokens load as NaN.
    Float64,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Str => write!(f, "str"),
            ColumnType::Float64 => write!(f, "float64"),
        }
    }
}

// ---------------------------------------------------------------------------
// ColumnSchema – required columns for one task
// ---------------------------------------------------------------------------

/// Ordered list of required columns and their declared types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    columns: Vec<(String, ColumnType)>,
}

impl ColumnSchema {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = (S, ColumnType)>,
        S: Into<String>,
    {
        ColumnSchema {
            columns: columns.into_iter().map(|(n, t)| (n.into(), t)).collect(),
        }
    }

    /// Columns in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, ColumnType)> {
        self.columns.iter().map(|(n, t)| (n.as_str(), *t))
    }
}

/// Renders as `{'Sample': str, 'GA_prediction': float64}`.
impl fmt::Display for ColumnSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, ty)) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{name}': {ty}")?;
        }
        write!(f, "}}")
    }
}

// ---------------------------------------------------------------------------
// TaskSchemas – task identifier → schema
// ---------------------------------------------------------------------------

/// Identifiers accepted on the command line.
pub const TASK_IDS: [&str; 2] = ["1", "2"];

pub const SAMPLE_COLUMN: &str = "Sample";
pub const PREDICTION_COLUMN: &str = "GA_prediction";

/// Immutable per-task schema table, built once and handed to the loader.
#[derive(Debug, Clone)]
pub struct TaskSchemas {
    by_task: BTreeMap<String, ColumnSchema>,
}

impl TaskSchemas {
    /// Schemas for the two challenge tasks. Only the allowed model inputs
    /// differ between them, so the prediction files share one layout.
    pub fn builtin() -> Self {
        let prediction = ColumnSchema::new([
            (SAMPLE_COLUMN, ColumnType::Str),
            (PREDICTION_COLUMN, ColumnType::Float64),
        ]);
        let by_task = TASK_IDS
            .iter()
            .map(|id| (id.to_string(), prediction.clone()))
            .collect();
        TaskSchemas { by_task }
    }

    pub fn get(&self, task: &str) -> Option<&ColumnSchema> {
        self.by_task.get(task)
    }
}
