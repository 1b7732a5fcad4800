//! Data layer: schemas, typed tables, and loading.
//!
//! Architecture:
//! ```text
//!  goldstandard.csv        predictions.csv
//!        │                       │
//!        ▼                       ▼
//!   ┌──────────┐   ┌────────────────────────┐
//!   │  loader   │   │ loader + ColumnSchema  │  header + type checks
//!   └──────────┘   └────────────────────────┘
//!        │                       │
//!        ▼                       ▼
//!  GoldstandardTable       PredictionTable     (or SchemaError)
//! ```

pub mod error;
pub mod loader;
pub mod model;
pub mod schema;
