//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::data::schema::TASK_IDS;

/// Validate a prediction file against the goldstandard and emit a JSON verdict.
#[derive(Parser, Debug)]
#[command(name = "ga-validate")]
#[command(version)]
pub struct Args {
    /// Prediction file (CSV with `Sample` and `GA_prediction` columns).
    #[arg(short = 'p', long = "predictions_file", alias = "predictions-file")]
    pub predictions_file: PathBuf,

    /// Goldstandard file (CSV with a `Sample` column).
    #[arg(short = 'g', long = "goldstandard_file", alias = "goldstandard-file")]
    pub goldstandard_file: PathBuf,

    /// Challenge task whose schema applies.
    #[arg(short = 't', long, default_value = "1", value_parser = TASK_IDS)]
    pub task: String,

    /// Write the verdict here instead of stdout.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_task_one_and_stdout() {
        let args = Args::try_parse_from(["ga-validate", "-p", "pred.csv", "-g", "gold.csv"]).unwrap();
        assert_eq!(args.task, "1");
        assert_eq!(args.predictions_file, PathBuf::from("pred.csv"));
        assert!(args.output.is_none());
    }

    #[test]
    fn accepts_long_and_hyphenated_names() {
        let args = Args::try_parse_from([
            "ga-validate",
            "--predictions_file",
            "p.csv",
            "--goldstandard-file",
            "g.csv",
            "--task",
            "2",
            "--output",
            "out.json",
        ])
        .unwrap();
        assert_eq!(args.task, "2");
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn rejects_unknown_task() {
        assert!(Args::try_parse_from(["ga-validate", "-p", "p", "-g", "g", "-t", "3"]).is_err());
    }

    #[test]
    fn requires_both_files() {
        assert!(Args::try_parse_from(["ga-validate", "-p", "p"]).is_err());
    }
}
