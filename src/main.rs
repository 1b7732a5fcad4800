mod cli;
mod data;
mod listing;
mod validation;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Args;
use data::loader::load_goldstandard;
use data::schema::TaskSchemas;
use validation::output::SubmissionResult;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let schemas = TaskSchemas::builtin();
    let schema = schemas
        .get(&args.task)
        .with_context(|| format!("no schema for task '{}'", args.task))?;

    let gold = load_goldstandard(&args.goldstandard_file)?;
    let report = validation::validate(&gold, &args.predictions_file, schema)?;

    SubmissionResult::from(&report).emit(args.output.as_deref())
}
