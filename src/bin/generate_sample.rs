//! Writes a goldstandard / prediction CSV pair for trying out `ga-validate`.
//!
//! With `--faults` the prediction file gets one duplicate, one missing, one
//! unknown, one NaN and one out-of-range row so every check fires.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "generate-sample")]
struct Args {
    /// Number of goldstandard samples.
    #[arg(long, default_value_t = 20)]
    samples: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Directory receiving `goldstandard.csv` and `predictions.csv`.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Inject one row for each kind of validation error.
    #[arg(long)]
    faults: bool,
}

/// SplitMix64: one word of state, enough for reproducible fixtures.
struct SplitMix64(u64);

impl SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform in `[lo, hi)` from the top 53 bits.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        lo + (hi - lo) * unit
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SplitMix64(args.seed);

    let samples: Vec<String> = (1..=args.samples).map(|i| format!("S{i:04}")).collect();
    let truth: Vec<f64> = samples.iter().map(|_| rng.uniform(12.0, 42.0)).collect();

    // Predictions: truth plus a little noise, rounded to two decimals and
    // clamped back into the accepted range.
    let mut predictions: Vec<(String, String)> = samples
        .iter()
        .zip(&truth)
        .map(|(s, &ga)| {
            let pred = (ga + rng.uniform(-1.5, 1.5)).clamp(10.0, 43.0);
            (s.clone(), format!("{pred:.2}"))
        })
        .collect();

    if args.faults && predictions.len() >= 4 {
        predictions.pop(); // missing sample
        predictions[1].1 = "NA".to_string();
        predictions[2].1 = "44.5".to_string();
        let dup = predictions[0].clone();
        predictions.push(dup);
        predictions.push(("UNKNOWN".to_string(), "30.00".to_string()));
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let gold_path = args.out_dir.join("goldstandard.csv");
    let mut gold = csv::Writer::from_path(&gold_path).context("opening goldstandard output")?;
    gold.write_record(["Sample", "GA"])?;
    for (sample, ga) in samples.iter().zip(&truth) {
        gold.write_record(&[sample.clone(), format!("{ga:.1}")])?;
    }
    gold.flush()?;

    let pred_path = args.out_dir.join("predictions.csv");
    let mut pred = csv::Writer::from_path(&pred_path).context("opening predictions output")?;
    pred.write_record(["Sample", "GA_prediction"])?;
    for (sample, value) in &predictions {
        pred.write_record([sample, value])?;
    }
    pred.flush()?;

    println!(
        "Wrote {} goldstandard samples to {} and {} predictions to {}",
        samples.len(),
        gold_path.display(),
        predictions.len(),
        pred_path.display()
    );
    Ok(())
}
