//! Offline utility that trains and serializes the risk classifier artifact.
//!
//! The serving process never trains; it only loads the artifact written
//! here. Run once before first start:
//!
//!     train-model --output ./data/risk_model.bin

use anyhow::{Context, Result};
use clap::Parser;
use maintenance_predictor::ml::DecisionTreeRiskClassifier;
use ndarray::Array2;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "train-model", about = "Train and serialize the equipment risk classifier")]
struct Args {
    /// Where to write the serialized model artifact
    #[arg(long, short, default_value = "./data/risk_model.bin", env = "MAINT__MODEL__PATH")]
    output: PathBuf,

    /// Maximum decision tree depth
    #[arg(long, default_value_t = 10)]
    max_depth: u16,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (features, labels) = synthetic_training_set();
    let n_samples = labels.len();

    let classifier = DecisionTreeRiskClassifier::fit(&features, &labels, args.max_depth)
        .context("training failed")?;
    classifier
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!(
        "Trained on {} samples, model saved to {}",
        n_samples,
        args.output.display()
    );
    Ok(())
}

/// Deterministic synthetic sensor readings labeled by maintenance-rule
/// thresholds: class 0 = Low, 1 = Medium, 2 = High.
fn synthetic_training_set() -> (Array2<f64>, Vec<usize>) {
    let mut rows = Vec::new();
    let mut labels = Vec::new();

    for t in 0..20 {
        for v in 0..10 {
            let temperature = 20.0 + t as f64 * 4.0; // 20..96
            let vibration = v as f64 * 0.1; // 0.0..0.9
            let pressure = 5.0 + (t * v) as f64 % 50.0;
            let runtime = 50.0 + (t * 31 + v * 17) as f64 % 400.0;

            let label = if temperature > 85.0 || vibration > 0.7 {
                2
            } else if temperature > 60.0 || vibration > 0.4 {
                1
            } else {
                0
            };

            rows.extend([temperature, vibration, pressure, runtime]);
            labels.push(label);
        }
    }

    let features = Array2::from_shape_vec((labels.len(), 4), rows)
        .expect("synthetic set is rectangular by construction");
    (features, labels)
}
