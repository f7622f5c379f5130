//! Alloy Property Prediction - Main Entry Point

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use predictor::{init_logging, predict_with, PipelineConfig, UNSPECIFIED_TAG};
use tracing::info;

/// Predict amorphization kinetics from an alloy composition
#[derive(Debug, Parser)]
#[command(name = "alloy-pipeline", version)]
struct Cli {
    /// Chemical formula, e.g. "Ti50Zr50"
    formula: String,

    /// Structure type (other, FCC, HCP, BCC); anything else means unspecified
    #[arg(long, default_value = UNSPECIFIED_TAG)]
    structure: String,

    /// Processing type (other, A, HIP, Q); anything else means unspecified
    #[arg(long, default_value = UNSPECIFIED_TAG)]
    processing: String,

    /// Model artifact path (overrides configuration)
    #[arg(long)]
    model: Option<PathBuf>,

    /// Use the mock backend instead of loading the model artifact
    #[arg(long)]
    mock: bool,

    /// Print the prediction as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = PipelineConfig::load()?;
    init_logging(config.log_json);

    info!("=== Alloy AI Pipeline v{} ===", env!("CARGO_PKG_VERSION"));

    let engine = if cli.mock {
        inference_engine::init_global_mock()
    } else {
        let model_path = cli
            .model
            .unwrap_or_else(|| PathBuf::from(&config.model_path));
        inference_engine::init_global(model_path)?
    };

    let prediction = predict_with(engine, cli.formula.as_str(), &cli.structure, &cli.processing)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    } else {
        println!("logta: {:.6}", prediction.logta);
        println!("d0:    {:.6e}", prediction.d0);
        println!("d1:    {:.6e}", prediction.d1);
        println!("d2:    {:.6e}", prediction.d2);
    }

    Ok(())
}
