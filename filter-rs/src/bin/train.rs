//! Train the spam classifier and save the fitted artifacts
//!
//! Fits on the built-in sample corpus by default, or on a labeled file
//! (`spam`/`ham`, tab, message text — one example per line). Prints the
//! held-out evaluation report to stdout.

use anyhow::Context;
use clap::Parser;
use filter_rs::config::Config;
use filter_rs::pipeline::{Dataset, TrainingPipeline};
use filter_rs::store::{ArtifactStore, FsArtifactStore};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "train", about = "Train the spam classifier")]
struct Cli {
    /// Configuration file (falls back to built-in defaults)
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Labeled corpus file; omit to train on the built-in sample corpus
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Override the split seed from the config file
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let config = if cli.config.exists() {
        Config::from_file(&cli.config)
            .with_context(|| format!("reading {}", cli.config.display()))?
    } else {
        Config::default()
    };

    let dataset = match &cli.data {
        Some(path) => {
            info!("Loading corpus from {}", path.display());
            Dataset::from_labeled_file(path)
                .with_context(|| format!("reading corpus {}", path.display()))?
        }
        None => {
            info!("No corpus file given, using the built-in sample corpus");
            Dataset::sample()
        }
    };
    info!("Training on {} examples", dataset.len());

    let mut training = config.training.clone();
    if let Some(seed) = cli.seed {
        training.seed = seed;
    }

    let outcome = TrainingPipeline::new(training).run(&dataset)?;
    println!("{}", serde_json::to_string_pretty(&outcome.report)?);

    let store = FsArtifactStore::new(&config.artifacts.root);
    store.save_json(&config.artifacts.vectorizer_name, &outcome.vectorizer)?;
    store.save_json(&config.artifacts.classifier_name, &outcome.classifier)?;
    info!(
        "Artifacts saved to {} ({}, {})",
        config.artifacts.root, config.artifacts.vectorizer_name, config.artifacts.classifier_name
    );

    Ok(())
}
