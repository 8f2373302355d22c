//! tagcmp - POS tagger output comparison
//!
//! Cross-references two taggers' sentpos output and writes a report of tag
//! matches, tag discrepancies and tokenization issues.

use anyhow::{Context, Result};
use clap::Parser;
use tagcmp::cli::Args;
use tagcmp_common::config::{load_config, RunConfig};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Loaded before tracing: the file may set the log level
    let file_config = load_config(args.config.as_deref()).context("Failed to load configuration")?;

    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| file_config.logging.level.clone());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("tagcmp={level},tagcmp_common={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        "Starting tagcmp v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let config = RunConfig::resolve(args.overrides(), file_config).context("Invalid configuration")?;

    match tagcmp::run(&config) {
        Ok(_) => Ok(()),
        Err(e) => {
            error!("Comparison failed: {}", e);
            Err(e).context("Comparison failed")
        }
    }
}
