//! Command-line arguments for tagcmp

use clap::Parser;
use std::path::PathBuf;
use tagcmp_common::config::{ConfigOverrides, InputPaths, Tagger};
use tagcmp_common::ReportFormat;

/// Command-line arguments for tagcmp
#[derive(Parser, Debug)]
#[command(name = "tagcmp")]
#[command(about = "Cross-reference POS tagger output: tag matches, tag discrepancies and tokenization issues")]
#[command(version)]
pub struct Args {
    /// CLAWS sentpos output file
    #[arg(long, env = "TAGCMP_CLAWS")]
    pub claws: Option<PathBuf>,

    /// NLTK sentpos output file
    #[arg(long, env = "TAGCMP_NLTK")]
    pub nltk: Option<PathBuf>,

    /// Stanford sentpos output file
    #[arg(long, env = "TAGCMP_STANFORD")]
    pub stanford: Option<PathBuf>,

    /// First tagger to compare [default: claws]
    #[arg(long, env = "TAGCMP_LEFT")]
    pub left: Option<Tagger>,

    /// Second tagger to compare [default: stanford]
    #[arg(long, env = "TAGCMP_RIGHT")]
    pub right: Option<Tagger>,

    /// Report destination [default: <left>V<right>_comparison.<ext>]
    #[arg(short, long, env = "TAGCMP_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Report format: text or json [default: text]
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// TOML configuration file
    #[arg(short, long, env = "TAGCMP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, env = "TAGCMP_LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl Args {
    /// Values given on the command line, for merging over the config file
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            inputs: InputPaths {
                claws: self.claws.clone(),
                nltk: self.nltk.clone(),
                stanford: self.stanford.clone(),
            },
            output: self.output.clone(),
            left: self.left,
            right: self.right,
            format: self.format,
        }
    }
}
