//! Common error types for TagCmp

use crate::config::Tagger;
use std::path::PathBuf;
use thiserror::Error;

/// Common result type for TagCmp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the parser, comparator and reporter
#[derive(Error, Debug)]
pub enum Error {
    /// Tagger output file could not be opened or read
    #[error("Cannot read input file {}: {source}", path.display())]
    InputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report destination could not be created
    #[error("Cannot write report {}: {source}", path.display())]
    OutputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed TOML configuration file
    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON report serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A tagger selected for comparison has no input path configured
    #[error("No input file configured for tagger '{0}'")]
    MissingInput(Tagger),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
