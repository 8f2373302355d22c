//! # TagCmp Common Library
//!
//! Shared code for cross-referencing part-of-speech tagger output:
//! - Tagged text data model (tokens, sentences, documents)
//! - Parser for "sentpos" tagger output files
//! - Positional comparator that classifies every aligned token pair
//! - Report rendering (text and JSON)
//! - Configuration loading and resolution

pub mod compare;
pub mod config;
pub mod error;
pub mod model;
pub mod multimap;
pub mod parser;
pub mod report;

pub use compare::{compare, compare_counted, Comparison, Summary};
pub use error::{Error, Result};
pub use model::{Document, Sentence, TagPair, Token};
pub use report::ReportFormat;
