//! tagcmp library - comparison run wiring
//!
//! Parses the two selected tagger outputs, compares them and writes the
//! report. All inputs come from an explicit [`RunConfig`]; nothing is read
//! until [`run`] is called.

use tagcmp_common::config::RunConfig;
use tagcmp_common::{compare_counted, parser, report, Result, Summary};
use tracing::info;

pub mod cli;

/// Run one comparison and write its report
pub fn run(config: &RunConfig) -> Result<Summary> {
    info!(
        "Comparing {} ({}) against {} ({})",
        config.left.tagger,
        config.left.path.display(),
        config.right.tagger,
        config.right.path.display()
    );

    let left = parser::parse_file(&config.left.path)?;
    info!(
        "{}: {} sentences, {} tokens",
        config.left.tagger,
        left.len(),
        left.token_count()
    );

    let right = parser::parse_file(&config.right.path)?;
    info!(
        "{}: {} sentences, {} tokens",
        config.right.tagger,
        right.len(),
        right.token_count()
    );

    let (comparison, summary) = compare_counted(&left, &right);
    info!(
        "Compared {} token pairs: {} matches ({} words), {} tag discrepancies ({} words), {} tokenization issues ({} sentences)",
        summary.compared_pairs(),
        summary.matched_pairs,
        summary.matched_words,
        summary.discrepant_pairs,
        summary.discrepant_words,
        summary.issue_pairs,
        summary.issue_sentences
    );

    report::write_report_file(&config.output, &comparison, config.format)?;
    info!("✓ Report written to {}", config.output.display());

    Ok(summary)
}
