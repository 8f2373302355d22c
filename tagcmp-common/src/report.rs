//! Comparison report rendering
//!
//! The text layout has three sections (tag discrepancies, tag matches,
//! tokenization issues), each opened by a titled divider and closed by a
//! plain one. Entries are written in the order they were first seen during
//! comparison, so the same inputs always produce the same report.

use crate::compare::Comparison;
use crate::{Error, Result};
use serde::Deserialize;
use std::fmt::{self, Display};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Closing divider for every section
pub const SECTION_END: &str = "---------------------------------------------------";

/// Body of the tokenization section when no issues were found
pub const NO_TOKENIZATION_ISSUES: &str = "No tokenization issues found with the two taggers";

/// Output format of the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    /// File extension used for default output names
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }
}

impl Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(Error::InvalidInput(format!(
                "Unknown report format '{}' (expected text or json)",
                other
            ))),
        }
    }
}

fn section_start(title: &str) -> String {
    format!("----------------- {} ------------------------", title)
}

/// `{a, b, c}` rendering of a bucket
fn braced<'a, T: Display + 'a>(items: impl IntoIterator<Item = &'a T>) -> String {
    format!("{{{}}}", joined(items))
}

/// `[a, b, c]` rendering of a bucket
fn bracketed<'a, T: Display + 'a>(items: impl IntoIterator<Item = &'a T>) -> String {
    format!("[{}]", joined(items))
}

fn joined<'a, T: Display + 'a>(items: impl IntoIterator<Item = &'a T>) -> String {
    items
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Write the text report
pub fn write_text<W: Write>(writer: &mut W, comparison: &Comparison) -> Result<()> {
    writeln!(writer, "{}", section_start("Tag Discrepancies"))?;
    for (word, pairs) in &comparison.tag_discrepancies {
        writeln!(writer, "Word: {}, Tags: {}", word, braced(pairs))?;
    }
    writeln!(writer, "{}\n\n", SECTION_END)?;

    writeln!(writer, "{}", section_start("Tag Matches"))?;
    for (word, tags) in &comparison.tag_matches {
        writeln!(writer, "Word: {}, Tag: {}", word, braced(tags))?;
    }
    writeln!(writer, "{}\n\n", SECTION_END)?;

    writeln!(writer, "{}", section_start("Tokenization issues"))?;
    if comparison.tokenization_issues.is_empty() {
        writeln!(writer, "{}", NO_TOKENIZATION_ISSUES)?;
    } else {
        for (sentence_index, tokens) in &comparison.tokenization_issues {
            writeln!(
                writer,
                "Line number: {}, Issues: {}",
                sentence_index,
                bracketed(tokens)
            )?;
        }
    }
    writeln!(writer, "{}", SECTION_END)?;

    Ok(())
}

/// Write the JSON report (pretty-printed, insertion-ordered objects)
pub fn write_json<W: Write>(writer: &mut W, comparison: &Comparison) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, comparison)?;
    writeln!(writer)?;
    Ok(())
}

/// Write a report in the requested format
pub fn write_report<W: Write>(
    writer: &mut W,
    comparison: &Comparison,
    format: ReportFormat,
) -> Result<()> {
    match format {
        ReportFormat::Text => write_text(writer, comparison),
        ReportFormat::Json => write_json(writer, comparison),
    }
}

/// Render the text report into a string
pub fn render_text(comparison: &Comparison) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_text(&mut buffer, comparison);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Create (or truncate) `path` and write the report to it
pub fn write_report_file(path: &Path, comparison: &Comparison, format: ReportFormat) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::OutputFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_report(&mut writer, comparison, format)?;
    writer.flush()?;

    debug!("Wrote {} report to {}", format, path.display());
    Ok(())
}
