//! Parser for "sentpos" tagger output
//!
//! Only lines containing the marker `" B "` carry tagged content. Everything
//! after the first marker is a whitespace-separated list of `word_TAG`
//! tokens. Each marker line becomes one [`Sentence`], even when none of its
//! tokens survive.
//!
//! Tokens are split on `_`: the word is the text before the first
//! underscore, the tag is the text between the first and second underscore.
//! Anything after a second underscore is dropped, and tokens without an
//! underscore are skipped. Both behaviours match what existing reports were
//! produced with.

use crate::model::{Document, Sentence, Token};
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

/// Separator between line metadata and the tagged words
pub const MARKER: &str = " B ";

/// Parse a sequence of raw lines into a document
pub fn parse<I, S>(lines: I) -> Document
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut document = Document::new();

    for line in lines {
        if let Some(sentence) = parse_line(line.as_ref()) {
            document.push(sentence);
        }
    }

    document
}

/// Parse in-memory tagger output
pub fn parse_str(text: &str) -> Document {
    parse(text.lines())
}

/// Read and parse a tagger output file
///
/// The file is read line by line and closed before returning, on success
/// or error. A missing or unreadable file is reported as
/// [`Error::InputFile`].
pub fn parse_file(path: &Path) -> Result<Document> {
    let input_error = |source| Error::InputFile {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(input_error)?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(input_error)?;

    let document = parse(&lines);
    debug!(
        "Parsed {}: {} lines, {} sentences, {} tokens",
        path.display(),
        lines.len(),
        document.len(),
        document.token_count()
    );

    Ok(document)
}

/// Parse one line; `None` when the line carries no marker
pub fn parse_line(line: &str) -> Option<Sentence> {
    let (_, tagged) = line.split_once(MARKER)?;

    Some(tagged.split_whitespace().filter_map(parse_token).collect())
}

/// Split a `word_TAG` token; `None` when it has no underscore
pub fn parse_token(raw: &str) -> Option<Token> {
    let Some((word, rest)) = raw.split_once('_') else {
        trace!("Dropping token without tag separator: {:?}", raw);
        return None;
    };

    let tag = rest.split('_').next().unwrap_or_default();
    Some(Token::new(word, tag))
}
