//! Tagged text data model
//!
//! A [`Document`] is the full output of one tagger run: an ordered list of
//! sentences, each an ordered list of (word, tag) [`Token`]s. Positions are
//! significant because the comparator aligns two documents purely by index.

use serde::ser::{Serialize, SerializeTuple, Serializer};
use std::fmt;

/// One (surface form, POS tag) pair produced by a tagger
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub word: String,
    pub tag: String,
}

impl Token {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }

    /// Case-folded word used as the comparison key
    pub fn normalized_word(&self) -> String {
        self.word.to_lowercase()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.word, self.tag)
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.word)?;
        tuple.serialize_element(&self.tag)?;
        tuple.end()
    }
}

/// Two different tags assigned to the same word, (left tagger, right tagger)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagPair {
    pub left: String,
    pub right: String,
}

impl TagPair {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

impl fmt::Display for TagPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.right)
    }
}

impl Serialize for TagPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.left)?;
        tuple.serialize_element(&self.right)?;
        tuple.end()
    }
}

/// Ordered tokens of one tagged line
pub type Sentence = Vec<Token>;

/// All sentences produced from one tagger output file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sentences: Vec<Sentence>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sentence: Sentence) {
        self.sentences.push(sentence);
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Total tokens across all sentences
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }
}

impl From<Vec<Sentence>> for Document {
    fn from(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }
}
