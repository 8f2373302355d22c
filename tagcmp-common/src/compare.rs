//! Positional comparison of two tagged documents
//!
//! Sentences are paired by index, then tokens within each sentence pair are
//! paired by index. Every compared token pair lands in exactly one registry:
//!
//! - same word (case-insensitive), same tag → [`TagMatches`]
//! - same word, different tag → [`TagDiscrepancies`]
//! - different word → [`TokenizationIssues`] under the sentence index
//!
//! Pairing stops at the shorter document and at the shorter sentence. There
//! is no re-alignment after a word mismatch, so one segmentation difference
//! usually shows up as a run of issues for the rest of that sentence.

use crate::model::{Document, TagPair, Token};
use crate::multimap::{ListMultiMap, SetMultiMap};
use serde::Serialize;
use tracing::debug;

/// Lowercased word → tags both taggers agreed on
pub type TagMatches = SetMultiMap<String, String>;

/// Lowercased word → (left tag, right tag) disagreements
pub type TagDiscrepancies = SetMultiMap<String, TagPair>;

/// Sentence index → conflicting tokens, left then right, in encounter order
pub type TokenizationIssues = ListMultiMap<usize, Token>;

/// Classification of one compared token pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Match,
    Discrepancy,
    TokenizationIssue,
}

/// Result of comparing two documents
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Comparison {
    pub tag_discrepancies: TagDiscrepancies,
    pub tag_matches: TagMatches,
    pub tokenization_issues: TokenizationIssues,
}

/// Per-registry counts for logging and summaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Token pairs classified as matches
    pub matched_pairs: usize,
    /// Token pairs classified as tag discrepancies
    pub discrepant_pairs: usize,
    /// Token pairs classified as tokenization issues
    pub issue_pairs: usize,
    pub matched_words: usize,
    pub discrepant_words: usize,
    pub issue_sentences: usize,
}

impl Summary {
    /// Total token pairs compared
    pub fn compared_pairs(&self) -> usize {
        self.matched_pairs + self.discrepant_pairs + self.issue_pairs
    }
}

impl Comparison {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one aligned token pair and record it
    pub fn record(&mut self, sentence_index: usize, left: &Token, right: &Token) -> Outcome {
        let left_word = left.normalized_word();

        if left_word != right.normalized_word() {
            self.tokenization_issues.insert(sentence_index, left.clone());
            self.tokenization_issues.insert(sentence_index, right.clone());
            return Outcome::TokenizationIssue;
        }

        if left.tag == right.tag {
            self.tag_matches.insert(left_word, left.tag.clone());
            Outcome::Match
        } else {
            self.tag_discrepancies
                .insert(left_word, TagPair::new(left.tag.as_str(), right.tag.as_str()));
            Outcome::Discrepancy
        }
    }
}

/// Compare two documents position by position
pub fn compare(left: &Document, right: &Document) -> Comparison {
    let (comparison, _) = compare_counted(left, right);
    comparison
}

/// Compare two documents and count pairs per outcome
///
/// Match and discrepancy registries deduplicate, so pair counts cannot be
/// recovered from them afterwards; they are tallied here as pairs are seen.
pub fn compare_counted(left: &Document, right: &Document) -> (Comparison, Summary) {
    if left.len() != right.len() {
        debug!(
            "Documents differ in length ({} vs {} sentences); comparing first {}",
            left.len(),
            right.len(),
            left.len().min(right.len())
        );
    }

    let mut comparison = Comparison::new();
    let mut summary = Summary::default();

    for (sentence_index, (left_sentence, right_sentence)) in
        left.sentences().iter().zip(right.sentences()).enumerate()
    {
        for (left_token, right_token) in left_sentence.iter().zip(right_sentence) {
            match comparison.record(sentence_index, left_token, right_token) {
                Outcome::Match => summary.matched_pairs += 1,
                Outcome::Discrepancy => summary.discrepant_pairs += 1,
                Outcome::TokenizationIssue => summary.issue_pairs += 1,
            }
        }
    }

    summary.matched_words = comparison.tag_matches.len();
    summary.discrepant_words = comparison.tag_discrepancies.len();
    summary.issue_sentences = comparison.tokenization_issues.len();

    (comparison, summary)
}
