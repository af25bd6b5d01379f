//! Sentence-level citation types.

use serde::{Deserialize, Serialize};

/// One sentence extracted from a generated answer, with its ordinal
/// position in the answer. Derived, never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerSentence {
    /// 0-based position of the sentence in the answer.
    pub index: usize,

    /// The sentence text, trimmed.
    pub text: String,
}

impl AnswerSentence {
    /// Create a new answer sentence.
    pub fn new<S: Into<String>>(index: usize, text: S) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// The attribution result for one answer sentence.
///
/// `citations` holds the indices (into the run's retrieved-chunk list) of
/// every chunk whose similarity to the sentence reached the attribution
/// threshold. It is empty if and only if no chunk reached the threshold,
/// regardless of how high `max_score` is below it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CitationRecord {
    /// The sentence text.
    pub sentence: String,

    /// Indices of supporting chunks, in chunk order.
    pub citations: Vec<usize>,

    /// Maximum similarity observed across all chunks, rounded to 3
    /// decimals, whether or not it cleared the threshold.
    pub max_score: f32,
}

impl CitationRecord {
    /// Create a new citation record.
    pub fn new<S: Into<String>>(sentence: S, citations: Vec<usize>, max_score: f32) -> Self {
        Self {
            sentence: sentence.into(),
            citations,
            max_score,
        }
    }

    /// Whether at least one chunk supports this sentence.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        !self.citations.is_empty()
    }
}
