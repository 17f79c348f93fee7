//! Shared domain types and pipeline configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A sentence produced by segmentation.
///
/// Keeps the original casing and punctuation (the summary quotes sentences
/// verbatim) plus a stable index — the sentence's position in the source
/// document, which is the only ordering key that survives scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Original sentence text, untouched.
    pub text: String,
    /// Position in the source document (0-based).
    pub index: usize,
}

impl Sentence {
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }
}

/// A ranked keyword with its TF-IDF weight.
///
/// Weights can be zero or negative — a term appearing in every sentence has
/// a negative idf and no floor is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub term: String,
    pub weight: f64,
}

impl Keyword {
    pub fn new(term: impl Into<String>, weight: f64) -> Self {
        Self {
            term: term.into(),
            weight,
        }
    }
}

/// A preferred resource that fell back to its degraded tier.
///
/// Degradations are data, not errors: the pipeline output is still valid,
/// callers and tests can assert on why a fallback occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degradation {
    /// The pattern-based sentence splitter failed; terminator split used.
    SentenceSplitter,
    /// The Unicode word tokenizer failed; whitespace split used.
    WordTokenizer,
    /// The curated stopword list was unusable; built-in list used.
    Stopwords,
}

/// Why segmentation produced an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// Trimmed input shorter than the configured minimum.
    #[error("text is too short to analyze")]
    TooShort,
    /// Sentence splitting yielded nothing.
    #[error("no sentences found in text")]
    NoSentences,
    /// Fewer content tokens survived filtering than the configured minimum.
    #[error("too few content words survived filtering")]
    TooFewTokens,
}

/// Pipeline-boundary error, for the caller to map to a client response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GistError {
    #[error("insufficient input: {0}")]
    InsufficientInput(RejectionReason),
}

/// Tuning knobs for the analysis pipeline.
///
/// Defaults match the intended product behavior: 5 keywords, a 3-sentence
/// summary, and input guards of 10 trimmed characters / 5 surviving tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistConfig {
    /// Number of top keywords to return.
    pub num_keywords: usize,
    /// Number of sentences to select for the summary.
    pub num_sentences: usize,
    /// Minimum trimmed input length, in characters.
    pub min_chars: usize,
    /// Minimum number of filtered tokens required for scoring.
    pub min_tokens: usize,
}

impl Default for GistConfig {
    fn default() -> Self {
        Self {
            num_keywords: 5,
            num_sentences: 3,
            min_chars: 10,
            min_tokens: 5,
        }
    }
}

impl GistConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of keywords to return.
    pub fn with_num_keywords(mut self, k: usize) -> Self {
        self.num_keywords = k;
        self
    }

    /// Set the number of summary sentences.
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.num_sentences = n;
        self
    }

    /// Set the minimum trimmed input length.
    pub fn with_min_chars(mut self, chars: usize) -> Self {
        self.min_chars = chars;
        self
    }

    /// Set the minimum surviving-token count.
    pub fn with_min_tokens(mut self, tokens: usize) -> Self {
        self.min_tokens = tokens;
        self
    }
}
