//! Score-based sentence selection for extractive summarization.
//!
//! Each sentence is scored by the summed TF-IDF weight of its words,
//! normalized by word count; the top scorers are re-ordered back into
//! document position and joined verbatim.

use std::cmp::Ordering;

use tracing::warn;

use crate::nlp::tiered::Tiered;
use crate::nlp::tokenizer::{UnicodeWordTokenizer, WhitespaceTokenizer, WordTokenize};
use crate::tfidf::TfIdfTable;
use crate::types::Sentence;

/// Returned when sentence scoring cannot run at all.
pub const SUMMARY_FALLBACK: &str = "Could not generate summary.";

/// Selects the highest-scoring sentences for the summary.
///
/// Scoring tokenizes each lowercased sentence with the same tiered word
/// tokenizer segmentation uses — but with no stopword or alphabetic
/// filtering, so every word participates in the length normalization and
/// unscored words contribute zero weight.
#[derive(Debug)]
pub struct SentenceSelector<W = UnicodeWordTokenizer, V = WhitespaceTokenizer> {
    words: Tiered<W, V>,
}

impl SentenceSelector {
    pub fn new() -> Self {
        Self::from_parts(Tiered::new(UnicodeWordTokenizer, WhitespaceTokenizer))
    }
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, V> SentenceSelector<W, V> {
    /// Assemble a selector around an explicit tokenizer pair.
    pub fn from_parts(words: Tiered<W, V>) -> Self {
        Self { words }
    }

    /// Whether the tokenizer has latched its fallback tier.
    pub fn is_degraded(&self) -> bool {
        self.words.is_degraded()
    }
}

impl<W: WordTokenize, V: WordTokenize> SentenceSelector<W, V> {
    /// Build a summary of up to `n` sentences.
    ///
    /// Selected sentences are restored to ascending document order and
    /// joined with single spaces, original text intact. `n = 0` or an empty
    /// sentence list yields an empty string; a scoring failure yields
    /// [`SUMMARY_FALLBACK`].
    pub fn summarize(&self, sentences: &[Sentence], table: &TfIdfTable, n: usize) -> String {
        if sentences.is_empty() || n == 0 {
            return String::new();
        }

        let mut scored: Vec<(&Sentence, f64)> = Vec::with_capacity(sentences.len());
        for sentence in sentences {
            let words = match self.words.tokenize(&sentence.text.to_lowercase()) {
                Ok(outcome) => outcome.value,
                Err(err) => {
                    warn!(error = %err, "sentence scoring tokenization failed on both tiers");
                    return SUMMARY_FALLBACK.to_string();
                }
            };
            let total: f64 = words.iter().map(|w| table.weight_or_zero(w)).sum();
            // The +0.1 guards a zero-word sentence and mildly favors
            // shorter sentences over a pure length division.
            scored.push((sentence, total / (words.len() as f64 + 0.1)));
        }

        // Stable sort: equal scores keep the earlier sentence first.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let mut selected: Vec<&Sentence> = scored.iter().take(n).map(|(s, _)| *s).collect();
        selected.sort_by_key(|s| s.index);

        selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
