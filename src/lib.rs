//! # textgist
//!
//! Unsupervised keyword extraction and extractive summarization for single
//! documents. No trained model: sentences act as the corpus for a TF-IDF
//! weighting over the document's own words, keywords are the top-weighted
//! terms, and the summary is the highest-scoring sentences quoted verbatim
//! in document order.
//!
//! ## Pipeline
//!
//! [`Pipeline::run`] applies four stages in strict sequence:
//!
//! 1. **Segment** — sentences plus a stopword-filtered token stream, with
//!    tiered fallbacks for the sentence splitter and word tokenizer
//! 2. **Score** — TF-IDF weight per distinct token
//! 3. **Rank** — top keywords by weight
//! 4. **Summarize** — top sentences restored to document order
//!
//! ```
//! use textgist::Pipeline;
//!
//! let text = "Cats are small mammals. Cats often live with humans. \
//!             Many people love cats as pets.";
//! let result = Pipeline::new().run(text)?;
//! assert!(!result.summary.is_empty());
//! assert_eq!(result.top_keywords.len(), 5);
//! # Ok::<(), textgist::GistError>(())
//! ```
//!
//! Degraded resources (fallback splitter or tokenizer, built-in stopword
//! list) never fail a run; they surface as [`Degradation`] entries on the
//! result. Unusable input surfaces as [`GistError::InsufficientInput`] with
//! a typed [`RejectionReason`].

pub mod nlp;
pub mod pipeline;
pub mod segmenter;
pub mod summarizer;
pub mod tfidf;
pub mod types;

pub use pipeline::{GistResult, Pipeline, SegmentOutput};
pub use segmenter::Segmenter;
pub use summarizer::{SentenceSelector, SUMMARY_FALLBACK};
pub use tfidf::TfIdfTable;
pub use types::{
    Degradation, GistConfig, GistError, Keyword, RejectionReason, Sentence,
};

/// Segment `text` with a default-configured [`Segmenter`].
///
/// Convenience wrapper for one-off calls; construct a [`Segmenter`] (or a
/// [`Pipeline`]) to reuse the loaded stopword set.
pub fn preprocess(text: &str) -> SegmentOutput {
    Segmenter::new().segment(text)
}

/// Compute TF-IDF weights for `tokens` over `sentences`.
pub fn score(tokens: &[String], sentences: &[Sentence]) -> TfIdfTable {
    tfidf::score(tokens, sentences)
}

/// The `k` highest-weighted keywords from `table`, descending.
pub fn top_keywords(table: &TfIdfTable, k: usize) -> Vec<Keyword> {
    summarizer::top_keywords(table, k)
}

/// Build an extractive summary of up to `n` sentences.
pub fn summarize(sentences: &[Sentence], table: &TfIdfTable, n: usize) -> String {
    SentenceSelector::new().summarize(sentences, table, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions_compose_like_the_pipeline() {
        let text = "Cats are small mammals. Cats often live with humans. \
                    Many people love cats as pets.";
        let segmented = preprocess(text);
        assert!(segmented.rejection.is_none());

        let table = score(&segmented.tokens, &segmented.sentences);
        let keywords = top_keywords(&table, 5);
        let summary = summarize(&segmented.sentences, &table, 3);

        let piped = Pipeline::new().run(text).unwrap();
        assert_eq!(piped.top_keywords, keywords);
        assert_eq!(piped.summary, summary);
    }
}
