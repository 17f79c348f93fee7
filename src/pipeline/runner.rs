//! Pipeline runner — strict-sequence stage execution.
//!
//! [`Pipeline`] composes the four stages (segment → score → rank →
//! summarize) and threads the typed artifacts between them. Stages run in
//! order on the calling thread; each one executes under a tracing span.
//!
//! The pipeline is generic over the segmentation strategy tiers so tests can
//! inject failing providers; the defaults are the shipped strategies and
//! monomorphize to the common case.

use crate::nlp::sentence::{PatternSplitter, SentenceSplit, TerminatorSplitter};
use crate::nlp::tokenizer::{UnicodeWordTokenizer, WhitespaceTokenizer, WordTokenize};
use crate::pipeline::artifacts::GistResult;
use crate::segmenter::Segmenter;
use crate::summarizer::{top_keywords, SentenceSelector};
use crate::tfidf;
use crate::types::{Degradation, GistConfig, GistError};

const STAGE_SEGMENT: &str = "segment";
const STAGE_SCORE: &str = "score";
const STAGE_RANK: &str = "rank";
const STAGE_SUMMARIZE: &str = "summarize";

/// Enter a tracing span for a pipeline stage.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::debug_span!("pipeline_stage", stage = $name).entered();
    };
}

/// The full analysis pipeline.
///
/// Type parameters are the preferred/fallback tiers of the sentence splitter
/// (`S`, `T`) and of the word tokenizer (`W`, `V`); the word tokenizer pair
/// is shared by segmentation and sentence scoring.
#[derive(Debug)]
pub struct Pipeline<
    S = PatternSplitter,
    T = TerminatorSplitter,
    W = UnicodeWordTokenizer,
    V = WhitespaceTokenizer,
> {
    segmenter: Segmenter<S, T, W, V>,
    selector: SentenceSelector<W, V>,
    config: GistConfig,
}

impl Pipeline {
    /// Default strategies, default configuration.
    pub fn new() -> Self {
        Self::with_config(GistConfig::default())
    }

    /// Default strategies with an explicit configuration.
    pub fn with_config(config: GistConfig) -> Self {
        let segmenter = Segmenter::with_config(&config);
        let selector = SentenceSelector::new();
        Self {
            segmenter,
            selector,
            config,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, T, W, V> Pipeline<S, T, W, V> {
    /// Assemble a pipeline from explicit components.
    pub fn from_parts(
        segmenter: Segmenter<S, T, W, V>,
        selector: SentenceSelector<W, V>,
        config: GistConfig,
    ) -> Self {
        Self {
            segmenter,
            selector,
            config,
        }
    }

    pub fn config(&self) -> &GistConfig {
        &self.config
    }
}

impl<S, T, W, V> Pipeline<S, T, W, V>
where
    S: SentenceSplit,
    T: SentenceSplit,
    W: WordTokenize,
    V: WordTokenize,
{
    /// Run the pipeline over `text`.
    ///
    /// Stages run in order:
    /// 1. Segment into sentences and the filtered token stream
    /// 2. Score tokens (TF-IDF over sentences)
    /// 3. Rank top keywords
    /// 4. Select and order summary sentences
    ///
    /// An input the segmenter rejects surfaces as
    /// [`GistError::InsufficientInput`]; resource fallbacks ride along on the
    /// result as [`Degradation`] entries.
    pub fn run(&self, text: &str) -> Result<GistResult, GistError> {
        let segmented = {
            trace_stage!(STAGE_SEGMENT);
            self.segmenter.segment(text)
        };
        if let Some(reason) = segmented.rejection {
            return Err(GistError::InsufficientInput(reason));
        }

        let table = {
            trace_stage!(STAGE_SCORE);
            tfidf::score(&segmented.tokens, &segmented.sentences)
        };

        let keywords = {
            trace_stage!(STAGE_RANK);
            top_keywords(&table, self.config.num_keywords)
        };

        let summary = {
            trace_stage!(STAGE_SUMMARIZE);
            self.selector
                .summarize(&segmented.sentences, &table, self.config.num_sentences)
        };

        let mut degradations = segmented.degradations;
        if self.selector.is_degraded() && !degradations.contains(&Degradation::WordTokenizer) {
            degradations.push(Degradation::WordTokenizer);
        }

        Ok(GistResult {
            summary,
            top_keywords: keywords,
            degradations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordFilter;
    use crate::nlp::tiered::{ResourceUnavailable, Tiered};
    use crate::types::RejectionReason;

    const CATS: &str =
        "Cats are small mammals. Cats often live with humans. Many people love cats as pets.";

    #[test]
    fn test_run_produces_summary_and_keywords() {
        let result = Pipeline::new().run(CATS).unwrap();
        assert!(!result.summary.is_empty());
        assert_eq!(result.top_keywords.len(), 5);
        assert!(result.degradations.is_empty());
        for pair in result.top_keywords.windows(2) {
            assert!(pair[0].weight >= pair[1].weight);
        }
    }

    #[test]
    fn test_short_input_is_insufficient() {
        let err = Pipeline::new().run("Too short").unwrap_err();
        assert_eq!(
            err,
            GistError::InsufficientInput(RejectionReason::TooShort)
        );
    }

    #[test]
    fn test_sparse_input_is_insufficient() {
        let err = Pipeline::new().run("Cats sleep. Cats purr.").unwrap_err();
        assert_eq!(
            err,
            GistError::InsufficientInput(RejectionReason::TooFewTokens)
        );
    }

    #[test]
    fn test_run_is_idempotent() {
        let pipeline = Pipeline::new();
        assert_eq!(pipeline.run(CATS).unwrap(), pipeline.run(CATS).unwrap());
    }

    #[test]
    fn test_single_sentence_summary_config() {
        let pipeline = Pipeline::with_config(GistConfig::default().with_num_sentences(1));
        let result = pipeline.run(CATS).unwrap();
        assert_eq!(result.summary, "Many people love cats as pets.");
    }

    #[test]
    fn test_degradations_surface_on_result() {
        struct Unavailable;

        impl SentenceSplit for Unavailable {
            fn split(&self, _text: &str) -> Result<Vec<String>, ResourceUnavailable> {
                Err(ResourceUnavailable::new("splitter missing"))
            }
        }

        let config = GistConfig::default();
        let segmenter = Segmenter::from_parts(
            Tiered::new(Unavailable, TerminatorSplitter),
            Tiered::new(UnicodeWordTokenizer, WhitespaceTokenizer),
            StopwordFilter::new(),
            &config,
        );
        let pipeline = Pipeline::from_parts(segmenter, SentenceSelector::new(), config);

        let result = pipeline.run(CATS).unwrap();
        assert_eq!(result.degradations, vec![Degradation::SentenceSplitter]);
        assert!(!result.summary.is_empty());
    }
}
