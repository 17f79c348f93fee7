//! Document segmentation: sentences plus the filtered token stream.
//!
//! Splits raw text into sentences, then extracts normalized word tokens per
//! sentence — lowercased, stripped to word characters/whitespace/periods,
//! tokenized, and filtered to alphabetic non-stopwords. Both the sentence
//! splitter and the word tokenizer are tiered; fallbacks surface as
//! [`Degradation`] entries on the output rather than errors.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::nlp::sentence::{PatternSplitter, SentenceSplit, TerminatorSplitter};
use crate::nlp::stopwords::{StopwordFilter, StopwordSource};
use crate::nlp::tiered::Tiered;
use crate::nlp::tokenizer::{UnicodeWordTokenizer, WhitespaceTokenizer, WordTokenize};
use crate::pipeline::artifacts::SegmentOutput;
use crate::types::{Degradation, GistConfig, RejectionReason, Sentence};

// Keep word characters, whitespace, and periods; drop everything else.
// Periods survive only until tokenization, which discards them.
static STRIP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s.]").unwrap());

/// Sentence and token extraction with tiered fallbacks.
///
/// Type parameters are the two tiers of the sentence splitter and the two
/// tiers of the word tokenizer; the defaults are the shipped strategies.
#[derive(Debug)]
pub struct Segmenter<
    S = PatternSplitter,
    T = TerminatorSplitter,
    W = UnicodeWordTokenizer,
    V = WhitespaceTokenizer,
> {
    sentences: Tiered<S, T>,
    words: Tiered<W, V>,
    stopwords: StopwordFilter,
    min_chars: usize,
    min_tokens: usize,
}

impl Segmenter {
    /// Default strategies and default input guards.
    pub fn new() -> Self {
        Self::with_config(&GistConfig::default())
    }

    /// Default strategies with the guards taken from `cfg`.
    pub fn with_config(cfg: &GistConfig) -> Self {
        Self::from_parts(
            Tiered::new(PatternSplitter, TerminatorSplitter),
            Tiered::new(UnicodeWordTokenizer, WhitespaceTokenizer),
            StopwordFilter::new(),
            cfg,
        )
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, T, W, V> Segmenter<S, T, W, V> {
    /// Assemble a segmenter from explicit strategy tiers and stopword set.
    pub fn from_parts(
        sentences: Tiered<S, T>,
        words: Tiered<W, V>,
        stopwords: StopwordFilter,
        cfg: &GistConfig,
    ) -> Self {
        Self {
            sentences,
            words,
            stopwords,
            min_chars: cfg.min_chars,
            min_tokens: cfg.min_tokens,
        }
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }
}

impl<S, T, W, V> Segmenter<S, T, W, V>
where
    S: SentenceSplit,
    T: SentenceSplit,
    W: WordTokenize,
    V: WordTokenize,
{
    /// Segment `text` into sentences and the aggregate filtered token stream.
    ///
    /// Returns a rejected (empty) output when the trimmed input is shorter
    /// than the minimum, no sentences are found, or fewer tokens than the
    /// minimum survive filtering. Nothing propagates out of this method.
    pub fn segment(&self, text: &str) -> SegmentOutput {
        let mut degradations = Vec::new();
        if self.stopwords.source() == StopwordSource::Builtin {
            degradations.push(Degradation::Stopwords);
        }

        let trimmed_chars = text.trim().chars().count();
        if trimmed_chars < self.min_chars {
            debug!(chars = trimmed_chars, "input below minimum length");
            return SegmentOutput::rejected(RejectionReason::TooShort, degradations);
        }

        let raw_sentences = match self.sentences.split(text) {
            Ok(outcome) => {
                if outcome.degraded {
                    push_unique(&mut degradations, Degradation::SentenceSplitter);
                }
                outcome.value
            }
            Err(err) => {
                warn!(error = %err, "sentence splitting failed on both tiers");
                return SegmentOutput::rejected(RejectionReason::NoSentences, degradations);
            }
        };
        if raw_sentences.is_empty() {
            return SegmentOutput::rejected(RejectionReason::NoSentences, degradations);
        }

        let mut tokens = Vec::new();
        for sentence in &raw_sentences {
            let lowered = sentence.to_lowercase();
            let cleaned = STRIP.replace_all(&lowered, "");
            let words = match self.words.tokenize(&cleaned) {
                Ok(outcome) => {
                    if outcome.degraded {
                        push_unique(&mut degradations, Degradation::WordTokenizer);
                    }
                    outcome.value
                }
                Err(err) => {
                    warn!(error = %err, "word tokenization failed on both tiers");
                    continue;
                }
            };
            tokens.extend(
                words
                    .into_iter()
                    .filter(|w| is_content_word(w) && !self.stopwords.is_stopword(w)),
            );
        }

        if tokens.len() < self.min_tokens {
            debug!(tokens = tokens.len(), "too few tokens survived filtering");
            return SegmentOutput::rejected(RejectionReason::TooFewTokens, degradations);
        }

        let sentences = raw_sentences
            .into_iter()
            .enumerate()
            .map(|(index, text)| Sentence { text, index })
            .collect();

        SegmentOutput {
            tokens,
            sentences,
            degradations,
            rejection: None,
        }
    }
}

/// Wholly alphabetic and non-empty; numbers and residual fragments drop out.
fn is_content_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

fn push_unique(degradations: &mut Vec<Degradation>, degradation: Degradation) {
    if !degradations.contains(&degradation) {
        degradations.push(degradation);
    }
}
