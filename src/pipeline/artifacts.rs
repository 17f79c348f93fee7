//! Typed pipeline artifacts.
//!
//! [`SegmentOutput`] flows out of segmentation and carries the reason for an
//! empty result instead of burying it in a log line. [`GistResult`] is the
//! public, serializable contract handed to callers.

use serde::{Deserialize, Serialize};

use crate::types::{Degradation, Keyword, RejectionReason, Sentence};

/// Result of segmenting a document into tokens and sentences.
///
/// An empty `tokens`/`sentences` pair always comes with a `rejection`
/// explaining why; `degradations` lists any preferred resources that fell
/// back along the way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SegmentOutput {
    /// All filtered tokens across all sentences, duplicates preserved.
    pub tokens: Vec<String>,
    /// Sentences in document order, original text intact.
    pub sentences: Vec<Sentence>,
    /// Fallbacks that occurred during segmentation.
    pub degradations: Vec<Degradation>,
    /// Present when the input could not be segmented into a usable stream.
    pub rejection: Option<RejectionReason>,
}

impl SegmentOutput {
    /// An empty output with a reason attached.
    pub fn rejected(reason: RejectionReason, degradations: Vec<Degradation>) -> Self {
        Self {
            tokens: Vec::new(),
            sentences: Vec::new(),
            degradations,
            rejection: Some(reason),
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }
}

/// Final pipeline product: the summary plus the ranked keywords.
///
/// Serializes to the `{summary, top_keywords}` shape the serving layer
/// returns; degradations are included only when any occurred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GistResult {
    /// Extractive summary: selected sentences in document order, joined
    /// with single spaces.
    pub summary: String,
    /// Keywords sorted by weight descending.
    pub top_keywords: Vec<Keyword>,
    /// Fallbacks that occurred while producing this result.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub degradations: Vec<Degradation>,
}
