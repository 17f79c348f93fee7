//! Two-tier resource strategy.
//!
//! A [`Tiered`] pair holds a preferred provider and a fallback provider. The
//! preferred tier is used until its first failure; that failure flips a
//! monotonic latch and every later call goes straight to the fallback. The
//! latch is never cleared, so a degraded resource is not re-attempted per
//! call.

use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing::warn;

use crate::nlp::sentence::SentenceSplit;
use crate::nlp::tokenizer::WordTokenize;

/// A provider could not produce a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ResourceUnavailable(pub String);

impl ResourceUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// A value produced by one of the two tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierOutcome<T> {
    pub value: T,
    /// `true` when the fallback tier produced the value.
    pub degraded: bool,
}

/// Preferred provider with a latched fallback.
///
/// The latch is an `AtomicBool` written at most once (false → true), so a
/// `Tiered` can be shared across threads without further coordination.
#[derive(Debug)]
pub struct Tiered<P, F> {
    preferred: P,
    fallback: F,
    latched: AtomicBool,
}

impl<P, F> Tiered<P, F> {
    pub fn new(preferred: P, fallback: F) -> Self {
        Self {
            preferred,
            fallback,
            latched: AtomicBool::new(false),
        }
    }

    /// Whether the fallback tier has been latched in.
    pub fn is_degraded(&self) -> bool {
        self.latched.load(Ordering::Relaxed)
    }

    fn latch(&self, resource: &str, err: &ResourceUnavailable) {
        warn!(resource, error = %err, "preferred provider failed, switching to fallback");
        self.latched.store(true, Ordering::Relaxed);
    }
}

impl<P: SentenceSplit, F: SentenceSplit> Tiered<P, F> {
    /// Split `text` into sentences with the active tier.
    ///
    /// Errors only if the fallback tier itself fails.
    pub fn split(&self, text: &str) -> Result<TierOutcome<Vec<String>>, ResourceUnavailable> {
        if !self.is_degraded() {
            match self.preferred.split(text) {
                Ok(value) => {
                    return Ok(TierOutcome {
                        value,
                        degraded: false,
                    })
                }
                Err(err) => self.latch("sentence splitter", &err),
            }
        }
        self.fallback.split(text).map(|value| TierOutcome {
            value,
            degraded: true,
        })
    }
}

impl<P: WordTokenize, F: WordTokenize> Tiered<P, F> {
    /// Tokenize `text` into words with the active tier.
    ///
    /// Errors only if the fallback tier itself fails.
    pub fn tokenize(&self, text: &str) -> Result<TierOutcome<Vec<String>>, ResourceUnavailable> {
        if !self.is_degraded() {
            match self.preferred.tokenize(text) {
                Ok(value) => {
                    return Ok(TierOutcome {
                        value,
                        degraded: false,
                    })
                }
                Err(err) => self.latch("word tokenizer", &err),
            }
        }
        self.fallback.tokenize(text).map(|value| TierOutcome {
            value,
            degraded: true,
        })
    }
}
