//! Word tokenization strategies.
//!
//! [`UnicodeWordTokenizer`] (preferred) walks UAX-29 word boundaries;
//! [`WhitespaceTokenizer`] (fallback) strips everything that is not a word
//! character or whitespace, then splits on whitespace.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::nlp::tiered::ResourceUnavailable;

/// Tokenizes text into words.
///
/// Punctuation-only segments never count as words under either tier.
pub trait WordTokenize {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, ResourceUnavailable>;
}

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Preferred tier: Unicode word-boundary tokenization.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordTokenizer;

impl WordTokenize for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, ResourceUnavailable> {
        Ok(text.unicode_words().map(str::to_string).collect())
    }
}

/// Fallback tier: strip non-word characters, split on whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WordTokenize for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, ResourceUnavailable> {
        let stripped = NON_WORD.replace_all(text, "");
        Ok(stripped
            .split_whitespace()
            .map(str::to_string)
            .collect())
    }
}
