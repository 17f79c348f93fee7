//! Sentence splitting strategies.
//!
//! [`PatternSplitter`] is the preferred tier: it protects periods that do not
//! end a sentence (titles, initials, abbreviations, decimals, ellipses)
//! behind a placeholder, splits on terminator runs, then repairs the
//! placeholders. [`TerminatorSplitter`] is the fallback tier: a plain split
//! on whitespace that follows `.`, `!`, or `?`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::nlp::tiered::ResourceUnavailable;

/// Splits text into sentences.
///
/// The preferred implementation may fail (modeled after splitters backed by
/// an external resource); the fallback implementations never do.
pub trait SentenceSplit {
    fn split(&self, text: &str) -> Result<Vec<String>, ResourceUnavailable>;
}

/// Placeholder for a protected (non-terminating) period.
/// Private-use codepoint, vanishingly unlikely in natural text.
const PROTECTED_DOT: char = '\u{F8FF}';
const PROTECTED_STR: &str = "\u{F8FF}";

static ELLIPSIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{3}").unwrap());

static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?P<a>[0-9])\.(?P<b>[0-9])").unwrap());

// Two or more single-letter-dot groups: U.S.A., e.g., i.e.
static ABBREVIATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:[A-Za-z]\.){2,}").unwrap());

static TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?P<t>Mr|Mrs|Ms|Dr|Prof|Rev|Gen|Sen|Rep|St|Sgt|Capt|Lt|Col|Jr|Sr|vs|etc|al|Inc|Ltd|Co|Corp|Fig|No)\.")
        .unwrap()
});

static INITIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?P<i>[A-Z])\.").unwrap());

// A run of sentence terminators followed by whitespace marks a boundary.
static TERMINATOR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+\s+").unwrap());

// Fallback boundary: whitespace following a single terminator.
static TERMINATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Pattern-and-repair sentence splitter.
///
/// Handles the common cases a bare terminator split gets wrong:
/// `Dr. Smith`, `J. K. Rowling`, `U.S.A.`, `3.14`, `wait...`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternSplitter;

impl SentenceSplit for PatternSplitter {
    fn split(&self, text: &str) -> Result<Vec<String>, ResourceUnavailable> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let protected = protect(text);
        let sentences = split_at_boundaries(&protected, &TERMINATOR_RUN)
            .into_iter()
            .map(|s| s.replace(PROTECTED_DOT, "."))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Ok(sentences)
    }
}

/// Replace non-terminating periods with [`PROTECTED_DOT`].
fn protect(text: &str) -> String {
    let mut out = ELLIPSIS
        .replace_all(text, "\u{F8FF}\u{F8FF}\u{F8FF}")
        .into_owned();
    out = DECIMAL
        .replace_all(&out, |caps: &Captures| {
            format!("{}{}{}", &caps["a"], PROTECTED_DOT, &caps["b"])
        })
        .into_owned();
    out = ABBREVIATION
        .replace_all(&out, |caps: &Captures| caps[0].replace('.', PROTECTED_STR))
        .into_owned();
    out = TITLE
        .replace_all(&out, |caps: &Captures| {
            format!("{}{}", &caps["t"], PROTECTED_DOT)
        })
        .into_owned();
    out = INITIAL
        .replace_all(&out, |caps: &Captures| {
            format!("{}{}", &caps["i"], PROTECTED_DOT)
        })
        .into_owned();
    out
}

/// Cut `text` at every boundary match, keeping the terminator run with the
/// preceding sentence and dropping the whitespace.
fn split_at_boundaries(text: &str, boundary: &Regex) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for m in boundary.find_iter(text) {
        // The terminators are ASCII; trimming the trailing whitespace off the
        // match leaves their byte length.
        let punct_len = m.as_str().trim_end().len();
        pieces.push(text[last..m.start() + punct_len].to_string());
        last = m.end();
    }
    if last < text.len() {
        pieces.push(text[last..].to_string());
    }
    pieces
}

/// Fallback splitter: break on whitespace that follows `.`, `!`, or `?`.
///
/// No abbreviation handling; `Dr. Smith` becomes two pieces. Good enough to
/// keep the pipeline producing output when the preferred tier is out.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminatorSplitter;

impl SentenceSplit for TerminatorSplitter {
    fn split(&self, text: &str) -> Result<Vec<String>, ResourceUnavailable> {
        let sentences = split_at_boundaries(text, &TERMINATOR)
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Ok(sentences)
    }
}
