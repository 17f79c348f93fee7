//! Keyword ranking and extractive sentence selection.

pub mod keywords;
pub mod selector;

pub use keywords::top_keywords;
pub use selector::{SentenceSelector, SUMMARY_FALLBACK};
