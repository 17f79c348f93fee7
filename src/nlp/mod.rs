//! Natural language processing components
//!
//! Sentence splitting, word tokenization, and stopword filtering. The
//! splitters and tokenizers come in a preferred and a fallback flavor, paired
//! at runtime by [`tiered::Tiered`].

pub mod sentence;
pub mod stopwords;
pub mod tiered;
pub mod tokenizer;

pub use sentence::{PatternSplitter, SentenceSplit, TerminatorSplitter};
pub use stopwords::{StopwordFilter, StopwordSource};
pub use tiered::{ResourceUnavailable, TierOutcome, Tiered};
pub use tokenizer::{UnicodeWordTokenizer, WhitespaceTokenizer, WordTokenize};
