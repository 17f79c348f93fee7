//! Stopword filtering.
//!
//! The curated English list from the `stop-words` crate is the preferred
//! source; a built-in list of common function words is the degraded mode.
//! Loading never fails — an unusable curated list only switches the source.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};
use tracing::warn;

/// Which list is backing the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwordSource {
    /// Curated list from the `stop-words` crate.
    Curated,
    /// Built-in function-word list.
    Builtin,
}

/// Words excluded from keyword and frequency analysis.
///
/// `is_stopword` is case-insensitive; the backing set is lowercase.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
    source: StopwordSource,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl StopwordFilter {
    /// Load the curated English list, degrading to the built-in list if the
    /// curated source comes back unusable.
    pub fn new() -> Self {
        let curated: FxHashSet<String> = get(LANGUAGE::English)
            .iter()
            .map(|w| w.to_lowercase())
            .collect();
        if curated.is_empty() {
            warn!("curated stopword list unavailable, using built-in list");
            return Self::builtin();
        }
        Self {
            stopwords: curated,
            source: StopwordSource::Curated,
        }
    }

    /// The built-in fallback list, directly.
    pub fn builtin() -> Self {
        Self {
            stopwords: FALLBACK_STOPWORDS.iter().map(|w| w.to_string()).collect(),
            source: StopwordSource::Builtin,
        }
    }

    /// Build a filter from a custom list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
            source: StopwordSource::Builtin,
        }
    }

    pub fn source(&self) -> StopwordSource {
        self.source
    }

    /// Check if a word is a stopword.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

/// Common English function words: pronouns, auxiliaries, prepositions,
/// conjunctions, determiners.
const FALLBACK_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
    "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "can", "will",
    "just", "should", "now",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_filter() {
        let filter = StopwordFilter::new();
        assert_eq!(filter.source(), StopwordSource::Curated);
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The")); // case insensitive
        assert!(filter.is_stopword("are"));
        assert!(!filter.is_stopword("cats"));
        assert!(!filter.is_stopword("mammals"));
    }

    #[test]
    fn test_builtin_filter_covers_common_function_words() {
        let filter = StopwordFilter::builtin();
        assert_eq!(filter.source(), StopwordSource::Builtin);
        for word in ["are", "with", "as", "the", "of", "and"] {
            assert!(filter.is_stopword(word), "{word} should be a stopword");
        }
        assert!(!filter.is_stopword("cats"));
    }

    #[test]
    fn test_builtin_list_size() {
        let filter = StopwordFilter::builtin();
        assert!(filter.len() >= 110, "builtin list is {} words", filter.len());
    }

    #[test]
    fn test_custom_list() {
        let filter = StopwordFilter::from_list(&["Foo", "bar"]);
        assert!(filter.is_stopword("foo"));
        assert!(filter.is_stopword("BAR"));
        assert!(!filter.is_stopword("the"));
    }

    #[test]
    fn test_tiers_agree_on_core_function_words() {
        // The degraded mode must keep filtering the words that matter most.
        let curated = StopwordFilter::new();
        let builtin = StopwordFilter::builtin();
        for word in ["are", "with", "as", "is", "the", "a", "of"] {
            assert_eq!(curated.is_stopword(word), builtin.is_stopword(word));
        }
    }
}
