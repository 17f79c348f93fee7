//! Keyword ranking over a TF-IDF table.

use std::cmp::Ordering;

use crate::tfidf::TfIdfTable;
use crate::types::Keyword;

/// The `k` highest-weighted terms, descending.
///
/// The sort is stable over the table's first-occurrence order, so
/// equal-weight terms rank in the order they first appeared in the token
/// stream. Returns fewer than `k` entries when the table is smaller; `k = 0`
/// returns an empty list.
pub fn top_keywords(table: &TfIdfTable, k: usize) -> Vec<Keyword> {
    let mut keywords: Vec<Keyword> = table.iter().map(|(t, w)| Keyword::new(t, w)).collect();
    keywords.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal));
    keywords.truncate(k);
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tfidf::score;
    use crate::types::Sentence;

    fn table_for(tokens: &[&str], sentences: &[&str]) -> TfIdfTable {
        let tokens: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        let sentences: Vec<Sentence> = sentences
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(*t, i))
            .collect();
        score(&tokens, &sentences)
    }

    #[test]
    fn test_sorted_non_increasing() {
        let table = table_for(
            &["comet", "comet", "comet", "dust", "tail", "tail"],
            &["The comet had a dust tail.", "The comet returned.", "Nothing else."],
        );
        let keywords = top_keywords(&table, 10);
        for pair in keywords.windows(2) {
            assert!(pair[0].weight >= pair[1].weight);
        }
    }

    #[test]
    fn test_length_is_min_of_k_and_distinct() {
        let table = table_for(&["one", "two", "three"], &["One two three.", "Nothing."]);
        assert_eq!(top_keywords(&table, 2).len(), 2);
        assert_eq!(top_keywords(&table, 3).len(), 3);
        assert_eq!(top_keywords(&table, 50).len(), 3);
    }

    #[test]
    fn test_k_zero_and_empty_table() {
        let table = table_for(&["one"], &["One."]);
        assert!(top_keywords(&table, 0).is_empty());
        assert!(top_keywords(&TfIdfTable::default(), 5).is_empty());
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        // All three terms have df = 1 of S = 2 and tf = 1: identical weights.
        let table = table_for(&["zebra", "apple", "mango"], &["Zebra apple mango.", "Filler."]);
        let keywords = top_keywords(&table, 3);
        let terms: Vec<&str> = keywords.iter().map(|k| k.term.as_str()).collect();
        assert_eq!(terms, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_negative_weights_rank_last() {
        let table = table_for(
            &["rust", "rust", "speed"],
            &["Rust has speed.", "Rust endures."],
        );
        // df(rust) = 2 of S = 2 → negative; df(speed) = 1 → ln(2/2) = 0.
        let keywords = top_keywords(&table, 2);
        assert_eq!(keywords[0].term, "speed");
        assert_eq!(keywords[1].term, "rust");
        assert!(keywords[1].weight < 0.0);
    }
}
