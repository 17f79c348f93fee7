//! TF-IDF scoring with sentences as the corpus documents.
//!
//! Term frequency is the raw token count. Document frequency is a substring
//! containment count over lowercased raw sentence text — a short term can
//! match inside a longer word (`art` in `start`). Inverse document frequency
//! is `ln(S / (1 + df))` with no floor, so a term present in most sentences
//! carries a negative weight.

use rustc_hash::FxHashMap;

use crate::types::Sentence;

/// One weight per distinct token, held in first-occurrence order.
///
/// First-occurrence order is the documented tie-break for ranking: a stable
/// sort over `iter()` keeps earlier-seen terms ahead of later ones at equal
/// weight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TfIdfTable {
    entries: Vec<(String, f64)>,
    index: FxHashMap<String, usize>,
}

impl TfIdfTable {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::default(),
        }
    }

    fn push(&mut self, term: String, weight: f64) {
        debug_assert!(!self.index.contains_key(&term), "duplicate term {term}");
        self.index.insert(term.clone(), self.entries.len());
        self.entries.push((term, weight));
    }

    /// Weight for `term`, if it was scored.
    pub fn get(&self, term: &str) -> Option<f64> {
        self.index.get(term).map(|&i| self.entries[i].1)
    }

    /// Weight for `term`, or `0.0` for unscored terms (stopwords, numbers).
    pub fn weight_or_zero(&self, term: &str) -> f64 {
        self.get(term).unwrap_or(0.0)
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(t, w)| (t.as_str(), *w))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compute TF-IDF weights for every distinct token in the stream.
///
/// Empty tokens or sentences yield an empty table.
pub fn score(tokens: &[String], sentences: &[Sentence]) -> TfIdfTable {
    if tokens.is_empty() || sentences.is_empty() {
        return TfIdfTable::default();
    }

    // Raw term frequency, recording first-seen order.
    let mut tf: FxHashMap<&str, usize> = FxHashMap::default();
    let mut order: Vec<&str> = Vec::new();
    for token in tokens {
        let count = tf.entry(token.as_str()).or_insert(0);
        if *count == 0 {
            order.push(token.as_str());
        }
        *count += 1;
    }

    let lowered: Vec<String> = sentences.iter().map(|s| s.text.to_lowercase()).collect();
    let total = sentences.len() as f64;

    let mut table = TfIdfTable::with_capacity(order.len());
    for term in order {
        // Substring containment, not token membership.
        let df = lowered.iter().filter(|s| s.contains(term)).count();
        let idf = (total / (1.0 + df as f64)).ln();
        table.push(term.to_string(), tf[term] as f64 * idf);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn sents(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(*t, i))
            .collect()
    }

    #[test]
    fn test_empty_inputs_give_empty_table() {
        assert!(score(&[], &sents(&["One."])).is_empty());
        assert!(score(&toks(&["one"]), &[]).is_empty());
        assert!(score(&[], &[]).is_empty());
    }

    #[test]
    fn test_single_sentence_negative_weight() {
        // S = 1, df = 1: idf = ln(1/2) < 0, so tfidf < 0 for positive tf.
        let table = score(&toks(&["cats"]), &sents(&["Cats sleep."]));
        let weight = table.get("cats").unwrap();
        assert!((weight - 0.5f64.ln()).abs() < 1e-12);
        assert!(weight < 0.0);
    }

    #[test]
    fn test_term_frequency_is_raw_count() {
        let sentences = sents(&["Cats sleep.", "Dogs bark.", "Birds sing."]);
        let table = score(&toks(&["cats", "cats", "dogs"]), &sentences);
        // Same idf (df = 1 of S = 3); "cats" counted twice, not normalized.
        let idf = (3.0f64 / 2.0).ln();
        assert!((table.get("cats").unwrap() - 2.0 * idf).abs() < 1e-12);
        assert!((table.get("dogs").unwrap() - idf).abs() < 1e-12);
    }

    #[test]
    fn test_idf_uses_add_one_denominator() {
        let sentences = sents(&["The comet returned.", "Nobody saw it.", "Records remained."]);
        let table = score(&toks(&["comet", "records"]), &sentences);
        // df = 1 of S = 3: idf = ln(3/2).
        let expected = (3.0f64 / 2.0).ln();
        assert!((table.get("comet").unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_term_in_every_sentence_goes_negative() {
        let sentences = sents(&["Rust is fast.", "Rust is safe.", "Rust is fun."]);
        let table = score(&toks(&["rust", "rust", "rust", "fast", "safe", "fun"]), &sentences);
        // df = 3 of S = 3: idf = ln(3/4) < 0, tf = 3.
        let expected = 3.0 * (3.0f64 / 4.0).ln();
        assert!((table.get("rust").unwrap() - expected).abs() < 1e-12);
        assert!(table.get("rust").unwrap() < 0.0);
    }

    #[test]
    fn test_document_frequency_matches_substrings() {
        // "art" matches inside "start": the containment check is over raw
        // sentence text, not the sentence's own token set.
        let sentences = sents(&["Art moves people.", "They start early."]);
        let table = score(&toks(&["art"]), &sentences);
        // df = 2 of S = 2: idf = ln(2/3).
        let expected = (2.0f64 / 3.0).ln();
        assert!((table.get("art").unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_entries_keep_first_seen_order() {
        let sentences = sents(&["Alpha beta gamma delta.", "Beta gamma."]);
        let table = score(&toks(&["beta", "alpha", "beta", "gamma"]), &sentences);
        let order: Vec<&str> = table.iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec!["beta", "alpha", "gamma"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_unscored_term_defaults_to_zero() {
        let table = score(&toks(&["cats"]), &sents(&["Cats sleep."]));
        assert_eq!(table.get("dogs"), None);
        assert_eq!(table.weight_or_zero("dogs"), 0.0);
    }
}
