//! Bag-of-words cosine similarity between a reference answer and a candidate.

use std::collections::BTreeMap;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lowercased runs of word characters, so `long-term` is two terms.
/// Text with no word characters at all falls back to its whitespace-separated chunks.
fn tokens(text: &str) -> Vec<String> {
    let words: Vec<String> = text
        .split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect();

    if words.is_empty() {
        text.split_whitespace().map(str::to_string).collect()
    } else {
        words
    }
}

fn counts(text: &str) -> BTreeMap<String, u64> {
    let mut bag = BTreeMap::new();
    for token in tokens(text) {
        *bag.entry(token).or_insert(0) += 1;
    }
    bag
}

/// Cosine similarity of the two documents' term-count vectors, in `[0, 1]`.
///
/// Returns 0 when either side has no tokens. The computation uses exact integer
/// counts until the final division, so `score(x, x)` is exactly 1 and the
/// result does not depend on argument order.
pub fn score(reference: &str, candidate: &str) -> f64 {
    let a = counts(reference);
    let b = counts(candidate);

    let norm_a: u64 = a.values().map(|n| n * n).sum();
    let norm_b: u64 = b.values().map(|n| n * n).sum();
    if norm_a == 0 || norm_b == 0 {
        return 0.0;
    }

    let dot: u64 = a
        .iter()
        .filter_map(|(term, n)| b.get(term).map(|m| n * m))
        .sum();

    dot as f64 / ((norm_a as f64) * (norm_b as f64)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_separates_terms_and_case_is_folded() {
        let bag = counts("Lava, lava! LAVA... -- long-term magma,ash rises/falls");
        assert_eq!(bag.get("lava"), Some(&3));
        assert_eq!(bag.get("long"), Some(&1));
        assert_eq!(bag.get("term"), Some(&1));
        assert_eq!(bag.get("ash"), Some(&1));
        assert_eq!(bag.get("falls"), Some(&1));
        assert_eq!(bag.get("--"), None);
        assert_eq!(bag.len(), 7);
    }

    #[test]
    fn punctuation_only_text_keeps_its_chunks() {
        let bag = counts("!!! ?");
        assert_eq!(bag.get("!!!"), Some(&1));
        assert_eq!(bag.get("?"), Some(&1));
    }
}
