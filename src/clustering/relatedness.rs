use lazy_static::lazy_static;
use std::collections::HashSet;

use crate::keyword::KeywordRecord;

/// Words ignored when looking for overlap between two keywords
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did",
    "will", "would", "could", "should", "may", "might", "must", "can",
];

lazy_static! {
    static ref STOP_WORD_SET: HashSet<&'static str> = STOP_WORDS.iter().copied().collect();
}

/// Lowercased whitespace-separated tokens of a keyword
pub fn tokenize(keyword: &str) -> HashSet<String> {
    keyword.split_whitespace().map(str::to_lowercase).collect()
}

/// Shared tokens of two keywords, stop words removed, sorted
pub fn shared_terms(a: &str, b: &str) -> Vec<String> {
    let b_tokens = tokenize(b);
    let mut shared: Vec<String> = tokenize(a)
        .into_iter()
        .filter(|token| b_tokens.contains(token) && !STOP_WORD_SET.contains(token.as_str()))
        .collect();
    shared.sort();
    shared
}

/// Whether `candidate` belongs in the cluster headed by `parent`
///
/// Only the candidate's connection strength is checked; a parent has already
/// passed the threshold when its cluster was opened. Beyond that, the two
/// keywords must share at least one word that is not a stop word. This is a
/// lexical proxy and will miss synonyms and over-group on generic words.
pub fn related(candidate: &KeywordRecord, parent: &KeywordRecord, threshold: f64) -> bool {
    if candidate.connection_strength < threshold {
        return false;
    }

    let parent_tokens = tokenize(&parent.keyword);
    tokenize(&candidate.keyword)
        .iter()
        .any(|token| parent_tokens.contains(token) && !STOP_WORD_SET.contains(token.as_str()))
}
