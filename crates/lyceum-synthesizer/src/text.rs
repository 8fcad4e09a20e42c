//! Tokenization, candidate phrases and qualifier extraction

use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+(?:['’-][\p{L}\p{N}]+)*").expect("token pattern is valid"));

static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?;\n]+").expect("sentence pattern is valid"));

const STOPWORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "again", "against", "all", "also", "among", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but", "by", "can", "could",
    "did", "do", "does", "doing", "down", "during", "each", "either", "few", "for", "from", "further", "had", "has",
    "have", "having", "he", "her", "here", "hers", "him", "his", "how", "however", "i", "if", "in", "into", "is",
    "it", "its", "itself", "may", "might", "more", "most", "much", "must", "my", "neither", "no", "nor", "not", "of",
    "off", "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own", "same", "she", "should", "so",
    "some", "such", "than", "that", "the", "their", "theirs", "them", "then", "there", "these", "they", "this",
    "those", "through", "thus", "to", "too", "under", "until", "up", "upon", "very", "was", "we", "were", "what",
    "when", "where", "whether", "which", "while", "who", "whom", "why", "will", "with", "within", "without",
    "would", "yet", "you", "your",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// Whether a lowercase token is a stopword
pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token)
}

fn is_content(token: &str) -> bool {
    !is_stopword(token) && !token.chars().all(|c| c.is_numeric())
}

/// Lowercase tokens of one sentence
pub fn tokens(text: &str) -> Vec<String> {
    TOKEN.find_iter(text).map(|m| m.as_str().to_lowercase()).collect()
}

/// Token lists per sentence, dropping empty sentences
pub fn sentences(text: &str) -> Vec<Vec<String>> {
    SENTENCE_BREAK
        .split(text)
        .map(tokens)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Candidate theme phrases: 1..=max_ngram grams of stopword-free runs
///
/// Single-token phrases must be at least three characters and not purely
/// numeric.
pub fn candidate_phrases(text: &str, max_ngram: usize) -> BTreeSet<String> {
    let mut phrases = BTreeSet::new();
    for sentence in sentences(text) {
        for run in sentence.split(|t| is_stopword(t)) {
            for n in 1..=max_ngram.min(run.len()) {
                for gram in run.windows(n) {
                    if n == 1 && (gram[0].chars().count() < 3 || !is_content(&gram[0])) {
                        continue;
                    }
                    phrases.insert(gram.join(" "));
                }
            }
        }
    }
    phrases
}

/// Content words within `window` tokens of each occurrence of `phrase`
///
/// Only tokens in the same sentence count, and the phrase's own tokens
/// are excluded.
pub fn qualifiers(text: &str, phrase: &str, window: usize) -> BTreeSet<String> {
    let needle: Vec<&str> = phrase.split(' ').collect();
    let mut found = BTreeSet::new();
    if needle.is_empty() {
        return found;
    }

    for sentence in sentences(text) {
        if sentence.len() < needle.len() {
            continue;
        }
        for start in 0..=sentence.len() - needle.len() {
            let end = start + needle.len();
            if sentence[start..end].iter().map(String::as_str).ne(needle.iter().copied()) {
                continue;
            }
            let before = start.saturating_sub(window)..start;
            let after = end..(end + window).min(sentence.len());
            for token in sentence[before].iter().chain(&sentence[after]) {
                if is_content(token) && token.chars().count() > 1 && !needle.contains(&token.as_str()) {
                    found.insert(token.clone());
                }
            }
        }
    }
    found
}

/// Whether `inner` appears as a contiguous token run inside `outer`
pub fn contains_phrase(outer: &str, inner: &str) -> bool {
    let outer: Vec<&str> = outer.split(' ').collect();
    let inner: Vec<&str> = inner.split(' ').collect();
    inner.len() < outer.len() && outer.windows(inner.len()).any(|w| w == inner.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_keep_hyphens_and_apostrophes() {
        assert_eq!(
            tokens("Self-report isn't fMRI, 2020"),
            vec!["self-report", "isn't", "fmri", "2020"]
        );
    }

    #[test]
    fn test_sentences_split_on_punctuation() {
        let s = sentences("One two. Three; four!\nFive?");
        assert_eq!(s.len(), 4);
        assert_eq!(s[1], vec!["three"]);
    }

    #[test]
    fn test_candidate_phrases() {
        let phrases = candidate_phrases("memory consolidation during sleep improves retention", 3);
        assert!(phrases.contains("memory consolidation"));
        assert!(phrases.contains("sleep improves retention"));
        assert!(phrases.contains("sleep"));
        assert!(!phrases.contains("consolidation during sleep"));
        assert!(!phrases.contains("during"));
    }

    #[test]
    fn test_short_and_numeric_unigrams_dropped() {
        let phrases = candidate_phrases("IQ rose 15 points", 1);
        assert!(!phrases.contains("iq"));
        assert!(!phrases.contains("15"));
        assert!(phrases.contains("rose"));
    }

    #[test]
    fn test_qualifiers_within_window() {
        let q = qualifiers("Investors price risk through expected returns.", "risk", 3);
        let expected: BTreeSet<String> = ["investors", "price", "expected", "returns"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(q, expected);
    }

    #[test]
    fn test_qualifiers_stay_in_sentence() {
        let q = qualifiers("Markets move. Risk rises.", "risk", 3);
        assert_eq!(q.into_iter().collect::<Vec<_>>(), vec!["rises"]);
    }

    #[test]
    fn test_contains_phrase() {
        assert!(contains_phrase("memory consolidation", "memory"));
        assert!(!contains_phrase("memory consolidation", "memory consolidation"));
        assert!(!contains_phrase("working memory", "memory consolidation"));
    }
}
