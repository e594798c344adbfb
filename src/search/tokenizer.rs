use regex::Regex;
use std::collections::HashSet;

/// Splits free text into a set of normalized search tokens.
///
/// Tokens are maximal runs of word characters, lowercased; whitespace and
/// punctuation only separate them and never appear in the output. Duplicates
/// collapse into the set, so "the the the" and "the" tokenize identically.
pub fn tokenize(text: &str) -> HashSet<String> {
    let word_pattern = Regex::new(r"\b\w+\b").unwrap();

    word_pattern
        .find_iter(&text.to_lowercase())
        .map(|word| word.as_str().to_string())
        .collect()
}
