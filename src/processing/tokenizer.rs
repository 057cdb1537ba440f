//! Word tokenizer shared by similarity and word-cloud weighting

use crate::processing::patterns::{ENGLISH_STOP_WORDS, VECTOR_TOKEN_PATTERN};
use regex::Regex;
use std::collections::HashSet;

/// Lower-cases, keeps tokens of two or more word characters and drops
/// English stop words.
pub struct Tokenizer {
    token_regex: Regex,
    stop_words: HashSet<&'static str>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            token_regex: Regex::new(VECTOR_TOKEN_PATTERN).expect("Invalid token regex"),
            stop_words: ENGLISH_STOP_WORDS.iter().copied().collect(),
        }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.token_regex
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|t| !self.stop_words.contains(*t))
            .map(|t| t.to_string())
            .collect()
    }
}
