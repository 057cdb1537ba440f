//! Vocabulary keyword overlap between a resume and a job description

use crate::error::{Result, ResumeMatcherError};
use crate::processing::patterns::KEYWORD_VOCABULARY;
use aho_corasick::{AhoCorasick, MatchKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strsim::jaro_winkler;

pub const DEFAULT_FUZZY_THRESHOLD: f32 = 0.85;

/// Keyword matcher for exact and fuzzy vocabulary matching
pub struct KeywordMatcher {
    exact_matcher: AhoCorasick,
    vocabulary: Vec<String>,
    fuzzy_threshold: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearMatch {
    pub keyword: String,
    pub matched_text: String,
    pub similarity: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatches {
    pub found: Vec<String>,
    pub missing: Vec<String>,
    pub near: Vec<NearMatch>,
}

impl KeywordMatcher {
    pub fn new() -> Result<Self> {
        Self::with_custom_keywords(Vec::new())
    }

    /// Default vocabulary plus extra keywords
    pub fn with_custom_keywords(additional: Vec<String>) -> Result<Self> {
        let mut vocabulary: Vec<String> = KEYWORD_VOCABULARY.iter().map(|s| s.to_string()).collect();
        vocabulary.extend(additional.into_iter().map(|k| k.trim().to_lowercase()));
        vocabulary.retain(|k| !k.is_empty());
        vocabulary.sort();
        vocabulary.dedup();

        let exact_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&vocabulary)
            .map_err(|e| ResumeMatcherError::TextProcessing(format!("Failed to build keyword matcher: {}", e)))?;

        Ok(Self {
            exact_matcher,
            vocabulary,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        })
    }

    pub fn set_fuzzy_threshold(&mut self, threshold: f32) {
        self.fuzzy_threshold = threshold.clamp(0.0, 1.0);
    }

    pub fn fuzzy_threshold(&self) -> f32 {
        self.fuzzy_threshold
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Vocabulary keywords occurring in `text` as whole words.
    pub fn keywords_in(&self, text: &str) -> BTreeSet<String> {
        self.exact_matcher
            .find_iter(text)
            .filter(|m| is_word_bounded(text, m.start(), m.end()))
            .map(|m| self.vocabulary[m.pattern().as_usize()].clone())
            .collect()
    }

    pub fn find_matches(&self, resume_text: &str, job_text: &str) -> KeywordMatches {
        let job_keywords = self.keywords_in(job_text);
        let resume_keywords = self.keywords_in(resume_text);

        let (found, missing): (Vec<String>, Vec<String>) = job_keywords
            .into_iter()
            .partition(|k| resume_keywords.contains(k));

        let near = self.near_matches(&missing, resume_text);

        KeywordMatches { found, missing, near }
    }

    /// Best fuzzy resume word for each missing keyword, above the threshold.
    fn near_matches(&self, missing: &[String], resume_text: &str) -> Vec<NearMatch> {
        let words: BTreeSet<String> = resume_text
            .split_whitespace()
            .map(clean_word)
            .filter(|w| w.chars().count() >= 3)
            .collect();

        missing
            .iter()
            .filter(|keyword| !keyword.contains(' '))
            .filter_map(|keyword| {
                words
                    .iter()
                    .map(|word| (word, jaro_winkler(word, keyword) as f32))
                    .filter(|(_, similarity)| *similarity >= self.fuzzy_threshold)
                    .max_by(|a, b| a.1.total_cmp(&b.1))
                    .map(|(word, similarity)| NearMatch {
                        keyword: keyword.clone(),
                        matched_text: word.clone(),
                        similarity,
                    })
            })
            .collect()
    }
}

fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    let is_word = |c: Option<char>| c.map(|c| c.is_alphanumeric()).unwrap_or(false);
    !is_word(before) && !is_word(after)
}

fn clean_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric() || *c == '+' || *c == '#' || *c == '.')
        .collect::<String>()
        .trim_end_matches('.')
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matcher_creation() {
        let matcher = KeywordMatcher::new().unwrap();
        assert!(matcher.vocabulary_size() > 0);
        assert_eq!(matcher.fuzzy_threshold(), DEFAULT_FUZZY_THRESHOLD);
    }

    #[test]
    fn test_keywords_are_case_insensitive_and_word_bounded() {
        let matcher = KeywordMatcher::new().unwrap();
        let keywords = matcher.keywords_in("Expert in RUST, Kubernetes and trusted builds");

        assert!(keywords.contains("rust"));
        assert!(keywords.contains("kubernetes"));
        assert_eq!(keywords.iter().filter(|k| k.as_str() == "rust").count(), 1);
    }

    #[test]
    fn test_longest_keyword_wins() {
        let matcher = KeywordMatcher::new().unwrap();
        let keywords = matcher.keywords_in("Solid machine learning background");
        assert!(keywords.contains("machine learning"));
    }

    #[test]
    fn test_found_and_missing() {
        let matcher = KeywordMatcher::new().unwrap();
        let matches = matcher.find_matches(
            "Python developer with Docker experience",
            "We need Python, Docker and Kubernetes skills",
        );

        assert_eq!(matches.found, vec!["docker", "python"]);
        assert_eq!(matches.missing, vec!["kubernetes"]);
    }

    #[test]
    fn test_near_matches_for_typos() {
        let matcher = KeywordMatcher::new().unwrap();
        let matches = matcher.find_matches("Worked with Kubernets clusters", "Kubernetes required");

        assert_eq!(matches.missing, vec!["kubernetes"]);
        assert_eq!(matches.near.len(), 1);
        assert_eq!(matches.near[0].matched_text, "kubernets");
    }

    #[test]
    fn test_custom_keywords() {
        let matcher = KeywordMatcher::with_custom_keywords(vec!["Elixir".to_string()]).unwrap();
        let matches = matcher.find_matches("Elixir and Phoenix", "elixir engineer");
        assert_eq!(matches.found, vec!["elixir"]);
    }
}
