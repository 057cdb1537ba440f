//! Term weights for a job description word cloud

use crate::processing::tokenizer::Tokenizer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_MAX_WORDS: usize = 40;
pub const DEFAULT_SKILL_EMPHASIS: f32 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordWeight {
    pub term: String,
    pub weight: f32,
}

pub struct WordCloud {
    tokenizer: Tokenizer,
    max_words: usize,
    skill_emphasis: f32,
}

impl Default for WordCloud {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WORDS, DEFAULT_SKILL_EMPHASIS)
    }
}

impl WordCloud {
    pub fn new(max_words: usize, skill_emphasis: f32) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            max_words,
            skill_emphasis,
        }
    }

    /// Word frequencies of `text`, with each skill occurrence adding extra
    /// emphasis. Heaviest first; ties alphabetical.
    pub fn weights(&self, text: &str, skills: &[String]) -> Vec<WordWeight> {
        let mut weights: HashMap<String, f32> = HashMap::new();

        for token in self.tokenizer.tokenize(text) {
            *weights.entry(token).or_insert(0.0) += 1.0;
        }

        for skill in skills {
            *weights.entry(skill.to_lowercase()).or_insert(0.0) += self.skill_emphasis;
        }

        let mut ranked: Vec<WordWeight> = weights
            .into_iter()
            .map(|(term, weight)| WordWeight { term, weight })
            .collect();
        ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight).then_with(|| a.term.cmp(&b.term)));
        ranked.truncate(self.max_words);
        ranked
    }
}
