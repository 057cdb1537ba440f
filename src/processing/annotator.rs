//! Linguistic annotation: sentence segmentation and part-of-speech tagging.
//!
//! Scoring only talks to the [`Annotator`] trait so the backend can be
//! swapped. [`RuleBasedAnnotator`] is the default backend: UAX #29 sentence
//! and word boundaries plus a lexicon and suffix tagger.

use crate::error::{Result, ResumeMatcherError};
use crate::processing::patterns::ENGLISH_STOP_WORDS;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Coarse universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    Conjunction,
    Particle,
    Numeral,
    Punctuation,
}

impl PartOfSpeech {
    pub fn is_noun(&self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::ProperNoun)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub text: String,
    pub pos: PartOfSpeech,
    pub is_stop: bool,
}

/// Sentence segmentation and token tagging capability.
///
/// Implementations must be safe to share between independent requests.
pub trait Annotator: Send + Sync {
    fn segment_sentences(&self, text: &str) -> Result<Vec<String>>;
    fn tag_tokens(&self, sentence: &str) -> Result<Vec<TaggedToken>>;
}

/// Any annotator failure is reported as the backend being unavailable.
pub(crate) fn unavailable(err: ResumeMatcherError) -> ResumeMatcherError {
    match err {
        ResumeMatcherError::AnnotationUnavailable(_) => err,
        other => ResumeMatcherError::AnnotationUnavailable(other.to_string()),
    }
}

pub struct RuleBasedAnnotator {
    stop_words: HashSet<&'static str>,
}

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "all", "both", "either", "neither", "another", "such",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "he", "him", "his",
    "she", "her", "hers", "it", "its", "we", "us", "our", "ours", "they", "them", "their",
    "theirs", "who", "whom", "whose", "which", "what", "someone", "anyone", "everyone",
];

const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "from", "into", "onto", "over",
    "under", "through", "across", "within", "without", "between", "among", "during", "via",
    "per", "toward", "towards", "upon", "like", "including",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "if", "because", "while", "although", "though",
    "whereas", "unless", "whether", "as", "than",
];

const AUXILIARIES: &[&str] = &[
    "be", "is", "are", "was", "were", "been", "being", "am", "have", "has", "had", "having",
    "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must",
];

const VERBS: &[&str] = &[
    "work", "build", "design", "develop", "lead", "manage", "use", "create", "write",
    "maintain", "collaborate", "ensure", "support", "deliver", "drive", "own", "join",
    "help", "make", "implement", "improve", "apply", "seek", "want", "need", "looking",
    "know", "understand", "communicate", "mentor", "ship", "deploy", "partner", "contribute",
];

const ADJECTIVES: &[&str] = &[
    "strong", "excellent", "good", "great", "senior", "junior", "new", "large", "small",
    "relevant", "related", "solid", "deep", "modern", "fast", "remote", "plus", "other",
    "familiar", "able", "key", "high", "full", "ideal", "hands-on", "preferred",
];

const ADVERBS: &[&str] = &[
    "not", "very", "also", "well", "highly", "ideally", "preferably", "often", "always",
    "never", "just", "only", "even", "still", "already",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "able", "ible", "ive", "less", "ish"];

/// -ly words that are nouns, not adverbs.
const LY_NOUNS: &[&str] = &["family", "supply", "assembly", "reply", "italy", "anomaly"];

impl Default for RuleBasedAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleBasedAnnotator {
    pub fn new() -> Self {
        Self {
            stop_words: ENGLISH_STOP_WORDS.iter().copied().collect(),
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word.to_lowercase().as_str())
    }

    fn tag_word(&self, word: &str, sentence_initial: bool) -> PartOfSpeech {
        let lower = word.to_lowercase();
        let lower = lower.as_str();

        if word.chars().all(|c| !c.is_alphanumeric()) {
            return PartOfSpeech::Punctuation;
        }
        if word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
            return PartOfSpeech::Numeral;
        }
        if lower == "'s" || lower == "\u{2019}s" || lower == "to" {
            return PartOfSpeech::Particle;
        }
        if DETERMINERS.contains(&lower) {
            return PartOfSpeech::Determiner;
        }
        if PRONOUNS.contains(&lower) {
            return PartOfSpeech::Pronoun;
        }
        if ADPOSITIONS.contains(&lower) {
            return PartOfSpeech::Adposition;
        }
        if CONJUNCTIONS.contains(&lower) {
            return PartOfSpeech::Conjunction;
        }
        if AUXILIARIES.contains(&lower) {
            return PartOfSpeech::Auxiliary;
        }
        if ADVERBS.contains(&lower) {
            return PartOfSpeech::Adverb;
        }
        if ADJECTIVES.contains(&lower) {
            return PartOfSpeech::Adjective;
        }
        if VERBS.contains(&lower) {
            return PartOfSpeech::Verb;
        }

        let len = lower.chars().count();
        if len > 4 && lower.ends_with("ly") && !LY_NOUNS.contains(&lower) {
            return PartOfSpeech::Adverb;
        }
        if len > 4 && lower.ends_with("ed") {
            return PartOfSpeech::Verb;
        }
        if len > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return PartOfSpeech::Adjective;
        }

        let capitalized = word.chars().next().map(|c| c.is_uppercase()).unwrap_or(false);
        if capitalized && !sentence_initial {
            PartOfSpeech::ProperNoun
        } else {
            PartOfSpeech::Noun
        }
    }
}

impl Annotator for RuleBasedAnnotator {
    fn segment_sentences(&self, text: &str) -> Result<Vec<String>> {
        Ok(text
            .unicode_sentences()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect())
    }

    fn tag_tokens(&self, sentence: &str) -> Result<Vec<TaggedToken>> {
        let mut tokens = Vec::new();

        for (index, word) in sentence.unicode_words().enumerate() {
            // Split possessives so "bachelor's" yields "bachelor" + "'s"
            let (stem, clitic) = match word
                .strip_suffix("'s")
                .or_else(|| word.strip_suffix("\u{2019}s"))
            {
                Some(stem) if !stem.is_empty() => (stem, Some(&word[stem.len()..])),
                _ => (word, None),
            };

            tokens.push(TaggedToken {
                text: stem.to_string(),
                pos: self.tag_word(stem, index == 0),
                is_stop: self.is_stop_word(stem),
            });

            if let Some(clitic) = clitic {
                tokens.push(TaggedToken {
                    text: clitic.to_string(),
                    pos: PartOfSpeech::Particle,
                    is_stop: false,
                });
            }
        }

        Ok(tokens)
    }
}
