//! Requirement term extraction from job descriptions

use crate::error::Result;
use crate::processing::annotator::{unavailable, Annotator};
use crate::processing::patterns::{DURATION_PATTERN, IMPORTANCE_MARKERS};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Where a requirement term came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    /// A noun from a sentence carrying an importance marker
    ImportantSentence,
    /// An explicit experience duration such as "5+ years"
    ExperienceDuration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementTerm {
    pub text: String,
    pub provenance: Provenance,
}

/// Deduplicated requirement terms keyed by text.
///
/// Iteration is sorted by text so anything summed over the set is
/// reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementSet {
    terms: BTreeMap<String, Provenance>,
}

impl RequirementSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, text: impl Into<String>, provenance: Provenance) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        let entry = self.terms.entry(text).or_insert(provenance);
        if provenance == Provenance::ExperienceDuration {
            *entry = provenance;
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.terms.contains_key(text)
    }

    pub fn iter(&self) -> impl Iterator<Item = RequirementTerm> + '_ {
        self.terms.iter().map(|(text, provenance)| RequirementTerm {
            text: text.clone(),
            provenance: *provenance,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(|k| k.as_str())
    }
}

pub struct RequirementExtractor {
    annotator: Arc<dyn Annotator>,
    markers: Vec<String>,
    duration_regex: Regex,
}

impl RequirementExtractor {
    pub fn new(annotator: Arc<dyn Annotator>) -> Self {
        Self::with_markers(
            annotator,
            IMPORTANCE_MARKERS.iter().map(|m| m.to_string()).collect(),
        )
    }

    pub fn with_markers(annotator: Arc<dyn Annotator>, markers: Vec<String>) -> Self {
        let markers = markers.into_iter().map(|m| m.to_lowercase()).collect();
        let duration_regex = Regex::new(DURATION_PATTERN).expect("Invalid duration regex");

        Self {
            annotator,
            markers,
            duration_regex,
        }
    }

    /// A sentence is important when it contains any marker as a substring.
    pub fn is_important(&self, lowercase_sentence: &str) -> bool {
        self.markers
            .iter()
            .any(|marker| lowercase_sentence.contains(marker.as_str()))
    }

    /// Extract requirement terms from job description text.
    ///
    /// Annotation failures surface as `AnnotationUnavailable`; without the
    /// annotator no terms can be derived.
    pub fn extract(&self, job_text: &str) -> Result<RequirementSet> {
        let sentences = self
            .annotator
            .segment_sentences(job_text)
            .map_err(unavailable)?;

        self.extract_from_sentences(&sentences)
    }

    /// Same as [`RequirementExtractor::extract`] for text that is already
    /// segmented.
    pub fn extract_from_sentences(&self, sentences: &[String]) -> Result<RequirementSet> {
        let mut requirements = RequirementSet::new();

        for sentence in sentences {
            let sentence = sentence.to_lowercase();
            if !self.is_important(&sentence) {
                continue;
            }

            for duration in self.duration_regex.find_iter(&sentence) {
                requirements.insert(duration.as_str(), Provenance::ExperienceDuration);
            }

            let tokens = self.annotator.tag_tokens(&sentence).map_err(unavailable)?;
            for token in tokens {
                if token.pos.is_noun() && token.text.chars().count() > 2 && !token.is_stop {
                    requirements.insert(token.text, Provenance::ImportantSentence);
                }
            }
        }

        debug!("Extracted {} requirement terms", requirements.len());
        Ok(requirements)
    }
}
