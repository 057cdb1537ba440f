//! Whole-document content similarity

use crate::processing::tokenizer::Tokenizer;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimilarityError {
    #[error("empty vocabulary; documents contain only stop words or no tokens")]
    EmptyVocabulary,
}

/// Similarity between two documents; higher means more alike.
pub trait Similarity: Send + Sync {
    fn similarity(&self, doc_a: &str, doc_b: &str) -> Result<f64, SimilarityError>;
}

/// TF-IDF cosine similarity over a vocabulary fitted on both documents.
///
/// Raw term counts, smoothed idf `ln((1 + n) / (1 + df)) + 1`, rows
/// L2-normalized, English stop words removed.
pub struct TfIdfSimilarity {
    tokenizer: Tokenizer,
}

impl Default for TfIdfSimilarity {
    fn default() -> Self {
        Self::new()
    }
}

impl TfIdfSimilarity {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
        }
    }

    fn term_counts(tokens: &[String]) -> BTreeMap<&str, f64> {
        let mut counts = BTreeMap::new();
        for token in tokens {
            *counts.entry(token.as_str()).or_insert(0.0) += 1.0;
        }
        counts
    }

    fn normalize(vector: &mut BTreeMap<&str, f64>) {
        let norm = vector.values().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in vector.values_mut() {
                *value /= norm;
            }
        }
    }
}

impl Similarity for TfIdfSimilarity {
    fn similarity(&self, doc_a: &str, doc_b: &str) -> Result<f64, SimilarityError> {
        let tokens_a = self.tokenizer.tokenize(doc_a);
        let tokens_b = self.tokenizer.tokenize(doc_b);

        let counts_a = Self::term_counts(&tokens_a);
        let counts_b = Self::term_counts(&tokens_b);

        let vocabulary: HashSet<&str> = counts_a.keys().chain(counts_b.keys()).copied().collect();
        if vocabulary.is_empty() {
            return Err(SimilarityError::EmptyVocabulary);
        }

        let n_docs = 2.0_f64;
        let idf = |term: &str| {
            let df = counts_a.contains_key(term) as u8 + counts_b.contains_key(term) as u8;
            ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0
        };

        let mut vector_a: BTreeMap<&str, f64> =
            counts_a.iter().map(|(t, c)| (*t, c * idf(*t))).collect();
        let mut vector_b: BTreeMap<&str, f64> =
            counts_b.iter().map(|(t, c)| (*t, c * idf(*t))).collect();

        Self::normalize(&mut vector_a);
        Self::normalize(&mut vector_b);

        Ok(vector_a
            .iter()
            .filter_map(|(term, a)| vector_b.get(term).map(|b| a * b))
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_documents() {
        let sim = TfIdfSimilarity::new();
        let score = sim
            .similarity("rust systems programming", "rust systems programming")
            .unwrap();
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_documents() {
        let sim = TfIdfSimilarity::new();
        let score = sim.similarity("rust compiler", "pastry chef").unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_partial_overlap_in_range() {
        let sim = TfIdfSimilarity::new();
        let score = sim
            .similarity("python developer with django", "senior python engineer")
            .unwrap();
        assert!(score > 0.0 && score < 1.0);
    }

    #[test]
    fn test_stop_words_only_is_error() {
        let sim = TfIdfSimilarity::new();
        assert_eq!(
            sim.similarity("the and of", "").unwrap_err(),
            SimilarityError::EmptyVocabulary
        );
    }

    #[test]
    fn test_empty_side_scores_zero() {
        let sim = TfIdfSimilarity::new();
        assert_eq!(sim.similarity("", "kubernetes operator").unwrap(), 0.0);
    }
}
