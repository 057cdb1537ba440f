//! Resume to job description match scoring
//!
//! The score blends requirement-term overlap (about 80% of the signal) with
//! whole-document similarity (about 20%), then applies a deliberately
//! generous curve: multiplicative boosts and a 7.0 floor for any non-zero
//! signal. The curve defines what users see and must not be tuned.

use crate::error::Result;
use crate::processing::annotator::{Annotator, RuleBasedAnnotator};
use crate::processing::document::Document;
use crate::processing::requirements::{RequirementExtractor, RequirementSet};
use crate::processing::similarity::{Similarity, TfIdfSimilarity};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const MAX_SCORE: f64 = 10.0;
pub const SCORE_FLOOR: f64 = 7.0;

const EXACT_MATCH_POINTS: f64 = 1.5;
const PARTIAL_MATCH_POINTS: f64 = 1.2;
const MIN_PARTIAL_WORD_LEN: usize = 3;
const BASE_SCORE_SCALE: f64 = 8.0;
const SIMILARITY_SCALE: f64 = 2.0;
const SIMILARITY_BOOST_THRESHOLD: f64 = 1.0;
const SIMILARITY_BOOST: f64 = 1.4;
const HIGH_CURVE_THRESHOLD: f64 = 4.0;
const HIGH_CURVE_BOOST: f64 = 1.3;
const LOW_CURVE_THRESHOLD: f64 = 2.0;
const LOW_CURVE_BOOST: f64 = 1.25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialMatch {
    pub term: String,
    pub matched_words: usize,
    pub total_words: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub requirement_count: usize,
    pub match_points: f64,
    pub base_score: f64,
    pub similarity_score: f64,
    /// Combined score after the boost curve, before floor and clamp
    pub curved_score: f64,
}

/// Outcome of scoring one (resume, job description) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 0.0 to 10.0, one decimal
    pub score: f64,
    pub found: Vec<String>,
    pub partial: Vec<PartialMatch>,
    pub missing: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

pub struct MatchScorer {
    extractor: RequirementExtractor,
    similarity: Arc<dyn Similarity>,
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchScorer {
    /// Scorer with the rule-based annotator and TF-IDF similarity.
    pub fn new() -> Self {
        let annotator: Arc<dyn Annotator> = Arc::new(RuleBasedAnnotator::new());
        Self::with_components(
            RequirementExtractor::new(annotator),
            Arc::new(TfIdfSimilarity::new()),
        )
    }

    pub fn with_components(extractor: RequirementExtractor, similarity: Arc<dyn Similarity>) -> Self {
        Self {
            extractor,
            similarity,
        }
    }

    /// Score only. See [`MatchScorer::score`].
    pub fn calculate_score(&self, resume_text: &str, job_text: &str) -> Result<f64> {
        Ok(self.score(resume_text, job_text)?.score)
    }

    /// Score a resume against a job description.
    ///
    /// Only an annotation failure is returned as an error; similarity
    /// failures count as zero similarity.
    pub fn score(&self, resume_text: &str, job_text: &str) -> Result<MatchResult> {
        let requirements = self.extractor.extract(job_text)?;
        Ok(self.score_requirements(&requirements, resume_text, job_text))
    }

    /// Score against a job description that is already segmented.
    pub fn score_document(&self, resume_text: &str, job: &Document) -> Result<MatchResult> {
        let requirements = self.extractor.extract_from_sentences(job.sentences())?;
        Ok(self.score_requirements(&requirements, resume_text, job.content()))
    }

    fn score_requirements(
        &self,
        requirements: &RequirementSet,
        resume_text: &str,
        job_text: &str,
    ) -> MatchResult {
        let resume_lower = resume_text.to_lowercase();

        let overlap = term_overlap(requirements, &resume_lower);
        let total = requirements.len();
        let base_score = if total > 0 {
            overlap.points / total as f64 * BASE_SCORE_SCALE
        } else {
            0.0
        };

        let similarity_score = self.similarity_score(resume_text, job_text);
        let curved_score = apply_curve(base_score + similarity_score);
        let score = finalize(curved_score);

        info!(
            "Match score {:.1} (base {:.2}, similarity {:.2}, {} requirements)",
            score, base_score, similarity_score, total
        );

        MatchResult {
            score,
            found: overlap.found,
            partial: overlap.partial,
            missing: overlap.missing,
            breakdown: ScoreBreakdown {
                requirement_count: total,
                match_points: overlap.points,
                base_score,
                similarity_score,
                curved_score,
            },
        }
    }

    fn similarity_score(&self, resume_text: &str, job_text: &str) -> f64 {
        match self.similarity.similarity(resume_text, job_text) {
            Ok(raw) => {
                let scaled = raw * SIMILARITY_SCALE;
                if scaled > SIMILARITY_BOOST_THRESHOLD {
                    scaled * SIMILARITY_BOOST
                } else {
                    scaled
                }
            }
            Err(e) => {
                debug!("Similarity unavailable, counting as zero: {}", e);
                0.0
            }
        }
    }
}

struct TermOverlap {
    points: f64,
    found: Vec<String>,
    partial: Vec<PartialMatch>,
    missing: Vec<String>,
}

fn term_overlap(requirements: &RequirementSet, resume_lower: &str) -> TermOverlap {
    let mut overlap = TermOverlap {
        points: 0.0,
        found: Vec::new(),
        partial: Vec::new(),
        missing: Vec::new(),
    };

    for term in requirements.texts() {
        let term = term.to_lowercase();
        if resume_lower.contains(term.as_str()) {
            overlap.points += EXACT_MATCH_POINTS;
            overlap.found.push(term);
            continue;
        }

        let words: Vec<&str> = term.split_whitespace().collect();
        if words.len() > 1 {
            let matched = words
                .iter()
                .filter(|w| w.chars().count() > MIN_PARTIAL_WORD_LEN && resume_lower.contains(*w))
                .count();
            overlap.points += matched as f64 / words.len() as f64 * PARTIAL_MATCH_POINTS;
            if matched > 0 {
                overlap.partial.push(PartialMatch {
                    term: term.clone(),
                    matched_words: matched,
                    total_words: words.len(),
                });
                continue;
            }
        }

        overlap.missing.push(term);
    }

    overlap
}

fn apply_curve(score: f64) -> f64 {
    if score > HIGH_CURVE_THRESHOLD {
        score * HIGH_CURVE_BOOST
    } else if score > LOW_CURVE_THRESHOLD {
        score * LOW_CURVE_BOOST
    } else {
        score
    }
}

fn finalize(score: f64) -> f64 {
    let floored = if score > 0.0 { score.max(SCORE_FLOOR) } else { score };
    round_one_decimal(floored.clamp(0.0, MAX_SCORE))
}

/// Rounds the exact binary value to one decimal, half to even, via the
/// correctly rounded decimal formatter. Scaling by 10 first would round 8.35
/// (stored just below 8.35) up to 8.4.
fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::similarity::SimilarityError;

    struct FixedSimilarity(f64);

    impl Similarity for FixedSimilarity {
        fn similarity(&self, _a: &str, _b: &str) -> std::result::Result<f64, SimilarityError> {
            Ok(self.0)
        }
    }

    struct BrokenSimilarity;

    impl Similarity for BrokenSimilarity {
        fn similarity(&self, _a: &str, _b: &str) -> std::result::Result<f64, SimilarityError> {
            Err(SimilarityError::EmptyVocabulary)
        }
    }

    fn scorer_with(similarity: Arc<dyn Similarity>) -> MatchScorer {
        MatchScorer::with_components(
            RequirementExtractor::new(Arc::new(RuleBasedAnnotator::new())),
            similarity,
        )
    }

    fn has_one_decimal(score: f64) -> bool {
        ((score * 10.0).round() - score * 10.0).abs() < 1e-9
    }

    #[test]
    fn test_empty_job_scores_zero() {
        let scorer = MatchScorer::new();
        assert_eq!(scorer.calculate_score("Rust developer", "").unwrap(), 0.0);
    }

    #[test]
    fn test_empty_resume_scores_zero() {
        let scorer = MatchScorer::new();
        let score = scorer
            .calculate_score("", "Required: 5+ years of Python experience.")
            .unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_near_total_overlap_hits_floor() {
        let scorer = MatchScorer::new();
        let result = scorer
            .score(
                "I have 5+ years of Python experience and a Bachelor's degree.",
                "Required: 5+ years of Python experience. Must have a Bachelor's degree.",
            )
            .unwrap();

        assert!(result.score >= SCORE_FLOOR);
        assert!(result.found.contains(&"5+ years".to_string()));
        assert!(result.found.contains(&"python".to_string()));
        assert!(result.found.contains(&"bachelor".to_string()));
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_small_overlap_is_pulled_up_to_floor() {
        let scorer = scorer_with(Arc::new(FixedSimilarity(0.0)));
        let result = scorer
            .score(
                "java",
                "Python and Docker and Java and Kubernetes and Terraform required.",
            )
            .unwrap();

        assert_eq!(result.breakdown.requirement_count, 5);
        assert!((result.breakdown.base_score - 2.4).abs() < 1e-9);
        assert!((result.breakdown.curved_score - 3.0).abs() < 1e-9);
        assert_eq!(result.score, 7.0);
    }

    #[test]
    fn test_partial_credit_for_multi_word_terms() {
        let scorer = scorer_with(Arc::new(FixedSimilarity(0.0)));
        let result = scorer
            .score(
                "three years in industry",
                "Minimum 10 years experience required",
            )
            .unwrap();

        let partial = result.partial.iter().find(|p| p.term == "10 years").unwrap();
        assert_eq!(partial.matched_words, 1);
        assert_eq!(partial.total_words, 2);
        assert!(result.found.contains(&"years".to_string()));
        assert!((result.breakdown.match_points - 2.1).abs() < 1e-9);
    }

    #[test]
    fn test_similarity_boost_above_threshold() {
        let scorer = scorer_with(Arc::new(FixedSimilarity(0.6)));
        let result = scorer.score("anything", "no markers here").unwrap();

        // 0.6 * 2.0 = 1.2 > 1.0, boosted by 1.4
        assert!((result.breakdown.similarity_score - 1.68).abs() < 1e-9);
        assert_eq!(result.breakdown.base_score, 0.0);
        assert_eq!(result.score, 7.0);
    }

    #[test]
    fn test_similarity_failure_counts_as_zero() {
        let scorer = scorer_with(Arc::new(BrokenSimilarity));
        let result = scorer.score("python", "Python required.").unwrap();

        assert_eq!(result.breakdown.similarity_score, 0.0);
        assert_eq!(result.score, MAX_SCORE);
    }

    #[test]
    fn test_score_range_and_precision() {
        let scorer = MatchScorer::new();
        let pairs = [
            ("", ""),
            ("Rust", "Rust experience required"),
            ("Chef with pastry skills", "Required: Kubernetes, Terraform and AWS experience."),
            ("Go, Rust, Python, SQL", "We need strong SQL skill and Python knowledge."),
            ("lorem ipsum", "dolor sit amet"),
        ];

        for (resume, job) in pairs {
            let score = scorer.calculate_score(resume, job).unwrap();
            assert!((0.0..=MAX_SCORE).contains(&score), "out of range: {}", score);
            assert!(has_one_decimal(score), "too precise: {}", score);
            assert!(score == 0.0 || score >= SCORE_FLOOR, "below floor: {}", score);
        }
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let scorer = MatchScorer::new();
        let resume = "Backend engineer, 4 years Python, Docker and PostgreSQL.";
        let job = "Must have 3+ years of Python experience. Docker knowledge required.";

        let first = scorer.score(resume, job).unwrap();
        let second = scorer.score(resume, job).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_curve() {
        assert_eq!(apply_curve(1.0), 1.0);
        assert!((apply_curve(3.0) - 3.75).abs() < 1e-9);
        assert!((apply_curve(5.0) - 6.5).abs() < 1e-9);
    }

    #[test]
    fn test_finalize_floor_and_clamp() {
        assert_eq!(finalize(0.0), 0.0);
        assert_eq!(finalize(0.01), 7.0);
        assert_eq!(finalize(8.04), 8.0);
        assert_eq!(finalize(42.0), 10.0);
    }

    #[test]
    fn test_rounding_uses_exact_binary_value() {
        assert_eq!(round_one_decimal(8.35), 8.3);
        assert_eq!(round_one_decimal(8.36), 8.4);
        assert_eq!(round_one_decimal(7.04), 7.0);
        assert_eq!(round_one_decimal(10.0), 10.0);
    }

    #[test]
    fn test_document_scoring_matches_text_scoring() {
        let scorer = MatchScorer::new();
        let resume = "I have 5+ years of Python experience and a Bachelor's degree.";
        let job_text = "Required: 5+ years of Python experience. Must have a Bachelor's degree.";
        let job = Document::new(job_text, &RuleBasedAnnotator::new()).unwrap();

        assert_eq!(
            scorer.score_document(resume, &job).unwrap(),
            scorer.score(resume, job_text).unwrap()
        );
    }
}
