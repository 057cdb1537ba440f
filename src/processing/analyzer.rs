//! Full resume/job analysis combining the scorer and the display extractors

use crate::config::Config;
use crate::error::Result;
use crate::processing::annotator::{Annotator, RuleBasedAnnotator};
use crate::processing::document::Document;
use crate::processing::facts::{FactExtractor, StructuredFacts};
use crate::processing::keyword_matcher::{KeywordMatcher, KeywordMatches};
use crate::processing::requirements::RequirementExtractor;
use crate::processing::scorer::{MatchResult, MatchScorer};
use crate::processing::similarity::TfIdfSimilarity;
use crate::processing::word_cloud::{WordCloud, WordWeight};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub match_result: MatchResult,
    pub facts: StructuredFacts,
    pub keywords: KeywordMatches,
    pub word_cloud: Vec<WordWeight>,
    pub resume_words: usize,
    pub job_words: usize,
    pub processing_time_ms: u64,
}

/// Job-only view used by the `facts` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobInsights {
    pub facts: StructuredFacts,
    pub word_cloud: Vec<WordWeight>,
}

pub struct AnalysisEngine {
    annotator: Arc<dyn Annotator>,
    scorer: MatchScorer,
    fact_extractor: FactExtractor,
    keyword_matcher: KeywordMatcher,
    word_cloud: WordCloud,
}

impl AnalysisEngine {
    pub fn new(config: &Config) -> Result<Self> {
        let annotator: Arc<dyn Annotator> = Arc::new(RuleBasedAnnotator::new());
        Self::with_annotator(config, annotator)
    }

    pub fn with_annotator(config: &Config, annotator: Arc<dyn Annotator>) -> Result<Self> {
        let extractor = RequirementExtractor::with_markers(
            Arc::clone(&annotator),
            config.scoring.importance_markers.clone(),
        );
        let scorer = MatchScorer::with_components(extractor, Arc::new(TfIdfSimilarity::new()));

        let mut keyword_matcher =
            KeywordMatcher::with_custom_keywords(config.matching.extra_keywords.clone())?;
        keyword_matcher.set_fuzzy_threshold(config.matching.fuzzy_threshold);

        Ok(Self {
            annotator,
            scorer,
            fact_extractor: FactExtractor::with_skills(config.facts.skills.clone())?,
            keyword_matcher,
            word_cloud: WordCloud::new(config.facts.word_cloud_size, config.facts.skill_emphasis),
        })
    }

    pub fn analyze(&self, resume_text: &str, job_text: &str) -> Result<Analysis> {
        let start_time = Instant::now();
        info!("Starting resume analysis");

        let job = Document::new(job_text, self.annotator.as_ref())?;
        debug!("Job description: {} sentences", job.sentences().len());

        let match_result = self.scorer.score_document(resume_text, &job)?;
        let keywords = self.keyword_matcher.find_matches(resume_text, job.content());
        let insights = self.job_insights(job.content());

        let processing_time_ms = start_time.elapsed().as_millis() as u64;
        info!("Analysis completed in {}ms", processing_time_ms);

        Ok(Analysis {
            match_result,
            facts: insights.facts,
            keywords,
            word_cloud: insights.word_cloud,
            resume_words: resume_text.split_whitespace().count(),
            job_words: job.word_count(),
            processing_time_ms,
        })
    }

    pub fn job_insights(&self, job_text: &str) -> JobInsights {
        let facts = self.fact_extractor.extract(job_text);
        let word_cloud = self.word_cloud.weights(job_text, &facts.skills);
        debug!(
            "Extracted {} skill mentions, {} cloud terms",
            facts.skills.len(),
            word_cloud.len()
        );
        JobInsights { facts, word_cloud }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResumeMatcherError;
    use crate::processing::annotator::TaggedToken;

    struct SilentAnnotator;

    impl Annotator for SilentAnnotator {
        fn segment_sentences(&self, _text: &str) -> Result<Vec<String>> {
            Err(ResumeMatcherError::AnnotationUnavailable("no model".to_string()))
        }

        fn tag_tokens(&self, _text: &str) -> Result<Vec<TaggedToken>> {
            Err(ResumeMatcherError::AnnotationUnavailable("no model".to_string()))
        }
    }

    #[test]
    fn test_full_analysis() {
        let engine = AnalysisEngine::new(&Config::default()).unwrap();
        let analysis = engine
            .analyze(
                "Senior Python developer. 6 years of experience building APIs with Docker.",
                "Python developer required. Must have Docker experience. Remote. 5+ years of experience.",
            )
            .unwrap();

        assert!(analysis.match_result.score >= 7.0);
        assert_eq!(analysis.facts.location, "Remote");
        assert_eq!(analysis.facts.experience, Some("5+".to_string()));
        assert!(analysis.keywords.found.contains(&"python".to_string()));
        assert!(!analysis.word_cloud.is_empty());
        assert!(analysis.resume_words > 0);
    }

    #[test]
    fn test_empty_job_scores_zero() {
        let engine = AnalysisEngine::new(&Config::default()).unwrap();
        let analysis = engine.analyze("Anything at all", "").unwrap();
        assert_eq!(analysis.match_result.score, 0.0);
        assert_eq!(analysis.facts.location, "Unknown");
    }

    #[test]
    fn test_annotation_failure_propagates() {
        let engine = AnalysisEngine::with_annotator(&Config::default(), Arc::new(SilentAnnotator)).unwrap();
        let err = engine.analyze("resume", "job text").unwrap_err();
        assert!(matches!(err, ResumeMatcherError::AnnotationUnavailable(_)));
    }

    #[test]
    fn test_job_insights_emphasise_skills() {
        let engine = AnalysisEngine::new(&Config::default()).unwrap();
        let insights = engine.job_insights("We use Rust daily. Teamwork and teamwork again.");
        assert_eq!(insights.facts.skills, vec!["Rust"]);
        assert_eq!(insights.word_cloud[0].term, "rust");
    }
}
