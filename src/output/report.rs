//! Report structures assembled from an analysis

use crate::processing::analyzer::{Analysis, JobInsights};
use crate::processing::facts::StructuredFacts;
use crate::processing::keyword_matcher::KeywordMatches;
use crate::processing::scorer::MatchResult;
use crate::processing::word_cloud::WordWeight;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything one `score` run produces, ready for a formatter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: ReportSummary,
    pub match_result: MatchResult,
    pub facts: StructuredFacts,
    pub keywords: KeywordMatches,
    pub word_cloud: Vec<WordWeight>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub score: f64,
    pub level: MatchLevel,
    pub verdict: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MatchLevel {
    Excellent,
    Strong,
    Good,
    NoMatch,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    /// Version of the matcher used
    pub version: String,
    pub resume_file: String,
    pub job_file: String,
    pub resume_words: usize,
    pub job_words: usize,
    pub processing_time_ms: u64,
}

/// Output of the `facts` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactsReport {
    pub job_file: String,
    pub facts: StructuredFacts,
    pub word_cloud: Vec<WordWeight>,
}

impl MatchLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 9.0 {
            MatchLevel::Excellent
        } else if score >= 8.0 {
            MatchLevel::Strong
        } else if score > 0.0 {
            MatchLevel::Good
        } else {
            MatchLevel::NoMatch
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchLevel::Excellent => "EXCELLENT",
            MatchLevel::Strong => "STRONG",
            MatchLevel::Good => "GOOD",
            MatchLevel::NoMatch => "NO MATCH",
        }
    }

    pub fn verdict(&self) -> &'static str {
        match self {
            MatchLevel::Excellent => "Resume covers nearly every stated requirement",
            MatchLevel::Strong => "Resume covers most stated requirements",
            MatchLevel::Good => "Resume shows some overlap with the requirements",
            MatchLevel::NoMatch => "No requirements from the job description were found in the resume",
        }
    }
}

impl AnalysisReport {
    pub fn from_analysis(analysis: Analysis, resume_file: &str, job_file: &str) -> Self {
        let level = MatchLevel::from_score(analysis.match_result.score);

        Self {
            summary: ReportSummary {
                score: analysis.match_result.score,
                level,
                verdict: level.verdict().to_string(),
            },
            match_result: analysis.match_result,
            facts: analysis.facts,
            keywords: analysis.keywords,
            word_cloud: analysis.word_cloud,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                resume_file: resume_file.to_string(),
                job_file: job_file.to_string(),
                resume_words: analysis.resume_words,
                job_words: analysis.job_words,
                processing_time_ms: analysis.processing_time_ms,
            },
        }
    }
}

impl FactsReport {
    pub fn new(insights: JobInsights, job_file: &str) -> Self {
        Self {
            job_file: job_file.to_string(),
            facts: insights.facts,
            word_cloud: insights.word_cloud,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_levels() {
        assert_eq!(MatchLevel::from_score(10.0), MatchLevel::Excellent);
        assert_eq!(MatchLevel::from_score(8.4), MatchLevel::Strong);
        assert_eq!(MatchLevel::from_score(7.0), MatchLevel::Good);
        assert_eq!(MatchLevel::from_score(0.0), MatchLevel::NoMatch);
    }
}
