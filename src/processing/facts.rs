//! Structured facts pulled from a job description for display.
//!
//! Each fact is an independent pattern rule; a missing fact is a normal
//! outcome. Nothing here feeds the match score.

use crate::error::Result;
use crate::processing::patterns::{
    EDUCATION_PATTERN, EXPERIENCE_PATTERN, LOCATION_PATTERN, NON_LOCATION_ARRANGEMENTS,
    SALARY_PATTERN, SKILL_VOCABULARY, WORK_ARRANGEMENT_PATTERN,
};
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const REMOTE_LOCATION: &str = "Remote";
pub const UNKNOWN_LOCATION: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredFacts {
    /// Number or range of years, e.g. "5+" or "3-5"
    pub experience: Option<String>,
    pub location: String,
    pub salary: Option<String>,
    pub education: Option<String>,
    /// Every skill occurrence in text order, duplicates kept
    pub skills: Vec<String>,
}

pub struct FactExtractor {
    experience_regex: Regex,
    arrangement_regex: Regex,
    location_regex: Regex,
    salary_regex: Regex,
    education_regex: Regex,
    skills_regex: Option<Regex>,
}

impl FactExtractor {
    pub fn new() -> Result<Self> {
        Self::with_skills(SKILL_VOCABULARY.iter().map(|s| s.to_string()).collect())
    }

    /// Build with a custom skill vocabulary. Order matters only for
    /// overlapping alternatives.
    pub fn with_skills(skills: Vec<String>) -> Result<Self> {
        Ok(Self {
            experience_regex: Regex::new(EXPERIENCE_PATTERN)?,
            arrangement_regex: Regex::new(WORK_ARRANGEMENT_PATTERN)?,
            location_regex: Regex::new(LOCATION_PATTERN)?,
            salary_regex: Regex::new(SALARY_PATTERN)?,
            education_regex: Regex::new(EDUCATION_PATTERN)?,
            skills_regex: build_skills_regex(&skills)?,
        })
    }

    pub fn extract(&self, job_text: &str) -> StructuredFacts {
        StructuredFacts {
            experience: self.experience(job_text),
            location: self.location(job_text),
            salary: self.salary(job_text),
            education: self.education(job_text),
            skills: self.skills(job_text),
        }
    }

    pub fn experience(&self, text: &str) -> Option<String> {
        self.experience_regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    }

    /// Remote wins over any place; otherwise the first place-like phrase
    /// that is not just a work arrangement.
    pub fn location(&self, text: &str) -> String {
        let remote = self
            .arrangement_regex
            .find_iter(text)
            .any(|m| m.as_str().eq_ignore_ascii_case("remote"));
        if remote {
            return REMOTE_LOCATION.to_string();
        }

        self.location_regex
            .find_iter(text)
            .map(|m| m.as_str())
            .find(|candidate| {
                let lower = candidate.to_lowercase();
                !NON_LOCATION_ARRANGEMENTS.contains(&lower.as_str())
            })
            .map(|candidate| candidate.to_string())
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string())
    }

    pub fn salary(&self, text: &str) -> Option<String> {
        self.salary_regex.find(text).map(|m| m.as_str().to_string())
    }

    pub fn education(&self, text: &str) -> Option<String> {
        self.education_regex.find(text).map(|m| m.as_str().to_string())
    }

    pub fn skills(&self, text: &str) -> Vec<String> {
        match &self.skills_regex {
            Some(regex) => regex.find_iter(text).map(|m| m.as_str().to_string()).collect(),
            None => Vec::new(),
        }
    }
}

fn build_skills_regex(skills: &[String]) -> Result<Option<Regex>> {
    let alternatives: Vec<String> = skills
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| regex::escape(s.trim()))
        .collect();

    if alternatives.is_empty() {
        return Ok(None);
    }

    Ok(Some(Regex::new(&format!(r"\b(?:{})\b", alternatives.join("|")))?))
}
