//! Configuration management for the resume matcher

use crate::error::{Result, ResumeMatcherError};
use crate::processing::keyword_matcher::DEFAULT_FUZZY_THRESHOLD;
use crate::processing::patterns::{IMPORTANCE_MARKERS, SKILL_VOCABULARY};
use crate::processing::word_cloud::{DEFAULT_MAX_WORDS, DEFAULT_SKILL_EMPHASIS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub facts: FactsConfig,
    pub matching: MatchingConfig,
    pub generation: GenerationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub importance_markers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactsConfig {
    pub skills: Vec<String>,
    pub word_cloud_size: usize,
    pub skill_emphasis: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub fuzzy_threshold: f32,
    pub extra_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub api_url: String,
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig {
                importance_markers: IMPORTANCE_MARKERS.iter().map(|m| m.to_string()).collect(),
            },
            facts: FactsConfig {
                skills: SKILL_VOCABULARY.iter().map(|s| s.to_string()).collect(),
                word_cloud_size: DEFAULT_MAX_WORDS,
                skill_emphasis: DEFAULT_SKILL_EMPHASIS,
            },
            matching: MatchingConfig {
                fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
                extra_keywords: Vec::new(),
            },
            generation: GenerationConfig {
                api_url: "https://api.groq.com/openai/v1/chat/completions".to_string(),
                model: "mixtral-8x7b-32768".to_string(),
                api_key_env: "GROQ_API_KEY".to_string(),
                temperature: 0.7,
                max_tokens: 2048,
                top_p: 1.0,
                timeout_secs: 60,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-matcher")
            .join("config.toml")
    }

    /// Set a single value by dotted key, e.g. `generation.timeout_secs`.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "scoring.importance_markers" => self.scoring.importance_markers = parse_list(value),
            "facts.skills" => self.facts.skills = parse_list(value),
            "facts.word_cloud_size" => self.facts.word_cloud_size = parse_value(key, value)?,
            "facts.skill_emphasis" => self.facts.skill_emphasis = parse_value(key, value)?,
            "matching.fuzzy_threshold" => self.matching.fuzzy_threshold = parse_value(key, value)?,
            "matching.extra_keywords" => self.matching.extra_keywords = parse_list(value),
            "generation.api_url" => self.generation.api_url = value.to_string(),
            "generation.model" => self.generation.model = value.to_string(),
            "generation.api_key_env" => self.generation.api_key_env = value.to_string(),
            "generation.temperature" => self.generation.temperature = parse_value(key, value)?,
            "generation.max_tokens" => self.generation.max_tokens = parse_value(key, value)?,
            "generation.top_p" => self.generation.top_p = parse_value(key, value)?,
            "generation.timeout_secs" => self.generation.timeout_secs = parse_value(key, value)?,
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(ResumeMatcherError::Configuration)?
            }
            "output.detailed" => self.output.detailed = parse_value(key, value)?,
            "output.color_output" => self.output.color_output = parse_value(key, value)?,
            _ => {
                return Err(ResumeMatcherError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        ResumeMatcherError::Configuration(format!("Invalid value for {}: {}", key, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scoring.importance_markers.len(), 15);
        assert!(config.facts.skills.contains(&"Python".to_string()));
        assert_eq!(config.generation.timeout_secs, 60);
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_toml_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.generation.model = "llama-3.1-8b-instant".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "scoring = 12").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ResumeMatcherError::Configuration(_)));
    }

    #[test]
    fn test_set_value() {
        let mut config = Config::default();
        config.set_value("generation.timeout_secs", "15").unwrap();
        config.set_value("facts.skills", "Rust, Elixir ,").unwrap();
        config.set_value("output.format", "json").unwrap();

        assert_eq!(config.generation.timeout_secs, 15);
        assert_eq!(config.facts.skills, vec!["Rust", "Elixir"]);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_set_value_rejects_bad_input() {
        let mut config = Config::default();
        assert!(config.set_value("generation.timeout_secs", "soon").is_err());
        assert!(config.set_value("nope.key", "1").is_err());
    }
}
