//! CLI interface for the resume matcher

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use log::warn;
use std::path::{Path, PathBuf};

pub const INPUT_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "md", "markdown"];

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(about = "Score how well a resume matches a job description")]
#[command(long_about = "Score resume and job description fit, extract job facts, and generate a tailored resume PDF")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a job description
    Score {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include requirement terms and score breakdown
        #[arg(short, long)]
        detailed: bool,
    },

    /// Extract structured facts and a word cloud from a job description
    Facts {
        /// Path to job description file
        #[arg(short, long)]
        job: PathBuf,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Rewrite a resume for a job description and save it as a PDF
    Generate {
        #[arg(short, long)]
        resume: PathBuf,

        #[arg(short, long)]
        job: PathBuf,

        /// Where to write the generated document
        #[arg(long, default_value = "optimized_resume.pdf")]
        out: PathBuf,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "generation.timeout_secs")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Check that an input path is a readable file. Unrecognized extensions are
/// only warned about since they are read as plain text.
pub fn validate_input_file(path: &Path) -> Result<(), String> {
    if !path.is_file() {
        return Err(format!("File does not exist: {}", path.display()));
    }

    if let Some(ext) = path.extension().and_then(|ext| ext.to_str()) {
        if !INPUT_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
            warn!(
                "Unrecognized extension .{} for {}, reading as plain text",
                ext,
                path.display()
            );
        }
    }

    Ok(())
}
