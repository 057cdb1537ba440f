//! Error handling for the resume matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("Annotation service unavailable: {0}")]
    AnnotationUnavailable(String),

    #[error("Text processing error: {0}")]
    TextProcessing(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Document formatting error: {0}")]
    DocumentFormatting(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeMatcherError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeMatcherError {
    fn from(err: anyhow::Error) -> Self {
        ResumeMatcherError::TextProcessing(err.to_string())
    }
}

impl From<regex::Error> for ResumeMatcherError {
    fn from(err: regex::Error) -> Self {
        ResumeMatcherError::Configuration(format!("Invalid pattern: {}", err))
    }
}
