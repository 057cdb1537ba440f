//! Document model: raw text plus its sentence segmentation

use crate::error::Result;
use crate::processing::annotator::{unavailable, Annotator};
use serde::{Deserialize, Serialize};

/// Immutable analysed text. Segmented once and borrowed by every stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    content: String,
    sentences: Vec<String>,
}

impl Document {
    pub fn new(content: impl Into<String>, annotator: &dyn Annotator) -> Result<Self> {
        let content = content.into();
        let sentences = annotator.segment_sentences(&content).map_err(unavailable)?;

        Ok(Self { content, sentences })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}
