//! Resume rewriting with graceful degradation
//!
//! `generate` always yields bytes: a failed completion falls back to the
//! original resume text, a failed formatted render falls back to a bare
//! document, and a failed bare render falls back to the raw UTF-8 text.

use crate::llm::client::{CompletionClient, LlmError};
use crate::llm::prompts::{render_rewrite_prompt, SYSTEM_PROMPT};
use crate::output::document::{DocumentWriter, DEFAULT_TITLE};
use log::{info, warn};
use std::time::Duration;

pub struct ResumeGenerator<C, W> {
    client: Option<C>,
    writer: W,
    timeout: Duration,
}

impl<C: CompletionClient, W: DocumentWriter> ResumeGenerator<C, W> {
    /// `client` is `None` when no completion service is configured; the
    /// original text is then rendered as is.
    pub fn new(client: Option<C>, writer: W, timeout: Duration) -> Self {
        Self {
            client,
            writer,
            timeout,
        }
    }

    pub async fn generate(&self, resume_text: &str, job_text: &str) -> Vec<u8> {
        let content = match self.optimized_content(resume_text, job_text).await {
            Ok(content) => {
                info!("Generated optimized resume ({} chars)", content.len());
                content
            }
            Err(e) => {
                warn!("Resume rewrite failed, using original text: {}", e);
                resume_text.to_string()
            }
        };

        self.render(&content)
    }

    pub async fn optimized_content(&self, resume_text: &str, job_text: &str) -> Result<String, LlmError> {
        let client = self
            .client
            .as_ref()
            .ok_or(LlmError::NotConfigured)?;

        let prompt = render_rewrite_prompt(resume_text, job_text);
        match tokio::time::timeout(self.timeout, client.complete(SYSTEM_PROMPT, &prompt)).await {
            Ok(result) => {
                let content = result?;
                if content.trim().is_empty() {
                    Err(LlmError::EmptyContent)
                } else {
                    Ok(content.trim().to_string())
                }
            }
            Err(_) => Err(LlmError::Timeout(self.timeout.as_secs())),
        }
    }

    pub fn render(&self, content: &str) -> Vec<u8> {
        match self.writer.write_formatted(DEFAULT_TITLE, content) {
            Ok(bytes) => return bytes,
            Err(e) => warn!("Formatted document failed, trying basic layout: {}", e),
        }

        match self.writer.write_basic(content) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Basic document failed, returning plain text: {}", e);
                content.as_bytes().to_vec()
            }
        }
    }
}
