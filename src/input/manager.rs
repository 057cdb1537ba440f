//! Input manager routing files to the right extractor

use crate::error::{Result, ResumeMatcherError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    DocxExtractor, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(path) {
                debug!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.is_file() {
            return Err(ResumeMatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match FileType::detect(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Docx => {
                info!("Extracting text from DOCX: {}", path.display());
                DocxExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Text | FileType::Unknown => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
        };

        if self.enable_cache {
            self.cache.insert(path.to_path_buf(), text.clone());
        }

        Ok(text)
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file() {
        let mut manager = InputManager::new();
        let err = manager.extract_text(Path::new("/definitely/not/here.txt")).await.unwrap_err();
        assert!(matches!(err, ResumeMatcherError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_unknown_extension_reads_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.rtf");
        std::fs::write(&path, "Remote role. Python required.").unwrap();

        let mut manager = InputManager::new();
        let text = manager.extract_text(&path).await.unwrap();
        assert_eq!(text, "Remote role. Python required.");
    }

    #[tokio::test]
    async fn test_broken_docx_is_not_read_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        std::fs::write(&path, "not a zip archive").unwrap();

        let mut manager = InputManager::new();
        let err = manager.extract_text(&path).await.unwrap_err();
        assert!(matches!(err, ResumeMatcherError::DocxExtraction(_)));
        assert_eq!(manager.cache_size(), 0);
    }

    #[tokio::test]
    async fn test_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.md");
        std::fs::write(&path, "# Resume\n\nRust engineer").unwrap();

        let mut manager = InputManager::new();
        let first = manager.extract_text(&path).await.unwrap();
        std::fs::write(&path, "changed").unwrap();
        let second = manager.extract_text(&path).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(manager.cache_size(), 1);

        let mut uncached = InputManager::new().with_cache(false);
        assert_eq!(uncached.extract_text(&path).await.unwrap(), "changed");
        assert_eq!(uncached.cache_size(), 0);
    }
}
