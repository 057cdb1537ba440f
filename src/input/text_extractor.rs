//! Text extraction from resume and job description files

use crate::error::{Result, ResumeMatcherError};
use pulldown_cmark::{Event, Parser, Tag};
use quick_xml::events::Event as XmlEvent;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use std::path::Path;
use tokio::fs;
use zip::ZipArchive;

const DOCX_BODY: &str = "word/document.xml";

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeMatcherError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        read_docx(&bytes).map_err(|e| {
            ResumeMatcherError::DocxExtraction(format!(
                "Failed to extract text from DOCX '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

/// Text runs of a Word document body, one line per paragraph.
pub fn docx_to_text(bytes: &[u8]) -> Result<String> {
    read_docx(bytes).map_err(|e| ResumeMatcherError::DocxExtraction(e.to_string()))
}

fn read_docx(bytes: &[u8]) -> anyhow::Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCX_BODY)?.read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event()? {
            XmlEvent::Start(e) if e.local_name().as_ref() == b"t" => in_run_text = true,
            XmlEvent::End(e) => match e.local_name().as_ref() {
                b"t" => in_run_text = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            XmlEvent::Empty(e) => match e.local_name().as_ref() {
                b"tab" => text.push('\t'),
                b"br" | b"cr" => text.push('\n'),
                _ => {}
            },
            XmlEvent::Text(t) if in_run_text => text.push_str(&t.unescape()?),
            XmlEvent::Eof => break,
            _ => {}
        }
    }

    Ok(text.trim().to_string())
}

/// Also used for unknown extensions. Invalid UTF-8 is replaced rather than
/// rejected.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown))
    }
}

/// Markdown with formatting stripped. Block elements end with a blank line
/// so paragraph boundaries survive.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            Event::End(Tag::Paragraph) | Event::End(Tag::Heading(..)) | Event::End(Tag::CodeBlock(_)) => {
                text.push_str("\n\n")
            }
            Event::End(Tag::Item) => text.push('\n'),
            _ => {}
        }
    }

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn docx_bytes(body: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCX_BODY, zip::write::FileOptions::default())
            .unwrap();
        writer
            .write_all(
                format!(
                    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
                    body
                )
                .as_bytes(),
            )
            .unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_markdown_to_text() {
        let text = markdown_to_text("# Jane Doe\n\n**Senior** engineer using `Rust`.\n\n- Python\n- SQL\n");
        assert_eq!(text, "Jane Doe\n\nSenior engineer using Rust.\n\nPython\nSQL");
    }

    #[tokio::test]
    async fn test_plain_text_is_lossy() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"caf\xe9 owner").unwrap();

        let text = PlainTextExtractor.extract(file.path()).await.unwrap();
        assert!(text.starts_with("caf"));
        assert!(text.ends_with(" owner"));
    }

    #[test]
    fn test_docx_to_text() {
        let bytes = docx_bytes(
            r#"<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p><w:p><w:r><w:t xml:space="preserve">Python &amp; SQL, </w:t></w:r><w:r><w:tab/><w:t>5+ years</w:t></w:r></w:p>"#,
        );

        assert_eq!(docx_to_text(&bytes).unwrap(), "Jane Doe\nPython & SQL, \t5+ years");
    }

    #[test]
    fn test_docx_without_body_is_error() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer.start_file("word/styles.xml", zip::write::FileOptions::default()).unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        assert!(matches!(docx_to_text(&bytes), Err(ResumeMatcherError::DocxExtraction(_))));
        assert!(matches!(docx_to_text(b"plain text"), Err(ResumeMatcherError::DocxExtraction(_))));
    }

    #[tokio::test]
    async fn test_docx_extractor_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        std::fs::write(&path, docx_bytes("<w:p><w:r><w:t>Rust engineer</w:t></w:r></w:p>")).unwrap();

        assert_eq!(DocxExtractor.extract(&path).await.unwrap(), "Rust engineer");
    }
}
