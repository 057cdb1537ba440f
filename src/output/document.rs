//! Rendering generated resume text into a PDF document

use crate::error::{Result, ResumeMatcherError};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;
const MARGIN_MM: f32 = 25.4;
const PT_TO_MM: f32 = 0.352_778;

const TITLE_SIZE_PT: f32 = 20.0;
const BODY_SIZE_PT: f32 = 11.0;
const LINE_SPACING: f32 = 1.2;
const PARAGRAPH_SPACING_PT: f32 = 12.0;
/// Average Helvetica glyph width as a fraction of the font size
const AVERAGE_GLYPH_WIDTH: f32 = 0.5;

pub const DEFAULT_TITLE: &str = "Optimized Resume";

pub trait DocumentWriter: Send + Sync {
    /// Title plus one paragraph per blank-line separated block.
    fn write_formatted(&self, title: &str, content: &str) -> Result<Vec<u8>>;

    /// All content as a single paragraph, no title.
    fn write_basic(&self, content: &str) -> Result<Vec<u8>>;
}

/// US Letter PDF with one inch margins in builtin Helvetica.
#[derive(Debug, Default, Clone)]
pub struct PdfDocumentWriter;

impl PdfDocumentWriter {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentWriter for PdfDocumentWriter {
    fn write_formatted(&self, title: &str, content: &str) -> Result<Vec<u8>> {
        let mut page = PageWriter::new(title)?;

        page.write_title(title)?;
        for paragraph in content.split("\n\n").map(str::trim).filter(|p| !p.is_empty()) {
            page.write_paragraph(paragraph)?;
        }

        page.finish()
    }

    fn write_basic(&self, content: &str) -> Result<Vec<u8>> {
        let mut page = PageWriter::new(DEFAULT_TITLE)?;
        page.write_paragraph(content)?;
        page.finish()
    }
}

struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    cursor_y: f32,
    pages: usize,
}

impl PageWriter {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Page 1");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(formatting_error)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(formatting_error)?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            cursor_y: PAGE_HEIGHT_MM - MARGIN_MM,
            pages: 1,
        })
    }

    fn write_title(&mut self, title: &str) -> Result<()> {
        let line_height = TITLE_SIZE_PT * LINE_SPACING * PT_TO_MM;
        self.ensure_room(line_height);
        self.cursor_y -= line_height;

        let width = estimated_width(title, TITLE_SIZE_PT);
        let x = ((PAGE_WIDTH_MM - width) / 2.0).max(MARGIN_MM);
        self.layer.use_text(title, TITLE_SIZE_PT, Mm(x), Mm(self.cursor_y), &self.bold);

        self.cursor_y -= PARAGRAPH_SPACING_PT * PT_TO_MM;
        Ok(())
    }

    fn write_paragraph(&mut self, paragraph: &str) -> Result<()> {
        let line_height = BODY_SIZE_PT * LINE_SPACING * PT_TO_MM;
        let max_chars = max_chars_per_line(BODY_SIZE_PT);

        for source_line in paragraph.lines() {
            for line in wrap_line(source_line, max_chars) {
                self.ensure_room(line_height);
                self.cursor_y -= line_height;
                self.layer
                    .use_text(line, BODY_SIZE_PT, Mm(MARGIN_MM), Mm(self.cursor_y), &self.regular);
            }
        }

        self.cursor_y -= PARAGRAPH_SPACING_PT * PT_TO_MM;
        Ok(())
    }

    fn ensure_room(&mut self, needed: f32) {
        if self.cursor_y - needed >= MARGIN_MM {
            return;
        }

        self.pages += 1;
        let (page, layer) = self.doc.add_page(
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            format!("Page {}", self.pages),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor_y = PAGE_HEIGHT_MM - MARGIN_MM;
    }

    fn finish(self) -> Result<Vec<u8>> {
        self.doc.save_to_bytes().map_err(formatting_error)
    }
}

fn formatting_error(e: printpdf::Error) -> ResumeMatcherError {
    ResumeMatcherError::DocumentFormatting(e.to_string())
}

fn estimated_width(text: &str, size_pt: f32) -> f32 {
    text.chars().count() as f32 * size_pt * AVERAGE_GLYPH_WIDTH * PT_TO_MM
}

fn max_chars_per_line(size_pt: f32) -> usize {
    let usable = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
    (usable / (size_pt * AVERAGE_GLYPH_WIDTH * PT_TO_MM)).floor().max(1.0) as usize
}

/// Greedy word wrap. Words longer than a line are split.
fn wrap_line(line: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let current_len = current.chars().count();
        if current_len > 0 && current_len + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
