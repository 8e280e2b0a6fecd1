//! PDF emission for the paginated document.
//!
//! Serializes placed spans into a minimal PDF 1.4 file using the base-14
//! Times faces, one content stream per page. Linked spans get a URI link
//! annotation and a thin underline so they stay visually distinguished on
//! paper.

use std::fmt::Write as _;

use crate::error::Result;
use crate::model::Page;

use super::paginate::PaginatedDocument;

/// Resource names for the two fonts every page references.
const FONT_ROMAN: &str = "F1";
const FONT_BOLD: &str = "F2";

/// Serialize a paginated document to PDF bytes.
pub fn to_pdf_bytes(document: &PaginatedDocument) -> Result<Vec<u8>> {
    let mut writer = PdfWriter::new();
    writer.write_document(document);
    Ok(writer.finish())
}

/// Incremental PDF writer tracking object offsets for the xref table.
struct PdfWriter {
    buffer: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfWriter {
    fn new() -> Self {
        let mut writer = Self {
            buffer: Vec::new(),
            offsets: Vec::new(),
        };
        writer.buffer.extend_from_slice(b"%PDF-1.4\n");
        writer
    }

    /// Object ids are fixed by layout: 1 catalog, 2 page tree, 3/4 fonts,
    /// then one page object and one content stream per page.
    fn write_document(&mut self, document: &PaginatedDocument) {
        let page_count = document.pages.len();
        let page_object = |index: usize| 5 + 2 * index;
        let content_object = |index: usize| 6 + 2 * index;

        self.begin_object(1);
        self.push_str("<< /Type /Catalog /Pages 2 0 R >>\n");
        self.end_object();

        let kids: Vec<String> = (0..page_count)
            .map(|i| format!("{} 0 R", page_object(i)))
            .collect();
        self.begin_object(2);
        self.push_str(&format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>\n",
            kids.join(" "),
            page_count
        ));
        self.end_object();

        self.begin_object(3);
        self.push_str("<< /Type /Font /Subtype /Type1 /BaseFont /Times-Roman >>\n");
        self.end_object();
        self.begin_object(4);
        self.push_str("<< /Type /Font /Subtype /Type1 /BaseFont /Times-Bold >>\n");
        self.end_object();

        for (index, page) in document.pages.iter().enumerate() {
            let geometry = &document.geometry;
            let annotations = link_annotations(page, geometry.page_height);

            self.begin_object(page_object(index));
            self.push_str(&format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
                 /Resources << /Font << /{} 3 0 R /{} 4 0 R >> >> \
                 /Contents {} 0 R{} >>\n",
                geometry.page_width,
                geometry.page_height,
                FONT_ROMAN,
                FONT_BOLD,
                content_object(index),
                annotations
            ));
            self.end_object();

            let content = page_content(page, geometry.page_height, geometry.font_size);
            self.begin_object(content_object(index));
            self.push_str(&format!("<< /Length {} >>\nstream\n", content.len()));
            self.push_str(&content);
            self.push_str("endstream\n");
            self.end_object();
        }
    }

    fn begin_object(&mut self, id: usize) {
        debug_assert_eq!(id, self.offsets.len() + 1);
        self.offsets.push(self.buffer.len());
        self.push_str(&format!("{} 0 obj\n", id));
    }

    fn end_object(&mut self) {
        self.push_str("endobj\n");
    }

    fn push_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
    }

    fn finish(mut self) -> Vec<u8> {
        let xref_offset = self.buffer.len();
        let count = self.offsets.len() + 1;
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", count);
        for offset in &self.offsets {
            let _ = writeln!(xref, "{:010} 00000 n ", offset);
        }
        self.push_str(&xref);
        self.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            count, xref_offset
        ));
        self.buffer
    }
}

/// Build the text-drawing content stream for one page. Span coordinates use
/// a top-left origin; PDF user space is bottom-up, so baselines flip here.
fn page_content(page: &Page, page_height: f32, font_size: f32) -> String {
    let mut content = String::new();
    for span in &page.spans {
        let y = page_height - span.y;
        let font = if span.bold { FONT_BOLD } else { FONT_ROMAN };
        let _ = writeln!(
            content,
            "BT /{} {} Tf {:.2} {:.2} Td ({}) Tj ET",
            font,
            font_size,
            span.x,
            y,
            escape_pdf_string(&span.text)
        );
        if span.href.is_some() {
            // Underline linked spans.
            let _ = writeln!(
                content,
                "0.5 w {:.2} {:.2} m {:.2} {:.2} l S",
                span.x,
                y - 1.5,
                span.x + span.width,
                y - 1.5
            );
        }
    }
    content
}

/// Build the /Annots entry holding a URI link rectangle per linked span.
fn link_annotations(page: &Page, page_height: f32) -> String {
    let mut entries = Vec::new();
    for span in &page.spans {
        let Some(href) = &span.href else { continue };
        let y = page_height - span.y;
        entries.push(format!(
            "<< /Type /Annot /Subtype /Link /Border [0 0 0] \
             /Rect [{:.2} {:.2} {:.2} {:.2}] \
             /A << /S /URI /URI ({}) >> >>",
            span.x,
            y - 2.0,
            span.x + span.width,
            y + 8.0,
            escape_pdf_string(href)
        ));
    }
    if entries.is_empty() {
        String::new()
    } else {
        format!(" /Annots [{}]", entries.join(" "))
    }
}

/// Escape the characters with meaning inside a PDF literal string.
fn escape_pdf_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{paginate, RenderOptions};
    use crate::segment::segment;

    fn pdf_for(text: &str, options: &RenderOptions) -> Vec<u8> {
        let doc = segment(text);
        let paged = paginate(&doc, options).unwrap();
        to_pdf_bytes(&paged).unwrap()
    }

    #[test]
    fn test_pdf_envelope() {
        let bytes = pdf_for("A Regular Meeting was held.\n", &RenderOptions::new());
        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(bytes.ends_with(b"%%EOF\n"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 1"));
        assert!(text.contains("/Times-Roman"));
    }

    #[test]
    fn test_bold_spans_use_bold_font() {
        let bytes = pdf_for(
            "A Regular Meeting was held.\n1. CALL TO ORDER\n",
            &RenderOptions::new(),
        );
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/F2 10 Tf"));
    }

    #[test]
    fn test_link_annotation_emitted() {
        let options = RenderOptions::new().with_video_url("https://vid.example/m1");
        let bytes = pdf_for(
            "A Regular Meeting was held.\n1. X\n[REVIEW: check @0:10]\n",
            &options,
        );
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Subtype /Link"));
        assert!(text.contains("https://vid.example/m1?t=10"));
    }

    #[test]
    fn test_parentheses_escaped() {
        let bytes = pdf_for(
            "A Regular Meeting was held.\nMotion carried (5-0).\n",
            &RenderOptions::new(),
        );
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("\\(5-0\\)"));
    }

    #[test]
    fn test_escape_pdf_string() {
        assert_eq!(escape_pdf_string("a(b)c\\d"), "a\\(b\\)c\\\\d");
        assert_eq!(escape_pdf_string("plain"), "plain");
    }
}
