//! Pagination renderer: the segmented document as fixed-size pages.
//!
//! A running vertical cursor places one block at a time; a block's wrapped
//! height is computed before placement and the page is closed (footer) and a
//! new one opened (header) whenever the block would cross the bottom content
//! boundary. Pagination only ever breaks between logical lines: the wrapped
//! rows of a single line always land on one page together.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::annotate::AnnotationExtractor;
use crate::error::Result;
use crate::model::{Inline, LineRole, LineSpan, Page, SegmentedDocument, SpanOrigin};

use super::{PageGeometry, RenderOptions};

/// Blank-line gaps padding the title block above and below.
const TITLE_BLOCK_GAP_LINES: usize = 2;

/// Blank-line gap reserved above the signature block.
const SIGNATURE_GAP_LINES: usize = 2;

/// Rows the signature block itself occupies: rules, names, titles.
const SIGNATURE_ROWS: usize = 3;

/// Horizontal gap between the two signature columns, in points.
const SIGNATURE_COLUMN_GAP: f32 = 48.0;

/// The paginated document: ordered fixed-size pages of placed spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedDocument {
    /// Pages in order, 1-indexed numbering.
    pub pages: Vec<Page>,

    /// The geometry the pages were laid out against.
    pub geometry: PageGeometry,
}

impl PaginatedDocument {
    /// Number of pages produced.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The (role, bold, indent) triple per logical line, in traversal order.
    ///
    /// Blank spacing lines produce no spans and are omitted; otherwise this
    /// must agree exactly with the screen renderer's traversal.
    pub fn style_triples(&self) -> Vec<(LineRole, bool, u8)> {
        let mut triples = Vec::new();
        let mut last_line = None;
        for page in &self.pages {
            for span in &page.spans {
                if let SpanOrigin::Body { line, role, indent } = span.origin {
                    if last_line != Some(line) {
                        triples.push((role, span.bold, indent));
                        last_line = Some(line);
                    }
                }
            }
        }
        triples
    }
}

/// Paginate a segmented document against the configured geometry.
pub fn paginate(doc: &SegmentedDocument, options: &RenderOptions) -> Result<PaginatedDocument> {
    options.geometry.validate()?;
    let mut paginator = Paginator::new(options.geometry, options.header_text.as_deref());
    let extractor = AnnotationExtractor::new();
    let video_url = options.video_url.as_deref();

    let lines = doc.layout_lines();
    let mut cursor = 0;

    // Title block, padded by blank-line gaps on both sides.
    if !doc.title_lines.is_empty() {
        paginator.advance_gap(TITLE_BLOCK_GAP_LINES);
        while cursor < lines.len() && lines[cursor].role == LineRole::Title {
            paginator.place_title_line(lines[cursor].index, lines[cursor].text);
            cursor += 1;
        }
        paginator.advance_gap(TITLE_BLOCK_GAP_LINES);
    }

    for line in &lines[cursor..] {
        match line.role {
            LineRole::Title => {}
            LineRole::Blank => paginator.advance_gap(1),
            LineRole::SectionHeader => {
                let runs = to_runs(extractor.extract(line.text, video_url));
                paginator.place_section_header(
                    line.index,
                    line.section_number.unwrap_or_default(),
                    &runs,
                );
            }
            LineRole::SectionBody | LineRole::FullWidth => {
                let runs = if line.role == LineRole::FullWidth && line.text.starts_with("http") {
                    // Rendered as an external hyperlink.
                    vec![Run::new(line.text, Some(line.text.to_string()))]
                } else {
                    to_runs(extractor.extract(line.text, video_url))
                };
                paginator.place_body_line(line.index, line.role, line.bold, line.indent, &runs);
            }
        }
    }

    if !doc.signature.is_empty() {
        paginator.place_signature(&doc.signature);
    }

    let document = paginator.finish();
    log::debug!("paginated into {} page(s)", document.page_count());
    Ok(document)
}

/// A run of characters with a single navigation target, the unit wrapped
/// across rows.
#[derive(Debug, Clone)]
struct Run {
    chars: Vec<char>,
    href: Option<String>,
}

impl Run {
    fn new(text: &str, href: Option<String>) -> Self {
        Self {
            chars: text.chars().collect(),
            href,
        }
    }
}

/// Flatten extracted inline segments into display runs. Marker text is the
/// display form (timestamp stripped); linked markers keep their target.
fn to_runs(segments: Vec<Inline>) -> Vec<Run> {
    segments
        .into_iter()
        .map(|segment| match segment {
            Inline::Text { text } => Run::new(&text, None),
            Inline::Marker { marker, href } => Run::new(&marker.display_text, href),
        })
        .collect()
}

struct Paginator<'a> {
    geometry: PageGeometry,
    header: Option<&'a str>,
    pages: Vec<Page>,
    current: Page,
    /// Baseline of the next placed row, in points from the page top.
    y: f32,
}

impl<'a> Paginator<'a> {
    fn new(geometry: PageGeometry, header: Option<&'a str>) -> Self {
        let mut paginator = Self {
            geometry,
            header,
            pages: Vec::new(),
            current: Page::new(1),
            y: 0.0,
        };
        paginator.open_page(1);
        paginator
    }

    fn open_page(&mut self, number: u32) {
        self.current = Page::new(number);
        if let Some(text) = self.header {
            let width = self.geometry.text_width(text);
            self.current.add_span(LineSpan {
                text: text.to_string(),
                x: self.geometry.margin,
                y: self.geometry.margin,
                width,
                bold: false,
                href: None,
                origin: SpanOrigin::PageHeader,
            });
        }
        self.y = self.geometry.margin + self.geometry.line_height;
    }

    /// Close the current page, emitting its centered page-number footer.
    fn close_page(&mut self) {
        let text = self.current.number.to_string();
        let width = self.geometry.text_width(&text);
        let x = self.geometry.margin + (self.geometry.content_width() - width) / 2.0;
        self.current.add_span(LineSpan {
            text,
            x,
            y: self.geometry.content_bottom() + self.geometry.line_height,
            width,
            bold: false,
            href: None,
            origin: SpanOrigin::PageFooter,
        });
        let number = self.current.number;
        self.pages.push(std::mem::replace(
            &mut self.current,
            Page::new(number + 1),
        ));
    }

    fn finish(mut self) -> PaginatedDocument {
        self.close_page();
        PaginatedDocument {
            pages: self.pages,
            geometry: self.geometry,
        }
    }

    /// Advance the cursor by whole blank lines without placing anything.
    fn advance_gap(&mut self, lines: usize) {
        self.y += lines as f32 * self.geometry.line_height;
    }

    /// Make room for a block of `rows` rendered rows, breaking the page if
    /// its last baseline would cross the bottom content boundary.
    fn ensure_room(&mut self, rows: usize) {
        let last_baseline = self.y + rows.saturating_sub(1) as f32 * self.geometry.line_height;
        if last_baseline > self.geometry.content_bottom() {
            let next = self.current.number + 1;
            self.close_page();
            self.open_page(next);
        }
    }

    fn place_title_line(&mut self, line: usize, text: &str) {
        let max_chars = self.geometry.chars_per_row(self.geometry.content_width());
        let chars: Vec<char> = text.chars().collect();
        let rows = wrap_ranges(&chars, max_chars);
        self.ensure_room(rows.len());
        for row in rows {
            let row_text: String = chars[row].iter().collect();
            let width = self.geometry.text_width(&row_text);
            let x = self.geometry.margin + (self.geometry.content_width() - width) / 2.0;
            self.current.add_span(LineSpan {
                text: row_text,
                x,
                y: self.y,
                width,
                bold: true,
                href: None,
                origin: SpanOrigin::Body {
                    line,
                    role: LineRole::Title,
                    indent: 0,
                },
            });
            self.y += self.geometry.line_height;
        }
    }

    /// Numeric prefix at the left margin, header title at the section
    /// indent, sharing the first baseline; both bold.
    fn place_section_header(&mut self, line: usize, number: &str, runs: &[Run]) {
        let indent_x = self.geometry.margin + self.geometry.section_indent;
        let row_width = self.geometry.content_width() - self.geometry.section_indent;
        let rows = plan_rows(runs, self.geometry.chars_per_row(row_width));
        self.ensure_room(rows.len().max(1));

        let width = self.geometry.text_width(number);
        self.current.add_span(LineSpan {
            text: number.to_string(),
            x: self.geometry.margin,
            y: self.y,
            width,
            bold: true,
            href: None,
            origin: SpanOrigin::Body {
                line,
                role: LineRole::SectionHeader,
                indent: 0,
            },
        });

        let origin = SpanOrigin::Body {
            line,
            role: LineRole::SectionHeader,
            indent: 0,
        };
        self.place_planned_rows(&rows, indent_x, true, &origin);
        if rows.is_empty() {
            self.y += self.geometry.line_height;
        }
    }

    fn place_body_line(&mut self, line: usize, role: LineRole, bold: bool, indent: u8, runs: &[Run]) {
        let x = self.geometry.indent_x(indent);
        let row_width = self.geometry.content_width() - indent as f32 * self.geometry.section_indent;
        let rows = plan_rows(runs, self.geometry.chars_per_row(row_width));
        self.ensure_room(rows.len().max(1));
        let origin = SpanOrigin::Body { line, role, indent };
        self.place_planned_rows(&rows, x, bold, &origin);
    }

    fn place_planned_rows(&mut self, rows: &[Vec<RowPiece>], x: f32, bold: bool, origin: &SpanOrigin) {
        let char_width = self.geometry.text_width("m");
        for row in rows {
            for piece in row {
                let piece_x = x + piece.offset as f32 * char_width;
                let width = self.geometry.text_width(&piece.text);
                self.current.add_span(LineSpan {
                    text: piece.text.clone(),
                    x: piece_x,
                    y: self.y,
                    width,
                    bold,
                    href: piece.href.clone(),
                    origin: origin.clone(),
                });
            }
            self.y += self.geometry.line_height;
        }
    }

    /// Two side-by-side rules, the name row beneath, the title row beneath
    /// that; left and right columns independently positioned.
    fn place_signature(&mut self, signature: &crate::model::SignatureBlock) {
        self.ensure_room(SIGNATURE_GAP_LINES + SIGNATURE_ROWS);
        self.advance_gap(SIGNATURE_GAP_LINES);

        let column_width = (self.geometry.content_width() - SIGNATURE_COLUMN_GAP) / 2.0;
        let left_x = self.geometry.margin;
        let right_x = self.geometry.margin + column_width + SIGNATURE_COLUMN_GAP;
        let rule_chars = self.geometry.chars_per_row(column_width).max(1);
        let rule: String = "_".repeat(rule_chars);

        for x in [left_x, right_x] {
            let width = self.geometry.text_width(&rule);
            self.current.add_span(LineSpan {
                text: rule.clone(),
                x,
                y: self.y,
                width,
                bold: false,
                href: None,
                origin: SpanOrigin::SignatureRule,
            });
        }
        self.y += self.geometry.line_height;

        for row in [signature.names(), signature.titles()] {
            for (text, x) in row.into_iter().zip([left_x, right_x]) {
                if text.is_empty() {
                    continue;
                }
                let width = self.geometry.text_width(text);
                self.current.add_span(LineSpan {
                    text: text.to_string(),
                    x,
                    y: self.y,
                    width,
                    bold: false,
                    href: None,
                    origin: SpanOrigin::Signature,
                });
            }
            self.y += self.geometry.line_height;
        }
    }
}

/// One placed piece of a wrapped row: text plus its character offset from
/// the row's left edge.
#[derive(Debug, Clone)]
struct RowPiece {
    text: String,
    offset: usize,
    href: Option<String>,
}

/// Wrap display runs into rows of at most `max_chars` characters, slicing
/// runs at row boundaries but never breaking a row across pages.
fn plan_rows(runs: &[Run], max_chars: usize) -> Vec<Vec<RowPiece>> {
    let mut chars = Vec::new();
    let mut bounds = Vec::new();
    for run in runs {
        let start = chars.len();
        chars.extend(run.chars.iter().copied());
        bounds.push((start..chars.len(), run.href.clone()));
    }

    wrap_ranges(&chars, max_chars.max(1))
        .into_iter()
        .map(|row| {
            let mut pieces = Vec::new();
            for (range, href) in &bounds {
                let start = range.start.max(row.start);
                let end = range.end.min(row.end);
                if start >= end {
                    continue;
                }
                pieces.push(RowPiece {
                    text: chars[start..end].iter().collect(),
                    offset: start - row.start,
                    href: href.clone(),
                });
            }
            pieces
        })
        .collect()
}

/// Greedy word wrap over a character buffer, returning the row ranges.
/// Spaces at break points are consumed; a word longer than a row is split.
fn wrap_ranges(chars: &[char], max_chars: usize) -> Vec<Range<usize>> {
    let max_chars = max_chars.max(1);
    let mut rows = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        while start < chars.len() && chars[start] == ' ' {
            start += 1;
        }
        if start >= chars.len() {
            break;
        }
        let mut end = (start + max_chars).min(chars.len());
        if end < chars.len() && chars[end] != ' ' {
            if let Some(brk) = (start + 1..end).rev().find(|&i| chars[i] == ' ') {
                end = brk;
            }
        }
        rows.push(start..end);
        start = end;
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::segment;

    fn options() -> RenderOptions {
        RenderOptions::new().with_header("January 5, 2026")
    }

    #[test]
    fn test_wrap_ranges_simple() {
        let chars: Vec<char> = "the quick brown fox".chars().collect();
        let rows = wrap_ranges(&chars, 10);
        let texts: Vec<String> = rows
            .into_iter()
            .map(|r| chars[r].iter().collect())
            .collect();
        assert_eq!(texts, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_wrap_ranges_long_word_split() {
        let chars: Vec<char> = "abcdefghij".chars().collect();
        let rows = wrap_ranges(&chars, 4);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], 0..4);
    }

    #[test]
    fn test_wrap_ranges_empty() {
        assert!(wrap_ranges(&[], 10).is_empty());
    }

    #[test]
    fn test_single_page_document() {
        let doc = segment("A Regular Meeting was held.\nSecond line.\n");
        let paged = paginate(&doc, &options()).unwrap();
        assert_eq!(paged.page_count(), 1);

        let page = &paged.pages[0];
        assert!(matches!(page.spans[0].origin, SpanOrigin::PageHeader));
        assert!(matches!(
            page.spans.last().unwrap().origin,
            SpanOrigin::PageFooter
        ));
        assert_eq!(page.spans.last().unwrap().text, "1");
    }

    #[test]
    fn test_title_block_centered_and_bold() {
        let doc = segment("TOWNSHIP OF EDISON\nA Regular Meeting was held.\n");
        let paged = paginate(&doc, &options()).unwrap();
        let title = paged.pages[0]
            .body_spans()
            .find(|s| matches!(s.origin, SpanOrigin::Body { role: LineRole::Title, .. }))
            .unwrap();
        assert!(title.bold);
        let geometry = paged.geometry;
        let expected =
            geometry.margin + (geometry.content_width() - title.width) / 2.0;
        assert!((title.x - expected).abs() < 0.01);
    }

    #[test]
    fn test_section_header_number_and_title_share_baseline() {
        let doc = segment("A Regular Meeting was held.\n4. DISCUSSION ITEMS\n");
        let paged = paginate(&doc, &options()).unwrap();
        let spans: Vec<_> = paged.pages[0]
            .body_spans()
            .filter(|s| {
                matches!(
                    s.origin,
                    SpanOrigin::Body {
                        role: LineRole::SectionHeader,
                        ..
                    }
                )
            })
            .collect();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "4.");
        assert_eq!(spans[0].x, 72.0);
        assert_eq!(spans[1].text, "DISCUSSION ITEMS");
        assert_eq!(spans[1].x, 108.0);
        assert_eq!(spans[0].y, spans[1].y);
        assert!(spans.iter().all(|s| s.bold));
    }

    #[test]
    fn test_section_body_indented() {
        let doc = segment("A Regular Meeting was held.\n1. CALL TO ORDER\nThe meeting was called to order.\n");
        let paged = paginate(&doc, &options()).unwrap();
        let span = paged.pages[0]
            .body_spans()
            .find(|s| matches!(s.origin, SpanOrigin::Body { indent: 1, .. }))
            .unwrap();
        assert_eq!(span.x, 108.0);
    }

    #[test]
    fn test_long_document_overflows_to_more_pages() {
        let mut text = String::from("A Regular Meeting was held.\n");
        for i in 0..200 {
            text.push_str(&format!("Line {} of general business before the council.\n", i));
        }
        let doc = segment(&text);
        let paged = paginate(&doc, &options()).unwrap();
        assert!(paged.page_count() > 1);

        // Page numbers are sequential and every page has a footer.
        for (i, page) in paged.pages.iter().enumerate() {
            assert_eq!(page.number as usize, i + 1);
            let footer = page
                .spans
                .iter()
                .find(|s| matches!(s.origin, SpanOrigin::PageFooter))
                .unwrap();
            assert_eq!(footer.text, page.number.to_string());
        }
    }

    #[test]
    fn test_no_logical_line_splits_across_pages() {
        let mut text = String::from("A Regular Meeting was held.\n");
        for i in 0..120 {
            text.push_str(&format!(
                "Item {}: a considerably longer body line that wraps over more than one rendered row when set at ten points on a letter page.\n",
                i
            ));
        }
        let doc = segment(&text);
        let paged = paginate(&doc, &options()).unwrap();
        assert!(paged.page_count() > 1);

        let mut page_of_line = std::collections::HashMap::new();
        for page in &paged.pages {
            for span in page.body_spans() {
                if let Some(line) = span.origin.line_index() {
                    let entry = page_of_line.entry(line).or_insert(page.number);
                    assert_eq!(*entry, page.number, "line {} split across pages", line);
                }
            }
        }
    }

    #[test]
    fn test_no_span_below_content_bottom() {
        let mut text = String::from("A Regular Meeting was held.\n");
        for _ in 0..300 {
            text.push_str("A body line of ordinary length for the record.\n");
        }
        let doc = segment(&text);
        let paged = paginate(&doc, &options()).unwrap();
        for page in &paged.pages {
            for span in page.body_spans() {
                assert!(span.y <= paged.geometry.content_bottom());
            }
        }
    }

    #[test]
    fn test_signature_layout() {
        let doc = segment(
            "A Regular Meeting was held.\n\
             ____________        ____________\n\
             Jane Doe            John Roe\n\
             Council President        Township Clerk\n",
        );
        let paged = paginate(&doc, &options()).unwrap();
        let page = paged.pages.last().unwrap();

        let rules: Vec<_> = page
            .spans
            .iter()
            .filter(|s| matches!(s.origin, SpanOrigin::SignatureRule))
            .collect();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].y, rules[1].y);
        assert!(rules[1].x > rules[0].x);

        let names: Vec<_> = page
            .spans
            .iter()
            .filter(|s| matches!(s.origin, SpanOrigin::Signature))
            .collect();
        assert_eq!(names.len(), 4);
        // Name row directly beneath the rules, title row beneath that.
        assert_eq!(names[0].y, rules[0].y + paged.geometry.line_height);
        assert_eq!(names[2].y, names[0].y + paged.geometry.line_height);
        assert_eq!(names[0].text, "Jane Doe");
        assert_eq!(names[1].text, "John Roe");
        assert_eq!(names[2].text, "Council President");
        assert_eq!(names[3].text, "Township Clerk");
    }

    #[test]
    fn test_marker_span_linked() {
        let doc = segment(
            "A Regular Meeting was held.\n\
             4. DISCUSSION ITEMS\n\
             Councilmember Smith raised [REVIEW: budget concern @12:05]\n",
        );
        let render = options().with_video_url("https://vid.example/m1");
        let paged = paginate(&doc, &render).unwrap();
        let linked = paged.pages[0]
            .body_spans()
            .find(|s| s.href.is_some())
            .unwrap();
        assert_eq!(linked.text, "[REVIEW: budget concern]");
        assert_eq!(linked.href.as_deref(), Some("https://vid.example/m1?t=725"));
    }

    #[test]
    fn test_http_line_becomes_link_span() {
        let doc = segment("A Regular Meeting was held.\nhttps://township.example/stream\n");
        let paged = paginate(&doc, &options()).unwrap();
        let span = paged.pages[0]
            .body_spans()
            .find(|s| s.text.starts_with("https"))
            .unwrap();
        assert_eq!(span.href.as_deref(), Some("https://township.example/stream"));
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        let doc = segment("A Regular Meeting was held.\n");
        let bad = RenderOptions::new().with_geometry(PageGeometry {
            margin: 400.0,
            ..PageGeometry::letter()
        });
        assert!(paginate(&doc, &bad).is_err());
    }

    #[test]
    fn test_no_header_configured() {
        let doc = segment("A Regular Meeting was held.\n");
        let paged = paginate(&doc, &RenderOptions::new()).unwrap();
        assert!(!paged.pages[0]
            .spans
            .iter()
            .any(|s| matches!(s.origin, SpanOrigin::PageHeader)));
    }
}
