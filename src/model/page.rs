//! Page-level types emitted by the pagination renderer.

use super::LineRole;
use serde::{Deserialize, Serialize};

/// Where a placed span came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpanOrigin {
    /// A span of a logical document line (title or body).
    Body {
        /// Index into the document's flattened layout-line sequence.
        line: usize,
        /// Role the classifier assigned to the source line.
        role: LineRole,
        /// Classified indentation level.
        indent: u8,
    },

    /// The running header repeated at the top of every page.
    PageHeader,

    /// The page-number footer emitted when a page is finalized.
    PageFooter,

    /// One of the two horizontal rule segments of the signature block.
    SignatureRule,

    /// A name or title line of the signature block.
    Signature,
}

impl SpanOrigin {
    /// The flattened layout-line index, for body spans.
    pub fn line_index(&self) -> Option<usize> {
        match self {
            SpanOrigin::Body { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// A single placed run of text on a page.
///
/// `x` and `y` are in points from the top-left corner of the page; `y` is the
/// text baseline. A wrapped logical line produces one span per rendered row,
/// all sharing the same origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSpan {
    /// The text content of this span.
    pub text: String,

    /// Left edge in points.
    pub x: f32,

    /// Baseline in points from the top of the page.
    pub y: f32,

    /// Rendered width in points.
    pub width: f32,

    /// Whether the span renders in the bold face.
    pub bold: bool,

    /// Navigation target when the span is a hyperlink or a linked marker.
    pub href: Option<String>,

    /// Provenance of the span.
    pub origin: SpanOrigin,
}

/// One fixed-size page of the paginated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed).
    pub number: u32,

    /// Placed spans in reading order.
    pub spans: Vec<LineSpan>,
}

impl Page {
    /// Create a new empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            spans: Vec::new(),
        }
    }

    /// Add a span to the page.
    pub fn add_span(&mut self, span: LineSpan) {
        self.spans.push(span);
    }

    /// Check if the page carries no body content (furniture only).
    pub fn is_empty(&self) -> bool {
        !self
            .spans
            .iter()
            .any(|s| matches!(s.origin, SpanOrigin::Body { .. }))
    }

    /// Spans originating from logical document lines, in order.
    pub fn body_spans(&self) -> impl Iterator<Item = &LineSpan> {
        self.spans
            .iter()
            .filter(|s| matches!(s.origin, SpanOrigin::Body { .. }))
    }

    /// Plain text of the page's body spans.
    pub fn plain_text(&self) -> String {
        self.body_spans()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
