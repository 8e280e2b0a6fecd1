//! # minuteset
//!
//! Deterministic typesetting engine for council-meeting minutes.
//!
//! A single segmentation pass turns loosely structured plain text into an
//! immutable [`SegmentedDocument`]; two independent renderers present it as
//! an interactive screen tree or as fixed-size Letter pages (optionally
//! serialized to PDF bytes). Both renderers agree line for line on roles,
//! emphasis, and indentation because neither re-derives classification.
//!
//! ## Quick Start
//!
//! ```
//! use minuteset::{RenderOptions, Typeset};
//!
//! fn main() -> minuteset::Result<()> {
//!     let text = "TOWNSHIP OF EDISON\nA Regular Meeting was held.\n1. CALL TO ORDER\n";
//!
//!     let result = Typeset::new()
//!         .with_video_url("https://vid.example/m1")
//!         .with_header("January 5, 2026")
//!         .segment(text);
//!
//!     let screen = result.screen();
//!     let pdf = result.pdf_bytes()?;
//!     assert!(!screen.nodes.is_empty());
//!     assert!(pdf.starts_with(b"%PDF"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **One semantic model, two presentations**: screen tree and pagination
//!   consume the same segmentation
//! - **Inline review markers**: `[REVIEW: ... @M:SS]` annotations with video
//!   timestamp links
//! - **Print-exact pagination**: Letter pages, 72pt margins, 10pt serif
//!   body, running header and page-number footer
//! - **Graceful degradation**: missing title, signature, or sections never
//!   fail a render

pub mod annotate;
pub mod error;
pub mod model;
pub mod render;
pub mod segment;

// Re-export commonly used types
pub use annotate::AnnotationExtractor;
pub use error::{Error, Result};
pub use model::{
    ClassifiedLine, Inline, LayoutLine, LineRole, LineSpan, Page, ReviewMarker, SegmentState,
    SegmentedDocument, SignatureBlock, Signatory, SpanOrigin,
};
pub use render::{
    to_json, to_pdf_bytes, to_screen, JsonFormat, PageGeometry, PaginatedDocument, RenderOptions,
    ScreenDocument, ScreenNode,
};
pub use segment::{segment, LineClassifier};

/// Segment raw minutes text and render the interactive screen tree.
pub fn screen_tree(text: &str, options: &RenderOptions) -> ScreenDocument {
    let doc = segment(text);
    to_screen(&doc, options)
}

/// Segment raw minutes text and paginate it.
pub fn paginate_text(text: &str, options: &RenderOptions) -> Result<PaginatedDocument> {
    let doc = segment(text);
    render::paginate(&doc, options)
}

/// Segment raw minutes text and produce the exportable PDF bytes.
pub fn to_pdf(text: &str, options: &RenderOptions) -> Result<Vec<u8>> {
    let paged = paginate_text(text, options)?;
    to_pdf_bytes(&paged)
}

/// Builder for segmenting and rendering minutes documents.
///
/// # Example
///
/// ```
/// use minuteset::Typeset;
///
/// let json = Typeset::new()
///     .with_header("January 5, 2026")
///     .segment("A Regular Meeting was held.\n")
///     .to_json(minuteset::JsonFormat::Compact)?;
/// # Ok::<(), minuteset::Error>(())
/// ```
pub struct Typeset {
    render_options: RenderOptions,
}

impl Typeset {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
        }
    }

    /// Set the companion video URL for review-marker links.
    pub fn with_video_url(mut self, url: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_video_url(url);
        self
    }

    /// Set the running page-header text.
    pub fn with_header(mut self, text: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_header(text);
        self
    }

    /// Set the running header from a meeting date.
    pub fn with_meeting_date(mut self, date: chrono::NaiveDate) -> Self {
        self.render_options = self.render_options.with_meeting_date(date);
        self
    }

    /// Override the page geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.render_options = self.render_options.with_geometry(geometry);
        self
    }

    /// Segment the raw text, returning a result wrapper for rendering.
    pub fn segment(self, text: &str) -> TypesetResult {
        TypesetResult {
            document: segment(text),
            render_options: self.render_options,
        }
    }
}

impl Default for Typeset {
    fn default() -> Self {
        Self::new()
    }
}

/// A segmented document paired with its render options.
pub struct TypesetResult {
    /// The segmented document.
    pub document: SegmentedDocument,
    render_options: RenderOptions,
}

impl TypesetResult {
    /// Render the interactive screen tree.
    pub fn screen(&self) -> ScreenDocument {
        to_screen(&self.document, &self.render_options)
    }

    /// Paginate against the configured geometry.
    pub fn paginate(&self) -> Result<PaginatedDocument> {
        render::paginate(&self.document, &self.render_options)
    }

    /// Produce the exportable PDF bytes.
    pub fn pdf_bytes(&self) -> Result<Vec<u8>> {
        to_pdf_bytes(&self.paginate()?)
    }

    /// Serialize the segmented document to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        to_json(&self.document, format)
    }

    /// Get the segmented document.
    pub fn document(&self) -> &SegmentedDocument {
        &self.document
    }
}
