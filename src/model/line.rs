//! Line-level types produced by the classifier.

use serde::{Deserialize, Serialize};

/// Semantic role assigned to a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineRole {
    /// A line of the title block, rendered centered and bold.
    Title,

    /// A numbered section header (e.g., "4. DISCUSSION ITEMS").
    SectionHeader,

    /// A line indented one level under the current section.
    SectionBody,

    /// Body text rendered at the document's left margin.
    FullWidth,

    /// A blank line, preserved as a vertical spacing marker.
    Blank,
}

impl LineRole {
    /// Check if this role carries visible text.
    pub fn has_text(&self) -> bool {
        !matches!(self, LineRole::Blank)
    }
}

/// One input line plus the attributes computed by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    /// Line text, trimmed. For section headers this is the header title
    /// without the numeric prefix.
    pub text: String,

    /// Semantic role of the line.
    pub role: LineRole,

    /// Whether the line renders bold.
    pub bold: bool,

    /// Numeric prefix for section headers (e.g., "4.").
    pub section_number: Option<String>,

    /// Indentation level: 0 at the margin, 1 under a section.
    pub indent_level: u8,
}

impl ClassifiedLine {
    /// Create a blank spacing line.
    pub fn blank() -> Self {
        Self {
            text: String::new(),
            role: LineRole::Blank,
            bold: false,
            section_number: None,
            indent_level: 0,
        }
    }

    /// Check if this is a blank spacing line.
    pub fn is_blank(&self) -> bool {
        self.role == LineRole::Blank
    }

    /// Check if this is a section header.
    pub fn is_section_header(&self) -> bool {
        self.role == LineRole::SectionHeader
    }
}

/// Mutable fold state carried across lines during classification.
///
/// Reset at document start; updated only by the classifier rules. Threading
/// the state explicitly keeps the classifier testable line by line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentState {
    /// Whether subsequent lines are indented under a numbered section.
    pub inside_section: bool,

    /// Whether the current section header contained "DISCUSSION".
    pub in_discussion: bool,
}

impl SegmentState {
    /// Fresh state for the start of a document.
    pub fn new() -> Self {
        Self::default()
    }
}
