//! The segmented document shared by both renderers.

use super::{ClassifiedLine, LineRole, SignatureBlock};
use serde::{Deserialize, Serialize};

/// A fully segmented minutes document.
///
/// This is the single structure both renderers consume. It is computed once
/// by [`crate::segment`] and immutable thereafter; the renderers are
/// forbidden from re-deriving role, bold, or indentation on their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentedDocument {
    /// Non-blank lines of the title block, rendered centered and bold.
    pub title_lines: Vec<String>,

    /// The classified body, in document order.
    pub body: Vec<ClassifiedLine>,

    /// The trailing two-column attestation; empty if none was found.
    pub signature: SignatureBlock,
}

impl SegmentedDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            title_lines: Vec::new(),
            body: Vec::new(),
            signature: SignatureBlock::default(),
        }
    }

    /// Check if the document carries no content at all.
    pub fn is_empty(&self) -> bool {
        self.title_lines.is_empty() && self.body.is_empty() && self.signature.is_empty()
    }

    /// Number of numbered sections in the body.
    pub fn section_count(&self) -> usize {
        self.body.iter().filter(|l| l.is_section_header()).count()
    }

    /// The flattened line sequence both renderers traverse: title lines
    /// first, then the classified body. Indices into this sequence identify
    /// logical lines in pagination output.
    pub fn layout_lines(&self) -> Vec<LayoutLine<'_>> {
        let mut lines = Vec::with_capacity(self.title_lines.len() + self.body.len());
        for title in &self.title_lines {
            lines.push(LayoutLine {
                index: lines.len(),
                role: LineRole::Title,
                bold: true,
                indent: 0,
                text: title,
                section_number: None,
            });
        }
        for line in &self.body {
            lines.push(LayoutLine {
                index: lines.len(),
                role: line.role,
                bold: line.bold,
                indent: line.indent_level,
                text: &line.text,
                section_number: line.section_number.as_deref(),
            });
        }
        lines
    }

    /// The (role, bold, indent) triple per logical line, the sequence both
    /// renderers must agree on.
    pub fn style_triples(&self) -> Vec<(LineRole, bool, u8)> {
        self.layout_lines()
            .iter()
            .map(|l| (l.role, l.bold, l.indent))
            .collect()
    }

    /// Plain text of the body, one line per classified line.
    pub fn plain_text(&self) -> String {
        self.body
            .iter()
            .map(|line| match &line.section_number {
                Some(number) => format!("{} {}", number, line.text),
                None => line.text.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for SegmentedDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// One line of the flattened layout sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutLine<'a> {
    /// Position in the flattened sequence.
    pub index: usize,

    /// Semantic role of the line.
    pub role: LineRole,

    /// Whether the line renders bold.
    pub bold: bool,

    /// Indentation level.
    pub indent: u8,

    /// Display text (header title for section headers).
    pub text: &'a str,

    /// Numeric prefix for section headers.
    pub section_number: Option<&'a str>,
}
