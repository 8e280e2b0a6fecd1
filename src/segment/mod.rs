//! Document segmentation: the single classification pass over the raw text.
//!
//! Splits a minutes document into a title block, a classified body, and a
//! signature block. Both renderers consume the result as-is; none of the
//! layout rules are re-derived downstream.

mod classifier;
mod signature;

pub use classifier::{
    is_full_width_exception, is_mostly_uppercase, is_title_boundary, LineClassifier,
    FULL_WIDTH_PREFIXES, SECTION_END_PREFIXES, SPEAKER_PREFIXES, TITLE_BOUNDARY_PREFIXES,
};
pub use signature::parse_signature;

use crate::model::{SegmentState, SegmentedDocument};

/// Number of spaces a tab expands to before classification. The pagination
/// renderer assumes fixed-width runs of spaces (column gaps, indents).
const TAB_WIDTH: usize = 4;

/// Minimum run of underscores that marks the start of the signature region.
const SIGNATURE_RULE: &str = "___";

/// Segment a raw minutes document.
///
/// Deterministic and infallible: a document with no detectable title
/// boundary, signature boundary, or numbered sections still segments, with
/// the missing structural element degrading to empty.
///
/// # Example
///
/// ```
/// let doc = minuteset::segment("TOWNSHIP COUNCIL\nA Regular Meeting was held.\n1. CALL TO ORDER\n");
/// assert_eq!(doc.title_lines, vec!["TOWNSHIP COUNCIL"]);
/// assert_eq!(doc.section_count(), 1);
/// ```
pub fn segment(text: &str) -> SegmentedDocument {
    let normalized = text.replace('\t', &" ".repeat(TAB_WIDTH));
    let lines: Vec<&str> = normalized.lines().collect();

    let body_start = lines
        .iter()
        .position(|l| is_title_boundary(l.trim()))
        .unwrap_or(0);

    let title_lines: Vec<String> = lines[..body_start]
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect();

    let signature_start = lines
        .iter()
        .rposition(|l| l.contains(SIGNATURE_RULE))
        .filter(|&i| i >= body_start);

    let body_end = signature_start.unwrap_or(lines.len());

    let classifier = LineClassifier::new();
    let mut state = SegmentState::new();
    let body = lines[body_start..body_end]
        .iter()
        .map(|line| classifier.classify(line, &mut state))
        .collect();

    let signature_lines: Vec<String> = match signature_start {
        Some(i) => lines[i..].iter().map(|l| l.to_string()).collect(),
        None => Vec::new(),
    };
    let signature = parse_signature(&signature_lines);

    let doc = SegmentedDocument {
        title_lines,
        body,
        signature,
    };
    log::debug!(
        "segmented {} title line(s), {} body line(s), {} section(s), signature: {}",
        doc.title_lines.len(),
        doc.body.len(),
        doc.section_count(),
        !doc.signature.is_empty()
    );
    doc
}
