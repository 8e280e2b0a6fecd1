//! Line classification state machine.
//!
//! The classifier is the only place the layout rules live; both renderers
//! consume its output as-is. The prefix lists below are the governing house
//! style of the source documents and are matched verbatim.

use regex::Regex;

use crate::model::{ClassifiedLine, LineRole, SegmentState};

/// Literal prefixes that end the title block. The boundary line itself is
/// body text (it is also a full-width exception).
pub const TITLE_BOUNDARY_PREFIXES: [&str; 3] = ["A Worksession", "A Regular", "A Combined"];

/// Lines starting with these render at the left margin regardless of the
/// current section state.
pub const FULL_WIDTH_PREFIXES: [&str; 10] = [
    "A Worksession",
    "A Regular",
    "A Combined",
    "Present were",
    "Also present",
    "The Township Clerk advised",
    "This meeting",
    "http",
    "On a motion",
    "Hearing no further",
];

/// Prefixes that additionally end the current indented section block.
pub const SECTION_END_PREFIXES: [&str; 2] = ["On a motion", "Hearing no further"];

/// Speaker prefixes emphasized inside a discussion section.
pub const SPEAKER_PREFIXES: [&str; 3] =
    ["Councilmember", "Council President", "Council Vice President"];

/// Share of alphabetic characters that must be uppercase for the
/// all-caps emphasis rule.
const UPPERCASE_BOLD_THRESHOLD: f32 = 0.7;

/// Classifies body lines one at a time, threading [`SegmentState`] through
/// the fold.
#[derive(Debug)]
pub struct LineClassifier {
    section_header: Regex,
    motion_item: Regex,
}

impl LineClassifier {
    /// Create a classifier with the compiled line grammar.
    pub fn new() -> Self {
        Self {
            section_header: Regex::new(r"^(\d+)\.\s+(.*)$").unwrap(),
            motion_item: Regex::new(r"^a\.\s").unwrap(),
        }
    }

    /// Classify one body line, updating `state` per the section rules.
    pub fn classify(&self, line: &str, state: &mut SegmentState) -> ClassifiedLine {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return ClassifiedLine::blank();
        }

        if let Some(caps) = self.section_header.captures(line) {
            let number = format!("{}.", &caps[1]);
            let title = caps[2].trim().to_string();
            state.inside_section = true;
            state.in_discussion = title.to_uppercase().contains("DISCUSSION");
            log::debug!("section {} (discussion: {})", number, state.in_discussion);
            return ClassifiedLine {
                text: title,
                role: LineRole::SectionHeader,
                bold: true,
                section_number: Some(number),
                indent_level: 0,
            };
        }

        if is_full_width_exception(trimmed) {
            if SECTION_END_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
                state.inside_section = false;
            }
            return ClassifiedLine {
                text: trimmed.to_string(),
                role: LineRole::FullWidth,
                bold: is_mostly_uppercase(trimmed),
                section_number: None,
                indent_level: 0,
            };
        }

        if state.inside_section {
            let bold = is_mostly_uppercase(trimmed)
                || (state.in_discussion && self.is_discussion_emphasis(trimmed));
            return ClassifiedLine {
                text: trimmed.to_string(),
                role: LineRole::SectionBody,
                bold,
                section_number: None,
                indent_level: 1,
            };
        }

        ClassifiedLine {
            text: trimmed.to_string(),
            role: LineRole::FullWidth,
            bold: is_mostly_uppercase(trimmed),
            section_number: None,
            indent_level: 0,
        }
    }

    /// Emphasis rule inside a discussion section: speaker attributions and
    /// lettered motion items.
    fn is_discussion_emphasis(&self, trimmed: &str) -> bool {
        SPEAKER_PREFIXES.iter().any(|p| trimmed.starts_with(p))
            || self.motion_item.is_match(trimmed)
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if a trimmed line starts with any title-boundary prefix.
pub fn is_title_boundary(trimmed: &str) -> bool {
    TITLE_BOUNDARY_PREFIXES
        .iter()
        .any(|p| trimmed.starts_with(p))
}

/// Check if a trimmed line is one of the full-width exceptions.
pub fn is_full_width_exception(trimmed: &str) -> bool {
    FULL_WIDTH_PREFIXES.iter().any(|p| trimmed.starts_with(p))
}

/// All-caps emphasis rule: uppercase letters exceed 70% of all alphabetic
/// characters. Lines without letters are never emphasized.
pub fn is_mostly_uppercase(text: &str) -> bool {
    let mut letters = 0usize;
    let mut upper = 0usize;
    for c in text.chars() {
        if c.is_alphabetic() {
            letters += 1;
            if c.is_uppercase() {
                upper += 1;
            }
        }
    }
    letters > 0 && (upper as f32) > (letters as f32) * UPPERCASE_BOLD_THRESHOLD
}
