//! Inline annotation extraction.
//!
//! Finds `[REVIEW: ...]` markers inside a line of body text and resolves
//! each to a display string and, optionally, a video timestamp offset.
//! Extraction never mutates the classified role/bold attributes of a line.

use regex::Regex;

use crate::model::{Inline, ReviewMarker};

/// Extracts review markers from body text.
///
/// Holds the compiled marker grammar; one extractor is reused across all
/// lines of a render.
#[derive(Debug)]
pub struct AnnotationExtractor {
    marker: Regex,
    timestamp: Regex,
}

impl AnnotationExtractor {
    /// Create an extractor with the compiled marker grammar.
    pub fn new() -> Self {
        Self {
            // No nesting, no escaping.
            marker: Regex::new(r"\[REVIEW:[^\]]*\]").unwrap(),
            timestamp: Regex::new(r"@(\d{1,2}):(\d{2})(?::(\d{2}))?").unwrap(),
        }
    }

    /// Split a line into an ordered sequence of plain-text and marker
    /// segments. Markers resolve their navigation target against the
    /// supplied video URL; without one they are inert.
    pub fn extract(&self, text: &str, video_url: Option<&str>) -> Vec<Inline> {
        let mut segments = Vec::new();
        let mut cursor = 0;

        for found in self.marker.find_iter(text) {
            if found.start() > cursor {
                segments.push(Inline::text(&text[cursor..found.start()]));
            }
            let marker = self.parse_marker(found.as_str());
            let href = marker.link_target(video_url);
            segments.push(Inline::Marker { marker, href });
            cursor = found.end();
        }

        if cursor < text.len() {
            segments.push(Inline::text(&text[cursor..]));
        }
        segments
    }

    /// Parse one raw marker, stripping any embedded timestamp.
    ///
    /// A malformed or absent timestamp leaves both timestamp fields empty;
    /// the marker is still displayed.
    pub fn parse_marker(&self, raw: &str) -> ReviewMarker {
        let Some(caps) = self.timestamp.captures(raw) else {
            return ReviewMarker {
                raw_text: raw.to_string(),
                display_text: raw.to_string(),
                timestamp_seconds: None,
                timestamp_display: None,
            };
        };

        let matched = caps.get(0).unwrap();
        let first: u32 = caps[1].parse().unwrap_or(0);
        let second: u32 = caps[2].parse().unwrap_or(0);
        let seconds = match caps.get(3) {
            // H:MM:SS
            Some(s) => first * 3600 + second * 60 + s.as_str().parse().unwrap_or(0),
            // MM:SS
            None => first * 60 + second,
        };

        // The display form drops the time; without the leading '@'.
        let display = matched.as_str()[1..].to_string();

        ReviewMarker {
            raw_text: raw.to_string(),
            display_text: strip_timestamp(raw, matched.start(), matched.end()),
            timestamp_seconds: Some(seconds),
            timestamp_display: Some(display),
        }
    }
}

impl Default for AnnotationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove the `@<time>` match from the marker text, collapsing the double
/// space the removal leaves behind before the closing bracket.
fn strip_timestamp(raw: &str, start: usize, end: usize) -> String {
    let mut head = raw[..start].to_string();
    let tail = &raw[end..];
    if head.ends_with(' ') && (tail.starts_with(' ') || tail.starts_with(']')) {
        head.pop();
    }
    head.push_str(tail);
    head
}

/// Convenience wrapper constructing a one-shot extractor.
pub fn extract(text: &str, video_url: Option<&str>) -> Vec<Inline> {
    AnnotationExtractor::new().extract(text, video_url)
}
