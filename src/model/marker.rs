//! Inline review markers and the segments they split a line into.

use serde::{Deserialize, Serialize};

/// An inline `[REVIEW: ...]` annotation, optionally carrying a video
/// timestamp, used to flag passages needing clerk verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewMarker {
    /// The marker exactly as written, brackets included.
    pub raw_text: String,

    /// The marker with any embedded timestamp stripped.
    pub display_text: String,

    /// Parsed timestamp offset in seconds, if present and well-formed.
    pub timestamp_seconds: Option<u32>,

    /// The matched time string as written (e.g., "12:05"), without the `@`.
    pub timestamp_display: Option<String>,
}

impl ReviewMarker {
    /// Check if the marker carries a parsed timestamp.
    pub fn has_timestamp(&self) -> bool {
        self.timestamp_seconds.is_some()
    }

    /// Resolve the marker's navigation target against a companion video URL.
    ///
    /// With a parsed timestamp the target carries the offset as a `t` query
    /// parameter; without one the target is the bare video URL. Without a
    /// video URL the marker is inert and there is no target.
    pub fn link_target(&self, video_url: Option<&str>) -> Option<String> {
        let url = video_url?;
        match self.timestamp_seconds {
            Some(seconds) => {
                let sep = if url.contains('?') { '&' } else { '?' };
                Some(format!("{}{}t={}", url, sep, seconds))
            }
            None => Some(url.to_string()),
        }
    }
}

/// One segment of a line after inline annotation extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    /// A run of plain text between markers.
    Text {
        /// The text content.
        text: String,
    },

    /// A review marker, with its navigation target resolved if a video URL
    /// was supplied.
    Marker {
        /// The parsed marker.
        marker: ReviewMarker,
        /// Resolved navigation target, absent for inert markers.
        href: Option<String>,
    },
}

impl Inline {
    /// Create a plain-text segment.
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text { text: text.into() }
    }

    /// The text this segment displays.
    pub fn display_text(&self) -> &str {
        match self {
            Inline::Text { text } => text,
            Inline::Marker { marker, .. } => &marker.display_text,
        }
    }

    /// Check if this segment is a marker.
    pub fn is_marker(&self) -> bool {
        matches!(self, Inline::Marker { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(seconds: Option<u32>) -> ReviewMarker {
        ReviewMarker {
            raw_text: "[REVIEW: check wording @1:23]".to_string(),
            display_text: "[REVIEW: check wording]".to_string(),
            timestamp_seconds: seconds,
            timestamp_display: seconds.map(|_| "1:23".to_string()),
        }
    }

    #[test]
    fn test_link_target_with_timestamp() {
        let m = marker(Some(83));
        assert_eq!(
            m.link_target(Some("https://vid.example/watch")),
            Some("https://vid.example/watch?t=83".to_string())
        );
    }

    #[test]
    fn test_link_target_appends_to_existing_query() {
        let m = marker(Some(83));
        assert_eq!(
            m.link_target(Some("https://vid.example/watch?v=abc")),
            Some("https://vid.example/watch?v=abc&t=83".to_string())
        );
    }

    #[test]
    fn test_link_target_without_timestamp() {
        let m = marker(None);
        assert_eq!(
            m.link_target(Some("https://vid.example/watch")),
            Some("https://vid.example/watch".to_string())
        );
    }

    #[test]
    fn test_inert_without_video_url() {
        let m = marker(Some(83));
        assert_eq!(m.link_target(None), None);
    }
}
