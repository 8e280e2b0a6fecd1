//! Rendering options and page geometry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Average advance width of the serif body face, as a fraction of the font
/// size. Width estimation is deliberately simple: both rendering and
/// wrapping use the same figure, so layout stays deterministic.
const CHAR_WIDTH_RATIO: f32 = 0.5;

/// Fixed page geometry and font metrics for the pagination renderer.
///
/// The defaults reproduce the legacy reference format exactly: Letter pages,
/// 72pt margins, 10pt serif body text, 11pt line height, 36pt section
/// indent. Read-only configuration shared across renders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Page width in points.
    pub page_width: f32,

    /// Page height in points.
    pub page_height: f32,

    /// Margin on all four sides in points.
    pub margin: f32,

    /// Body font size in points.
    pub font_size: f32,

    /// Line height in points.
    pub line_height: f32,

    /// Horizontal indent of section body text in points.
    pub section_indent: f32,
}

impl PageGeometry {
    /// Letter-size geometry matching the legacy reference format.
    pub fn letter() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,
            margin: 72.0,
            font_size: 10.0,
            line_height: 11.0,
            section_indent: 36.0,
        }
    }

    /// Width of the content area between the margins.
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Lowest baseline a body line may occupy.
    pub fn content_bottom(&self) -> f32 {
        self.page_height - self.margin
    }

    /// Estimated rendered width of a run of text.
    pub fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.font_size * CHAR_WIDTH_RATIO
    }

    /// How many characters fit in a row of the given width.
    pub fn chars_per_row(&self, row_width: f32) -> usize {
        (row_width / (self.font_size * CHAR_WIDTH_RATIO)).floor() as usize
    }

    /// Left edge for the given indentation level.
    pub fn indent_x(&self, indent_level: u8) -> f32 {
        self.margin + indent_level as f32 * self.section_indent
    }

    /// Check that the geometry leaves a usable content area.
    pub fn validate(&self) -> Result<()> {
        if self.content_width() <= 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "margins ({}pt) leave no horizontal content area on a {}pt page",
                self.margin, self.page_width
            )));
        }
        if self.page_height - 2.0 * self.margin < self.line_height {
            return Err(Error::InvalidGeometry(format!(
                "margins ({}pt) leave no room for a single {}pt line",
                self.margin, self.line_height
            )));
        }
        if self.font_size <= 0.0 || self.line_height <= 0.0 {
            return Err(Error::InvalidGeometry(
                "font size and line height must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::letter()
    }
}

/// Options for rendering a segmented document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Companion video URL; review markers with timestamps link into it.
    pub video_url: Option<String>,

    /// Identifying string repeated in the running page header. Absent means
    /// no header is emitted.
    pub header_text: Option<String>,

    /// Page geometry for the pagination renderer.
    pub geometry: PageGeometry,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the companion video URL.
    pub fn with_video_url(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    /// Set the running header text.
    pub fn with_header(mut self, text: impl Into<String>) -> Self {
        self.header_text = Some(text.into());
        self
    }

    /// Set the running header from a meeting date.
    pub fn with_meeting_date(mut self, date: NaiveDate) -> Self {
        self.header_text = Some(date.format("%B %-d, %Y").to_string());
        self
    }

    /// Override the page geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }
}
