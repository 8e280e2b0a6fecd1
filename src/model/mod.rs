//! Value types shared by the segmenter and both renderers.
//!
//! Everything here is an immutable value with no shared mutable ownership;
//! a [`SegmentedDocument`] is constructed fresh per render request and
//! discarded after use.

mod document;
mod line;
mod marker;
mod page;
mod signature;

pub use document::{LayoutLine, SegmentedDocument};
pub use line::{ClassifiedLine, LineRole, SegmentState};
pub use marker::{Inline, ReviewMarker};
pub use page::{LineSpan, Page, SpanOrigin};
pub use signature::{SignatureBlock, Signatory};
