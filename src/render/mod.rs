//! Rendering module: two independent presentations of one segmented
//! document.
//!
//! Both renderers are side-effect-free functions over the same
//! [`crate::model::SegmentedDocument`]; any disagreement between them on
//! role, bold, or indentation is a defect, not a recoverable condition.

mod json;
mod options;
pub mod paginate;
mod pdf;
pub mod screen;

pub use json::{to_json, JsonFormat};
pub use options::{PageGeometry, RenderOptions};
pub use paginate::{paginate, PaginatedDocument};
pub use pdf::to_pdf_bytes;
pub use screen::{to_screen, ScreenDocument, ScreenNode};
