//! Rendering module: flat text, structured record, and summary.
//!
//! Every function here takes `&Document` and returns a fresh value, so they
//! can be called in any order, repeatedly, or from several threads.

mod json;
mod options;
mod summary;
mod text;

pub use json::{to_json, to_structured_record, JsonFormat, PageRecord, StructuredRecord};
pub use options::{PreviewLength, TRUNCATION_MARKER};
pub use summary::{preview, summarize, PagePreview, SummaryView};
pub use text::{page_delimiter, to_flat_text};
