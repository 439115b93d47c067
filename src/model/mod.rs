//! Document model types.
//!
//! The in-memory representation shared by the serializers and the summary
//! reporter. It is produced once by the page extractor and only read after.

mod document;
mod page;

pub use document::{basename, Document};
pub use page::Page;
