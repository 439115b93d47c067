//! PDF page extraction module.

mod backend;
mod extractor;
mod options;

pub use backend::{DocumentParser, LopdfParser, LopdfSource, PageHandle, PageSource};
pub use extractor::PageExtractor;
pub use options::ExtractOptions;
