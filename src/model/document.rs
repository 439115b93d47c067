//! Document-level types.

use super::Page;

/// A document reduced to its per-page text.
///
/// Built once from extractor output and never mutated afterwards. The page
/// count is always derived from the page list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    filename: String,
    pages: Vec<Page>,
}

impl Document {
    /// Build a document from a filename and an ordered page sequence.
    ///
    /// Pages are expected to be numbered `1..=n` in order, which is what
    /// [`PageExtractor`](crate::parser::PageExtractor) produces.
    pub fn build(filename: impl Into<String>, pages: Vec<Page>) -> Self {
        debug_assert!(
            pages
                .iter()
                .enumerate()
                .all(|(i, p)| p.index as usize == i + 1),
            "page indices must be contiguous and start at 1"
        );
        Self {
            filename: filename.into(),
            pages,
        }
    }

    /// Build a document from page texts, numbering pages from 1.
    pub fn from_texts<I, S>(filename: impl Into<String>, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pages = texts
            .into_iter()
            .zip(1u32..)
            .map(|(text, index)| Page::new(index, text))
            .collect();
        Self::build(filename, pages)
    }

    /// Source filename (metadata only).
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Pages in document order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, index: u32) -> Option<&Page> {
        if index == 0 {
            return None;
        }
        self.pages.get((index - 1) as usize)
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Number of pages whose extraction failed.
    pub fn failed_page_count(&self) -> usize {
        self.pages.iter().filter(|p| p.extraction_failed).count()
    }

    /// Filename with its final extension removed.
    pub fn basename(&self) -> &str {
        basename(&self.filename)
    }
}

/// Strip the final extension from a filename.
///
/// `"report.v2.pdf"` becomes `"report.v2"`; names without a dot are
/// returned unchanged.
pub fn basename(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => filename,
    }
}
