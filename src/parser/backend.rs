//! Document parser abstraction layer.
//!
//! Provides a trait-based interface over the PDF library so the extraction
//! pipeline never touches concrete parser types. [`LopdfParser`] is the
//! default implementation; tests plug in their own.

use std::panic::{self, AssertUnwindSafe};

use lopdf::Document as LopdfDocument;

use crate::error::{DocumentError, PageError, Result};

/// Opaque reference to one page of an opened document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHandle {
    /// Page number as reported by the parser (1-indexed)
    pub number: u32,
    /// Parser-specific object identifier: (object number, generation number)
    pub object_id: (u32, u16),
}

impl PageHandle {
    /// Create a handle for a page with no backing object identifier.
    pub fn numbered(number: u32) -> Self {
        Self {
            number,
            object_id: (0, 0),
        }
    }
}

/// Capability that opens raw document bytes.
pub trait DocumentParser: Send + Sync {
    /// The opened document.
    type Source: PageSource;

    /// Open a document, failing if its structure cannot be read.
    fn open(&self, data: &[u8]) -> Result<Self::Source>;
}

/// An opened document that can enumerate pages and extract their text.
///
/// `Sync` so pages can be extracted from several threads at once.
pub trait PageSource: Sync {
    /// All pages in document order.
    fn pages(&self) -> Vec<PageHandle>;

    /// Extract the text of one page.
    ///
    /// `Ok(None)` means the page produced no data.
    fn extract_text(&self, page: &PageHandle) -> std::result::Result<Option<String>, PageError>;
}

// ---------------------------------------------------------------------------
// LopdfParser: lopdf-backed implementation
// ---------------------------------------------------------------------------

/// [`DocumentParser`] backed by `lopdf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfParser;

impl LopdfParser {
    /// Create a new lopdf-backed parser.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentParser for LopdfParser {
    type Source = LopdfSource;

    fn open(&self, data: &[u8]) -> Result<LopdfSource> {
        // lopdf can panic on malformed input instead of returning an error.
        let loaded = panic::catch_unwind(AssertUnwindSafe(|| LopdfDocument::load_mem(data)));

        let doc = match loaded {
            Ok(Ok(doc)) => doc,
            Ok(Err(e)) => return Err(DocumentError::from(e)),
            Err(_) => {
                return Err(DocumentError::Unreadable(
                    "parser panicked while opening document".to_string(),
                ))
            }
        };

        if doc.is_encrypted() {
            log::debug!("Document is encrypted; relying on lopdf's default decryption");
        }

        Ok(LopdfSource { doc })
    }
}

/// A document opened through [`LopdfParser`].
pub struct LopdfSource {
    doc: LopdfDocument,
}

impl PageSource for LopdfSource {
    fn pages(&self) -> Vec<PageHandle> {
        self.doc
            .get_pages()
            .into_iter()
            .map(|(number, object_id)| PageHandle { number, object_id })
            .collect()
    }

    fn extract_text(&self, page: &PageHandle) -> std::result::Result<Option<String>, PageError> {
        match self.doc.extract_text(&[page.number]) {
            Ok(text) if text.is_empty() => Ok(None),
            Ok(text) => Ok(Some(text)),
            Err(e) => Err(PageError::new(page.number, e.to_string())),
        }
    }
}
