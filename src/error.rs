//! Error types for pdfpages.

use std::io;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for pdfpages operations.
pub type Result<T> = std::result::Result<T, DocumentError>;

/// Errors that cross the extraction pipeline boundary.
///
/// Per-page extraction failures are deliberately absent: they are absorbed
/// by the page extractor as empty text (see [`PageError`]).
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document cannot be opened or its structure cannot be parsed.
    #[error("Unreadable document: {0}")]
    Unreadable(String),

    /// Extraction exceeded the configured wall-clock budget.
    #[error("Extraction timed out after {0:?}")]
    Timeout(Duration),

    /// Configuration rejected at the boundary.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error when reading input or writing outputs.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error encoding a structured record.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl DocumentError {
    /// Whether this error means the input itself could not be read as a document.
    pub fn is_unreadable(&self) -> bool {
        matches!(self, DocumentError::Unreadable(_))
    }
}

impl From<lopdf::Error> for DocumentError {
    fn from(err: lopdf::Error) -> Self {
        let cause = err.to_string();
        match err {
            lopdf::Error::Decryption(_) => {
                DocumentError::Unreadable(format!("unsupported encryption: {}", cause))
            }
            _ => DocumentError::Unreadable(cause),
        }
    }
}

/// Failure to extract text from a single page.
///
/// Only seen by [`DocumentParser`](crate::parser::DocumentParser)
/// implementations; the extractor turns it into an empty page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("page {page}: {reason}")]
pub struct PageError {
    /// Page number (1-indexed) that failed.
    pub page: u32,
    /// Human-readable cause.
    pub reason: String,
}

impl PageError {
    /// Create a new page error.
    pub fn new(page: u32, reason: impl Into<String>) -> Self {
        Self {
            page,
            reason: reason.into(),
        }
    }
}
