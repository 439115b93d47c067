//! Page-level types.

/// A single page of extracted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Page number (1-indexed, matches source order)
    pub index: u32,

    /// Extracted text; empty when the page has no text or extraction failed
    pub text: String,

    /// Whether `text` is empty because extraction failed
    pub extraction_failed: bool,
}

impl Page {
    /// Create a page holding successfully extracted text.
    pub fn new(index: u32, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            extraction_failed: false,
        }
    }

    /// Create the empty stand-in for a page whose extraction failed.
    pub fn failed(index: u32) -> Self {
        Self {
            index,
            text: String::new(),
            extraction_failed: true,
        }
    }

    /// Number of Unicode scalar values in the text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the page carries no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
