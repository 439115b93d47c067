//! Structured record rendering.

use serde::{Deserialize, Serialize};

use crate::error::{DocumentError, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Machine-readable view of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredRecord {
    /// Source filename
    pub filename: String,
    /// Number of pages
    pub n_pages: u32,
    /// Pages in document order
    pub pages: Vec<PageRecord>,
}

/// One page of a [`StructuredRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Page number (1-indexed)
    pub page_number: u32,
    /// Page text, unaltered
    pub text: String,
}

impl StructuredRecord {
    /// Parse a record previously produced by [`to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| DocumentError::Render(format!("JSON deserialization error: {}", e)))
    }

    /// Page texts in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|p| p.text.as_str())
    }
}

/// Build the structured record for a document.
pub fn to_structured_record(doc: &Document) -> StructuredRecord {
    StructuredRecord {
        filename: doc.filename().to_string(),
        n_pages: doc.page_count(),
        pages: doc
            .pages()
            .iter()
            .map(|page| PageRecord {
                page_number: page.index,
                text: page.text.clone(),
            })
            .collect(),
    }
}

/// Convert a document to JSON.
///
/// Non-ASCII text is written as-is, never as `\u` escapes.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let record = to_structured_record(doc);
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&record),
        JsonFormat::Compact => serde_json::to_string(&record),
    };

    result.map_err(|e| DocumentError::Render(format!("JSON serialization error: {}", e)))
}
