//! Summary statistics and per-page previews.

use serde::{Deserialize, Serialize};

use crate::model::{Document, Page};

use super::options::{PreviewLength, TRUNCATION_MARKER};

/// Aggregate view of a document for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryView {
    /// Source filename
    pub filename: String,

    /// Total number of pages
    pub total_pages: u32,

    /// Total characters across all pages (Unicode scalar values)
    pub total_chars: usize,

    /// One preview per page, in document order
    pub previews: Vec<PagePreview>,
}

/// Preview of a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagePreview {
    /// Page number (1-indexed)
    pub page_number: u32,

    /// Leading text, with the truncation marker when cut short
    pub text: String,

    /// Number of page characters included in the preview
    pub shown_chars: usize,

    /// Whether the page text was longer than the preview
    pub truncated: bool,
}

impl SummaryView {
    /// Check if no text at all was extracted.
    pub fn is_blank(&self) -> bool {
        self.total_chars == 0
    }
}

/// Summarize a document.
pub fn summarize(doc: &Document, preview_length: PreviewLength) -> SummaryView {
    let previews: Vec<PagePreview> = doc
        .pages()
        .iter()
        .map(|page| preview(page, preview_length))
        .collect();

    SummaryView {
        filename: doc.filename().to_string(),
        total_pages: doc.page_count(),
        total_chars: doc.pages().iter().map(Page::char_count).sum(),
        previews,
    }
}

/// Preview one page's text.
pub fn preview(page: &Page, preview_length: PreviewLength) -> PagePreview {
    let limit = preview_length.get();

    // Byte offset of the first character past the limit, if any.
    let cut = page.text.char_indices().nth(limit).map(|(offset, _)| offset);

    match cut {
        Some(offset) => PagePreview {
            page_number: page.index,
            text: format!("{}{}", &page.text[..offset], TRUNCATION_MARKER),
            shown_chars: limit,
            truncated: true,
        },
        None => PagePreview {
            page_number: page.index,
            text: page.text.clone(),
            shown_chars: page.char_count(),
            truncated: false,
        },
    }
}
