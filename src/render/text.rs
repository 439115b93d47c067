//! Flat text rendering.

use crate::model::{Document, Page};

/// Render the delimiter line that opens a page.
pub fn page_delimiter(index: u32) -> String {
    format!("=== Page {} ===", index)
}

/// Convert a document to flat text.
///
/// Each page is written as its delimiter line followed by the raw page
/// text, and pages are separated by a blank line. Empty pages keep their
/// delimiter. A document without pages renders as the empty string.
pub fn to_flat_text(doc: &Document) -> String {
    doc.pages()
        .iter()
        .map(render_page)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_page(page: &Page) -> String {
    format!("{}\n{}", page_delimiter(page.index), page.text)
}
