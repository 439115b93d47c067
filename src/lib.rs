//! # pdfpages
//!
//! Per-page PDF text extraction for Rust.
//!
//! This library reads a PDF, recovers the text of every page, and serializes
//! the result as a flat text file and as a structured JSON record.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfpages::{extract_file, render};
//!
//! fn main() -> pdfpages::Result<()> {
//!     let doc = extract_file("document.pdf")?;
//!
//!     println!("{}", render::to_flat_text(&doc));
//!     let summary = render::summarize(&doc, render::PreviewLength::default());
//!     println!("{} pages, {} characters", summary.total_pages, summary.total_chars);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Behavior
//!
//! - A document that cannot be opened fails with [`DocumentError::Unreadable`].
//! - A page whose text cannot be extracted is kept as an empty page.
//! - Pages are extracted in parallel with Rayon unless disabled.
//! - Text is never normalized; JSON output keeps non-ASCII characters as-is.

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{Conversion, ConvertOptions, OutputArtifact, OutputFormat};
pub use detect::{detect_header, is_pdf_bytes, PdfHeader};
pub use error::{DocumentError, PageError, Result};
pub use model::{Document, Page};
pub use parser::{DocumentParser, ExtractOptions, LopdfParser, PageExtractor, PageHandle, PageSource};
pub use render::{JsonFormat, PagePreview, PreviewLength, StructuredRecord, SummaryView};

use std::path::Path;
use std::time::Duration;

/// Extract a document from bytes.
///
/// # Arguments
///
/// * `data` - PDF file content as bytes
/// * `filename` - Name recorded in the document (metadata only)
///
/// # Example
///
/// ```no_run
/// use pdfpages::extract_bytes;
///
/// let data = std::fs::read("document.pdf").unwrap();
/// let doc = extract_bytes(&data, "document.pdf").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn extract_bytes(data: &[u8], filename: &str) -> Result<Document> {
    extract_bytes_with_options(data, filename, ExtractOptions::default())
}

/// Extract a document from bytes with custom options.
pub fn extract_bytes_with_options(
    data: &[u8],
    filename: &str,
    options: ExtractOptions,
) -> Result<Document> {
    let pages = PageExtractor::new().with_options(options).extract(data)?;
    Ok(Document::build(filename, pages))
}

/// Extract a document from a file.
///
/// The file name (without directories) becomes the document's filename.
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    extract_file_with_options(path, ExtractOptions::default())
}

/// Extract a document from a file with custom options.
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ExtractOptions,
) -> Result<Document> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    extract_bytes_with_options(&data, &file_name_of(path), options)
}

/// Convert a file to text and JSON artifacts plus a summary.
///
/// # Example
///
/// ```no_run
/// use pdfpages::{convert_file, ConvertOptions};
///
/// let conversion = convert_file("report.pdf", &ConvertOptions::default()).unwrap();
/// std::fs::write(&conversion.json.file_name, &conversion.json.bytes).unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P, options: &ConvertOptions) -> Result<Conversion> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    convert::convert_bytes(&data, &file_name_of(path), options)
}

/// Convert a file, reading it with Tokio.
///
/// Extraction itself runs on the calling task.
#[cfg(feature = "async")]
pub async fn convert_file_async<P: AsRef<Path>>(
    path: P,
    options: &ConvertOptions,
) -> Result<Conversion> {
    let path = path.as_ref();
    let data = tokio::fs::read(path).await?;
    convert::convert_bytes(&data, &file_name_of(path), options)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Builder for extracting and converting documents.
///
/// # Example
///
/// ```no_run
/// use pdfpages::PdfPages;
///
/// let data = std::fs::read("document.pdf")?;
/// let conversion = PdfPages::new()
///     .sequential()
///     .with_preview_chars(200)?
///     .convert_bytes(&data, "document.pdf")?;
/// println!("{}", conversion.text.as_str());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PdfPages {
    options: ConvertOptions,
}

impl PdfPages {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.options.extract = self.options.extract.sequential();
        self
    }

    /// Set an overall time budget per document.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options.extract = self.options.extract.with_timeout(timeout);
        self
    }

    /// Skip the `%PDF-` header check.
    pub fn without_header_check(mut self) -> Self {
        self.options.extract = self.options.extract.with_header_validation(false);
        self
    }

    /// Set summary preview length; zero is rejected.
    pub fn with_preview_chars(mut self, chars: usize) -> Result<Self> {
        self.options.preview_length = PreviewLength::new(chars)?;
        Ok(self)
    }

    /// Set JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.options.json_format = format;
        self
    }

    /// Current conversion options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Extract a document without rendering it.
    pub fn extract_bytes(&self, data: &[u8], filename: &str) -> Result<Document> {
        extract_bytes_with_options(data, filename, self.options.extract.clone())
    }

    /// Extract and render a document.
    pub fn convert_bytes(&self, data: &[u8], filename: &str) -> Result<Conversion> {
        convert::convert_bytes(data, filename, &self.options)
    }

    /// Extract and render a file.
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<Conversion> {
        convert_file(path, &self.options)
    }
}
