//! End-to-end conversion: bytes in, text/JSON artifacts and summary out.
//!
//! # Example
//!
//! ```no_run
//! use pdfpages::convert::{convert_bytes, ConvertOptions};
//!
//! fn main() -> pdfpages::Result<()> {
//!     let data = std::fs::read("report.pdf")?;
//!     let conversion = convert_bytes(&data, "report.pdf", &ConvertOptions::default())?;
//!
//!     std::fs::write(&conversion.text.file_name, &conversion.text.bytes)?;
//!     std::fs::write(&conversion.json.file_name, &conversion.json.bytes)?;
//!     println!("{} characters", conversion.summary.total_chars);
//!     Ok(())
//! }
//! ```

mod artifact;

pub use artifact::{OutputArtifact, OutputFormat};

use crate::error::Result;
use crate::model::Document;
use crate::parser::{DocumentParser, ExtractOptions, PageExtractor};
use crate::render::{summarize, to_flat_text, to_json, JsonFormat, PreviewLength, SummaryView};

/// Options for a full conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Extraction options
    pub extract: ExtractOptions,

    /// Characters shown per page in the summary
    pub preview_length: PreviewLength,

    /// Layout of the JSON artifact
    pub json_format: JsonFormat,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set extraction options.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract = options;
        self
    }

    /// Set preview length.
    pub fn with_preview_length(mut self, length: PreviewLength) -> Self {
        self.preview_length = length;
        self
    }

    /// Set JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }
}

/// Everything produced from one input document.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The extracted document
    pub document: Document,

    /// `{basename}.txt`
    pub text: OutputArtifact,

    /// `{basename}.json`
    pub json: OutputArtifact,

    /// Summary statistics and previews
    pub summary: SummaryView,
}

impl Conversion {
    /// Both artifacts, text first.
    pub fn artifacts(&self) -> [&OutputArtifact; 2] {
        [&self.text, &self.json]
    }
}

/// Render the outputs of an already extracted document.
pub fn render_document(document: Document, options: &ConvertOptions) -> Result<Conversion> {
    let filename = document.filename().to_string();
    let text = OutputArtifact::new(OutputFormat::Text, &filename, to_flat_text(&document));
    let json = OutputArtifact::new(
        OutputFormat::Json,
        &filename,
        to_json(&document, options.json_format)?,
    );
    let summary = summarize(&document, options.preview_length);

    Ok(Conversion {
        document,
        text,
        json,
        summary,
    })
}

/// Convert document bytes with the default lopdf parser.
pub fn convert_bytes(data: &[u8], filename: &str, options: &ConvertOptions) -> Result<Conversion> {
    let extractor = PageExtractor::new().with_options(options.extract.clone());
    convert_bytes_with(&extractor, data, filename, options)
}

/// Convert document bytes with a given extractor.
///
/// Nothing is rendered unless extraction succeeds.
pub fn convert_bytes_with<P: DocumentParser>(
    extractor: &PageExtractor<P>,
    data: &[u8],
    filename: &str,
    options: &ConvertOptions,
) -> Result<Conversion> {
    let pages = extractor.extract(data)?;
    let document = Document::build(filename, pages);
    log::debug!(
        "Extracted {} pages from {} ({} empty after failure)",
        document.page_count(),
        filename,
        document.failed_page_count()
    );
    render_document(document, options)
}
