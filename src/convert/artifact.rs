//! Downloadable output files.

use crate::model::basename;

/// Output format of a rendered artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Flat text with page delimiters
    Text,
    /// Structured JSON record
    Json,
}

impl OutputFormat {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }

    /// MIME type of the encoded output.
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Text => "text/plain",
            OutputFormat::Json => "application/json",
        }
    }

    /// Output file name for a given input file name.
    pub fn file_name_for(self, input_filename: &str) -> String {
        format!("{}.{}", basename(input_filename), self.extension())
    }
}

/// An encoded output ready to be written or offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    /// Format of the content
    pub format: OutputFormat,
    /// Suggested file name
    pub file_name: String,
    /// UTF-8 encoded content
    pub bytes: Vec<u8>,
}

impl OutputArtifact {
    /// Wrap rendered content for an input file name.
    pub fn new(format: OutputFormat, input_filename: &str, content: String) -> Self {
        Self {
            format,
            file_name: format.file_name_for(input_filename),
            bytes: content.into_bytes(),
        }
    }

    /// MIME type of the content.
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Content as text.
    pub fn as_str(&self) -> &str {
        // Built from a `String`, so always valid UTF-8.
        std::str::from_utf8(&self.bytes).unwrap_or_default()
    }

    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.bytes.len()
    }
}
