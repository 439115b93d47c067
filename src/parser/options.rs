//! Extraction options and configuration.

use std::time::Duration;

/// Options for extracting page text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Whether to extract pages on the rayon thread pool
    pub parallel: bool,

    /// Overall wall-clock budget for one document (None = unlimited)
    pub timeout: Option<Duration>,

    /// Whether to check for a `%PDF-` header before opening
    pub validate_header: bool,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the overall time budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enable or disable header validation.
    pub fn with_header_validation(mut self, validate: bool) -> Self {
        self.validate_header = validate;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            timeout: None,
            validate_header: true,
        }
    }
}
