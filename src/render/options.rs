//! Summary configuration.

use std::fmt;
use std::num::NonZeroUsize;

use crate::error::{DocumentError, Result};

/// Marker appended to a preview that was cut short.
pub const TRUNCATION_MARKER: &str = "...";

/// Number of characters shown per page in a summary preview.
///
/// Any positive length is accepted by the summarizer. Interactive shells
/// additionally apply [`PreviewLength::bounded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PreviewLength(NonZeroUsize);

impl PreviewLength {
    /// Smallest length a shell should offer.
    pub const MIN: usize = 100;
    /// Largest length a shell should offer.
    pub const MAX: usize = 20_000;
    /// Shell default.
    pub const DEFAULT: usize = 1_000;

    /// Create a preview length; zero is rejected.
    pub fn new(chars: usize) -> Result<Self> {
        NonZeroUsize::new(chars)
            .map(Self)
            .ok_or_else(|| DocumentError::InvalidConfig("preview length must be positive".into()))
    }

    /// Create a preview length within the shell bounds `MIN..=MAX`.
    pub fn bounded(chars: usize) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&chars) {
            return Err(DocumentError::InvalidConfig(format!(
                "preview length {} is outside {}..={}",
                chars,
                Self::MIN,
                Self::MAX
            )));
        }
        Self::new(chars)
    }

    /// Length in characters.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PreviewLength {
    fn default() -> Self {
        Self(NonZeroUsize::new(Self::DEFAULT).unwrap_or(NonZeroUsize::MIN))
    }
}

impl fmt::Display for PreviewLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for PreviewLength {
    type Error = DocumentError;

    fn try_from(chars: usize) -> Result<Self> {
        Self::new(chars)
    }
}
