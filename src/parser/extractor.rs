//! Per-page text extraction.

use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use rayon::prelude::*;

use crate::detect::detect_header;
use crate::error::{DocumentError, Result};
use crate::model::Page;

use super::backend::{DocumentParser, LopdfParser, PageHandle, PageSource};
use super::options::ExtractOptions;

/// Turns document bytes into an ordered list of pages.
///
/// Opening the document is all-or-nothing. Once open, a page whose text
/// cannot be extracted becomes an empty page and the remaining pages are
/// still processed.
#[derive(Debug, Clone, Default)]
pub struct PageExtractor<P = LopdfParser> {
    parser: P,
    options: ExtractOptions,
}

impl PageExtractor<LopdfParser> {
    /// Create an extractor backed by lopdf.
    pub fn new() -> Self {
        Self::with_parser(LopdfParser::new())
    }
}

impl<P: DocumentParser> PageExtractor<P> {
    /// Create an extractor over a custom parser.
    pub fn with_parser(parser: P) -> Self {
        Self {
            parser,
            options: ExtractOptions::default(),
        }
    }

    /// Set extract options.
    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    /// Current options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// The underlying parser.
    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Extract every page of the document, in document order.
    ///
    /// Pages are numbered from 1 without gaps regardless of which pages
    /// failed.
    pub fn extract(&self, data: &[u8]) -> Result<Vec<Page>> {
        let started = Instant::now();
        let deadline = self.options.timeout.map(|budget| started + budget);

        if self.options.validate_header {
            let header = detect_header(data)?;
            log::debug!("Detected {} at offset {}", header, header.offset);
        }

        let source = self.parser.open(data)?;
        let handles = source.pages();
        log::debug!("Opened document with {} pages", handles.len());

        let pages = if self.options.parallel && handles.len() > 1 {
            handles
                .par_iter()
                .enumerate()
                .map(|(position, handle)| extract_page(&source, position, handle, deadline))
                .collect::<Option<Vec<_>>>()
        } else {
            handles
                .iter()
                .enumerate()
                .map(|(position, handle)| extract_page(&source, position, handle, deadline))
                .collect::<Option<Vec<_>>>()
        };

        if let Some(budget) = self.options.timeout {
            if pages.is_none() || started.elapsed() > budget {
                return Err(DocumentError::Timeout(budget));
            }
        }
        // Pages only go missing when a deadline is set.
        let pages = pages.unwrap_or_default();

        let failed = pages.iter().filter(|p| p.extraction_failed).count();
        if failed > 0 {
            log::warn!(
                "{} of {} pages could not be extracted and were left empty",
                failed,
                pages.len()
            );
        }
        Ok(pages)
    }
}

/// Extract one page; `None` when the deadline passed before it started.
///
/// A source that panics on a page costs only that page.
fn extract_page<S: PageSource>(
    source: &S,
    position: usize,
    handle: &PageHandle,
    deadline: Option<Instant>,
) -> Option<Page> {
    if deadline.is_some_and(|d| Instant::now() >= d) {
        return None;
    }

    let index = position as u32 + 1;
    let extracted = panic::catch_unwind(AssertUnwindSafe(|| source.extract_text(handle)));
    let page = match extracted {
        Ok(Ok(Some(text))) => Page::new(index, text),
        Ok(Ok(None)) => Page::new(index, String::new()),
        Ok(Err(e)) => {
            log::warn!("Failed to extract text from page {}: {}", index, e);
            Page::failed(index)
        }
        Err(_) => {
            log::warn!("Parser panicked while extracting page {}", index);
            Page::failed(index)
        }
    };
    Some(page)
}
