//! Integration tests for the conversion pipeline.

use std::sync::atomic::{AtomicUsize, Ordering};

use pdfpages::convert::{convert_bytes_with, ConvertOptions};
use pdfpages::error::{DocumentError, PageError, Result};
use pdfpages::parser::{DocumentParser, ExtractOptions, PageExtractor, PageHandle, PageSource};
use pdfpages::render::{
    summarize, to_flat_text, to_json, to_structured_record, JsonFormat, PreviewLength,
    StructuredRecord,
};
use pdfpages::{Document, Page};

/// How a mock page behaves when extracted.
#[derive(Clone, Copy)]
enum MockPage {
    Text(&'static str),
    NoData,
    Fails,
}

/// Mock parser for testing.
struct MockParser {
    pages: Vec<MockPage>,
    unreadable: bool,
    opened: AtomicUsize,
}

impl MockParser {
    fn new(pages: Vec<MockPage>) -> Self {
        Self {
            pages,
            unreadable: false,
            opened: AtomicUsize::new(0),
        }
    }

    fn unreadable() -> Self {
        Self {
            unreadable: true,
            ..Self::new(Vec::new())
        }
    }
}

struct MockSource {
    pages: Vec<MockPage>,
}

impl DocumentParser for MockParser {
    type Source = MockSource;

    fn open(&self, _data: &[u8]) -> Result<MockSource> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        if self.unreadable {
            return Err(DocumentError::Unreadable("malformed xref table".into()));
        }
        Ok(MockSource {
            pages: self.pages.clone(),
        })
    }
}

impl PageSource for MockSource {
    fn pages(&self) -> Vec<PageHandle> {
        (1..=self.pages.len() as u32)
            .map(PageHandle::numbered)
            .collect()
    }

    fn extract_text(&self, page: &PageHandle) -> std::result::Result<Option<String>, PageError> {
        match self.pages[(page.number - 1) as usize] {
            MockPage::Text(text) => Ok(Some(text.to_string())),
            MockPage::NoData => Ok(None),
            MockPage::Fails => Err(PageError::new(page.number, "broken content stream")),
        }
    }
}

const PDF_BYTES: &[u8] = b"%PDF-1.7\n%mock";

fn extract(pages: Vec<MockPage>) -> Document {
    let extractor = PageExtractor::with_parser(MockParser::new(pages));
    Document::build("mock.pdf", extractor.extract(PDF_BYTES).unwrap())
}

fn preview(n: usize) -> PreviewLength {
    PreviewLength::new(n).unwrap()
}

#[test]
fn test_hello_world_summary() {
    let doc = extract(vec![
        MockPage::Text("Hello"),
        MockPage::Text(""),
        MockPage::Text("World"),
    ]);
    let summary = summarize(&doc, preview(3));

    assert_eq!(summary.total_pages, 3);
    assert_eq!(summary.total_chars, 10);
    let previews: Vec<&str> = summary.previews.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(previews, vec!["Hel...", "", "Wor..."]);
}

#[test]
fn test_failed_middle_page() {
    let doc = extract(vec![
        MockPage::Text("A"),
        MockPage::Fails,
        MockPage::Text("C"),
    ]);

    let pages: Vec<(u32, &str)> = doc.pages().iter().map(|p| (p.index, p.text.as_str())).collect();
    assert_eq!(pages, vec![(1, "A"), (2, ""), (3, "C")]);
    assert!(doc.pages()[1].extraction_failed);

    let summary = summarize(&doc, preview(10));
    assert_eq!(summary.total_pages, 3);
    assert_eq!(summary.total_chars, 2);
}

#[test]
fn test_every_failure_kind_becomes_empty_text() {
    let doc = extract(vec![MockPage::NoData, MockPage::Fails, MockPage::Text("")]);

    assert_eq!(doc.page_count(), 3);
    assert!(doc.pages().iter().all(|p| p.text.is_empty()));
    assert!(!doc.pages()[0].extraction_failed);
    assert!(!doc.pages()[2].extraction_failed);
    assert_eq!(doc.failed_page_count(), 1);
}

#[test]
fn test_unreadable_produces_no_outputs() {
    let extractor = PageExtractor::with_parser(MockParser::unreadable());
    let result = convert_bytes_with(&extractor, PDF_BYTES, "bad.pdf", &ConvertOptions::default());

    match result {
        Err(DocumentError::Unreadable(cause)) => assert_eq!(cause, "malformed xref table"),
        other => panic!("expected Unreadable, got {:?}", other.map(|c| c.text.file_name)),
    }
}

#[test]
fn test_garbage_bytes_never_reach_parser() {
    let parser = MockParser::new(vec![MockPage::Text("A")]);
    let extractor = PageExtractor::with_parser(parser);

    let result = extractor.extract(b"\x00\x01\x02 not a document");
    assert!(result.unwrap_err().is_unreadable());
    assert_eq!(extractor.parser().opened.load(Ordering::SeqCst), 0);
}

#[test]
fn test_empty_document_outputs() {
    let doc = extract(Vec::new());

    assert_eq!(doc.page_count(), 0);
    assert_eq!(to_flat_text(&doc), "");

    let record = to_structured_record(&doc);
    assert_eq!(record.filename, "mock.pdf");
    assert_eq!(record.n_pages, 0);
    assert!(record.pages.is_empty());

    let json = to_json(&doc, JsonFormat::Pretty).unwrap();
    assert_eq!(
        json,
        "{\n  \"filename\": \"mock.pdf\",\n  \"n_pages\": 0,\n  \"pages\": []\n}"
    );
}

#[test]
fn test_page_count_matches_pages() {
    for n in [0usize, 1, 2, 7, 40] {
        let doc = extract(vec![MockPage::Text("x"); n]);
        assert_eq!(doc.pages().len() as u32, doc.page_count());
        let indices: Vec<u32> = doc.pages().iter().map(|p| p.index).collect();
        assert_eq!(indices, (1..=n as u32).collect::<Vec<_>>());
    }
}

#[test]
fn test_serializers_are_deterministic() {
    let doc = extract(vec![
        MockPage::Text("première page"),
        MockPage::Fails,
        MockPage::Text("第三页"),
    ]);

    assert_eq!(to_flat_text(&doc), to_flat_text(&doc));
    assert_eq!(
        to_json(&doc, JsonFormat::Pretty).unwrap(),
        to_json(&doc, JsonFormat::Pretty).unwrap()
    );
}

#[test]
fn test_json_round_trip_preserves_text() {
    let doc = extract(vec![
        MockPage::Text("quotes \" and \\ backslashes"),
        MockPage::Text("emoji 🎉 and accents éàü"),
        MockPage::Text("line\nbreaks\r\n"),
    ]);

    let json = to_json(&doc, JsonFormat::Pretty).unwrap();
    let record = StructuredRecord::from_json(&json).unwrap();

    let originals: Vec<&str> = doc.pages().iter().map(|p| p.text.as_str()).collect();
    assert_eq!(record.texts().collect::<Vec<_>>(), originals);
}

#[test]
fn test_total_chars_matches_pages() {
    let doc = extract(vec![
        MockPage::Text("ab"),
        MockPage::Text("çé"),
        MockPage::Text("日本語"),
    ]);
    let expected: usize = doc.pages().iter().map(|p| p.text.chars().count()).sum();
    assert_eq!(summarize(&doc, preview(1)).total_chars, expected);
    assert_eq!(expected, 7);
}

#[test]
fn test_flat_text_keeps_delimiters_for_empty_pages() {
    let doc = extract(vec![MockPage::Fails, MockPage::Text("B")]);
    assert_eq!(to_flat_text(&doc), "=== Page 1 ===\n\n\n=== Page 2 ===\nB");
}

#[test]
fn test_convert_with_mock_parser() {
    let extractor = PageExtractor::with_parser(MockParser::new(vec![
        MockPage::Text("Hello"),
        MockPage::Text("World"),
    ]))
    .with_options(ExtractOptions::new().sequential());

    let options = ConvertOptions::new().with_preview_length(preview(2));
    let conversion = convert_bytes_with(&extractor, PDF_BYTES, "greeting.v1.pdf", &options).unwrap();

    assert_eq!(conversion.text.file_name, "greeting.v1.txt");
    assert_eq!(conversion.text.mime_type(), "text/plain");
    assert_eq!(conversion.json.file_name, "greeting.v1.json");
    assert_eq!(conversion.json.mime_type(), "application/json");
    assert_eq!(conversion.summary.previews[0].text, "He...");
    assert_eq!(conversion.document.page_count(), 2);
}

#[test]
fn test_parser_opened_once_per_extract() {
    let parser = MockParser::new(vec![MockPage::Text("A"); 5]);
    let extractor = PageExtractor::with_parser(parser);
    extractor.extract(PDF_BYTES).unwrap();
    let pages = extractor.extract(PDF_BYTES).unwrap();

    assert_eq!(extractor.parser().opened.load(Ordering::SeqCst), 2);
    assert_eq!(pages[0], Page::new(1, "A"));
}
