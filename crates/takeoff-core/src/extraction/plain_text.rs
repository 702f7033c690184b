use crate::error::TakeoffError;
use crate::extraction::{PageContent, PdfExtractor};

/// Backend for text that was already extracted, e.g. saved `pdftotext` output.
///
/// The input bytes are UTF-8 text with pages separated by form feeds.
#[derive(Debug, Clone, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        PlainTextExtractor
    }
}

impl PdfExtractor for PlainTextExtractor {
    fn page_count(&self, bytes: &[u8]) -> Result<usize, TakeoffError> {
        Ok(split_pages(&decode(bytes)?).len())
    }

    fn extract_page(&self, bytes: &[u8], page_number: usize) -> Result<PageContent, TakeoffError> {
        let text = decode(bytes)?;
        let pages = split_pages(&text);
        page_number
            .checked_sub(1)
            .and_then(|i| pages.get(i))
            .map(|page| PageContent::from_text(page_number, page))
            .ok_or_else(|| {
                TakeoffError::Extraction(format!(
                    "page {} not found (text has {} pages)",
                    page_number,
                    pages.len()
                ))
            })
    }

    fn backend_name(&self) -> &str {
        "plain-text"
    }
}

fn decode(bytes: &[u8]) -> Result<&str, TakeoffError> {
    std::str::from_utf8(bytes)
        .map_err(|e| TakeoffError::Extraction(format!("input is not UTF-8 text: {e}")))
}

/// Split on form feeds. The trailing feed pdftotext writes after the last
/// page does not start a new page.
fn split_pages(text: &str) -> Vec<&str> {
    let mut pages: Vec<&str> = text.split('\x0c').collect();
    if pages.len() > 1 && pages.last() == Some(&"") {
        pages.pop();
    }
    pages
}
