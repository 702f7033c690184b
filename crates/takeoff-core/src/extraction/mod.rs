pub mod pdftotext;
pub mod plain_text;

use crate::error::TakeoffError;
use crate::model::RawLine;
use std::ops::RangeInclusive;

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

impl PageContent {
    /// Split page text into lines. Empty text yields no lines.
    pub fn from_text(page_number: usize, text: &str) -> Self {
        PageContent {
            page_number,
            lines: text.lines().map(|l| l.to_string()).collect(),
        }
    }

    pub fn empty(page_number: usize) -> Self {
        PageContent {
            page_number,
            lines: Vec::new(),
        }
    }

    pub fn raw_lines(&self) -> impl Iterator<Item = RawLine> + '_ {
        self.lines.iter().map(move |text| RawLine {
            page: self.page_number,
            text: text.clone(),
        })
    }
}

/// A 1-based, inclusive page range within a document of `page_count` pages.
///
/// Only built through [`PageRange::resolve`], so `1 <= start <= end <= page_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    start: usize,
    end: usize,
    page_count: usize,
}

impl PageRange {
    /// Fill in missing bounds (first and last page) and validate the result
    /// against the document's page count.
    pub fn resolve(
        start: Option<usize>,
        end: Option<usize>,
        page_count: usize,
    ) -> Result<PageRange, TakeoffError> {
        if page_count == 0 {
            return Err(TakeoffError::InvalidPageRange(
                "document has no pages".into(),
            ));
        }

        let start = start.unwrap_or(1);
        let end = end.unwrap_or(page_count);

        if start == 0 || end == 0 {
            return Err(TakeoffError::InvalidPageRange(
                "page 0 is invalid (pages start at 1)".into(),
            ));
        }
        if start > end {
            return Err(TakeoffError::InvalidPageRange(format!(
                "start page {start} is after end page {end}"
            )));
        }
        if end > page_count {
            return Err(TakeoffError::InvalidPageRange(format!(
                "page {end} exceeds document page count ({page_count})"
            )));
        }

        Ok(PageRange {
            start,
            end,
            page_count,
        })
    }

    pub fn pages(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Total pages in the document the range was resolved against.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn len(&self) -> usize {
        (self.end + 1).saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Progress label for page `n`, e.g. `3/12`.
    pub fn progress(&self, n: usize) -> String {
        format!("{}/{}", n, self.page_count)
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Number of pages in the document.
    fn page_count(&self, pdf_bytes: &[u8]) -> Result<usize, TakeoffError>;

    /// Extract the text of one 1-based page.
    fn extract_page(&self, pdf_bytes: &[u8], page_number: usize)
        -> Result<PageContent, TakeoffError>;

    /// Extract every page in `range`, in order.
    ///
    /// A page that fails to extract is returned with no lines, so one bad
    /// page never aborts the rest of the range.
    fn extract_range(&self, pdf_bytes: &[u8], range: PageRange) -> Vec<PageContent> {
        range
            .pages()
            .map(|n| {
                tracing::info!("Extracting page {}", range.progress(n));
                self.extract_page(pdf_bytes, n).unwrap_or_else(|e| {
                    tracing::warn!(page = n, error = %e, "Page extraction failed, skipping");
                    PageContent::empty(n)
                })
            })
            .collect()
    }

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
