pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod profile;
pub mod project;
pub mod tidy;

use error::TakeoffError;
use extraction::{PageContent, PageRange, PdfExtractor};
use model::{ExtractionReport, PipelineStats};
use parsing::LineInterpreter;
use profile::schema::ProfileDef;
use tidy::Tidier;

/// Options for a document extraction run.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// First page to read (1-based). Defaults to the first page.
    pub start_page: Option<usize>,
    /// Last page to read (inclusive). Defaults to the last page.
    pub end_page: Option<usize>,
}

/// Main API entry point: extract equipment records from a document.
///
/// The page range is validated against the document before any text is
/// extracted. Pages that fail to extract contribute no lines.
pub fn extract_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    profile: &ProfileDef,
    options: &ExtractOptions,
) -> Result<ExtractionReport, TakeoffError> {
    let page_count = extractor.page_count(pdf_bytes)?;
    let range = PageRange::resolve(options.start_page, options.end_page, page_count)?;

    tracing::info!(
        backend = extractor.backend_name(),
        start = range.start(),
        end = range.end(),
        page_count,
        "Extracting data from page {} to {}",
        range.start(),
        range.end()
    );

    let pages = extractor.extract_range(pdf_bytes, range);
    extract_lines(&pages, profile)
}

/// Run the line pipeline over already-extracted pages.
///
/// Interpret every line, tidy the candidates, then project them onto the
/// output schema. Page order and line order are kept throughout.
pub fn extract_lines(
    pages: &[PageContent],
    profile: &ProfileDef,
) -> Result<ExtractionReport, TakeoffError> {
    let interpreter = LineInterpreter::from_profile(profile)?;

    let candidates = interpreter.interpret_pages(pages);
    let candidate_count = candidates.len();

    let tidied = Tidier::new(profile).tidy(candidates);
    let records = project::project_records(&tidied.records);

    let stats = PipelineStats {
        pages_processed: pages.len(),
        lines_scanned: pages.iter().map(|p| p.lines.len()).sum(),
        candidates: candidate_count,
        dropped_by_tidy: tidied.dropped,
        unknown_codes: tidied.unknown_codes,
        dropped_by_projection: tidied.records.len() - records.len(),
        records: records.len(),
    };

    tracing::debug!(
        pages = stats.pages_processed,
        lines = stats.lines_scanned,
        candidates = stats.candidates,
        dropped_by_tidy = stats.dropped_by_tidy,
        dropped_by_projection = stats.dropped_by_projection,
        "Pipeline stages complete"
    );
    if stats.unknown_codes > 0 {
        tracing::warn!(
            count = stats.unknown_codes,
            "Codes without descriptions reached the output, check the profile"
        );
    }
    tracing::info!("Extraction complete. {} rows extracted.", stats.records);

    Ok(ExtractionReport {
        records,
        candidates: tidied.records,
        stats,
    })
}
