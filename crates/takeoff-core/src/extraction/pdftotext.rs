use crate::error::TakeoffError;
use crate::extraction::{PageContent, PageRange, PdfExtractor};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

/// PDF extraction backend using pdftotext and pdfinfo (from poppler-utils).
///
/// Text is extracted in reading order by default. `with_layout` switches to
/// `pdftotext -layout`, which keeps the column alignment of schedules.
#[derive(Debug, Clone, Default)]
pub struct PdftotextExtractor {
    layout: bool,
}

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor { layout: false }
    }

    pub fn with_layout(mut self, layout: bool) -> Self {
        self.layout = layout;
        self
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }

    fn page_text(&self, pdf_path: &Path, page_number: usize) -> Result<PageContent, TakeoffError> {
        let page = page_number.to_string();
        let mut cmd = Command::new("pdftotext");
        cmd.arg("-f").arg(&page).arg("-l").arg(&page);
        if self.layout {
            cmd.arg("-layout");
        }
        cmd.arg(pdf_path).arg("-"); // output to stdout

        let output = run("pdftotext", &mut cmd)?;
        let text = String::from_utf8_lossy(&output.stdout);

        // pdftotext terminates every page with a form feed
        let page_text = text.split('\x0c').next().unwrap_or("");
        Ok(PageContent::from_text(page_number, page_text))
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn page_count(&self, pdf_bytes: &[u8]) -> Result<usize, TakeoffError> {
        let tmpfile = write_temp_pdf(pdf_bytes)?;
        let mut cmd = Command::new("pdfinfo");
        cmd.arg(tmpfile.path());
        let output = run("pdfinfo", &mut cmd)?;
        parse_page_count(&String::from_utf8_lossy(&output.stdout)).ok_or_else(|| {
            TakeoffError::Extraction("pdfinfo did not report a page count".into())
        })
    }

    fn extract_page(
        &self,
        pdf_bytes: &[u8],
        page_number: usize,
    ) -> Result<PageContent, TakeoffError> {
        let tmpfile = write_temp_pdf(pdf_bytes)?;
        self.page_text(tmpfile.path(), page_number)
    }

    fn extract_range(&self, pdf_bytes: &[u8], range: PageRange) -> Vec<PageContent> {
        // One temp file for the whole range instead of one per page.
        let tmpfile = match write_temp_pdf(pdf_bytes) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(error = %e, "Could not stage PDF for extraction");
                return range.pages().map(PageContent::empty).collect();
            }
        };

        range
            .pages()
            .map(|n| {
                tracing::info!("Extracting page {}", range.progress(n));
                self.page_text(tmpfile.path(), n).unwrap_or_else(|e| {
                    tracing::warn!(page = n, error = %e, "Page extraction failed, skipping");
                    PageContent::empty(n)
                })
            })
            .collect()
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

fn write_temp_pdf(pdf_bytes: &[u8]) -> Result<tempfile::NamedTempFile, TakeoffError> {
    let mut tmpfile =
        tempfile::NamedTempFile::new().map_err(|e| TakeoffError::Extraction(e.to_string()))?;
    tmpfile
        .write_all(pdf_bytes)
        .map_err(|e| TakeoffError::Extraction(e.to_string()))?;
    Ok(tmpfile)
}

fn run(tool: &'static str, cmd: &mut Command) -> Result<Output, TakeoffError> {
    let output = cmd.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TakeoffError::PdftotextNotFound
        } else {
            TakeoffError::Extraction(format!("{} failed: {}", tool, e))
        }
    })?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        return Err(TakeoffError::PdftotextFailed { tool, code, stderr });
    }

    Ok(output)
}

/// Read the `Pages:` line of pdfinfo output.
fn parse_page_count(info: &str) -> Option<usize> {
    info.lines().find_map(|line| {
        let rest = line.strip_prefix("Pages:")?;
        rest.trim().parse().ok()
    })
}
