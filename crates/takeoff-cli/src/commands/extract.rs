use clap::Args;
use std::path::{Path, PathBuf};
use takeoff_core::error::TakeoffError;
use takeoff_core::export;
use takeoff_core::extraction::pdftotext::PdftotextExtractor;
use takeoff_core::extraction::plain_text::PlainTextExtractor;
use takeoff_core::model::ExtractionReport;
use takeoff_core::profile::builtin;
use takeoff_core::profile::schema::ProfileDef;
use takeoff_core::ExtractOptions;

use crate::output;

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Path to a drawing PDF, or a .txt file of pdftotext output
    pub input_file: PathBuf,

    /// First page to extract (1-based, default: first page)
    #[arg(short, long, value_name = "PAGE")]
    pub start: Option<usize>,

    /// Last page to extract, inclusive (default: last page)
    #[arg(short, long, value_name = "PAGE")]
    pub end: Option<usize>,

    /// Output format: table (default), json or csv
    #[arg(short, long, default_value = "table")]
    pub output: String,

    /// Write results to a file (.csv writes CSV, anything else JSON)
    #[arg(short = 'O', long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Custom JSON profile file
    #[arg(short, long, value_name = "FILE", conflicts_with = "preset")]
    pub profile: Option<PathBuf>,

    /// Predefined profile (default: mechanical)
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Emit the tidied intermediate records instead of the output schema
    #[arg(long)]
    pub raw: bool,

    /// Keep column layout when extracting PDF text
    #[arg(long)]
    pub layout: bool,
}

pub fn run(args: ExtractArgs) -> Result<(), TakeoffError> {
    let profile = load_profile(&args)?;
    tracing::debug!(
        profile = %profile.name,
        codes = profile.equipment.len(),
        input = %args.input_file.display(),
        "Loaded profile"
    );
    let options = ExtractOptions {
        start_page: args.start,
        end_page: args.end,
    };

    let text_input = is_text_input(&args.input_file);
    if !text_input {
        require_pdftotext(PdftotextExtractor::is_available())?;
    }

    let bytes = std::fs::read(&args.input_file)?;
    let report = if text_input {
        takeoff_core::extract_pdf(&bytes, &PlainTextExtractor::new(), &profile, &options)?
    } else {
        let extractor = PdftotextExtractor::new().with_layout(args.layout);
        takeoff_core::extract_pdf(&bytes, &extractor, &profile, &options)?
    };

    match args.out {
        Some(path) => {
            let contents = if is_csv_path(&path) {
                render_csv(&report, args.raw)?
            } else {
                output::json::render(&report, args.raw)?
            };
            std::fs::write(&path, contents)?;
            eprintln!(
                "Extracted {} record(s) from {} page(s), written to {}",
                report.records.len(),
                report.stats.pages_processed,
                path.display()
            );
            if report.stats.unknown_codes > 0 {
                eprintln!(
                    "  warning: {} code(s) had no description in profile '{}'",
                    report.stats.unknown_codes, profile.name
                );
            }
        }
        None => match args.output.as_str() {
            "json" => output::json::print(&report, args.raw)?,
            "csv" => print!("{}", render_csv(&report, args.raw)?),
            _ => output::table::print(&report, args.raw),
        },
    }

    Ok(())
}

fn load_profile(args: &ExtractArgs) -> Result<ProfileDef, TakeoffError> {
    match (&args.profile, &args.preset) {
        (Some(path), _) => takeoff_core::profile::load_profile(path),
        (None, Some(name)) => builtin::load_preset(name),
        (None, None) => builtin::load_preset(builtin::DEFAULT_PRESET),
    }
}

fn render_csv(report: &ExtractionReport, raw: bool) -> Result<String, TakeoffError> {
    if raw {
        export::candidates_to_csv(&report.candidates)
    } else {
        export::records_to_csv(&report.records)
    }
}

fn require_pdftotext(available: bool) -> Result<(), TakeoffError> {
    if available {
        Ok(())
    } else {
        Err(TakeoffError::PdftotextNotFound)
    }
}

fn is_text_input(path: &Path) -> bool {
    has_extension(path, "txt")
}

fn is_csv_path(path: &Path) -> bool {
    has_extension(path, "csv")
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}
