use takeoff_core::error::TakeoffError;
use takeoff_core::export;
use takeoff_core::model::ExtractionReport;

pub fn print(report: &ExtractionReport, raw: bool) -> Result<(), TakeoffError> {
    println!("{}", render(report, raw)?);
    Ok(())
}

/// Output records as pretty JSON, or the tidied candidates with `raw`.
pub fn render(report: &ExtractionReport, raw: bool) -> Result<String, TakeoffError> {
    if raw {
        export::candidates_to_json(&report.candidates)
    } else {
        export::to_json(&report.records)
    }
}
