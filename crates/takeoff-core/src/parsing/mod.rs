pub mod dimensions;
pub mod fields;

use crate::error::TakeoffError;
use crate::extraction::PageContent;
use crate::model::{CandidateRecord, RawLine};
use crate::profile::schema::ProfileDef;
use dimensions::DimensionExtractor;
use fields::{CodeExtractor, FieldExtractor, ModelExtractor, MountingExtractor, RunLengthExtractor};

/// Turns single lines of drawing text into candidate equipment records.
pub struct LineInterpreter {
    extractors: Vec<Box<dyn FieldExtractor>>,
}

impl LineInterpreter {
    /// Build the standard extractor set for a profile.
    pub fn from_profile(profile: &ProfileDef) -> Result<Self, TakeoffError> {
        let extractors: Vec<Box<dyn FieldExtractor>> = vec![
            Box::new(MountingExtractor::new(&profile.mounting)),
            Box::new(CodeExtractor::new(profile.codes())?),
            Box::new(ModelExtractor),
            Box::new(RunLengthExtractor),
            Box::new(DimensionExtractor),
        ];
        Ok(Self::with_extractors(extractors))
    }

    pub fn with_extractors(extractors: Vec<Box<dyn FieldExtractor>>) -> Self {
        LineInterpreter { extractors }
    }

    pub fn extractor_names(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    /// Run every extractor over `text`.
    ///
    /// Returns None unless the line carries an equipment code or a model
    /// number. Mounting, dimensions and run length alone never make a record.
    pub fn interpret_line(&self, text: &str, page: usize) -> Option<CandidateRecord> {
        let mut record = CandidateRecord::new(page);
        for extractor in &self.extractors {
            if let Some(field) = extractor.extract(text) {
                field.apply_to(&mut record);
            }
        }

        if record.is_equipment() {
            Some(record)
        } else {
            None
        }
    }

    pub fn interpret(&self, line: &RawLine) -> Option<CandidateRecord> {
        self.interpret_line(&line.text, line.page)
    }

    /// Interpret pages in the order given, lines in text order.
    pub fn interpret_pages(&self, pages: &[PageContent]) -> Vec<CandidateRecord> {
        let mut records = Vec::new();
        for page in pages {
            let before = records.len();
            records.extend(page.raw_lines().filter_map(|line| self.interpret(&line)));
            tracing::debug!(
                page = page.page_number,
                lines = page.lines.len(),
                candidates = records.len() - before,
                "Interpreted page"
            );
        }
        records
    }
}
