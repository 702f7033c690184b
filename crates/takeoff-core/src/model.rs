use serde::{Deserialize, Serialize};

/// A single line of page text, tagged with the 1-based page it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub page: usize,
    pub text: String,
}

/// An equipment line as seen by the line interpreter.
///
/// Only `page` is always present. Every other field is set only when its
/// extractor matched, and is left out of the serialized form otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub page: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mounting: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_len: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_dims: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CandidateRecord {
    pub fn new(page: usize) -> Self {
        CandidateRecord {
            page,
            ..Default::default()
        }
    }

    /// Number of populated fields, counting `page`.
    pub fn field_count(&self) -> usize {
        1 + [
            &self.mounting,
            &self.code,
            &self.model,
            &self.run_len,
            &self.size,
            &self.extra_dims,
            &self.description,
        ]
        .iter()
        .filter(|f| f.is_some())
        .count()
    }

    /// Whether the line carries a structural equipment signal.
    pub fn is_equipment(&self) -> bool {
        self.code.is_some() || self.model.is_some()
    }
}

/// Column names of the output schema, in display order.
pub const OUTPUT_COLUMNS: [&str; 6] = [
    "Item/Fixture Type",
    "Quantity",
    "Model Number / Spec Reference",
    "Page Reference",
    "Associated Dimensions",
    "Mounting Type",
];

/// The final, fixed-schema record handed to presentation and export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    #[serde(rename = "Item/Fixture Type")]
    pub item_type: String,
    #[serde(rename = "Quantity")]
    pub quantity: String,
    #[serde(rename = "Model Number / Spec Reference")]
    pub spec_reference: String,
    #[serde(rename = "Page Reference")]
    pub page_reference: String,
    #[serde(rename = "Associated Dimensions")]
    pub associated_dimensions: String,
    #[serde(rename = "Mounting Type")]
    pub mounting_type: String,
}

impl OutputRecord {
    /// Field values in `OUTPUT_COLUMNS` order.
    pub fn values(&self) -> [&str; 6] {
        [
            &self.item_type,
            &self.quantity,
            &self.spec_reference,
            &self.page_reference,
            &self.associated_dimensions,
            &self.mounting_type,
        ]
    }
}

/// Per-stage counters collected by the pipeline driver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStats {
    pub pages_processed: usize,
    pub lines_scanned: usize,
    pub candidates: usize,
    pub dropped_by_tidy: usize,
    /// Codes that had no description and fell back to the raw code.
    pub unknown_codes: usize,
    pub dropped_by_projection: usize,
    pub records: usize,
}

/// Everything a pipeline run produces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub records: Vec<OutputRecord>,
    /// Tidied intermediate records, before projection.
    pub candidates: Vec<CandidateRecord>,
    pub stats: PipelineStats,
}
