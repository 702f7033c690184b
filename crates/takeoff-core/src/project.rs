use crate::model::{CandidateRecord, OutputRecord};

/// Map a tidied record onto the output schema.
///
/// Returns None for records that reduce to "appeared on page N", or to
/// nothing at all.
pub fn project_record(record: &CandidateRecord) -> Option<OutputRecord> {
    let out = OutputRecord {
        item_type: text(&record.description),
        quantity: text(&record.run_len),
        spec_reference: text(&record.code),
        page_reference: record.page.to_string(),
        associated_dimensions: text(&record.extra_dims),
        mounting_type: text(&record.mounting),
    };

    let values = out.values();
    let page_only = values
        .iter()
        .enumerate()
        .all(|(i, v)| i == PAGE_REFERENCE || v.is_empty())
        && !out.page_reference.is_empty();
    if page_only {
        return None;
    }

    if values.iter().all(|v| v.is_empty()) {
        return None;
    }

    Some(out)
}

/// Project every record, keeping encounter order.
pub fn project_records(records: &[CandidateRecord]) -> Vec<OutputRecord> {
    records.iter().filter_map(project_record).collect()
}

/// Position of "Page Reference" in `OutputRecord::values`.
const PAGE_REFERENCE: usize = 3;

fn text(field: &Option<String>) -> String {
    field.as_deref().unwrap_or("").trim().to_string()
}
