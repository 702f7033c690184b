//! Serialization of pipeline results to JSON and CSV.

use crate::error::TakeoffError;
use crate::model::{CandidateRecord, OutputRecord, OUTPUT_COLUMNS};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Pretty JSON array, one object per record with the six schema keys.
pub fn to_json(records: &[OutputRecord]) -> Result<String, TakeoffError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Pretty JSON array of tidied candidate records (absent fields omitted).
pub fn candidates_to_json(records: &[CandidateRecord]) -> Result<String, TakeoffError> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub fn records_to_csv(records: &[OutputRecord]) -> Result<String, TakeoffError> {
    to_csv(records)
}

pub fn candidates_to_csv(records: &[CandidateRecord]) -> Result<String, TakeoffError> {
    to_csv(records)
}

/// Flatten any serializable records into CSV.
///
/// The header is the union of keys across all records: the output schema
/// columns first, in schema order, then every other key sorted. A record
/// that lacks a key gets an empty cell.
pub fn to_csv<T: Serialize>(records: &[T]) -> Result<String, TakeoffError> {
    let rows = records
        .iter()
        .map(to_row)
        .collect::<Result<Vec<_>, TakeoffError>>()?;

    let headers = csv_headers(&rows);

    let mut out = String::new();
    push_row(&mut out, headers.iter().map(|h| csv_escape(h)));
    for row in &rows {
        push_row(
            &mut out,
            headers
                .iter()
                .map(|h| row.get(h).map(cell_text).unwrap_or_default())
                .map(|cell| csv_escape(&cell)),
        );
    }
    Ok(out)
}

fn to_row<T: Serialize>(record: &T) -> Result<Map<String, Value>, TakeoffError> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(map),
        other => Err(TakeoffError::Export(format!(
            "cannot export non-object record as CSV: {other}"
        ))),
    }
}

fn csv_headers(rows: &[Map<String, Value>]) -> Vec<String> {
    let discovered: BTreeSet<&str> = rows
        .iter()
        .flat_map(|r| r.keys().map(|k| k.as_str()))
        .collect();

    let mut headers: Vec<String> = OUTPUT_COLUMNS
        .iter()
        .filter(|c| discovered.contains(**c))
        .map(|c| c.to_string())
        .collect();
    headers.extend(
        discovered
            .into_iter()
            .filter(|k| !OUTPUT_COLUMNS.contains(k))
            .map(String::from),
    );
    headers
}

fn push_row(out: &mut String, cells: impl Iterator<Item = String>) {
    let cells: Vec<String> = cells.collect();
    out.push_str(&cells.join(","));
    out.push('\n');
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Quote a CSV field if it contains a comma, a quote or a line break.
pub fn csv_escape(text: &str) -> String {
    if text.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}
