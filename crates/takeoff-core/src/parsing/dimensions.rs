use crate::parsing::fields::{Field, FieldExtractor};
use regex::Regex;
use std::sync::LazyLock;

/// Feet-inches (`10'-6"`, `3' - 4 1/2"`), bare inches (`24"`) or diameter (`6 ø`).
static DIMENSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\d+'\s*-\s*\d+\s*\d*/?\d*"|\d+"|\d+\s*ø"#).expect("Invalid dimension pattern")
});

/// Collects every dimension on a line.
///
/// The first inch- or diameter-marked match becomes `size`. When the line has
/// more than one match, every match after the first is kept in `extra`,
/// joined with `"; "`. This can repeat `size` in `extra` when the promoted
/// match is not the first one.
pub struct DimensionExtractor;

impl FieldExtractor for DimensionExtractor {
    fn name(&self) -> &'static str {
        "dimensions"
    }

    fn extract(&self, line: &str) -> Option<Field> {
        let dims: Vec<&str> = DIMENSION_RE.find_iter(line).map(|m| m.as_str()).collect();
        if dims.is_empty() {
            return None;
        }
        let (size, extra) = split_dimensions(&dims);
        Some(Field::Dimensions { size, extra })
    }
}

/// Pick the representative diameter and the free-text remainder.
fn split_dimensions(dims: &[&str]) -> (Option<String>, Option<String>) {
    let size = dims
        .iter()
        .find(|d| is_diameter(d))
        .map(|d| d.trim().to_string());

    let extra = if dims.len() > 1 {
        Some(dims[1..].join("; ").trim().to_string())
    } else {
        None
    };

    (size, extra)
}

fn is_diameter(d: &str) -> bool {
    d.contains('"') || d.contains('ø')
}
