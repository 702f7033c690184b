//! Integration tests for the extract_pdf() end-to-end pipeline.
//!
//! Uses a MockExtractor that returns pre-built PageContent without
//! invoking pdftotext, so these tests run without poppler-utils.

use takeoff_core::error::TakeoffError;
use takeoff_core::extraction::plain_text::PlainTextExtractor;
use takeoff_core::extraction::{PageContent, PdfExtractor};
use takeoff_core::model::OutputRecord;
use takeoff_core::profile::builtin::load_preset;
use takeoff_core::profile::parse_profile_str;
use takeoff_core::profile::schema::ProfileDef;
use takeoff_core::export::records_to_csv;
use takeoff_core::{extract_lines, extract_pdf, ExtractOptions};

struct MockExtractor {
    pages: Vec<PageContent>,
}

impl PdfExtractor for MockExtractor {
    fn page_count(&self, _pdf_bytes: &[u8]) -> Result<usize, TakeoffError> {
        Ok(self.pages.len())
    }

    fn extract_page(
        &self,
        _pdf_bytes: &[u8],
        page_number: usize,
    ) -> Result<PageContent, TakeoffError> {
        self.pages
            .iter()
            .find(|p| p.page_number == page_number)
            .cloned()
            .ok_or_else(|| TakeoffError::Extraction(format!("no page {page_number}")))
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

fn page(number: usize, lines: &[&str]) -> PageContent {
    PageContent {
        page_number: number,
        lines: lines.iter().map(|s| s.to_string()).collect(),
    }
}

fn mechanical() -> ProfileDef {
    load_preset("mechanical").unwrap()
}

fn run(pages: Vec<PageContent>) -> Vec<OutputRecord> {
    extract_lines(&pages, &mechanical()).unwrap().records
}

// ---------------------------------------------------------------------------
// Test 1: Fan-coil line with mounting, model and run length fills every column
// ---------------------------------------------------------------------------
#[test]
fn fan_coil_line_projects_every_column() {
    let report = extract_lines(
        &[page(3, &[r#"FCU-12 wall-hung BE = 10'-6""#])],
        &mechanical(),
    )
    .unwrap();

    assert_eq!(report.candidates.len(), 1);
    let c = &report.candidates[0];
    assert_eq!(c.code.as_deref(), Some("FCU"));
    assert_eq!(c.model.as_deref(), Some("FCU12"));
    assert_eq!(c.mounting.as_deref(), Some("wall-hung"));
    assert_eq!(c.run_len.as_deref(), Some(r#"10'-6""#));
    assert_eq!(c.page, 3);

    assert_eq!(
        report.records,
        vec![OutputRecord {
            item_type: "Fan-Coil Unit".into(),
            quantity: r#"10'-6""#.into(),
            spec_reference: "FCU".into(),
            page_reference: "3".into(),
            associated_dimensions: "".into(),
            mounting_type: "wall-hung".into(),
        }]
    );
}

// ---------------------------------------------------------------------------
// Test 2: Bare mentions of a weak code (B) are dropped
// ---------------------------------------------------------------------------
#[test]
fn bare_boiler_mentions_are_dropped() {
    let report = extract_lines(
        &[page(1, &["Boiler room access", "See B for access", "AS"])],
        &mechanical(),
    )
    .unwrap();

    assert!(report.records.is_empty());
    // "Boiler" is not a whole-word "B"; the other two reach the tidier.
    assert_eq!(report.stats.candidates, 2);
    assert_eq!(report.stats.dropped_by_tidy, 2);
}

// ---------------------------------------------------------------------------
// Test 3: Line with only a dimension yields no record
// ---------------------------------------------------------------------------
#[test]
fn dimension_only_line_contributes_nothing() {
    let report = extract_lines(&[page(1, &[r#"12" typical"#])], &mechanical()).unwrap();
    assert_eq!(report.stats.candidates, 0);
    assert!(report.records.is_empty());
}

// ---------------------------------------------------------------------------
// Test 4: Second dimension on a line lands in associated_dimensions
// ---------------------------------------------------------------------------
#[test]
fn second_dimension_goes_to_associated_dimensions() {
    let report = extract_lines(&[page(2, &[r#"HX 24" , 6 ø"#])], &mechanical()).unwrap();

    let c = &report.candidates[0];
    assert_eq!(c.size.as_deref(), Some(r#"24""#));
    assert_eq!(c.extra_dims.as_deref(), Some("6 ø"));

    let r = &report.records[0];
    assert_eq!(r.item_type, "Heat Exchanger");
    assert_eq!(r.associated_dimensions, "6 ø");
    assert_eq!(r.page_reference, "2");
}

// ---------------------------------------------------------------------------
// Test 5: Records keep page and line order, runs are deterministic
// ---------------------------------------------------------------------------
#[test]
fn output_keeps_page_then_line_order() {
    let pages = vec![
        page(1, &["CHWP-1 floor-mounted", "general notes", "ET-1"]),
        page(2, &["VAV-7 above ceiling", "MAU-1"]),
    ];
    let refs: Vec<(String, String)> = run(pages)
        .into_iter()
        .map(|r| (r.page_reference, r.spec_reference))
        .collect();
    assert_eq!(
        refs,
        vec![
            ("1".to_string(), "CHWP".to_string()),
            ("1".to_string(), "ET".to_string()),
            ("2".to_string(), "VAV".to_string()),
            ("2".to_string(), "MAU".to_string()),
        ]
    );
}

#[test]
fn repeated_runs_are_identical() {
    let pages = vec![page(
        1,
        &[
            r#"2" HHWS BE = 24'-0""#,
            "BCP-2 floor-mounted",
            r#"CFS 6" , 2 ø"#,
        ],
    )];
    let first = run(pages.clone());
    let second = run(pages);
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

// ---------------------------------------------------------------------------
// Test 6: Every record carries the six output columns
// ---------------------------------------------------------------------------
#[test]
fn no_record_is_empty_or_page_only() {
    let pages = vec![page(
        1,
        &[
            "AHU-3",
            "AHU-4 wall-hung",
            "B",
            "B floor-mounted",
            r#"BE = 3'-0""#,
            "CWS CWR",
            "",
        ],
    )];
    for r in run(pages) {
        let values = [
            &r.item_type,
            &r.quantity,
            &r.spec_reference,
            &r.associated_dimensions,
            &r.mounting_type,
        ];
        assert!(
            values.iter().any(|v| !v.is_empty()),
            "record carries only a page: {r:?}"
        );
    }
}

#[test]
fn known_codes_always_get_their_description() {
    let profile = mechanical();
    let lines: Vec<String> = profile
        .equipment
        .iter()
        .map(|e| format!("{}-1 floor-mounted", e.code))
        .collect();
    let line_refs: Vec<&str> = lines.iter().map(|s| s.as_str()).collect();

    let report = extract_lines(&[page(1, &line_refs)], &profile).unwrap();
    assert_eq!(report.records.len(), profile.equipment.len());
    assert_eq!(report.stats.unknown_codes, 0);
    for r in &report.records {
        assert_eq!(
            Some(r.item_type.as_str()),
            profile.description_for(&r.spec_reference)
        );
    }
}

#[test]
fn mounting_priority_follows_profile_order() {
    let records = run(vec![page(1, &["FCU-1 above ceiling or wall-hung"])]);
    assert_eq!(records[0].mounting_type, "wall-hung");
}

#[test]
fn first_code_on_line_wins() {
    let records = run(vec![page(1, &["HHWR from HX-1"])]);
    assert_eq!(records[0].spec_reference, "HHWR");
    assert_eq!(records[0].item_type, "Heating Hot Water Return");
}

// ---------------------------------------------------------------------------
// Test 7: A custom profile drives codes and mounting terms
// ---------------------------------------------------------------------------
#[test]
fn custom_profile_drives_vocabulary() {
    let profile = parse_profile_str(
        r#"{
            "name": "Plumbing",
            "version": "1",
            "equipment": [
                { "code": "WH", "description": "Water Heater" },
                { "code": "FD", "description": "Floor Drain", "weak": true }
            ],
            "mounting": ["recessed", "surface"]
        }"#,
    )
    .unwrap();

    let report = extract_lines(
        &[page(1, &["WH-2 surface", "FD", "FCU-1 wall-hung"])],
        &profile,
    )
    .unwrap();

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].item_type, "Water Heater");
    assert_eq!(report.records[0].mounting_type, "surface");
    // FCU-1 still has a model number but no code or mounting in this profile.
    assert_eq!(report.stats.candidates, 3);
    assert_eq!(report.stats.dropped_by_tidy, 1);
    assert_eq!(report.stats.dropped_by_projection, 1);
}

// ---------------------------------------------------------------------------
// Test 8: extract_pdf honours page ranges and skips failing pages
// ---------------------------------------------------------------------------
#[test]
fn extract_pdf_reads_whole_document_by_default() {
    let extractor = MockExtractor {
        pages: vec![page(1, &["ET-1"]), page(2, &["HX-1"]), page(3, &["CWP-2"])],
    };
    let report = extract_pdf(&[], &extractor, &mechanical(), &ExtractOptions::default()).unwrap();
    assert_eq!(report.stats.pages_processed, 3);
    assert_eq!(report.records.len(), 3);
}

#[test]
fn extract_pdf_respects_page_range() {
    let extractor = MockExtractor {
        pages: vec![page(1, &["ET-1"]), page(2, &["HX-1"]), page(3, &["CWP-2"])],
    };
    let options = ExtractOptions {
        start_page: Some(2),
        end_page: Some(2),
    };
    let report = extract_pdf(&[], &extractor, &mechanical(), &options).unwrap();
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].spec_reference, "HX");
    assert_eq!(report.records[0].page_reference, "2");
}

#[test]
fn extract_pdf_rejects_inverted_range() {
    let extractor = MockExtractor {
        pages: vec![page(1, &["ET-1"]), page(2, &["HX-1"])],
    };
    let options = ExtractOptions {
        start_page: Some(2),
        end_page: Some(1),
    };
    let err = extract_pdf(&[], &extractor, &mechanical(), &options).unwrap_err();
    assert!(matches!(err, TakeoffError::InvalidPageRange(_)));
}

#[test]
fn extract_pdf_rejects_range_past_document() {
    let extractor = MockExtractor {
        pages: vec![page(1, &["ET-1"])],
    };
    let options = ExtractOptions {
        start_page: None,
        end_page: Some(4),
    };
    assert!(matches!(
        extract_pdf(&[], &extractor, &mechanical(), &options),
        Err(TakeoffError::InvalidPageRange(_))
    ));
}

#[test]
fn missing_page_contributes_no_lines() {
    // Page 2 is missing from the mock, so its extraction fails.
    let extractor = MockExtractor {
        pages: vec![page(1, &["ET-1"]), page(3, &["HX-1"])],
    };
    let options = ExtractOptions {
        start_page: Some(1),
        end_page: Some(2),
    };
    // page_count() reports 2 pages for this mock.
    let report = extract_pdf(&[], &extractor, &mechanical(), &options).unwrap();
    assert_eq!(report.stats.pages_processed, 2);
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].spec_reference, "ET");
}

#[test]
fn plain_text_input_runs_the_same_pipeline() {
    let text = "FCU-12 wall-hung BE = 10'-6\"\nnotes\x0cHX 24\" , 6 ø\x0c";
    let report = extract_pdf(
        text.as_bytes(),
        &PlainTextExtractor::new(),
        &mechanical(),
        &ExtractOptions::default(),
    )
    .unwrap();
    assert_eq!(report.stats.pages_processed, 2);
    assert_eq!(report.stats.lines_scanned, 3);
    let refs: Vec<&str> = report
        .records
        .iter()
        .map(|r| r.page_reference.as_str())
        .collect();
    assert_eq!(refs, vec!["1", "2"]);
}

// ---------------------------------------------------------------------------
// Test 9: Carriage return inside a dimension cell is quoted in CSV
// ---------------------------------------------------------------------------
#[test]
fn carriage_return_in_extra_dimension_is_quoted_in_csv() {
    let records = run(vec![page(1, &["HX 24\" , 6\r\u{f8} wall-hung"])]);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].associated_dimensions, "6\r\u{f8}");

    let csv = records_to_csv(&records).unwrap();
    assert!(csv.contains("\"6\r\u{f8}\""));
    assert!(!csv.contains(",6\r\u{f8},"));
}
