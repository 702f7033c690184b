use takeoff_core::model::{CandidateRecord, ExtractionReport, OUTPUT_COLUMNS};

pub fn print(report: &ExtractionReport, raw: bool) {
    if raw {
        println!("{}", format_candidates(&report.candidates));
    } else {
        let rows: Vec<Vec<String>> = report
            .records
            .iter()
            .map(|r| r.values().iter().map(|v| v.to_string()).collect())
            .collect();
        println!("{}", format_table(&OUTPUT_COLUMNS, &rows));
    }

    let stats = &report.stats;
    println!(
        "\n  {} record(s) from {} page(s), {} line(s) scanned",
        stats.records, stats.pages_processed, stats.lines_scanned
    );
    if stats.dropped_by_tidy > 0 || stats.dropped_by_projection > 0 {
        println!(
            "  {} candidate(s) dropped as noise, {} with nothing to report",
            stats.dropped_by_tidy, stats.dropped_by_projection
        );
    }
}

fn format_candidates(records: &[CandidateRecord]) -> String {
    let headers = [
        "Page",
        "Code",
        "Description",
        "Model",
        "Run",
        "Size",
        "Extra",
        "Mounting",
    ];
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.page.to_string(),
                cell(&r.code),
                cell(&r.description),
                cell(&r.model),
                cell(&r.run_len),
                cell(&r.size),
                cell(&r.extra_dims),
                cell(&r.mounting),
            ]
        })
        .collect();
    format_table(&headers, &rows)
}

fn cell(field: &Option<String>) -> String {
    field.clone().unwrap_or_default()
}

/// Left-aligned columns sized to their widest cell.
fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, c) in widths.iter_mut().zip(row) {
            *w = (*w).max(c.chars().count());
        }
    }

    let mut out = String::new();
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    push_line(&mut out, &header_cells, &widths);

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);

    for row in rows {
        push_line(&mut out, row, &widths);
    }

    if rows.is_empty() {
        out.push_str("  (no equipment records found)\n");
    }

    // drop the final newline, println! adds one
    out.pop();
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(c, w)| format!("{:<width$}", c, width = w))
        .collect();
    out.push_str("  ");
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}
