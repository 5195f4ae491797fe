//! Report rendering
//!
//! Two plain-text tables on stdout: total occurrences per concept, then a
//! per-document breakdown with documents as rows and concepts as columns.
//! Zero counts render as `-` so non-zero cells stand out. `--format json`
//! emits the full report plus derived totals instead.

use anyhow::Result;
use concept_engine::AnalysisReport;
use std::path::Path;

/// Render the aggregate totals table.
pub fn render_summary(report: &AnalysisReport) -> String {
    let headers = vec!["Concept".to_string(), "Total".to_string()];
    let rows: Vec<Vec<String>> = report
        .totals()
        .into_iter()
        .map(|(concept, total)| vec![concept, total.to_string()])
        .collect();

    let mut out = String::from("Concept Frequency Analysis\n");
    out.push_str(&render_table(&headers, &rows));
    out
}

/// Render the per-document breakdown table.
pub fn render_breakdown(report: &AnalysisReport) -> String {
    let mut headers = vec!["File".to_string()];
    headers.extend(report.concepts.iter().cloned());

    let rows: Vec<Vec<String>> = report
        .documents
        .iter()
        .map(|doc| {
            let mut row = vec![file_name(&doc.path)];
            for concept in &report.concepts {
                row.push(render_count(doc.count_for(concept)));
            }
            row
        })
        .collect();

    let mut out = String::from("Analysis by File\n");
    out.push_str(&render_table(&headers, &rows));
    out
}

/// Render the report as JSON, totals included.
pub fn render_json(report: &AnalysisReport, case_sensitive: bool) -> Result<String> {
    let totals: serde_json::Map<String, serde_json::Value> = report
        .totals()
        .into_iter()
        .map(|(concept, total)| (concept, serde_json::Value::from(total)))
        .collect();

    let value = serde_json::json!({
        "generated_at": report.generated_at,
        "case_sensitive": case_sensitive,
        "concepts": report.concepts,
        "documents": report.documents,
        "totals": totals,
    });

    Ok(serde_json::to_string_pretty(&value)?)
}

fn render_count(count: usize) -> String {
    if count == 0 {
        "-".to_string()
    } else {
        count.to_string()
    }
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// Aligned text table: first column left-aligned, the rest right-aligned,
/// widths computed from content.
fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    render_row(&mut out, headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    render_row(&mut out, &rule, &widths);
    for row in rows {
        render_row(&mut out, row, &widths);
    }
    out
}

fn render_row(out: &mut String, cells: &[String], widths: &[usize]) {
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        let pad = width.saturating_sub(cell.chars().count());
        if i == 0 {
            out.push_str(cell);
            out.push_str(&" ".repeat(pad));
        } else {
            out.push_str(&" ".repeat(pad));
            out.push_str(cell);
        }
    }
    // Trailing spaces from left-aligned single-column rows are unwanted.
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}
