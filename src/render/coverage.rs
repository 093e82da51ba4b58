//! Coverage fragment: totals table plus optional per-file breakdown.

use crate::domain::{CoverageMetric, FileCoverage, JsonReport};
use crate::i18n::{Localizer, MessageKey};

pub const DEFAULT_PRECISION: usize = 2;

/// How much of the coverage table to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageDetail {
    /// Totals and one row per file.
    Full,
    /// Totals only; used when the full document is over the size limit.
    Reduced,
}

pub fn format_coverage(
    head: &JsonReport,
    base: Option<&JsonReport>,
    precision: Option<usize>,
    detail: CoverageDetail,
    localizer: &dyn Localizer,
) -> String {
    let precision = precision.unwrap_or(DEFAULT_PRECISION);
    let base_total = base.map(JsonReport::total_coverage);

    let mut out = String::new();
    out.push_str(&format!("### {}\n\n", localizer.text(MessageKey::CoverageHeading)));
    out.push_str(&header_row(None));
    out.push_str(&separator_row(CoverageMetric::ALL.len()));
    out.push_str(&metric_row(None, &head.total_coverage(), base_total.as_ref(), precision));

    if detail == CoverageDetail::Full && !head.coverage_summary.is_empty() {
        out.push_str(&format!(
            "\n<details><summary>{}</summary>\n\n",
            localizer.text(MessageKey::CoverageDetailsSummary)
        ));
        out.push_str(&header_row(Some("File")));
        out.push_str(&separator_row(CoverageMetric::ALL.len() + 1));
        for (path, file) in &head.coverage_summary {
            let base_file = base.and_then(|b| b.coverage_summary.get(path));
            out.push_str(&metric_row(Some(path), file, base_file, precision));
        }
        out.push_str("\n</details>\n");
    }

    out
}

fn header_row(first: Option<&str>) -> String {
    let mut cells: Vec<&str> = first.into_iter().collect();
    cells.extend(CoverageMetric::ALL.iter().map(|metric| metric.label()));
    format!("| {} |\n", cells.join(" | "))
}

fn separator_row(columns: usize) -> String {
    format!("|{}\n", " --- |".repeat(columns))
}

fn metric_row(
    path: Option<&str>,
    head: &FileCoverage,
    base: Option<&FileCoverage>,
    precision: usize,
) -> String {
    let mut cells: Vec<String> = path.map(|p| format!("`{p}`")).into_iter().collect();
    for metric in CoverageMetric::ALL {
        let current = head.metric(metric).percent();
        let cell = match base {
            Some(base) => format!(
                "{} {}",
                format_percent(current, precision),
                format_delta(current - base.metric(metric).percent(), precision)
            ),
            None => format_percent(current, precision),
        };
        cells.push(cell);
    }
    format!("| {} |\n", cells.join(" | "))
}

fn format_percent(value: f64, precision: usize) -> String {
    format!("{value:.precision$}%")
}

fn format_delta(delta: f64, precision: usize) -> String {
    let magnitude = format!("{:.precision$}", delta.abs());
    if magnitude.parse::<f64>().map(|m| m == 0.0).unwrap_or(true) {
        "(+0% 🟰)".to_string()
    } else if delta > 0.0 {
        format!("(+{magnitude}% 🔼)")
    } else {
        format!("(-{magnitude}% 🔻)")
    }
}
