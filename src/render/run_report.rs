//! Test run summary, failure extraction, and the run-report fragment.

use crate::domain::{AssertionStatus, FailureDetail, JsonReport, RunSummary, TestRunReport};
use crate::i18n::{Localizer, MessageKey};
use once_cell::sync::Lazy;
use regex::Regex;

static ANSI_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").expect("valid regex"));

pub fn test_run_summary(report: &JsonReport) -> RunSummary {
    let finished_at = report.test_results.iter().map(|r| r.end_time).max().unwrap_or(0);
    RunSummary {
        passed: report.num_passed_tests,
        failed: report.num_failed_tests,
        skipped: report.num_pending_tests,
        todo: report.num_todo_tests,
        total: report.num_total_tests,
        suites_total: report.num_total_test_suites,
        suites_failed: report.num_failed_test_suites,
        duration_ms: finished_at.saturating_sub(report.start_time),
    }
}

/// One record per failed assertion, plus one per suite that failed before
/// any assertion ran.
pub fn failure_details(report: &JsonReport) -> Vec<FailureDetail> {
    let mut failures = Vec::new();
    for file in &report.test_results {
        let failed: Vec<_> = file
            .assertion_results
            .iter()
            .filter(|a| a.status == AssertionStatus::Failed)
            .collect();

        if failed.is_empty() {
            if !file.message.trim().is_empty() {
                failures.push(FailureDetail {
                    file: file.name.clone(),
                    test: String::new(),
                    messages: vec![strip_ansi(&file.message)],
                });
            }
            continue;
        }

        for assertion in failed {
            let test =
                if assertion.full_name.is_empty() { &assertion.title } else { &assertion.full_name };
            failures.push(FailureDetail {
                file: file.name.clone(),
                test: test.clone(),
                messages: assertion.failure_messages.iter().map(|m| strip_ansi(m)).collect(),
            });
        }
    }
    failures
}

pub fn format_run_report(report: &TestRunReport, localizer: &dyn Localizer) -> String {
    let mut out = format!("### {}\n\n{}\n", report.title, summary_line(&report.summary));

    if report.failures.is_empty() {
        return out;
    }

    out.push_str(&format!(
        "\n<details><summary>{}</summary>\n\n",
        localizer.text(MessageKey::FailuresHeading)
    ));
    for failure in &report.failures {
        if failure.test.is_empty() {
            out.push_str(&format!("#### `{}`\n\n", failure.file));
        } else {
            out.push_str(&format!("#### `{}` › {}\n\n", failure.file, failure.test));
        }
        out.push_str("```\n");
        out.push_str(failure.messages.join("\n").trim_end());
        out.push_str("\n```\n\n");
    }
    out.push_str("</details>\n");
    out
}

fn summary_line(summary: &RunSummary) -> String {
    format!(
        "{} passed, {} failed, {} skipped, {} todo · {} total · {} suites ({} failed) · {:.2}s",
        summary.passed,
        summary.failed,
        summary.skipped,
        summary.todo,
        summary.total,
        summary.suites_total,
        summary.suites_failed,
        summary.duration_ms as f64 / 1000.0
    )
}

fn strip_ansi(text: &str) -> String {
    ANSI_ESCAPE.replace_all(text, "").into_owned()
}
