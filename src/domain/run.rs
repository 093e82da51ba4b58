//! Values flowing into and out of report composition.

use super::report::{CoverageMetric, JsonReport};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Head report plus the optional baseline it is compared against.
///
/// Errors hit while gathering either report are carried along so they can be
/// shown in the document instead of aborting it.
#[derive(Debug, Clone, PartialEq)]
pub struct RunData {
    pub head: JsonReport,
    pub base: Option<JsonReport>,
    pub errors: Vec<CollectionError>,
}

impl RunData {
    pub fn new(head: JsonReport, base: Option<JsonReport>) -> Self {
        Self { head, base, errors: Vec::new() }
    }

    pub fn with_errors(mut self, errors: Vec<CollectionError>) -> Self {
        self.errors = errors;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("Failed to read {kind} report `{}`: {message}", .path.display())]
    Read { kind: ReportKind, path: PathBuf, message: String },

    #[error("Failed to parse {kind} report `{}`: {message}", .path.display())]
    Parse { kind: ReportKind, path: PathBuf, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Head,
    Base,
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportKind::Head => f.write_str("head"),
            ReportKind::Base => f.write_str("base"),
        }
    }
}

/// Outcome of one configured threshold rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdResult {
    /// Glob the rule was scoped to; `None` means the whole report.
    pub scope: Option<String>,
    pub metric: CoverageMetric,
    pub expected: f64,
    pub received: f64,
}

impl ThresholdResult {
    pub fn passed(&self) -> bool {
        self.received >= self.expected
    }
}

/// Invocation options that shape the document around the fragments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub working_directory: Option<String>,
    /// Title template; may reference `{dir}`.
    pub custom_title: Option<String>,
    /// Decimal places for percentages.
    pub precision: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
    pub todo: u32,
    pub total: u32,
    pub suites_total: u32,
    pub suites_failed: u32,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureDetail {
    pub file: String,
    pub test: String,
    pub messages: Vec<String>,
}

/// Structured summary handed back next to the rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestRunReport {
    pub title: String,
    pub summary: RunSummary,
    pub failures: Vec<FailureDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedReport {
    pub text: String,
    pub run_report: TestRunReport,
}
