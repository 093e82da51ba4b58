//! Structured test/coverage report as produced by the test runner.
//!
//! Field names follow the runner's camelCase JSON output so the file can be
//! deserialized without a mapping layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One complete test run: outcome flags, per-file assertions and coverage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsonReport {
    pub success: bool,
    pub num_total_test_suites: u32,
    pub num_passed_test_suites: u32,
    pub num_failed_test_suites: u32,
    pub num_total_tests: u32,
    pub num_passed_tests: u32,
    pub num_failed_tests: u32,
    pub num_pending_tests: u32,
    pub num_todo_tests: u32,
    /// Epoch milliseconds at which the run started.
    pub start_time: u64,
    pub test_results: Vec<TestFileResult>,
    /// Per-file coverage keyed by path; the map keeps paths sorted.
    pub coverage_summary: BTreeMap<String, FileCoverage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestFileResult {
    pub name: String,
    pub start_time: u64,
    pub end_time: u64,
    pub message: String,
    pub assertion_results: Vec<AssertionResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssertionResult {
    pub full_name: String,
    pub title: String,
    pub status: AssertionStatus,
    pub duration: Option<u64>,
    pub failure_messages: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssertionStatus {
    #[default]
    Passed,
    Failed,
    Pending,
    Skipped,
    Todo,
    Disabled,
}

/// Covered/total counters for a single metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricCounts {
    pub total: u64,
    pub covered: u64,
}

impl MetricCounts {
    pub fn new(total: u64, covered: u64) -> Self {
        Self { total, covered }
    }

    /// Percentage covered. An empty metric counts as fully covered.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.covered as f64 * 100.0 / self.total as f64
        }
    }

    pub fn add(&mut self, other: MetricCounts) {
        self.total += other.total;
        self.covered += other.covered;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCoverage {
    pub statements: MetricCounts,
    pub branches: MetricCounts,
    pub functions: MetricCounts,
    pub lines: MetricCounts,
}

impl FileCoverage {
    pub fn metric(&self, metric: CoverageMetric) -> MetricCounts {
        match metric {
            CoverageMetric::Statements => self.statements,
            CoverageMetric::Branches => self.branches,
            CoverageMetric::Functions => self.functions,
            CoverageMetric::Lines => self.lines,
        }
    }

    pub fn add(&mut self, other: &FileCoverage) {
        self.statements.add(other.statements);
        self.branches.add(other.branches);
        self.functions.add(other.functions);
        self.lines.add(other.lines);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageMetric {
    Statements,
    Branches,
    Functions,
    Lines,
}

impl CoverageMetric {
    pub const ALL: [CoverageMetric; 4] = [
        CoverageMetric::Statements,
        CoverageMetric::Branches,
        CoverageMetric::Functions,
        CoverageMetric::Lines,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CoverageMetric::Statements => "Statements",
            CoverageMetric::Branches => "Branches",
            CoverageMetric::Functions => "Functions",
            CoverageMetric::Lines => "Lines",
        }
    }
}

impl fmt::Display for CoverageMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_ascii_lowercase())
    }
}

impl JsonReport {
    /// Coverage summed over every file in the report.
    pub fn total_coverage(&self) -> FileCoverage {
        let mut total = FileCoverage::default();
        for file in self.coverage_summary.values() {
            total.add(file);
        }
        total
    }
}
