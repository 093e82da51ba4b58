//! Core data types shared across collection, rendering and composition.

pub mod config;
pub mod report;
pub mod run;

pub use config::Config;
pub use report::{
    AssertionResult, AssertionStatus, CoverageMetric, FileCoverage, JsonReport, MetricCounts,
    TestFileResult,
};
pub use run::{
    CollectionError, ComposedReport, FailureDetail, Options, ReportKind, RunData, RunSummary,
    TestRunReport, ThresholdResult,
};

/// Hosting platform limit on a single comment body, in characters.
pub const GITHUB_MESSAGE_SIZE_LIMIT: usize = 65_535;
