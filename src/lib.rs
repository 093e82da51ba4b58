//! coverage-report: Compose test and coverage summaries into pull-request comments
//!
//! Renders independent Markdown fragments (collection errors, threshold
//! results, coverage, run report) into a single comment document that stays
//! within the hosting platform's size limit.

pub mod analysis;
pub mod cli;
pub mod collect;
pub mod compose;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod render;

pub use compose::{CommitContext, ReportComposer};
pub use domain::{ComposedReport, Options, RunData, TestRunReport, ThresholdResult};
pub use error::ReportError;
