//! Formatting capability consumed by the composer.

use super::coverage::{format_coverage, CoverageDetail};
use super::errors::format_errors;
use super::run_report::{failure_details, format_run_report, test_run_summary};
use super::thresholds::format_threshold_results;
use crate::domain::{
    CollectionError, FailureDetail, JsonReport, RunSummary, TestRunReport, ThresholdResult,
};
use crate::i18n::{EnglishLocalizer, Localizer};

/// Turns report data into independent text fragments.
///
/// The composer only depends on this trait, so tests can swap in fixed
/// fragments.
pub trait SectionFormatter {
    fn format_errors(&self, errors: &[CollectionError]) -> String;

    fn format_threshold_results(&self, results: &[ThresholdResult]) -> String;

    fn format_coverage(
        &self,
        head: &JsonReport,
        base: Option<&JsonReport>,
        precision: Option<usize>,
        detail: CoverageDetail,
    ) -> String;

    fn test_run_summary(&self, head: &JsonReport) -> RunSummary;

    fn failure_details(&self, head: &JsonReport) -> Vec<FailureDetail>;

    fn format_run_report(&self, report: &TestRunReport) -> String;
}

/// GitHub-flavored Markdown fragments.
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormatter<L = EnglishLocalizer> {
    localizer: L,
}

impl<L: Localizer> MarkdownFormatter<L> {
    pub fn new(localizer: L) -> Self {
        Self { localizer }
    }
}

impl<L: Localizer> SectionFormatter for MarkdownFormatter<L> {
    fn format_errors(&self, errors: &[CollectionError]) -> String {
        format_errors(errors)
    }

    fn format_threshold_results(&self, results: &[ThresholdResult]) -> String {
        format_threshold_results(results, &self.localizer)
    }

    fn format_coverage(
        &self,
        head: &JsonReport,
        base: Option<&JsonReport>,
        precision: Option<usize>,
        detail: CoverageDetail,
    ) -> String {
        format_coverage(head, base, precision, detail, &self.localizer)
    }

    fn test_run_summary(&self, head: &JsonReport) -> RunSummary {
        test_run_summary(head)
    }

    fn failure_details(&self, head: &JsonReport) -> Vec<FailureDetail> {
        failure_details(head)
    }

    fn format_run_report(&self, report: &TestRunReport) -> String {
        format_run_report(report, &self.localizer)
    }
}
