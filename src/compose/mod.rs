//! Report composition: fragments, template variables, and the size fallback.

pub mod sha;
pub mod tag;

pub use sha::{CommitContext, CommitSource};
pub use tag::report_tag;

use crate::domain::{
    ComposedReport, JsonReport, Options, RunData, TestRunReport, ThresholdResult,
    GITHUB_MESSAGE_SIZE_LIMIT,
};
use crate::i18n::{EnglishLocalizer, Localizer, MessageKey};
use crate::render::{insert_args, CoverageDetail, MarkdownFormatter, SectionFormatter, Template};
use std::collections::BTreeMap;
use tracing::{debug, info, trace, warn};

/// Assembles the comment document from injected formatters.
pub struct ReportComposer<F = MarkdownFormatter, L = EnglishLocalizer> {
    formatter: F,
    localizer: L,
    commit: CommitContext,
    template: Template,
    size_limit: usize,
}

impl ReportComposer {
    /// Markdown formatter, English strings, default template.
    pub fn markdown(commit: CommitContext) -> Self {
        Self::new(MarkdownFormatter::default(), EnglishLocalizer, commit)
    }
}

impl<F: SectionFormatter, L: Localizer> ReportComposer<F, L> {
    pub fn new(formatter: F, localizer: L, commit: CommitContext) -> Self {
        Self {
            formatter,
            localizer,
            commit,
            template: Template::default(),
            size_limit: GITHUB_MESSAGE_SIZE_LIMIT,
        }
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    pub fn with_size_limit(mut self, size_limit: usize) -> Self {
        self.size_limit = size_limit;
        self
    }

    /// Render the document.
    ///
    /// When the full rendering is longer than the size limit the coverage
    /// fragment is rendered once more in reduced detail. The reduced
    /// document is returned even if it is still too long.
    pub fn compose(
        &self,
        run_data: &RunData,
        options: &Options,
        threshold_results: &[ThresholdResult],
    ) -> ComposedReport {
        let RunData { head, base, errors } = run_data;
        debug!(errors = errors.len(), has_base = base.is_some(), "composing report");

        let errors_fragment = self.formatter.format_errors(errors);
        let thresholds_fragment = self.formatter.format_threshold_results(threshold_results);
        let run_report = self.build_run_report(head);
        let run_report_fragment = self.formatter.format_run_report(&run_report);
        trace!(%errors_fragment, %thresholds_fragment, %run_report_fragment, "rendered fragments");

        let mut vars = self.document_vars(options);
        let mut render = |detail: CoverageDetail| {
            let coverage = self.formatter.format_coverage(head, base.as_ref(), options.precision, detail);
            debug!(?detail, chars = coverage.chars().count(), "rendered coverage fragment");
            trace!(?detail, %coverage, "coverage fragment");
            let body = [
                errors_fragment.as_str(),
                thresholds_fragment.as_str(),
                coverage.as_str(),
                run_report_fragment.as_str(),
            ]
            .join("\n");
            vars.insert("body", body);
            self.template.render(&vars)
        };

        let mut text = render(CoverageDetail::Full);
        let length = text.chars().count();
        debug!(chars = length, limit = self.size_limit, "rendered full report");

        if length > self.size_limit {
            info!(
                chars = length,
                limit = self.size_limit,
                "report exceeds size limit, rendering reduced coverage"
            );
            text = render(CoverageDetail::Reduced);
            let reduced = text.chars().count();
            if reduced > self.size_limit {
                warn!(chars = reduced, limit = self.size_limit, "reduced report still exceeds size limit");
            }
        }

        ComposedReport { text, run_report }
    }

    pub fn build_run_report(&self, head: &JsonReport) -> TestRunReport {
        let title_key = if head.success { MessageKey::TestsSuccess } else { MessageKey::TestsFail };
        TestRunReport {
            title: self.localizer.text(title_key),
            summary: self.formatter.test_run_summary(head),
            failures: self.formatter.failure_details(head),
        }
    }

    fn document_vars(&self, options: &Options) -> BTreeMap<&'static str, String> {
        let working_directory = options.working_directory.as_deref().filter(|d| !d.is_empty());
        let title_dir = match working_directory {
            Some(dir) => format!("for `{dir}`"),
            None => String::new(),
        };
        let title = match &options.custom_title {
            Some(custom) => insert_args(custom, &BTreeMap::from([("dir", title_dir)])),
            None => {
                let default = self.localizer.text(MessageKey::SummaryTitle);
                let title = insert_args(&default, &BTreeMap::from([("dir", title_dir)]));
                // default ends in `{dir}`, which is empty without a working directory
                title.trim_end().to_string()
            }
        };

        let (source, sha) = self.commit.resolve();
        debug!(?source, sha, "resolved commit sha");

        BTreeMap::from([
            ("dir", working_directory.unwrap_or_default().to_string()),
            ("tag", report_tag(options)),
            ("title", title),
            ("sha", sha.to_string()),
        ])
    }
}
