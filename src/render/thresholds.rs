//! Threshold result fragment.

use crate::domain::ThresholdResult;
use crate::i18n::{Localizer, MessageKey};

pub fn format_threshold_results(results: &[ThresholdResult], localizer: &dyn Localizer) -> String {
    if results.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&format!("### {}\n\n", localizer.text(MessageKey::ThresholdsHeading)));
    out.push_str("| Status | Scope | Metric | Expected | Received |\n");
    out.push_str("| --- | --- | --- | --- | --- |\n");
    for result in results {
        let status = if result.passed() { "✅" } else { "❌" };
        let scope = match &result.scope {
            Some(glob) => format!("`{glob}`"),
            None => "All files".to_string(),
        };
        out.push_str(&format!(
            "| {} | {} | {} | {:.2}% | {:.2}% |\n",
            status, scope, result.metric, result.expected, result.received
        ));
    }
    out
}
