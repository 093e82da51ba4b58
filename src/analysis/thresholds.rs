//! Threshold evaluation against the head report's coverage.

use crate::domain::{CoverageMetric, FileCoverage, JsonReport, ThresholdResult};
use crate::error::{ReportError, Result};
use globset::{Glob, GlobMatcher};
use serde::{Deserialize, Serialize};

/// Minimum percentage for one metric, optionally scoped to a path glob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRule {
    pub metric: CoverageMetric,
    pub minimum: f64,
    #[serde(default)]
    pub path: Option<String>,
}

/// Evaluate rules in order; results keep that order.
///
/// A scoped rule aggregates every matching file. When nothing matches the
/// received value is 0.
pub fn evaluate_thresholds(report: &JsonReport, rules: &[ThresholdRule]) -> Result<Vec<ThresholdResult>> {
    rules.iter().map(|rule| evaluate_rule(report, rule)).collect()
}

fn evaluate_rule(report: &JsonReport, rule: &ThresholdRule) -> Result<ThresholdResult> {
    let received = match &rule.path {
        None => report.total_coverage().metric(rule.metric).percent(),
        Some(pattern) => {
            let matcher = compile_glob(pattern)?;
            let mut scoped = FileCoverage::default();
            let mut matched = 0usize;
            for (path, file) in &report.coverage_summary {
                if matcher.is_match(path) {
                    scoped.add(file);
                    matched += 1;
                }
            }
            if matched == 0 {
                tracing::warn!("Threshold path '{}' matched no covered files", pattern);
                0.0
            } else {
                scoped.metric(rule.metric).percent()
            }
        }
    };

    tracing::debug!(metric = %rule.metric, minimum = rule.minimum, received, "evaluated threshold");
    Ok(ThresholdResult {
        scope: rule.path.clone(),
        metric: rule.metric,
        expected: rule.minimum,
        received,
    })
}

fn compile_glob(pattern: &str) -> Result<GlobMatcher> {
    Glob::new(pattern)
        .map(|glob| glob.compile_matcher())
        .map_err(|source| ReportError::InvalidGlob { pattern: pattern.to_string(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MetricCounts;

    fn report() -> JsonReport {
        let mut report = JsonReport::default();
        for (path, covered) in [("src/core/a.rs", 9), ("src/core/b.rs", 7), ("src/cli.rs", 2)] {
            report.coverage_summary.insert(
                path.to_string(),
                FileCoverage { lines: MetricCounts::new(10, covered), ..Default::default() },
            );
        }
        report
    }

    fn rule(metric: CoverageMetric, minimum: f64, path: Option<&str>) -> ThresholdRule {
        ThresholdRule { metric, minimum, path: path.map(str::to_string) }
    }

    #[test]
    fn global_rule_uses_totals() {
        let results = evaluate_thresholds(&report(), &[rule(CoverageMetric::Lines, 60.0, None)])
            .expect("evaluate");
        assert_eq!(results[0].received, 60.0);
        assert!(results[0].passed());
    }

    #[test]
    fn scoped_rule_aggregates_matching_files_in_order() {
        let rules = vec![
            rule(CoverageMetric::Lines, 90.0, Some("src/core/**")),
            rule(CoverageMetric::Lines, 10.0, Some("src/cli.rs")),
        ];
        let results = evaluate_thresholds(&report(), &rules).expect("evaluate");

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].scope.as_deref(), Some("src/core/**"));
        assert_eq!(results[0].received, 80.0);
        assert!(!results[0].passed());
        assert_eq!(results[1].received, 20.0);
        assert!(results[1].passed());
    }

    #[test]
    fn unmatched_scope_receives_zero() {
        let results =
            evaluate_thresholds(&report(), &[rule(CoverageMetric::Branches, 1.0, Some("lib/**"))])
                .expect("evaluate");
        assert_eq!(results[0].received, 0.0);
        assert!(!results[0].passed());
    }

    #[test]
    fn invalid_glob_is_an_error() {
        let err = evaluate_thresholds(&report(), &[rule(CoverageMetric::Lines, 1.0, Some("src/[core"))])
            .expect_err("bad glob");
        assert!(matches!(err, ReportError::InvalidGlob { .. }));
    }

    #[test]
    fn rules_deserialize_from_toml() {
        let rule: ThresholdRule =
            toml::from_str("metric = \"branches\"\nminimum = 75.5\npath = \"src/**\"\n").expect("toml");
        assert_eq!(rule, ThresholdRule {
            metric: CoverageMetric::Branches,
            minimum: 75.5,
            path: Some("src/**".to_string()),
        });
    }
}
