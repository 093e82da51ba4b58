//! `{name}` placeholder substitution and the comment document template.

use crate::error::{ReportError, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeMap;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid regex"));

/// Placeholders a document template must contain.
const REQUIRED_PLACEHOLDERS: [&str; 2] = ["tag", "body"];

pub const DEFAULT_TEMPLATE: &str = "{tag}
## {title}

{body}

<p align=\"right\">Report generated by coverage-report from {sha}</p>
";

/// Substitute every `{name}` whose name is in `vars`.
///
/// Unknown placeholders are kept verbatim and unused vars are ignored.
/// Substituted values are not scanned again.
pub fn insert_args(template: &str, vars: &BTreeMap<&str, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match vars.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// A validated document template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        for name in REQUIRED_PLACEHOLDERS {
            let present = PLACEHOLDER.captures_iter(&source).any(|caps| &caps[1] == name);
            if !present {
                return Err(ReportError::MalformedTemplate(name));
            }
        }
        Ok(Self { source })
    }

    pub fn render(&self, vars: &BTreeMap<&str, String>) -> String {
        insert_args(&self.source, vars)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Default for Template {
    fn default() -> Self {
        Self { source: DEFAULT_TEMPLATE.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&'static str, &str)]) -> BTreeMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn substitutes_known_placeholders() {
        let out = insert_args("Hello {name}, {name}!", &vars(&[("name", "Ada")]));
        assert_eq!(out, "Hello Ada, Ada!");
    }

    #[test]
    fn keeps_unmatched_placeholders_and_ignores_unused_vars() {
        let out = insert_args("{a} and {b}", &vars(&[("a", "1"), ("c", "3")]));
        assert_eq!(out, "1 and {b}");
    }

    #[test]
    fn does_not_rescan_substituted_values() {
        let out = insert_args("{a}", &vars(&[("a", "{b}"), ("b", "nope")]));
        assert_eq!(out, "{b}");
    }

    #[test]
    fn empty_value_blanks_placeholder() {
        let out = insert_args("Coverage report {dir}", &vars(&[("dir", "")]));
        assert_eq!(out, "Coverage report ");
    }

    #[test]
    fn default_template_is_valid() {
        assert!(Template::parse(DEFAULT_TEMPLATE).is_ok());
        assert_eq!(Template::default().as_str(), DEFAULT_TEMPLATE);
    }

    #[test]
    fn template_without_body_is_rejected() {
        let err = Template::parse("{tag}\n## {title}\n").expect_err("missing body");
        assert!(matches!(err, ReportError::MalformedTemplate("body")));
        assert_eq!(err.to_string(), "Template is missing required placeholder `{body}`");
    }

    #[test]
    fn template_without_tag_is_rejected() {
        let err = Template::parse("{body}").expect_err("missing tag");
        assert!(matches!(err, ReportError::MalformedTemplate("tag")));
    }
}
