//! User configuration.

use super::run::Options;
use crate::analysis::ThresholdRule;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Sub-project the report is for; shown in the title and scopes the tag.
    pub working_directory: Option<String>,
    /// Title template, may reference `{dir}`.
    pub custom_title: Option<String>,
    /// Decimal places for coverage percentages.
    pub precision: Option<usize>,
    pub thresholds: Vec<ThresholdRule>,
    /// Custom document template file.
    pub template: Option<PathBuf>,
}

impl Config {
    pub fn options(&self) -> Options {
        Options {
            working_directory: self.working_directory.clone(),
            custom_title: self.custom_title.clone(),
            precision: self.precision,
        }
    }
}
