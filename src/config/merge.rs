//! CLI overrides on top of file configuration.

use crate::domain::Config;
use std::path::PathBuf;

/// Values given on the command line; `None` leaves the file value alone.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub working_directory: Option<String>,
    pub custom_title: Option<String>,
    pub precision: Option<usize>,
    pub template: Option<PathBuf>,
}

pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if cli.working_directory.is_some() {
        config.working_directory = cli.working_directory;
    }
    if cli.custom_title.is_some() {
        config.custom_title = cli.custom_title;
    }
    if cli.precision.is_some() {
        config.precision = cli.precision;
    }
    if cli.template.is_some() {
        config.template = cli.template;
    }
    config
}
