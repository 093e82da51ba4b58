//! Compose command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::evaluate_thresholds;
use crate::collect::{collect_run_data, load_commit_context};
use crate::compose::ReportComposer;
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::render::Template;

#[derive(Args)]
pub struct ComposeArgs {
    /// Test/coverage report of the current run
    #[arg(long, value_name = "FILE")]
    pub head: PathBuf,

    /// Report of the baseline run to compare against
    #[arg(long, value_name = "FILE")]
    pub base: Option<PathBuf>,

    /// Config file (default: auto-discover coverage-report.toml/.yml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Sub-project the report belongs to
    #[arg(short = 'd', long, value_name = "DIR")]
    pub working_directory: Option<String>,

    /// Custom title; `{dir}` expands to the working directory
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Decimal places for coverage percentages
    #[arg(long, value_name = "DIGITS")]
    pub precision: Option<usize>,

    /// Custom document template file
    #[arg(long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Write the comment body here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write the structured run report as JSON
    #[arg(long, value_name = "FILE")]
    pub run_report: Option<PathBuf>,

    /// Webhook event payload of the triggering CI event
    #[arg(long, env = "GITHUB_EVENT_PATH", value_name = "FILE")]
    pub event_path: Option<PathBuf>,

    /// Commit sha the workflow was invoked for
    #[arg(long, env = "GITHUB_SHA", value_name = "SHA")]
    pub sha: Option<String>,

    /// Exit with an error when tests failed or a threshold was not met
    #[arg(long)]
    pub fail_on_failure: bool,
}

pub fn run(args: ComposeArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let file_config = load_config(&cwd, args.config.as_deref())?;
    let config = merge_cli_with_config(
        file_config,
        CliOverrides {
            working_directory: args.working_directory,
            custom_title: args.title,
            precision: args.precision,
            template: args.template,
        },
    );

    let template = match &config.template {
        Some(path) => load_template(path)?,
        None => Template::default(),
    };

    let run_data = collect_run_data(&args.head, args.base.as_deref())?;
    let threshold_results = evaluate_thresholds(&run_data.head, &config.thresholds)?;
    let commit = load_commit_context(args.event_path.as_deref(), args.sha)?;

    let composer = ReportComposer::markdown(commit).with_template(template);
    let report = composer.compose(&run_data, &config.options(), &threshold_results);

    match &args.output {
        Some(path) => write_file(path, &report.text)?,
        None => print!("{}", report.text),
    }
    if let Some(path) = &args.run_report {
        write_file(path, &serde_json::to_string_pretty(&report.run_report)?)?;
    }

    if args.fail_on_failure {
        if !run_data.head.success {
            anyhow::bail!("Test run failed: {}", report.run_report.title);
        }
        let failed = threshold_results.iter().filter(|r| !r.passed()).count();
        if failed > 0 {
            anyhow::bail!("{} coverage threshold(s) not met", failed);
        }
    }

    Ok(())
}

fn load_template(path: &Path) -> Result<Template> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed reading template: {}", path.display()))?;
    Template::parse(source).with_context(|| format!("Invalid template: {}", path.display()))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed writing {}", path.display()))
}
