//! coverage-report: Compose test and coverage summaries into pull-request comments

use anyhow::Result;

fn main() -> Result<()> {
    coverage_report::cli::run()
}
