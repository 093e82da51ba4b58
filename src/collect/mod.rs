//! Loading head/base reports from disk.
//!
//! The head report is required. Base report failures are recorded as
//! [`CollectionError`]s and the base is treated as absent.

use crate::domain::{CollectionError, JsonReport, ReportKind, RunData};
use anyhow::Result;
use std::fs;
use std::path::Path;

pub mod context;

pub use context::load_commit_context;

pub fn collect_run_data(head_path: &Path, base_path: Option<&Path>) -> Result<RunData> {
    let head = read_report(head_path, ReportKind::Head)?;

    let mut errors = Vec::new();
    let base = match base_path {
        Some(path) => match read_report(path, ReportKind::Base) {
            Ok(report) => Some(report),
            Err(err) => {
                tracing::warn!("{}", err);
                errors.push(err);
                None
            }
        },
        None => None,
    };

    tracing::debug!(has_base = base.is_some(), errors = errors.len(), "collected run data");
    Ok(RunData::new(head, base).with_errors(errors))
}

pub fn read_report(path: &Path, kind: ReportKind) -> std::result::Result<JsonReport, CollectionError> {
    let content = fs::read_to_string(path).map_err(|e| CollectionError::Read {
        kind,
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| CollectionError::Parse {
        kind,
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
