//! Library error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Template is missing required placeholder `{{{0}}}`")]
    MalformedTemplate(&'static str),

    #[error("No commit sha available; set GITHUB_SHA or pass --sha")]
    MissingSha,

    #[error("Invalid threshold path glob '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
