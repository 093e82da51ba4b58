//! Stable comment tag so a previous report comment can be found and replaced.

use crate::domain::Options;
use sha2::{Digest, Sha256};

pub const REPORT_TAG_PREFIX: &str = "coverage-report-tag";

pub fn report_tag(options: &Options) -> String {
    let scope = options.working_directory.as_deref().unwrap_or("");
    let mut hasher = Sha256::new();
    hasher.update(scope.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    format!("<!-- {REPORT_TAG_PREFIX}: {} -->", &digest[..16])
}
