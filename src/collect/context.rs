//! CI event context loading.

use crate::compose::CommitContext;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read the webhook payload (if any) and pair it with the invocation sha.
pub fn load_commit_context(event_path: Option<&Path>, sha: Option<String>) -> Result<CommitContext> {
    let payload = match event_path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed reading event payload: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid event payload: {}", path.display()))?
        }
        None => Value::Null,
    };
    Ok(CommitContext::from_event_payload(&payload, sha)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_payload_from_file() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("event.json");
        fs::write(&path, r#"{"pull_request": {"head": {"sha": "feed"}}}"#).expect("write");

        let ctx = load_commit_context(Some(&path), Some("merge".to_string())).expect("context");
        assert_eq!(ctx.resolve_sha(), "feed");
    }

    #[test]
    fn no_payload_uses_ambient_sha() {
        let ctx = load_commit_context(None, Some("ambient".to_string())).expect("context");
        assert_eq!(ctx.resolve_sha(), "ambient");
    }

    #[test]
    fn missing_sha_fails() {
        assert!(load_commit_context(None, None).is_err());
    }
}
