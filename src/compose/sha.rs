//! Commit sha resolution across CI trigger kinds.

use crate::error::{ReportError, Result};
use serde_json::Value;

/// Where a resolved sha came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitSource {
    /// `after` field of a push event payload.
    PushAfter,
    /// `pull_request.head.sha` of a pull-request event payload.
    PullRequestHead,
    /// The sha the workflow itself was invoked for.
    Ambient,
}

/// Lookup order; the first source holding a value wins.
pub const SHA_PRECEDENCE: [CommitSource; 3] =
    [CommitSource::PushAfter, CommitSource::PullRequestHead, CommitSource::Ambient];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitContext {
    pub push_after: Option<String>,
    pub pull_request_head_sha: Option<String>,
    pub sha: String,
}

impl CommitContext {
    pub fn new(sha: impl Into<String>) -> Self {
        Self { push_after: None, pull_request_head_sha: None, sha: sha.into() }
    }

    /// Build from a webhook event payload and the invocation sha.
    ///
    /// Fails when the invocation sha is absent, so resolution itself can't.
    pub fn from_event_payload(payload: &Value, sha: Option<String>) -> Result<Self> {
        let sha = sha.filter(|s| !s.is_empty()).ok_or(ReportError::MissingSha)?;
        let push_after = payload.get("after").and_then(Value::as_str).map(str::to_string);
        let pull_request_head_sha = payload
            .pointer("/pull_request/head/sha")
            .and_then(Value::as_str)
            .map(str::to_string);
        Ok(Self { push_after, pull_request_head_sha, sha })
    }

    pub fn lookup(&self, source: CommitSource) -> Option<&str> {
        match source {
            CommitSource::PushAfter => self.push_after.as_deref(),
            CommitSource::PullRequestHead => self.pull_request_head_sha.as_deref(),
            CommitSource::Ambient => Some(self.sha.as_str()),
        }
    }

    pub fn resolve(&self) -> (CommitSource, &str) {
        SHA_PRECEDENCE
            .iter()
            .find_map(|source| self.lookup(*source).map(|sha| (*source, sha)))
            .unwrap_or((CommitSource::Ambient, self.sha.as_str()))
    }

    pub fn resolve_sha(&self) -> &str {
        self.resolve().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn push_after_wins_when_all_present() {
        let ctx = CommitContext {
            push_after: Some("push".to_string()),
            pull_request_head_sha: Some("pr".to_string()),
            sha: "ambient".to_string(),
        };
        assert_eq!(ctx.resolve(), (CommitSource::PushAfter, "push"));
    }

    #[test]
    fn pull_request_head_beats_ambient() {
        let ctx = CommitContext {
            push_after: None,
            pull_request_head_sha: Some("pr".to_string()),
            sha: "ambient".to_string(),
        };
        assert_eq!(ctx.resolve(), (CommitSource::PullRequestHead, "pr"));
    }

    #[test]
    fn ambient_sha_is_the_fallback() {
        let ctx = CommitContext::new("ambient");
        assert_eq!(ctx.resolve_sha(), "ambient");
        assert_eq!(ctx.resolve().0, CommitSource::Ambient);
    }

    #[test]
    fn reads_push_payload() {
        let payload = json!({"after": "abc123", "ref": "refs/heads/main"});
        let ctx = CommitContext::from_event_payload(&payload, Some("ambient".to_string()))
            .expect("context");
        assert_eq!(ctx.resolve_sha(), "abc123");
    }

    #[test]
    fn reads_pull_request_payload() {
        let payload = json!({"pull_request": {"number": 7, "head": {"sha": "def456"}}});
        let ctx = CommitContext::from_event_payload(&payload, Some("merge-sha".to_string()))
            .expect("context");
        assert_eq!(ctx.push_after, None);
        assert_eq!(ctx.resolve_sha(), "def456");
    }

    #[test]
    fn missing_ambient_sha_is_rejected() {
        let err = CommitContext::from_event_payload(&json!({}), None).expect_err("no sha");
        assert!(matches!(err, ReportError::MissingSha));
        assert!(CommitContext::from_event_payload(&json!({}), Some(String::new())).is_err());
    }
}
