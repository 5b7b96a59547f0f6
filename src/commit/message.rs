// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

use crate::error::{CmlError, CommitError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for conventional commit headers: `type(scope)!: subject`.
    static ref CONVENTIONAL_REGEX: Regex =
        Regex::new(r"^(?P<type>[A-Za-z]+)(?:\((?P<scope>[^)]+)\))?!?:\s+(?P<subject>.+)$")
            .unwrap();
}

/// A commit message reduced to the parts the case rules inspect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// The full first line.
    pub header: String,
    /// The description part of a conventional header; for a
    /// non-conventional message this is the header itself.
    pub subject: String,
    /// Scope, when the header is conventional and declares one.
    pub scope: Option<String>,
}

impl CommitMessage {
    /// Parse a commit message from a string.
    pub fn parse(message: &str) -> Result<Self> {
        let message = message.trim();

        if message.is_empty() {
            return Err(CmlError::Commit(CommitError::EmptyMessage));
        }

        let header = message.lines().next().unwrap_or("").trim_end().to_string();

        if let Some(captures) = CONVENTIONAL_REGEX.captures(&header) {
            let subject = captures
                .name("subject")
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            let scope = captures.name("scope").map(|m| m.as_str().to_string());

            Ok(Self {
                header: header.clone(),
                subject,
                scope,
            })
        } else {
            Ok(Self {
                subject: header.clone(),
                header,
                scope: None,
            })
        }
    }

    /// Whether the header followed the conventional `type: subject` shape.
    pub fn is_conventional(&self) -> bool {
        self.header != self.subject
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_conventional() {
        let msg = CommitMessage::parse("feat(core): add case linting").unwrap();
        assert_eq!(msg.header, "feat(core): add case linting");
        assert_eq!(msg.subject, "add case linting");
        assert_eq!(msg.scope, Some("core".to_string()));
        assert!(msg.is_conventional());
    }

    #[test]
    fn test_parse_without_scope() {
        let msg = CommitMessage::parse("fix: handle empty styles").unwrap();
        assert_eq!(msg.subject, "handle empty styles");
        assert!(msg.scope.is_none());
    }

    #[test]
    fn test_parse_breaking_marker() {
        let msg = CommitMessage::parse("feat(api)!: drop legacy config keys").unwrap();
        assert_eq!(msg.subject, "drop legacy config keys");
        assert_eq!(msg.scope, Some("api".to_string()));
    }

    #[test]
    fn test_parse_non_conventional() {
        let msg = CommitMessage::parse("Update dependencies").unwrap();
        assert_eq!(msg.header, "Update dependencies");
        assert_eq!(msg.subject, "Update dependencies");
        assert!(!msg.is_conventional());
    }

    #[test]
    fn test_parse_uses_first_line_only() {
        let msg = CommitMessage::parse("feat: add linting\n\nLonger body here.").unwrap();
        assert_eq!(msg.header, "feat: add linting");
        assert_eq!(msg.subject, "add linting");
    }

    #[test]
    fn test_parse_empty() {
        let result = CommitMessage::parse("   \n");
        assert!(matches!(
            result,
            Err(CmlError::Commit(CommitError::EmptyMessage))
        ));
    }
}
