// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::CommitMessage;
use crate::config::{Applicability, LintConfig, Severity};
use crate::error::Result;
use crate::git;

use super::resolver::{resolve, EffectiveRule, EffectiveRules, HEADER_CASE};
use super::validator::{ValidationIssue, ValidationResult};

/// Rule engine for validating commit messages against a resolved rule set.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: EffectiveRules,
}

impl RuleEngine {
    /// Create a new rule engine from an already resolved rule set.
    pub fn new(rules: EffectiveRules) -> Self {
        Self { rules }
    }

    /// Resolve a configuration and create an engine for it.
    pub fn from_config(config: &LintConfig) -> Result<Self> {
        Ok(Self::new(resolve(config)?))
    }

    /// The resolved rules this engine applies.
    pub fn rules(&self) -> &EffectiveRules {
        &self.rules
    }

    /// Validate a commit message.
    pub fn validate(&self, message: &CommitMessage) -> ValidationResult {
        let mut result = ValidationResult::new(message.header.clone());

        for (name, rule) in self.rules.entries() {
            let text = if name == HEADER_CASE {
                &message.header
            } else {
                &message.subject
            };
            if let Some(issue) = check_case(name, rule, text) {
                if issue.is_error {
                    result.errors.push(issue);
                } else {
                    result.warnings.push(issue);
                }
            }
        }

        result
    }

    /// Validate a commit message string.
    pub fn validate_string(&self, message: &str) -> Result<ValidationResult> {
        let parsed = CommitMessage::parse(message)?;
        Ok(self.validate(&parsed))
    }

    /// Check a specific commit by reference.
    pub fn check_commit(&self, reference: &str) -> Result<ValidationResult> {
        let message = git::get_commit_message(reference)?;
        self.validate_string(&message)
    }

    /// Check a range of commits.
    pub fn check_range(&self, range: &str) -> Result<Vec<ValidationResult>> {
        let commits = git::get_commit_range(range)?;
        let mut results = Vec::new();

        for (oid, message) in commits {
            let mut result = self.validate_string(&message)?;
            result.commit_sha = Some(oid);
            results.push(result);
        }

        Ok(results)
    }
}

/// Apply one case rule to a piece of text.
fn check_case(rule_name: &str, rule: &EffectiveRule, text: &str) -> Option<ValidationIssue> {
    if rule.severity == Severity::Off || text.is_empty() {
        return None;
    }

    let matched = rule.allowed.iter().any(|s| s.matches(text));
    let passes = match rule.when {
        Applicability::Always => matched,
        Applicability::Never => !matched,
    };
    if passes {
        return None;
    }

    let part = if rule_name == HEADER_CASE {
        "Header"
    } else {
        "Subject"
    };
    let styles = rule
        .allowed
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let (message, suggestion) = match rule.when {
        Applicability::Always => (
            format!("{} does not match allowed case styles: {}", part, styles),
            format!("Use one of: {}", styles),
        ),
        Applicability::Never => (
            format!("{} matches a disallowed case style: {}", part, styles),
            format!("Avoid: {}", styles),
        ),
    };

    Some(ValidationIssue {
        code: rule_name.to_string(),
        message,
        suggestion: Some(suggestion),
        is_error: rule.severity == Severity::Error,
    })
}
