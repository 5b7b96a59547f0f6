// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from cml.toml.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The main configuration structure for cml.
///
/// Case styles are declared as raw strings and validated during rule
/// resolution, so an unknown style surfaces as a typed configuration
/// error instead of a TOML parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Name of the base ruleset to extend.
    pub extends: String,

    /// Shorthand: allowed case styles for the full header line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_case: Option<Vec<String>>,

    /// Shorthand: allowed case styles for the subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_case: Option<Vec<String>>,

    /// Explicit rule triples, keyed by rule name. These take precedence
    /// over the shorthand lists above.
    pub rules: BTreeMap<String, RuleSpec>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            extends: "conventional".to_string(),
            header_case: None,
            subject_case: None,
            rules: BTreeMap::new(),
        }
    }
}

impl LintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// An explicit rule declaration: severity, applicability, allowed case
/// styles. Serialized as a three-element array, e.g.
/// `[2, "always", ["lower-case", "sentence-case"]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec(pub Severity, pub Applicability, pub Vec<String>);

/// Rule severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    /// The rule is disabled.
    Off,
    /// Violations are reported but do not fail the run.
    Warning,
    /// Violations fail the run.
    Error,
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, String> {
        match value {
            0 => Ok(Severity::Off),
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Error),
            other => Err(format!("invalid severity {}, expected 0, 1 or 2", other)),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Off => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Severity::Off => "off",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}", text)
    }
}

/// When a rule's check applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    /// The text must match at least one allowed style.
    Always,
    /// The text must match none of the listed styles.
    Never,
}

impl std::fmt::Display for Applicability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Applicability::Always => "always",
            Applicability::Never => "never",
        };
        write!(f, "{}", text)
    }
}
