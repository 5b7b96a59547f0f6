// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in base rulesets.

use crate::config::{Applicability, Severity};
use crate::error::ConfigError;

use super::case::CaseStyle;
use super::resolver::EffectiveRule;

/// A base ruleset: the default rule definitions a configuration extends.
///
/// Carrying both rules as plain fields keeps the resolved rule set total
/// by construction.
#[derive(Debug, Clone)]
pub struct BaseRuleset {
    /// Ruleset name, as referenced by `extends`.
    pub name: &'static str,

    /// Default header-case rule.
    pub header_case: EffectiveRule,

    /// Default subject-case rule.
    pub subject_case: EffectiveRule,
}

/// Names of all built-in base rulesets.
pub fn known_names() -> &'static [&'static str] {
    &["conventional"]
}

/// Look up a base ruleset by name.
pub fn lookup(name: &str) -> Result<BaseRuleset, ConfigError> {
    match name {
        "conventional" => Ok(conventional()),
        other => Err(ConfigError::UnknownRuleset {
            name: other.to_string(),
            known: known_names().join(", "),
        }),
    }
}

/// The conventional-commits base ruleset: lower-case headers, subjects
/// that may also be sentence-case.
fn conventional() -> BaseRuleset {
    BaseRuleset {
        name: "conventional",
        header_case: EffectiveRule {
            severity: Severity::Error,
            when: Applicability::Always,
            allowed: vec![CaseStyle::LowerCase],
        },
        subject_case: EffectiveRule {
            severity: Severity::Error,
            when: Applicability::Always,
            allowed: vec![CaseStyle::LowerCase, CaseStyle::SentenceCase],
        },
    }
}
