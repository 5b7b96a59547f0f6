// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Effective rule resolution.
//!
//! Merges a [`LintConfig`] with the base ruleset it extends into one
//! canonical, fully validated rule set. Downstream code never branches
//! on configuration shape.

use serde::Serialize;

use crate::config::{Applicability, LintConfig, Severity};
use crate::error::{ConfigError, Result};

use super::case::CaseStyle;
use super::registry;

/// Rule name for the header-case check.
pub const HEADER_CASE: &str = "header-case";

/// Rule name for the subject-case check.
pub const SUBJECT_CASE: &str = "subject-case";

/// A fully resolved rule: severity, applicability, and an ordered,
/// duplicate-free, non-empty list of case styles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveRule {
    pub severity: Severity,
    pub when: Applicability,
    pub allowed: Vec<CaseStyle>,
}

/// The resolved rule set. Total: both rules are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveRules {
    #[serde(rename = "header-case")]
    pub header_case: EffectiveRule,

    #[serde(rename = "subject-case")]
    pub subject_case: EffectiveRule,
}

impl EffectiveRules {
    /// All rules with their names, in declaration order.
    pub fn entries(&self) -> [(&'static str, &EffectiveRule); 2] {
        [
            (HEADER_CASE, &self.header_case),
            (SUBJECT_CASE, &self.subject_case),
        ]
    }
}

/// Resolve a configuration into its effective rule set.
///
/// Precedence, lowest to highest: base ruleset defaults, shorthand
/// `header_case`/`subject_case` lists (allowed styles only, severity and
/// applicability stay inherited), explicit `rules` entries (replaced
/// wholesale). Pure: resolving the same configuration twice yields
/// identical results.
pub fn resolve(config: &LintConfig) -> Result<EffectiveRules> {
    let base = registry::lookup(&config.extends)?;

    let mut header_case = base.header_case;
    let mut subject_case = base.subject_case;

    if let Some(ref styles) = config.header_case {
        header_case.allowed = parse_styles("header_case", styles)?;
    }
    if let Some(ref styles) = config.subject_case {
        subject_case.allowed = parse_styles("subject_case", styles)?;
    }

    for (name, spec) in &config.rules {
        let rule = EffectiveRule {
            severity: spec.0,
            when: spec.1,
            allowed: parse_styles(name, &spec.2)?,
        };
        match name.as_str() {
            HEADER_CASE => header_case = rule,
            SUBJECT_CASE => subject_case = rule,
            other => {
                return Err(ConfigError::InvalidValue {
                    key: format!("rules.{}", other),
                    message: format!("unknown rule (known: {}, {})", HEADER_CASE, SUBJECT_CASE),
                }
                .into())
            }
        }
    }

    Ok(EffectiveRules {
        header_case,
        subject_case,
    })
}

/// Parse and validate a declared style list: every name must be a known
/// case style, duplicates are dropped preserving first-occurrence order,
/// and the list must not be empty.
fn parse_styles(key: &str, styles: &[String]) -> Result<Vec<CaseStyle>> {
    if styles.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "allowed case style list must not be empty".to_string(),
        }
        .into());
    }

    let mut parsed = Vec::with_capacity(styles.len());
    for raw in styles {
        let style: CaseStyle = raw.parse()?;
        if !parsed.contains(&style) {
            parsed.push(style);
        }
    }
    Ok(parsed)
}
