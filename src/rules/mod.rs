// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! This module resolves a lint configuration against its base ruleset
//! and applies the effective rules to commit messages.

pub mod case;
mod engine;
mod registry;
mod resolver;
mod validator;

pub use case::CaseStyle;
pub use engine::RuleEngine;
pub use registry::known_names as known_rulesets;
pub use resolver::{resolve, EffectiveRule, EffectiveRules, HEADER_CASE, SUBJECT_CASE};
pub use validator::{ValidationIssue, ValidationResult};
