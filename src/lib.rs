// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cml - Commit Message Linter
//!
//! A CLI tool that validates commit message case conventions against an
//! extendable ruleset configuration.
//!
//! # Features
//!
//! - **Extendable Rulesets**: Configurations extend a built-in base
//!   ruleset and override its case allowances
//! - **Shorthand or Explicit Rules**: Tweak just the allowed style lists,
//!   or declare full severity/applicability/style triples
//! - **Case Checks**: Header and subject lines validated against a fixed
//!   set of case styles
//! - **Git Integration**: Check a single commit, a revision range, or a
//!   message file from a commit-msg hook
//!
//! # Example
//!
//! ```no_run
//! use cml::config::LintConfig;
//! use cml::rules::{resolve, RuleEngine};
//!
//! // Load configuration and resolve the effective rule set
//! let config = LintConfig::load().unwrap();
//! let rules = resolve(&config).unwrap();
//! println!("{} styles allowed on the header", rules.header_case.allowed.len());
//!
//! // Validate a message against it
//! let engine = RuleEngine::new(rules);
//! let result = engine.validate_string("feat: add case linting").unwrap();
//! assert!(result.is_valid());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod rules;

// Re-exports for convenience
pub use config::LintConfig;
pub use error::{CmlError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cml.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
