// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the cml application.
//!
//! This module defines all error types used throughout the application,
//! with proper error categorization and context propagation.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cml operations.
#[derive(Error, Debug)]
pub enum CmlError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Commit message errors
    #[error("Commit error: {0}")]
    Commit(#[from] CommitError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Lint run ended with blocking issues
    #[error("Lint failed: {count} blocking issues found")]
    LintFailed { count: usize },

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Unknown case style: '{style}'")]
    UnknownCaseStyle { style: String },

    #[error("Unknown base ruleset: '{name}' (known: {known})")]
    UnknownRuleset { name: String, known: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Commit-message-related errors.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Empty commit message")]
    EmptyMessage,

    #[error("Invalid message encoding for commit {reference}")]
    InvalidEncoding { reference: String },
}

/// Result type alias for cml operations.
pub type Result<T> = std::result::Result<T, CmlError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CmlError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/cml.toml"),
        };
        assert!(err.to_string().contains("/path/to/cml.toml"));
    }

    #[test]
    fn test_unknown_case_style_display() {
        let err = ConfigError::UnknownCaseStyle {
            style: "shout-case".to_string(),
        };
        assert!(err.to_string().contains("shout-case"));
    }

    #[test]
    fn test_unknown_ruleset_display() {
        let err = ConfigError::UnknownRuleset {
            name: "angular".to_string(),
            known: "conventional".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("angular"));
        assert!(text.contains("conventional"));
    }

    #[test]
    fn test_cml_error_from_config_error() {
        let config_err = ConfigError::UnknownCaseStyle {
            style: "loud-case".to_string(),
        };
        let cml_err: CmlError = config_err.into();
        assert!(cml_err.to_string().contains("loud-case"));
    }

    #[test]
    fn test_result_ext_context() {
        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let err = result.context("reading message file").unwrap_err();
        assert!(err.to_string().contains("reading message file"));
    }
}
