// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::cli::args::OutputFormat;
use console::{style, Style};

/// A single validation issue.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Rule name that produced the issue.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
    /// Whether this is an error (true) or warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let prefix = if self.is_error {
            style("✗").red().bold()
        } else {
            style("⚠").yellow().bold()
        };

        let code_style = if self.is_error {
            Style::new().red()
        } else {
            Style::new().yellow()
        };

        let mut output = format!(
            "{} {} {}",
            prefix,
            code_style.apply_to(&self.code),
            self.message
        );

        if let Some(ref suggestion) = self.suggestion {
            output.push_str(&format!(
                "\n  {} {}",
                style("→").dim(),
                style(suggestion).dim()
            ));
        }

        output
    }
}

/// Result of validating a commit message.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// The header line of the validated message.
    pub message: String,
    /// Commit SHA if validating an existing commit.
    pub commit_sha: Option<String>,
    /// Validation errors.
    pub errors: Vec<ValidationIssue>,
    /// Validation warnings.
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a new validation result.
    pub fn new(message: String) -> Self {
        Self {
            message,
            commit_sha: None,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Print the result to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        // Print commit header if available
        if let Some(ref sha) = self.commit_sha {
            let short_sha = &sha[..7.min(sha.len())];
            let status = if self.is_valid() {
                style("✓").green().bold()
            } else {
                style("✗").red().bold()
            };
            println!("{} {} {}", status, style(short_sha).cyan(), self.message);
        }

        for error in &self.errors {
            println!("  {}", error.format());
        }

        for warning in &self.warnings {
            println!("  {}", warning.format());
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        let issue_json = |issue: &ValidationIssue| {
            serde_json::json!({
                "code": issue.code,
                "message": issue.message,
                "suggestion": issue.suggestion,
            })
        };

        let json = serde_json::json!({
            "valid": self.is_valid(),
            "commit": self.commit_sha,
            "message": self.message,
            "errors": self.errors.iter().map(issue_json).collect::<Vec<_>>(),
            "warnings": self.warnings.iter().map(issue_json).collect::<Vec<_>>(),
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            if self.warnings.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warnings.len())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_issue(code: &str, is_error: bool) -> ValidationIssue {
        ValidationIssue {
            code: code.to_string(),
            message: "case mismatch".to_string(),
            suggestion: None,
            is_error,
        }
    }

    #[test]
    fn test_validation_result_valid() {
        let result = ValidationResult::new("feat: add linter".to_string());
        assert!(result.is_valid());
        assert_eq!(result.issue_count(), 0);
    }

    #[test]
    fn test_validation_result_with_errors() {
        let mut result = ValidationResult::new("FEAT: Add Linter".to_string());
        result.errors.push(make_issue("header-case", true));

        assert!(!result.is_valid());
        assert_eq!(result.issue_count(), 1);
    }

    #[test]
    fn test_validation_issue_format() {
        let issue = ValidationIssue {
            code: "subject-case".to_string(),
            message: "Subject does not match allowed case styles".to_string(),
            suggestion: Some("Use one of: lower-case".to_string()),
            is_error: true,
        };

        let formatted = issue.format();
        assert!(formatted.contains("subject-case"));
        assert!(formatted.contains("allowed case styles"));
        assert!(formatted.contains("lower-case"));
    }

    #[test]
    fn test_summary() {
        let mut result = ValidationResult::new("feat: add linter".to_string());
        assert!(result.summary().contains("Valid"));

        result.warnings.push(make_issue("subject-case", false));
        assert!(result.summary().contains("1 warning"));

        result.errors.push(make_issue("header-case", true));
        assert!(result.summary().contains("Invalid"));
    }
}
