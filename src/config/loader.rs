// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{CmlError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::LintConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["cml.toml", ".cml.toml", ".config/cml.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Try parent directory
        if !current.pop() {
            break;
        }
    }

    // Also check user's home directory
    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let cml_config = config_dir.join("cml").join("config.toml");
        if cml_config.exists() {
            return Some(cml_config);
        }
    }

    None
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<LintConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(LintConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<LintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CmlError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CmlError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<LintConfig> {
    toml::from_str(content).map_err(|e| {
        CmlError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{Applicability, RuleSpec, Severity};

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config.extends, "conventional");
        assert!(config.header_case.is_none());
    }

    #[test]
    fn test_parse_shorthand_config() {
        let toml = r#"
extends = "conventional"
header_case = ["lower-case", "sentence-case", "start-case"]
subject_case = ["lower-case", "sentence-case"]
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(
            config.header_case.clone().unwrap(),
            vec!["lower-case", "sentence-case", "start-case"]
        );
        assert_eq!(
            config.subject_case.clone().unwrap(),
            vec!["lower-case", "sentence-case"]
        );
    }

    #[test]
    fn test_parse_explicit_rules() {
        let toml = r#"
[rules]
"header-case" = [2, "always", ["lower-case", "sentence-case", "start-case"]]
"subject-case" = [1, "never", ["pascal-case"]]
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(
            config.rules["header-case"],
            RuleSpec(
                Severity::Error,
                Applicability::Always,
                vec![
                    "lower-case".to_string(),
                    "sentence-case".to_string(),
                    "start-case".to_string()
                ]
            )
        );
        assert_eq!(config.rules["subject-case"].0, Severity::Warning);
        assert_eq!(config.rules["subject-case"].1, Applicability::Never);
    }

    #[test]
    fn test_parse_invalid_severity() {
        let toml = r#"
[rules]
"header-case" = [5, "always", ["lower-case"]]
"#;
        let result = parse_config(toml);
        assert!(matches!(
            result,
            Err(CmlError::Config(ConfigError::ParseError { .. }))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config_from(Path::new("/nonexistent/cml.toml"));
        assert!(matches!(
            result,
            Err(CmlError::Config(ConfigError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_find_config_in_parent() {
        let dir = tempfile::TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("cml.toml"), "extends = \"conventional\"\n").unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join("cml.toml"));
    }
}
