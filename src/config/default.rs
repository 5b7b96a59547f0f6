// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::LintConfig;

/// Get the default configuration.
pub fn default_config() -> LintConfig {
    LintConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# cml configuration file
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Base ruleset to extend
extends = "conventional"

# Allowed case styles for the full header line
header_case = ["lower-case", "sentence-case", "start-case"]

# Allowed case styles for the subject
subject_case = ["lower-case", "sentence-case", "start-case"]

# Explicit rule triples (severity, applicability, allowed styles) take
# precedence over the shorthand lists above. Severity: 0 = off,
# 1 = warning, 2 = error.
#
# [rules]
# "header-case" = [2, "always", ["lower-case"]]
# "subject-case" = [1, "never", ["pascal-case", "upper-case"]]
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.extends, "conventional");
    }

    #[test]
    fn test_example_config_parseable() {
        let example = example_config();
        let config: LintConfig = toml::from_str(example).expect("Example config should parse");
        assert_eq!(config.header_case.as_deref().unwrap().len(), 3);
    }
}
