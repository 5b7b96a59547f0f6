// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Case style enumeration and conformance checks.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

lazy_static! {
    static ref CAMEL_REGEX: Regex = Regex::new(r"^[a-z][a-zA-Z0-9]*$").unwrap();
    static ref PASCAL_REGEX: Regex = Regex::new(r"^[A-Z][a-zA-Z0-9]*$").unwrap();
    static ref KEBAB_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
    static ref SNAKE_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:_[a-z0-9]+)*$").unwrap();
}

/// A named text-casing convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStyle {
    LowerCase,
    UpperCase,
    CamelCase,
    KebabCase,
    PascalCase,
    SentenceCase,
    SnakeCase,
    StartCase,
}

impl CaseStyle {
    /// Get the string representation of the case style.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStyle::LowerCase => "lower-case",
            CaseStyle::UpperCase => "upper-case",
            CaseStyle::CamelCase => "camel-case",
            CaseStyle::KebabCase => "kebab-case",
            CaseStyle::PascalCase => "pascal-case",
            CaseStyle::SentenceCase => "sentence-case",
            CaseStyle::SnakeCase => "snake-case",
            CaseStyle::StartCase => "start-case",
        }
    }

    /// Get all known case styles.
    pub fn all() -> &'static [CaseStyle] {
        &[
            CaseStyle::LowerCase,
            CaseStyle::UpperCase,
            CaseStyle::CamelCase,
            CaseStyle::KebabCase,
            CaseStyle::PascalCase,
            CaseStyle::SentenceCase,
            CaseStyle::SnakeCase,
            CaseStyle::StartCase,
        ]
    }

    /// Check whether the given text conforms to this case style.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            CaseStyle::LowerCase => !text.chars().any(|c| c.is_uppercase()),
            CaseStyle::UpperCase => !text.chars().any(|c| c.is_lowercase()),
            CaseStyle::CamelCase => CAMEL_REGEX.is_match(text),
            CaseStyle::KebabCase => KEBAB_REGEX.is_match(text),
            CaseStyle::PascalCase => PASCAL_REGEX.is_match(text),
            CaseStyle::SentenceCase => {
                // First alphabetic character capitalized, the rest lower.
                let mut seen_first = false;
                for c in text.chars() {
                    if !c.is_alphabetic() {
                        continue;
                    }
                    if !seen_first {
                        if c.is_lowercase() {
                            return false;
                        }
                        seen_first = true;
                    } else if c.is_uppercase() {
                        return false;
                    }
                }
                true
            }
            CaseStyle::SnakeCase => SNAKE_REGEX.is_match(text),
            CaseStyle::StartCase => text.split_whitespace().all(word_is_capitalized),
        }
    }
}

/// Check that a single word is capitalized: first alphabetic character
/// uppercase, the remaining alphabetic characters lowercase.
fn word_is_capitalized(word: &str) -> bool {
    let mut seen_first = false;
    for c in word.chars() {
        if !c.is_alphabetic() {
            continue;
        }
        if !seen_first {
            if c.is_lowercase() {
                return false;
            }
            seen_first = true;
        } else if c.is_uppercase() {
            return false;
        }
    }
    true
}

impl std::str::FromStr for CaseStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lower-case" => Ok(CaseStyle::LowerCase),
            "upper-case" => Ok(CaseStyle::UpperCase),
            "camel-case" => Ok(CaseStyle::CamelCase),
            "kebab-case" => Ok(CaseStyle::KebabCase),
            "pascal-case" => Ok(CaseStyle::PascalCase),
            "sentence-case" => Ok(CaseStyle::SentenceCase),
            "snake-case" => Ok(CaseStyle::SnakeCase),
            "start-case" => Ok(CaseStyle::StartCase),
            other => Err(ConfigError::UnknownCaseStyle {
                style: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_style_from_str() {
        assert_eq!("lower-case".parse::<CaseStyle>().unwrap(), CaseStyle::LowerCase);
        assert_eq!("start-case".parse::<CaseStyle>().unwrap(), CaseStyle::StartCase);
        assert!("shout-case".parse::<CaseStyle>().is_err());
    }

    #[test]
    fn test_case_style_display() {
        assert_eq!(CaseStyle::SentenceCase.to_string(), "sentence-case");
        assert_eq!(CaseStyle::KebabCase.to_string(), "kebab-case");
    }

    #[test]
    fn test_lower_case() {
        assert!(CaseStyle::LowerCase.matches("add new feature"));
        assert!(!CaseStyle::LowerCase.matches("Add new feature"));
    }

    #[test]
    fn test_upper_case() {
        assert!(CaseStyle::UpperCase.matches("ADD NEW FEATURE"));
        assert!(!CaseStyle::UpperCase.matches("ADD new FEATURE"));
    }

    #[test]
    fn test_sentence_case() {
        assert!(CaseStyle::SentenceCase.matches("Add new feature"));
        assert!(!CaseStyle::SentenceCase.matches("add new feature"));
        assert!(!CaseStyle::SentenceCase.matches("Add New Feature"));
    }

    #[test]
    fn test_start_case() {
        assert!(CaseStyle::StartCase.matches("Add New Feature"));
        assert!(!CaseStyle::StartCase.matches("Add new feature"));
    }

    #[test]
    fn test_camel_and_pascal_case() {
        assert!(CaseStyle::CamelCase.matches("addNewFeature"));
        assert!(!CaseStyle::CamelCase.matches("AddNewFeature"));
        assert!(CaseStyle::PascalCase.matches("AddNewFeature"));
        assert!(!CaseStyle::PascalCase.matches("addNewFeature"));
    }

    #[test]
    fn test_kebab_and_snake_case() {
        assert!(CaseStyle::KebabCase.matches("add-new-feature"));
        assert!(!CaseStyle::KebabCase.matches("add_new_feature"));
        assert!(CaseStyle::SnakeCase.matches("add_new_feature"));
        assert!(!CaseStyle::SnakeCase.matches("add-new-feature"));
    }

    #[test]
    fn test_no_letters_satisfies_word_styles() {
        for style in [
            CaseStyle::LowerCase,
            CaseStyle::UpperCase,
            CaseStyle::SentenceCase,
            CaseStyle::StartCase,
        ] {
            assert!(style.matches("1234"), "{} rejected digits", style);
        }
    }
}
