// src/config.rs

//! Run configuration for the generator.
//!
//! Values come from three layers, later ones winning: built-in defaults,
//! an optional JSON config file, and command-line arguments. Every field
//! of the file is optional.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::codegen::is_c_identifier;
use crate::import::InputFormat;

/// Output path meaning "write to standard output".
pub const STDOUT_PATH: &str = "-";

// --- Top-Level Configuration Structure ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Color listing to read.
    pub input: PathBuf,
    /// Generated C file, or `-` for standard output.
    pub output: PathBuf,
    /// Line format of `input`.
    pub format: InputFormat,
    /// Reject triplet lines that do not have exactly three fields instead
    /// of skipping them.
    pub strict: bool,
    /// Names used in the generated source.
    pub codegen: CodegenConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from("rgb.txt"),
            output: PathBuf::from("colors.c"),
            format: InputFormat::Hex,
            strict: false,
            codegen: CodegenConfig::default(),
        }
    }
}

impl Config {
    /// Parses a JSON config document. Missing fields keep their defaults.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Config::from_json_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn writes_to_stdout(&self) -> bool {
        self.output.as_os_str() == STDOUT_PATH
    }

    /// Checks the generated identifiers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.codegen.validate()
    }
}

// --- Code Generation Names ---

/// Identifiers and the fallback name used in the generated C source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// Name of the struct typedef.
    pub type_name: String,
    /// Name of the static array.
    pub array_name: String,
    /// Name of the integer count constant.
    pub count_name: String,
    /// Name of the nearest-color function.
    pub function_name: String,
    /// Returned when no entry is closer than the initial bound.
    pub unknown_name: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        CodegenConfig {
            type_name: "Color".to_string(),
            array_name: "colors".to_string(),
            count_name: "color_count".to_string(),
            function_name: "find_closest_color".to_string(),
            unknown_name: "Unknown".to_string(),
        }
    }
}

impl CodegenConfig {
    fn identifiers(&self) -> [(&'static str, &str); 4] {
        [
            ("type_name", self.type_name.as_str()),
            ("array_name", self.array_name.as_str()),
            ("count_name", self.count_name.as_str()),
            ("function_name", self.function_name.as_str()),
        ]
    }

    /// All identifiers must be valid C identifiers and distinct, since they
    /// share C's ordinary identifier namespace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let identifiers = self.identifiers();
        for (i, &(field, value)) in identifiers.iter().enumerate() {
            if !is_c_identifier(value) {
                return Err(ConfigError::InvalidIdentifier {
                    field,
                    value: value.to_string(),
                });
            }
            let earlier = identifiers[..i]
                .iter()
                .find(|&&(_, other)| other == value)
                .map(|&(first, _)| first);
            if let Some(first) = earlier {
                return Err(ConfigError::DuplicateIdentifier {
                    first,
                    second: field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidIdentifier {
        field: &'static str,
        value: String,
    },
    DuplicateIdentifier {
        first: &'static str,
        second: &'static str,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidIdentifier { field, value } => {
                write!(f, "codegen.{} = {:?} is not a valid C identifier", field, value)
            }
            ConfigError::DuplicateIdentifier { first, second, value } => write!(
                f,
                "codegen.{} and codegen.{} are both {:?}",
                first, second, value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_defaults_match_legacy_names() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("rgb.txt"));
        assert_eq!(config.output, PathBuf::from("colors.c"));
        assert_eq!(config.format, InputFormat::Hex);
        assert!(!config.strict);
        assert_eq!(config.codegen.function_name, "find_closest_color");
        assert!(config.validate().is_ok());
    }

    #[test_log::test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json_str(
            r#"{ "format": "triplet", "codegen": { "array_name": "palette" } }"#,
        )
        .unwrap();
        assert_eq!(config.format, InputFormat::Triplet);
        assert_eq!(config.codegen.array_name, "palette");
        assert_eq!(config.codegen.type_name, "Color");
        assert_eq!(config.input, PathBuf::from("rgb.txt"));
    }

    #[test_log::test]
    fn test_unknown_fields_rejected() {
        assert!(Config::from_json_str(r#"{ "outptu": "x.c" }"#).is_err());
        assert!(Config::from_json_str(r#"{ "format": "csv" }"#).is_err());
    }

    #[test_log::test]
    fn test_invalid_identifier_rejected() {
        let mut config = Config::default();
        config.codegen.count_name = "2count".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidIdentifier {
                field: "count_name",
                value: "2count".to_string(),
            })
        );
    }

    #[test_log::test]
    fn test_duplicate_identifier_rejected() {
        let mut config = Config::default();
        config.codegen.function_name = "colors".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateIdentifier {
                first: "array_name",
                second: "function_name",
                value: "colors".to_string(),
            }
        );
    }

    #[test_log::test]
    fn test_stdout_output() {
        let mut config = Config::default();
        assert!(!config.writes_to_stdout());
        config.output = PathBuf::from("-");
        assert!(config.writes_to_stdout());
    }
}
