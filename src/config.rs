//! File configuration for the command-line tool.
//!
//! The library itself reads no configuration; everything here feeds the
//! binary, which layers command-line flags on top.

use crate::generator::GenerationOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Most passphrases printed by one invocation.
pub const MAX_OUTPUT_COUNT: u32 = 1000;

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid output count {0} (must be 1-1000)")]
    InvalidCount(u32),
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
///
/// ```toml
/// [generation]
/// word_count = 5
/// separator = "."
/// casing = "capitalize"
/// selection = "unbiased"
///
/// [wordlist]
/// path = "/usr/share/passphrase/words.txt"
///
/// [output]
/// count = 3
/// show_entropy = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Passphrase shape.
    #[serde(default)]
    pub generation: GenerationOptions,
    /// Word list selection.
    #[serde(default)]
    pub wordlist: WordListConfig,
    /// What the binary prints.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Word list selection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WordListConfig {
    /// Newline-delimited custom list. The built-in list is used when unset.
    pub path: Option<PathBuf>,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Number of passphrases to print.
    pub count: u32,
    /// Report the entropy of the effective configuration.
    pub show_entropy: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            count: 1,
            show_entropy: false,
        }
    }
}

impl OutputConfig {
    /// Validates the output settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 || self.count > MAX_OUTPUT_COUNT {
            return Err(ConfigError::InvalidCount(self.count));
        }
        Ok(())
    }
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Word counts are not checked here; out-of-range values are clamped
    /// when a passphrase is generated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.output.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{CasingStyle, SelectionMethod};

    #[test]
    fn test_default_config_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.wordlist.path.is_none());
    }

    #[test]
    fn test_full_config_parses() {
        let config = FileConfig::from_toml(
            r#"
            [generation]
            word_count = 6
            separator = " "
            casing = "sentenceCase"
            selection = "modulo"

            [wordlist]
            path = "words.txt"

            [output]
            count = 3
            show_entropy = true
            "#,
        )
        .unwrap();

        assert_eq!(config.generation.word_count, 6);
        assert_eq!(config.generation.separator, " ");
        assert_eq!(config.generation.casing, CasingStyle::SentenceCase);
        assert_eq!(config.generation.selection, SelectionMethod::Modulo);
        assert_eq!(config.wordlist.path, Some(PathBuf::from("words.txt")));
        assert_eq!(config.output.count, 3);
        assert!(config.output.show_entropy);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = FileConfig::from_toml("").unwrap();
        assert_eq!(config.generation, GenerationOptions::default());
        assert_eq!(config.output.count, 1);
    }

    #[test]
    fn test_out_of_range_word_count_accepted() {
        let config = FileConfig::from_toml("[generation]\nword_count = -3\n").unwrap();
        assert_eq!(config.generation.effective_word_count(), 2);
    }

    #[test]
    fn test_zero_count_invalid() {
        assert!(matches!(
            FileConfig::from_toml("[output]\ncount = 0\n"),
            Err(ConfigError::InvalidCount(0))
        ));
    }

    #[test]
    fn test_unknown_casing_rejected() {
        assert!(matches!(
            FileConfig::from_toml("[generation]\ncasing = \"title\"\n"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            FileConfig::from_file("/nonexistent/passphrase-gen.toml"),
            Err(ConfigError::FileReadError(_))
        ));
    }
}
