//! Casing styles applied to selected words.
//!
//! All transforms use Rust's Unicode case mapping, which is locale
//! independent, so output is identical across environments.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How each word of a passphrase is cased.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "camelCase")]
pub enum CasingStyle {
    /// Every word fully lowercased.
    #[default]
    #[value(name = "lowercase")]
    Lowercase,
    /// Every word fully uppercased.
    #[value(name = "uppercase")]
    Uppercase,
    /// First character uppercased, the rest lowercased, per word.
    #[value(name = "capitalize")]
    Capitalize,
    /// First word capitalized, all others lowercased.
    #[value(name = "sentenceCase", alias = "sentence-case")]
    SentenceCase,
    /// Even positions lowercased, odd positions uppercased (0-based).
    #[value(name = "alternating")]
    Alternating,
}

impl CasingStyle {
    /// All styles, in declaration order.
    pub const ALL: [CasingStyle; 5] = [
        CasingStyle::Lowercase,
        CasingStyle::Uppercase,
        CasingStyle::Capitalize,
        CasingStyle::SentenceCase,
        CasingStyle::Alternating,
    ];

    /// Canonical name, as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            CasingStyle::Lowercase => "lowercase",
            CasingStyle::Uppercase => "uppercase",
            CasingStyle::Capitalize => "capitalize",
            CasingStyle::SentenceCase => "sentenceCase",
            CasingStyle::Alternating => "alternating",
        }
    }

    /// Transforms the word at position `index` of a passphrase.
    pub fn transform(self, index: usize, word: &str) -> String {
        match self {
            CasingStyle::Lowercase => word.to_lowercase(),
            CasingStyle::Uppercase => word.to_uppercase(),
            CasingStyle::Capitalize => capitalize(word),
            CasingStyle::SentenceCase if index == 0 => capitalize(word),
            CasingStyle::SentenceCase => word.to_lowercase(),
            CasingStyle::Alternating if index % 2 == 0 => word.to_lowercase(),
            CasingStyle::Alternating => word.to_uppercase(),
        }
    }

    /// Transforms a sequence of words, preserving length and order.
    pub fn apply<S: AsRef<str>>(self, words: &[S]) -> Vec<String> {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| self.transform(i, w.as_ref()))
            .collect()
    }
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

impl fmt::Display for CasingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown casing style name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown casing style '{0}'")]
pub struct UnknownCasingStyle(pub String);

impl FromStr for CasingStyle {
    type Err = UnknownCasingStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CasingStyle::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| UnknownCasingStyle(s.to_string()))
    }
}
