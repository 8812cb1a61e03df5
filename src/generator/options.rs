//! Passphrase generation options.

use super::{CasingStyle, SelectionMethod};
use serde::{Deserialize, Serialize};

/// Smallest number of words in a passphrase.
pub const MIN_WORDS: usize = 2;

/// Largest number of words in a passphrase.
pub const MAX_WORDS: usize = 10;

/// Word count used by [`GenerationOptions::default`].
pub const DEFAULT_WORDS: usize = 4;

/// Separator used by [`GenerationOptions::default`].
pub const DEFAULT_SEPARATOR: &str = "-";

/// Options controlling the shape of a passphrase.
///
/// The requested word count may be anything, including negative values;
/// it is clamped into `MIN_WORDS..=MAX_WORDS` when a passphrase is
/// generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Requested number of words, before clamping.
    pub word_count: i64,
    /// Inserted verbatim between consecutive words.
    pub separator: String,
    /// Casing applied to the selected words.
    pub casing: CasingStyle,
    /// How random values are reduced to word indices.
    pub selection: SelectionMethod,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            word_count: DEFAULT_WORDS as i64,
            separator: DEFAULT_SEPARATOR.to_string(),
            casing: CasingStyle::default(),
            selection: SelectionMethod::default(),
        }
    }
}

impl GenerationOptions {
    /// Creates options with the given word count, separator and casing.
    pub fn new(word_count: i64, separator: impl Into<String>, casing: CasingStyle) -> Self {
        Self {
            word_count,
            separator: separator.into(),
            casing,
            ..Default::default()
        }
    }

    /// Sets the index selection method.
    pub fn with_selection(mut self, selection: SelectionMethod) -> Self {
        self.selection = selection;
        self
    }

    /// Returns the word count actually used, clamped into range.
    pub fn effective_word_count(&self) -> usize {
        clamp_word_count(self.word_count)
    }

    /// Entropy in bits of a passphrase drawn from a list of `list_size` words.
    pub fn entropy_bits(&self, list_size: usize) -> f64 {
        crate::analysis::entropy(
            self.effective_word_count() as i64,
            i64::try_from(list_size).unwrap_or(i64::MAX),
        )
    }
}

/// Clamps a requested word count into `MIN_WORDS..=MAX_WORDS`.
pub fn clamp_word_count(requested: i64) -> usize {
    requested.clamp(MIN_WORDS as i64, MAX_WORDS as i64) as usize
}
