//! Passphrase generation.
//!
//! Draws independent, uniformly random words (with replacement) from the
//! active word list using a cryptographically secure RNG, applies the
//! configured casing and joins the words with the separator.

mod casing;
mod options;
mod select;

pub use casing::{CasingStyle, UnknownCasingStyle};
pub use options::{
    clamp_word_count, GenerationOptions, DEFAULT_SEPARATOR, DEFAULT_WORDS, MAX_WORDS, MIN_WORDS,
};
pub use select::SelectionMethod;

use crate::wordlist::{WordListError, WordSource};
use rand_core::{CryptoRng, OsRng, RngCore};
use thiserror::Error;

/// Errors that can occur during generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    WordList(#[from] WordListError),
    #[error("secure random source failed: {0}")]
    RandomSource(#[source] rand_core::Error),
}

impl GenerateError {
    /// Returns true for failures the caller must not retry or work around.
    ///
    /// A custom list that is empty or holds an empty word, and a failed
    /// random source, are unrecoverable: continuing would either never
    /// terminate or produce weak output. Resource loading failures are
    /// recoverable.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GenerateError::RandomSource(_)
                | GenerateError::WordList(WordListError::Empty)
                | GenerateError::WordList(WordListError::EmptyWord { .. })
        )
    }
}

/// Passphrase generator backed by a cryptographically secure RNG.
///
/// The default generator reads from the operating system's entropy
/// source on every draw. Any other `CryptoRng` can be supplied with
/// [`Generator::with_rng`].
#[derive(Debug, Default)]
pub struct Generator<R = OsRng> {
    rng: R,
}

impl Generator<OsRng> {
    /// Creates a generator reading from the OS entropy source.
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl<R: RngCore + CryptoRng> Generator<R> {
    /// Creates a generator over the given secure RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a passphrase.
    pub fn generate(
        &mut self,
        options: &GenerationOptions,
        source: WordSource<'_>,
    ) -> Result<String, GenerateError> {
        let words = self.pick_words(options, source)?;
        Ok(options
            .casing
            .apply(&words)
            .join(options.separator.as_str()))
    }

    /// Selects the raw words for a passphrase, before casing.
    ///
    /// Returns exactly `options.effective_word_count()` words, each drawn
    /// independently from the resolved list.
    pub fn pick_words<'a>(
        &mut self,
        options: &GenerationOptions,
        source: WordSource<'a>,
    ) -> Result<Vec<&'a str>, GenerateError> {
        let list = source.resolve()?;
        let count = options.effective_word_count();

        tracing::trace!(
            word_count = count,
            list_size = list.len(),
            casing = %options.casing,
            selection = ?options.selection,
            "generating passphrase"
        );

        (0..count)
            .map(|_| {
                select::pick_index(&mut self.rng, list.len(), options.selection)
                    .map(|i| &list[i])
                    .map_err(GenerateError::RandomSource)
            })
            .collect()
    }
}
