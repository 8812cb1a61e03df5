//! Memorable Passphrase Generation Library
//!
//! Generates human-memorable passphrases by drawing random words from a
//! word list and joining them with a separator in a chosen casing style.
//! Also reports the theoretical entropy of a configuration.
//!
//! # Architecture
//!
//! ```text
//! wordlist (built-in cache | custom) → generator (select → case → join)
//!                                          ↓
//!                                 analysis (entropy, metadata)
//! ```
//!
//! # Design Principles
//!
//! - **Secure randomness only**: words are drawn from the OS entropy
//!   source; a failing source is an error, never a fallback
//! - **Uniform selection**: each word is drawn independently, with
//!   replacement, without modulo bias by default
//! - **Load once**: the built-in list is parsed at most once per process
//!
//! # Example
//!
//! ```no_run
//! use passphrase_gen::{CasingStyle, GenerationOptions, Generator, WordSource};
//!
//! // Defaults: 4 lowercase words joined by "-"
//! let phrase = passphrase_gen::generate().unwrap();
//! assert_eq!(phrase.split('-').count(), 4);
//!
//! // Explicit options over the built-in list
//! let options = GenerationOptions::new(6, " ", CasingStyle::Capitalize);
//! let phrase = Generator::new()
//!     .generate(&options, WordSource::BuiltIn)
//!     .unwrap();
//!
//! println!("{phrase} ({:.1} bits)", options.entropy_bits(7776));
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod generator;
pub mod wordlist;

// Re-export commonly used types at crate root
pub use analysis::{entropy, entropy_built_in, word_list_info, WordListInfo};
pub use config::{ConfigError, FileConfig};
pub use generator::{CasingStyle, GenerateError, GenerationOptions, Generator, SelectionMethod};
pub use wordlist::{WordList, WordListError, WordSource, BUILT_IN_WORD_COUNT};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generates a passphrase with the defaults: 4 words, `"-"`, lowercase.
pub fn generate() -> Result<String, GenerateError> {
    Generator::new().generate(&GenerationOptions::default(), WordSource::BuiltIn)
}

/// Generates a passphrase from the built-in list.
///
/// `word_count` is clamped into `2..=10`.
pub fn generate_with(
    word_count: i64,
    separator: &str,
    casing: CasingStyle,
) -> Result<String, GenerateError> {
    let options = GenerationOptions::new(word_count, separator, casing);
    Generator::new().generate(&options, WordSource::BuiltIn)
}

/// Generates a passphrase from a caller-supplied list.
///
/// The list is used as given for this call only and never cached. An
/// empty list fails with [`WordListError::Empty`], which
/// [`GenerateError::is_fatal`] reports as unrecoverable, as does a list
/// containing an empty word ([`WordListError::EmptyWord`]).
pub fn generate_from<S: AsRef<str>>(
    word_count: i64,
    separator: &str,
    casing: CasingStyle,
    custom_words: &[S],
) -> Result<String, GenerateError> {
    let list = WordList::new(custom_words.iter().map(|w| w.as_ref().to_string()))?;
    let options = GenerationOptions::new(word_count, separator, casing);
    Generator::new().generate(&options, WordSource::Custom(&list))
}
