//! Candidate word corpora.
//!
//! A [`WordList`] is an ordered, immutable sequence of non-empty words.
//! Passphrases draw from either the bundled built-in list, parsed once
//! and cached for the lifetime of the process, or a caller-supplied list
//! used for a single generation call.

mod builtin;
mod list;
mod source;

pub use builtin::{BUILT_IN_MIN_WORDS, BUILT_IN_NAME, BUILT_IN_WORD_COUNT};
pub use list::{WordList, WordListError};
pub use source::WordSource;
