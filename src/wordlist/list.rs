//! Validated word list container.

use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while building or loading a word list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordListError {
    #[error("word list not found: {0}")]
    NotFound(String),
    #[error("failed to read word list: {0}")]
    Unreadable(String),
    #[error("invalid word list: {count} words, expected at least {minimum}")]
    Invalid { count: usize, minimum: usize },
    #[error("word list has {count} words, more than the maximum of {maximum}")]
    TooLarge { count: usize, maximum: usize },
    #[error("word list is empty")]
    Empty,
    #[error("word at position {index} is empty")]
    EmptyWord { index: usize },
}

/// An ordered, non-empty sequence of candidate words.
///
/// Once built the list never changes. Words are kept in the order they
/// were supplied, and duplicates are not removed: a caller-supplied list
/// is used exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Builds a list from caller-supplied words.
    ///
    /// Returns [`WordListError::Empty`] if no words are supplied and
    /// [`WordListError::EmptyWord`] if any supplied word is `""`.
    pub fn new<I, S>(words: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        if let Some(index) = words.iter().position(String::is_empty) {
            return Err(WordListError::EmptyWord { index });
        }
        // Indices are drawn from 32-bit random values.
        if words.len() > u32::MAX as usize {
            return Err(WordListError::TooLarge {
                count: words.len(),
                maximum: u32::MAX as usize,
            });
        }
        Ok(Self { words })
    }

    /// Parses newline-delimited text into a list.
    ///
    /// Each line is trimmed and blank lines are discarded.
    pub fn parse(text: &str) -> Result<Self, WordListError> {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        )
    }

    /// Loads a newline-delimited list from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => WordListError::NotFound(path.display().to_string()),
            _ => WordListError::Unreadable(format!("{}: {}", path.display(), e)),
        })?;
        Self::parse(&text)
    }

    /// Returns the number of words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; a `WordList` cannot be constructed empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the word at `index`, if in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Returns true if `word` is in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Iterates over the words in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Entropy contributed by one uniformly drawn word, in bits.
    pub fn entropy_per_word(&self) -> f64 {
        (self.words.len() as f64).log2()
    }
}

impl std::ops::Index<usize> for WordList {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.words[index]
    }
}
