//! Descriptive metadata for the built-in word list.

use crate::wordlist::{BUILT_IN_NAME, BUILT_IN_WORD_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata describing a word list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordListInfo {
    /// Display name.
    pub name: String,
    /// Number of words.
    pub word_count: usize,
    /// Bits of entropy contributed by each uniformly drawn word.
    pub entropy_per_word: f64,
    /// Free-text description.
    pub description: String,
}

/// Returns metadata for the built-in list.
///
/// The values are constant; calling this never loads the list.
pub fn word_list_info() -> WordListInfo {
    WordListInfo {
        name: BUILT_IN_NAME.to_string(),
        word_count: BUILT_IN_WORD_COUNT,
        entropy_per_word: (BUILT_IN_WORD_COUNT as f64).log2(),
        description: "7776 common English words of 3 to 9 lowercase letters, one per \
                      line. Each uniformly drawn word adds about 12.9 bits of entropy."
            .to_string(),
    }
}

impl fmt::Display for WordListInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "name:             {}", self.name)?;
        writeln!(f, "words:            {}", self.word_count)?;
        writeln!(f, "entropy per word: {:.3} bits", self.entropy_per_word)?;
        write!(f, "description:      {}", self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::WordList;

    #[test]
    fn test_info_is_stable() {
        assert_eq!(word_list_info(), word_list_info());
    }

    #[test]
    fn test_info_matches_built_in_list() {
        let info = word_list_info();
        let list = WordList::built_in().unwrap();

        assert_eq!(info.word_count, 7776);
        assert_eq!(info.word_count, list.len());
        assert!((info.entropy_per_word - list.entropy_per_word()).abs() < 1e-12);
        assert!((info.entropy_per_word - 12.925).abs() < 0.001);
    }

    #[test]
    fn test_display_lists_fields() {
        let text = word_list_info().to_string();
        assert!(text.contains("7776"));
        assert!(text.contains("12.925 bits"));
    }
}
