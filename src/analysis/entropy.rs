//! Theoretical passphrase entropy.

use crate::wordlist::BUILT_IN_WORD_COUNT;

/// Returns `word_count * log2(list_size)` in bits.
///
/// Returns `0.0` when either input is zero or negative. The word count
/// is used as given, without clamping. For the built-in list use
/// [`entropy_built_in`], or pass `BUILT_IN_WORD_COUNT` as `list_size`.
pub fn entropy(word_count: i64, list_size: i64) -> f64 {
    if word_count <= 0 || list_size <= 0 {
        return 0.0;
    }
    word_count as f64 * (list_size as f64).log2()
}

/// Entropy of `word_count` words drawn from the built-in 7776-word list.
pub fn entropy_built_in(word_count: i64) -> f64 {
    entropy(word_count, BUILT_IN_WORD_COUNT as i64)
}
