//! Bundled English word list.
//!
//! The resource is embedded at compile time and parsed on first access.
//! The parsed list (or the load failure) is cached in a `OnceLock`, so
//! concurrent first callers trigger exactly one parse and every caller
//! observes the same immutable list afterwards.

use super::{WordList, WordListError};
use std::sync::OnceLock;

/// Display name of the built-in list.
pub const BUILT_IN_NAME: &str = "English (7776 words)";

/// Number of words in the built-in list.
pub const BUILT_IN_WORD_COUNT: usize = 7776;

/// Smallest word count accepted from the built-in resource.
///
/// Anything shorter indicates a truncated or corrupted resource rather
/// than a legitimately short list.
pub const BUILT_IN_MIN_WORDS: usize = 1000;

const BUILT_IN_RAW: &str = include_str!("english.txt");

type Cell = OnceLock<Result<WordList, WordListError>>;

static BUILT_IN: Cell = OnceLock::new();

impl WordList {
    /// Returns the built-in word list, parsing it on first use.
    pub fn built_in() -> Result<&'static WordList, WordListError> {
        cached(&BUILT_IN, || load_resource(BUILT_IN_RAW))
    }
}

/// Runs `load` on the first access to `cell` and hands every caller the
/// stored outcome. A failed load is cached too and never retried.
fn cached(
    cell: &Cell,
    load: impl FnOnce() -> Result<WordList, WordListError>,
) -> Result<&WordList, WordListError> {
    cell.get_or_init(load).as_ref().map_err(Clone::clone)
}

fn load_resource(raw: &str) -> Result<WordList, WordListError> {
    let list = WordList::parse(raw).map_err(|_| WordListError::Invalid {
        count: 0,
        minimum: BUILT_IN_MIN_WORDS,
    })?;

    if list.len() < BUILT_IN_MIN_WORDS {
        return Err(WordListError::Invalid {
            count: list.len(),
            minimum: BUILT_IN_MIN_WORDS,
        });
    }

    tracing::debug!(words = list.len(), "built-in word list loaded");
    Ok(list)
}
