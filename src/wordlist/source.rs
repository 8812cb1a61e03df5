//! Selection of the active word list for a generation call.

use super::{WordList, WordListError};

/// Where a generation call draws its words from.
#[derive(Debug, Clone, Copy, Default)]
pub enum WordSource<'a> {
    /// The cached built-in list.
    #[default]
    BuiltIn,
    /// A caller-supplied list, used for this call only.
    Custom(&'a WordList),
}

impl<'a> WordSource<'a> {
    /// Resolves the source to a word list.
    ///
    /// For [`WordSource::BuiltIn`] this may trigger the one-time load of
    /// the bundled resource. Custom lists bypass the cache entirely.
    pub fn resolve(self) -> Result<&'a WordList, WordListError> {
        match self {
            WordSource::BuiltIn => WordList::built_in(),
            WordSource::Custom(list) => Ok(list),
        }
    }
}

impl<'a> From<&'a WordList> for WordSource<'a> {
    fn from(list: &'a WordList) -> Self {
        WordSource::Custom(list)
    }
}
