//! Passphrase strength estimates and word list metadata.
//!
//! Entropy figures assume every word is drawn independently and
//! uniformly, which is what the generator guarantees. They say nothing
//! about passphrases chosen by people.

mod entropy;
mod info;

pub use entropy::{entropy, entropy_built_in};
pub use info::{word_list_info, WordListInfo};
