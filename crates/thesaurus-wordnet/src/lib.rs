//! thesaurus-wordnet — Princeton WordNet as a thesaurus backend.
//!
//! [`WordNet`] loads a WordNet 3.x `dict/` directory into memory and serves
//! both collaborator roles: it is a [`LexicalDatabase`](thesaurus_core::LexicalDatabase)
//! and, through morphy-style reduction, a [`Normalizer`](thesaurus_core::Normalizer).
//! [`fetch`] downloads the dictionary when it is not on disk yet.

pub mod dict;
pub mod error;
pub mod fetch;
pub mod morphy;

pub use dict::{dict_files_present, lemma_key, WordNet, DICT_FILES};
pub use error::WordNetError;
pub use fetch::fetch;
