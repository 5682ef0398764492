//! thesaurus-core — synonym lookup with one-hop expansion.
//!
//! This crate holds everything that is independent of a particular lexical
//! backend: the shared types, the two collaborator traits, the expansion
//! pipeline and the configuration model.
//!
//! # Pipeline
//!
//! ```text
//! word ──► Normalizer ──► LexicalDatabase (round 1) ──► [round 2] ──► [dedupe]
//! ```
//!
//! Nothing here holds per-request state; a [`Thesaurus`] is built once and
//! shared read-only.

pub mod config;
pub mod expander;
pub mod lexicon;
pub mod types;

pub use expander::{Thesaurus, DEFAULT_EXPANSION_THRESHOLD};
pub use lexicon::{IdentityNormalizer, LexicalDatabase, LookupError, MemoryLexicon, Normalizer};
pub use types::{PartOfSpeech, Sense, SynonymEntry};
