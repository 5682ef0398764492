//! Test builders — ergonomic constructors for lexicons, normalizers and the
//! pipeline.
//!
//! These are for readability in assertions, not for production use. They
//! panic on invalid input rather than returning `Result`.

use std::collections::HashMap;
use std::sync::Arc;

use thesaurus_core::{
    IdentityNormalizer, LexicalDatabase, LookupError, MemoryLexicon, Normalizer, PartOfSpeech,
    Sense, SynonymEntry, Thesaurus,
};

// ---------------------------------------------------------------------------
// LexiconBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`MemoryLexicon`] fixtures.
///
/// # Example
///
/// ```rust
/// let lexicon = LexiconBuilder::new()
///     .sense("happy", PartOfSpeech::Adjective, &["glad", "cheerful"])
///     .synset(PartOfSpeech::Adjective, &["glad", "beaming"])
///     .build();
/// ```
#[derive(Default)]
pub struct LexiconBuilder {
    lexicon: MemoryLexicon,
}

impl LexiconBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sense reachable from `word` only.
    pub fn sense(mut self, word: &str, pos: PartOfSpeech, lemmas: &[&str]) -> Self {
        self.lexicon
            .add_sense(word, Sense::new(pos, lemmas.iter().copied()));
        self
    }

    /// A synset reachable from each of its lemmas.
    pub fn synset(mut self, pos: PartOfSpeech, lemmas: &[&str]) -> Self {
        self.lexicon.add_synset(pos, lemmas.iter().copied());
        self
    }

    pub fn build(self) -> MemoryLexicon {
        self.lexicon
    }
}

// ---------------------------------------------------------------------------
// Normalizers and databases
// ---------------------------------------------------------------------------

/// Normalizer backed by a fixed word → lemma table; unknown words pass
/// through unchanged.
#[derive(Default)]
pub struct MapNormalizer(HashMap<String, String>);

impl MapNormalizer {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(word, lemma)| (word.to_string(), lemma.to_string()))
                .collect(),
        )
    }
}

impl Normalizer for MapNormalizer {
    fn normalize(&self, word: &str) -> String {
        self.0.get(word).cloned().unwrap_or_else(|| word.to_string())
    }
}

/// Database whose every lookup fails.
pub struct FailingLexicon;

impl LexicalDatabase for FailingLexicon {
    fn senses(&self, word: &str) -> Result<Vec<Sense>, LookupError> {
        Err(LookupError::Unavailable(format!("lookup of {word:?} refused")))
    }
}

// ---------------------------------------------------------------------------
// Pipeline helpers
// ---------------------------------------------------------------------------

/// Pipeline over `lexicon` with an identity normalizer.
pub fn thesaurus(lexicon: MemoryLexicon) -> Thesaurus {
    Thesaurus::new(Arc::new(IdentityNormalizer), Arc::new(lexicon))
}

pub fn thesaurus_with(
    normalizer: impl Normalizer + 'static,
    database: impl LexicalDatabase + 'static,
) -> Thesaurus {
    Thesaurus::new(Arc::new(normalizer), Arc::new(database))
}

pub fn adj(synonym: &str) -> SynonymEntry {
    SynonymEntry::new(synonym, PartOfSpeech::Adjective)
}

pub fn verb(synonym: &str) -> SynonymEntry {
    SynonymEntry::new(synonym, PartOfSpeech::Verb)
}
