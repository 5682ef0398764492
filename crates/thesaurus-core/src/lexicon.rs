//! Collaborator seams — the two external capabilities the expansion pipeline
//! consumes: reducing a word to its base form, and listing a word's senses.
//!
//! Both traits are `Send + Sync` so a single loaded instance can be shared
//! read-only by every request. [`IdentityNormalizer`] and [`MemoryLexicon`]
//! are the in-process implementations; heavier backends (WordNet) live in
//! their own crates.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::types::{PartOfSpeech, Sense};

/// Reduces a word to its dictionary form.
///
/// Normalisation never fails: an implementation that cannot analyse the
/// input returns it unchanged.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, word: &str) -> String;
}

/// Lists the senses a word belongs to, in a stable order.
pub trait LexicalDatabase: Send + Sync {
    fn senses(&self, word: &str) -> Result<Vec<Sense>, LookupError>;
}

/// Failure reported by a [`LexicalDatabase`] backend.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("lexical database unavailable: {0}")]
    Unavailable(String),
}

// ---------------------------------------------------------------------------
// IdentityNormalizer
// ---------------------------------------------------------------------------

/// Normalizer that treats every word as already being in base form.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNormalizer;

impl Normalizer for IdentityNormalizer {
    fn normalize(&self, word: &str) -> String {
        word.to_string()
    }
}

// ---------------------------------------------------------------------------
// MemoryLexicon
// ---------------------------------------------------------------------------

/// Exact-key, in-memory lexical database.
///
/// Keys are matched byte for byte. Senses for a key are returned in the order
/// they were registered.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct MemoryLexicon {
    entries: HashMap<String, Vec<Sense>>,
}

impl MemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a synset. The sense is indexed under every one of its lemmas,
    /// the way a synonym network links all members of a synset.
    pub fn add_synset<I, S>(&mut self, part_of_speech: PartOfSpeech, lemmas: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sense = Sense::new(part_of_speech, lemmas);
        for lemma in &sense.lemmas {
            let senses = self.entries.entry(lemma.clone()).or_default();
            if !senses.contains(&sense) {
                senses.push(sense.clone());
            }
        }
        self
    }

    /// Attach a sense to a single key without indexing its other lemmas.
    pub fn add_sense(&mut self, word: impl Into<String>, sense: Sense) -> &mut Self {
        self.entries.entry(word.into()).or_default().push(sense);
        self
    }

    /// Load a lexicon from a JSON object mapping each word to its senses:
    ///
    /// ```json
    /// { "happy": [ { "part_of_speech": "adj", "lemmas": ["happy", "glad"] } ] }
    /// ```
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let lexicon: Self = serde_json::from_str(&text)?;
        tracing::debug!(path = %path.display(), words = lexicon.len(), "loaded json lexicon");
        Ok(lexicon)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LexicalDatabase for MemoryLexicon {
    fn senses(&self, word: &str) -> Result<Vec<Sense>, LookupError> {
        Ok(self.entries.get(word).cloned().unwrap_or_default())
    }
}
