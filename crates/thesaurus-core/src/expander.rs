//! Synonym expansion — normalise, look up, expand once when sparse, dedupe.
//!
//! ```text
//! word ──► Normalizer ──► lemma ──► round 1 ──┬── 0 or ≥ threshold ──► result
//!                                             └── 1..threshold ──► round 2 ──► dedupe ──► result
//! ```
//!
//! Exclusion always compares lemma text against the caller's raw word, in both
//! rounds. Deduplication only runs when round 2 ran, so a dense round 1 is
//! returned with its internal repeats.

use std::collections::HashSet;
use std::sync::Arc;

use crate::lexicon::{LexicalDatabase, LookupError, Normalizer};
use crate::types::SynonymEntry;

/// Round-1 counts strictly below this (and above zero) trigger round 2.
pub const DEFAULT_EXPANSION_THRESHOLD: usize = 10;

/// Long-lived pipeline context shared by every request.
///
/// Holds the two collaborators behind trait objects so backends can be
/// swapped without touching the algorithm.
pub struct Thesaurus {
    normalizer: Arc<dyn Normalizer>,
    database: Arc<dyn LexicalDatabase>,
    threshold: usize,
}

impl std::fmt::Debug for Thesaurus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Thesaurus")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

impl Thesaurus {
    pub fn new(normalizer: Arc<dyn Normalizer>, database: Arc<dyn LexicalDatabase>) -> Self {
        Self {
            normalizer,
            database,
            threshold: DEFAULT_EXPANSION_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Synonyms for `word`, expanded one hop when round 1 is sparse.
    pub fn synonyms(&self, word: &str) -> Result<Vec<SynonymEntry>, LookupError> {
        let lemma = self.normalizer.normalize(word);
        let first = lookup_round(self.database.as_ref(), &lemma, word)?;

        if !needs_expansion(first.len(), self.threshold) {
            tracing::debug!(word, %lemma, round1 = first.len(), "no expansion");
            return Ok(first);
        }

        let second = expand_round(self.database.as_ref(), &first, word)?;
        tracing::debug!(
            word,
            %lemma,
            round1 = first.len(),
            round2 = second.len(),
            "expanded sparse result"
        );

        let mut combined = first;
        combined.extend(second);
        Ok(dedupe(combined))
    }
}

/// Whether a round-1 result of `count` entries is sparse enough to expand.
pub fn needs_expansion(count: usize, threshold: usize) -> bool {
    count > 0 && count < threshold
}

/// One lookup of `key`: every lemma of every sense, in database order, minus
/// lemmas spelled exactly like `exclude`.
pub fn lookup_round(
    database: &dyn LexicalDatabase,
    key: &str,
    exclude: &str,
) -> Result<Vec<SynonymEntry>, LookupError> {
    let senses = database.senses(key)?;
    Ok(senses
        .iter()
        .flat_map(|sense| {
            sense
                .lemmas
                .iter()
                .filter(|lemma| lemma.as_str() != exclude)
                .map(|lemma| SynonymEntry::new(lemma.clone(), sense.part_of_speech))
        })
        .collect())
}

/// Look up every seed's synonym text once more and concatenate the results.
/// One hop only; seeds are not deduplicated first.
pub fn expand_round(
    database: &dyn LexicalDatabase,
    seeds: &[SynonymEntry],
    exclude: &str,
) -> Result<Vec<SynonymEntry>, LookupError> {
    let mut out = Vec::new();
    for seed in seeds {
        out.extend(lookup_round(database, &seed.synonym, exclude)?);
    }
    Ok(out)
}

/// Keep the first entry for each synonym text, preserving order.
pub fn dedupe(entries: Vec<SynonymEntry>) -> Vec<SynonymEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.synonym.clone()))
        .collect()
}
