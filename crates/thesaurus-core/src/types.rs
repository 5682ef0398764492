//! Core types for thesaurus-core.
//!
//! This module defines the data structures that flow through the expansion
//! pipeline: the [`SynonymEntry`] returned to callers, the [`Sense`] a lexical
//! database hands back for a lookup, and the [`PartOfSpeech`] tag both carry.

use serde::{Deserialize, Serialize};

/// One synonym in a response, tagged with the part of speech of the sense it
/// was found in.
///
/// Two entries are considered the same synonym when their `synonym` text is
/// equal; the tag plays no part in deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    /// Lemma surface form exactly as the lexical database spells it.
    pub synonym: String,
    /// Part of speech of the sense, not of the individual lemma.
    pub part_of_speech: PartOfSpeech,
}

impl SynonymEntry {
    pub fn new(synonym: impl Into<String>, part_of_speech: PartOfSpeech) -> Self {
        Self {
            synonym: synonym.into(),
            part_of_speech,
        }
    }
}

/// A single meaning of a word: a part-of-speech tag and the ordered lemmas
/// that share that meaning (a synset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub part_of_speech: PartOfSpeech,
    pub lemmas: Vec<String>,
}

impl Sense {
    pub fn new<I, S>(part_of_speech: PartOfSpeech, lemmas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            part_of_speech,
            lemmas: lemmas.into_iter().map(Into::into).collect(),
        }
    }
}

/// Part-of-speech tag, serialised with the WordNet lexicographer prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    #[serde(rename = "noun")]
    Noun,
    #[serde(rename = "verb")]
    Verb,
    #[serde(rename = "adj")]
    Adjective,
    #[serde(rename = "adv")]
    Adverb,
}

impl PartOfSpeech {
    /// Every tag, in the order lexical databases enumerate senses.
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adj",
            PartOfSpeech::Adverb => "adv",
        }
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
