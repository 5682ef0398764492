//! Morphological base-form reduction over the loaded WordNet.
//!
//! Exception lists win over detachment rules; rules are applied repeatedly
//! until an indexed form turns up. Parts of speech are tried verb first, since
//! a bare inflected token is most often a verb form.

use std::collections::HashSet;

use thesaurus_core::{Normalizer, PartOfSpeech};

use crate::dict::{lemma_key, WordNet};

const SEARCH_ORDER: [PartOfSpeech; 4] = [
    PartOfSpeech::Verb,
    PartOfSpeech::Noun,
    PartOfSpeech::Adjective,
    PartOfSpeech::Adverb,
];

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJ_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

fn rules(pos: PartOfSpeech) -> &'static [(&'static str, &'static str)] {
    match pos {
        PartOfSpeech::Noun => NOUN_RULES,
        PartOfSpeech::Verb => VERB_RULES,
        PartOfSpeech::Adjective => ADJ_RULES,
        PartOfSpeech::Adverb => &[],
    }
}

fn detach(forms: &[String], pos: PartOfSpeech) -> Vec<String> {
    let mut seen = HashSet::new();
    forms
        .iter()
        .flat_map(|form| {
            rules(pos).iter().filter_map(move |(suffix, ending)| {
                form.strip_suffix(suffix)
                    .filter(|stem| !stem.is_empty())
                    .map(|stem| format!("{stem}{ending}"))
            })
        })
        .filter(|form| seen.insert(form.clone()))
        .collect()
}

impl WordNet {
    /// Base form of `word`, or `None` when no reduction applies.
    pub fn morphy(&self, word: &str) -> Option<String> {
        let key = lemma_key(word);
        if key.is_empty() {
            return None;
        }

        for pos in SEARCH_ORDER {
            if let Some(bases) = self.exceptions(pos).get(&key) {
                if let Some(base) = bases
                    .iter()
                    .find(|base| **base != key && self.contains(base, pos))
                {
                    return Some(base.clone());
                }
            }
        }

        for pos in SEARCH_ORDER {
            if self.contains(&key, pos) {
                continue;
            }
            let mut forms = vec![key.clone()];
            loop {
                forms = detach(&forms, pos);
                if forms.is_empty() {
                    break;
                }
                if let Some(hit) = forms.iter().find(|form| self.contains(form, pos)) {
                    return Some(hit.clone());
                }
            }
        }
        None
    }
}

impl Normalizer for WordNet {
    fn normalize(&self, word: &str) -> String {
        match self.morphy(word) {
            Some(base) => base,
            None if word.trim().is_empty() => word.to_string(),
            None => lemma_key(word),
        }
    }
}
