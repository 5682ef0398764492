//! WordNet `dict/` directory loader.
//!
//! Reads the four `data.*` files (synsets), the four `index.*` files (lemma →
//! synset offsets) and the `*.exc` exception lists into memory. Lemma keys are
//! kept in an FST map whose values point into a postings table, one synset
//! list per part of speech.
//!
//! File format: one record per line, space separated, license header lines
//! start with two spaces. See `wndb(5WN)`.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use thesaurus_core::{LexicalDatabase, LookupError, PartOfSpeech, Sense};

use crate::error::WordNetError;

/// Part of speech paired with the suffix of its dictionary files, in sense
/// enumeration order.
pub(crate) const POS_FILES: [(PartOfSpeech, &str); 4] = [
    (PartOfSpeech::Noun, "noun"),
    (PartOfSpeech::Verb, "verb"),
    (PartOfSpeech::Adjective, "adj"),
    (PartOfSpeech::Adverb, "adv"),
];

/// Every file name the loader reads.
#[rustfmt::skip]
pub const DICT_FILES: [&str; 12] = [
    "data.noun", "data.verb", "data.adj", "data.adv",
    "index.noun", "index.verb", "index.adj", "index.adv",
    "noun.exc", "verb.exc", "adj.exc", "adv.exc",
];

/// Synset indices for one lemma, one list per part of speech.
type Postings = [Vec<u32>; 4];

#[derive(Debug)]
struct Synset {
    pos: PartOfSpeech,
    words: Vec<String>,
}

/// An in-memory WordNet database.
pub struct WordNet {
    index: fst::Map<Vec<u8>>,
    postings: Vec<Postings>,
    synsets: Vec<Synset>,
    exceptions: [HashMap<String, Vec<String>>; 4],
}

impl std::fmt::Debug for WordNet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordNet")
            .field("lemmas", &self.lemma_count())
            .field("synsets", &self.synset_count())
            .finish()
    }
}

pub(crate) fn slot(pos: PartOfSpeech) -> usize {
    match pos {
        PartOfSpeech::Noun => 0,
        PartOfSpeech::Verb => 1,
        PartOfSpeech::Adjective => 2,
        PartOfSpeech::Adverb => 3,
    }
}

/// Index form of a word: lowercase, `_` for spaces.
pub fn lemma_key(word: &str) -> String {
    word.trim().to_lowercase().replace(' ', "_")
}

/// True when `dir` holds every data and index file.
pub fn dict_files_present(dir: &Path) -> bool {
    DICT_FILES
        .iter()
        .filter(|name| !name.ends_with(".exc"))
        .all(|name| dir.join(name).is_file())
}

impl WordNet {
    /// Load a dictionary directory eagerly. Data and index files are
    /// required; a missing exception list is treated as empty.
    pub fn load(dir: &Path) -> Result<Self, WordNetError> {
        let mut synsets = Vec::new();
        let mut offsets: [HashMap<u64, u32>; 4] = Default::default();

        for (pos, suffix) in POS_FILES {
            let name = format!("data.{suffix}");
            let text = read_required(dir, &name)?;
            for (lineno, line) in records(&text) {
                let (offset, words) = parse_data_line(line)
                    .map_err(|msg| WordNetError::parse(&name, lineno, msg))?;
                let id = u32::try_from(synsets.len())
                    .map_err(|_| WordNetError::parse(&name, lineno, "too many synsets"))?;
                offsets[slot(pos)].insert(offset, id);
                synsets.push(Synset { pos, words });
            }
        }

        let mut lemmas: BTreeMap<String, Postings> = BTreeMap::new();
        for (pos, suffix) in POS_FILES {
            let name = format!("index.{suffix}");
            let text = read_required(dir, &name)?;
            for (lineno, line) in records(&text) {
                let (lemma, entry_offsets) = parse_index_line(line)
                    .map_err(|msg| WordNetError::parse(&name, lineno, msg))?;
                let ids = entry_offsets
                    .into_iter()
                    .map(|offset| {
                        offsets[slot(pos)].get(&offset).copied().ok_or_else(|| {
                            WordNetError::parse(&name, lineno, format!("unknown synset offset {offset:08}"))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                lemmas.entry(lemma.to_string()).or_default()[slot(pos)] = ids;
            }
        }

        let mut exceptions: [HashMap<String, Vec<String>>; 4] = Default::default();
        for (pos, suffix) in POS_FILES {
            let name = format!("{suffix}.exc");
            let path = dir.join(&name);
            if !path.is_file() {
                tracing::warn!(file = %path.display(), "exception list missing, continuing without it");
                continue;
            }
            let text = read_file(&path)?;
            for (_, line) in records(&text) {
                let mut tokens = line.split_whitespace();
                if let Some(inflected) = tokens.next() {
                    let bases: Vec<String> = tokens.map(str::to_string).collect();
                    if !bases.is_empty() {
                        exceptions[slot(pos)].insert(inflected.to_string(), bases);
                    }
                }
            }
        }

        let postings: Vec<Postings> = lemmas.values().cloned().collect();
        let index = fst::Map::from_iter(lemmas.keys().zip(0u64..))?;

        let wordnet = Self {
            index,
            postings,
            synsets,
            exceptions,
        };
        tracing::info!(
            dir = %dir.display(),
            lemmas = wordnet.lemma_count(),
            synsets = wordnet.synset_count(),
            "WordNet loaded"
        );
        Ok(wordnet)
    }

    pub fn lemma_count(&self) -> usize {
        self.postings.len()
    }

    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    /// Whether `lemma` (already in index form) is listed under `pos`.
    pub fn contains(&self, lemma: &str, pos: PartOfSpeech) -> bool {
        self.postings_for(lemma)
            .is_some_and(|postings| !postings[slot(pos)].is_empty())
    }

    pub(crate) fn exceptions(&self, pos: PartOfSpeech) -> &HashMap<String, Vec<String>> {
        &self.exceptions[slot(pos)]
    }

    fn postings_for(&self, key: &str) -> Option<&Postings> {
        let at = self.index.get(key)?;
        self.postings.get(usize::try_from(at).ok()?)
    }
}

impl LexicalDatabase for WordNet {
    fn senses(&self, word: &str) -> Result<Vec<Sense>, LookupError> {
        let Some(postings) = self.postings_for(&lemma_key(word)) else {
            return Ok(Vec::new());
        };
        Ok(postings
            .iter()
            .flatten()
            .filter_map(|&id| self.synsets.get(id as usize))
            .map(|synset| Sense::new(synset.pos, synset.words.iter().cloned()))
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Line parsers
// ---------------------------------------------------------------------------

/// Non-empty, non-header lines with 1-based line numbers.
fn records(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with(' '))
}

/// `offset lex_filenum ss_type w_cnt word lex_id [word lex_id ...] ...`
fn parse_data_line(line: &str) -> Result<(u64, Vec<String>), String> {
    let mut tokens = line.split_whitespace();
    let offset = tokens
        .next()
        .and_then(|t| t.parse::<u64>().ok())
        .ok_or("bad synset offset")?;
    let _lex_filenum = tokens.next().ok_or("missing lex_filenum")?;
    let _ss_type = tokens.next().ok_or("missing ss_type")?;
    let w_cnt = tokens
        .next()
        .and_then(|t| usize::from_str_radix(t, 16).ok())
        .ok_or("bad word count")?;

    let mut words = Vec::with_capacity(w_cnt);
    for _ in 0..w_cnt {
        let word = tokens.next().ok_or("truncated word list")?;
        tokens.next().ok_or("missing lex_id")?;
        words.push(strip_marker(word).to_string());
    }
    Ok((offset, words))
}

/// `lemma pos synset_cnt p_cnt [ptr_symbol ...] sense_cnt tagsense_cnt offset ...`
fn parse_index_line(line: &str) -> Result<(&str, Vec<u64>), String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 4 {
        return Err("truncated index record".to_string());
    }
    let synset_cnt: usize = tokens[2].parse().map_err(|_| "bad synset_cnt")?;
    if tokens.len() < 4 + synset_cnt {
        return Err("fewer offsets than synset_cnt".to_string());
    }
    let offsets = tokens[tokens.len() - synset_cnt..]
        .iter()
        .map(|t| t.parse::<u64>().map_err(|_| format!("bad offset {t:?}")))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((tokens[0], offsets))
}

/// Drop an adjective position marker: `galore(ip)` → `galore`.
fn strip_marker(word: &str) -> &str {
    match word.find('(') {
        Some(at) if word.ends_with(')') => &word[..at],
        _ => word,
    }
}

fn read_required(dir: &Path, name: &str) -> Result<String, WordNetError> {
    let path = dir.join(name);
    if !path.is_file() {
        return Err(WordNetError::MissingFile { path });
    }
    read_file(&path)
}

fn read_file(path: &Path) -> Result<String, WordNetError> {
    let bytes = fs::read(path).map_err(|e| WordNetError::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
