//! Domain-specific assertion macros for thesaurus harnesses.
//!
//! These wrap `pretty_assertions` and say which output invariant was violated
//! instead of dumping two long vectors.

/// Assert that no synonym text occurs twice.
#[macro_export]
macro_rules! assert_no_duplicate_synonyms {
    ($entries:expr) => {{
        let entries: &[thesaurus_core::SynonymEntry] = &$entries;
        let mut seen = std::collections::HashSet::new();
        for entry in entries {
            if !seen.insert(entry.synonym.as_str()) {
                panic!(
                    "assert_no_duplicate_synonyms! failed: {:?} repeated in\n  {:?}",
                    entry.synonym,
                    entries.iter().map(|e| e.synonym.as_str()).collect::<Vec<_>>()
                );
            }
        }
    }};
}

/// Assert that no entry is spelled exactly like `word`.
#[macro_export]
macro_rules! assert_excludes {
    ($entries:expr, $word:expr) => {{
        let entries: &[thesaurus_core::SynonymEntry] = &$entries;
        let word: &str = $word;
        if let Some(at) = entries.iter().position(|e| e.synonym == word) {
            panic!(
                "assert_excludes! failed: input word {:?} returned as synonym at index {}",
                word, at
            );
        }
    }};
}

/// Assert the synonym texts, in order.
#[macro_export]
macro_rules! assert_synonyms {
    ($entries:expr, [$($word:expr),* $(,)?]) => {{
        let entries: &[thesaurus_core::SynonymEntry] = &$entries;
        let actual: Vec<&str> = entries.iter().map(|e| e.synonym.as_str()).collect();
        let expected: Vec<&str> = vec![$($word),*];
        pretty_assertions::assert_eq!(actual, expected);
    }};
}
