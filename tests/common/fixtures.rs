//! Static lexicons used across harnesses.
//!
//! [`standard_lexicon`] is the in-memory fixture: each headword is shaped to
//! land on one side of the expansion threshold. [`write_mini_wordnet`] lays
//! down a tiny but well-formed WordNet `dict/` directory.

use std::fs;
use std::path::Path;

use thesaurus_core::{MemoryLexicon, PartOfSpeech};

use super::builders::LexiconBuilder;

/// In-memory lexicon covering every branch of the pipeline:
///
/// | word     | round-1 count | round 2? |
/// |----------|---------------|----------|
/// | `happy`  | 3             | yes      |
/// | `small`  | 9             | yes      |
/// | `big`    | 10 (one dup)  | no       |
/// | `huge`   | 11 (dups)     | no       |
/// | `lonely` | 0             | no       |
pub fn standard_lexicon() -> MemoryLexicon {
    use PartOfSpeech::*;

    LexiconBuilder::new()
        // happy → sparse, expands through glad / cheerful / felicitous
        .sense("happy", Adjective, &["glad", "cheerful", "felicitous"])
        .sense("glad", Adjective, &["glad", "beaming"])
        .sense("glad", Verb, &["gladden"])
        .sense("cheerful", Adjective, &["cheerful", "sunny", "happy"])
        .sense("felicitous", Adjective, &["apt", "glad"])
        // small → nine, one under the threshold
        .sense(
            "small",
            Adjective,
            &["little", "minor", "tiny", "wee", "slight", "petite", "minuscule", "diminutive", "teensy"],
        )
        .sense("little", Adjective, &["little", "small", "bitty"])
        .sense("tiny", Noun, &["tiny", "tot"])
        // big → exactly ten, "large" twice
        .sense("big", Adjective, &["large", "huge", "great"])
        .sense("big", Adjective, &["large", "grown", "bad"])
        .sense("big", Adjective, &["heavy", "boastful", "big", "vast", "enormous"])
        // huge → eleven with repeats
        .sense("huge", Adjective, &["huge", "vast", "immense", "vast", "enormous", "giant"])
        .sense("huge", Adjective, &["vast", "colossal", "enormous", "mammoth", "titanic", "huge", "gigantic"])
        // lonely → only itself
        .sense("lonely", Adjective, &["lonely"])
        .build()
}

// ---------------------------------------------------------------------------
// Mini WordNet dictionary
// ---------------------------------------------------------------------------

const LICENSE: &str = "  1 This software and database is being provided to you, the LICENSEE,\n  2 by Princeton University under the following license.\n";

const DATA_NOUN: &str = "\
00001000 05 n 02 dog 0 domestic_dog 0 000 | a member of the genus Canis
00001200 04 n 02 running 0 running_play 0 000 | a football play
00001300 05 n 02 goose 0 Anser 0 000 | web-footed long-necked bird
";

const DATA_VERB: &str = "\
00002000 38 v 03 run 0 scat 0 scamper 0 000 | move fast by using one's feet
00002100 38 v 02 dog 0 chase 0 000 | go after with the intent to catch
00002200 42 v 02 be 0 exist 0 000 | have an existence
00002300 35 v 01 box 0 000 | put into a box
";

const DATA_ADJ: &str = "\
00003000 00 a 02 happy 0 glad 0 000 | enjoying or showing well-being
00003100 00 s 03 felicitous 0 happy 0 galore(ip) 0 000 | marked by good fortune
00003200 00 a 01 good 0 000 | having desirable or positive qualities
";

const DATA_ADV: &str = "\
00004000 02 r 02 happily 0 merrily 0 000 | in a happy manner
";

const INDEX_NOUN: &str = "\
anser n 1 0 1 0 00001300
dog n 1 0 1 0 00001000
domestic_dog n 1 0 1 0 00001000
goose n 1 0 1 0 00001300
running n 1 0 1 0 00001200
running_play n 1 0 1 0 00001200
";

const INDEX_VERB: &str = "\
be v 1 0 1 0 00002200
box v 1 0 1 0 00002300
chase v 1 0 1 0 00002100
dog v 1 0 1 0 00002100
exist v 1 0 1 0 00002200
run v 1 0 1 0 00002000
scamper v 1 0 1 0 00002000
scat v 1 0 1 0 00002000
";

const INDEX_ADJ: &str = "\
felicitous a 1 0 1 0 00003100
galore a 1 0 1 0 00003100
glad a 1 0 1 0 00003000
good a 1 0 1 0 00003200
happy a 2 1 & 2 0 00003000 00003100
";

const INDEX_ADV: &str = "\
happily r 1 0 1 0 00004000
merrily r 1 0 1 0 00004000
";

/// Number of synsets in the mini dictionary.
pub const MINI_SYNSETS: usize = 11;
/// Number of distinct lemma keys in the mini dictionary.
pub const MINI_LEMMAS: usize = 20;

/// Write the mini dictionary into `dir`. Exception lists are included unless
/// `with_exceptions` is false.
pub fn write_mini_wordnet(dir: &Path, with_exceptions: bool) {
    let files = [
        ("data.noun", DATA_NOUN),
        ("data.verb", DATA_VERB),
        ("data.adj", DATA_ADJ),
        ("data.adv", DATA_ADV),
        ("index.noun", INDEX_NOUN),
        ("index.verb", INDEX_VERB),
        ("index.adj", INDEX_ADJ),
        ("index.adv", INDEX_ADV),
    ];
    for (name, body) in files {
        fs::write(dir.join(name), format!("{LICENSE}{body}")).unwrap();
    }

    if with_exceptions {
        fs::write(dir.join("noun.exc"), "geese goose\n").unwrap();
        fs::write(dir.join("verb.exc"), "is be\nran run\nrunning run\nwas be\n").unwrap();
        fs::write(dir.join("adj.exc"), "better good well\n").unwrap();
        fs::write(dir.join("adv.exc"), "").unwrap();
    }
}
