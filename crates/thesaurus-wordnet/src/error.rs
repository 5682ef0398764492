use std::io;
use std::path::PathBuf;

/// Errors raised while loading or fetching a WordNet dictionary.
#[derive(Debug, thiserror::Error)]
pub enum WordNetError {
    #[error("WordNet file {path} not found (run `thesaurus fetch` or set wordnet.dict_dir)")]
    MissingFile { path: PathBuf },
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{file}:{line}: {msg}")]
    Parse {
        file: String,
        line: usize,
        msg: String,
    },
    #[error("lemma index: {0}")]
    Index(#[from] fst::Error),
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("archive error: {0}")]
    Archive(String),
}

impl WordNetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(file: &str, line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            file: file.to_string(),
            line,
            msg: msg.into(),
        }
    }
}
