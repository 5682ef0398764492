//! Configuration types for thesaurus.
//!
//! [`Config::load`] layers, lowest to highest: the embedded defaults, the
//! config file (`~/.config/thesaurus/config.toml` unless a path is given), and
//! `THESAURUS_<SECTION>__<KEY>` environment variables. [`Config::defaults`]
//! returns the embedded defaults without touching the filesystem (useful in
//! tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 5000

[lexicon]
backend             = "wordnet"
normalizer          = "morphy"
expansion_threshold = 10

[wordnet]
download     = true
download_url = "https://raw.githubusercontent.com/nltk/nltk_data/gh-pages/packages/corpora/wordnet.zip"

[log]
filter = "info"
"#;

const ENV_PREFIX: &str = "THESAURUS";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub lexicon: LexiconConfig,
    #[serde(default)]
    pub wordnet: WordNetConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 5000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which lexical database answers lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Wordnet,
    Json,
}

/// Which normalizer reduces words to their base form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizerKind {
    Morphy,
    Identity,
}

/// `[lexicon]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LexiconConfig {
    #[serde(default = "default_backend")]
    pub backend: Backend,
    #[serde(default = "default_normalizer")]
    pub normalizer: NormalizerKind,
    /// Word → senses JSON file; required by the `json` backend.
    #[serde(default)]
    pub json_path: Option<PathBuf>,
    #[serde(default = "default_expansion_threshold")]
    pub expansion_threshold: usize,
}

fn default_backend() -> Backend { Backend::Wordnet }
fn default_normalizer() -> NormalizerKind { NormalizerKind::Morphy }
fn default_expansion_threshold() -> usize { crate::expander::DEFAULT_EXPANSION_THRESHOLD }

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            normalizer: default_normalizer(),
            json_path: None,
            expansion_threshold: default_expansion_threshold(),
        }
    }
}

/// `[wordnet]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct WordNetConfig {
    #[serde(default)]
    pub dict_dir: Option<PathBuf>,
    #[serde(default = "default_download")]
    pub download: bool,
    #[serde(default = "default_download_url")]
    pub download_url: String,
}

fn default_download() -> bool { true }
fn default_download_url() -> String {
    "https://raw.githubusercontent.com/nltk/nltk_data/gh-pages/packages/corpora/wordnet.zip"
        .to_string()
}

impl Default for WordNetConfig {
    fn default() -> Self {
        Self {
            dict_dir: None,
            download: default_download(),
            download_url: default_download_url(),
        }
    }
}

impl WordNetConfig {
    /// The configured dictionary directory, or the per-user data directory.
    pub fn dict_dir(&self) -> PathBuf {
        self.dict_dir.clone().unwrap_or_else(data_path)
    }
}

/// `[log]` section. `RUST_LOG` takes precedence over `filter`.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String { "info".to_string() }

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load configuration layered on top of the built-in defaults.
    ///
    /// An explicit `path` must exist; the default path is optional.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
}

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
        .join("thesaurus")
        .join("config.toml")
}

fn data_path() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local").join("share"))
        .join("thesaurus")
        .join("wordnet")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
