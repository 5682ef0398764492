//! Startup — builds the shared [`Thesaurus`] from configuration.
//!
//! Everything here runs once, before the server accepts traffic. Failures are
//! fatal and reported through `anyhow`.

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context};
use thesaurus_core::config::{Backend, Config, NormalizerKind, WordNetConfig};
use thesaurus_core::{IdentityNormalizer, LexicalDatabase, MemoryLexicon, Normalizer, Thesaurus};
use thesaurus_wordnet::WordNet;

/// Load both collaborators eagerly and assemble the pipeline.
pub fn build_thesaurus(config: &Config) -> anyhow::Result<Thesaurus> {
    let (normalizer, database): (Arc<dyn Normalizer>, Arc<dyn LexicalDatabase>) =
        match config.lexicon.backend {
            Backend::Wordnet => {
                let wordnet = Arc::new(load_wordnet(&config.wordnet)?);
                let normalizer: Arc<dyn Normalizer> = match config.lexicon.normalizer {
                    NormalizerKind::Morphy => wordnet.clone(),
                    NormalizerKind::Identity => Arc::new(IdentityNormalizer),
                };
                let database: Arc<dyn LexicalDatabase> = wordnet;
                (normalizer, database)
            }
            Backend::Json => {
                if config.lexicon.normalizer == NormalizerKind::Morphy {
                    bail!("the morphy normalizer requires the wordnet backend; set lexicon.normalizer = \"identity\"");
                }
                let path = config
                    .lexicon
                    .json_path
                    .as_deref()
                    .context("lexicon.json_path is required for the json backend")?;
                let lexicon = MemoryLexicon::from_json_file(path)
                    .with_context(|| format!("loading lexicon {}", path.display()))?;
                tracing::info!(path = %path.display(), words = lexicon.len(), "JSON lexicon loaded");
                let database: Arc<dyn LexicalDatabase> = Arc::new(lexicon);
                (Arc::new(IdentityNormalizer) as Arc<dyn Normalizer>, database)
            }
        };

    Ok(Thesaurus::new(normalizer, database).with_threshold(config.lexicon.expansion_threshold))
}

/// Load WordNet from the configured directory, downloading it first when it
/// is missing and downloads are enabled.
pub fn load_wordnet(config: &WordNetConfig) -> anyhow::Result<WordNet> {
    let dir = config.dict_dir();
    ensure_wordnet(config, &dir)?;
    WordNet::load(&dir).with_context(|| format!("loading WordNet from {}", dir.display()))
}

/// Make sure the dictionary files exist in `dir`, downloading them when
/// allowed.
fn ensure_wordnet(config: &WordNetConfig, dir: &Path) -> anyhow::Result<()> {
    if thesaurus_wordnet::dict_files_present(dir) {
        return Ok(());
    }
    if !config.download {
        bail!(
            "no WordNet dictionary in {} and wordnet.download is disabled",
            dir.display()
        );
    }
    thesaurus_wordnet::fetch(&config.download_url, dir, false)
        .with_context(|| format!("fetching WordNet into {}", dir.display()))?;
    Ok(())
}
