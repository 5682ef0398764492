//! Dictionary download — pulls the NLTK `wordnet.zip` corpus and extracts the
//! dict files into a directory.

use std::fs;
use std::io::{self, Cursor, Read, Seek};
use std::path::Path;

use crate::dict::{dict_files_present, DICT_FILES};
use crate::error::WordNetError;

/// Upper bound on the archive size accepted from the network.
const MAX_ARCHIVE_BYTES: u64 = 64 * 1024 * 1024;

/// Download the archive at `url` into `dest` unless the dictionary is already
/// there. `force` re-downloads regardless. Returns the number of files
/// written.
pub fn fetch(url: &str, dest: &Path, force: bool) -> Result<usize, WordNetError> {
    if !force && dict_files_present(dest) {
        tracing::info!(dir = %dest.display(), "WordNet already present, skipping download");
        return Ok(0);
    }

    tracing::info!(%url, dir = %dest.display(), "downloading WordNet");
    let body = ureq::get(url)
        .call()
        .map_err(|e| WordNetError::Http(format!("{url}: {e}")))?
        .into_body()
        .with_config()
        .limit(MAX_ARCHIVE_BYTES)
        .read_to_vec()
        .map_err(|e| WordNetError::Http(format!("{url}: {e}")))?;

    let count = extract(Cursor::new(body), dest)?;
    tracing::info!(files = count, dir = %dest.display(), "WordNet extracted");
    Ok(count)
}

/// Extract known dict files from a zip archive into `dest`. Entries are
/// matched and written by basename only, so archive paths cannot escape
/// `dest`.
pub fn extract<R: Read + Seek>(reader: R, dest: &Path) -> Result<usize, WordNetError> {
    fs::create_dir_all(dest).map_err(|e| WordNetError::io(dest, e))?;

    let mut archive = zip::ZipArchive::new(reader).map_err(archive_err)?;
    let mut count = 0;
    for i in 0..archive.len() {
        let mut file = archive.by_index(i).map_err(archive_err)?;
        if file.is_dir() {
            continue;
        }
        let raw_name = file.name().to_string();
        let Some(basename) = Path::new(&raw_name).file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !DICT_FILES.contains(&basename) {
            continue;
        }
        install(&mut file, &dest.join(basename))?;
        tracing::debug!(file = basename, "extracted");
        count += 1;
    }

    if !dict_files_present(dest) {
        return Err(WordNetError::Archive(
            "archive did not contain a complete WordNet dictionary".to_string(),
        ));
    }
    Ok(count)
}

/// Copy `src` to `out_path` through a `.part` sibling so an interrupted copy
/// never leaves a truncated dictionary file under its final name.
fn install<R: Read>(src: &mut R, out_path: &Path) -> Result<(), WordNetError> {
    let part = out_path.with_extension(match out_path.extension() {
        Some(ext) => format!("{}.part", ext.to_string_lossy()),
        None => "part".to_string(),
    });

    let copied = fs::File::create(&part).and_then(|mut out| io::copy(src, &mut out));
    if let Err(e) = copied {
        let _ = fs::remove_file(&part);
        return Err(WordNetError::io(out_path, e));
    }
    fs::rename(&part, out_path).map_err(|e| WordNetError::io(out_path, e))
}

fn archive_err(e: impl std::fmt::Display) -> WordNetError {
    WordNetError::Archive(e.to_string())
}
