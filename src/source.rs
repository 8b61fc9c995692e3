//! Discovery of word files on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::ingest::WordFile;

/// File extension of word-list files
pub const WORD_FILE_EXTENSION: &str = "txt";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to list word files in {path}: {source}")]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("failed to read word file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },

    #[error("word file name is not valid UTF-8: {path}")]
    NonUtf8Name { path: PathBuf },
}

/// Read one word file; its name is the file stem.
pub fn read_file(path: &Path) -> Result<WordFile, SourceError> {
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| SourceError::NonUtf8Name {
            path: path.to_path_buf(),
        })?;
    let text = fs::read_to_string(path).map_err(|source| SourceError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(WordFile::new(name, text))
}

/// Read every `*.txt` file directly inside `dir`, sorted by file name.
pub fn read_dir(dir: &Path) -> Result<Vec<WordFile>, SourceError> {
    let read_dir_err = |source| SourceError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();
        let is_word_file = path.is_file()
            && path.extension().and_then(|ext| ext.to_str()) == Some(WORD_FILE_EXTENSION);
        if is_word_file {
            paths.push(path);
        }
    }
    paths.sort();

    debug!(dir = %dir.display(), files = paths.len(), "discovered word files");
    paths.iter().map(|path| read_file(path)).collect()
}
