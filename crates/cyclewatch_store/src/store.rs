use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::SeriesDocument;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed series document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Flat-file JSON store, one pretty-printed document per series.
pub struct SeriesStore {
    data_dir: PathBuf,
}

impl SeriesStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}-historical.json"))
    }

    pub fn read(&self, key: &str) -> Result<SeriesDocument, StoreError> {
        let contents = fs::read_to_string(self.path_for(key))?;

        Ok(serde_json::from_str(&contents)?)
    }

    /// Whole-document write. The document lands via a rename, so a reader
    /// never observes a partially written file.
    pub fn write(&self, key: &str, document: &SeriesDocument) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir)?;

        let path = self.path_for(key);
        let staging = path.with_extension("json.tmp");

        fs::write(&staging, serde_json::to_string_pretty(document)?)?;
        fs::rename(&staging, &path)?;

        Ok(())
    }
}
