//! File-backed filter storage
//!
//! Each operation is one blocking whole-file `std::fs` call. The file holds
//! exactly the CCBF v1 payload: 12-byte header plus the bit array.

use std::fs;
use std::path::{Path, PathBuf};

use crate::codec;
use crate::domain::BloomFilter;
use crate::error::Result;
use crate::ports::FilterStore;

/// Stores a single filter at a fixed path
#[derive(Clone, Debug)]
pub struct FileFilterStore {
    path: PathBuf,
}

impl FileFilterStore {
    /// Create a store for `path`; nothing is touched until save/load
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the filter file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FilterStore for FileFilterStore {
    fn save(&self, filter: &BloomFilter) -> Result<()> {
        fs::write(&self.path, codec::encode(filter))?;
        Ok(())
    }

    fn load(&self) -> Result<BloomFilter> {
        let data = fs::read(&self.path)?;
        codec::decode(&data)
    }
}

impl BloomFilter {
    /// Write the filter to `path`, replacing any existing file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        FileFilterStore::new(path.as_ref()).save(self)
    }

    /// Read a filter previously written with `save_to_file`
    ///
    /// Surfaces `InvalidFormat` and `UnsupportedVersion` for files that are
    /// not CCBF v1, and `Io` when the file cannot be read.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        FileFilterStore::new(path.as_ref()).load()
    }
}
