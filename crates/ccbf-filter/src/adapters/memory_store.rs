//! In-memory filter storage

use std::cell::RefCell;

use crate::codec;
use crate::domain::BloomFilter;
use crate::error::{FilterError, Result};
use crate::ports::FilterStore;

/// Keeps the serialized payload in a byte buffer
///
/// Goes through the same codec as the file store, so a load validates
/// exactly what a file load would.
#[derive(Debug, Default)]
pub struct MemoryFilterStore {
    payload: RefCell<Option<Vec<u8>>>,
}

impl MemoryFilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing payload, e.g. bytes received from elsewhere
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            payload: RefCell::new(Some(bytes)),
        }
    }

    /// Copy of the stored payload, if any
    pub fn bytes(&self) -> Option<Vec<u8>> {
        self.payload.borrow().clone()
    }
}

impl FilterStore for MemoryFilterStore {
    fn save(&self, filter: &BloomFilter) -> Result<()> {
        *self.payload.borrow_mut() = Some(codec::encode(filter));
        Ok(())
    }

    fn load(&self) -> Result<BloomFilter> {
        match self.payload.borrow().as_deref() {
            Some(bytes) => codec::decode(bytes),
            None => Err(FilterError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no filter stored",
            ))),
        }
    }
}
