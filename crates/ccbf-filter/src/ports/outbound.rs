//! Outbound Ports (Driven Ports)
//!
//! Storage for serialized filters. Implementations move whole CCBF v1
//! payloads; encoding and validation stay in the codec.

use crate::domain::BloomFilter;
use crate::error::Result;

/// Persistent home for a single filter (Driven Port)
///
/// `save` either writes the complete payload or fails; `load` either
/// returns a fully validated filter or fails. No partial states.
pub trait FilterStore {
    /// Persist the filter, replacing whatever was stored before
    fn save(&self, filter: &BloomFilter) -> Result<()>;

    /// Restore the stored filter
    fn load(&self) -> Result<BloomFilter>;
}
