//! # CCBF Filter
//!
//! Bloom filter engine for dictionary-style membership checks: "is this word
//! possibly in the known set?" No false negatives, a bounded false-positive
//! rate, and a compact binary file format.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `BloomFilter`: Bit array plus insert/contains
//!   - `hash_functions`: k indices from one SHA-256 digest (double hashing)
//!   - `parameters`: Optimal m and k for a capacity and error rate
//!   - `BloomConfig` / `BloomConfigBuilder`: Validated sizing configuration
//!
//! - **Codec** (`codec`): CCBF v1 header and payload
//!
//! - **Ports Layer** (`ports/`): `FilterStore` trait
//!
//! - **Adapters Layer** (`adapters/`): `FileFilterStore`, `MemoryFilterStore`
//!
//! ## Invariants
//!
//! - No false negatives: if inserted, contains() MUST return true
//! - The bit array always holds ceil(m / 8) bytes; bits are never cleared
//!
//! ## Usage Example
//!
//! ```
//! use ccbf_filter::BloomFilter;
//!
//! let mut filter = BloomFilter::new(3, 0.1)?;
//! filter.insert("apple");
//! filter.insert("banana");
//! assert!(filter.contains("apple"));
//!
//! let restored = BloomFilter::from_bytes(&filter.to_bytes())?;
//! assert_eq!(restored, filter);
//! # Ok::<(), ccbf_filter::FilterError>(())
//! ```
//!
//! Keys are used exactly as given. Callers normalize case and whitespace
//! before both insert and query.

pub mod adapters;
pub mod codec;
pub mod domain;
pub mod error;
pub mod ports;

// Re-exports for convenience
pub use adapters::{FileFilterStore, MemoryFilterStore};
pub use codec::{Header, FORMAT_VERSION, HEADER_LEN, MAGIC};
pub use domain::{BloomConfig, BloomConfigBuilder, BloomFilter, BloomFilterParams};
pub use error::{FilterError, Result};
pub use ports::FilterStore;
