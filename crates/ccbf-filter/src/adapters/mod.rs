//! Adapters Layer (Driven Adapters)
//!
//! Implementations of the `FilterStore` port.
//!
//! ## Adapters
//!
//! - `FileFilterStore` - One file per filter, whole-file read and write
//! - `MemoryFilterStore` - In-process byte buffer

pub mod file_store;
pub mod memory_store;

pub use file_store::FileFilterStore;
pub use memory_store::MemoryFilterStore;
