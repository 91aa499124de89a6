//! Domain Layer - Pure logic
//!
//! This layer contains:
//! - Core Bloom filter implementation
//! - Hash index derivation
//! - Parameter calculations
//! - Configuration
//!
//! RULES:
//! - No I/O operations (persistence goes through `ports::FilterStore`)
//! - No logging

pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod parameters;

pub use bloom_filter::BloomFilter;
pub use config::{BloomConfig, BloomConfigBuilder};
pub use parameters::{calculate_fpr, calculate_optimal_parameters, BloomFilterParams};
