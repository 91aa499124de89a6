//! Core Bloom Filter implementation
//!
//! INVARIANTS:
//! - No false negatives: if inserted, contains() MUST return true
//! - Bits only ever go from 0 to 1; the bit array always holds ceil(m / 8) bytes

use bitvec::prelude::*;

use super::config::BloomConfig;
use super::hash_functions::compute_hash_positions;
use super::parameters::calculate_optimal_parameters;
use crate::codec::{self, Header};
use crate::error::{FilterError, Result};

/// Bloom filter for probabilistic membership testing
///
/// A Bloom filter is a space-efficient probabilistic data structure that
/// can test whether an element is a member of a set. False positives are
/// possible, but false negatives are not.
///
/// Keys are pre-normalized strings; the filter does no case folding or
/// trimming of its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BloomFilter {
    /// Bit array, bit `i` at byte `i / 8` under mask `1 << (i % 8)`
    bits: BitVec<u8, Lsb0>,
    /// Number of hash functions (k)
    k: u16,
    /// Size in bits (m)
    m: u32,
}

impl BloomFilter {
    /// Create a filter sized for `expected_items` at `target_fpr`
    ///
    /// # Example
    ///
    /// ```
    /// use ccbf_filter::BloomFilter;
    ///
    /// let filter = BloomFilter::new(1000, 0.01).unwrap();
    /// assert_eq!(filter.bit_count(), 9586);
    /// assert_eq!(filter.hash_count(), 7);
    /// ```
    pub fn new(expected_items: u64, target_fpr: f64) -> Result<Self> {
        let params = calculate_optimal_parameters(expected_items, target_fpr)?;
        Self::with_parameters(params.size_bits, params.hash_count)
    }

    /// Create a filter from a validated configuration
    pub fn from_config(config: &BloomConfig) -> Result<Self> {
        Self::new(config.expected_items, config.target_fpr)
    }

    /// Create an empty filter with explicit size and hash count
    pub fn with_parameters(m: u32, k: u16) -> Result<Self> {
        validate_parameters(m, k)?;
        Ok(Self {
            bits: bitvec![u8, Lsb0; 0; m as usize],
            k,
            m,
        })
    }

    /// Restore a filter from its parts, checking the bit array length
    pub(crate) fn from_parts(m: u32, k: u16, bytes: Vec<u8>) -> Result<Self> {
        validate_parameters(m, k)?;
        let expected = byte_len(m);
        if bytes.len() != expected {
            return Err(FilterError::BitArrayLength {
                expected,
                actual: bytes.len(),
            });
        }

        let mut bits = BitVec::<u8, Lsb0>::from_vec(bytes);
        bits.truncate(m as usize);
        Ok(Self { bits, k, m })
    }

    /// Insert an item into the filter
    ///
    /// After insertion, `contains(item)` is guaranteed to return true.
    /// Inserting the same item again leaves the bit array unchanged.
    pub fn insert(&mut self, item: &str) {
        for pos in self.hash_positions(item) {
            self.bits.set(pos, true);
        }
    }

    /// Test if an item might be in the filter
    ///
    /// Returns:
    /// - `true` if the item might be in the set (could be false positive)
    /// - `false` if the item is definitely NOT in the set (never false negative)
    pub fn contains(&self, item: &str) -> bool {
        self.hash_positions(item)
            .into_iter()
            .all(|pos| self.bits[pos])
    }

    /// The k bit positions an item maps to
    pub fn hash_positions(&self, item: &str) -> Vec<usize> {
        compute_hash_positions(item, self.k as usize, self.m as usize)
    }

    /// Merge another filter into this one (OR operation)
    ///
    /// After merge, this filter will match all items from both filters.
    pub fn merge(&mut self, other: &BloomFilter) -> Result<()> {
        if self.m != other.m || self.k != other.k {
            return Err(FilterError::IncompatibleFilters {
                left: (self.m, self.k),
                right: (other.m, other.k),
            });
        }

        let self_raw = self.bits.as_raw_mut_slice();
        let other_raw = other.bits.as_raw_slice();
        for (s, o) in self_raw.iter_mut().zip(other_raw.iter()) {
            *s |= *o;
        }
        Ok(())
    }

    /// Get the filter size in bits
    pub fn bit_count(&self) -> u32 {
        self.m
    }

    /// Get the number of hash functions
    pub fn hash_count(&self) -> u16 {
        self.k
    }

    /// Raw bit array, ceil(m / 8) bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_raw_slice()
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// True if no item has been inserted
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Fraction of bits set
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.m as f64
    }

    /// Estimated false positive rate from the current fill ratio
    ///
    /// Formula: FPR ≈ (bits_set / m)^k
    pub fn estimated_fpr(&self) -> f64 {
        self.fill_ratio().powf(self.k as f64)
    }

    /// CCBF header describing this filter
    pub fn header(&self) -> Header {
        Header::new(self.k, self.m)
    }

    /// Serialize the filter to the CCBF v1 format
    pub fn to_bytes(&self) -> Vec<u8> {
        codec::encode(self)
    }

    /// Deserialize a filter from the CCBF v1 format
    ///
    /// Sizing parameters come from the header as given; they are not
    /// recomputed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        codec::decode(bytes)
    }
}

/// Bytes needed to hold `m` bits
pub fn byte_len(m: u32) -> usize {
    (m as usize).div_ceil(8)
}

fn validate_parameters(m: u32, k: u16) -> Result<()> {
    if m == 0 {
        return Err(FilterError::InvalidParameters(
            "bit count must be at least 1".to_string(),
        ));
    }
    if k == 0 {
        return Err(FilterError::InvalidParameters(
            "hash count must be at least 1".to_string(),
        ));
    }
    Ok(())
}
