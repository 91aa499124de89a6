//! Optimal Bloom filter parameter calculation
//!
//! Formulas:
//! - m = ceil(-n*ln(fpr) / (ln(2)^2))  -- optimal bits
//! - k = round((m/n) * ln(2))          -- optimal hash functions, at least 1

use std::f64::consts::LN_2;

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};

/// Largest bit count the CCBF header can carry
pub const MAX_BIT_COUNT: u64 = u32::MAX as u64;

/// Largest hash count the CCBF header can carry
pub const MAX_HASH_COUNT: u64 = u16::MAX as u64;

/// Bloom filter parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BloomFilterParams {
    /// Number of bits in the filter
    pub size_bits: u32,
    /// Number of hash functions
    pub hash_count: u16,
    /// Expected false positive rate at full capacity
    pub expected_fpr: f64,
}

/// Calculate optimal Bloom filter parameters for given constraints
///
/// # Arguments
/// * `num_elements` - Expected number of elements to insert (n), must be positive
/// * `target_fpr` - Target false positive rate, strictly between 0 and 1
///
/// # Errors
/// `InvalidParameters` for zero elements, `InvalidFPR` for a rate outside
/// (0, 1), and `FilterTooLarge` / `InvalidParameters` when the result does not
/// fit the 32-bit bit count or 16-bit hash count of the file header.
pub fn calculate_optimal_parameters(num_elements: u64, target_fpr: f64) -> Result<BloomFilterParams> {
    if num_elements == 0 {
        return Err(FilterError::InvalidParameters(
            "expected items must be positive".to_string(),
        ));
    }
    if !target_fpr.is_finite() || target_fpr <= 0.0 || target_fpr >= 1.0 {
        return Err(FilterError::InvalidFPR { fpr: target_fpr });
    }

    let n = num_elements as f64;
    let m = minimum_bits(n, target_fpr);
    if m > MAX_BIT_COUNT as f64 {
        return Err(FilterError::FilterTooLarge {
            size: m as u64,
            max: MAX_BIT_COUNT,
        });
    }
    let m = m as u64;

    let k = optimal_k(m, num_elements);
    if k > MAX_HASH_COUNT {
        return Err(FilterError::InvalidParameters(format!(
            "hash count {} exceeds maximum {}",
            k, MAX_HASH_COUNT
        )));
    }

    Ok(BloomFilterParams {
        size_bits: m as u32,
        hash_count: k as u16,
        expected_fpr: calculate_fpr(m, num_elements, k),
    })
}

/// Calculate the false positive rate for given parameters
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: u64, n: u64, k: u64) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powf(k as f64)
}

/// Calculate optimal k for given m and n, never below 1
pub fn optimal_k(m: u64, n: u64) -> u64 {
    if n == 0 {
        return 1;
    }
    let k = ((m as f64 / n as f64) * LN_2).round() as u64;
    k.max(1)
}

/// Minimum m for given n and target FPR, before any range check
fn minimum_bits(n: f64, target_fpr: f64) -> f64 {
    let ln2_squared = LN_2 * LN_2;
    (-n * target_fpr.ln() / ln2_squared).ceil().max(1.0)
}
