//! Error types for the Bloom filter engine

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, FilterError>;

/// Errors that can occur while building, restoring or persisting a filter
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Invalid file format - missing CCBF signature")]
    InvalidFormat,

    #[error("Truncated header: {len} bytes, expected at least 12")]
    TruncatedHeader { len: usize },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u16 },

    #[error("Bit array length mismatch: expected {expected} bytes, found {actual}")]
    BitArrayLength { expected: usize, actual: usize },

    #[error("Invalid filter parameters: {0}")]
    InvalidParameters(String),

    #[error("Invalid false positive rate: {fpr} (must be between 0 and 1, exclusive)")]
    InvalidFPR { fpr: f64 },

    #[error("Filter size exceeds maximum: {size} > {max}")]
    FilterTooLarge { size: u64, max: u64 },

    #[error("Cannot merge filters with different parameters: {left:?} vs {right:?}")]
    IncompatibleFilters {
        left: (u32, u16),
        right: (u32, u16),
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FilterError {
    /// True for errors caused by bytes that are not a CCBF v1 filter
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            FilterError::InvalidFormat
                | FilterError::TruncatedHeader { .. }
                | FilterError::BitArrayLength { .. }
        )
    }
}
