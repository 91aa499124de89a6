//! Bloom filter configuration and validation
//!
//! # Example
//!
//! ```
//! use ccbf_filter::domain::BloomConfigBuilder;
//!
//! let config = BloomConfigBuilder::new()
//!     .expected_items(235_000)
//!     .target_fpr(0.01)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.expected_items, 235_000);
//! ```

use serde::{Deserialize, Serialize};

use super::parameters::{calculate_optimal_parameters, BloomFilterParams};
use crate::error::Result;

/// Sizing configuration for a new filter
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BloomConfig {
    /// Expected number of items (capacity)
    pub expected_items: u64,
    /// Target false positive rate, strictly between 0 and 1
    pub target_fpr: f64,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            expected_items: 1000,
            target_fpr: 0.01, // 1% false positive rate
        }
    }
}

impl BloomConfig {
    /// Create a new configuration with validation
    pub fn new(expected_items: u64, target_fpr: f64) -> Result<Self> {
        let config = Self {
            expected_items,
            target_fpr,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate that the configuration yields a representable filter
    pub fn validate(&self) -> Result<()> {
        self.parameters().map(|_| ())
    }

    /// Optimal sizing for this configuration
    pub fn parameters(&self) -> Result<BloomFilterParams> {
        calculate_optimal_parameters(self.expected_items, self.target_fpr)
    }

    /// Builder-style method to set target FPR
    pub fn with_target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = fpr;
        self
    }

    /// Builder-style method to set expected items
    pub fn with_expected_items(mut self, items: u64) -> Self {
        self.expected_items = items;
        self
    }
}

/// Builder for BloomConfig with validation
#[derive(Default)]
pub struct BloomConfigBuilder {
    expected_items: Option<u64>,
    target_fpr: Option<f64>,
}

impl BloomConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the expected number of items
    pub fn expected_items(mut self, items: u64) -> Self {
        self.expected_items = Some(items);
        self
    }

    /// Set target false positive rate
    pub fn target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = Some(fpr);
        self
    }

    /// Build the BloomConfig, validating all parameters
    pub fn build(self) -> Result<BloomConfig> {
        let defaults = BloomConfig::default();

        let config = BloomConfig {
            expected_items: self.expected_items.unwrap_or(defaults.expected_items),
            target_fpr: self.target_fpr.unwrap_or(defaults.target_fpr),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;

    #[test]
    fn test_default_config_is_valid() {
        let config = BloomConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.target_fpr, 0.01);
    }

    #[test]
    fn test_config_validation_rejects_fpr_out_of_range() {
        let config = BloomConfig {
            target_fpr: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FilterError::InvalidFPR { .. })
        ));

        let config = BloomConfig::default().with_target_fpr(0.0);
        assert!(matches!(
            config.validate(),
            Err(FilterError::InvalidFPR { .. })
        ));
    }

    #[test]
    fn test_config_validation_rejects_zero_items() {
        let result = BloomConfig::new(0, 0.01);
        assert!(matches!(result, Err(FilterError::InvalidParameters(_))));
    }

    #[test]
    fn test_config_parameters_match_formula() {
        let params = BloomConfig::new(1000, 0.01).unwrap().parameters().unwrap();
        assert_eq!(params.size_bits, 9586);
        assert_eq!(params.hash_count, 7);
    }

    #[test]
    fn test_builder_creates_valid_config() {
        let config = BloomConfigBuilder::new()
            .expected_items(500)
            .target_fpr(0.05)
            .build()
            .expect("Should create valid config");

        assert_eq!(config.expected_items, 500);
        assert_eq!(config.target_fpr, 0.05);
    }

    #[test]
    fn test_builder_rejects_invalid_fpr() {
        let result = BloomConfigBuilder::new().target_fpr(2.0).build();
        assert!(matches!(result, Err(FilterError::InvalidFPR { .. })));
    }

    #[test]
    fn test_builder_uses_defaults() {
        let config = BloomConfigBuilder::new()
            .target_fpr(0.05)
            .build()
            .expect("Should use defaults for other fields");

        assert_eq!(config.expected_items, BloomConfig::default().expected_items);
    }

    #[test]
    fn test_builder_chaining() {
        let config1 = BloomConfigBuilder::new()
            .target_fpr(0.05)
            .expected_items(50)
            .build()
            .unwrap();

        let config2 = BloomConfigBuilder::new()
            .expected_items(50)
            .target_fpr(0.05)
            .build()
            .unwrap();

        assert_eq!(config1, config2);
    }
}
