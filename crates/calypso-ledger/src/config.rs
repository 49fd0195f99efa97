//! # Chain Configuration
//!
//! The ledger parameters a writer needs: the maximum block size and the
//! space reserved in each block for transaction metadata. What is left is
//! the largest ciphertext a single write record may carry.

use calypso_core::limits::{DEFAULT_MAX_BLOCK_SIZE, DEFAULT_METADATA_OVERHEAD};
use calypso_core::PayloadLimit;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Smallest block size the ledger accepts.
pub const MIN_BLOCK_SIZE: usize = 16_000;

/// Largest block size the ledger accepts.
pub const MAX_BLOCK_SIZE: usize = 8_000_000;

/// Ledger parameters relevant to write records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Maximum block size in bytes.
    pub max_block_size: usize,
    /// Bytes of each block taken by transaction metadata.
    pub metadata_overhead: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            max_block_size: DEFAULT_MAX_BLOCK_SIZE,
            metadata_overhead: DEFAULT_METADATA_OVERHEAD,
        }
    }
}

impl ChainConfig {
    /// Check that the block size is within the accepted range.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if !(MIN_BLOCK_SIZE..=MAX_BLOCK_SIZE).contains(&self.max_block_size) {
            return Err(LedgerError::InvalidConfig {
                reason: format!(
                    "max_block_size {} outside [{MIN_BLOCK_SIZE}, {MAX_BLOCK_SIZE}]",
                    self.max_block_size
                ),
            });
        }
        Ok(())
    }

    /// The largest ciphertext a write record may carry on this chain.
    pub fn payload_limit(&self) -> PayloadLimit {
        PayloadLimit::new(self.max_block_size.saturating_sub(self.metadata_overhead))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_payload_limit() {
        let config = ChainConfig::default();
        assert_eq!(config.payload_limit().max(), 4_000_000 - 16_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_matches_builder_default_limit() {
        assert_eq!(ChainConfig::default().payload_limit(), PayloadLimit::default());
    }

    #[test]
    fn test_overhead_larger_than_block_saturates() {
        let config = ChainConfig {
            max_block_size: 16_000,
            metadata_overhead: 20_000,
        };
        assert_eq!(config.payload_limit().max(), 0);
    }

    #[test]
    fn test_block_size_bounds() {
        for (size, ok) in [(15_999, false), (16_000, true), (8_000_000, true), (8_000_001, false)] {
            let config = ChainConfig {
                max_block_size: size,
                ..ChainConfig::default()
            };
            assert_eq!(config.validate().is_ok(), ok, "size {size}");
        }
    }

    #[test]
    fn test_yaml_missing_fields_use_defaults() {
        let config: ChainConfig = serde_yaml::from_str("max_block_size: 1000000\n").unwrap();
        assert_eq!(config.max_block_size, 1_000_000);
        assert_eq!(config.metadata_overhead, DEFAULT_METADATA_OVERHEAD);
    }
}
