//! # Protocol Limits and Constants
//!
//! The sizes and tags every party to a write record must agree on.

use serde::{Deserialize, Serialize};

/// Width of the key material encrypted to the long-term secret: a 16-byte
/// AES-128 key followed by a 12-byte GCM nonce.
///
/// Bounded by the 29 bytes an Ed25519 point can embed.
pub const KEY_MATERIAL_LEN: usize = 28;

/// Contract identifier under which write records are stored on the ledger.
pub const WRITE_CONTRACT_ID: &str = "calypsoWrite";

/// Default maximum ledger block size, in bytes.
pub const DEFAULT_MAX_BLOCK_SIZE: usize = 4_000_000;

/// Bytes reserved per block for everything but the ciphertext.
pub const DEFAULT_METADATA_OVERHEAD: usize = 16_000;

/// Upper bound on the ciphertext carried by a single write record.
///
/// The ledger's block size minus its metadata overhead. The builder checks
/// it before doing any cryptographic work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayloadLimit(usize);

impl PayloadLimit {
    /// Create a limit of `max` bytes.
    pub const fn new(max: usize) -> Self {
        Self(max)
    }

    /// The maximum number of ciphertext bytes allowed.
    pub const fn max(&self) -> usize {
        self.0
    }

    /// Returns true if a payload of `len` bytes fits.
    pub const fn allows(&self, len: usize) -> bool {
        len <= self.0
    }
}

/// The limit of a chain running with the default block size and overhead.
impl Default for PayloadLimit {
    fn default() -> Self {
        Self(DEFAULT_MAX_BLOCK_SIZE - DEFAULT_METADATA_OVERHEAD)
    }
}

impl std::fmt::Display for PayloadLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bytes", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_is_inclusive() {
        let limit = PayloadLimit::new(10);
        assert!(limit.allows(0));
        assert!(limit.allows(10));
        assert!(!limit.allows(11));
    }

    #[test]
    fn test_default_limit_leaves_metadata_room() {
        let limit = PayloadLimit::default();
        assert_eq!(limit.max(), DEFAULT_MAX_BLOCK_SIZE - DEFAULT_METADATA_OVERHEAD);
        assert!(limit.allows(3_984_000));
        assert!(!limit.allows(3_984_001));
    }

    #[test]
    fn test_max_accessor_takes_no_argument() {
        let limit = PayloadLimit::new(42);
        let max: usize = limit.max();
        assert_eq!(max, 42);
        assert_eq!(PayloadLimit::new(max), limit);
    }

    #[test]
    fn test_limit_serializes_as_number() {
        let json = serde_json::to_string(&PayloadLimit::new(1024)).unwrap();
        assert_eq!(json, "1024");
    }
}
