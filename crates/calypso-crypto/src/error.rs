//! # Cryptographic Error Types
//!
//! Structured errors for the group arithmetic and point embedding in
//! `calypso-crypto`. Uses `thiserror` for derive-based `Display`.

use thiserror::Error;

/// Errors from cryptographic operations in the Calypso workspace.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Bytes did not decode to a valid group element or scalar.
    ///
    /// Covers wrong lengths, off-curve points, points outside the
    /// prime-order subgroup, the identity, and non-canonical scalars.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// No valid point was found within the attempt budget.
    #[error("point derivation failed after {attempts} attempts")]
    PointDerivation {
        /// Number of candidates tried.
        attempts: usize,
    },

    /// Data is longer than a point can carry.
    #[error("cannot embed {len} bytes, a point carries at most {capacity}")]
    EmbedCapacity {
        /// Length of the data that was supplied.
        len: usize,
        /// Maximum embeddable length.
        capacity: usize,
    },
}
