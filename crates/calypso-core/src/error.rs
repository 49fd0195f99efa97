//! # Error Types
//!
//! Errors raised while constructing or parsing the foundational types.
//! Crate-specific failures (cryptography, codec, ledger) live in their own
//! crates; this enum only covers identifier validation.

use thiserror::Error;

/// Error constructing or parsing a core identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The identifier was empty.
    #[error("{kind} must not be empty")]
    EmptyIdentifier {
        /// Which identifier kind was being constructed.
        kind: &'static str,
    },

    /// The identifier had the wrong length.
    #[error("{kind} must be {expected} bytes, got {got}")]
    InvalidLength {
        /// Which identifier kind was being constructed.
        kind: &'static str,
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        got: usize,
    },

    /// Hex decoding failed.
    #[error("invalid hex for {kind}: {reason}")]
    InvalidHex {
        /// Which identifier kind was being parsed.
        kind: &'static str,
        /// Decoder diagnostic.
        reason: String,
    },
}
