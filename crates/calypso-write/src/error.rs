//! # Write Record Errors
//!
//! One enum per operation so callers handle exactly the failures that
//! operation can produce:
//!
//! - [`WriteError`]: building a record (precondition violations are
//!   reported before any cryptographic work).
//! - [`CodecError`]: decoding the wire format.
//! - [`VerifyError`]: the reason a proof check rejected.

use calypso_core::LtsId;
use calypso_crypto::CryptoError;
use thiserror::Error;

/// Error building a write record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    /// The ciphertext exceeds the ledger's payload limit.
    #[error("ciphertext of {size} bytes exceeds the payload limit of {max} bytes")]
    PayloadTooLarge {
        /// Ciphertext length.
        size: usize,
        /// Maximum allowed length.
        max: usize,
    },

    /// The key material does not have the embeddable width.
    #[error("invalid key material length: got {got} bytes but it must be {expected}")]
    InvalidKeyMaterialLength {
        /// Supplied length.
        got: usize,
        /// Required length.
        expected: usize,
    },

    /// Point embedding or derivation failed.
    #[error("cryptographic failure: {0}")]
    Crypto(#[from] CryptoError),
}

/// Error decoding a write record from its wire form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The bytes are truncated or not a valid message.
    #[error("malformed write record: {0}")]
    Malformed(#[from] prost::DecodeError),

    /// A mandatory field is absent.
    #[error("write record is missing mandatory field `{0}`")]
    MissingField(&'static str),

    /// A field failed group-layer validation.
    #[error("write record field `{field}` is invalid: {source}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// Validation failure.
        #[source]
        source: CryptoError,
    },

    /// The record's ciphertext exceeds the payload limit.
    #[error("ciphertext of {size} bytes exceeds the payload limit of {max} bytes")]
    PayloadTooLarge {
        /// Ciphertext length.
        size: usize,
        /// Maximum allowed length.
        max: usize,
    },
}

/// Reason a write proof was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// The record was encrypted under a different long-term secret.
    #[error("record is bound to lts {found}, expected {expected}")]
    LtsMismatch {
        /// Id of the long-term secret used for verification.
        expected: LtsId,
        /// Id stored in the record.
        found: LtsId,
    },

    /// A proof point is the identity.
    #[error("proof point `{0}` is the identity")]
    InvalidPoint(&'static str),

    /// The derived generator could not be computed.
    #[error("cannot derive generator: {0}")]
    Derivation(#[from] CryptoError),

    /// The recomputed challenge differs from the stored one.
    #[error("recreated proof is not equal to stored proof")]
    ChallengeMismatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_too_large_display() {
        let err = WriteError::PayloadTooLarge { size: 11, max: 10 };
        let msg = format!("{err}");
        assert!(msg.contains("11 bytes"));
        assert!(msg.contains("10 bytes"));
    }

    #[test]
    fn test_key_material_display() {
        let err = WriteError::InvalidKeyMaterialLength { got: 27, expected: 28 };
        assert_eq!(
            format!("{err}"),
            "invalid key material length: got 27 bytes but it must be 28"
        );
    }

    #[test]
    fn test_crypto_error_converts() {
        let err = WriteError::from(CryptoError::PointDerivation { attempts: 3 });
        assert!(matches!(err, WriteError::Crypto(_)));
    }

    #[test]
    fn test_invalid_field_keeps_source() {
        let err = CodecError::InvalidField {
            field: "u",
            source: CryptoError::InvalidEncoding("off curve".to_string()),
        };
        assert!(format!("{err}").contains("`u`"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
