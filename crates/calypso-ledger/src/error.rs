//! Ledger lookup error types.

use thiserror::Error;

/// Errors from reading write records off the ledger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The instance does not exist, or its payload is not a valid write
    /// record.
    #[error("write record not found: {0}")]
    NotFound(String),

    /// The instance exists but was created by a different contract.
    #[error("instance belongs to contract `{found}`, expected `{expected}`")]
    WrongContract {
        /// The write contract id.
        expected: String,
        /// The contract id stored on the instance.
        found: String,
    },

    /// The ledger could not be reached.
    #[error("ledger communication failed: {0}")]
    Communication(String),

    /// The chain configuration is outside the range the ledger accepts.
    #[error("invalid chain configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with it.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_contract_display() {
        let err = LedgerError::WrongContract {
            expected: "calypsoWrite".to_string(),
            found: "value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "instance belongs to contract `value`, expected `calypsoWrite`"
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = LedgerError::NotFound("instance:00".to_string());
        assert!(err.to_string().contains("instance:00"));
    }
}
