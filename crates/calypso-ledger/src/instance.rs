//! # Ledger Instances
//!
//! The ledger stores contract instances: an id, the id of the contract that
//! created the instance, and an opaque payload. Write records live in
//! instances created by the `calypsoWrite` contract.
//!
//! [`LedgerClient`] is the one capability this crate needs from a ledger.
//! Implementations may block on network I/O; failures are reported once
//! and never retried here.

use calypso_core::InstanceId;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// A contract instance as stored on the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Instance identifier.
    pub id: InstanceId,
    /// Id of the contract that created the instance.
    pub contract_id: String,
    /// Contract-specific payload.
    pub payload: Vec<u8>,
}

impl Instance {
    /// Create an instance.
    pub fn new(id: InstanceId, contract_id: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            id,
            contract_id: contract_id.into(),
            payload,
        }
    }
}

/// Read access to ledger instances.
///
/// Implementations must be `Send + Sync` so a single client can be shared
/// across threads.
pub trait LedgerClient: Send + Sync {
    /// Fetch the instance with the given id.
    ///
    /// Returns [`LedgerError::NotFound`] if no such instance exists and
    /// [`LedgerError::Communication`] if the ledger could not be reached.
    fn get_instance(&self, id: &InstanceId) -> Result<Instance, LedgerError>;
}

impl<T: LedgerClient + ?Sized> LedgerClient for &T {
    fn get_instance(&self, id: &InstanceId) -> Result<Instance, LedgerError> {
        (**self).get_instance(id)
    }
}

impl<T: LedgerClient + ?Sized> LedgerClient for std::sync::Arc<T> {
    fn get_instance(&self, id: &InstanceId) -> Result<Instance, LedgerError> {
        (**self).get_instance(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unreachable;

    impl LedgerClient for Unreachable {
        fn get_instance(&self, _id: &InstanceId) -> Result<Instance, LedgerError> {
            Err(LedgerError::Communication("connection refused".to_string()))
        }
    }

    #[test]
    fn test_trait_is_object_safe() {
        let client: Box<dyn LedgerClient> = Box::new(Unreachable);
        let err = client
            .get_instance(&InstanceId::from_bytes([0u8; 32]))
            .unwrap_err();
        assert_eq!(
            err,
            LedgerError::Communication("connection refused".to_string())
        );
    }

    #[test]
    fn test_client_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<std::sync::Arc<dyn LedgerClient>>();
    }

    #[test]
    fn test_instance_json_uses_hex_id() {
        let instance = Instance::new(InstanceId::from_bytes([0xab; 32]), "calypsoWrite", vec![1]);
        let json = serde_json::to_value(&instance).unwrap();
        assert_eq!(json["id"], "ab".repeat(32));
        assert_eq!(json["contract_id"], "calypsoWrite");
    }
}
