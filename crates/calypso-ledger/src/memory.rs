//! # In-Memory Ledger
//!
//! A [`LedgerClient`] backed by a map, for tests and offline use of the
//! command-line tool.

use std::collections::HashMap;
use std::sync::Arc;

use calypso_core::InstanceId;
use parking_lot::RwLock;

use crate::error::LedgerError;
use crate::instance::{Instance, LedgerClient};

/// Thread-safe, cloneable in-memory instance store.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    instances: Arc<RwLock<HashMap<InstanceId, Instance>>>,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an instance, returning the one it replaced, if any.
    pub fn store(&self, instance: Instance) -> Option<Instance> {
        self.instances.write().insert(instance.id, instance)
    }

    /// Number of stored instances.
    pub fn len(&self) -> usize {
        self.instances.read().len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.instances.read().is_empty()
    }
}

impl LedgerClient for InMemoryLedger {
    fn get_instance(&self, id: &InstanceId) -> Result<Instance, LedgerError> {
        self.instances
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))
    }
}
