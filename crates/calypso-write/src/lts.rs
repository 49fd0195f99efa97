//! # Long-Term Secret Descriptor
//!
//! The public half of a distributed key held by the custodian cothority:
//! an opaque id and the aggregate public key `X`. Obtained from the
//! custodian service; this crate never sees any share of the secret.

use calypso_core::LtsId;
use calypso_crypto::{derive_generator, CryptoError, Point};
use serde::{Deserialize, Serialize};

/// Public descriptor of a long-term secret.
///
/// Serializes as `{ "id": "<hex>", "public_key": "<hex>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongTermSecret {
    /// Identifier of the key set; seeds the derived generator.
    pub id: LtsId,
    /// Aggregate public key `X` of the custodians.
    pub public_key: Point,
}

impl LongTermSecret {
    /// Create a descriptor.
    pub fn new(id: LtsId, public_key: Point) -> Self {
        Self { id, public_key }
    }

    /// The generator `gBar` derived from this secret's id.
    pub fn generator(&self) -> Result<Point, CryptoError> {
        derive_generator(self.id.as_bytes())
    }
}
