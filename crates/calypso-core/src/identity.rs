//! # Identifier Newtypes
//!
//! Newtype wrappers for the identifiers a write record refers to.
//!
//! ## Security Invariant
//!
//! The long-term secret id and the policy id are both hashed into the
//! write proof: the first seeds the derived generator, the second is the
//! domain-separation tag of the Fiat–Shamir challenge. Keeping them as
//! distinct types prevents a caller from swapping one for the other,
//! which would silently produce a proof bound to the wrong context.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// Identifier of a long-term secret held by the custodian cothority.
///
/// Opaque, non-empty. Every write encrypted under the same long-term secret
/// uses the generator derived from these bytes.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LtsId(Vec<u8>);

/// Identifier of the access-control policy governing a write.
///
/// On the ledger this is the base id of the darc holding the
/// `spawn:calypsoWrite` and `spawn:calypsoRead` rules.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PolicyId(Vec<u8>);

/// Identifier of an instance stored on the ledger (32 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId([u8; 32]);

macro_rules! opaque_id {
    ($ty:ident, $kind:literal) => {
        impl $ty {
            /// Create the identifier from raw bytes. Fails on empty input.
            pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, CoreError> {
                let bytes = bytes.into();
                if bytes.is_empty() {
                    return Err(CoreError::EmptyIdentifier { kind: $kind });
                }
                Ok(Self(bytes))
            }

            /// Return the raw identifier bytes.
            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            /// Render the identifier as a lowercase hex string.
            pub fn to_hex(&self) -> String {
                hex::encode(&self.0)
            }

            /// Parse the identifier from a hex string.
            pub fn from_hex(s: &str) -> Result<Self, CoreError> {
                let bytes = hex::decode(s.trim()).map_err(|e| CoreError::InvalidHex {
                    kind: $kind,
                    reason: e.to_string(),
                })?;
                Self::new(bytes)
            }
        }

        impl AsRef<[u8]> for $ty {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Self::from_hex(&s).map_err(serde::de::Error::custom)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($ty), self.to_hex())
            }
        }
    };
}

opaque_id!(LtsId, "lts id");
opaque_id!(PolicyId, "policy id");

impl InstanceId {
    /// Length of an instance identifier in bytes.
    pub const LEN: usize = 32;

    /// Create an instance identifier from 32 raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create an instance identifier from a slice, checking the length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CoreError> {
        let arr: [u8; 32] = bytes.try_into().map_err(|_| CoreError::InvalidLength {
            kind: "instance id",
            expected: Self::LEN,
            got: bytes.len(),
        })?;
        Ok(Self(arr))
    }

    /// Return the raw 32-byte identifier.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render the identifier as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse the identifier from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        let bytes = hex::decode(s.trim()).map_err(|e| CoreError::InvalidHex {
            kind: "instance id",
            reason: e.to_string(),
        })?;
        Self::from_slice(&bytes)
    }
}

impl Serialize for InstanceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for InstanceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "instance:{}", self.to_hex())
    }
}

impl std::fmt::Debug for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InstanceId({}...)", hex::encode(&self.0[..4]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ids_rejected() {
        assert_eq!(
            LtsId::new(Vec::new()),
            Err(CoreError::EmptyIdentifier { kind: "lts id" })
        );
        assert!(PolicyId::new(Vec::<u8>::new()).is_err());
    }

    #[test]
    fn test_lts_id_hex_roundtrip() {
        let id = LtsId::new(vec![0xde, 0xad, 0xbe, 0xef]).unwrap();
        assert_eq!(id.to_hex(), "deadbeef");
        assert_eq!(LtsId::from_hex("deadbeef").unwrap(), id);
        assert_eq!(LtsId::from_hex("  DEADBEEF\n").unwrap(), id);
    }

    #[test]
    fn test_policy_id_invalid_hex() {
        let err = PolicyId::from_hex("zz").unwrap_err();
        assert!(matches!(err, CoreError::InvalidHex { kind: "policy id", .. }));
    }

    #[test]
    fn test_policy_id_serde_json_is_hex_string() {
        let id = PolicyId::new(vec![1, 2, 3]).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"010203\"");
        let back: PolicyId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_policy_id_serde_rejects_empty() {
        let result: Result<PolicyId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_instance_id_length_checked() {
        assert!(InstanceId::from_slice(&[0u8; 31]).is_err());
        assert!(InstanceId::from_slice(&[0u8; 33]).is_err());
        let id = InstanceId::from_slice(&[7u8; 32]).unwrap();
        assert_eq!(id.as_bytes(), &[7u8; 32]);
    }

    #[test]
    fn test_instance_id_display_and_debug() {
        let id = InstanceId::from_bytes([0xab; 32]);
        assert!(id.to_string().starts_with("instance:abab"));
        assert_eq!(format!("{id:?}"), "InstanceId(abababab...)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-empty id survives a trip through its hex form.
        #[test]
        fn lts_id_hex_roundtrip(bytes in prop::collection::vec(any::<u8>(), 1..64)) {
            let id = LtsId::new(bytes.clone()).unwrap();
            let parsed = LtsId::from_hex(&id.to_hex()).unwrap();
            prop_assert_eq!(parsed.as_bytes(), bytes.as_slice());
        }
    }
}
