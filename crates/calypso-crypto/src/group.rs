//! # Edwards25519 Group Arithmetic
//!
//! Points and scalars of the prime-order subgroup of Edwards25519, wrapped
//! so that every value reachable from outside this crate is valid.
//!
//! ## Security Invariant
//!
//! - `Point::from_bytes` only accepts canonical encodings of points in the
//!   prime-order subgroup, and never the identity. Small-order components
//!   would let a writer cheat the equality-of-discrete-log proof.
//! - `Scalar::from_bytes` only accepts canonical (fully reduced) encodings,
//!   so every scalar has exactly one wire form.
//! - Randomness is always injected by the caller. Nothing in this module
//!   reaches for a global RNG.
//! - `KeyPair` zeroizes its scalar on drop and never prints it.
//!
//! ## Serde
//!
//! Points and scalars serialize as lowercase hex strings.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar as DalekScalar;
use curve25519_dalek::traits::IsIdentity;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::error::CryptoError;

/// Length of an encoded point.
pub const POINT_LEN: usize = 32;

/// Length of an encoded scalar.
pub const SCALAR_LEN: usize = 32;

/// A point in the prime-order subgroup of Edwards25519.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Point(EdwardsPoint);

/// A scalar modulo the group order ℓ.
#[derive(Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct Scalar(DalekScalar);

/// An ephemeral key pair `(x, x·B)`.
///
/// Does not implement `Serialize` or `Clone`; the secret scalar must not
/// outlive the operation that drew it.
pub struct KeyPair {
    scalar: Scalar,
    point: Point,
}

// ---------------------------------------------------------------------------
// Point impls
// ---------------------------------------------------------------------------

impl Point {
    /// The standard Ed25519 base point `B`.
    pub fn base() -> Self {
        Self(curve25519_dalek::constants::ED25519_BASEPOINT_POINT)
    }

    /// Compute `s·B`.
    pub fn mul_base(s: &Scalar) -> Self {
        Self(EdwardsPoint::mul_base(&s.0))
    }

    /// Compute `s·self`.
    pub fn mul(&self, s: &Scalar) -> Self {
        Self(self.0 * s.0)
    }

    /// Encode as 32-byte compressed Edwards Y.
    pub fn to_bytes(&self) -> [u8; POINT_LEN] {
        self.0.compress().to_bytes()
    }

    /// Decode a point, rejecting anything outside the prime-order subgroup.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let arr: [u8; POINT_LEN] = bytes.try_into().map_err(|_| {
            CryptoError::InvalidEncoding(format!(
                "point must be {POINT_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        let point = CompressedEdwardsY(arr)
            .decompress()
            .ok_or_else(|| CryptoError::InvalidEncoding("point is not on the curve".to_string()))?;
        if point.compress().to_bytes() != arr {
            return Err(CryptoError::InvalidEncoding(
                "point encoding is not canonical".to_string(),
            ));
        }
        Self::from_subgroup(point)
            .ok_or_else(|| CryptoError::InvalidEncoding("point is not in the prime-order subgroup".to_string()))
    }

    /// Accept a decompressed point if it is a non-identity element of the
    /// prime-order subgroup.
    pub(crate) fn from_subgroup(point: EdwardsPoint) -> Option<Self> {
        if point.is_identity() || !point.is_torsion_free() {
            return None;
        }
        Some(Self(point))
    }

    /// Returns true for the neutral element. Only reachable through
    /// arithmetic, never through decoding.
    pub fn is_identity(&self) -> bool {
        self.0.is_identity()
    }

    /// Render the encoded point as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parse a point from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        let bytes = hex::decode(s.trim())
            .map_err(|e| CryptoError::InvalidEncoding(format!("invalid hex: {e}")))?;
        Self::from_bytes(&bytes)
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point(self.0 - rhs.0)
    }
}

impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point({}...)", hex_prefix(&self.to_bytes()))
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// Scalar impls
// ---------------------------------------------------------------------------

impl Scalar {
    /// The additive identity.
    pub const ZERO: Scalar = Scalar(DalekScalar::ZERO);

    /// Draw a uniformly random non-zero scalar.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        loop {
            let s = DalekScalar::random(rng);
            if s != DalekScalar::ZERO {
                return Self(s);
            }
        }
    }

    /// Reduce 32 little-endian bytes modulo ℓ.
    pub fn from_bytes_mod_order(bytes: [u8; SCALAR_LEN]) -> Self {
        Self(DalekScalar::from_bytes_mod_order(bytes))
    }

    /// Decode a canonical scalar encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let arr: [u8; SCALAR_LEN] = bytes.try_into().map_err(|_| {
            CryptoError::InvalidEncoding(format!(
                "scalar must be {SCALAR_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        Option::<DalekScalar>::from(DalekScalar::from_canonical_bytes(arr))
            .map(Self)
            .ok_or_else(|| CryptoError::InvalidEncoding("scalar is not reduced modulo the group order".to_string()))
    }

    /// Encode as 32 little-endian bytes.
    pub fn to_bytes(&self) -> [u8; SCALAR_LEN] {
        self.0.to_bytes()
    }

    /// Render the encoded scalar as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parse a scalar from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        let bytes = hex::decode(s.trim())
            .map_err(|e| CryptoError::InvalidEncoding(format!("invalid hex: {e}")))?;
        Self::from_bytes(&bytes)
    }
}

impl std::ops::Add for Scalar {
    type Output = Scalar;
    fn add(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 + rhs.0)
    }
}

impl std::ops::Mul for Scalar {
    type Output = Scalar;
    fn mul(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        Scalar(-self.0)
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Scalar({}...)", hex_prefix(&self.to_bytes()))
    }
}

// ---------------------------------------------------------------------------
// KeyPair impls
// ---------------------------------------------------------------------------

impl KeyPair {
    /// Generate a fresh key pair from the supplied CSPRNG.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let scalar = Scalar::random(rng);
        let point = Point::mul_base(&scalar);
        Self { scalar, point }
    }

    /// The secret scalar.
    pub fn scalar(&self) -> &Scalar {
        &self.scalar
    }

    /// The public point `scalar·B`.
    pub fn point(&self) -> Point {
        self.point
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.scalar.zeroize();
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KeyPair(<private>)")
    }
}

// ---------------------------------------------------------------------------
// Hash to scalar
// ---------------------------------------------------------------------------

/// Hash the concatenation of `parts` with SHA-256 and reduce modulo ℓ.
///
/// Parts are concatenated without length prefixes; callers fix the number
/// and widths of the parts so the encoding is unambiguous.
pub fn hash_to_scalar(parts: &[&[u8]]) -> Scalar {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    Scalar::from_bytes_mod_order(hasher.finalize().into())
}

fn hex_prefix(bytes: &[u8]) -> String {
    hex::encode(&bytes[..bytes.len().min(4)])
}
