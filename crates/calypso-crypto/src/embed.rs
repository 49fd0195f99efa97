//! # Point Embedding and Derived Generators
//!
//! Embeds short byte strings into Edwards25519 points, and derives the
//! second generator `gBar` used by the write proof.
//!
//! ## Algorithm
//!
//! A candidate encoding is drawn from a filler stream, then byte 0 is
//! overwritten with the data length and bytes `1..=len` with the data.
//! The first candidate that decompresses to a non-identity point of the
//! prime-order subgroup is returned. Roughly one candidate in sixteen
//! qualifies. The data is read back from the compressed encoding.
//!
//! ## Security Invariant
//!
//! `derive_generator(seed)` fills with `SHAKE256(seed)`, so the result is
//! a pure function of the seed that nobody knows the discrete log of
//! relative to `B`. Writes under the same long-term secret always share
//! the same `gBar`.

use curve25519_dalek::edwards::CompressedEdwardsY;
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;

use crate::error::CryptoError;
use crate::group::{Point, POINT_LEN};

/// Maximum number of bytes a single point can carry.
pub const EMBED_CAPACITY: usize = 29;

/// Candidates tried before giving up.
pub const MAX_EMBED_ATTEMPTS: usize = 1024;

const KEY_MATERIAL_DOMAIN: &[u8] = b"calypso/key-material/v1";

/// Embed `data` into a point, filling unused bytes from `filler`.
///
/// Data longer than [`EMBED_CAPACITY`] is truncated to the capacity.
/// Callers that need the whole input to survive use
/// [`embed_key_material`], which rejects oversized input instead.
pub fn embed<R: XofReader>(data: &[u8], filler: &mut R) -> Result<Point, CryptoError> {
    let len = data.len().min(EMBED_CAPACITY);
    for _ in 0..MAX_EMBED_ATTEMPTS {
        let mut candidate = [0u8; POINT_LEN];
        filler.read(&mut candidate);
        candidate[0] = len as u8;
        candidate[1..=len].copy_from_slice(&data[..len]);

        let Some(point) = CompressedEdwardsY(candidate).decompress() else {
            continue;
        };
        // Non-canonical candidates would not read back the same bytes.
        if point.compress().to_bytes() != candidate {
            continue;
        }
        if let Some(point) = Point::from_subgroup(point) {
            return Ok(point);
        }
    }
    Err(CryptoError::PointDerivation {
        attempts: MAX_EMBED_ATTEMPTS,
    })
}

/// Read back the data embedded by [`embed`].
pub fn extract(point: &Point) -> Result<Vec<u8>, CryptoError> {
    let bytes = point.to_bytes();
    let len = bytes[0] as usize;
    if len > EMBED_CAPACITY {
        return Err(CryptoError::InvalidEncoding(format!(
            "embedded length {len} exceeds capacity {EMBED_CAPACITY}"
        )));
    }
    Ok(bytes[1..=len].to_vec())
}

/// Derive the generator `gBar` for a long-term secret id.
pub fn derive_generator(seed: &[u8]) -> Result<Point, CryptoError> {
    let mut xof = Shake256::default();
    xof.update(seed);
    let mut reader = xof.finalize_xof();
    embed(seed, &mut reader)
}

/// Embed key material as the message point `M` of the ElGamal ciphertext.
///
/// Deterministic and invertible: custodians recover the key material with
/// [`extract`] once `M` is unmasked.
pub fn embed_key_material(key_material: &[u8]) -> Result<Point, CryptoError> {
    if key_material.len() > EMBED_CAPACITY {
        return Err(CryptoError::EmbedCapacity {
            len: key_material.len(),
            capacity: EMBED_CAPACITY,
        });
    }
    let mut xof = Shake256::default();
    xof.update(KEY_MATERIAL_DOMAIN);
    xof.update(key_material);
    let mut reader = xof.finalize_xof();
    embed(key_material, &mut reader)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::group::{Point, Scalar};
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Key material of any content comes back out of its point.
        #[test]
        fn key_material_embed_extract_roundtrip(km in prop::array::uniform28(any::<u8>())) {
            let point = embed_key_material(&km).unwrap();
            prop_assert_eq!(extract(&point).unwrap(), km.to_vec());
            prop_assert_eq!(Point::from_bytes(&point.to_bytes()).unwrap(), point);
        }

        /// Reduced scalars decode back to themselves.
        #[test]
        fn scalar_bytes_roundtrip(bytes in prop::array::uniform32(any::<u8>())) {
            let s = Scalar::from_bytes_mod_order(bytes);
            prop_assert_eq!(Scalar::from_bytes(&s.to_bytes()).unwrap(), s);
        }
    }
}
