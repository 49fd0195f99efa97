//! # Write Record Builder
//!
//! Encrypts key material to a long-term secret and proves, without
//! revealing `r`, that the same exponent was used against `B` and `gBar`.
//!
//! ## Algorithm
//!
//! ```text
//! r, U = r·B                       ephemeral key pair
//! C    = r·X + embed(key_material)
//! gBar = derive_generator(lts.id)
//! Ubar = r·gBar
//! s, w = s·B ; wBar = s·gBar       commitment key pair
//! E    = H(C ‖ U ‖ Ubar ‖ w ‖ wBar ‖ policy)
//! F    = s + E·r
//! ```
//!
//! ## Security Invariant
//!
//! - Size and width preconditions are checked before any randomness is
//!   drawn, and no partial record is ever returned.
//! - Both ephemeral key pairs are local to [`build`] and zeroized when it
//!   returns; only `U`, `Ubar`, `C`, `E`, `F` leave.
//! - Every call draws fresh scalars from the supplied CSPRNG.

use calypso_core::{PayloadLimit, PolicyId, KEY_MATERIAL_LEN};
use calypso_crypto::{embed_key_material, KeyPair};
use rand::{CryptoRng, RngCore};

use crate::error::WriteError;
use crate::lts::LongTermSecret;
use crate::proof::{challenge, Commitments};
use crate::record::{WriteRecord, WriteRecordParts};

/// Inputs of a single write.
#[derive(Debug, Clone, Copy)]
pub struct WriteRequest<'a> {
    /// Long-term secret to encrypt the key material to.
    pub lts: &'a LongTermSecret,
    /// Document already encrypted under `key_material`; stored as-is.
    pub ciphertext: &'a [u8],
    /// Symmetric key plus nonce; exactly [`KEY_MATERIAL_LEN`] bytes.
    pub key_material: &'a [u8],
    /// Data stored in clear next to the ciphertext.
    pub extra_plaintext: Option<&'a [u8]>,
    /// Policy the proof is bound to.
    pub policy: &'a PolicyId,
}

/// Build a write record.
///
/// # Errors
///
/// - [`WriteError::PayloadTooLarge`] if the ciphertext exceeds `limit`.
/// - [`WriteError::InvalidKeyMaterialLength`] if the key material is not
///   [`KEY_MATERIAL_LEN`] bytes.
/// - [`WriteError::Crypto`] if point embedding fails, which does not
///   happen for Edwards25519 in practice.
pub fn build<R: RngCore + CryptoRng>(
    rng: &mut R,
    limit: PayloadLimit,
    request: &WriteRequest<'_>,
) -> Result<WriteRecord, WriteError> {
    if !limit.allows(request.ciphertext.len()) {
        return Err(WriteError::PayloadTooLarge {
            size: request.ciphertext.len(),
            max: limit.max(),
        });
    }
    if request.key_material.len() != KEY_MATERIAL_LEN {
        return Err(WriteError::InvalidKeyMaterialLength {
            got: request.key_material.len(),
            expected: KEY_MATERIAL_LEN,
        });
    }

    let lts = request.lts;
    let m = embed_key_material(request.key_material)?;
    let gbar = lts.generator()?;

    let r = KeyPair::generate(rng);
    let u = r.point();
    let c = lts.public_key.mul(r.scalar()) + m;
    let ubar = gbar.mul(r.scalar());

    let s = KeyPair::generate(rng);
    let commitments = Commitments {
        w: s.point(),
        wbar: gbar.mul(s.scalar()),
    };

    let e = challenge(&c, &u, &ubar, &commitments, request.policy);
    let f = *s.scalar() + e * *r.scalar();

    tracing::debug!(
        lts_id = %lts.id,
        ciphertext_len = request.ciphertext.len(),
        has_extra = request.extra_plaintext.is_some(),
        "built write record"
    );

    Ok(WriteRecord::from_parts(WriteRecordParts {
        ciphertext: request.ciphertext.to_vec(),
        extra_plaintext: request.extra_plaintext.map(<[u8]>::to_vec),
        u,
        ubar,
        c,
        e,
        f,
        lts_id: lts.id.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use calypso_core::LtsId;
    use calypso_crypto::{extract, Point};
    use rand::rngs::OsRng;

    fn fixture() -> (KeyPair, LongTermSecret, PolicyId) {
        let custodian = KeyPair::generate(&mut OsRng);
        let lts = LongTermSecret::new(LtsId::new(vec![3u8; 32]).unwrap(), custodian.point());
        (custodian, lts, PolicyId::new(vec![7u8; 32]).unwrap())
    }

    #[test]
    fn test_build_populates_fields() {
        let (_, lts, policy) = fixture();
        let request = WriteRequest {
            lts: &lts,
            ciphertext: b"encrypted document",
            key_material: &[1u8; KEY_MATERIAL_LEN],
            extra_plaintext: Some(&b"public note"[..]),
            policy: &policy,
        };
        let record = build(&mut OsRng, PayloadLimit::default(), &request).unwrap();
        assert_eq!(record.ciphertext(), b"encrypted document");
        assert_eq!(record.extra_plaintext(), Some(&b"public note"[..]));
        assert_eq!(record.lts_id(), &lts.id);
    }

    #[test]
    fn test_custodian_recovers_key_material() {
        let (custodian, lts, policy) = fixture();
        let km: Vec<u8> = (0..KEY_MATERIAL_LEN as u8).collect();
        let request = WriteRequest {
            lts: &lts,
            ciphertext: b"",
            key_material: &km,
            extra_plaintext: None,
            policy: &policy,
        };
        let record = build(&mut OsRng, PayloadLimit::default(), &request).unwrap();
        let m: Point = *record.c() - record.u().mul(custodian.scalar());
        assert_eq!(extract(&m).unwrap(), km);
    }

    #[test]
    fn test_ubar_uses_derived_generator() {
        let (_, lts, policy) = fixture();
        let request = WriteRequest {
            lts: &lts,
            ciphertext: b"x",
            key_material: &[0u8; KEY_MATERIAL_LEN],
            extra_plaintext: None,
            policy: &policy,
        };
        let record = build(&mut OsRng, PayloadLimit::default(), &request).unwrap();
        // U and Ubar differ because B and gBar are independent generators.
        assert_ne!(record.u(), record.ubar());
    }

    #[test]
    fn test_oversized_payload_rejected_before_key_check() {
        let (_, lts, policy) = fixture();
        let request = WriteRequest {
            lts: &lts,
            ciphertext: &[0u8; 5],
            key_material: &[0u8; 3],
            extra_plaintext: None,
            policy: &policy,
        };
        let err = build(&mut OsRng, PayloadLimit::new(4), &request).unwrap_err();
        assert_eq!(err, WriteError::PayloadTooLarge { size: 5, max: 4 });
    }
}
