//! # Write Record
//!
//! The artifact a writer submits to the `calypsoWrite` contract:
//!
//! - `ciphertext`: the document, already encrypted under the key material
//!   and stored as-is.
//! - `extra_plaintext`: application data stored in clear.
//! - `U`, `C`: the ElGamal encryption of the key material to `X`.
//! - `Ubar`, `E`, `F`: the proof that `U` and `Ubar` share the exponent,
//!   bound to the policy id.
//! - `lts_id`: the long-term secret the key material is encrypted to.
//!
//! A record is immutable once built. Nothing in it refers to the
//! ephemeral scalars used to produce it.

use calypso_core::LtsId;
use calypso_crypto::{Point, Scalar};

use crate::codec;
use crate::error::CodecError;

/// A verifiably encrypted write record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRecord {
    ciphertext: Vec<u8>,
    extra_plaintext: Option<Vec<u8>>,
    u: Point,
    ubar: Point,
    c: Point,
    e: Scalar,
    f: Scalar,
    lts_id: LtsId,
}

/// The fields of a [`WriteRecord`], for assembling one from storage or
/// taking one apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRecordParts {
    /// Encrypted document.
    pub ciphertext: Vec<u8>,
    /// Cleartext application data.
    pub extra_plaintext: Option<Vec<u8>>,
    /// `r·B`.
    pub u: Point,
    /// `r·gBar`.
    pub ubar: Point,
    /// `r·X + M`.
    pub c: Point,
    /// Fiat–Shamir challenge.
    pub e: Scalar,
    /// Response `s + E·r`.
    pub f: Scalar,
    /// Long-term secret id.
    pub lts_id: LtsId,
}

impl WriteRecord {
    /// Assemble a record from its fields.
    ///
    /// No proof check happens here; use [`crate::verify`] before trusting
    /// a record assembled from untrusted parts.
    pub fn from_parts(parts: WriteRecordParts) -> Self {
        Self {
            ciphertext: parts.ciphertext,
            extra_plaintext: parts.extra_plaintext,
            u: parts.u,
            ubar: parts.ubar,
            c: parts.c,
            e: parts.e,
            f: parts.f,
            lts_id: parts.lts_id,
        }
    }

    /// Take the record apart.
    pub fn into_parts(self) -> WriteRecordParts {
        WriteRecordParts {
            ciphertext: self.ciphertext,
            extra_plaintext: self.extra_plaintext,
            u: self.u,
            ubar: self.ubar,
            c: self.c,
            e: self.e,
            f: self.f,
            lts_id: self.lts_id,
        }
    }

    /// The encrypted document.
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// The cleartext application data, if any.
    pub fn extra_plaintext(&self) -> Option<&[u8]> {
        self.extra_plaintext.as_deref()
    }

    /// `U = r·B`.
    pub fn u(&self) -> &Point {
        &self.u
    }

    /// `Ubar = r·gBar`.
    pub fn ubar(&self) -> &Point {
        &self.ubar
    }

    /// `C = r·X + M`.
    pub fn c(&self) -> &Point {
        &self.c
    }

    /// The challenge `E`.
    pub fn e(&self) -> &Scalar {
        &self.e
    }

    /// The response `F`.
    pub fn f(&self) -> &Scalar {
        &self.f
    }

    /// The long-term secret this record is encrypted to.
    pub fn lts_id(&self) -> &LtsId {
        &self.lts_id
    }

    /// Encode to the canonical wire format.
    pub fn to_bytes(&self) -> Vec<u8> {
        codec::encode(self)
    }

    /// Decode from the canonical wire format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        codec::decode(bytes)
    }
}
