//! # Write Record Wire Codec
//!
//! Write records are stored as a protocol-buffer message. Every field is a
//! tagged byte string; points and scalars use their 32-byte canonical
//! encodings.
//!
//! | tag | field             | presence  |
//! |-----|-------------------|-----------|
//! | 1   | `ciphertext`      | mandatory |
//! | 2   | `extra_plaintext` | optional  |
//! | 3   | `u`               | mandatory |
//! | 4   | `c`               | mandatory |
//! | 5   | `ubar`            | mandatory |
//! | 6   | `e`               | mandatory |
//! | 7   | `f`               | mandatory |
//! | 8   | `lts_id`          | mandatory |
//!
//! ## Security Invariant
//!
//! `decode` never returns a record with a default-filled field: absent
//! fields, points outside the prime-order subgroup, and non-canonical
//! scalars are all decode failures.
//!
//! An empty buffer is a well-formed message with every field absent, so it
//! reports the first missing field (`ciphertext`) rather than `Malformed`.
//! `Malformed` is reserved for bytes that are not a protobuf message at all.

use calypso_core::{LtsId, PayloadLimit};
use calypso_crypto::{CryptoError, Point, Scalar};
use prost::Message;

use crate::error::CodecError;
use crate::record::{WriteRecord, WriteRecordParts};

#[derive(Clone, PartialEq, Message)]
struct WireWrite {
    #[prost(bytes = "vec", optional, tag = "1")]
    ciphertext: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "2")]
    extra_plaintext: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "3")]
    u: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "4")]
    c: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "5")]
    ubar: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "6")]
    e: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "7")]
    f: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "8")]
    lts_id: Option<Vec<u8>>,
}

/// Encode a record to its canonical wire form.
pub fn encode(record: &WriteRecord) -> Vec<u8> {
    WireWrite {
        ciphertext: Some(record.ciphertext().to_vec()),
        extra_plaintext: record.extra_plaintext().map(<[u8]>::to_vec),
        u: Some(record.u().to_bytes().to_vec()),
        c: Some(record.c().to_bytes().to_vec()),
        ubar: Some(record.ubar().to_bytes().to_vec()),
        e: Some(record.e().to_bytes().to_vec()),
        f: Some(record.f().to_bytes().to_vec()),
        lts_id: Some(record.lts_id().as_bytes().to_vec()),
    }
    .encode_to_vec()
}

/// Encode a record, refusing one whose ciphertext exceeds `limit`.
pub fn encode_checked(record: &WriteRecord, limit: PayloadLimit) -> Result<Vec<u8>, CodecError> {
    let size = record.ciphertext().len();
    if !limit.allows(size) {
        return Err(CodecError::PayloadTooLarge {
            size,
            max: limit.max(),
        });
    }
    Ok(encode(record))
}

/// Decode a record from its wire form.
pub fn decode(bytes: &[u8]) -> Result<WriteRecord, CodecError> {
    let wire = WireWrite::decode(bytes)?;

    let ciphertext = required(wire.ciphertext, "ciphertext")?;
    let u = point(wire.u, "u")?;
    let c = point(wire.c, "c")?;
    let ubar = point(wire.ubar, "ubar")?;
    let e = scalar(wire.e, "e")?;
    let f = scalar(wire.f, "f")?;
    let lts_id = required(wire.lts_id, "lts_id")?;
    // An empty id is indistinguishable from an absent one.
    let lts_id = LtsId::new(lts_id).map_err(|_| CodecError::MissingField("lts_id"))?;

    Ok(WriteRecord::from_parts(WriteRecordParts {
        ciphertext,
        extra_plaintext: wire.extra_plaintext,
        u,
        ubar,
        c,
        e,
        f,
        lts_id,
    }))
}

fn required(field: Option<Vec<u8>>, name: &'static str) -> Result<Vec<u8>, CodecError> {
    field.ok_or(CodecError::MissingField(name))
}

fn point(field: Option<Vec<u8>>, name: &'static str) -> Result<Point, CodecError> {
    let bytes = required(field, name)?;
    Point::from_bytes(&bytes).map_err(|source| invalid(name, source))
}

fn scalar(field: Option<Vec<u8>>, name: &'static str) -> Result<Scalar, CodecError> {
    let bytes = required(field, name)?;
    Scalar::from_bytes(&bytes).map_err(|source| invalid(name, source))
}

fn invalid(field: &'static str, source: CryptoError) -> CodecError {
    CodecError::InvalidField { field, source }
}
