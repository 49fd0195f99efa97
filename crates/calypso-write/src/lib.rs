//! # calypso-write: Verifiably Encrypted Write Records
//!
//! A writer stores a document on the ledger encrypted under a symmetric
//! key, and hands that key to a custodian cothority by encrypting it to the
//! cothority's long-term secret. The ledger must be able to check, without
//! any secret, that the key encryption is well-formed and bound to the
//! document's access-control policy.
//!
//! ## Architecture
//!
//! - **Builder** (`builder.rs`): ElGamal-encrypts the key material and
//!   produces the equality-of-discrete-log proof.
//! - **Verifier** (`verify.rs`): recomputes the proof commitments and
//!   checks the challenge. Run by the ledger before accepting a write.
//! - **Codec** (`codec.rs`): canonical protocol-buffer wire format with
//!   strict decoding.
//! - **Record** (`record.rs`): the immutable write record and its parts.
//!
//! ## Security Invariant
//!
//! The proof binds `U`, `Ubar`, `C` and the policy id. It does not bind the
//! document ciphertext or the cleartext extra data; those are authenticated
//! by the symmetric scheme and the ledger transaction respectively.
//!
//! ## Crate Policy
//!
//! - Depends on `calypso-core` and `calypso-crypto` internally.
//! - Randomness is always supplied by the caller.
//! - No `unsafe` code.

pub mod builder;
pub mod codec;
pub mod error;
pub mod lts;
mod proof;
pub mod record;
pub mod verify;

pub use builder::{build, WriteRequest};
pub use codec::{decode, encode, encode_checked};
pub use error::{CodecError, VerifyError, WriteError};
pub use lts::LongTermSecret;
pub use record::{WriteRecord, WriteRecordParts};
pub use verify::{check_proof, verify};
