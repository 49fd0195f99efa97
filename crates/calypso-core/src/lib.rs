//! # calypso-core: Foundational Types for Calypso Write Records
//!
//! This crate is the leaf of the Calypso workspace. It defines the
//! identifier newtypes and protocol constants shared by the crypto,
//! write-record, and ledger crates.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `LtsId`, `PolicyId`, and
//!    `InstanceId` are distinct types with validated constructors. A policy
//!    id cannot be passed where a long-term secret id is expected, which
//!    matters because both feed hash inputs of the write proof.
//!
//! 2. **Limits are values, not globals.** The maximum ciphertext size is a
//!    `PayloadLimit` handed to the builder by the caller (usually derived
//!    from the ledger's chain configuration).
//!
//! 3. **Hex at the edges.** Identifiers serialize as lowercase hex strings
//!    for YAML/JSON interoperability; the binary wire format carries raw
//!    bytes.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `calypso-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod limits;

// Re-export primary types for ergonomic imports.
pub use error::CoreError;
pub use identity::{InstanceId, LtsId, PolicyId};
pub use limits::{PayloadLimit, KEY_MATERIAL_LEN, WRITE_CONTRACT_ID};
