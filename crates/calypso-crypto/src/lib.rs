//! # calypso-crypto: Group Arithmetic for Calypso Write Records
//!
//! Provides the cryptographic building blocks of the write proof:
//!
//! - **Edwards25519 points and scalars** (`curve25519-dalek`) restricted to
//!   the prime-order subgroup, with strict canonical decoding.
//! - **Hash-to-scalar** over SHA-256, used as the Fiat–Shamir challenge.
//! - **Point embedding** of up to 29 bytes, used both for the key material
//!   and for the SHAKE256-derived generator `gBar`.
//!
//! ## Crate Policy
//!
//! - Depends on no other `calypso-*` crate.
//! - Randomness is a parameter (`RngCore + CryptoRng`), never ambient.
//! - No mocking of cryptographic operations in tests.
//! - `unsafe` prohibited.

pub mod embed;
pub mod error;
pub mod group;

pub use embed::{derive_generator, embed_key_material, extract, EMBED_CAPACITY};
pub use error::CryptoError;
pub use group::{hash_to_scalar, KeyPair, Point, Scalar, POINT_LEN, SCALAR_LEN};
