//! # Fiat–Shamir Challenge
//!
//! `E = SHA256(C ‖ U ‖ Ubar ‖ w ‖ wBar ‖ policy) mod ℓ`.
//!
//! Shared by the builder and the verifier so both hash exactly the same
//! transcript. The policy id comes last; it is the only variable-length
//! input, which keeps the concatenation unambiguous.

use calypso_core::PolicyId;
use calypso_crypto::{hash_to_scalar, Point, Scalar};

/// Commitments of the equality-of-discrete-log proof.
pub(crate) struct Commitments {
    /// `s·B`, or `F·B − E·U` when recomputed.
    pub w: Point,
    /// `s·gBar`, or `F·gBar − E·Ubar` when recomputed.
    pub wbar: Point,
}

pub(crate) fn challenge(
    c: &Point,
    u: &Point,
    ubar: &Point,
    commitments: &Commitments,
    policy: &PolicyId,
) -> Scalar {
    hash_to_scalar(&[
        &c.to_bytes(),
        &u.to_bytes(),
        &ubar.to_bytes(),
        &commitments.w.to_bytes(),
        &commitments.wbar.to_bytes(),
        policy.as_bytes(),
    ])
}
