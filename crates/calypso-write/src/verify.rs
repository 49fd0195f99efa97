//! # Write Proof Verification
//!
//! Recomputes the commitments from the response and checks the challenge:
//!
//! ```text
//! w'    = F·B    − E·U
//! wBar' = F·gBar − E·Ubar
//! E'    = H(C ‖ U ‖ Ubar ‖ w' ‖ wBar' ‖ policy)      accept iff E' = E
//! ```
//!
//! This is the check the ledger runs before accepting a `calypsoWrite`
//! instance. Verification needs `Ubar`, which is why the record stores it.

use calypso_core::PolicyId;
use calypso_crypto::Point;
use subtle::ConstantTimeEq;

use crate::error::VerifyError;
use crate::lts::LongTermSecret;
use crate::proof::{challenge, Commitments};
use crate::record::WriteRecord;

/// Check the proof of a write record, reporting why it fails.
pub fn check_proof(
    record: &WriteRecord,
    lts: &LongTermSecret,
    policy: &PolicyId,
) -> Result<(), VerifyError> {
    if record.lts_id() != &lts.id {
        return Err(VerifyError::LtsMismatch {
            expected: lts.id.clone(),
            found: record.lts_id().clone(),
        });
    }
    for (name, point) in [("u", record.u()), ("ubar", record.ubar()), ("c", record.c())] {
        if point.is_identity() {
            return Err(VerifyError::InvalidPoint(name));
        }
    }

    let gbar = lts.generator()?;
    let e = *record.e();
    let f = *record.f();
    let commitments = Commitments {
        w: Point::mul_base(&f) - record.u().mul(&e),
        wbar: gbar.mul(&f) - record.ubar().mul(&e),
    };

    let recomputed = challenge(record.c(), record.u(), record.ubar(), &commitments, policy);
    if bool::from(recomputed.to_bytes()[..].ct_eq(&e.to_bytes()[..])) {
        Ok(())
    } else {
        Err(VerifyError::ChallengeMismatch)
    }
}

/// Returns true iff the record's proof is valid for `lts` and `policy`.
pub fn verify(record: &WriteRecord, lts: &LongTermSecret, policy: &PolicyId) -> bool {
    match check_proof(record, lts, policy) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(lts_id = %lts.id, reason = %err, "write proof rejected");
            false
        }
    }
}
