//! # Write Record Adapter
//!
//! Turns ledger instances into write records.
//!
//! ## Security Invariant
//!
//! Provenance is checked before the payload is looked at. An instance
//! created by any contract other than `calypsoWrite` is refused even when
//! its payload decodes as a valid write record, so a record cannot be
//! smuggled in through a contract that never ran the proof check.

use calypso_core::{InstanceId, WRITE_CONTRACT_ID};
use calypso_write::WriteRecord;

use crate::error::LedgerError;
use crate::instance::{Instance, LedgerClient};

/// Decode the write record stored in `instance`.
///
/// # Errors
///
/// - [`LedgerError::WrongContract`] if the instance was not created by the
///   write contract.
/// - [`LedgerError::NotFound`] if the payload is not a valid write record.
pub fn from_instance(instance: &Instance) -> Result<WriteRecord, LedgerError> {
    if instance.contract_id != WRITE_CONTRACT_ID {
        tracing::warn!(
            instance = %instance.id,
            contract_id = %instance.contract_id,
            "refusing write record from foreign contract"
        );
        return Err(LedgerError::WrongContract {
            expected: WRITE_CONTRACT_ID.to_string(),
            found: instance.contract_id.clone(),
        });
    }

    WriteRecord::from_bytes(&instance.payload).map_err(|err| {
        tracing::debug!(instance = %instance.id, error = %err, "write payload did not decode");
        LedgerError::NotFound(format!("{}: {err}", instance.id))
    })
}

/// Look up an instance and decode the write record it holds.
///
/// Lookup failures from `client` are returned unchanged.
pub fn fetch_write_record<C: LedgerClient + ?Sized>(
    client: &C,
    id: &InstanceId,
) -> Result<WriteRecord, LedgerError> {
    let instance = client.get_instance(id)?;
    from_instance(&instance)
}
