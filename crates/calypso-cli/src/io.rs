//! Reading records and identifiers from the command line.

use std::path::Path;

use anyhow::{Context, Result};
use calypso_core::PolicyId;
use calypso_write::WriteRecord;

/// Read an encoded write record from `path`.
///
/// The file may hold the raw wire bytes or their hex encoding, as printed
/// by `calypso write` without `--out`.
pub fn read_record(path: &Path) -> Result<WriteRecord> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read record file: {}", path.display()))?;
    let from_hex = std::str::from_utf8(&bytes)
        .ok()
        .and_then(|text| hex::decode(text.trim()).ok());
    let wire = from_hex.unwrap_or(bytes);
    WriteRecord::from_bytes(&wire)
        .with_context(|| format!("invalid write record in {}", path.display()))
}

/// Parse a hex policy id argument.
pub fn parse_policy(hex: &str) -> Result<PolicyId> {
    PolicyId::from_hex(hex).context("invalid --policy")
}
