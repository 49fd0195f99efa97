//! # Inspect Subcommand
//!
//! Prints a JSON summary of an encoded write record. No configuration is
//! needed and no proof is checked.

use std::path::PathBuf;

use anyhow::Result;
use calypso_write::WriteRecord;
use clap::Args;
use serde::Serialize;

use crate::io::read_record;

/// Arguments for the inspect subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Encoded record, raw or hex.
    #[arg(long)]
    pub record: PathBuf,
}

/// JSON view of a write record. Binary fields are hex.
#[derive(Debug, Serialize)]
pub struct RecordSummary {
    /// Long-term secret id.
    pub lts_id: String,
    /// Length of the encrypted document in bytes.
    pub ciphertext_len: usize,
    /// Cleartext application data, if present.
    pub extra_plaintext: Option<String>,
    /// `r·B`.
    pub u: String,
    /// `r·gBar`.
    pub ubar: String,
    /// Encrypted key material.
    pub c: String,
    /// Proof challenge.
    pub e: String,
    /// Proof response.
    pub f: String,
}

impl From<&WriteRecord> for RecordSummary {
    fn from(record: &WriteRecord) -> Self {
        Self {
            lts_id: record.lts_id().to_hex(),
            ciphertext_len: record.ciphertext().len(),
            extra_plaintext: record.extra_plaintext().map(hex::encode),
            u: record.u().to_hex(),
            ubar: record.ubar().to_hex(),
            c: record.c().to_hex(),
            e: record.e().to_hex(),
            f: record.f().to_hex(),
        }
    }
}

/// Execute the inspect subcommand.
pub fn run_inspect(args: &InspectArgs) -> Result<u8> {
    let record = read_record(&args.record)?;
    let summary = RecordSummary::from(&record);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(0)
}
