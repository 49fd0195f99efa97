//! # Verify Subcommand
//!
//! Checks the proof of an encoded write record. Exit status 0 means the
//! proof is valid for the configured long-term secret and the given policy.

use std::path::PathBuf;

use anyhow::Result;
use calypso_core::PolicyId;
use calypso_write::{check_proof, WriteRecord};
use clap::Args;

use crate::config::CliConfig;
use crate::io::{parse_policy, read_record};

/// Arguments for the verify subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Configuration file naming the long-term secret.
    #[arg(long)]
    pub config: PathBuf,

    /// Policy id the proof must be bound to, hex.
    #[arg(long)]
    pub policy: String,

    /// Encoded record, raw or hex.
    #[arg(long)]
    pub record: PathBuf,
}

/// Execute the verify subcommand.
pub fn run_verify(args: &VerifyArgs) -> Result<u8> {
    let config = CliConfig::load(&args.config)?;
    let policy = parse_policy(&args.policy)?;
    let record = read_record(&args.record)?;
    Ok(cmd_verify(&config, &policy, &record))
}

/// Verify `record`, printing the outcome. Returns the exit code.
pub fn cmd_verify(config: &CliConfig, policy: &PolicyId, record: &WriteRecord) -> u8 {
    match check_proof(record, &config.lts, policy) {
        Ok(()) => {
            println!("OK: write proof valid for {} under policy {policy}", config.lts.id);
            0
        }
        Err(err) => {
            println!("FAIL: {err}");
            1
        }
    }
}
