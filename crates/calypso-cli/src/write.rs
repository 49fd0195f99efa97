//! # Write Subcommand
//!
//! Builds a write record for an already-encrypted document and emits its
//! wire encoding.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calypso_core::PolicyId;
use calypso_write::{build, encode_checked, WriteRequest};
use clap::Args;
use rand::rngs::OsRng;

use crate::config::CliConfig;
use crate::io::parse_policy;

/// Arguments for the write subcommand.
#[derive(Args, Debug)]
pub struct WriteArgs {
    /// Configuration file naming the long-term secret.
    #[arg(long)]
    pub config: PathBuf,

    /// Policy id the proof is bound to, hex.
    #[arg(long)]
    pub policy: String,

    /// Encrypted document to store.
    #[arg(long)]
    pub data: PathBuf,

    /// Symmetric key and nonce the document is encrypted under, hex.
    #[arg(long)]
    pub key_material: String,

    /// File stored in clear next to the ciphertext.
    #[arg(long)]
    pub extra: Option<PathBuf>,

    /// Write the encoded record here instead of printing hex to stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Execute the write subcommand.
pub fn run_write(args: &WriteArgs) -> Result<u8> {
    let config = CliConfig::load(&args.config)?;
    let policy = parse_policy(&args.policy)?;
    let key_material = hex::decode(args.key_material.trim()).context("invalid --key-material")?;
    let ciphertext = read_file(&args.data)?;
    let extra = args.extra.as_deref().map(read_file).transpose()?;

    let encoded = cmd_write(&config, &policy, &ciphertext, &key_material, extra.as_deref())?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, &encoded)
                .with_context(|| format!("failed to write record: {}", path.display()))?;
            println!("OK: wrote {} byte record to {}", encoded.len(), path.display());
        }
        None => println!("{}", hex::encode(&encoded)),
    }
    Ok(0)
}

/// Build and encode a record.
pub fn cmd_write(
    config: &CliConfig,
    policy: &PolicyId,
    ciphertext: &[u8],
    key_material: &[u8],
    extra: Option<&[u8]>,
) -> Result<Vec<u8>> {
    let limit = config.chain.payload_limit();
    let request = WriteRequest {
        lts: &config.lts,
        ciphertext,
        key_material,
        extra_plaintext: extra,
        policy,
    };
    let record = build(&mut OsRng, limit, &request).context("failed to build write record")?;
    tracing::info!(lts_id = %config.lts.id, policy = %policy, "write record built");
    Ok(encode_checked(&record, limit)?)
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use calypso_core::{LtsId, KEY_MATERIAL_LEN};
    use calypso_crypto::KeyPair;
    use calypso_ledger::ChainConfig;
    use calypso_write::{verify, LongTermSecret, WriteRecord};

    fn config(chain: ChainConfig) -> CliConfig {
        CliConfig {
            lts: LongTermSecret::new(
                LtsId::new(b"cli-lts".to_vec()).unwrap(),
                KeyPair::generate(&mut OsRng).point(),
            ),
            chain,
        }
    }

    #[test]
    fn test_cmd_write_produces_verifiable_record() {
        let config = config(ChainConfig::default());
        let policy = PolicyId::new(vec![1, 2, 3]).unwrap();
        let bytes = cmd_write(
            &config,
            &policy,
            b"doc",
            &[9u8; KEY_MATERIAL_LEN],
            Some(&b"note"[..]),
        )
        .unwrap();
        let record = WriteRecord::from_bytes(&bytes).unwrap();
        assert_eq!(record.extra_plaintext(), Some(&b"note"[..]));
        assert!(verify(&record, &config.lts, &policy));
    }

    #[test]
    fn test_cmd_write_respects_chain_limit() {
        let config = config(ChainConfig {
            max_block_size: 16_000,
            metadata_overhead: 15_990,
        });
        let policy = PolicyId::new(vec![1]).unwrap();
        let err = cmd_write(&config, &policy, &[0u8; 11], &[0u8; KEY_MATERIAL_LEN], None)
            .unwrap_err();
        assert!(format!("{err:#}").contains("exceeds the payload limit"));
    }

    #[test]
    fn test_run_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(ChainConfig::default());
        let config_path = dir.path().join("calypso.yaml");
        std::fs::write(&config_path, serde_yaml::to_string(&config).unwrap()).unwrap();
        let data = dir.path().join("doc.enc");
        std::fs::write(&data, b"ciphertext").unwrap();
        let out = dir.path().join("record.bin");

        let args = WriteArgs {
            config: config_path,
            policy: "abcd".to_string(),
            data,
            key_material: "11".repeat(KEY_MATERIAL_LEN),
            extra: None,
            out: Some(out.clone()),
        };
        assert_eq!(run_write(&args).unwrap(), 0);
        let record = WriteRecord::from_bytes(&std::fs::read(out).unwrap()).unwrap();
        assert_eq!(record.ciphertext(), b"ciphertext");
    }
}
