//! # CLI Configuration
//!
//! Loaded from a YAML file:
//!
//! ```yaml
//! lts:
//!   id: 6c74732d31            # hex
//!   public_key: 5866666666... # hex, 32 bytes
//! chain:                      # optional
//!   max_block_size: 4000000
//!   metadata_overhead: 16000
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use calypso_ledger::ChainConfig;
use calypso_write::LongTermSecret;
use serde::{Deserialize, Serialize};

/// Settings shared by the `write` and `verify` subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Long-term secret records are encrypted to.
    pub lts: LongTermSecret,
    /// Ledger parameters.
    #[serde(default)]
    pub chain: ChainConfig,
}

impl CliConfig {
    /// Parse and validate a configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("invalid configuration YAML")?;
        config.chain.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("in {}", path.display()))
    }
}
