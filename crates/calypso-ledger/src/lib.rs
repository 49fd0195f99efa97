//! # calypso-ledger: Write Records on the Ledger
//!
//! Reads write records back from ledger instances.
//!
//! - `instance.rs`: the stored instance and the [`LedgerClient`] lookup
//!   trait that any ledger backend implements.
//! - `adapter.rs`: provenance-checked decoding of `calypsoWrite` instances.
//! - `memory.rs`: [`InMemoryLedger`], a map-backed client.
//! - `config.rs`: [`ChainConfig`], source of the builder's payload limit.
//!
//! ## Crate Policy
//!
//! - Lookups are blocking and never retried; errors propagate unchanged.
//! - No `unsafe` code.

pub mod adapter;
pub mod config;
pub mod error;
pub mod instance;
pub mod memory;

pub use adapter::{fetch_write_record, from_instance};
pub use config::ChainConfig;
pub use error::LedgerError;
pub use instance::{Instance, LedgerClient};
pub use memory::InMemoryLedger;
