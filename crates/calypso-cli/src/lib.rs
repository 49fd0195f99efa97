//! # calypso-cli: Calypso Write Record Command-Line Interface
//!
//! ## Subcommands
//!
//! - `write`: build a write record for an encrypted document
//! - `verify`: check the proof of an encoded record
//! - `inspect`: print a JSON summary of an encoded record
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from handler logic; each handler has a
//!   `cmd_*` core that tests call without touching the filesystem.
//! - Handlers return the process exit code; errors carry `anyhow` context.

pub mod config;
pub mod inspect;
pub mod io;
pub mod verify;
pub mod write;
