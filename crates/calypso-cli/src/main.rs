//! # calypso CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use calypso_cli::inspect::{run_inspect, InspectArgs};
use calypso_cli::verify::{run_verify, VerifyArgs};
use calypso_cli::write::{run_write, WriteArgs};

/// Calypso write records.
///
/// Builds verifiably encrypted write records for documents stored on the
/// ledger, and verifies or inspects encoded records.
#[derive(Parser, Debug)]
#[command(name = "calypso", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    /// Ignored when RUST_LOG is set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a write record for an encrypted document.
    Write(WriteArgs),

    /// Verify the proof of an encoded write record.
    Verify(VerifyArgs),

    /// Print a JSON summary of an encoded write record.
    Inspect(InspectArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        EnvFilter::from_default_env()
    } else {
        match cli.verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Write(args) => run_write(args),
        Commands::Verify(args) => run_verify(args),
        Commands::Inspect(args) => run_inspect(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
