//! # CLI Interface
//!
//! Defines the command-line argument structure for `arx` using `clap`
//! derive. Supports four subcommands: `setup`, `prove`, `verify`, and
//! `version`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ARX proof tooling.
///
/// Off-chain companion to the ARX compliant-asset vault: runs the Groth16
/// trusted setup for the identity circuit, generates identity proofs, and
/// exports them as the calldata the on-chain credential gate consumes.
#[derive(Parser, Debug)]
#[command(
    name = "arx",
    about = "ARX identity-proof tooling",
    version,
    propagate_version = true
)]
pub struct ArxCli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Emit logs as JSON lines instead of human-readable text.
    #[arg(long, global = true, env = "ARX_LOG_JSON")]
    pub json_logs: bool,
}

/// Top-level subcommands for the `arx` binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Groth16 trusted setup — writes the proving and verifying
    /// keys for the identity circuit.
    Setup(SetupArgs),
    /// Generate an identity proof and export verifier calldata.
    Prove(ProveArgs),
    /// Check exported calldata against a verifying key.
    Verify(VerifyArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `setup` subcommand.
#[derive(Parser, Debug)]
pub struct SetupArgs {
    /// Directory to write `proving.key` and `verifying.key` into.
    ///
    /// Created if it does not exist.
    #[arg(long, short = 'o', env = "ARX_KEY_DIR", default_value = "keys")]
    pub out_dir: PathBuf,
}

/// Arguments for the `prove` subcommand.
#[derive(Parser, Debug)]
pub struct ProveArgs {
    /// Path to the proving key produced by `setup`.
    #[arg(long, short = 'k', env = "ARX_PROVING_KEY", default_value = "keys/proving.key")]
    pub proving_key: PathBuf,

    /// The identity secret as a decimal scalar.
    ///
    /// **Never share this value** — the commitment and proof are derived
    /// from it; the secret itself stays local.
    #[arg(long, conflicts_with = "passphrase")]
    pub secret: Option<String>,

    /// Derive the identity secret from a passphrase instead of a raw
    /// scalar.
    #[arg(long)]
    pub passphrase: Option<String>,

    /// Path to write the verifier calldata JSON to.
    #[arg(long, short = 'o', default_value = "calldata.json")]
    pub out: PathBuf,
}

/// Arguments for the `verify` subcommand.
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Path to the verifying key produced by `setup`.
    #[arg(long, short = 'k', env = "ARX_VERIFYING_KEY", default_value = "keys/verifying.key")]
    pub verifying_key: PathBuf,

    /// Path to the calldata JSON produced by `prove`.
    #[arg(long, short = 'c', default_value = "calldata.json")]
    pub calldata: PathBuf,
}
