// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # ARX Proof Tool
//!
//! Entry point for the `arx` binary — the off-chain side of the ARX
//! compliance gate. A user runs `setup` once (or receives keys from a
//! ceremony), then `prove` with their private secret to produce the
//! calldata JSON that the on-chain credential issuer consumes. `verify`
//! replays the on-chain check locally for sanity.
//!
//! The secret never leaves the machine; only the proof and the public
//! commitment are written out.

mod cli;
mod logging;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use ark_bn254::Fr;
use clap::Parser;

use arx_protocol::zkp::{
    identity_commitment, poseidon_config, secret_from_passphrase, IdentityProver,
    IdentityVerifier, ProofCalldata,
};

use cli::{ArxCli, Commands, ProveArgs, SetupArgs, VerifyArgs};
use logging::LogFormat;

fn main() -> Result<()> {
    let cli = ArxCli::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    logging::init_logging("arx=info,arx_protocol=info", format);

    match cli.command {
        Commands::Setup(args) => run_setup(args),
        Commands::Prove(args) => run_prove(args),
        Commands::Verify(args) => run_verify(args),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Runs the Groth16 trusted setup and writes both key halves.
fn run_setup(args: SetupArgs) -> Result<()> {
    fs::create_dir_all(&args.out_dir).with_context(|| {
        format!("failed to create key directory: {}", args.out_dir.display())
    })?;

    tracing::info!("running Groth16 trusted setup for the identity circuit");
    let mut rng = rand::thread_rng();
    let (prover, verifier) = IdentityProver::setup(&mut rng);

    let pk_path = args.out_dir.join("proving.key");
    let vk_path = args.out_dir.join("verifying.key");
    write_artifact(&pk_path, &prover.pk_to_bytes())?;
    write_artifact(&vk_path, &verifier.vk_to_bytes())?;

    tracing::info!(
        proving_key = %pk_path.display(),
        verifying_key = %vk_path.display(),
        "setup complete"
    );
    Ok(())
}

/// Generates an identity proof and exports verifier calldata.
fn run_prove(args: ProveArgs) -> Result<()> {
    let secret = match (&args.secret, &args.passphrase) {
        (Some(scalar), None) => Fr::from_str(scalar)
            .map_err(|_| anyhow::anyhow!("--secret must be a decimal scalar"))?,
        (None, Some(passphrase)) => secret_from_passphrase(passphrase),
        _ => bail!("provide exactly one of --secret or --passphrase"),
    };

    let pk_bytes = fs::read(&args.proving_key).with_context(|| {
        format!("failed to read proving key: {}", args.proving_key.display())
    })?;
    let prover = IdentityProver::pk_from_bytes(&pk_bytes)?;

    let commitment = identity_commitment(&poseidon_config(), secret);
    tracing::info!(commitment = %commitment, "generating proof");

    let proof = prover.prove(secret)?;
    let calldata = ProofCalldata::encode(&proof, commitment)?;

    let json = serde_json::to_string_pretty(&calldata).context("calldata serialization failed")?;
    write_artifact(&args.out, json.as_bytes())?;

    tracing::info!(out = %args.out.display(), "verifier calldata written");
    println!("{commitment}");
    Ok(())
}

/// Replays the on-chain verification locally.
fn run_verify(args: VerifyArgs) -> Result<()> {
    let vk_bytes = fs::read(&args.verifying_key).with_context(|| {
        format!(
            "failed to read verifying key: {}",
            args.verifying_key.display()
        )
    })?;
    let verifier = IdentityVerifier::vk_from_bytes(&vk_bytes)?;

    let json = fs::read_to_string(&args.calldata)
        .with_context(|| format!("failed to read calldata: {}", args.calldata.display()))?;
    let calldata: ProofCalldata =
        serde_json::from_str(&json).context("calldata is not valid JSON")?;

    let accepted = match calldata.decode() {
        Ok((proof, commitment)) => verifier.verify(&proof, commitment)?,
        Err(err) => {
            tracing::warn!(error = %err, "calldata rejected during decoding");
            false
        }
    };

    if accepted {
        println!("accepted");
        Ok(())
    } else {
        println!("rejected");
        std::process::exit(1);
    }
}

fn write_artifact(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
}

fn print_version() {
    println!("arx {}", env!("CARGO_PKG_VERSION"));
    println!("curve: {}", arx_protocol::config::ZKP_CURVE);
}
