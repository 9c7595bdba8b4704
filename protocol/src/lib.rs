// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # ARX Protocol — Core Library
//!
//! ARX tokenizes real-world assets and locks them in a compliance-gated
//! staking vault. Before an account can touch the vault it must clear a
//! zero-knowledge identity check: the user proves knowledge of a private
//! secret behind a public Poseidon commitment, without ever revealing the
//! secret. Groth16 over BN254 keeps the proofs small enough to verify
//! on-chain and the tooling compatible with the EVM precompile ecosystem.
//!
//! This crate is the off-chain half of the system:
//!
//! - **account** — Account identifiers. Your address, your assets.
//! - **zkp** — The identity circuit, prover, verifier, and the calldata
//!   codec that turns a proof into the eight scalars the on-chain gate
//!   consumes.
//! - **config** — Protocol constants and economic parameters.
//!
//! The on-chain half — credential issuance, the asset registry, and the
//! staking vault itself — lives in the `arx-contracts` crate and consumes
//! this one through the [`zkp`] verification surface.
//!
//! ## Design Philosophy
//!
//! 1. Correctness over performance (but we're still fast).
//! 2. No unsafe code in crypto paths — we sleep at night.
//! 3. If it touches money, it has tests. Plural.

pub mod account;
pub mod config;
pub mod zkp;
