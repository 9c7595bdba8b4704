//! # Zero-Knowledge Identity Module
//!
//! Implements the compliance identity check using Groth16 over the BN254
//! curve. The statement is deliberately minimal: given a public identity
//! commitment `c`, the prover demonstrates knowledge of a secret `s` such
//! that `Poseidon(s) = c`, without revealing `s`. Clearing this check once
//! is what entitles an account to a non-transferable compliance credential
//! on-chain.
//!
//! ## Architecture
//!
//! ```text
//! commitment.rs   — Poseidon identity commitment (native, off-circuit)
//! circuit.rs      — R1CS identity circuit (IdentityCircuit)
//! prover.rs       — Groth16 proof generation (IdentityProver, IdentityProof)
//! verifier.rs     — Groth16 proof verification (IdentityVerifier)
//! calldata.rs     — On-chain calldata codec (ProofCalldata, 8 + 1 scalars)
//! ```
//!
//! ## Security Model
//!
//! - **One-wayness**: recovering `s` from `c` requires inverting Poseidon.
//! - **Soundness**: Groth16 knowledge-soundness in the generic group model —
//!   a proof convinces the verifier only if the prover knows the preimage.
//! - **Zero knowledge**: the proof reveals nothing about `s` beyond the
//!   truth of the statement.
//!
//! The trusted setup is per-circuit. In production, replace the local
//! ceremony with an MPC-generated SRS (see `prover::IdentityProver::setup`).

pub mod calldata;
pub mod circuit;
pub mod commitment;
pub mod prover;
pub mod verifier;

// Re-export the public API so callers can do `use arx_protocol::zkp::*`.
pub use calldata::ProofCalldata;
pub use circuit::IdentityCircuit;
pub use commitment::{identity_commitment, poseidon_config, secret_from_passphrase};
pub use prover::{IdentityProof, IdentityProver};
pub use verifier::IdentityVerifier;
