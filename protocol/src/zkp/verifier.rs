//! # Groth16 Proof Verification
//!
//! The verifier side of the identity proof. The on-chain credential gate
//! holds an [`IdentityVerifier`] (i.e., the Groth16 verification key) and
//! checks each submitted proof against the caller's claimed commitment
//! before issuing a compliance credential.
//!
//! Groth16 verification is three pairings + a multi-scalar multiplication,
//! so it runs in constant time regardless of circuit size — well under 5ms
//! on commodity hardware.

use anyhow::{Context, Result};
use ark_bn254::{Bn254, Fr};
use ark_crypto_primitives::sponge::poseidon::PoseidonConfig;
use ark_groth16::{Groth16, VerifyingKey};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_snark::SNARK;

use super::circuit;
use super::commitment::poseidon_config;
use super::prover::IdentityProof;

// ---------------------------------------------------------------------------
// IdentityVerifier
// ---------------------------------------------------------------------------

/// Holds the Groth16 verification key for the identity circuit.
///
/// This is small (~1 KB) and freely distributable. Verification is a
/// constant-time operation dominated by pairing checks.
pub struct IdentityVerifier {
    vk: VerifyingKey<Bn254>,
    /// Kept so the verifier can be handed to tooling that needs to
    /// recompute commitments alongside verification.
    config: PoseidonConfig<Fr>,
}

impl IdentityVerifier {
    /// Construct from an arkworks verification key (called by
    /// `IdentityProver::setup`).
    pub(crate) fn from_vk(vk: VerifyingKey<Bn254>, config: PoseidonConfig<Fr>) -> Self {
        Self { vk, config }
    }

    /// The Poseidon configuration this verifier's circuit was built with.
    pub fn poseidon(&self) -> &PoseidonConfig<Fr> {
        &self.config
    }

    /// Verify an identity proof against a public commitment.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the proof verifies, `Ok(false)` if it does not, or
    /// `Err(...)` if deserialization or the verification algorithm itself
    /// fails.
    pub fn verify(&self, proof: &IdentityProof, commitment: Fr) -> Result<bool> {
        let ark_proof = proof.to_ark_proof().context("failed to deserialize proof")?;
        let public_inputs = circuit::public_inputs(commitment);

        let valid = Groth16::<Bn254>::verify(&self.vk, &public_inputs, &ark_proof)
            .context("Groth16 verification algorithm failed")?;

        Ok(valid)
    }

    /// Serialize the verification key (for deployment artifacts).
    pub fn vk_to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.vk
            .serialize_compressed(&mut buf)
            .expect("VK serialization must not fail");
        buf
    }

    /// Deserialize a verification key from bytes.
    pub fn vk_from_bytes(data: &[u8]) -> Result<Self> {
        let vk = VerifyingKey::<Bn254>::deserialize_compressed(&data[..])
            .context("failed to deserialize verification key")?;
        Ok(Self {
            vk,
            config: poseidon_config(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
