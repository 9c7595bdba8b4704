//! # Groth16 Proof Generation
//!
//! This module wraps `ark-groth16` to provide a high-level API for
//! generating identity proofs. The workflow is:
//!
//! 1. **Setup**: Run `IdentityProver::setup(rng)` once per circuit shape.
//!    This produces a proving key and a verification key (returned as
//!    `IdentityVerifier`). In production, replace this with an MPC ceremony.
//!
//! 2. **Prove**: Call `IdentityProver::prove(secret)`. Internally this
//!    computes the Poseidon commitment, populates an [`IdentityCircuit`],
//!    and invokes `Groth16::prove`.
//!
//! 3. The resulting [`IdentityProof`] is a compact (~128 bytes compressed)
//!    serializable blob, convertible to on-chain calldata via
//!    [`super::calldata::ProofCalldata`].

use anyhow::{Context, Result};
use ark_bn254::{Bn254, Fr};
use ark_crypto_primitives::sponge::poseidon::PoseidonConfig;
use ark_groth16::{Groth16, ProvingKey};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_snark::SNARK;
use ark_std::rand::{CryptoRng, Rng};

use super::circuit::IdentityCircuit;
use super::commitment::{identity_commitment, poseidon_config};
use super::verifier::IdentityVerifier;

// ---------------------------------------------------------------------------
// IdentityProver
// ---------------------------------------------------------------------------

/// Holds the Groth16 proving key for the identity circuit.
///
/// Instances are created via [`IdentityProver::setup`] or restored from
/// serialized key material, and should be kept in memory for the lifetime
/// of the tool (large but immutable).
pub struct IdentityProver {
    pk: ProvingKey<Bn254>,
    config: PoseidonConfig<Fr>,
}

impl IdentityProver {
    /// Run the Groth16 trusted setup for the identity circuit.
    ///
    /// Returns both halves: the prover stays with the user-side tooling,
    /// the verifier is what gets deployed behind the credential gate.
    ///
    /// # Panics
    ///
    /// Panics if CRS generation fails (indicates a bug in the circuit).
    pub fn setup<R: Rng + CryptoRng>(rng: &mut R) -> (Self, IdentityVerifier) {
        let config = poseidon_config();
        let blank = IdentityCircuit::blank(config.clone());

        let (pk, vk) = Groth16::<Bn254>::circuit_specific_setup(blank, rng)
            .expect("Groth16 setup must succeed for a well-formed circuit");

        let prover = Self {
            pk,
            config: config.clone(),
        };
        let verifier = IdentityVerifier::from_vk(vk, config);

        (prover, verifier)
    }

    /// The commitment this prover would publish for `secret`.
    pub fn commitment(&self, secret: Fr) -> Fr {
        identity_commitment(&self.config, secret)
    }

    /// Generate a Groth16 proof of knowledge of `secret`.
    ///
    /// The public commitment is recomputed internally — the proof is bound
    /// to `Poseidon(secret)` and nothing else.
    ///
    /// # Errors
    ///
    /// Returns an error if proof generation or serialization fails.
    pub fn prove(&self, secret: Fr) -> Result<IdentityProof> {
        let commitment = identity_commitment(&self.config, secret);
        let circuit = IdentityCircuit::new(self.config.clone(), secret, commitment);

        let mut rng = ark_std::rand::thread_rng();
        let proof = Groth16::<Bn254>::prove(&self.pk, circuit, &mut rng)
            .context("Groth16 proof generation failed")?;

        let mut proof_bytes = Vec::new();
        proof
            .serialize_compressed(&mut proof_bytes)
            .context("proof serialization failed")?;

        tracing::debug!(
            commitment = %commitment,
            proof_bytes = proof_bytes.len(),
            "identity proof generated"
        );

        Ok(IdentityProof { bytes: proof_bytes })
    }

    /// Serialize the proving key (for persistence by the CLI).
    pub fn pk_to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.pk
            .serialize_compressed(&mut buf)
            .expect("proving key serialization must not fail");
        buf
    }

    /// Restore a prover from serialized proving-key bytes.
    pub fn pk_from_bytes(data: &[u8]) -> Result<Self> {
        let pk = ProvingKey::<Bn254>::deserialize_compressed(data)
            .context("failed to deserialize proving key")?;
        Ok(Self {
            pk,
            config: poseidon_config(),
        })
    }
}

// ---------------------------------------------------------------------------
// IdentityProof
// ---------------------------------------------------------------------------

/// A serialized Groth16 identity proof.
///
/// This is the artifact the off-chain tooling hands to the credential
/// issuer (after re-encoding as [`super::calldata::ProofCalldata`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityProof {
    bytes: Vec<u8>,
}

impl IdentityProof {
    /// Raw compressed proof bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Reconstruct a proof from compressed bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        // Validate that the bytes actually decode to a Groth16 proof.
        let _proof = ark_groth16::Proof::<Bn254>::deserialize_compressed(data)
            .context("invalid Groth16 proof bytes")?;

        Ok(Self {
            bytes: data.to_vec(),
        })
    }

    /// Deserialize into the arkworks proof struct (used by the verifier
    /// and the calldata codec).
    pub(crate) fn to_ark_proof(&self) -> Result<ark_groth16::Proof<Bn254>> {
        ark_groth16::Proof::<Bn254>::deserialize_compressed(&self.bytes[..])
            .map_err(|e| anyhow::anyhow!("proof deserialization failed: {}", e))
    }

    /// Wrap an arkworks proof (used by the calldata decoder).
    pub(crate) fn from_ark_proof(proof: &ark_groth16::Proof<Bn254>) -> Result<Self> {
        let mut bytes = Vec::new();
        proof
            .serialize_compressed(&mut bytes)
            .context("proof serialization failed")?;
        Ok(Self { bytes })
    }

    /// Size of the compressed proof in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
