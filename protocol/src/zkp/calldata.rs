//! # On-Chain Calldata Codec
//!
//! A Groth16 proof on BN254 is three group elements: `a` and `c` on G1,
//! `b` on G2. EVM-style verifier gates do not take curve points — they take
//! flat scalar arrays:
//!
//! ```text
//! a:     [a.x, a.y]                          (2 scalars)
//! b:     [[b.x.c1, b.x.c0], [b.y.c1, b.y.c0]] (4 scalars, c1 first)
//! c:     [c.x, c.y]                          (2 scalars)
//! input: [commitment]                        (1 scalar)
//! ```
//!
//! [`ProofCalldata`] is that shape, with each scalar as a decimal string —
//! the exact JSON that `snarkjs.groth16.exportSolidityCallData` emits, so
//! artifacts are interchangeable with the wider Groth16 tooling ecosystem.
//!
//! Decoding is strict: every scalar must parse, and the reconstructed
//! points must lie on the curve and in the correct subgroup. A single
//! tampered scalar therefore fails either here or (for the rare tamper
//! that lands back on the curve) at pairing time in the verifier.

use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use ark_bn254::{Fq, Fq2, Fr, G1Affine, G2Affine};
use ark_ec::AffineRepr;
use serde::{Deserialize, Serialize};

use super::prover::IdentityProof;

// ---------------------------------------------------------------------------
// ProofCalldata
// ---------------------------------------------------------------------------

/// Verifier-gate arguments: 8 proof scalars plus the 1-element public-input
/// vector, as decimal strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofCalldata {
    /// G1 point `a` as `[x, y]`.
    pub a: [String; 2],
    /// G2 point `b` as `[[x.c1, x.c0], [y.c1, y.c0]]`.
    pub b: [[String; 2]; 2],
    /// G1 point `c` as `[x, y]`.
    pub c: [String; 2],
    /// Public inputs: exactly the identity commitment.
    pub input: [String; 1],
}

impl ProofCalldata {
    /// Flatten a proof and its public commitment into calldata form.
    pub fn encode(proof: &IdentityProof, commitment: Fr) -> Result<Self> {
        let p = proof.to_ark_proof()?;

        Ok(Self {
            a: [p.a.x.to_string(), p.a.y.to_string()],
            b: [
                [p.b.x.c1.to_string(), p.b.x.c0.to_string()],
                [p.b.y.c1.to_string(), p.b.y.c0.to_string()],
            ],
            c: [p.c.x.to_string(), p.c.y.to_string()],
            input: [commitment.to_string()],
        })
    }

    /// Reconstruct the proof and public commitment from calldata.
    ///
    /// # Errors
    ///
    /// Fails if any scalar does not parse, or if a reconstructed point is
    /// not a valid group element.
    pub fn decode(&self) -> Result<(IdentityProof, Fr)> {
        let a = g1_from_scalars("a", &self.a)?;
        let b = g2_from_scalars("b", &self.b)?;
        let c = g1_from_scalars("c", &self.c)?;

        let commitment = Fr::from_str(&self.input[0])
            .map_err(|_| anyhow!("invalid public input scalar: {:?}", self.input[0]))?;

        let proof = IdentityProof::from_ark_proof(&ark_groth16::Proof { a, b, c })?;
        Ok((proof, commitment))
    }
}

// ---------------------------------------------------------------------------
// Point reconstruction
// ---------------------------------------------------------------------------

fn parse_fq(label: &str, s: &str) -> Result<Fq> {
    Fq::from_str(s).map_err(|_| anyhow!("invalid scalar in proof point '{label}': {s:?}"))
}

fn g1_from_scalars(label: &str, xy: &[String; 2]) -> Result<G1Affine> {
    let point = G1Affine::new_unchecked(parse_fq(label, &xy[0])?, parse_fq(label, &xy[1])?);
    if point.is_zero() || !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve()
    {
        bail!("proof point '{label}' is not a valid G1 element");
    }
    Ok(point)
}

fn g2_from_scalars(label: &str, xy: &[[String; 2]; 2]) -> Result<G2Affine> {
    // Calldata carries c1 before c0 (snarkjs convention).
    let x = Fq2::new(parse_fq(label, &xy[0][1])?, parse_fq(label, &xy[0][0])?);
    let y = Fq2::new(parse_fq(label, &xy[1][1])?, parse_fq(label, &xy[1][0])?);

    let point = G2Affine::new_unchecked(x, y);
    if point.is_zero() || !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve()
    {
        bail!("proof point '{label}' is not a valid G2 element");
    }
    Ok(point)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
