//! # Identity R1CS Circuit
//!
//! This module defines the arithmetic circuit used inside the Groth16 SNARK.
//! The statement being proved is:
//!
//! ```text
//! "I know a secret s such that Poseidon(s) = c"
//! ```
//!
//! where `c` is the public identity commitment. That's the whole circuit:
//! one sponge evaluation and one equality. The Poseidon permutation with
//! our parameters (width 3, 8 full + 57 partial rounds, x^5 S-box) costs a
//! few hundred constraints — small enough that proving is interactive-fast
//! even in a browser-class environment.
//!
//! ## Public inputs (in order)
//!
//! | index | value |
//! |-------|-------|
//! | 0     | identity commitment `c` (Fr element) |
//!
//! The ordering MUST match [`public_inputs`] — the first `new_input`
//! allocation becomes public_inputs[0].

use ark_bn254::Fr;
use ark_crypto_primitives::sponge::constraints::CryptographicSpongeVar;
use ark_crypto_primitives::sponge::poseidon::constraints::PoseidonSpongeVar;
use ark_crypto_primitives::sponge::poseidon::PoseidonConfig;
use ark_r1cs_std::{alloc::AllocVar, eq::EqGadget, fields::fp::FpVar};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};

// ---------------------------------------------------------------------------
// Circuit definition
// ---------------------------------------------------------------------------

/// Groth16 R1CS circuit binding a private secret to its public Poseidon
/// commitment.
///
/// Witness fields are `Option<_>` so the struct can be constructed with
/// `None` values during Groth16 key generation (where the constraint
/// topology is determined but no witness is available yet).
#[derive(Clone)]
pub struct IdentityCircuit {
    /// Poseidon parameters, baked into the circuit as constants.
    pub config: PoseidonConfig<Fr>,

    // -- Private witness ----------------------------------------------------
    /// The identity secret.
    pub secret: Option<Fr>,

    // -- Public inputs ------------------------------------------------------
    /// The identity commitment: `Poseidon(secret)`.
    pub commitment: Option<Fr>,
}

impl IdentityCircuit {
    /// Construct a fully-populated circuit for proof generation.
    pub fn new(config: PoseidonConfig<Fr>, secret: Fr, commitment: Fr) -> Self {
        Self {
            config,
            secret: Some(secret),
            commitment: Some(commitment),
        }
    }

    /// Construct a blank circuit (for CRS generation). The constraint
    /// topology is identical — only the witness slots are empty.
    pub fn blank(config: PoseidonConfig<Fr>) -> Self {
        Self {
            config,
            secret: None,
            commitment: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Constraint synthesizer
// ---------------------------------------------------------------------------

impl ConstraintSynthesizer<Fr> for IdentityCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        // Public input: the commitment the proof is bound to. Allocated
        // first — the on-chain gate passes it at public_inputs[0].
        let commitment_var = FpVar::<Fr>::new_input(ark_relations::ns!(cs, "commitment"), || {
            self.commitment.ok_or(SynthesisError::AssignmentMissing)
        })?;

        // Private witness: the secret itself.
        let secret_var = FpVar::<Fr>::new_witness(ark_relations::ns!(cs, "secret"), || {
            self.secret.ok_or(SynthesisError::AssignmentMissing)
        })?;

        // In-circuit Poseidon: absorb the secret, squeeze one element, and
        // require it to equal the public commitment. The gadget expands the
        // same round constants as the native sponge in `commitment.rs`.
        let mut sponge = PoseidonSpongeVar::new(cs, &self.config);
        sponge.absorb(&secret_var)?;
        let squeezed = sponge.squeeze_field_elements(1)?;
        squeezed[0].enforce_equal(&commitment_var)?;

        Ok(())
    }
}

/// Build the vector of public inputs that the Groth16 verifier expects.
pub fn public_inputs(commitment: Fr) -> Vec<Fr> {
    vec![commitment]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zkp::commitment::{identity_commitment, poseidon_config};
    use ark_relations::r1cs::ConstraintSystem;

    #[test]
    fn circuit_satisfiable_valid_witness() {
        let config = poseidon_config();
        let secret = Fr::from(123_456_789u64);
        let commitment = identity_commitment(&config, secret);

        let circuit = IdentityCircuit::new(config, secret, commitment);
        let cs = ConstraintSystem::<Fr>::new_ref();
        circuit.generate_constraints(cs.clone()).unwrap();

        assert!(
            cs.is_satisfied().unwrap(),
            "circuit must be satisfied for a valid witness"
        );
    }

    #[test]
    fn circuit_unsatisfied_wrong_commitment() {
        let config = poseidon_config();
        let secret = Fr::from(123_456_789u64);
        // Commit to a DIFFERENT secret.
        let wrong = identity_commitment(&config, Fr::from(999u64));

        let circuit = IdentityCircuit::new(config, secret, wrong);
        let cs = ConstraintSystem::<Fr>::new_ref();
        circuit.generate_constraints(cs.clone()).unwrap();

        assert!(
            !cs.is_satisfied().unwrap(),
            "wrong commitment must not satisfy the circuit"
        );
    }

    #[test]
    fn circuit_unsatisfied_wrong_secret() {
        let config = poseidon_config();
        let commitment = identity_commitment(&config, Fr::from(42u64));

        let circuit = IdentityCircuit::new(config, Fr::from(43u64), commitment);
        let cs = ConstraintSystem::<Fr>::new_ref();
        circuit.generate_constraints(cs.clone()).unwrap();

        assert!(!cs.is_satisfied().unwrap());
    }

    #[test]
    fn public_inputs_match_allocation_order() {
        let config = poseidon_config();
        let commitment = identity_commitment(&config, Fr::from(7u64));

        let inputs = public_inputs(commitment);
        assert_eq!(inputs.len(), 1, "circuit expects exactly 1 public input");
        assert_eq!(inputs[0], commitment);
    }

    #[test]
    fn circuit_constraint_count_is_compact() {
        let config = poseidon_config();
        let secret = Fr::from(1u64);
        let commitment = identity_commitment(&config, secret);

        let circuit = IdentityCircuit::new(config, secret, commitment);
        let cs = ConstraintSystem::<Fr>::new_ref();
        circuit.generate_constraints(cs.clone()).unwrap();

        let n = cs.num_constraints();
        // One sponge permutation plus plumbing. We assert a sane upper
        // bound to catch accidental circuit bloat.
        assert!(n > 50, "too few constraints ({}), something is wrong", n);
        assert!(n < 2000, "too many constraints ({}), circuit bloat", n);
    }
}
