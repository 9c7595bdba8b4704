//! # Poseidon Identity Commitment
//!
//! The public face of a private identity. A user picks a secret scalar `s`
//! (or derives one from a passphrase) and publishes
//!
//! ```text
//! c = Poseidon(s)
//! ```
//!
//! The commitment is deterministic and one-way: anyone can check that a
//! claimed commitment matches a revealed secret, but nobody can walk back
//! from `c` to `s`. Poseidon is the right hash here — not BLAKE3 — because
//! the same computation must also run *inside* the Groth16 circuit, where
//! an arithmetization-friendly permutation costs a few hundred constraints
//! instead of tens of thousands.
//!
//! The sponge parameters live in [`crate::config`] and are shared verbatim
//! by the native hash below and the in-circuit gadget in
//! [`super::circuit`], so the two can never disagree.

use ark_bn254::Fr;
use ark_crypto_primitives::sponge::poseidon::{
    find_poseidon_ark_and_mds, PoseidonConfig, PoseidonSponge,
};
use ark_crypto_primitives::sponge::{CryptographicSponge, FieldBasedCryptographicSponge};
use ark_ff::PrimeField;

use crate::config::{
    POSEIDON_ALPHA, POSEIDON_CAPACITY, POSEIDON_FULL_ROUNDS, POSEIDON_PARTIAL_ROUNDS,
    POSEIDON_RATE,
};

/// Builds the canonical Poseidon configuration for the identity commitment.
///
/// Round constants and the MDS matrix are derived deterministically from
/// the parameters in [`crate::config`] (Grain-LFSR expansion, the standard
/// arkworks construction), so every prover and verifier reconstructs the
/// identical sponge with no parameter files to ship.
pub fn poseidon_config() -> PoseidonConfig<Fr> {
    let (ark, mds) = find_poseidon_ark_and_mds::<Fr>(
        Fr::MODULUS_BIT_SIZE as u64,
        POSEIDON_RATE,
        POSEIDON_FULL_ROUNDS,
        POSEIDON_PARTIAL_ROUNDS,
        0,
    );

    PoseidonConfig::new(
        POSEIDON_FULL_ROUNDS as usize,
        POSEIDON_PARTIAL_ROUNDS as usize,
        POSEIDON_ALPHA,
        mds,
        ark,
        POSEIDON_RATE,
        POSEIDON_CAPACITY,
    )
}

/// Computes the identity commitment `Poseidon(secret)`.
pub fn identity_commitment(config: &PoseidonConfig<Fr>, secret: Fr) -> Fr {
    let mut sponge = PoseidonSponge::new(config);
    sponge.absorb(&secret);
    sponge.squeeze_native_field_elements(1)[0]
}

/// Derives a secret scalar from a human-memorable passphrase.
///
/// `BLAKE3(passphrase)` reduced into the scalar field. This is a
/// convenience for tooling and tests — wallets that manage real entropy
/// should sample the scalar directly.
pub fn secret_from_passphrase(passphrase: &str) -> Fr {
    let digest = blake3::hash(passphrase.as_bytes());
    Fr::from_le_bytes_mod_order(digest.as_bytes())
}
