//! # Protocol Configuration & Constants
//!
//! Every magic number in ARX lives here. If you're hardcoding a constant
//! somewhere else, you're doing it wrong and you owe the team coffee.
//!
//! Economic parameters (the yield rate above all) are consensus-critical:
//! every deployment must agree on them or accounts will compute different
//! payouts for the same stake. Change them on devnet, never after launch.

// ---------------------------------------------------------------------------
// Monetary Units
// ---------------------------------------------------------------------------

/// Number of decimal places in protocol amounts. 8 decimals, same as
/// Bitcoin. We're not reinventing this wheel.
pub const AMOUNT_DECIMALS: u8 = 8;

/// Smallest units per whole token: 10^[`AMOUNT_DECIMALS`].
///
/// Declared asset values and reward-token amounts are both expressed in
/// these units. The protocol never divides by this — it exists for display
/// and for writing legible test fixtures (`100_000 * COIN`).
pub const COIN: u64 = 100_000_000;

// ---------------------------------------------------------------------------
// Yield Parameters
// ---------------------------------------------------------------------------

/// Fixed annual yield rate on staked declared value, in basis points.
/// 1 bp = 0.01%, so 500 = 5.00% APR.
///
/// Accrual is continuous and linear: a stake of declared value `v` earns
/// `v * YIELD_RATE_BPS / BPS_DENOMINATOR` reward units per
/// [`SECONDS_PER_YEAR`] seconds, pro-rated to the second. No compounding.
pub const YIELD_RATE_BPS: u64 = 500;

/// Basis-point denominator. 10_000 bps = 100%.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Seconds per (non-leap) year, the accrual period the APR is quoted over.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

// ---------------------------------------------------------------------------
// Zero-Knowledge Parameters
// ---------------------------------------------------------------------------

/// ZKP curve: BN254 (a.k.a. alt_bn128). Chosen because:
/// 1. Groth16 support is mature in arkworks.
/// 2. Ethereum precompiles exist for it (interop matters).
/// 3. Proving times are trivial for a circuit this small.
pub const ZKP_CURVE: &str = "BN254";

/// Number of scalars in the on-chain proof encoding: `a` contributes 2,
/// `b` contributes 4, `c` contributes 2. This is the exact shape of
/// Groth16 verifier calldata on the EVM, which ARX mirrors byte for byte.
pub const PROOF_SCALARS: usize = 8;

/// Number of public inputs to the identity circuit: exactly one, the
/// Poseidon identity commitment.
pub const PUBLIC_INPUT_SCALARS: usize = 1;

// ---------------------------------------------------------------------------
// Poseidon Sponge Parameters
// ---------------------------------------------------------------------------
//
// Standard x^5 Poseidon over the BN254 scalar field. The round counts give
// a comfortable margin over the 128-bit security target for t = 3 (rate 2,
// capacity 1). Both the native hash and the in-circuit gadget derive their
// round constants from these values, so the two can never drift apart.

/// Sponge rate (field elements absorbed per permutation).
pub const POSEIDON_RATE: usize = 2;

/// Sponge capacity.
pub const POSEIDON_CAPACITY: usize = 1;

/// S-box exponent. x^5 is the standard choice for BN254.
pub const POSEIDON_ALPHA: u64 = 5;

/// Number of full rounds (S-box applied to every state element).
pub const POSEIDON_FULL_ROUNDS: u64 = 8;

/// Number of partial rounds (S-box applied to one state element).
pub const POSEIDON_PARTIAL_ROUNDS: u64 = 57;
