//! # ARX Compliant-Asset-Vault Contracts
//!
//! On-chain logic for the ARX real-world-asset platform. Four components,
//! each the sole mutator of its own keyed state, wired together by explicit
//! handles rather than ambient globals:
//!
//! - **Credential Issuer** — verifies a Groth16 identity proof and issues a
//!   non-transferable compliance credential, one per account, ever.
//! - **Asset Registry** — the tokenized-asset ledger: minter-gated minting,
//!   sequential asset ids, metadata, and the approve/transfer custody
//!   primitive everything else builds on.
//! - **Staking Vault** — escrows tokenized assets for credentialed accounts
//!   and accrues linear yield on their declared value.
//! - **Reserve Oracle** — advisory proof-of-reserve readings from an
//!   external feed. Display-grade data, never consensus-grade.
//!
//! ## Design Principles
//!
//! 1. All monetary operations check for overflow — we use `checked_add`,
//!    `checked_sub`, and widened intermediates everywhere, because wrapping
//!    arithmetic and money do not mix.
//! 2. Operations are all-or-nothing: every fallible check runs before the
//!    first state mutation, so a returned error implies untouched state.
//! 3. Checks, then effects, then interactions: custody and yield
//!    bookkeeping are finalized before any transfer capability is invoked.
//! 4. Every public type is serializable (serde) for wire transport and
//!    persistent storage.

pub mod clock;
pub mod credential;
pub mod issuer;
pub mod oracle;
pub mod registry;
pub mod reward;
pub mod vault;
