//! Integration tests for the compliant-asset-vault system.
//!
//! These tests wire the full deployment — credential issuer, asset ledger,
//! reward token, staking vault, reserve oracle — and exercise scenarios
//! across component boundaries: compliance gating, custody round trips,
//! yield accrual over simulated time, and failure atomicity. The proof
//! verifier is mocked here; the real Groth16 gate is covered in
//! `proof_gate_test.rs`.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use arx_contracts::clock::ManualClock;
use arx_contracts::issuer::{CredentialIssuer, MockProofVerifier};
use arx_contracts::oracle::{ReserveOracle, StaticReserveFeed};
use arx_contracts::registry::{AssetError, AssetId, AssetLedger};
use arx_contracts::reward::RewardToken;
use arx_contracts::vault::{StakingVault, VaultError};
use arx_protocol::account::AccountId;
use arx_protocol::config::COIN;
use arx_protocol::zkp::ProofCalldata;

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

struct System {
    clock: Arc<ManualClock>,
    issuer: CredentialIssuer,
    assets: AssetLedger,
    rewards: RewardToken,
    vault: StakingVault,
    oracle: ReserveOracle,
    owner: AccountId,
    user: AccountId,
    other: AccountId,
}

/// Deploys the full system with a mock verifier that accepts everything,
/// and seeds the vault with a reward float — the Rust rendition of the
/// deployment fixture the contracts ship with.
fn deploy_system() -> System {
    let start = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
    let clock = ManualClock::starting_at(start);

    let owner = AccountId::derive(b"owner");
    let user = AccountId::derive(b"user");
    let other = AccountId::derive(b"other");
    let vault_addr = AccountId::derive(b"vault");

    let issuer = CredentialIssuer::new(
        Box::new(MockProofVerifier { verdict: true }),
        clock.clone(),
    );
    let assets = AssetLedger::new(owner, clock.clone());
    let mut rewards = RewardToken::new(owner);
    let vault = StakingVault::new(vault_addr, clock.clone());
    let oracle = ReserveOracle::new(Box::new(StaticReserveFeed {
        amount: COIN, // 1.00
        updated_at: start,
    }));

    // Fund the vault so it can pay yield.
    rewards.mint(owner, vault_addr, 1_000 * COIN).unwrap();

    System {
        clock,
        issuer,
        assets,
        rewards,
        vault,
        oracle,
        owner,
        user,
        other,
    }
}

/// Calldata accepted by the mock verifier; content is irrelevant.
fn zero_calldata() -> ProofCalldata {
    let zero = || "0".to_string();
    ProofCalldata {
        a: [zero(), zero()],
        b: [[zero(), zero()], [zero(), zero()]],
        c: [zero(), zero()],
        input: [zero()],
    }
}

fn mint_asset(sys: &mut System, to: AccountId, value: u64) -> AssetId {
    sys.assets
        .mint(sys.owner, to, "ipfs://test", true, "RealEstate", value, "{}")
        .unwrap()
}

// ---------------------------------------------------------------------------
// Asset Tokenization
// ---------------------------------------------------------------------------

#[test]
fn mint_tokenized_asset_with_regulation_flag() {
    let mut sys = deploy_system();

    let to = sys.user;
    let id = mint_asset(&mut sys, to, 100_000 * COIN);

    assert_eq!(id, 0);
    assert_eq!(sys.assets.owner_of(id).unwrap(), sys.user);
    assert_eq!(sys.assets.token_uri(id).unwrap(), "ipfs://test");
    assert!(sys.assets.is_regulated(id).unwrap());
}

#[test]
fn only_minter_can_mint() {
    let mut sys = deploy_system();

    let result = sys.assets.mint(
        sys.user,
        sys.user,
        "uri",
        true,
        "RealEstate",
        100_000 * COIN,
        "{}",
    );

    assert!(matches!(result, Err(AssetError::Unauthorized)));
    assert_eq!(sys.assets.total_minted(), 0);
}

// ---------------------------------------------------------------------------
// Compliance Credential (Soulbound)
// ---------------------------------------------------------------------------

#[test]
fn verified_user_holds_exactly_one_credential() {
    let mut sys = deploy_system();

    sys.issuer.verify(sys.user, &zero_calldata()).unwrap();
    assert_eq!(sys.issuer.ledger().balance_of(sys.user), 1);

    // Re-verification must not mint a second credential.
    assert!(sys.issuer.verify(sys.user, &zero_calldata()).is_err());
    assert_eq!(sys.issuer.ledger().balance_of(sys.user), 1);
}

#[test]
fn credential_transfer_not_allowed() {
    let mut sys = deploy_system();
    sys.issuer.verify(sys.user, &zero_calldata()).unwrap();

    let result = sys.issuer.ledger_mut().transfer(sys.user, sys.other);
    assert!(result.is_err());

    assert!(sys.issuer.is_verified(sys.user));
    assert!(!sys.issuer.is_verified(sys.other));
}

// ---------------------------------------------------------------------------
// Vault Operations
// ---------------------------------------------------------------------------

#[test]
fn only_verified_users_can_deposit() {
    let mut sys = deploy_system();
    let to = sys.user;
    let id = mint_asset(&mut sys, to, 100_000 * COIN);
    sys.assets
        .approve(sys.user, sys.vault.address(), id)
        .unwrap();

    let result = sys
        .vault
        .deposit(sys.user, sys.issuer.ledger(), &mut sys.assets, id);

    assert!(matches!(result, Err(VaultError::NotVerified(_))));
    assert_eq!(sys.assets.owner_of(id).unwrap(), sys.user);
}

#[test]
fn verified_user_can_deposit_and_withdraw() {
    let mut sys = deploy_system();
    sys.issuer.verify(sys.user, &zero_calldata()).unwrap();

    let to = sys.user;
    let id = mint_asset(&mut sys, to, 100_000 * COIN);
    sys.assets
        .approve(sys.user, sys.vault.address(), id)
        .unwrap();
    sys.vault
        .deposit(sys.user, sys.issuer.ledger(), &mut sys.assets, id)
        .unwrap();

    assert_eq!(sys.assets.owner_of(id).unwrap(), sys.vault.address());

    sys.vault.withdraw(sys.user, &mut sys.assets, id).unwrap();
    assert_eq!(sys.assets.owner_of(id).unwrap(), sys.user);
}

#[test]
fn withdrawal_restricted_to_staker() {
    let mut sys = deploy_system();
    sys.issuer.verify(sys.user, &zero_calldata()).unwrap();

    let to = sys.user;
    let id = mint_asset(&mut sys, to, 100_000 * COIN);
    sys.assets
        .approve(sys.user, sys.vault.address(), id)
        .unwrap();
    sys.vault
        .deposit(sys.user, sys.issuer.ledger(), &mut sys.assets, id)
        .unwrap();

    let result = sys.vault.withdraw(sys.other, &mut sys.assets, id);
    assert!(matches!(result, Err(VaultError::NotStaker { .. })));
    assert_eq!(sys.assets.owner_of(id).unwrap(), sys.vault.address());
}

#[test]
fn yield_accumulates_over_time() {
    let mut sys = deploy_system();
    sys.issuer.verify(sys.user, &zero_calldata()).unwrap();

    let to = sys.user;
    let id = mint_asset(&mut sys, to, 100_000 * COIN);
    sys.assets
        .approve(sys.user, sys.vault.address(), id)
        .unwrap();
    sys.vault
        .deposit(sys.user, sys.issuer.ledger(), &mut sys.assets, id)
        .unwrap();

    // Fast forward 1 hour.
    sys.clock.advance_secs(3600);

    sys.vault.withdraw(sys.user, &mut sys.assets, id).unwrap();

    let earned = sys.vault.pending_yield(&sys.assets, sys.user);
    assert!(earned > 0);

    let initial = sys.rewards.balance_of(sys.user);
    sys.vault
        .claim_yield(sys.user, &sys.assets, &mut sys.rewards)
        .unwrap();
    let final_balance = sys.rewards.balance_of(sys.user);

    assert!(final_balance > initial);
}

/// The full happy path, end to end: verify → mint → deposit → accrue →
/// withdraw → claim, with custody and payout amounts checked at every hop.
#[test]
fn full_round_trip_scenario() {
    let mut sys = deploy_system();

    // 1. Clear the compliance check.
    sys.issuer.verify(sys.user, &zero_calldata()).unwrap();
    assert!(sys.issuer.is_verified(sys.user));

    // 2. Tokenize asset #0.
    let to = sys.user;
    let id = mint_asset(&mut sys, to, 100_000 * COIN);
    assert_eq!(id, 0);

    // 3. Approve and deposit.
    sys.assets
        .approve(sys.user, sys.vault.address(), id)
        .unwrap();
    sys.vault
        .deposit(sys.user, sys.issuer.ledger(), &mut sys.assets, id)
        .unwrap();
    assert_eq!(sys.vault.total_value_locked(&sys.assets), 100_000 * COIN);

    // 4. Let an hour of yield accrue.
    sys.clock.advance_secs(3600);
    let pending = sys.vault.pending_yield(&sys.assets, sys.user);
    assert!(pending > 0);

    // 5. Withdraw — custody reverts, accrued yield is preserved.
    sys.vault.withdraw(sys.user, &mut sys.assets, id).unwrap();
    assert_eq!(sys.assets.owner_of(id).unwrap(), sys.user);
    assert_eq!(sys.vault.total_value_locked(&sys.assets), 0);
    assert_eq!(sys.vault.pending_yield(&sys.assets, sys.user), pending);

    // 6. Claim pays exactly the reported pending amount and resets it.
    let before = sys.rewards.balance_of(sys.user);
    let paid = sys
        .vault
        .claim_yield(sys.user, &sys.assets, &mut sys.rewards)
        .unwrap();

    assert_eq!(paid, pending);
    assert_eq!(sys.rewards.balance_of(sys.user), before + pending);
    assert_eq!(sys.vault.pending_yield(&sys.assets, sys.user), 0);
}

#[test]
fn double_deposit_of_same_asset_rejected() {
    let mut sys = deploy_system();
    sys.issuer.verify(sys.user, &zero_calldata()).unwrap();

    let to = sys.user;
    let id = mint_asset(&mut sys, to, 100_000 * COIN);
    sys.assets
        .approve(sys.user, sys.vault.address(), id)
        .unwrap();
    sys.vault
        .deposit(sys.user, sys.issuer.ledger(), &mut sys.assets, id)
        .unwrap();

    let result = sys
        .vault
        .deposit(sys.user, sys.issuer.ledger(), &mut sys.assets, id);
    assert!(matches!(
        result,
        Err(VaultError::Asset(AssetError::NotOwner { .. }))
    ));
}

#[test]
fn underfunded_vault_surfaces_fatal_error() {
    let mut sys = deploy_system();
    sys.issuer.verify(sys.user, &zero_calldata()).unwrap();

    // A vault with no reward float.
    let broke_addr = AccountId::derive(b"broke-vault");
    let mut broke_vault = StakingVault::new(broke_addr, sys.clock.clone());

    let to = sys.user;
    let id = mint_asset(&mut sys, to, 100_000 * COIN);
    sys.assets.approve(sys.user, broke_addr, id).unwrap();
    broke_vault
        .deposit(sys.user, sys.issuer.ledger(), &mut sys.assets, id)
        .unwrap();

    sys.clock.advance_secs(3600);

    let result = broke_vault.claim_yield(sys.user, &sys.assets, &mut sys.rewards);
    assert!(matches!(
        result,
        Err(VaultError::InsufficientVaultBalance { .. })
    ));
    // The failed claim is all-or-nothing: pending yield is untouched.
    assert!(broke_vault.pending_yield(&sys.assets, sys.user) > 0);
}

// ---------------------------------------------------------------------------
// Reserve Oracle
// ---------------------------------------------------------------------------

#[test]
fn reserve_reading_is_advisory_and_stable() {
    let sys = deploy_system();

    let reading = sys.oracle.get_latest_reserve();
    assert_eq!(reading.amount, COIN);
    assert_eq!(sys.oracle.get_latest_reserve(), reading);
}
