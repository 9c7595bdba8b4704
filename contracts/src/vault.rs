//! # Staking Vault
//!
//! Escrow and yield accounting for tokenized assets. A credentialed account
//! deposits an asset it owns; custody moves to the vault and a
//! [`StakeRecord`] starts the accrual clock. Yield accrues continuously and
//! linearly on the asset's declared value at the fixed protocol rate
//! (`YIELD_RATE_BPS` in `arx_protocol::config`), with no compounding.
//! Withdrawal returns
//! custody to the original staker — nobody else — and banks the accrued
//! yield; claiming pays the banked plus live yield out of the vault's own
//! reward-token balance.
//!
//! ## Discipline
//!
//! Checks, then effects, then interactions. Every fallible precondition is
//! evaluated before the first mutation, and stake/yield bookkeeping is
//! finalized before the custody or reward transfer capability is invoked.
//! An error return therefore always means "nothing happened".
//!
//! ## Wiring
//!
//! The vault holds no foreign state. The credential ledger, asset ledger,
//! and reward token are passed in by handle per call — the vault is the
//! sole mutator of stakes and yield balances, and only ever a *caller* of
//! the other components.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use arx_protocol::account::AccountId;
use arx_protocol::config::{BPS_DENOMINATOR, SECONDS_PER_YEAR, YIELD_RATE_BPS};

use crate::clock::Clock;
use crate::credential::CredentialLedger;
use crate::registry::{AssetError, AssetId, AssetLedger};
use crate::reward::{RewardError, RewardToken};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur during vault operations.
#[derive(Debug, Error)]
pub enum VaultError {
    /// The caller has not cleared the compliance check.
    #[error("account {0} is not verified")]
    NotVerified(AccountId),

    /// No stake record exists for this asset.
    #[error("asset {0} is not staked in the vault")]
    NotStaked(AssetId),

    /// The caller did not stake this asset. Withdrawal is staker-only.
    #[error("account {caller} is not the staker of asset {asset_id} (staked by {staker})")]
    NotStaker {
        /// The asset in question.
        asset_id: AssetId,
        /// Who tried to withdraw.
        caller: AccountId,
        /// Who actually staked it.
        staker: AccountId,
    },

    /// The caller has no pending yield.
    #[error("nothing to claim")]
    NothingToClaim,

    /// The vault's reward balance cannot cover the payout. Operationally
    /// fatal — the vault must be topped up out-of-band.
    #[error("vault underfunded: payout requires {required}, vault holds {available}")]
    InsufficientVaultBalance {
        /// The payout that was due.
        required: u64,
        /// What the vault actually holds.
        available: u64,
    },

    /// A custody operation on the asset ledger failed.
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// A reward-token operation failed.
    #[error(transparent)]
    Reward(#[from] RewardError),
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Bookkeeping entry for one staked asset.
///
/// Exists iff the asset's custodian is currently the vault.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeRecord {
    /// The staked asset.
    pub asset_id: AssetId,
    /// The account that deposited it (and the only one that may withdraw).
    pub staker: AccountId,
    /// When the asset was deposited.
    pub staked_at: DateTime<Utc>,
    /// Start of the current accrual window. Reset on every claim.
    pub checkpoint: DateTime<Utc>,
}

/// The staking vault.
pub struct StakingVault {
    /// The vault's own address — custodian of staked assets and holder of
    /// the reward-token float.
    address: AccountId,
    /// Active stakes keyed by asset id.
    stakes: HashMap<AssetId, StakeRecord>,
    /// Banked (checkpointed but unclaimed) yield per account.
    yield_balances: HashMap<AccountId, u64>,
    /// Ledger timestamp source.
    clock: Arc<dyn Clock>,
}

impl StakingVault {
    /// Creates an empty vault operating as `address`.
    pub fn new(address: AccountId, clock: Arc<dyn Clock>) -> Self {
        Self {
            address,
            stakes: HashMap::new(),
            yield_balances: HashMap::new(),
            clock,
        }
    }

    /// The vault's own account address.
    pub fn address(&self) -> AccountId {
        self.address
    }

    /// The stake record for an asset, if currently staked.
    pub fn stake(&self, asset_id: AssetId) -> Option<&StakeRecord> {
        self.stakes.get(&asset_id)
    }

    /// Number of currently active stakes across all accounts.
    pub fn active_stakes(&self) -> usize {
        self.stakes.len()
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Deposits `asset_id` into the vault on behalf of `caller`.
    ///
    /// The caller must hold a compliance credential, must custody the
    /// asset, and must have approved the vault as transfer operator.
    /// On success custody moves to the vault and accrual begins.
    ///
    /// # Errors
    ///
    /// [`VaultError::NotVerified`] without a credential; the underlying
    /// [`AssetError`] (`NotFound` / `NotOwner` / `NotApproved`) if the
    /// custody pull is impossible — including a second deposit of an
    /// already-staked asset, which fails `NotOwner` because custody has
    /// already moved.
    pub fn deposit(
        &mut self,
        caller: AccountId,
        credentials: &CredentialLedger,
        assets: &mut AssetLedger,
        asset_id: AssetId,
    ) -> Result<(), VaultError> {
        if !credentials.is_verified(caller) {
            return Err(VaultError::NotVerified(caller));
        }
        assets.ensure_transferable(self.address, caller, asset_id)?;

        // Effects: the stake record exists before the custody call runs.
        let now = self.clock.now();
        let record = StakeRecord {
            asset_id,
            staker: caller,
            staked_at: now,
            checkpoint: now,
        };
        self.stakes.insert(asset_id, record);

        if let Err(err) = assets.transfer_from(self.address, caller, self.address, asset_id) {
            self.stakes.remove(&asset_id);
            return Err(err.into());
        }

        tracing::info!(asset_id, staker = %caller, "asset deposited");
        Ok(())
    }

    /// Withdraws `asset_id`, returning custody to the original staker.
    ///
    /// Pending yield for the stake is banked into the caller's yield
    /// balance before the record is deleted, so nothing accrued is lost.
    ///
    /// # Errors
    ///
    /// [`VaultError::NotStaked`] if there is no stake record, and
    /// [`VaultError::NotStaker`] if `caller` is not the account that
    /// deposited the asset.
    pub fn withdraw(
        &mut self,
        caller: AccountId,
        assets: &mut AssetLedger,
        asset_id: AssetId,
    ) -> Result<(), VaultError> {
        let record = match self.stakes.get(&asset_id) {
            Some(record) => *record,
            None => return Err(VaultError::NotStaked(asset_id)),
        };
        if record.staker != caller {
            return Err(VaultError::NotStaker {
                asset_id,
                caller,
                staker: record.staker,
            });
        }
        let declared_value = assets.get_asset(asset_id)?.declared_value;
        assets.ensure_transferable(self.address, self.address, asset_id)?;

        // Effects: bank the accrued yield and drop the record before the
        // custody call runs.
        let now = self.clock.now();
        let earned = accrued(declared_value, record.checkpoint, now);
        let balance = self.yield_balances.entry(caller).or_insert(0);
        *balance = balance.saturating_add(earned);
        self.stakes.remove(&asset_id);

        if let Err(err) = assets.transfer_from(self.address, self.address, caller, asset_id) {
            // Restore bookkeeping if the custody call refuses.
            self.stakes.insert(asset_id, record);
            if let Some(balance) = self.yield_balances.get_mut(&caller) {
                *balance = balance.saturating_sub(earned);
            }
            return Err(err.into());
        }

        tracing::info!(asset_id, staker = %caller, earned, "asset withdrawn");
        Ok(())
    }

    /// Pays out all pending yield to `caller` and returns the amount.
    ///
    /// Resets the caller's banked balance and every active stake
    /// checkpoint to "now", so no second of accrual is ever counted twice.
    ///
    /// # Errors
    ///
    /// [`VaultError::NothingToClaim`] if the computed payout is zero, and
    /// [`VaultError::InsufficientVaultBalance`] if the vault's reward float
    /// cannot cover it (checked before any mutation).
    pub fn claim_yield(
        &mut self,
        caller: AccountId,
        assets: &AssetLedger,
        rewards: &mut RewardToken,
    ) -> Result<u64, VaultError> {
        let now = self.clock.now();
        let pending = self.pending_yield_at(assets, caller, now);
        if pending == 0 {
            return Err(VaultError::NothingToClaim);
        }

        let available = rewards.balance_of(self.address);
        if available < pending {
            return Err(VaultError::InsufficientVaultBalance {
                required: pending,
                available,
            });
        }
        if rewards.balance_of(caller).checked_add(pending).is_none() {
            return Err(RewardError::AmountOverflow.into());
        }

        // Effects: burn the claim out of the books before paying out.
        self.yield_balances.insert(caller, 0);
        for record in self.stakes.values_mut().filter(|r| r.staker == caller) {
            record.checkpoint = now;
        }

        rewards.transfer(self.address, caller, pending)?;

        tracing::info!(account = %caller, amount = pending, "yield claimed");
        Ok(pending)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Total unclaimed yield owed to `account`: the banked balance plus
    /// live accrual on every active stake. Pure read; never decreases
    /// between reads absent a claim or withdrawal.
    pub fn pending_yield(&self, assets: &AssetLedger, account: AccountId) -> u64 {
        self.pending_yield_at(assets, account, self.clock.now())
    }

    fn pending_yield_at(
        &self,
        assets: &AssetLedger,
        account: AccountId,
        now: DateTime<Utc>,
    ) -> u64 {
        let banked = self.yield_balances.get(&account).copied().unwrap_or(0);

        self.stakes
            .values()
            .filter(|record| record.staker == account)
            .fold(banked, |total, record| {
                let value = assets
                    .get_asset(record.asset_id)
                    .map(|a| a.declared_value)
                    .unwrap_or_default();
                total.saturating_add(accrued(value, record.checkpoint, now))
            })
    }

    /// Sum of declared values across all staked assets. Derived on read,
    /// never stored, so it cannot drift from the stake set.
    pub fn total_value_locked(&self, assets: &AssetLedger) -> u64 {
        self.stakes.keys().fold(0u64, |total, asset_id| {
            let value = assets
                .get_asset(*asset_id)
                .map(|a| a.declared_value)
                .unwrap_or_default();
            total.saturating_add(value)
        })
    }
}

// ---------------------------------------------------------------------------
// Accrual arithmetic
// ---------------------------------------------------------------------------

/// Linear yield on `declared_value` over `[from, to]` at the fixed protocol
/// rate. Widened to u128 so value × seconds × rate cannot overflow;
/// saturates at `u64::MAX` on the way back down.
fn accrued(declared_value: u64, from: DateTime<Utc>, to: DateTime<Utc>) -> u64 {
    let elapsed_secs = (to - from).num_seconds().max(0) as u128;

    let numerator = declared_value as u128 * elapsed_secs * YIELD_RATE_BPS as u128;
    let denominator = BPS_DENOMINATOR as u128 * SECONDS_PER_YEAR as u128;

    u64::try_from(numerator / denominator).unwrap_or(u64::MAX)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
