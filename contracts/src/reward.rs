//! # Reward Token
//!
//! The fungible token the vault pays yield in. A deliberately small ledger:
//! issuer-gated minting, balance transfers, and the queries the vault and
//! reporting surfaces need. Amounts are `u64` in smallest units — no
//! floating point, overflow checked on every operation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use arx_protocol::account::AccountId;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur during reward-token operations.
#[derive(Debug, Error)]
pub enum RewardError {
    /// The caller is not the token issuer.
    #[error("unauthorized: only the issuer can mint reward tokens")]
    Unauthorized,

    /// Attempted to transfer more than the source balance.
    #[error("insufficient balance: account {account} has {available}, requested {requested}")]
    InsufficientBalance {
        /// The debited account.
        account: AccountId,
        /// Its current balance.
        available: u64,
        /// The amount that was requested.
        requested: u64,
    },

    /// A supply or balance overflow would occur.
    #[error("amount overflow: operation would exceed u64::MAX")]
    AmountOverflow,
}

// ---------------------------------------------------------------------------
// RewardToken
// ---------------------------------------------------------------------------

/// A minimal fungible token ledger.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RewardToken {
    /// The account allowed to mint new supply.
    issuer: AccountId,
    /// Balances keyed by account.
    balances: HashMap<AccountId, u64>,
    /// Total minted supply.
    total_supply: u64,
}

impl RewardToken {
    /// Creates an empty ledger with `issuer` as the minting authority.
    pub fn new(issuer: AccountId) -> Self {
        Self {
            issuer,
            balances: HashMap::new(),
            total_supply: 0,
        }
    }

    /// Mints `amount` new tokens to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`RewardError::Unauthorized`] unless `caller` is the issuer,
    /// [`RewardError::AmountOverflow`] if supply or balance would overflow.
    pub fn mint(
        &mut self,
        caller: AccountId,
        to: AccountId,
        amount: u64,
    ) -> Result<(), RewardError> {
        if caller != self.issuer {
            return Err(RewardError::Unauthorized);
        }

        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(RewardError::AmountOverflow)?;
        let balance = self.balances.entry(to).or_insert(0);
        let new_balance = balance
            .checked_add(amount)
            .ok_or(RewardError::AmountOverflow)?;

        *balance = new_balance;
        self.total_supply = new_supply;
        Ok(())
    }

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`RewardError::InsufficientBalance`] if `from` cannot cover
    /// the amount; nothing changes on error.
    pub fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: u64,
    ) -> Result<(), RewardError> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(RewardError::InsufficientBalance {
                account: from,
                available,
                requested: amount,
            });
        }

        // Self-transfer must not double-count through two map entries.
        if from == to {
            return Ok(());
        }

        *self.balances.entry(from).or_insert(0) -= amount;
        let to_balance = self.balances.entry(to).or_insert(0);
        *to_balance = to_balance
            .checked_add(amount)
            .ok_or(RewardError::AmountOverflow)?;

        Ok(())
    }

    /// Balance of `account` (0 if never credited).
    pub fn balance_of(&self, account: AccountId) -> u64 {
        self.balances.get(&account).copied().unwrap_or(0)
    }

    /// Total minted supply.
    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }
}
