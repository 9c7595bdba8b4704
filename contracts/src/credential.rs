//! # Compliance Credential Ledger
//!
//! The soulbound half of the compliance gate. A [`Credential`] marks an
//! account as having cleared the zero-knowledge identity check. It behaves
//! like a token balance in exactly one respect — it can be queried — and
//! unlike one in every other: it cannot be transferred, not by the holder,
//! not by anyone; it cannot be re-issued; and the base design never
//! destroys it (revocation is deliberately out of scope — see DESIGN.md).
//!
//! Issuance authority belongs to the [`super::issuer::CredentialIssuer`],
//! which is the only component holding a mutable handle to this ledger in
//! a correctly wired deployment.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use arx_protocol::account::AccountId;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur during credential operations.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The submitted proof did not verify against the caller's commitment.
    #[error("invalid proof: zero-knowledge identity check failed")]
    InvalidProof,

    /// The account already holds a credential. One per identity, ever —
    /// re-submission is rejected rather than re-minted.
    #[error("account {0} is already verified")]
    AlreadyVerified(AccountId),

    /// Credentials are soulbound. Any transfer attempt fails, including
    /// by the holder.
    #[error("credential is non-transferable")]
    NonTransferable,
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A non-transferable compliance credential.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// The account this credential is bound to.
    pub account: AccountId,
    /// When the credential was issued.
    pub issued_at: DateTime<Utc>,
}

/// The credential ledger: `account → Credential`, at most one entry each.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CredentialLedger {
    credentials: HashMap<AccountId, Credential>,
}

impl CredentialLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self {
            credentials: HashMap::new(),
        }
    }

    /// Records a credential for `account`.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::AlreadyVerified`] if the account already
    /// holds one.
    pub(crate) fn issue(
        &mut self,
        account: AccountId,
        issued_at: DateTime<Utc>,
    ) -> Result<(), CredentialError> {
        if self.credentials.contains_key(&account) {
            return Err(CredentialError::AlreadyVerified(account));
        }

        self.credentials
            .insert(account, Credential { account, issued_at });
        Ok(())
    }

    /// Returns `true` if `account` holds a credential.
    pub fn is_verified(&self, account: AccountId) -> bool {
        self.credentials.contains_key(&account)
    }

    /// Returns the credential record for `account`, if any.
    pub fn credential(&self, account: AccountId) -> Option<&Credential> {
        self.credentials.get(&account)
    }

    /// Credential "balance" of an account: 0 or 1.
    pub fn balance_of(&self, account: AccountId) -> u64 {
        u64::from(self.is_verified(account))
    }

    /// Attempts to transfer a credential. Always fails — the whole point
    /// of a soulbound credential is that this is not an operation.
    pub fn transfer(
        &mut self,
        _from: AccountId,
        _to: AccountId,
    ) -> Result<(), CredentialError> {
        Err(CredentialError::NonTransferable)
    }

    /// Number of credentials ever issued.
    pub fn total_issued(&self) -> usize {
        self.credentials.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(label: &str) -> AccountId {
        AccountId::derive(label.as_bytes())
    }

    #[test]
    fn issue_then_query() {
        let mut ledger = CredentialLedger::new();
        let alice = account("alice");

        assert!(!ledger.is_verified(alice));
        ledger.issue(alice, Utc::now()).unwrap();

        assert!(ledger.is_verified(alice));
        assert_eq!(ledger.balance_of(alice), 1);
        assert_eq!(ledger.credential(alice).unwrap().account, alice);
    }

    #[test]
    fn second_issue_rejected() {
        let mut ledger = CredentialLedger::new();
        let alice = account("alice");

        ledger.issue(alice, Utc::now()).unwrap();
        let result = ledger.issue(alice, Utc::now());

        assert!(matches!(result, Err(CredentialError::AlreadyVerified(a)) if a == alice));
        assert_eq!(ledger.total_issued(), 1);
    }

    #[test]
    fn transfer_always_fails() {
        let mut ledger = CredentialLedger::new();
        let alice = account("alice");
        let bob = account("bob");
        ledger.issue(alice, Utc::now()).unwrap();

        // Holder-initiated, recipient-initiated — doesn't matter.
        assert!(matches!(
            ledger.transfer(alice, bob),
            Err(CredentialError::NonTransferable)
        ));
        assert!(matches!(
            ledger.transfer(bob, alice),
            Err(CredentialError::NonTransferable)
        ));

        // And nothing moved.
        assert!(ledger.is_verified(alice));
        assert!(!ledger.is_verified(bob));
    }

    #[test]
    fn unverified_account_has_zero_balance() {
        let ledger = CredentialLedger::new();
        assert_eq!(ledger.balance_of(account("nobody")), 0);
        assert!(ledger.credential(account("nobody")).is_none());
    }
}
