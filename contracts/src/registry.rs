//! # Asset Registry & Tokenized-Asset Ledger
//!
//! The system of record for tokenized real-world assets. Each mint creates
//! an [`AssetRecord`]: who custodies it, what the issuer declared it to be
//! (category, monetary value, regulation flag), and where the off-chain
//! description lives (content URI, opaque metadata blob).
//!
//! Declared values are caller-asserted and unvalidated — a trust-on-mint
//! model. Minting is restricted to a single privileged account fixed at
//! construction, which is where that trust is anchored.
//!
//! The ledger is also the custody-transfer capability the vault consumes:
//! `approve` + `transfer_from` with standard non-fungible semantics. At any
//! point in time an asset has exactly one custodian; asset ids are assigned
//! sequentially from zero and never reused; there is no burn.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use arx_protocol::account::AccountId;

use crate::clock::Clock;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur during asset ledger operations.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The caller is not the designated minter.
    #[error("unauthorized: only the minter may mint assets")]
    Unauthorized,

    /// The referenced asset id has never been assigned.
    #[error("asset {0} not found")]
    NotFound(AssetId),

    /// The stated owner does not custody the asset.
    #[error("account {claimed} does not own asset {asset_id} (owner is {actual})")]
    NotOwner {
        /// The asset in question.
        asset_id: AssetId,
        /// Who the caller claimed owns it.
        claimed: AccountId,
        /// Who actually does.
        actual: AccountId,
    },

    /// The operator has no approval to move this asset.
    #[error("operator {operator} is not approved to transfer asset {asset_id}")]
    NotApproved {
        /// The asset in question.
        asset_id: AssetId,
        /// The operator that attempted the transfer.
        operator: AccountId,
    },
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Sequentially-assigned asset identifier, starting at zero.
pub type AssetId = u64;

/// A tokenized real-world asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Unique asset id.
    pub asset_id: AssetId,
    /// Current custodian — an external account, or the vault while staked.
    pub owner: AccountId,
    /// Content pointer to the off-chain asset description (e.g. `ipfs://…`).
    pub uri: String,
    /// Whether the asset is subject to securities regulation.
    pub regulated: bool,
    /// Free-form asset category ("Invoice", "RealEstate", ...).
    pub category: String,
    /// Issuer-declared monetary value in smallest units. Unvalidated.
    pub declared_value: u64,
    /// Opaque metadata blob, carried verbatim.
    pub metadata: String,
    /// When the asset was minted.
    pub minted_at: DateTime<Utc>,
}

/// The asset ledger.
///
/// Sole mutator of asset metadata and custody. Approvals are per-asset,
/// single-operator, and cleared on every transfer.
pub struct AssetLedger {
    /// The privileged minting account, fixed at deployment.
    minter: AccountId,
    /// Next asset id to assign.
    next_id: AssetId,
    /// Asset records keyed by id.
    assets: HashMap<AssetId, AssetRecord>,
    /// Transfer approvals: asset id → approved operator.
    approvals: HashMap<AssetId, AccountId>,
    /// Ledger timestamp source.
    clock: Arc<dyn Clock>,
}

impl AssetLedger {
    /// Creates an empty ledger with `minter` as the privileged account.
    pub fn new(minter: AccountId, clock: Arc<dyn Clock>) -> Self {
        Self {
            minter,
            next_id: 0,
            assets: HashMap::new(),
            approvals: HashMap::new(),
            clock,
        }
    }

    /// Mints a new tokenized asset to `owner` and returns its id.
    ///
    /// Ids are assigned sequentially — no reuse, no gaps.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Unauthorized`] unless `caller` is the minter.
    #[allow(clippy::too_many_arguments)]
    pub fn mint(
        &mut self,
        caller: AccountId,
        owner: AccountId,
        uri: impl Into<String>,
        regulated: bool,
        category: impl Into<String>,
        declared_value: u64,
        metadata: impl Into<String>,
    ) -> Result<AssetId, AssetError> {
        if caller != self.minter {
            return Err(AssetError::Unauthorized);
        }

        let asset_id = self.next_id;
        self.next_id += 1;

        let record = AssetRecord {
            asset_id,
            owner,
            uri: uri.into(),
            regulated,
            category: category.into(),
            declared_value,
            metadata: metadata.into(),
            minted_at: self.clock.now(),
        };

        tracing::info!(
            asset_id,
            owner = %owner,
            category = %record.category,
            declared_value,
            regulated,
            "asset minted"
        );

        self.assets.insert(asset_id, record);
        Ok(asset_id)
    }

    /// Returns the full record for an asset.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::NotFound`] for unassigned ids.
    pub fn get_asset(&self, asset_id: AssetId) -> Result<&AssetRecord, AssetError> {
        self.assets
            .get(&asset_id)
            .ok_or(AssetError::NotFound(asset_id))
    }

    /// Current custodian of an asset.
    pub fn owner_of(&self, asset_id: AssetId) -> Result<AccountId, AssetError> {
        self.get_asset(asset_id).map(|a| a.owner)
    }

    /// Content URI of an asset.
    pub fn token_uri(&self, asset_id: AssetId) -> Result<&str, AssetError> {
        self.get_asset(asset_id).map(|a| a.uri.as_str())
    }

    /// Regulation flag of an asset.
    pub fn is_regulated(&self, asset_id: AssetId) -> Result<bool, AssetError> {
        self.get_asset(asset_id).map(|a| a.regulated)
    }

    /// Number of assets minted so far (also the next id to be assigned).
    pub fn total_minted(&self) -> u64 {
        self.next_id
    }

    /// Approves `operator` to transfer `asset_id` on the owner's behalf.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::NotFound`] / [`AssetError::NotOwner`] if the
    /// asset doesn't exist or `caller` doesn't custody it.
    pub fn approve(
        &mut self,
        caller: AccountId,
        operator: AccountId,
        asset_id: AssetId,
    ) -> Result<(), AssetError> {
        let owner = self.owner_of(asset_id)?;
        if owner != caller {
            return Err(AssetError::NotOwner {
                asset_id,
                claimed: caller,
                actual: owner,
            });
        }

        self.approvals.insert(asset_id, operator);
        Ok(())
    }

    /// The approved operator for an asset, if any.
    pub fn approved_for(&self, asset_id: AssetId) -> Option<AccountId> {
        self.approvals.get(&asset_id).copied()
    }

    /// Checks every precondition of [`transfer_from`](Self::transfer_from)
    /// without mutating. Lets callers order their own effects before the
    /// custody interaction while keeping all-or-nothing semantics.
    pub fn ensure_transferable(
        &self,
        operator: AccountId,
        from: AccountId,
        asset_id: AssetId,
    ) -> Result<(), AssetError> {
        let owner = self.owner_of(asset_id)?;
        if owner != from {
            return Err(AssetError::NotOwner {
                asset_id,
                claimed: from,
                actual: owner,
            });
        }
        if operator != owner && self.approved_for(asset_id) != Some(operator) {
            return Err(AssetError::NotApproved { asset_id, operator });
        }
        Ok(())
    }

    /// Transfers custody of `asset_id` from `from` to `to`.
    ///
    /// `operator` must be the current owner or the approved operator.
    /// Any standing approval is cleared by the transfer.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::NotFound`], [`AssetError::NotOwner`], or
    /// [`AssetError::NotApproved`] per the checks above; on error nothing
    /// changes.
    pub fn transfer_from(
        &mut self,
        operator: AccountId,
        from: AccountId,
        to: AccountId,
        asset_id: AssetId,
    ) -> Result<(), AssetError> {
        self.ensure_transferable(operator, from, asset_id)?;

        self.approvals.remove(&asset_id);
        if let Some(record) = self.assets.get_mut(&asset_id) {
            record.owner = to;
        }

        tracing::debug!(asset_id, from = %from, to = %to, "asset custody transferred");
        Ok(())
    }
}
