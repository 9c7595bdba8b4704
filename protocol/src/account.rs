//! # Account Identifiers
//!
//! Every actor in ARX — users, the deployer, the vault itself — is an
//! [`AccountId`]: a 20-byte address rendered as `0x`-prefixed hex. The
//! protocol does not care how an address was obtained; authentication is
//! the host execution environment's problem. What the protocol cares about
//! is that addresses are cheap to copy, hash, and compare, because every
//! ledger in `arx-contracts` is keyed by them.
//!
//! [`AccountId::derive`] gives deterministic addresses from an arbitrary
//! label via BLAKE3 — handy for deployment scripts and tests that need
//! stable, legible actors ("alice", "vault", ...) without key management.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Length of an account identifier in bytes.
pub const ACCOUNT_ID_LENGTH: usize = 20;

/// Errors from parsing an account identifier.
#[derive(Debug, Error)]
pub enum AccountIdError {
    /// The hex payload did not decode.
    #[error("invalid hex in account id: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The decoded payload was not exactly 20 bytes.
    #[error("account id must be {ACCOUNT_ID_LENGTH} bytes, got {0}")]
    InvalidLength(usize),
}

/// A 20-byte account address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId([u8; ACCOUNT_ID_LENGTH]);

impl AccountId {
    /// Wraps raw address bytes.
    pub fn from_bytes(bytes: [u8; ACCOUNT_ID_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Returns the raw address bytes.
    pub fn as_bytes(&self) -> &[u8; ACCOUNT_ID_LENGTH] {
        &self.0
    }

    /// Derives a deterministic address from an arbitrary label.
    ///
    /// The address is the first 20 bytes of `BLAKE3(label)`. The same label
    /// always yields the same address, which makes deployment wiring and
    /// test fixtures reproducible.
    pub fn derive(label: &[u8]) -> Self {
        let digest = blake3::hash(label);
        let mut bytes = [0u8; ACCOUNT_ID_LENGTH];
        bytes.copy_from_slice(&digest.as_bytes()[..ACCOUNT_ID_LENGTH]);
        Self(bytes)
    }

    /// Hex rendering with the `0x` prefix.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parses a hex address. The `0x` prefix is optional.
    pub fn from_hex(s: &str) -> Result<Self, AccountIdError> {
        let payload = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(payload)?;
        if bytes.len() != ACCOUNT_ID_LENGTH {
            return Err(AccountIdError::InvalidLength(bytes.len()));
        }
        let mut arr = [0u8; ACCOUNT_ID_LENGTH];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({}…)", &self.to_hex()[..10])
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for AccountId {
    type Err = AccountIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// Serialize as the hex string so addresses are legible in JSON state dumps
// and usable as JSON object keys.
impl Serialize for AccountId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
