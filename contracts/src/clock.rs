//! Block-time abstraction.
//!
//! On a real chain the host environment stamps every operation with the
//! block timestamp. Here that role is played by a [`Clock`] handle injected
//! at construction: production wiring uses [`SystemClock`], tests use
//! [`ManualClock`] to fast-forward time deterministically (the Rust
//! equivalent of Hardhat's `evm_increaseTime`).

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;

/// Source of the current ledger timestamp.
pub trait Clock: Send + Sync {
    /// The current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: RwLock<DateTime<Utc>>,
}

impl ManualClock {
    /// Creates a manual clock frozen at `start`.
    pub fn starting_at(start: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self {
            now: RwLock::new(start),
        })
    }

    /// Advances the clock by `seconds`.
    pub fn advance_secs(&self, seconds: i64) {
        let mut now = self.now.write();
        *now = *now + Duration::seconds(seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read()
    }
}
