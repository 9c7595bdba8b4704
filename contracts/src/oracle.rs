//! # Proof-of-Reserve Oracle Adapter
//!
//! Reads a reserve figure from an external price-feed-shaped source and
//! exposes it to reporting surfaces. Readings are advisory: nothing in the
//! vault's accounting depends on them, no staleness window is enforced,
//! and a consumer that wants freshness guarantees must check `updated_at`
//! itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The consumed feed capability: `latest_answer() -> (value, updated_at)`.
pub trait ReserveFeed: Send + Sync {
    /// The most recent reserve figure and when it was recorded.
    fn latest_answer(&self) -> (u64, DateTime<Utc>);
}

/// A timestamped reserve reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveReading {
    /// Reported reserve amount, in the feed's smallest units.
    pub amount: u64,
    /// When the source recorded the reading.
    pub updated_at: DateTime<Utc>,
}

/// Adapter from a [`ReserveFeed`] to the query surface.
pub struct ReserveOracle {
    feed: Box<dyn ReserveFeed>,
}

impl ReserveOracle {
    /// Wires the oracle to its feed.
    pub fn new(feed: Box<dyn ReserveFeed>) -> Self {
        Self { feed }
    }

    /// The latest reserve reading. Read-only, no side effects.
    pub fn get_latest_reserve(&self) -> ReserveReading {
        let (amount, updated_at) = self.feed.latest_answer();
        ReserveReading { amount, updated_at }
    }
}

/// A feed with a fixed answer, for deployments without a live source and
/// for tests.
pub struct StaticReserveFeed {
    pub amount: u64,
    pub updated_at: DateTime<Utc>,
}

impl ReserveFeed for StaticReserveFeed {
    fn latest_answer(&self) -> (u64, DateTime<Utc>) {
        (self.amount, self.updated_at)
    }
}
