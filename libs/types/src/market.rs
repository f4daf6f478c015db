//! Per-market metadata record
//!
//! Carries the display fields and lifecycle flags stored beside each
//! market's ladder. The ladder itself lives in the matching engine; the
//! metadata only says what the market is about and whether it still
//! trades.

use crate::ids::MarketId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for one binary-outcome market
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    pub market_id: MarketId,
    /// Human-readable question the market resolves
    pub market_name: String,
    pub category: String,
    /// Closed markets accept no further matches
    pub market_close: bool,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl Market {
    /// Create an open market
    pub fn new(
        market_id: MarketId,
        market_name: impl Into<String>,
        category: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            market_id,
            market_name: market_name.into(),
            category: category.into(),
            market_close: false,
            created_at,
            closed_at: None,
        }
    }

    /// Close the market for trading
    pub fn close(&mut self, closed_at: DateTime<Utc>) {
        self.market_close = true;
        self.closed_at = Some(closed_at);
    }

    /// True while the market accepts orders
    pub fn is_open(&self) -> bool {
        !self.market_close
    }
}
