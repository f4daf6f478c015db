//! Matching engine facade
//!
//! Drives the full order pipeline over the storage collaborators: load
//! the ladder snapshot and position, assemble the margin account from a
//! fresh balance, validate margin, run the match, fold the fill into
//! the position, and persist both artifacts. One match is in flight per
//! market at a time; matches on different markets run fully in
//! parallel.

use std::sync::{Arc, Mutex, PoisonError};

use dashmap::DashMap;
use tracing::info;

use crate::book::PriceLadder;
use crate::matching;
use crate::risk;
use crate::store::{BalanceSource, LadderStore, PositionStore};
use types::account::Account;
use types::errors::EngineError;
use types::fill::Fill;
use types::ids::{AccountId, MarketId};
use types::numeric::{Notional, Price, Size};
use types::position::Position;

/// Result of placing an order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderOutcome {
    /// What matched (maker-signed); empty when prices never crossed
    pub fill: Fill,
    /// The taker's position after the swap
    pub position: Position,
    /// Margin left for further orders
    pub available_margin: Notional,
}

/// Result of settling an account in one market
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Amount moved from balance into the position's cost basis
    pub reserved: Notional,
    /// In-memory balance after the move; the caller persists this
    /// debit to the external ledger
    pub balance: Notional,
}

/// Order pipeline over pluggable storage collaborators
pub struct MatchingEngine<L, P, B> {
    ladders: L,
    positions: P,
    ledger: B,
    /// Serializes matches per market key
    locks: DashMap<MarketId, Arc<Mutex<()>>>,
}

impl<L, P, B> MatchingEngine<L, P, B>
where
    L: LadderStore,
    P: PositionStore,
    B: BalanceSource,
{
    pub fn new(ladders: L, positions: P, ledger: B) -> Self {
        Self {
            ladders,
            positions,
            ledger,
            locks: DashMap::new(),
        }
    }

    fn market_lock(&self, market: MarketId) -> Arc<Mutex<()>> {
        self.locks.entry(market).or_default().clone()
    }

    /// Place a signed taker order against a market.
    ///
    /// Margin is validated before the ladder is touched; a zero-size
    /// fill (no overlap, drained book) is a valid outcome that leaves
    /// nothing to persist. Blocks while another match is in flight for
    /// the same market.
    pub fn place_order(
        &self,
        account_id: AccountId,
        market: MarketId,
        taker_price: Price,
        taker_size: Size,
    ) -> Result<OrderOutcome, EngineError> {
        let lock = self.market_lock(market);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut ladder = self.ladders.load(market)?;
        let position = self
            .positions
            .load(account_id, market)?
            .unwrap_or_default();
        let balance = self.ledger.balance_of(account_id)?;
        let mut account = Account::new(position, balance);

        risk::check_margin(&account, taker_price, taker_size)?;

        let fill = matching::execute_match(&mut ladder, taker_price, taker_size);
        if !fill.is_empty() {
            let position = account.apply_fill(fill);
            self.ladders.save(market, &ladder)?;
            self.positions.save(account_id, market, &position)?;
        }
        info!(
            %account_id,
            %market,
            size = fill.size,
            notional = fill.notional,
            "order matched"
        );

        Ok(OrderOutcome {
            fill,
            position: account.position,
            available_margin: account.available_margin(),
        })
    }

    /// Reserve an account's free margin into its position.
    ///
    /// Persists the updated position and reports the debit the caller
    /// must apply to the external ledger.
    pub fn settle(
        &self,
        account_id: AccountId,
        market: MarketId,
    ) -> Result<Settlement, EngineError> {
        let lock = self.market_lock(market);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let position = self
            .positions
            .load(account_id, market)?
            .unwrap_or_default();
        let balance = self.ledger.balance_of(account_id)?;
        let mut account = Account::new(position, balance);

        let reserved = account.settle();
        if reserved != 0 {
            self.positions.save(account_id, market, &account.position)?;
        }

        Ok(Settlement {
            reserved,
            balance: account.balance,
        })
    }

    /// Read-only ladder snapshot for display
    pub fn ladder(&self, market: MarketId) -> Result<PriceLadder, EngineError> {
        Ok(self.ladders.load(market)?)
    }
}
