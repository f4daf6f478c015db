//! In-memory store
//!
//! Implements every storage collaborator trait over `RwLock`-guarded
//! maps. Backs unit and integration tests, and the bot layer during
//! development before the row store exists. Writes are
//! last-writer-wins; `Conflict` is reserved for real backends.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use matching_engine::book::PriceLadder;
use matching_engine::store::{BalanceSource, LadderStore, PositionStore};
use types::errors::StoreError;
use types::ids::{AccountId, MarketId};
use types::market::Market;
use types::numeric::Notional;
use types::position::Position;

#[derive(Default)]
struct Inner {
    ladders: RwLock<HashMap<MarketId, PriceLadder>>,
    markets: RwLock<HashMap<MarketId, Market>>,
    positions: RwLock<HashMap<(AccountId, MarketId), Position>>,
    balances: RwLock<HashMap<AccountId, Notional>>,
}

/// All collaborator state behind one shared handle.
///
/// Clones share the same state, so one store can serve as every
/// collaborator of a `MatchingEngine` at once.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a market's metadata and its initial ladder
    pub fn create_market(&self, market: Market, ladder: PriceLadder) {
        let market_id = market.market_id;
        self.inner.markets.write().unwrap().insert(market_id, market);
        self.inner.ladders.write().unwrap().insert(market_id, ladder);
    }

    /// Market metadata, if registered
    pub fn market(&self, market: MarketId) -> Option<Market> {
        self.inner.markets.read().unwrap().get(&market).cloned()
    }

    /// Credit an account's ledger balance
    pub fn deposit(&self, account: AccountId, amount: Notional) {
        *self.inner.balances.write().unwrap().entry(account).or_insert(0) += amount;
    }

    /// Apply a settlement debit reported by the engine
    pub fn debit(&self, account: AccountId, amount: Notional) {
        *self.inner.balances.write().unwrap().entry(account).or_insert(0) -= amount;
    }
}

impl LadderStore for MemoryStore {
    fn load(&self, market: MarketId) -> Result<PriceLadder, StoreError> {
        self.inner
            .ladders
            .read()
            .unwrap()
            .get(&market)
            .cloned()
            .ok_or(StoreError::MarketNotFound { market })
    }

    fn save(&self, market: MarketId, ladder: &PriceLadder) -> Result<(), StoreError> {
        self.inner.ladders.write().unwrap().insert(market, ladder.clone());
        Ok(())
    }
}

impl PositionStore for MemoryStore {
    fn load(&self, account: AccountId, market: MarketId) -> Result<Option<Position>, StoreError> {
        Ok(self.inner.positions.read().unwrap().get(&(account, market)).copied())
    }

    fn save(
        &self,
        account: AccountId,
        market: MarketId,
        position: &Position,
    ) -> Result<(), StoreError> {
        self.inner
            .positions
            .write()
            .unwrap()
            .insert((account, market), *position);
        Ok(())
    }
}

impl BalanceSource for MemoryStore {
    fn balance_of(&self, account: AccountId) -> Result<Notional, StoreError> {
        self.inner
            .balances
            .read()
            .unwrap()
            .get(&account)
            .copied()
            .ok_or(StoreError::AccountNotFound { account })
    }
}
