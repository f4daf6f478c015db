//! Storage collaborator contracts
//!
//! The engine never talks to a database or a ledger directly; it goes
//! through these narrow traits so the core can run against in-memory
//! fakes in tests and real row stores in the bot. All suspension
//! (loading, saving, balance lookups) happens strictly before or after
//! the pure matching step, never interleaved with it.

use crate::book::PriceLadder;
use types::errors::StoreError;
use types::ids::{AccountId, MarketId};
use types::numeric::Notional;
use types::position::Position;

/// Per-market ladder snapshots
pub trait LadderStore {
    /// Load the ladder for a market; `MarketNotFound` if absent
    fn load(&self, market: MarketId) -> Result<PriceLadder, StoreError>;

    /// Persist the mutated ladder back; `Conflict` on a lost write race
    fn save(&self, market: MarketId, ladder: &PriceLadder) -> Result<(), StoreError>;
}

/// Per-account, per-market positions
pub trait PositionStore {
    /// Load a position; `None` before the account's first trade
    fn load(&self, account: AccountId, market: MarketId) -> Result<Option<Position>, StoreError>;

    /// Overwrite the position after a fill or settlement
    fn save(
        &self,
        account: AccountId,
        market: MarketId,
        position: &Position,
    ) -> Result<(), StoreError>;
}

/// External ledger supplying spendable balances.
///
/// The core never mutates the ledger; `Account::settle` adjusts its
/// in-memory copy and the caller persists the resulting debit.
pub trait BalanceSource {
    fn balance_of(&self, account: AccountId) -> Result<Notional, StoreError>;
}
