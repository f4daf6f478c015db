//! Margin account types
//!
//! An `Account` is a transient value assembled per request: the
//! persisted `Position` for one market plus a freshly fetched spendable
//! balance. It computes worst-case P&L, available margin, and
//! settlement; it is never itself persisted.

use crate::fill::Fill;
use crate::numeric::Notional;
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A position plus spendable collateral
///
/// Invariant: `balance` is never driven negative by `settle`; settle
/// only withdraws what `available_margin` proves is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Exposure in the market being traded
    pub position: Position,
    /// Spendable collateral, independent of the position
    pub balance: Notional,
}

impl Account {
    /// Assemble an account from a persisted position and a ledger balance
    pub fn new(position: Position, balance: Notional) -> Self {
        Self { position, balance }
    }

    /// Fold a fill into the position (the swap).
    ///
    /// The fill carries the maker-side sign, so the taker applies it
    /// with the opposite sign: exposure and cost basis both move by
    /// `-fill`. Returns the updated position for persistence.
    pub fn apply_fill(&mut self, fill: Fill) -> Position {
        self.position.size -= fill.size;
        self.position.notional -= fill.notional;
        self.position
    }

    /// Worst realizable P&L if exposure is closed at the extreme price.
    ///
    /// A long can resolve to nothing (worst exit notional zero); a
    /// short or flat book is marked against the ceiling price.
    pub fn worst_pnl(&self) -> Notional {
        let worst_exit_notional = if self.position.size > 0 {
            0
        } else {
            self.position.max_price * self.position.size
        };
        worst_exit_notional - self.position.notional
    }

    /// Collateral available for new exposure: `balance + worst_pnl()`.
    ///
    /// Check this before accepting a swap.
    pub fn available_margin(&self) -> Notional {
        self.balance + self.worst_pnl()
    }

    /// Reserve free margin into the position's cost basis.
    ///
    /// Moves `available_margin()` from `balance` into
    /// `position.notional` and returns the amount moved; zero and no
    /// state change when nothing is free. The move is capped at
    /// `balance` so settlement can never overdraw the collateral.
    pub fn settle(&mut self) -> Notional {
        let available = self.available_margin();
        if available <= 0 {
            return 0;
        }
        let reserved = available.min(self.balance);
        self.position.notional += reserved;
        self.balance -= reserved;
        reserved
    }
}
