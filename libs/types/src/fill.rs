//! Fill types
//!
//! A `Fill` is the aggregate result of one match against the ladder:
//! the signed size consumed from the resting side and the notional
//! traded at the consumed levels' prices. A zero-size fill is a valid,
//! silent outcome (no price overlap or exhausted book), not an error.

use crate::numeric::{Notional, Price, Size};
use serde::{Deserialize, Serialize};

/// Aggregate result of one match
///
/// Signs follow the maker side: a taker buy that absorbs ask liquidity
/// reports a negative `size` (and notional), which the taker's account
/// folds in with the opposite sign via the swap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    /// Signed matched size
    pub size: Size,
    /// Cash value of the matched size at the consumed levels' prices
    pub notional: Notional,
}

impl Fill {
    /// The empty fill: nothing matched, nothing owed.
    pub const EMPTY: Fill = Fill { size: 0, notional: 0 };

    /// Create a fill of `size` executed entirely at `price`
    pub fn at_price(price: Price, size: Size) -> Self {
        Self {
            size,
            notional: price * size,
        }
    }

    /// True when nothing matched
    ///
    /// Callers use this to detect a no-op match (the `NoLiquidity`
    /// outcome) without an error path.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Fold another partial fill into this one
    pub fn accumulate(&mut self, other: Fill) {
        self.size += other.size;
        self.notional += other.notional;
    }
}
