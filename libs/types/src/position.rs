//! Position tracking types
//!
//! One `Position` exists per account per market: signed contract
//! exposure plus the integer cost basis paid to acquire it. Positions
//! are created on an account's first trade in a market and overwritten
//! after every fill.

use crate::numeric::{Notional, Price, Size, RESOLUTION_PRICE};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Signed exposure and cost basis for one account in one market
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Signed contract count (positive = long/yes, negative = short/no)
    pub size: Size,
    /// Cash paid to acquire `size`; carries the same sign convention
    pub notional: Notional,
    /// Ceiling price: what a fully-resolved-yes contract pays.
    /// Constant per market.
    pub max_price: Price,
}

impl Position {
    /// Create a flat position with the market's ceiling price
    pub fn new(max_price: Price) -> Self {
        Self {
            size: 0,
            notional: 0,
            max_price,
        }
    }

    /// Construct a position of `size` acquired entirely at `price`
    pub fn from_price(price: Price, size: Size) -> Self {
        Self {
            size,
            notional: price * size,
            max_price: RESOLUTION_PRICE,
        }
    }

    /// True when the account holds no exposure in this market
    pub fn is_flat(&self) -> bool {
        self.size == 0
    }

    /// Average entry price: `notional / size`, or zero when flat.
    ///
    /// Display-layer value only; the matching path never divides.
    pub fn average_price(&self) -> Decimal {
        if self.size == 0 {
            Decimal::ZERO
        } else {
            Decimal::from(self.notional) / Decimal::from(self.size)
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(RESOLUTION_PRICE)
    }
}
