//! Fixed-grid price ladder
//!
//! One ladder exists per market: a fixed-length array of per-tick
//! resting sizes plus the ask-index boundary pointer separating the bid
//! side (`[0, ask_index)`) from the ask side (`[ask_index, N)`).
//! Prices are implicit in the index: `price(i) = tick_size * (i + 1)`.
//!
//! Reads are total functions (out-of-range size is zero, price is
//! extrapolated); the two mutating primitives are reserved for the
//! match loop and uphold `1 <= ask_index <= N-1` after every mutation.

use serde::{Deserialize, Serialize};
use std::fmt;
use types::errors::LadderError;
use types::numeric::{Price, Size};

/// Resting-size-per-tick ladder for one market
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLadder {
    /// Resting size per tick, insertion order = ascending price order
    levels: Vec<Size>,
    /// Price increment between ticks; `price(i) = tick_size * (i + 1)`
    tick_size: Price,
    /// Boundary tick: `[0, ask_index)` bids, `[ask_index, N)` asks
    ask_index: usize,
}

impl PriceLadder {
    /// Validate and construct a ladder.
    ///
    /// Fails when the tick size is not positive, `levels` is empty, or
    /// `ask_index` lies outside `[1, N-1]`.
    pub fn new(levels: Vec<Size>, tick_size: Price, ask_index: usize) -> Result<Self, LadderError> {
        if tick_size <= 0 {
            return Err(LadderError::InvalidTickSize { tick_size });
        }
        if levels.is_empty() {
            return Err(LadderError::EmptyLevels);
        }
        let max = levels.len() - 1;
        if ask_index < 1 || ask_index > max {
            return Err(LadderError::AskIndexOutOfRange { ask_index, max });
        }
        Ok(Self {
            levels,
            tick_size,
            ask_index,
        })
    }

    /// Number of ticks on the ladder
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false: construction rejects empty ladders
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Price at a tick index; extrapolates out of range
    pub fn price(&self, index: usize) -> Price {
        self.tick_size * (index as i64 + 1)
    }

    /// Resting size at a tick index; zero out of range
    pub fn size(&self, index: usize) -> Size {
        self.levels.get(index).copied().unwrap_or(0)
    }

    /// Price increment between ticks
    pub fn tick_size(&self) -> Price {
        self.tick_size
    }

    /// Boundary tick between the bid and ask sides
    pub fn ask_index(&self) -> usize {
        self.ask_index
    }

    /// Resting sizes, ascending price order
    pub fn levels(&self) -> &[Size] {
        &self.levels
    }

    /// Best tick index on the requested side
    pub fn best_index(&self, is_bid: bool) -> usize {
        if is_bid {
            self.ask_index - 1
        } else {
            self.ask_index
        }
    }

    /// Best (price, size) on the requested side
    pub fn best_order(&self, is_bid: bool) -> (Price, Size) {
        let index = self.best_index(is_bid);
        (self.price(index), self.size(index))
    }

    /// Retire `matched` from the consumed level and its mirrored
    /// counterpart.
    ///
    /// The ladder represents a complementary bid/ask pair per tick:
    /// consuming supply on one side retires the paired entry on the
    /// other. Match-loop primitive.
    pub(crate) fn consume(&mut self, is_bid_maker: bool, matched: Size) {
        let taker_index = self.best_index(!is_bid_maker);
        let maker_index = self.best_index(is_bid_maker);
        self.levels[taker_index] -= matched;
        self.levels[maker_index] -= matched;
    }

    /// Advance the boundary pointer one tick toward the maker side.
    ///
    /// Returns `true` while the new index is strictly inside `(0, N)`;
    /// at the boundary the index is clamped back into `[1, N-1]` and
    /// `false` signals the book is exhausted. Match-loop primitive.
    pub(crate) fn advance(&mut self, is_bid_maker: bool) -> bool {
        if is_bid_maker {
            self.ask_index -= 1;
        } else {
            self.ask_index += 1;
        }
        if self.ask_index >= 1 && self.ask_index < self.len() {
            true
        } else {
            self.ask_index = self.ask_index.clamp(1, self.len() - 1);
            false
        }
    }
}

impl fmt::Display for PriceLadder {
    /// Render the ladder top-down: asks, separator, bids.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in (self.ask_index..self.len()).rev() {
            writeln!(f, "{:5} | {:5}", self.price(index), -self.size(index))?;
        }
        writeln!(f, "{}", "-".repeat(15))?;
        writeln!(f, "price |  size")?;
        writeln!(f, "{}", "-".repeat(15))?;
        for index in (0..self.ask_index).rev() {
            writeln!(f, "{:5} | {:5}", self.price(index), self.size(index))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder() -> PriceLadder {
        PriceLadder::new(vec![5, 3, 2, -4, -6], 10, 3).unwrap()
    }

    #[test]
    fn test_prices_follow_tick_grid() {
        let ladder = ladder();
        assert_eq!(ladder.price(0), 10);
        assert_eq!(ladder.price(4), 50);
        // Extrapolated out of range, never an error
        assert_eq!(ladder.price(9), 100);
    }

    #[test]
    fn test_size_out_of_range_is_zero() {
        let ladder = ladder();
        assert_eq!(ladder.size(2), 2);
        assert_eq!(ladder.size(17), 0);
    }

    #[test]
    fn test_best_order_per_side() {
        let ladder = ladder();
        assert_eq!(ladder.best_index(true), 2);
        assert_eq!(ladder.best_index(false), 3);
        assert_eq!(ladder.best_order(true), (30, 2));
        assert_eq!(ladder.best_order(false), (40, -4));
    }

    #[test]
    fn test_rejects_non_positive_tick() {
        let err = PriceLadder::new(vec![1, 2], 0, 1).unwrap_err();
        assert_eq!(err, LadderError::InvalidTickSize { tick_size: 0 });
    }

    #[test]
    fn test_rejects_empty_levels() {
        let err = PriceLadder::new(vec![], 10, 1).unwrap_err();
        assert_eq!(err, LadderError::EmptyLevels);
    }

    #[test]
    fn test_rejects_ask_index_out_of_range() {
        assert!(PriceLadder::new(vec![1, 2, 3], 10, 0).is_err());
        assert!(PriceLadder::new(vec![1, 2, 3], 10, 3).is_err());
        assert!(PriceLadder::new(vec![1, 2, 3], 10, 2).is_ok());
    }

    #[test]
    fn test_single_level_ladder_has_no_valid_boundary() {
        assert!(PriceLadder::new(vec![4], 10, 1).is_err());
    }

    #[test]
    fn test_consume_retires_mirrored_pair() {
        let mut ladder = ladder();
        ladder.consume(false, -2);
        assert_eq!(ladder.levels(), &[5, 3, 4, -2, -6]);
    }

    #[test]
    fn test_advance_stays_inside() {
        let mut ladder = ladder();
        assert!(ladder.advance(false));
        assert_eq!(ladder.ask_index(), 4);
    }

    #[test]
    fn test_advance_clamps_at_top() {
        let mut ladder = PriceLadder::new(vec![5, 3, 2, -4, -6], 10, 4).unwrap();
        assert!(!ladder.advance(false));
        assert_eq!(ladder.ask_index(), 4);
    }

    #[test]
    fn test_advance_clamps_at_bottom() {
        let mut ladder = PriceLadder::new(vec![5, 3, 2, -4, -6], 10, 1).unwrap();
        assert!(!ladder.advance(true));
        assert_eq!(ladder.ask_index(), 1);
    }

    #[test]
    fn test_display_renders_both_sides() {
        let rendered = ladder().to_string();
        assert!(rendered.contains("price |  size"));
        // Top ask first, best bid right under the separator
        assert!(rendered.find("50").unwrap() < rendered.find("40").unwrap());
        assert!(rendered.find("price").unwrap() < rendered.find("30").unwrap());
    }
}
