//! Match execution
//!
//! Walks the ladder one best level at a time: each step either absorbs
//! the remaining taker size at the current level (partial or exact
//! fill, matching ends) or exhausts the level and advances the
//! boundary pointer to the next tick. The recursion of the underlying
//! rule is expressed as a loop so stack depth never depends on ladder
//! length.
//!
//! Sign convention: the fill carries the maker side's sign
//! (`matched = -taker_size` on a stopping level), and both entries of
//! the mirrored tick pair are adjusted by the matched amount.

use crate::book::PriceLadder;
use crate::matching::crossing;
use tracing::debug;
use types::fill::Fill;
use types::numeric::{Price, Size};

/// Match a signed taker order against the ladder.
///
/// `taker_size > 0` buys (hits the ask side), `taker_size < 0` sells
/// (hits the bid side); `taker_price` is the worst price the taker
/// accepts. Mutates the ladder in place and returns the aggregate
/// fill. Never fails: no price overlap or an exhausted book yields a
/// smaller (possibly empty) fill, and the boundary pointer is clamped
/// back into `[1, N-1]` on exit.
pub fn execute_match(ladder: &mut PriceLadder, taker_price: Price, taker_size: Size) -> Fill {
    // An empty order must leave the ladder untouched regardless of
    // price, including the boundary pointer.
    if taker_size == 0 {
        return Fill::EMPTY;
    }

    let mut fill = Fill::EMPTY;
    let mut taker_size = taker_size;

    loop {
        // The resting side being hit is always opposite the taker.
        let is_bid_maker = taker_size < 0;
        let (maker_price, maker_size) = ladder.best_order(is_bid_maker);

        if !crossing::can_match(is_bid_maker, maker_price, taker_price) {
            break;
        }

        // The maker level's size if the entire remaining taker order
        // matched against it.
        let pending = maker_size + taker_size;

        // A non-empty level that keeps its sign (or zeroes out exactly)
        // absorbs the taker; otherwise the level is wiped and matching
        // continues on the next tick.
        let is_stop = maker_size != 0 && (pending == 0 || (maker_size > 0) == (pending > 0));
        let matched = if is_stop { -taker_size } else { maker_size };

        ladder.consume(is_bid_maker, matched);
        fill.accumulate(Fill::at_price(maker_price, matched));
        debug!(
            maker_price,
            matched,
            remaining = taker_size + matched,
            "level consumed"
        );

        if is_stop {
            break;
        }
        if !ladder.advance(is_bid_maker) {
            // Book exhausted: cursor clamped, remaining size unfilled.
            break;
        }
        taker_size += matched;
    }

    fill
}
