//! Property-based tests for the matching algorithm
//!
//! Pins the contract of the crossing rule over randomized ladders:
//! conservation, the boundary-pointer invariant, no-cross idempotence,
//! and monotonic consumption of same-direction absorbing fills.

use matching_engine::book::PriceLadder;
use matching_engine::matching::execute_match;
use proptest::prelude::*;

/// Random valid ladder: 2..=12 ticks, sizes in [-20, 20], any legal
/// boundary position.
fn arb_ladder() -> impl Strategy<Value = PriceLadder> {
    (2usize..=12, 1i64..=20).prop_flat_map(|(len, tick)| {
        (
            proptest::collection::vec(-20i64..=20, len),
            1usize..len,
        )
            .prop_map(move |(levels, ask_index)| {
                PriceLadder::new(levels, tick, ask_index).unwrap()
            })
    })
}

fn aggregate_size(ladder: &PriceLadder) -> i64 {
    ladder.levels().iter().map(|size| size.abs()).sum()
}

proptest! {
    #[test]
    fn prop_conservation(
        ladder in arb_ladder(),
        taker_price in 0i64..=300,
        taker_size in -40i64..=40,
    ) {
        let mut ladder = ladder;
        let fill = execute_match(&mut ladder, taker_price, taker_size);
        prop_assert!(
            fill.size.abs() <= taker_size.abs(),
            "fill {} exceeds taker {}",
            fill.size,
            taker_size
        );
    }

    #[test]
    fn prop_ask_index_invariant_after_match(
        ladder in arb_ladder(),
        taker_price in 0i64..=300,
        taker_size in -40i64..=40,
    ) {
        let mut ladder = ladder;
        execute_match(&mut ladder, taker_price, taker_size);
        prop_assert!(ladder.ask_index() >= 1);
        prop_assert!(ladder.ask_index() <= ladder.len() - 1);
    }

    #[test]
    fn prop_no_cross_leaves_ladder_unchanged(
        ladder in arb_ladder(),
        taker_size in 1i64..=40,
        is_buy in any::<bool>(),
    ) {
        let mut ladder = ladder;
        let before = ladder.clone();

        // One tick past the best price on the side being hit never
        // overlaps.
        let (taker_price, taker_size) = if is_buy {
            let (ask_price, _) = ladder.best_order(false);
            (ask_price - 1, taker_size)
        } else {
            let (bid_price, _) = ladder.best_order(true);
            (bid_price + 1, -taker_size)
        };

        let fill = execute_match(&mut ladder, taker_price, taker_size);
        prop_assert!(fill.is_empty());
        prop_assert_eq!(ladder, before);
    }

    #[test]
    fn prop_empty_order_is_identity(
        ladder in arb_ladder(),
        taker_price in 0i64..=300,
    ) {
        let mut ladder = ladder;
        let before = ladder.clone();
        let fill = execute_match(&mut ladder, taker_price, 0);
        prop_assert!(fill.is_empty());
        prop_assert_eq!(ladder, before);
    }

    /// Absorbing buys against a ladder whose mirrored best pair carries
    /// sell-side sign: every fill shrinks both touched entries, and the
    /// aggregate resting size drops by exactly twice the fill.
    #[test]
    fn prop_monotonic_consumption_buys(
        depth in 2i64..=20,
        len in 3usize..=8,
        ask_index in 1usize..=2,
        taker_size in 1i64..=2,
    ) {
        let levels = vec![-depth; len];
        let ask_index = ask_index.min(len - 1);
        let mut ladder = PriceLadder::new(levels, 10, ask_index).unwrap();

        let taker_price = ladder.price(ask_index);
        let mut previous = ladder.levels().to_vec();
        for _ in 0..(depth / (2 * taker_size)).max(1) {
            let before_aggregate = aggregate_size(&ladder);
            let fill = execute_match(&mut ladder, taker_price, taker_size);
            prop_assert_eq!(fill.size, -taker_size);
            prop_assert_eq!(
                aggregate_size(&ladder),
                before_aggregate - 2 * fill.size.abs()
            );
            for (index, level) in ladder.levels().iter().enumerate() {
                prop_assert!(level.abs() <= previous[index].abs());
            }
            previous = ladder.levels().to_vec();
        }
    }

    /// Mirror case: absorbing sells against buy-side-signed depth.
    #[test]
    fn prop_monotonic_consumption_sells(
        depth in 2i64..=20,
        len in 3usize..=8,
        taker_size in 1i64..=2,
    ) {
        let levels = vec![depth; len];
        let ask_index = len - 1;
        let mut ladder = PriceLadder::new(levels, 10, ask_index).unwrap();

        let taker_price = ladder.price(ask_index - 1);
        let mut previous = ladder.levels().to_vec();
        for _ in 0..(depth / (2 * taker_size)).max(1) {
            let before_aggregate = aggregate_size(&ladder);
            let fill = execute_match(&mut ladder, taker_price, -taker_size);
            prop_assert_eq!(fill.size, taker_size);
            prop_assert_eq!(
                aggregate_size(&ladder),
                before_aggregate - 2 * fill.size.abs()
            );
            for (index, level) in ladder.levels().iter().enumerate() {
                prop_assert!(level.abs() <= previous[index].abs());
            }
            previous = ladder.levels().to_vec();
        }
    }
}
