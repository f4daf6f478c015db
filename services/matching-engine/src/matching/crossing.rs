//! Crossing detection logic
//!
//! Determines whether the taker's limit price overlaps the resting
//! side currently being hit.

use types::numeric::Price;

/// Check if the taker's limit overlaps the maker's best price.
///
/// A resting bid only matches a taker at or below the bid price; a
/// resting ask only matches a taker at or above the ask price. Equal
/// prices always cross.
pub fn can_match(is_bid_maker: bool, maker_price: Price, taker_price: Price) -> bool {
    if is_bid_maker {
        maker_price >= taker_price
    } else {
        maker_price <= taker_price
    }
}
