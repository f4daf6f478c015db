//! Integer numeric aliases for prices, sizes, and notionals
//!
//! The entire matching path runs on exact 64-bit integer arithmetic:
//! prices are tick multiples quoted as percentage points, sizes are
//! signed contract counts, notionals are price × size cash amounts.
//! No floating point is used anywhere in matching or margin logic.

/// A ladder price in percentage points (tick multiples)
pub type Price = i64;

/// A signed contract count
///
/// Positive = long/yes exposure, negative = short/no exposure.
pub type Size = i64;

/// A cash amount: price × size
///
/// Carries the sign of the cash flow paid to acquire the exposure.
pub type Notional = i64;

/// Payout of a fully-resolved-yes contract, in percentage points.
///
/// Also the default ceiling price (`max_price`) of a position.
pub const RESOLUTION_PRICE: Price = 100;
