//! Types library for the prediction-market matching core
//!
//! This library provides all core type definitions shared between the
//! matching engine and its storage collaborators: identifiers, integer
//! numeric aliases, fills, positions, margin accounts, market metadata,
//! and the error taxonomy.
//!
//! # Modules
//! - `ids`: Unique identifiers (MarketId, AccountId)
//! - `numeric`: Integer numeric aliases (Price, Size, Notional)
//! - `fill`: Match output (signed size + notional)
//! - `position`: Signed exposure and cost basis
//! - `account`: Margin account (position + collateral)
//! - `market`: Per-market metadata record
//! - `errors`: Error taxonomy

// Public modules
pub mod account;
pub mod errors;
pub mod fill;
pub mod ids;
pub mod market;
pub mod numeric;
pub mod position;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::account::*;
    pub use crate::errors::*;
    pub use crate::fill::*;
    pub use crate::ids::*;
    pub use crate::market::*;
    pub use crate::numeric::*;
    pub use crate::position::*;
}
