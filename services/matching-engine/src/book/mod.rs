//! Order book infrastructure module
//!
//! Contains the fixed-grid price ladder that backs each market.

pub mod ladder;

pub use ladder::PriceLadder;
