//! Matching logic module
//!
//! Implements the fixed-grid crossing algorithm over the price ladder.

pub mod crossing;
pub mod executor;

pub use crossing::can_match;
pub use executor::execute_match;
