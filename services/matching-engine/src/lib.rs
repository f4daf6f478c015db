//! Matching Engine Service
//!
//! Fixed-grid limit-order matching for binary-outcome (YES/NO)
//! prediction markets: a per-market price ladder is walked, crossed,
//! and mutated in place by the crossing rule, and the resulting fill is
//! folded into the taker's margin account.
//!
//! **Key Invariants:**
//! - `1 <= ask_index <= N-1` after every mutation
//! - Exact integer arithmetic everywhere in the matching path
//! - `|fill.size| <= |taker_size|` (conservation)
//! - Matching never fails: no overlap or an exhausted book is a
//!   zero-size fill, not an error
//! - At most one match in flight per market; markets are independent

pub mod book;
pub mod engine;
pub mod matching;
pub mod risk;
pub mod store;

pub use book::PriceLadder;
pub use engine::MatchingEngine;
