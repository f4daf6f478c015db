//! Error taxonomy for the matching core
//!
//! Three local failure families plus a top-level engine error that
//! wraps them. A zero-size fill is deliberately *not* here: no price
//! overlap is a silent outcome callers detect via `Fill::is_empty`.

use crate::ids::{AccountId, MarketId};
use crate::numeric::Notional;
use thiserror::Error;

/// Top-level engine error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Ladder error: {0}")]
    Ladder(#[from] LadderError),

    #[error("Risk error: {0}")]
    Risk(#[from] RiskError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Construction-time ladder validation failures
///
/// Fatal to the operation and non-retryable: the snapshot itself is
/// malformed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LadderError {
    #[error("Invalid ladder: tick size {tick_size} must be positive")]
    InvalidTickSize { tick_size: i64 },

    #[error("Invalid ladder: no price levels")]
    EmptyLevels,

    #[error("Invalid ladder: ask index {ask_index} outside [1, {max}]")]
    AskIndexOutOfRange { ask_index: usize, max: usize },
}

/// Pre-trade risk failures, raised by the caller layer before matching
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    #[error("Insufficient margin: required {required}, available {available}")]
    InsufficientMargin {
        required: Notional,
        available: Notional,
    },
}

/// Storage collaborator failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Market not found: {market}")]
    MarketNotFound { market: MarketId },

    #[error("Account not found: {account}")]
    AccountNotFound { account: AccountId },

    #[error("Write conflict for market {market}")]
    Conflict { market: MarketId },

    #[error("IO error: {0}")]
    Io(String),
}
