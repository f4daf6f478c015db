//! Unique identifier types for market entities
//!
//! Both identifiers are integer row keys assigned by the surrounding
//! bot: markets get a small sequential id, accounts are keyed by the
//! chat user id of their owner.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for one binary-outcome market
///
/// Sequential row key; one price ladder exists per market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketId(u32);

impl MarketId {
    /// Create a MarketId from a raw row key
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw row key
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MarketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MarketId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Identifier for a trading account
///
/// Wraps the chat user id of the account owner (a signed 64-bit key in
/// the upstream messaging platform).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Create an AccountId from a raw user id
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw user id
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
