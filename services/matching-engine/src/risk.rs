//! Pre-trade margin validation
//!
//! The engine executes any match it is asked to perform; sizing against
//! collateral is the caller's job and happens here, before the ladder
//! is touched. The check simulates the proposed swap at the taker's
//! limit price against a copy of the account and rejects when the
//! account's available margin would go negative.

use types::account::Account;
use types::errors::RiskError;
use types::fill::Fill;
use types::numeric::{Price, Size};

/// Validate a proposed order against the account's available margin.
///
/// Assumes the order fills completely at `taker_price` (the worst
/// admissible execution) and checks the post-swap margin. Returns the
/// margin shortfall in the error when the order does not fit.
pub fn check_margin(account: &Account, taker_price: Price, taker_size: Size) -> Result<(), RiskError> {
    let available = account.available_margin();

    // The fill that would come back from a full match, maker-signed.
    let mut projected = *account;
    projected.apply_fill(Fill::at_price(taker_price, -taker_size));

    let remaining = projected.available_margin();
    if remaining < 0 {
        return Err(RiskError::InsufficientMargin {
            required: available - remaining,
            available,
        });
    }
    Ok(())
}
