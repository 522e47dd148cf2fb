//! Principal <-> underlying conversion.
//!
//! Integer only, multiply before divide, truncating division. All inputs are
//! non-negative by the time they get here, so truncation is a floor and a
//! round trip never hands back more than it started with.

use crate::error::Error;
use crate::types::Rates;

/// `principal * live / maturity`.
pub fn to_underlying(principal: i128, rates: Rates) -> Result<i128, Error> {
    mul_div(principal, rates.live, rates.maturity)
}

/// `underlying * maturity / live`.
pub fn to_principal(underlying: i128, rates: Rates) -> Result<i128, Error> {
    mul_div(underlying, rates.maturity, rates.live)
}

fn mul_div(amount: i128, numerator: i128, denominator: i128) -> Result<i128, Error> {
    if denominator <= 0 {
        return Err(Error::InvalidRate);
    }
    amount
        .checked_mul(numerator)
        .ok_or(Error::Overflow)?
        .checked_div(denominator)
        .ok_or(Error::Overflow)
}
