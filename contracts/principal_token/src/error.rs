use soroban_sdk::contracterror;

/// Contract error codes. Auth failures are host panics raised by `require_auth`.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// A redemption-family call was made before the maturity timestamp.
    MaturityNotReached = 1,
    /// A delegated caller's allowance does not cover the amount consumed.
    InsufficientAllowance = 2,
    /// Holder balance does not cover the burn.
    InsufficientBalance = 3,
    /// Conversion or ledger arithmetic left the i128 range.
    Overflow = 4,
    NegativeAmount = 5,
    /// Caller is not the elevated executor of an admin-custody token.
    Unauthorized = 6,
    /// The rate source returned a non-positive rate.
    InvalidRate = 7,
}
