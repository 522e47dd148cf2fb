use soroban_sdk::{contracttype, Address, String};

/// Where the underlying asset backing the principal lives and who moves it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Custody {
    /// Holders (or their delegates) redeem through an external custodian.
    Authorized(ExternalCustody),
    /// Only the admin redeems, on any holder's behalf, through an external
    /// custodian. Delegation is checked upstream of this contract.
    Admin(ExternalCustody),
    /// The contract holds the underlying itself and pays out at parity.
    Internal,
}

impl Custody {
    pub fn external(&self) -> Option<&ExternalCustody> {
        match self {
            Custody::Authorized(ext) | Custody::Admin(ext) => Some(ext),
            Custody::Internal => None,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExternalCustody {
    /// Contract implementing `Custodian`.
    pub custodian: Address,
    /// Contract implementing `ExchangeRateSource`.
    pub rate_source: Address,
    /// Protocol selector passed through to the rate source.
    pub protocol: u32,
    /// Yield-bearing representation of the underlying.
    pub yield_token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub decimal: u32,
    pub name: String,
    pub symbol: String,
}

/// Rates a post-maturity conversion runs on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rates {
    pub live: i128,
    pub maturity: i128,
}

impl Rates {
    pub const PARITY: Rates = Rates { live: 1, maturity: 1 };
}
