use soroban_sdk::{contractclient, Address, Env};

/// Live exchange rate of a yield-bearing token against its underlying.
/// Every call is read fresh from the adapter; nothing is cached.
#[contractclient(name = "ExchangeRateSourceClient")]
pub trait ExchangeRateSource {
    fn exchange_rate(env: Env, protocol: u32, yield_token: Address) -> i128;
}

/// External contract that holds the underlying and releases it on behalf of
/// a principal token. Returns the amount of underlying released.
#[contractclient(name = "CustodianClient")]
pub trait Custodian {
    fn authorized_redeem(
        env: Env,
        underlying: Address,
        maturity: u64,
        holder: Address,
        receiver: Address,
        amount: i128,
    ) -> i128;
}
