#![no_std]

//! Principal token: a claim on one unit of an underlying asset that can only
//! be redeemed at or after a fixed maturity. The first redemption past
//! maturity locks the exchange rate of the underlying's yield-bearing form,
//! and every later conversion divides by that locked rate.

use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, Env, String};

mod authorizer;
mod conversion;
mod error;
mod events;
mod gate;
mod interfaces;
mod ledger;
mod settlement;
mod storage;
mod types;

pub use error::Error;
pub use interfaces::{Custodian, CustodianClient, ExchangeRateSource, ExchangeRateSourceClient};
pub use types::{Custody, ExternalCustody, TokenMetadata};

contractmeta!(
    key = "Description",
    val = "Principal token redeemable for its underlying asset at maturity"
);

#[contract]
pub struct PrincipalToken;

#[contractimpl]
impl PrincipalToken {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// `maturity`, `underlying` and `custody` are fixed here for the life of
    /// the token.
    pub fn __constructor(
        env: Env,
        admin: Address,
        underlying: Address,
        maturity: u64,
        custody: Custody,
        metadata: TokenMetadata,
    ) {
        storage::write_config(&env, &admin, &underlying, maturity, &custody, &metadata);
    }

    // -----------------------------------------------------------------------
    // Quotes
    // -----------------------------------------------------------------------

    /// Underlying owed for `principal_amount`. Zero before maturity.
    pub fn convert_to_underlying(env: Env, principal_amount: i128) -> Result<i128, Error> {
        Self::quote_underlying(&env, principal_amount)
    }

    /// Principal needed for `underlying_amount`. Zero before maturity.
    pub fn convert_to_principal(env: Env, underlying_amount: i128) -> Result<i128, Error> {
        Self::quote_principal(&env, underlying_amount)
    }

    pub fn max_redeem(env: Env, holder: Address) -> Result<i128, Error> {
        if !gate::is_matured(&env) {
            return Ok(0);
        }
        Ok(storage::balance(&env, &holder))
    }

    pub fn max_withdraw(env: Env, holder: Address) -> Result<i128, Error> {
        Self::quote_underlying(&env, storage::balance(&env, &holder))
    }

    /// Same rates as `redeem`, without locking anything.
    pub fn preview_redeem(env: Env, principal_amount: i128) -> Result<i128, Error> {
        Self::quote_underlying(&env, principal_amount)
    }

    /// Same rates as `withdraw`, without locking anything.
    pub fn preview_withdraw(env: Env, underlying_amount: i128) -> Result<i128, Error> {
        Self::quote_principal(&env, underlying_amount)
    }

    // -----------------------------------------------------------------------
    // Settlement
    // -----------------------------------------------------------------------

    /// Burns `principal_amount` from `holder` and releases the underlying it
    /// is worth to `receiver`. Returns the underlying released.
    pub fn redeem(
        env: Env,
        caller: Address,
        principal_amount: i128,
        receiver: Address,
        holder: Address,
    ) -> Result<i128, Error> {
        ledger::check_nonnegative(principal_amount)?;
        caller.require_auth();

        let custody = storage::custody(&env);
        let rates = gate::settle_rates(&env)?;
        let underlying = conversion::to_underlying(principal_amount, rates)?;

        authorizer::authorize(&env, &custody, &caller, &holder, principal_amount)?;
        // the rate lock above still commits
        if principal_amount == 0 {
            return Ok(0);
        }
        let released =
            settlement::execute(&env, &custody, &holder, &receiver, principal_amount, underlying)?;

        events::settled(
            &env,
            events::REDEEM,
            &holder,
            &caller,
            &receiver,
            principal_amount,
            released,
        );
        Ok(released)
    }

    /// Releases up to `underlying_amount` to `receiver`, burning the
    /// principal it costs from `holder`. Returns the principal burned.
    ///
    /// The principal cost is floored and the release is recomputed from it,
    /// so the receiver can get slightly less than asked but never more than
    /// the burned principal is worth.
    pub fn withdraw(
        env: Env,
        caller: Address,
        underlying_amount: i128,
        receiver: Address,
        holder: Address,
    ) -> Result<i128, Error> {
        ledger::check_nonnegative(underlying_amount)?;
        caller.require_auth();

        let custody = storage::custody(&env);
        let rates = gate::settle_rates(&env)?;
        let principal = conversion::to_principal(underlying_amount, rates)?;
        let underlying = conversion::to_underlying(principal, rates)?;

        authorizer::authorize(&env, &custody, &caller, &holder, principal)?;
        // dust below one principal unit settles nothing
        if principal == 0 {
            return Ok(0);
        }
        let released =
            settlement::execute(&env, &custody, &holder, &receiver, principal, underlying)?;

        events::settled(
            &env,
            events::WITHDRAW,
            &holder,
            &caller,
            &receiver,
            principal,
            released,
        );
        Ok(principal)
    }

    // -----------------------------------------------------------------------
    // Principal ledger
    // -----------------------------------------------------------------------

    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), Error> {
        ledger::check_nonnegative(amount)?;
        storage::admin(&env).require_auth();
        ledger::mint(&env, &to, amount)
    }

    pub fn approve(env: Env, from: Address, spender: Address, amount: i128) -> Result<(), Error> {
        ledger::check_nonnegative(amount)?;
        from.require_auth();
        storage::set_allowance(&env, &from, &spender, amount);
        events::approve(&env, &from, &spender, amount);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        ledger::check_nonnegative(amount)?;
        from.require_auth();
        ledger::transfer(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        ledger::check_nonnegative(amount)?;
        spender.require_auth();
        authorizer::spend_allowance(&env, &from, &spender, amount)?;
        ledger::transfer(&env, &from, &to, amount)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::balance(&env, &id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::allowance(&env, &from, &spender)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::total_supply(&env)
    }

    pub fn decimals(env: Env) -> u32 {
        storage::metadata(&env).decimal
    }

    pub fn name(env: Env) -> String {
        storage::metadata(&env).name
    }

    pub fn symbol(env: Env) -> String {
        storage::metadata(&env).symbol
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn admin(env: Env) -> Address {
        storage::admin(&env)
    }

    pub fn maturity(env: Env) -> u64 {
        storage::maturity(&env)
    }

    pub fn underlying(env: Env) -> Address {
        storage::underlying(&env)
    }

    pub fn custody(env: Env) -> Custody {
        storage::custody(&env)
    }

    /// Zero until the first settlement past maturity locks it.
    pub fn maturity_rate(env: Env) -> i128 {
        storage::maturity_rate(&env).unwrap_or(0)
    }

    pub fn is_matured(env: Env) -> bool {
        gate::is_matured(&env)
    }

    /// Underlying held by this contract. Only meaningful for internal custody.
    pub fn reserves(env: Env) -> i128 {
        token::Client::new(&env, &storage::underlying(&env))
            .balance(&env.current_contract_address())
    }
}

impl PrincipalToken {
    fn quote_underlying(env: &Env, principal_amount: i128) -> Result<i128, Error> {
        ledger::check_nonnegative(principal_amount)?;
        match gate::quote_rates(env)? {
            Some(rates) => conversion::to_underlying(principal_amount, rates),
            None => Ok(0),
        }
    }

    fn quote_principal(env: &Env, underlying_amount: i128) -> Result<i128, Error> {
        ledger::check_nonnegative(underlying_amount)?;
        match gate::quote_rates(env)? {
            Some(rates) => conversion::to_principal(underlying_amount, rates),
            None => Ok(0),
        }
    }
}
