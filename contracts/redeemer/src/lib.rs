#![no_std]

//! Reference custodian for externally-custodied principal tokens. Holds the
//! underlying of every registered market and releases it when the market's
//! principal token asks.

use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, log, symbol_short, token,
    Address, Env,
};

contractmeta!(
    key = "Description",
    val = "Custodian releasing underlying for matured principal tokens"
);

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RedeemerError {
    MarketExists = 1,
    MarketNotFound = 2,
    NegativeAmount = 3,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    /// (underlying, maturity) -> principal token
    Market(Address, u64),
}

#[contract]
pub struct Redeemer;

#[contractimpl]
impl Redeemer {
    pub fn __constructor(env: Env, admin: Address) {
        env.storage().instance().set(&DataKey::Admin, &admin);
    }

    pub fn admin(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .expect("admin not set")
    }

    /// Binds a principal token to the (underlying, maturity) market it settles.
    pub fn register_market(
        env: Env,
        underlying: Address,
        maturity: u64,
        principal_token: Address,
    ) -> Result<(), RedeemerError> {
        Self::admin(env.clone()).require_auth();

        let key = DataKey::Market(underlying.clone(), maturity);
        if env.storage().persistent().has(&key) {
            return Err(RedeemerError::MarketExists);
        }
        env.storage().persistent().set(&key, &principal_token);

        env.events().publish(
            (symbol_short!("market"), underlying, maturity),
            principal_token,
        );
        Ok(())
    }

    pub fn market(env: Env, underlying: Address, maturity: u64) -> Option<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::Market(underlying, maturity))
    }

    /// Releases `amount` of `underlying` to `receiver`. Only the principal
    /// token registered for the market may call this; it has already burned
    /// the holder's principal in the same invocation.
    pub fn authorized_redeem(
        env: Env,
        underlying: Address,
        maturity: u64,
        holder: Address,
        receiver: Address,
        amount: i128,
    ) -> Result<i128, RedeemerError> {
        if amount < 0 {
            return Err(RedeemerError::NegativeAmount);
        }
        let principal_token = Self::market(env.clone(), underlying.clone(), maturity)
            .ok_or(RedeemerError::MarketNotFound)?;
        principal_token.require_auth();

        token::Client::new(&env, &underlying).transfer(
            &env.current_contract_address(),
            &receiver,
            &amount,
        );
        log!(&env, "released", holder.clone(), amount);

        env.events().publish(
            (symbol_short!("redeemed"), underlying, maturity),
            (holder, receiver, amount),
        );
        Ok(amount)
    }
}

#[cfg(test)]
mod test;
