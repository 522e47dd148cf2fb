use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Custody, TokenMetadata};

// ---------------------------------------------------------------------------
// Storage keys
// ---------------------------------------------------------------------------

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Underlying,
    Maturity,
    Custody,
    /// Absent until the first post-maturity settlement locks it.
    MaturityRate,
    Metadata,
    TotalSupply,
    Balance(Address),
    Allowance(Address, Address),
}

// ---------------------------------------------------------------------------
// Construction-time configuration
// ---------------------------------------------------------------------------

pub fn write_config(
    env: &Env,
    admin: &Address,
    underlying: &Address,
    maturity: u64,
    custody: &Custody,
    metadata: &TokenMetadata,
) {
    let store = env.storage().instance();
    store.set(&DataKey::Admin, admin);
    store.set(&DataKey::Underlying, underlying);
    store.set(&DataKey::Maturity, &maturity);
    store.set(&DataKey::Custody, custody);
    store.set(&DataKey::Metadata, metadata);
    store.set(&DataKey::TotalSupply, &0_i128);
}

pub fn admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("admin not set")
}

pub fn underlying(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Underlying)
        .expect("underlying not set")
}

pub fn maturity(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::Maturity)
        .expect("maturity not set")
}

pub fn custody(env: &Env) -> Custody {
    env.storage()
        .instance()
        .get(&DataKey::Custody)
        .expect("custody not set")
}

pub fn metadata(env: &Env) -> TokenMetadata {
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .expect("metadata not set")
}

// ---------------------------------------------------------------------------
// Maturity rate
// ---------------------------------------------------------------------------

pub fn maturity_rate(env: &Env) -> Option<i128> {
    env.storage().instance().get(&DataKey::MaturityRate)
}

/// Callers must have checked `maturity_rate` is absent; the gate is the only writer.
pub fn lock_maturity_rate(env: &Env, rate: i128) {
    env.storage().instance().set(&DataKey::MaturityRate, &rate);
}

// ---------------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------------

pub fn balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(id.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, id: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(id.clone()), &amount);
}

pub fn allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Allowance(from.clone(), spender.clone()))
        .unwrap_or(0)
}

pub fn set_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Allowance(from.clone(), spender.clone()), &amount);
}

pub fn total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &amount);
}
