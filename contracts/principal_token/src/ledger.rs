use soroban_sdk::{log, Address, Env};

use crate::error::Error;
use crate::events;
use crate::storage;

pub fn check_nonnegative(amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::NegativeAmount);
    }
    Ok(())
}

fn receive(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    let balance = storage::balance(env, to)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    storage::set_balance(env, to, balance);
    Ok(())
}

fn spend(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    let balance = storage::balance(env, from);
    if balance < amount {
        log!(env, "insufficient balance", balance, amount);
        return Err(Error::InsufficientBalance);
    }
    storage::set_balance(env, from, balance - amount);
    Ok(())
}

pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    receive(env, to, amount)?;
    let supply = storage::total_supply(env)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    storage::set_total_supply(env, supply);
    events::mint(env, to, amount);
    Ok(())
}

pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    spend(env, from, amount)?;
    let supply = storage::total_supply(env)
        .checked_sub(amount)
        .ok_or(Error::Overflow)?;
    storage::set_total_supply(env, supply);
    events::burn(env, from, amount);
    Ok(())
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    spend(env, from, amount)?;
    receive(env, to, amount)?;
    events::transfer(env, from, to, amount);
    Ok(())
}
