use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub const MATURED: Symbol = symbol_short!("matured");
pub const REDEEM: Symbol = symbol_short!("redeem");
pub const WITHDRAW: Symbol = symbol_short!("withdraw");

/// Published once per token, when the maturity rate is locked.
pub fn matured(env: &Env, timestamp: u64, rate: i128) {
    env.events().publish((MATURED,), (timestamp, rate));
}

pub fn settled(
    env: &Env,
    kind: Symbol,
    holder: &Address,
    caller: &Address,
    receiver: &Address,
    principal: i128,
    underlying: i128,
) {
    env.events().publish(
        (kind, holder.clone()),
        (caller.clone(), receiver.clone(), principal, underlying),
    );
}

pub fn approve(env: &Env, from: &Address, spender: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("approve"), from.clone(), spender.clone()), amount);
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("transfer"), from.clone(), to.clone()), amount);
}

pub fn mint(env: &Env, to: &Address, amount: i128) {
    env.events().publish((symbol_short!("mint"), to.clone()), amount);
}

pub fn burn(env: &Env, from: &Address, amount: i128) {
    env.events().publish((symbol_short!("burn"), from.clone()), amount);
}
