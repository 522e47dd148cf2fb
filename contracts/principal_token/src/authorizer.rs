use soroban_sdk::{log, Address, Env};

use crate::error::Error;
use crate::storage;
use crate::types::Custody;

/// Decides whether `caller` may burn `amount` of `holder`'s principal and
/// consumes delegation when it is used. `caller` has already passed
/// `require_auth`.
pub fn authorize(
    env: &Env,
    custody: &Custody,
    caller: &Address,
    holder: &Address,
    amount: i128,
) -> Result<(), Error> {
    match custody {
        // delegation for admin custody is enforced upstream
        Custody::Admin(_) => {
            if *caller != storage::admin(env) {
                log!(env, "caller is not the custody admin", caller.clone());
                return Err(Error::Unauthorized);
            }
            Ok(())
        }
        Custody::Authorized(_) | Custody::Internal => {
            if caller == holder {
                return Ok(());
            }
            spend_allowance(env, holder, caller, amount)
        }
    }
}

pub fn spend_allowance(
    env: &Env,
    holder: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), Error> {
    let allowed = storage::allowance(env, holder, spender);
    if allowed < amount {
        log!(env, "insufficient allowance", allowed, amount);
        return Err(Error::InsufficientAllowance);
    }
    storage::set_allowance(env, holder, spender, allowed - amount);
    Ok(())
}
