use soroban_sdk::{log, Env};

use crate::error::Error;
use crate::events;
use crate::interfaces::ExchangeRateSourceClient;
use crate::storage;
use crate::types::{ExternalCustody, Rates};

pub fn is_matured(env: &Env) -> bool {
    env.ledger().timestamp() >= storage::maturity(env)
}

/// Rates for a quote. `None` before maturity, where every quote is zero.
///
/// Quotes never write: between maturity and the first settlement the live
/// rate stands in for the rate that settlement would lock.
pub fn quote_rates(env: &Env) -> Result<Option<Rates>, Error> {
    if !is_matured(env) {
        return Ok(None);
    }

    let ext = match storage::custody(env).external() {
        Some(ext) => ext.clone(),
        None => return Ok(Some(Rates::PARITY)),
    };

    let live = live_rate(env, &ext)?;
    let maturity = storage::maturity_rate(env).unwrap_or(live);
    Ok(Some(Rates { live, maturity }))
}

/// Rates for a settlement, locking the maturity rate on the first call past
/// maturity.
pub fn settle_rates(env: &Env) -> Result<Rates, Error> {
    let now = env.ledger().timestamp();
    let maturity = storage::maturity(env);
    if now < maturity {
        log!(env, "maturity not reached", maturity, now);
        return Err(Error::MaturityNotReached);
    }

    let ext = match storage::custody(env).external() {
        Some(ext) => ext.clone(),
        None => return Ok(Rates::PARITY),
    };

    let live = live_rate(env, &ext)?;
    match storage::maturity_rate(env) {
        Some(locked) => Ok(Rates { live, maturity: locked }),
        None => {
            storage::lock_maturity_rate(env, live);
            log!(env, "maturity rate locked", now, live);
            events::matured(env, now, live);
            Ok(Rates { live, maturity: live })
        }
    }
}

fn live_rate(env: &Env, ext: &ExternalCustody) -> Result<i128, Error> {
    let rate = ExchangeRateSourceClient::new(env, &ext.rate_source)
        .exchange_rate(&ext.protocol, &ext.yield_token);

    // zero is the unset sentinel and can never be locked
    if rate <= 0 {
        log!(env, "invalid exchange rate", rate);
        return Err(Error::InvalidRate);
    }
    Ok(rate)
}
