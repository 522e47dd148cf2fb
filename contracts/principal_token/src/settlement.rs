use soroban_sdk::{log, token, Address, Env};

use crate::error::Error;
use crate::interfaces::CustodianClient;
use crate::ledger;
use crate::storage;
use crate::types::Custody;

/// Burns `principal` from `holder` and releases `underlying` to `receiver`.
/// Returns the underlying actually released.
///
/// Contracts cannot be re-entered, so an external custodian has no way to
/// burn from this ledger itself; the burn is applied here in the same
/// invocation as the custodian call and both revert together.
pub fn execute(
    env: &Env,
    custody: &Custody,
    holder: &Address,
    receiver: &Address,
    principal: i128,
    underlying: i128,
) -> Result<i128, Error> {
    ledger::burn(env, holder, principal)?;

    let asset = storage::underlying(env);
    match custody {
        Custody::Authorized(ext) | Custody::Admin(ext) => {
            let released = CustodianClient::new(env, &ext.custodian).authorized_redeem(
                &asset,
                &storage::maturity(env),
                holder,
                receiver,
                &underlying,
            );
            log!(env, "custodian released", released);
            Ok(released)
        }
        Custody::Internal => {
            token::Client::new(env, &asset).transfer(
                &env.current_contract_address(),
                receiver,
                &underlying,
            );
            Ok(underlying)
        }
    }
}
