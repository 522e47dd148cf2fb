#![cfg(test)]

extern crate std;

use soroban_sdk::{
    testutils::Address as _,
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};

use crate::{Redeemer, RedeemerClient, RedeemerError};

const MATURITY: u64 = 1_000;
const FUNDS: i128 = 5_000;

struct Setup {
    env: Env,
    redeemer: RedeemerClient<'static>,
    asset: TokenClient<'static>,
    principal_token: Address,
}

fn create_setup() -> Setup {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let asset = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let redeemer_id = env.register(Redeemer, (admin,));
    StellarAssetClient::new(&env, &asset).mint(&redeemer_id, &FUNDS);

    let redeemer = RedeemerClient::new(&env, &redeemer_id);
    let principal_token = Address::generate(&env);
    redeemer.register_market(&asset, &MATURITY, &principal_token);

    Setup {
        asset: TokenClient::new(&env, &asset),
        env,
        redeemer,
        principal_token,
    }
}

#[test]
fn releases_underlying_to_receiver() {
    let s = create_setup();
    let holder = Address::generate(&s.env);
    let receiver = Address::generate(&s.env);

    let released =
        s.redeemer
            .authorized_redeem(&s.asset.address, &MATURITY, &holder, &receiver, &1_200);

    assert_eq!(s.env.auths()[0].0, s.principal_token);
    assert_eq!(released, 1_200);
    assert_eq!(s.asset.balance(&receiver), 1_200);
    assert_eq!(s.asset.balance(&s.redeemer.address), FUNDS - 1_200);
}

#[test]
fn unknown_market_is_rejected() {
    let s = create_setup();
    let holder = Address::generate(&s.env);

    let result =
        s.redeemer
            .try_authorized_redeem(&s.asset.address, &(MATURITY + 1), &holder, &holder, &1);
    assert_eq!(result, Err(Ok(RedeemerError::MarketNotFound)));
}

#[test]
fn markets_register_once() {
    let s = create_setup();

    assert_eq!(
        s.redeemer.market(&s.asset.address, &MATURITY),
        Some(s.principal_token.clone())
    );
    let result = s.redeemer.try_register_market(
        &s.asset.address,
        &MATURITY,
        &Address::generate(&s.env),
    );
    assert_eq!(result, Err(Ok(RedeemerError::MarketExists)));
    assert_eq!(s.redeemer.market(&s.asset.address, &0), None);
}

#[test]
fn negative_amount_is_rejected() {
    let s = create_setup();
    let holder = Address::generate(&s.env);

    let result = s
        .redeemer
        .try_authorized_redeem(&s.asset.address, &MATURITY, &holder, &holder, &-5);
    assert_eq!(result, Err(Ok(RedeemerError::NegativeAmount)));
}
