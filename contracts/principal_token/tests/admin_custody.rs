use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::{Client as TokenClient, StellarAssetClient};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol};

use principal_token::{
    Custody, Error, ExternalCustody, PrincipalToken, PrincipalTokenClient, TokenMetadata,
};

const RATE: Symbol = symbol_short!("RATE");

#[contract]
struct FixedRateSource;

#[contractimpl]
impl FixedRateSource {
    pub fn set_rate(env: Env, rate: i128) {
        env.storage().instance().set(&RATE, &rate);
    }

    pub fn exchange_rate(env: Env, _protocol: u32, _yield_token: Address) -> i128 {
        env.storage().instance().get(&RATE).unwrap_or(0)
    }
}

#[contract]
struct PassThroughCustodian;

#[contractimpl]
impl PassThroughCustodian {
    pub fn authorized_redeem(
        env: Env,
        underlying: Address,
        _maturity: u64,
        _holder: Address,
        receiver: Address,
        amount: i128,
    ) -> i128 {
        TokenClient::new(&env, &underlying).transfer(
            &env.current_contract_address(),
            &receiver,
            &amount,
        );
        amount
    }
}

const MATURITY: u64 = 86_400;
const RATE_AT_MATURITY: i128 = 12_000_000;

struct Setup {
    env: Env,
    token: PrincipalTokenClient<'static>,
    rates: FixedRateSourceClient<'static>,
    asset: TokenClient<'static>,
    admin: Address,
    holder: Address,
}

fn setup() -> Setup {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let holder = Address::generate(&env);

    let asset = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let rates_id = env.register(FixedRateSource, ());
    let custodian_id = env.register(PassThroughCustodian, ());
    StellarAssetClient::new(&env, &asset).mint(&custodian_id, &1_000_000);

    let custody = Custody::Admin(ExternalCustody {
        custodian: custodian_id,
        rate_source: rates_id.clone(),
        protocol: 4,
        yield_token: Address::generate(&env),
    });
    let metadata = TokenMetadata {
        decimal: 7,
        name: String::from_str(&env, "Principal XLM"),
        symbol: String::from_str(&env, "pXLM"),
    };
    let token_id = env.register(
        PrincipalToken,
        (admin.clone(), asset.clone(), MATURITY, custody, metadata),
    );

    let token = PrincipalTokenClient::new(&env, &token_id);
    let rates = FixedRateSourceClient::new(&env, &rates_id);
    rates.set_rate(&RATE_AT_MATURITY);
    token.mint(&holder, &1_000);

    Setup {
        asset: TokenClient::new(&env, &asset),
        env,
        token,
        rates,
        admin,
        holder,
    }
}

#[test]
fn admin_redeems_for_any_holder_without_allowance() {
    let s = setup();
    let receiver = Address::generate(&s.env);
    s.env.ledger().with_mut(|l| l.timestamp = MATURITY);

    let released = s.token.redeem(&s.admin, &400, &receiver, &s.holder);

    assert_eq!(released, 400);
    assert_eq!(s.token.allowance(&s.holder, &s.admin), 0);
    assert_eq!(s.token.balance(&s.holder), 600);
    assert_eq!(s.asset.balance(&receiver), 400);
    assert_eq!(s.token.maturity_rate(), RATE_AT_MATURITY);
}

#[test]
fn holder_cannot_settle_directly() {
    let s = setup();
    s.env.ledger().with_mut(|l| l.timestamp = MATURITY);

    let result = s.token.try_redeem(&s.holder, &400, &s.holder, &s.holder);
    assert_eq!(result, Err(Ok(Error::Unauthorized)));

    // an allowance does not open the path either
    let delegate = Address::generate(&s.env);
    s.token.approve(&s.holder, &delegate, &1_000);
    let result = s.token.try_withdraw(&delegate, &400, &delegate, &s.holder);
    assert_eq!(result, Err(Ok(Error::Unauthorized)));

    assert_eq!(s.token.maturity_rate(), 0);
    assert_eq!(s.token.allowance(&s.holder, &delegate), 1_000);
}

#[test]
fn admin_is_still_gated_by_maturity() {
    let s = setup();
    s.env.ledger().with_mut(|l| l.timestamp = MATURITY - 1);

    let result = s.token.try_redeem(&s.admin, &400, &s.admin, &s.holder);
    assert_eq!(result, Err(Ok(Error::MaturityNotReached)));
}

#[test]
fn admin_withdraw_uses_locked_rate() {
    let s = setup();
    let receiver = Address::generate(&s.env);
    s.env.ledger().with_mut(|l| l.timestamp = MATURITY);
    s.token.redeem(&s.admin, &0, &receiver, &s.holder);

    s.rates.set_rate(&(RATE_AT_MATURITY * 2));
    s.env.ledger().with_mut(|l| l.timestamp = MATURITY * 2);

    let burned = s.token.withdraw(&s.admin, &500, &receiver, &s.holder);
    assert_eq!(burned, 250);
    assert_eq!(s.asset.balance(&receiver), 500);
    assert_eq!(s.token.maturity_rate(), RATE_AT_MATURITY);
}
