#![allow(dead_code)]

use seed_interface::constants::PRECISION;
use seed_interface::{DefaultClassParams, SeedParams, TipParams};
use seed_sale::{SeedSale, SeedSaleClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, vec, Address, Bytes, Env,
};

pub const NOW: u64 = 1_000;
pub const START: u64 = 2_000;
pub const END: u64 = 3_000;
pub const DAY: u64 = 86_400;

pub struct SeedTest<'a> {
    pub env: Env,
    pub sale_id: Address,
    pub client: SeedSaleClient<'a>,
    pub admin: Address,
    pub beneficiary: Address,
    pub treasury: Address,
    pub sale_token: token::Client<'a>,
    pub sale_minter: token::StellarAssetClient<'a>,
    pub funding_token: token::Client<'a>,
    pub funding_minter: token::StellarAssetClient<'a>,
}

fn create_token<'a>(
    env: &Env,
    issuer: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let address = env
        .register_stellar_asset_contract_v2(issuer.clone())
        .address();
    (
        token::Client::new(env, &address),
        token::StellarAssetClient::new(env, &address),
    )
}

/// Registers an uninitialized sale and two 7-decimal asset contracts.
pub fn setup<'a>(env: &Env) -> SeedTest<'a> {
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = NOW);

    let issuer = Address::generate(env);
    let (sale_token, sale_minter) = create_token(env, &issuer);
    let (funding_token, funding_minter) = create_token(env, &issuer);

    let sale_id = env.register_contract(None, SeedSale);
    let client = SeedSaleClient::new(env, &sale_id);

    SeedTest {
        env: env.clone(),
        sale_id,
        client,
        admin: Address::generate(env),
        beneficiary: Address::generate(env),
        treasury: Address::generate(env),
        sale_token,
        sale_minter,
        funding_token,
        funding_minter,
    }
}

/// Initializes, funds and opens a sale built from the default parameters
/// after `tweak` has adjusted them.
pub fn setup_live<'a>(env: &Env, tweak: impl FnOnce(&mut SeedParams)) -> SeedTest<'a> {
    let t = setup(env);
    let mut params = t.params();
    tweak(&mut params);
    t.client.initialize(&params);
    t.fund();
    t.jump(START);
    t
}

impl<'a> SeedTest<'a> {
    /// Soft cap 10, hard cap 102, 1:1 price, individual cap 10 vesting over
    /// 100 days, 10% tip released at once.
    pub fn params(&self) -> SeedParams {
        SeedParams {
            beneficiary: self.beneficiary.clone(),
            admin: self.admin.clone(),
            treasury: self.treasury.clone(),
            tokens: vec![
                &self.env,
                self.sale_token.address.clone(),
                self.funding_token.address.clone(),
            ],
            soft_and_hard_cap: vec![&self.env, 10i128, 102i128],
            price: PRECISION,
            start_time: START,
            end_time: END,
            default_class: DefaultClassParams {
                individual_cap: 10,
                vesting_cliff: 0,
                vesting_duration: 100 * DAY,
            },
            permissioned: false,
            allowlist: vec![&self.env],
            tip: TipParams {
                tip_percentage: PRECISION / 10,
                vesting_cliff: 0,
                vesting_duration: 0,
            },
            metadata: Bytes::from_slice(&self.env, b"ipfs://seed"),
        }
    }

    /// Mints exactly what the sale needs before the first purchase.
    pub fn fund(&self) {
        let required = self.client.get_config().sale_amount_required;
        self.sale_minter.mint(&self.sale_id, &required);
    }

    /// A fresh address holding `funding` funding tokens.
    pub fn buyer(&self, funding: i128) -> Address {
        let buyer = Address::generate(&self.env);
        if funding > 0 {
            self.funding_minter.mint(&buyer, &funding);
        }
        buyer
    }

    pub fn jump(&self, timestamp: u64) {
        self.env.ledger().with_mut(|li| li.timestamp = timestamp);
    }
}
