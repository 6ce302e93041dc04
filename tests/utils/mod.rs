#![allow(dead_code)]

use seed_interface::constants::PRECISION;
use seed_interface::{DefaultClassParams, SeedParams, TipParams};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, vec, Address, Bytes, Env,
};

pub const NOW: u64 = 10_000;
pub const START: u64 = NOW + 3_600;
pub const END: u64 = START + 7 * DAY;
pub const DAY: u64 = 86_400;

pub struct Asset<'a> {
    pub address: Address,
    pub client: token::Client<'a>,
    pub admin: token::StellarAssetClient<'a>,
}

pub fn create_asset<'a>(env: &Env) -> Asset<'a> {
    let address = env
        .register_stellar_asset_contract_v2(Address::generate(env))
        .address();
    Asset {
        client: token::Client::new(env, &address),
        admin: token::StellarAssetClient::new(env, &address),
        address,
    }
}

pub struct Roles {
    pub admin: Address,
    pub beneficiary: Address,
    pub treasury: Address,
}

impl Roles {
    pub fn generate(env: &Env) -> Self {
        Roles {
            admin: Address::generate(env),
            beneficiary: Address::generate(env),
            treasury: Address::generate(env),
        }
    }
}

pub fn start_clock(env: &Env) {
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = NOW);
}

pub fn jump(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| li.timestamp = timestamp);
}

/// A 1 000 / 10 000 unit sale at two funding units per sale unit with a 5% tip
/// vesting over 30 days.
pub fn seed_params(env: &Env, roles: &Roles, sale: &Asset, funding: &Asset) -> SeedParams {
    SeedParams {
        beneficiary: roles.beneficiary.clone(),
        admin: roles.admin.clone(),
        treasury: roles.treasury.clone(),
        tokens: vec![env, sale.address.clone(), funding.address.clone()],
        soft_and_hard_cap: vec![env, 1_000i128, 10_000i128],
        price: 2 * PRECISION,
        start_time: START,
        end_time: END,
        default_class: DefaultClassParams {
            individual_cap: 500,
            vesting_cliff: 0,
            vesting_duration: 60 * DAY,
        },
        permissioned: false,
        allowlist: vec![env],
        tip: TipParams {
            tip_percentage: PRECISION / 20,
            vesting_cliff: 0,
            vesting_duration: 30 * DAY,
        },
        metadata: Bytes::from_slice(env, b"ipfs://bafy-seed"),
    }
}
