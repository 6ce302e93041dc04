use crate::utils::{create_asset, jump, seed_params, start_clock, Roles, START};
use seed_factory::{SeedCreatedEvent, SeedFactory, SeedFactoryClient};
use seed_interface::SeedError;
use seed_sale::SeedSaleClient;
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    Address, Env, Symbol, TryFromVal,
};

mod seed_sale_wasm {
    soroban_sdk::contractimport!(
        file = "../target/wasm32-unknown-unknown/release/seed_sale.wasm"
    );
}

fn factory_with_master_copy<'a>(env: &Env) -> (SeedFactoryClient<'a>, Address) {
    let factory_id = env.register_contract(None, SeedFactory);
    let factory = SeedFactoryClient::new(env, &factory_id);
    let owner = Address::generate(env);
    factory.initialize(&owner);

    let wasm_hash = env.deployer().upload_contract_wasm(seed_sale_wasm::WASM);
    factory.set_master_copy(&wasm_hash);
    (factory, factory_id)
}

#[test]
fn test_deploy_seed_registers_and_initializes() {
    let env = Env::default();
    start_clock(&env);
    let (factory, factory_id) = factory_with_master_copy(&env);
    let roles = Roles::generate(&env);
    let sale = create_asset(&env);
    let funding = create_asset(&env);
    let params = seed_params(&env, &roles, &sale, &funding);

    let sale_id = factory.deploy_seed(&params);

    let (contract, topics, data) = env.events().all().last().unwrap();
    assert_eq!(contract, factory_id);
    assert_eq!(
        Symbol::try_from_val(&env, &topics.get(1).unwrap()).unwrap(),
        symbol_short!("created")
    );
    assert_eq!(
        SeedCreatedEvent::try_from_val(&env, &data).unwrap(),
        SeedCreatedEvent {
            sale_address: sale_id.clone()
        }
    );

    assert!(factory.is_seed(&sale_id));
    assert_eq!(factory.get_seed_count(), 1);
    assert_eq!(factory.get_seed(&0), Some(sale_id.clone()));

    let client = SeedSaleClient::new(&env, &sale_id);
    let config = client.get_config();
    assert_eq!(config.admin, roles.admin);
    assert_eq!(config.sale_amount_required, 5_250);
    assert_eq!(
        client.try_initialize(&params),
        Err(Ok(SeedError::AlreadyInitialized))
    );

    // the deployed sale runs on its own
    sale.admin.mint(&sale_id, &5_250);
    jump(&env, START);
    let buyer = Address::generate(&env);
    funding.admin.mint(&buyer, &500);
    assert_eq!(client.buy(&buyer, &500), 250);
}

#[test]
fn test_each_deployment_gets_a_fresh_instance() {
    let env = Env::default();
    start_clock(&env);
    let (factory, _) = factory_with_master_copy(&env);
    let roles = Roles::generate(&env);
    let sale = create_asset(&env);
    let funding = create_asset(&env);
    let params = seed_params(&env, &roles, &sale, &funding);

    let first = factory.deploy_seed(&params);
    let second = factory.deploy_seed(&params);
    assert_ne!(first, second);
    assert_eq!(factory.get_seeds().len(), 2);
    assert_eq!(factory.get_seeds().get(1), Some(second));
}

#[test]
fn test_invalid_params_deploy_nothing() {
    let env = Env::default();
    start_clock(&env);
    let (factory, _) = factory_with_master_copy(&env);
    let roles = Roles::generate(&env);
    let sale = create_asset(&env);
    let funding = create_asset(&env);

    let mut params = seed_params(&env, &roles, &sale, &funding);
    params.admin = sale.address.clone();
    assert_eq!(
        factory.try_deploy_seed(&params),
        Err(Ok(SeedError::IdenticalAddresses))
    );
    assert_eq!(factory.get_seed_count(), 0);
}
