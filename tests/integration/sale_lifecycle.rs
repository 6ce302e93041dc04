use crate::utils::{create_asset, jump, seed_params, start_clock, Roles, DAY, START};
use seed_interface::{SeedClient, SeedError};
use seed_sale::{ClassId, ClassParams, SaleOutcome, SaleStatus, SeedSale, SeedSaleClient};
use soroban_sdk::{testutils::Address as _, vec, Address, Env, String};

#[test]
fn test_initialize_through_interface_client() {
    let env = Env::default();
    start_clock(&env);
    let roles = Roles::generate(&env);
    let sale = create_asset(&env);
    let funding = create_asset(&env);
    let params = seed_params(&env, &roles, &sale, &funding);

    let sale_id = env.register_contract(None, SeedSale);
    let seed = SeedClient::new(&env, &sale_id);
    seed.initialize(&params);
    assert_eq!(
        seed.try_initialize(&params),
        Err(Ok(SeedError::AlreadyInitialized))
    );

    let client = SeedSaleClient::new(&env, &sale_id);
    let config = client.get_config();
    assert_eq!(config.total_buyable_sale, 5_000);
    assert_eq!(config.sale_amount_required, 5_250);
    assert_eq!(client.get_status(), SaleStatus::Pending);
}

#[test]
fn test_complete_sale_with_tiers() {
    let env = Env::default();
    env.budget().reset_unlimited();
    start_clock(&env);
    let roles = Roles::generate(&env);
    let sale = create_asset(&env);
    let funding = create_asset(&env);

    let sale_id = env.register_contract(None, SeedSale);
    let client = SeedSaleClient::new(&env, &sale_id);
    client.initialize(&seed_params(&env, &roles, &sale, &funding));

    let strategic = [Address::generate(&env), Address::generate(&env)];
    let tier = client.add_class(&ClassParams {
        class_name: String::from_str(&env, "strategic"),
        class_cap: 4_000,
        individual_cap: 2_000,
        vesting_cliff: 10 * DAY,
        vesting_duration: 90 * DAY,
        allowlist: vec![&env, strategic[0].clone(), strategic[1].clone()],
    });
    for investor in strategic.iter() {
        funding.admin.mint(investor, &2_500);
    }
    sale.admin.mint(&sale_id, &5_250);
    jump(&env, START);
    assert_eq!(client.get_status(), SaleStatus::Live);

    assert_eq!(client.buy(&strategic[0], &2_000), 1_000);
    assert_eq!(
        client.try_buy(&strategic[1], &2_500),
        Err(Ok(SeedError::IndividualCapExceeded))
    );
    assert_eq!(client.buy(&strategic[1], &2_000), 1_000);
    assert_eq!(client.get_class(&tier).class_funding_collected, 4_000);

    let mut public = soroban_sdk::Vec::<Address>::new(&env);
    for _ in 0..12 {
        let buyer = Address::generate(&env);
        funding.admin.mint(&buyer, &500);
        assert_eq!(client.buy(&buyer, &500), 250);
        public.push_back(buyer);
    }
    assert!(client.get_maximum_reached());
    assert_eq!(client.get_vesting_start_time(), START);
    assert_eq!(client.get_remaining_sale(), 0);
    assert_eq!(client.get_funder_count(), 14);

    let late = Address::generate(&env);
    funding.admin.mint(&late, &500);
    assert_eq!(
        client.try_buy(&late, &500),
        Err(Ok(SeedError::MaximumReached))
    );

    assert_eq!(client.get_outcome(), SaleOutcome::Complete);
    assert_eq!(client.withdraw(&roles.treasury), 10_000);
    assert_eq!(funding.client.balance(&roles.treasury), 10_000);
    assert_eq!(
        client.try_retrieve_seed_tokens(&roles.admin, &roles.admin),
        Err(Ok(SeedError::NothingToRetrieve))
    );

    jump(&env, START + 60 * DAY);
    assert_eq!(client.claim(&public.get(0).unwrap(), &None), 250);
    assert_eq!(client.claim(&strategic[0], &None), 666);
    assert_eq!(client.claim_tip(&None), 250);

    jump(&env, START + 90 * DAY);
    assert_eq!(client.claim(&strategic[0], &None), 334);
    assert_eq!(client.claim(&strategic[1], &None), 1_000);
    for buyer in public.iter().skip(1) {
        assert_eq!(client.claim(&buyer, &None), 250);
    }

    assert_eq!(sale.client.balance(&sale_id), 0);
    assert_eq!(sale.client.balance(&roles.beneficiary), 250);
    assert_eq!(sale.client.balance(&strategic[1]), 1_000);
    assert_eq!(client.get_state().sale_claimed, 5_000);
}

#[test]
fn test_closed_sale_unwinds() {
    let env = Env::default();
    start_clock(&env);
    let roles = Roles::generate(&env);
    let sale = create_asset(&env);
    let funding = create_asset(&env);

    let sale_id = env.register_contract(None, SeedSale);
    let client = SeedSaleClient::new(&env, &sale_id);
    client.initialize(&seed_params(&env, &roles, &sale, &funding));
    sale.admin.mint(&sale_id, &5_250);
    jump(&env, START);

    let first = Address::generate(&env);
    let second = Address::generate(&env);
    for buyer in [&first, &second] {
        funding.admin.mint(buyer, &300);
        client.buy(buyer, &300);
    }

    jump(&env, START + DAY);
    client.close();
    assert_eq!(client.get_outcome(), SaleOutcome::Failed);
    assert_eq!(client.get_vesting_start_time(), START + DAY);

    assert_eq!(client.retrieve_funding_tokens(&first), 300);
    assert_eq!(client.retrieve_funding_tokens(&second), 300);
    assert_eq!(funding.client.balance(&sale_id), 0);
    assert_eq!(client.get_funding_collected(), 0);
    assert_eq!(client.get_funder(&first).class, ClassId::Default);

    assert_eq!(client.retrieve_seed_tokens(&roles.admin, &roles.treasury), 5_250);
    assert_eq!(sale.client.balance(&roles.treasury), 5_250);
}
