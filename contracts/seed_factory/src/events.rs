use seed_interface::constants::SEED_TOPIC;
use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SeedCreatedEvent {
    pub sale_address: Address,
}

pub fn seed_created(env: &Env, sale_address: &Address) {
    env.events().publish(
        (SEED_TOPIC, symbol_short!("created")),
        SeedCreatedEvent {
            sale_address: sale_address.clone(),
        },
    );
}

pub fn ownership_transferred(env: &Env, previous: &Address, new_owner: &Address) {
    env.events().publish(
        (SEED_TOPIC, symbol_short!("owner")),
        (previous.clone(), new_owner.clone()),
    );
}

pub fn master_copy_set(env: &Env, wasm_hash: &BytesN<32>) {
    env.events()
        .publish((SEED_TOPIC, symbol_short!("master")), wasm_hash.clone());
}
