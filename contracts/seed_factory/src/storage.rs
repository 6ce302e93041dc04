use seed_interface::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use seed_interface::SeedError;
use soroban_sdk::{contracttype, Address, BytesN, Env};

#[contracttype]
pub enum DataKey {
    Owner,
    MasterCopy,
    SeedCount,
    Seed(u32),
    IsSeed(Address),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Result<Address, SeedError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(SeedError::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    extend_instance(env);
}

pub fn get_master_copy(env: &Env) -> Option<BytesN<32>> {
    env.storage().instance().get(&DataKey::MasterCopy)
}

pub fn set_master_copy(env: &Env, wasm_hash: &BytesN<32>) {
    env.storage().instance().set(&DataKey::MasterCopy, wasm_hash);
    extend_instance(env);
}

pub fn get_seed_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::SeedCount)
        .unwrap_or(0)
}

pub fn get_seed(env: &Env, index: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Seed(index))
}

pub fn is_seed(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::IsSeed(address.clone()))
}

/// Appends `sale` to the registry and returns its index.
pub fn register_seed(env: &Env, sale: &Address) -> u32 {
    let index = get_seed_count(env);

    let seed_key = DataKey::Seed(index);
    env.storage().persistent().set(&seed_key, sale);
    env.storage().persistent().extend_ttl(
        &seed_key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    let flag_key = DataKey::IsSeed(sale.clone());
    env.storage().persistent().set(&flag_key, &true);
    env.storage().persistent().extend_ttl(
        &flag_key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    env.storage()
        .instance()
        .set(&DataKey::SeedCount, &(index + 1));
    extend_instance(env);
    index
}
