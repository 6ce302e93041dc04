use crate::types::*;
use seed_interface::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use seed_interface::SeedError;
use soroban_sdk::{Address, Bytes, Env};

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, SeedError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(SeedError::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_state(env: &Env) -> Result<SaleState, SeedError> {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(SeedError::NotInitialized)
}

pub fn set_state(env: &Env, state: &SaleState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance(env);
}

pub fn get_tip(env: &Env) -> Result<Tip, SeedError> {
    env.storage()
        .instance()
        .get(&DataKey::Tip)
        .ok_or(SeedError::NotInitialized)
}

pub fn set_tip(env: &Env, tip: &Tip) {
    env.storage().instance().set(&DataKey::Tip, tip);
}

pub fn get_metadata(env: &Env) -> Bytes {
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .unwrap_or(Bytes::new(env))
}

pub fn set_metadata(env: &Env, metadata: &Bytes) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
}

pub fn get_class_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ClassCount)
        .unwrap_or(0)
}

pub fn set_class_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::ClassCount, &count);
}

pub fn get_class(env: &Env, index: u32) -> Option<ContributorClass> {
    env.storage().persistent().get(&DataKey::Class(index))
}

pub fn set_class(env: &Env, index: u32, class: &ContributorClass) {
    let key = DataKey::Class(index);
    env.storage().persistent().set(&key, class);
    extend_persistent(env, &key);
}

pub fn get_funder(env: &Env, funder: &Address) -> Funder {
    env.storage()
        .persistent()
        .get(&DataKey::Funder(funder.clone()))
        .unwrap_or_else(Funder::new)
}

pub fn set_funder(env: &Env, address: &Address, funder: &Funder) {
    let key = DataKey::Funder(address.clone());
    env.storage().persistent().set(&key, funder);
    extend_persistent(env, &key);
}
