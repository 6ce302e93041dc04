use crate::allowlist;
use crate::storage;
use crate::types::{ClassId, ClassParams, ClassTable, ClassUpdate, ContributorClass, SaleConfig};
use seed_interface::constants::{MAX_BATCH, MAX_CLASSES};
use seed_interface::SeedError;
use soroban_sdk::{Env, Vec};

/// `0 < individual_cap <= class_cap <= hard_cap`
pub fn check_caps(hard_cap: i128, class_cap: i128, individual_cap: i128) -> Result<(), SeedError> {
    if class_cap <= 0 || individual_cap <= 0 {
        return Err(SeedError::InvalidCaps);
    }
    if individual_cap > class_cap || class_cap > hard_cap {
        return Err(SeedError::InvalidCaps);
    }
    Ok(())
}

pub fn load(env: &Env, class_id: ClassId) -> Result<(u32, ContributorClass), SeedError> {
    let index = class_id.index().ok_or(SeedError::InvalidClassId)?;
    let class = storage::get_class(env, index).ok_or(SeedError::InvalidClassId)?;
    Ok((index, class))
}

pub fn exists(env: &Env, class_id: ClassId) -> bool {
    match class_id.index() {
        Some(index) => index < storage::get_class_count(env),
        None => false,
    }
}

/// Validates a whole batch first, then writes it; a bad entry leaves no trace.
pub fn add_classes(
    env: &Env,
    config: &SaleConfig,
    batch: &Vec<ClassParams>,
) -> Result<Vec<ClassId>, SeedError> {
    if batch.len() > MAX_BATCH {
        return Err(SeedError::BatchTooLarge);
    }
    for params in batch.iter() {
        check_caps(config.hard_cap, params.class_cap, params.individual_cap)?;
    }
    let count = storage::get_class_count(env);
    if count + batch.len() > MAX_CLASSES {
        return Err(SeedError::TooManyClasses);
    }

    let mut created = Vec::new(env);
    for (offset, params) in batch.iter().enumerate() {
        let index = count + offset as u32;
        let class = ContributorClass {
            class_name: params.class_name,
            class_cap: params.class_cap,
            individual_cap: params.individual_cap,
            vesting_cliff: params.vesting_cliff,
            vesting_duration: params.vesting_duration,
            class_funding_collected: 0,
        };
        storage::set_class(env, index, &class);

        let class_id = ClassId::from_index(index);
        for member in params.allowlist.iter() {
            allowlist::assign(env, config, &member, class_id)?;
        }
        created.push_back(class_id);
    }
    storage::set_class_count(env, count + batch.len());
    Ok(created)
}

pub fn change_class(
    env: &Env,
    config: &SaleConfig,
    class_id: ClassId,
    update: &ClassUpdate,
) -> Result<(), SeedError> {
    let (index, mut class) = load(env, class_id)?;
    check_caps(config.hard_cap, update.class_cap, update.individual_cap)?;
    if class_id == ClassId::Default && update.class_cap != config.hard_cap {
        return Err(SeedError::InvalidCaps);
    }

    class.class_name = update.class_name.clone();
    class.class_cap = update.class_cap;
    class.individual_cap = update.individual_cap;
    class.vesting_cliff = update.vesting_cliff;
    class.vesting_duration = update.vesting_duration;
    storage::set_class(env, index, &class);
    Ok(())
}

pub fn table(env: &Env) -> ClassTable {
    let mut table = ClassTable {
        class_names: Vec::new(env),
        class_caps: Vec::new(env),
        individual_caps: Vec::new(env),
        vesting_cliffs: Vec::new(env),
        vesting_durations: Vec::new(env),
        class_funding_collected: Vec::new(env),
    };
    for index in 0..storage::get_class_count(env) {
        if let Some(class) = storage::get_class(env, index) {
            table.class_names.push_back(class.class_name);
            table.class_caps.push_back(class.class_cap);
            table.individual_caps.push_back(class.individual_cap);
            table.vesting_cliffs.push_back(class.vesting_cliff);
            table.vesting_durations.push_back(class.vesting_duration);
            table
                .class_funding_collected
                .push_back(class.class_funding_collected);
        }
    }
    table
}
