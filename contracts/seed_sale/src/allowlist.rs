use crate::classes;
use crate::storage;
use crate::types::{ClassId, Funder, SaleConfig};
use seed_interface::SeedError;
use soroban_sdk::{Address, Env, Vec};

/// A funder who already contributed stays in the class their contribution
/// was counted against.
fn check_reassignable(funder: &Funder, class_id: ClassId) -> Result<(), SeedError> {
    if funder.funding_amount > 0 && funder.class != class_id {
        return Err(SeedError::NotModifiable);
    }
    Ok(())
}

/// Places `member` in `class_id`. Only a permissioned sale records the
/// address as allowlisted; elsewhere anyone may buy and listing just picks
/// the class.
pub fn assign(
    env: &Env,
    config: &SaleConfig,
    member: &Address,
    class_id: ClassId,
) -> Result<(), SeedError> {
    let mut funder = storage::get_funder(env, member);
    check_reassignable(&funder, class_id)?;
    funder.class = class_id;
    if config.permissioned {
        funder.allowlisted = true;
    }
    storage::set_funder(env, member, &funder);
    Ok(())
}

pub fn set_allowlist(
    env: &Env,
    config: &SaleConfig,
    addresses: &Vec<Address>,
    class_ids: &Vec<ClassId>,
) -> Result<(), SeedError> {
    if addresses.len() != class_ids.len() {
        return Err(SeedError::ArrayLengthMismatch);
    }
    for class_id in class_ids.iter() {
        if !classes::exists(env, class_id) {
            return Err(SeedError::InvalidClassId);
        }
    }
    for (member, class_id) in addresses.iter().zip(class_ids.iter()) {
        check_reassignable(&storage::get_funder(env, &member), class_id)?;
    }
    for (member, class_id) in addresses.iter().zip(class_ids.iter()) {
        assign(env, config, &member, class_id)?;
    }
    Ok(())
}

pub fn un_allowlist(env: &Env, addresses: &Vec<Address>) {
    for member in addresses.iter() {
        let mut funder = storage::get_funder(env, &member);
        funder.allowlisted = false;
        storage::set_funder(env, &member, &funder);
    }
}
