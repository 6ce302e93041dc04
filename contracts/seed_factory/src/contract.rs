use crate::{events, storage};
use seed_interface::{is_zero_address, validate_seed_params, SeedClient, SeedError, SeedParams};
use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, BytesN, Env, Vec};

contractmeta!(
    key = "Description",
    val = "Deploys and registers seed sales from a single master copy"
);

#[contract]
pub struct SeedFactory;

fn require_owner(env: &Env) -> Result<Address, SeedError> {
    let owner = storage::get_owner(env)?;
    owner.require_auth();
    Ok(owner)
}

/// Deployment salt derived from the registry position, unique per factory.
fn salt_for(env: &Env, index: u32) -> BytesN<32> {
    let mut salt = [0u8; 32];
    salt[28..].copy_from_slice(&index.to_be_bytes());
    BytesN::from_array(env, &salt)
}

#[contractimpl]
impl SeedFactory {
    pub fn initialize(env: Env, owner: Address) -> Result<(), SeedError> {
        if storage::has_owner(&env) {
            return Err(SeedError::AlreadyInitialized);
        }
        if is_zero_address(&env, &owner) {
            return Err(SeedError::ZeroAddress);
        }
        storage::set_owner(&env, &owner);
        Ok(())
    }

    /// Sets the wasm hash new sales are deployed from.
    pub fn set_master_copy(env: Env, wasm_hash: BytesN<32>) -> Result<(), SeedError> {
        require_owner(&env)?;
        if wasm_hash == BytesN::from_array(&env, &[0u8; 32]) {
            return Err(SeedError::InvalidMasterCopy);
        }
        storage::set_master_copy(&env, &wasm_hash);
        events::master_copy_set(&env, &wasm_hash);
        Ok(())
    }

    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), SeedError> {
        let owner = require_owner(&env)?;
        if is_zero_address(&env, &new_owner) {
            return Err(SeedError::ZeroAddress);
        }
        storage::set_owner(&env, &new_owner);
        events::ownership_transferred(&env, &owner, &new_owner);
        Ok(())
    }

    /// Deploys a fresh sale from the master copy and initializes it with
    /// `params`. Parameters are checked before anything is deployed, and the
    /// sale checks them again on initialization.
    pub fn deploy_seed(env: Env, params: SeedParams) -> Result<Address, SeedError> {
        require_owner(&env)?;
        validate_seed_params(&env, &params)?;
        let wasm_hash = storage::get_master_copy(&env).ok_or(SeedError::MasterCopyNotSet)?;

        let index = storage::get_seed_count(&env);
        let sale = env
            .deployer()
            .with_current_contract(salt_for(&env, index))
            .deploy(wasm_hash);

        match SeedClient::new(&env, &sale).try_initialize(&params) {
            Ok(_) => {}
            Err(Ok(err)) => return Err(err),
            Err(Err(_)) => {
                log!(&env, "seed initialization trapped", sale);
                return Err(SeedError::NotInitialized);
            }
        }

        storage::register_seed(&env, &sale);
        events::seed_created(&env, &sale);
        Ok(sale)
    }

    pub fn get_owner(env: Env) -> Result<Address, SeedError> {
        storage::get_owner(&env)
    }

    pub fn get_master_copy(env: Env) -> Result<BytesN<32>, SeedError> {
        storage::get_master_copy(&env).ok_or(SeedError::MasterCopyNotSet)
    }

    pub fn get_seed_count(env: Env) -> u32 {
        storage::get_seed_count(&env)
    }

    pub fn get_seed(env: Env, index: u32) -> Option<Address> {
        storage::get_seed(&env, index)
    }

    /// Every sale deployed by this factory, oldest first.
    pub fn get_seeds(env: Env) -> Vec<Address> {
        let mut seeds = Vec::new(&env);
        for index in 0..storage::get_seed_count(&env) {
            if let Some(sale) = storage::get_seed(&env, index) {
                seeds.push_back(sale);
            }
        }
        seeds
    }

    pub fn is_seed(env: Env, address: Address) -> bool {
        storage::is_seed(&env, &address)
    }
}
