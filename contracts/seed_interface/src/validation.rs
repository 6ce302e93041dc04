use soroban_sdk::{Address, Env, String};

use crate::constants::{MAX_TIP, ZERO_ACCOUNT, ZERO_CONTRACT};
use crate::errors::SeedError;
use crate::types::{CheckedParams, SeedParams};

pub fn is_zero_address(env: &Env, address: &Address) -> bool {
    *address == Address::from_string(&String::from_str(env, ZERO_ACCOUNT))
        || *address == Address::from_string(&String::from_str(env, ZERO_CONTRACT))
}

/// Checks a full parameter set before any sale is created.
///
/// The order of the checks is part of the contract: array arity, identical
/// addresses, zero addresses, caps, time window, tip ceiling, price.
pub fn validate_seed_params(env: &Env, params: &SeedParams) -> Result<CheckedParams, SeedError> {
    if params.tokens.len() != 2 || params.soft_and_hard_cap.len() != 2 {
        return Err(SeedError::InvalidArrayLength);
    }
    let sale_token = params.tokens.get(0).ok_or(SeedError::InvalidArrayLength)?;
    let funding_token = params.tokens.get(1).ok_or(SeedError::InvalidArrayLength)?;
    let soft_cap = params
        .soft_and_hard_cap
        .get(0)
        .ok_or(SeedError::InvalidArrayLength)?;
    let hard_cap = params
        .soft_and_hard_cap
        .get(1)
        .ok_or(SeedError::InvalidArrayLength)?;

    if sale_token == funding_token {
        return Err(SeedError::IdenticalAddresses);
    }
    for role in [&params.admin, &params.beneficiary, &params.treasury] {
        if *role == sale_token || *role == funding_token {
            return Err(SeedError::IdenticalAddresses);
        }
    }

    for required in [
        &params.admin,
        &params.beneficiary,
        &params.treasury,
        &sale_token,
        &funding_token,
    ] {
        if is_zero_address(env, required) {
            return Err(SeedError::ZeroAddress);
        }
    }

    let individual_cap = params.default_class.individual_cap;
    if soft_cap < 0 || hard_cap <= 0 || soft_cap > hard_cap {
        return Err(SeedError::InvalidCaps);
    }
    if individual_cap <= 0 || individual_cap > hard_cap {
        return Err(SeedError::InvalidCaps);
    }

    let now = env.ledger().timestamp();
    if params.start_time <= now || params.start_time >= params.end_time {
        return Err(SeedError::InvalidTime);
    }

    if params.tip.tip_percentage > MAX_TIP {
        return Err(SeedError::TipTooHigh);
    }

    if params.price == 0 {
        return Err(SeedError::InvalidPrice);
    }

    Ok(CheckedParams {
        sale_token,
        funding_token,
        soft_cap,
        hard_cap,
    })
}
