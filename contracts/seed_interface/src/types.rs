use soroban_sdk::{contracttype, Address, Bytes, Vec};

/// Vesting and cap settings of the default contributor class.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct DefaultClassParams {
    pub individual_cap: i128,
    pub vesting_cliff: u64,
    pub vesting_duration: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TipParams {
    /// Share of the buyable sale supply paid to the beneficiary, scaled by `PRECISION`.
    pub tip_percentage: u128,
    pub vesting_cliff: u64,
    pub vesting_duration: u64,
}

/// Everything needed to create and initialize one seed sale.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SeedParams {
    pub beneficiary: Address,
    pub admin: Address,
    pub treasury: Address,
    /// `[sale_token, funding_token]`
    pub tokens: Vec<Address>,
    /// `[soft_cap, hard_cap]` in funding-token base units
    pub soft_and_hard_cap: Vec<i128>,
    /// Whole funding tokens per whole sale token, scaled by `PRECISION`.
    pub price: u128,
    pub start_time: u64,
    pub end_time: u64,
    pub default_class: DefaultClassParams,
    pub permissioned: bool,
    /// Addresses placed in the default class at initialization.
    pub allowlist: Vec<Address>,
    pub tip: TipParams,
    pub metadata: Bytes,
}

/// The array arguments of [`SeedParams`] unpacked after validation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckedParams {
    pub sale_token: Address,
    pub funding_token: Address,
    pub soft_cap: i128,
    pub hard_cap: i128,
}
