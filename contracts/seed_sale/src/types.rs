use soroban_sdk::{contracttype, Address, String, Vec};

/// Contributor class reference.
///
/// The default class is a variant of its own so an unset index can never be
/// mistaken for it; `Tier` indices run from 1 to 255.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum ClassId {
    Default,
    Tier(u32),
}

impl ClassId {
    /// Storage index of the class, `None` for the invalid `Tier(0)`.
    pub fn index(&self) -> Option<u32> {
        match self {
            ClassId::Default => Some(0),
            ClassId::Tier(0) => None,
            ClassId::Tier(index) => Some(*index),
        }
    }

    pub fn from_index(index: u32) -> Self {
        if index == 0 {
            ClassId::Default
        } else {
            ClassId::Tier(index)
        }
    }
}

/// Parameters fixed at initialization.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub beneficiary: Address,
    pub admin: Address,
    pub treasury: Address,
    pub sale_token: Address,
    pub funding_token: Address,
    pub sale_decimals: u32,
    pub funding_decimals: u32,
    pub soft_cap: i128,
    pub hard_cap: i128,
    pub price: u128,
    pub start_time: u64,
    pub end_time: u64,
    pub permissioned: bool,
    /// Sale tokens the hard cap buys at `price`.
    pub total_buyable_sale: i128,
    /// `total_buyable_sale` plus the tip; the sale must hold this much before the first buy.
    pub sale_amount_required: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleState {
    pub paused: bool,
    pub closed: bool,
    pub funded: bool,
    pub funding_collected: i128,
    pub funding_withdrawn: i128,
    /// Sale tokens allocated to funders.
    pub sale_allocated: i128,
    /// Sale tokens released to funders through `claim`.
    pub sale_claimed: i128,
    /// Sale tokens returned through `retrieve_seed_tokens`.
    pub sale_retrieved: i128,
    pub funder_count: u32,
    pub vesting_start_time: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ContributorClass {
    pub class_name: String,
    pub class_cap: i128,
    pub individual_cap: i128,
    pub vesting_cliff: u64,
    pub vesting_duration: u64,
    pub class_funding_collected: i128,
}

/// A new class together with the addresses placed in it.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ClassParams {
    pub class_name: String,
    pub class_cap: i128,
    pub individual_cap: i128,
    pub vesting_cliff: u64,
    pub vesting_duration: u64,
    pub allowlist: Vec<Address>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ClassUpdate {
    pub class_name: String,
    pub class_cap: i128,
    pub individual_cap: i128,
    pub vesting_cliff: u64,
    pub vesting_duration: u64,
}

/// Every class, as parallel vectors indexed by class index.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ClassTable {
    pub class_names: Vec<String>,
    pub class_caps: Vec<i128>,
    pub individual_caps: Vec<i128>,
    pub vesting_cliffs: Vec<u64>,
    pub vesting_durations: Vec<u64>,
    pub class_funding_collected: Vec<i128>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Funder {
    pub class: ClassId,
    pub allowlisted: bool,
    pub funding_amount: i128,
    pub total_claimed: i128,
}

impl Funder {
    pub fn new() -> Self {
        Funder {
            class: ClassId::Default,
            allowlisted: false,
            funding_amount: 0,
            total_claimed: 0,
        }
    }
}

impl Default for Funder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Tip {
    pub tip_percentage: u128,
    pub tip_amount: i128,
    pub vesting_cliff: u64,
    pub vesting_duration: u64,
    pub total_claimed: i128,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SaleStatus {
    Pending,
    Live,
    Paused,
    Ended,
    Closed,
}

/// Which recovery path is open once purchasing has stopped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SaleOutcome {
    Open,
    Complete,
    Failed,
}

#[contracttype]
pub enum DataKey {
    Config,
    State,
    Tip,
    Metadata,
    ClassCount,
    Class(u32),
    Funder(Address),
}
