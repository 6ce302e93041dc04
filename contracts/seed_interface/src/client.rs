use soroban_sdk::{contractclient, Env};

use crate::errors::SeedError;
use crate::types::SeedParams;

/// The part of the seed sale surface other contracts call into.
#[contractclient(name = "SeedClient")]
pub trait SeedInterface {
    fn initialize(env: Env, params: SeedParams) -> Result<(), SeedError>;
}
