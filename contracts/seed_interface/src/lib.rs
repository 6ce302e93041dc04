//! Types, errors and parameter validation shared by the seed sale and the
//! seed factory contracts.
#![no_std]

mod client;
pub mod constants;
mod errors;
mod types;
mod validation;


pub use client::{SeedClient, SeedInterface};
pub use errors::SeedError;
pub use types::{CheckedParams, DefaultClassParams, SeedParams, TipParams};
pub use validation::{is_zero_address, validate_seed_params};
