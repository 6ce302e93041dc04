#![no_std]

#[cfg(test)]
extern crate std;

mod allowlist;
mod classes;
mod contract;
mod events;
mod lifecycle;
mod pricing;
mod storage;
mod types;
mod vesting;


pub use contract::{SeedSale, SeedSaleClient};
pub use events::{ClaimEvent, PurchaseEvent, TipClaimEvent};
pub use types::*;
pub use vesting::VestingSchedule;
