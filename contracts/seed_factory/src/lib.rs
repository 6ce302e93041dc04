#![no_std]

mod contract;
mod events;
mod storage;


pub use contract::{SeedFactory, SeedFactoryClient};
pub use events::SeedCreatedEvent;
pub use storage::DataKey;
