pub use fp_math::PRECISION;
use soroban_sdk::{symbol_short, Symbol};

/// First topic of every event published by a sale or the factory.
pub const SEED_TOPIC: Symbol = symbol_short!("SEED");

/// Tip ceiling: 45% of the buyable sale supply.
pub const MAX_TIP: u128 = 45 * PRECISION / 100;

/// Default class plus 255 additional tiers.
pub const MAX_CLASSES: u32 = 256;

/// Upper bound on classes created by one batch call.
pub const MAX_BATCH: u32 = 100;

/// Strkey of the all-zero ed25519 account.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Strkey of the all-zero contract id.
pub const ZERO_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

// Storage TTL, in ledgers (~5s each)
pub const DAY_IN_LEDGERS: u32 = 17_280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - 7 * DAY_IN_LEDGERS;
