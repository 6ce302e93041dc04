use crate::types::ClassId;
use seed_interface::constants::SEED_TOPIC as SEED;
use soroban_sdk::{contracttype, symbol_short, Address, Bytes, Env, Vec};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PurchaseEvent {
    pub buyer: Address,
    pub sale_amount_purchased: i128,
    pub sale_amount_remainder: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ClaimEvent {
    pub claimant: Address,
    pub amount_claimed: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TipClaimEvent {
    pub total_tip_claimed: i128,
}

pub fn initialized(env: &Env, admin: &Address, sale_amount_required: i128) {
    env.events().publish(
        (SEED, symbol_short!("init")),
        (admin.clone(), sale_amount_required),
    );
}

pub fn classes_added(env: &Env, class_ids: &Vec<ClassId>) {
    env.events()
        .publish((SEED, symbol_short!("class_add")), class_ids.clone());
}

pub fn class_changed(env: &Env, class_id: ClassId) {
    env.events()
        .publish((SEED, symbol_short!("class_upd")), class_id);
}

pub fn allowlisted(env: &Env, addresses: &Vec<Address>) {
    env.events()
        .publish((SEED, symbol_short!("allowlist")), addresses.clone());
}

pub fn unlisted(env: &Env, addresses: &Vec<Address>) {
    env.events()
        .publish((SEED, symbol_short!("unlist")), addresses.clone());
}

pub fn purchase(env: &Env, buyer: &Address, purchased: i128, remainder: i128) {
    env.events().publish(
        (SEED, symbol_short!("purchase")),
        PurchaseEvent {
            buyer: buyer.clone(),
            sale_amount_purchased: purchased,
            sale_amount_remainder: remainder,
        },
    );
}

pub fn closed(env: &Env, vesting_start_time: u64) {
    env.events()
        .publish((SEED, symbol_short!("closed")), vesting_start_time);
}

pub fn paused(env: &Env) {
    env.events().publish((SEED, symbol_short!("paused")), ());
}

pub fn unpaused(env: &Env) {
    env.events().publish((SEED, symbol_short!("unpaused")), ());
}

pub fn withdrawn(env: &Env, treasury: &Address, amount: i128) {
    env.events()
        .publish((SEED, symbol_short!("withdraw")), (treasury.clone(), amount));
}

pub fn refunded(env: &Env, funder: &Address, amount: i128) {
    env.events()
        .publish((SEED, symbol_short!("refund")), (funder.clone(), amount));
}

pub fn retrieved(env: &Env, receiver: &Address, amount: i128) {
    env.events()
        .publish((SEED, symbol_short!("retrieve")), (receiver.clone(), amount));
}

pub fn claimed(env: &Env, claimant: &Address, amount: i128) {
    env.events().publish(
        (SEED, symbol_short!("claim")),
        ClaimEvent {
            claimant: claimant.clone(),
            amount_claimed: amount,
        },
    );
}

pub fn tip_claimed(env: &Env, total_tip_claimed: i128) {
    env.events().publish(
        (SEED, symbol_short!("tip_claim")),
        TipClaimEvent { total_tip_claimed },
    );
}

pub fn metadata_updated(env: &Env, metadata: &Bytes) {
    env.events()
        .publish((SEED, symbol_short!("metadata")), metadata.clone());
}
