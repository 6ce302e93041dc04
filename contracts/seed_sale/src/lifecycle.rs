use crate::types::{SaleConfig, SaleOutcome, SaleState, SaleStatus};
use seed_interface::SeedError;

pub fn minimum_reached(config: &SaleConfig, state: &SaleState) -> bool {
    state.funding_collected >= config.soft_cap
}

pub fn maximum_reached(config: &SaleConfig, state: &SaleState) -> bool {
    state.funding_collected >= config.hard_cap
}

/// Purchasing has stopped for good: closed, capped, or past `end_time`.
pub fn has_ended(config: &SaleConfig, state: &SaleState, now: u64) -> bool {
    state.closed || maximum_reached(config, state) || now >= config.end_time
}

pub fn status(config: &SaleConfig, state: &SaleState, now: u64) -> SaleStatus {
    if state.closed {
        SaleStatus::Closed
    } else if maximum_reached(config, state) || now >= config.end_time {
        SaleStatus::Ended
    } else if now < config.start_time {
        SaleStatus::Pending
    } else if state.paused {
        SaleStatus::Paused
    } else {
        SaleStatus::Live
    }
}

pub fn outcome(config: &SaleConfig, state: &SaleState, now: u64) -> SaleOutcome {
    if !has_ended(config, state, now) {
        SaleOutcome::Open
    } else if minimum_reached(config, state) {
        SaleOutcome::Complete
    } else {
        SaleOutcome::Failed
    }
}

pub fn require_purchasable(
    config: &SaleConfig,
    state: &SaleState,
    now: u64,
) -> Result<(), SeedError> {
    if state.closed {
        return Err(SeedError::SaleClosed);
    }
    if state.paused {
        return Err(SeedError::SalePaused);
    }
    if now < config.start_time {
        return Err(SeedError::SaleNotStarted);
    }
    if now >= config.end_time {
        return Err(SeedError::SaleEnded);
    }
    if maximum_reached(config, state) {
        return Err(SeedError::MaximumReached);
    }
    Ok(())
}

/// Class definitions are frozen once the sale starts or is closed.
pub fn require_classes_modifiable(
    config: &SaleConfig,
    state: &SaleState,
    now: u64,
) -> Result<(), SeedError> {
    if state.closed || now >= config.start_time {
        return Err(SeedError::NotModifiable);
    }
    Ok(())
}

/// Allowlist edits stay open until the sale is closed or has ended.
pub fn require_allowlist_modifiable(
    config: &SaleConfig,
    state: &SaleState,
    now: u64,
) -> Result<(), SeedError> {
    if state.closed {
        return Err(SeedError::SaleClosed);
    }
    if has_ended(config, state, now) {
        return Err(SeedError::SaleEnded);
    }
    Ok(())
}

pub fn require_ended(config: &SaleConfig, state: &SaleState, now: u64) -> Result<(), SeedError> {
    if !has_ended(config, state, now) {
        return Err(SeedError::SaleNotEnded);
    }
    Ok(())
}
