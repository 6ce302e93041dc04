use seed_interface::SeedError;

/// Linear vesting with a cliff, shared by funders and the tip.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VestingSchedule {
    pub start_time: u64,
    pub cliff: u64,
    pub duration: u64,
}

impl VestingSchedule {
    /// Amount of `allocated` released by `now`, regardless of earlier claims.
    pub fn vested_amount(&self, now: u64, allocated: i128) -> Result<i128, SeedError> {
        if now < self.start_time {
            return Ok(0);
        }
        let elapsed = now - self.start_time;
        if elapsed < self.cliff {
            return Ok(0);
        }
        if self.duration == 0 || elapsed >= self.duration {
            return Ok(allocated);
        }

        let allocated = u128::try_from(allocated).map_err(|_| SeedError::MathOverflow)?;
        let vested = fp_math::mul_div_floor(allocated, elapsed as u128, self.duration as u128)
            .ok_or(SeedError::MathOverflow)?;
        i128::try_from(vested).map_err(|_| SeedError::MathOverflow)
    }

    /// What can be claimed at `now` after `claimed` was already released.
    pub fn claimable_amount(
        &self,
        now: u64,
        allocated: i128,
        claimed: i128,
    ) -> Result<i128, SeedError> {
        let vested = self.vested_amount(now, allocated)?;
        Ok(vested.saturating_sub(claimed).max(0))
    }
}
