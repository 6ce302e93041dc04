//! Fixed-point amount helpers shared by the seed sale contracts.
//!
//! Prices and percentages are scaled by [`PRECISION`]. Every conversion
//! rounds toward zero and works on a 256-bit intermediate, so the only
//! failure mode is a result that does not fit back into `u128`.
#![no_std]

use ruint::aliases::U256;

/// Scale of prices and percentages: `PRECISION` is 1.0, `PRECISION / 100` is 1%.
pub const PRECISION: u128 = 1_000_000_000_000_000_000;

/// Largest power of ten that fits into `u128`.
pub const MAX_DECIMALS: u32 = 38;

pub fn pow10(exp: u32) -> Option<u128> {
    10u128.checked_pow(exp)
}

/// `floor(a * b / denominator)`.
pub fn mul_div_floor(a: u128, b: u128, denominator: u128) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let product = U256::from(a).checked_mul(U256::from(b))?;
    let quotient = product.checked_div(U256::from(denominator))?;
    quotient.try_into().ok()
}

/// `floor(amount * percentage / PRECISION)`.
pub fn apply_percentage(amount: u128, percentage: u128) -> Option<u128> {
    mul_div_floor(amount, percentage, PRECISION)
}

/// Sale-token base units bought by `funding` funding-token base units.
///
/// `price` is the number of whole funding tokens paid for one whole sale
/// token, scaled by `PRECISION`. The decimal difference between the two
/// tokens is folded in here so callers never handle it themselves:
///
/// `sale = funding * PRECISION * 10^sale_decimals / (price * 10^funding_decimals)`
pub fn funding_to_sale(
    funding: u128,
    price: u128,
    sale_decimals: u32,
    funding_decimals: u32,
) -> Option<u128> {
    if price == 0 {
        return None;
    }
    let numerator = U256::from(funding)
        .checked_mul(U256::from(PRECISION))?
        .checked_mul(U256::from(pow10(sale_decimals)?))?;
    let denominator = U256::from(price).checked_mul(U256::from(pow10(funding_decimals)?))?;
    numerator.checked_div(denominator)?.try_into().ok()
}

/// Funding-token base units that `sale` sale-token base units cost at `price`.
pub fn sale_to_funding(
    sale: u128,
    price: u128,
    sale_decimals: u32,
    funding_decimals: u32,
) -> Option<u128> {
    let numerator = U256::from(sale)
        .checked_mul(U256::from(price))?
        .checked_mul(U256::from(pow10(funding_decimals)?))?;
    let denominator = U256::from(PRECISION).checked_mul(U256::from(pow10(sale_decimals)?))?;
    numerator.checked_div(denominator)?.try_into().ok()
}
