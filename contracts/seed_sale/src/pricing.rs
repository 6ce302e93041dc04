use crate::types::SaleConfig;
use seed_interface::SeedError;

/// Sale-token value of `funding` funding-token units at `price`, rounded down.
pub fn convert(
    funding: i128,
    price: u128,
    sale_decimals: u32,
    funding_decimals: u32,
) -> Result<i128, SeedError> {
    let funding = u128::try_from(funding).map_err(|_| SeedError::MathOverflow)?;
    let sale = fp_math::funding_to_sale(funding, price, sale_decimals, funding_decimals)
        .ok_or(SeedError::MathOverflow)?;
    i128::try_from(sale).map_err(|_| SeedError::MathOverflow)
}

pub fn funding_to_sale(config: &SaleConfig, funding: i128) -> Result<i128, SeedError> {
    convert(
        funding,
        config.price,
        config.sale_decimals,
        config.funding_decimals,
    )
}

/// Funding-token cost of `sale` sale-token units, rounded down.
pub fn sale_to_funding(config: &SaleConfig, sale: i128) -> Result<i128, SeedError> {
    let sale = u128::try_from(sale).map_err(|_| SeedError::MathOverflow)?;
    let funding = fp_math::sale_to_funding(
        sale,
        config.price,
        config.sale_decimals,
        config.funding_decimals,
    )
    .ok_or(SeedError::MathOverflow)?;
    i128::try_from(funding).map_err(|_| SeedError::MathOverflow)
}

/// Tip share of `total_buyable_sale`, rounded down.
pub fn tip_amount(total_buyable_sale: i128, tip_percentage: u128) -> Result<i128, SeedError> {
    let total = u128::try_from(total_buyable_sale).map_err(|_| SeedError::MathOverflow)?;
    let tip = fp_math::apply_percentage(total, tip_percentage).ok_or(SeedError::MathOverflow)?;
    i128::try_from(tip).map_err(|_| SeedError::MathOverflow)
}
