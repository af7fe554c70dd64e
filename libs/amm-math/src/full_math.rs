use amm_types::AmmError;
use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator
///
/// Every denominator in the pool is a reserve or the claim supply, so a zero
/// denominator is reported as `InvalidReserves`.
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, AmmError> {
    if denominator == 0 {
        return Err(AmmError::InvalidReserves);
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let result = product.div(&U256::from_u128(env, denominator));

    u128_from_u256(&result)
}

/// Full-width product of two amounts
pub fn mul_wide(env: &Env, a: u128, b: u128) -> U256 {
    U256::from_u128(env, a).mul(&U256::from_u128(env, b))
}

/// Convert U256 to u128
pub fn u128_from_u256(value: &U256) -> Result<u128, AmmError> {
    value.to_u128().ok_or(AmmError::ArithmeticOverflow)
}
