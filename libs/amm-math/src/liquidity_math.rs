use crate::full_math::mul_div;
use crate::sqrt_math::sqrt_product;
use amm_types::{AddPolicy, AmmError, PoolState, PRICE_SCALE};
use soroban_sdk::Env;

/// Claims minted for a deposit of (amount_a, amount_b)
///
/// First deposit: floor(sqrt(amount_a * amount_b)). The first provider sets
/// the initial exchange rate.
///
/// Later deposits follow the pool's `AddPolicy`. Any surplus beyond what the
/// minted claims represent stays in the pool.
pub fn get_claims_for_deposit(
    env: &Env,
    policy: AddPolicy,
    state: &PoolState,
    amount_a: u128,
    amount_b: u128,
) -> Result<u128, AmmError> {
    if amount_a == 0 || amount_b == 0 {
        return Err(AmmError::ZeroAmount);
    }

    let claims = if state.is_empty() {
        sqrt_product(env, amount_a, amount_b)?
    } else {
        match policy {
            AddPolicy::StrictRatio => strict_ratio_claims(env, state, amount_a, amount_b)?,
            AddPolicy::ProportionalMin => {
                proportional_min_claims(env, state, amount_a, amount_b)?
            }
        }
    };

    if claims == 0 {
        return Err(AmmError::InsufficientClaimsMinted);
    }

    Ok(claims)
}

/// Require amount_b >= amount_a * reserve_b / reserve_a, mint from the A side
fn strict_ratio_claims(
    env: &Env,
    state: &PoolState,
    amount_a: u128,
    amount_b: u128,
) -> Result<u128, AmmError> {
    let required_b = mul_div(env, amount_a, state.reserve_b, state.reserve_a)?;
    if amount_b < required_b {
        return Err(AmmError::RatioViolation);
    }

    mul_div(env, amount_a, state.total_claims, state.reserve_a)
}

/// min(amount_a * total / reserve_a, amount_b * total / reserve_b)
fn proportional_min_claims(
    env: &Env,
    state: &PoolState,
    amount_a: u128,
    amount_b: u128,
) -> Result<u128, AmmError> {
    let claims_a = mul_div(env, amount_a, state.total_claims, state.reserve_a)?;
    let claims_b = mul_div(env, amount_b, state.total_claims, state.reserve_b)?;

    Ok(claims_a.min(claims_b))
}

/// Amounts paid out for burning `claims` (rounded down, dust stays in the pool)
pub fn get_amounts_for_claims(
    env: &Env,
    state: &PoolState,
    claims: u128,
) -> Result<(u128, u128), AmmError> {
    if claims == 0 {
        return Err(AmmError::ZeroAmount);
    }
    if state.is_empty() {
        return Err(AmmError::EmptyPool);
    }
    if claims > state.total_claims {
        return Err(AmmError::InsufficientClaimBalance);
    }

    let amount_a = mul_div(env, claims, state.reserve_a, state.total_claims)?;
    let amount_b = mul_div(env, claims, state.reserve_b, state.total_claims)?;

    Ok((amount_a, amount_b))
}

/// Price of A in units of B, scaled by PRICE_SCALE (1e18)
pub fn get_price(env: &Env, reserve_a: u128, reserve_b: u128) -> Result<u128, AmmError> {
    if reserve_a == 0 {
        return Err(AmmError::EmptyPool);
    }

    mul_div(env, reserve_b, PRICE_SCALE, reserve_a)
}
