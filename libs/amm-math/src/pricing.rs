use crate::full_math::{mul_div, mul_wide};
use amm_types::{AmmError, SwapQuote, FEE_DENOMINATOR, FEE_NUMERATOR};
use soroban_sdk::Env;

/// Output of an exact-input swap against the constant-product curve
///
/// amount_in_with_fee = amount_in * 997
/// amount_out = amount_in_with_fee * reserve_out / (reserve_in * 1000 + amount_in_with_fee)
///
/// The division is floored once over the full-width product, so the result is
/// bit-for-bit the integer formula above and always below `reserve_out`.
pub fn get_amount_out(
    env: &Env,
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<u128, AmmError> {
    if amount_in == 0 {
        return Err(AmmError::ZeroInput);
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(AmmError::InvalidReserves);
    }

    let amount_in_with_fee = amount_in
        .checked_mul(FEE_NUMERATOR)
        .ok_or(AmmError::ArithmeticOverflow)?;
    let denominator = reserve_in
        .checked_mul(FEE_DENOMINATOR)
        .and_then(|scaled| scaled.checked_add(amount_in_with_fee))
        .ok_or(AmmError::ArithmeticOverflow)?;

    mul_div(env, amount_in_with_fee, reserve_out, denominator)
}

/// Minimal exact input that yields at least `amount_out`
///
/// amount_in = reserve_in * amount_out * 1000 / ((reserve_out - amount_out) * 997) + 1
pub fn get_amount_in(
    env: &Env,
    amount_out: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<u128, AmmError> {
    if amount_out == 0 {
        return Err(AmmError::ZeroInput);
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(AmmError::InvalidReserves);
    }
    if amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }

    let scaled_out = amount_out
        .checked_mul(FEE_DENOMINATOR)
        .ok_or(AmmError::ArithmeticOverflow)?;
    let denominator = (reserve_out - amount_out)
        .checked_mul(FEE_NUMERATOR)
        .ok_or(AmmError::ArithmeticOverflow)?;

    mul_div(env, reserve_in, scaled_out, denominator)?
        .checked_add(1)
        .ok_or(AmmError::ArithmeticOverflow)
}

/// Price a swap and report the reserves it would leave behind
pub fn quote_exact_in(
    env: &Env,
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<SwapQuote, AmmError> {
    let amount_out = get_amount_out(env, amount_in, reserve_in, reserve_out)?;
    let reserve_in_after = reserve_in
        .checked_add(amount_in)
        .ok_or(AmmError::ArithmeticOverflow)?;

    Ok(SwapQuote {
        amount_in,
        amount_out,
        reserve_in_after,
        reserve_out_after: reserve_out - amount_out,
    })
}

/// Price an exact-output swap and report the reserves it would leave behind
pub fn quote_exact_out(
    env: &Env,
    amount_out: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<SwapQuote, AmmError> {
    let amount_in = get_amount_in(env, amount_out, reserve_in, reserve_out)?;
    // Paying the minimal input may yield slightly more than requested
    quote_exact_in(env, amount_in, reserve_in, reserve_out)
}

/// True if reserve_a * reserve_b did not shrink
pub fn product_non_decreasing(
    env: &Env,
    reserve_a_before: u128,
    reserve_b_before: u128,
    reserve_a_after: u128,
    reserve_b_after: u128,
) -> bool {
    mul_wide(env, reserve_a_after, reserve_b_after)
        >= mul_wide(env, reserve_a_before, reserve_b_before)
}
