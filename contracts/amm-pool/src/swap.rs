use crate::custody::{pay, pull};
use crate::events;
use crate::invariants::{check_state, product_preserved};
use crate::storage::{get_claim_supply, get_config, get_state, set_state};
use amm_math::quote_exact_in;
use amm_types::{AmmError, PoolState, SwapDirection, SwapQuote};
use soroban_sdk::{log, Address, Env};

/// Price an exact-input swap against the current reserves
pub fn quote(env: &Env, direction: SwapDirection, amount_in: u128) -> Result<SwapQuote, AmmError> {
    let state = get_state(env)?;
    quote_against(env, &state, direction, amount_in)
}

fn quote_against(
    env: &Env,
    state: &PoolState,
    direction: SwapDirection,
    amount_in: u128,
) -> Result<SwapQuote, AmmError> {
    if amount_in == 0 {
        return Err(AmmError::ZeroInput);
    }

    let (reserve_in, reserve_out) = state.reserves_for(direction);
    if reserve_in == 0 || reserve_out == 0 {
        return Err(AmmError::EmptyPool);
    }

    quote_exact_in(env, amount_in, reserve_in, reserve_out)
}

/// Execute an exact-input swap
///
/// The fee stays in the input reserve, so reserve_a * reserve_b grows.
/// Nothing is transferred unless the quote succeeds.
pub fn execute_swap(
    env: &Env,
    trader: &Address,
    direction: SwapDirection,
    amount_in: u128,
) -> Result<u128, AmmError> {
    let config = get_config(env)?;
    let state = get_state(env)?;

    let quote = quote_against(env, &state, direction, amount_in)?;
    if quote.amount_out == 0 {
        return Err(AmmError::InsufficientOutputAmount);
    }

    let mut next = state.clone();
    next.set_reserves_for(direction, quote.reserve_in_after, quote.reserve_out_after);
    if !product_preserved(env, &state, &next) {
        return Err(AmmError::InvariantViolation);
    }
    check_state(&next, get_claim_supply(env))?;

    let (asset_in, asset_out) = config.assets_for(direction);
    pull(env, &asset_in, trader, amount_in)?;
    pay(env, &asset_out, trader, quote.amount_out)?;

    set_state(env, &next);

    log!(env, "swap", trader.clone(), amount_in, quote.amount_out);
    events::swap(env, trader, asset_in, asset_out, amount_in, quote.amount_out);

    Ok(quote.amount_out)
}
