use crate::claims::{ClaimLedger, StorageClaimLedger};
use crate::custody::{pay, pull};
use crate::events;
use crate::invariants::{check_state, withdrawal_covered};
use crate::storage::{get_config, get_state, set_state};
use amm_math::{get_amounts_for_claims, get_claims_for_deposit};
use amm_types::{AmmError, PoolState};
use soroban_sdk::{log, Address, Env};

/// Deposit both assets and mint claims to the provider
///
/// Order: compute and stage the new state, pull both assets, then commit.
/// Either pull failing aborts before anything is written.
pub fn add_liquidity(
    env: &Env,
    provider: &Address,
    amount_a: u128,
    amount_b: u128,
) -> Result<u128, AmmError> {
    let config = get_config(env)?;
    let state = get_state(env)?;

    let claims = get_claims_for_deposit(env, config.add_policy, &state, amount_a, amount_b)?;

    let next = PoolState {
        reserve_a: checked_add(state.reserve_a, amount_a)?,
        reserve_b: checked_add(state.reserve_b, amount_b)?,
        total_claims: checked_add(state.total_claims, claims)?,
    };

    pull(env, &config.asset_a, provider, amount_a)?;
    pull(env, &config.asset_b, provider, amount_b)?;

    let ledger = StorageClaimLedger::new(env);
    ledger.mint(provider, claims)?;
    check_state(&next, ledger.total_supply())?;
    set_state(env, &next);

    log!(env, "liquidity added", provider.clone(), amount_a, amount_b, claims);
    events::liquidity_added(env, provider, amount_a, amount_b, claims);

    Ok(claims)
}

/// Burn claims and pay the provider its proportional share of both reserves
pub fn remove_liquidity(
    env: &Env,
    provider: &Address,
    claims: u128,
) -> Result<(u128, u128), AmmError> {
    if claims == 0 {
        return Err(AmmError::ZeroAmount);
    }

    let config = get_config(env)?;
    let state = get_state(env)?;
    let ledger = StorageClaimLedger::new(env);

    if claims > ledger.balance_of(provider) {
        return Err(AmmError::InsufficientClaimBalance);
    }

    let (amount_a, amount_b) = get_amounts_for_claims(env, &state, claims)?;
    if !withdrawal_covered(&state, amount_a, amount_b) {
        return Err(AmmError::InvariantViolation);
    }

    let next = PoolState {
        reserve_a: state.reserve_a - amount_a,
        reserve_b: state.reserve_b - amount_b,
        total_claims: state.total_claims - claims,
    };

    pay(env, &config.asset_a, provider, amount_a)?;
    pay(env, &config.asset_b, provider, amount_b)?;

    ledger.burn(provider, claims)?;
    check_state(&next, ledger.total_supply())?;
    set_state(env, &next);

    log!(env, "liquidity removed", provider.clone(), amount_a, amount_b, claims);
    events::liquidity_removed(env, provider, amount_a, amount_b, claims);

    Ok((amount_a, amount_b))
}

fn checked_add(a: u128, b: u128) -> Result<u128, AmmError> {
    a.checked_add(b).ok_or(AmmError::ArithmeticOverflow)
}
