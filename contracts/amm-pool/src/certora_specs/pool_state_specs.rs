// ============================================================================
// POOL STATE INVARIANT SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. The pool is either fully empty or fully seeded
// 2. Cached total claims equal the claim ledger supply
// 3. Price is only defined for a seeded pool
//
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

/// RULE: check_state accepts only emptiness-consistent states
#[cfg(feature = "certora")]
#[rule]
pub fn check_state_implies_emptiness(reserve_a: u128, reserve_b: u128, total_claims: u128, supply: u128) {
    use crate::invariants::check_state;

    let state = amm_types::PoolState { reserve_a, reserve_b, total_claims };
    if check_state(&state, supply).is_ok() {
        cvlr_assert!((reserve_a == 0) == (total_claims == 0));
        cvlr_assert!((reserve_b == 0) == (total_claims == 0));
        cvlr_assert!(total_claims == supply);
    }
}

/// RULE: price of an empty pool is an error
#[cfg(feature = "certora")]
#[rule]
pub fn price_requires_reserves(env: soroban_sdk::Env, reserve_b: u128) {
    cvlr_assert!(amm_math::get_price(&env, 0, reserve_b).is_err());
}

/// RULE: a seeded state is reachable
#[cfg(feature = "certora")]
#[rule]
pub fn seeded_state_reachable(reserve_a: u128, reserve_b: u128, total_claims: u128) {
    cvlr_assume!(reserve_a > 0 && reserve_b > 0);
    let state = amm_types::PoolState { reserve_a, reserve_b, total_claims };
    cvlr_satisfy!(crate::invariants::emptiness_consistent(&state));
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
