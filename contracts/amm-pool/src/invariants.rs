// ============================================================================
// INVARIANTS MODULE
// ============================================================================
//
// Predicates over the reserve ledger. The pool checks them after every
// mutating operation; the certora specs reuse them as rule bodies.
//
// 1. EMPTINESS
//    - reserve_a == 0 <=> reserve_b == 0 <=> total_claims == 0
//
// 2. CLAIM ACCOUNTING
//    - total_claims equals the claim ledger's total supply
//
// 3. CONSTANT PRODUCT
//    - a swap never shrinks reserve_a * reserve_b
//
// 4. WITHDRAWAL BOUNDS
//    - a withdrawal never pays more than the reserves hold
//
// ============================================================================

use amm_types::{AmmError, PoolState};
use soroban_sdk::Env;

/// Invariant: the pool is either fully empty or fully seeded
///
/// Property:
///   (reserve_a == 0) == (reserve_b == 0) == (total_claims == 0)
pub fn emptiness_consistent(state: &PoolState) -> bool {
    let a_empty = state.reserve_a == 0;
    let b_empty = state.reserve_b == 0;
    let claims_empty = state.total_claims == 0;
    a_empty == b_empty && b_empty == claims_empty
}

/// Invariant: cached total claims match the claim ledger
pub fn claims_match_ledger(state: &PoolState, ledger_supply: u128) -> bool {
    state.total_claims == ledger_supply
}

/// Invariant: swap keeps the constant product
///
/// Property:
///   after.reserve_a * after.reserve_b >= before.reserve_a * before.reserve_b
pub fn product_preserved(env: &Env, before: &PoolState, after: &PoolState) -> bool {
    amm_math::product_non_decreasing(
        env,
        before.reserve_a,
        before.reserve_b,
        after.reserve_a,
        after.reserve_b,
    )
}

/// Invariant: withdrawn amounts are covered by the reserves
pub fn withdrawal_covered(state: &PoolState, amount_a: u128, amount_b: u128) -> bool {
    amount_a <= state.reserve_a && amount_b <= state.reserve_b
}

/// Check the state-only invariants before committing
pub fn check_state(state: &PoolState, ledger_supply: u128) -> Result<(), AmmError> {
    if !emptiness_consistent(state) || !claims_match_ledger(state, ledger_supply) {
        return Err(AmmError::InvariantViolation);
    }
    Ok(())
}
