// ============================================================================
// SWAP INVARIANT SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. reserve_a * reserve_b never decreases across a swap
// 2. Reserves move in opposite directions
// 3. A swap against an empty pool fails
//
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

/// RULE: quoted post-swap reserves keep the constant product
#[cfg(feature = "certora")]
#[rule]
pub fn swap_preserves_product(
    env: soroban_sdk::Env,
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
) {
    cvlr_assume!(amount_in > 0 && reserve_in > 0 && reserve_out > 0);

    if let Ok(quote) = amm_math::quote_exact_in(&env, amount_in, reserve_in, reserve_out) {
        cvlr_assert!(amm_math::product_non_decreasing(
            &env,
            reserve_in,
            reserve_out,
            quote.reserve_in_after,
            quote.reserve_out_after,
        ));
        cvlr_assert!(quote.reserve_in_after > reserve_in);
        cvlr_assert!(quote.reserve_out_after <= reserve_out);
    }
}

/// RULE: executed swap leaves the claim ledger untouched
#[cfg(feature = "certora")]
#[rule]
pub fn swap_keeps_claims(env: soroban_sdk::Env, trader: soroban_sdk::Address, amount_in: u128) {
    use super::model::PoolSnapshot;
    use amm_types::SwapDirection;

    let before = PoolSnapshot::capture(&env, &trader);
    let result = crate::swap::execute_swap(&env, &trader, SwapDirection::AToB, amount_in);
    let after = PoolSnapshot::capture(&env, &trader);

    if result.is_ok() {
        cvlr_assert!(after.state.total_claims == before.state.total_claims);
        cvlr_assert!(after.holder_claims == before.holder_claims);
        cvlr_assert!(after.state.reserve_a > before.state.reserve_a);
        cvlr_assert!(after.state.reserve_b < before.state.reserve_b);
    }
    cvlr_satisfy!(result.is_ok());
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
