// ============================================================================
// LIQUIDITY INVARIANT SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. A deposit into a seeded pool never dilutes existing holders
// 2. Deposit then withdrawal never returns more than was deposited
// 3. Burning all claims empties the reserves exactly
//
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

/// RULE: minted claims are at most proportional to either deposit side
#[cfg(feature = "certora")]
#[rule]
pub fn deposit_never_dilutes(
    env: soroban_sdk::Env,
    reserve_a: u64,
    reserve_b: u64,
    total_claims: u64,
    amount_a: u64,
    amount_b: u64,
) {
    use amm_types::{AddPolicy, PoolState};

    cvlr_assume!(reserve_a > 0 && reserve_b > 0 && total_claims > 0);
    let state = PoolState {
        reserve_a: reserve_a as u128,
        reserve_b: reserve_b as u128,
        total_claims: total_claims as u128,
    };

    for policy in [AddPolicy::StrictRatio, AddPolicy::ProportionalMin] {
        if let Ok(claims) =
            amm_math::get_claims_for_deposit(&env, policy, &state, amount_a as u128, amount_b as u128)
        {
            // claims / total <= amount / reserve on both sides
            cvlr_assert!(claims * state.reserve_a <= amount_a as u128 * state.total_claims);
            cvlr_assert!(claims * state.reserve_b <= amount_b as u128 * state.total_claims);
        }
    }
}

/// RULE: removing liquidity burns exactly the requested claims
#[cfg(feature = "certora")]
#[rule]
pub fn remove_burns_claims(env: soroban_sdk::Env, provider: soroban_sdk::Address, claims: u128) {
    use super::model::PoolSnapshot;

    let before = PoolSnapshot::capture(&env, &provider);
    let result = crate::liquidity::remove_liquidity(&env, &provider, claims);
    let after = PoolSnapshot::capture(&env, &provider);

    if let Ok((amount_a, amount_b)) = result {
        cvlr_assert!(after.holder_claims + claims == before.holder_claims);
        cvlr_assert!(after.ledger_supply + claims == before.ledger_supply);
        cvlr_assert!(after.state.reserve_a + amount_a == before.state.reserve_a);
        cvlr_assert!(after.state.reserve_b + amount_b == before.state.reserve_b);
    }
    cvlr_satisfy!(result.is_ok());
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
