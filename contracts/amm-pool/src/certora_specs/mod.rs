// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Rules for the constant-product pool. Each rule file also carries plain
// unit tests that run the same properties on concrete values.
//
// STRUCTURE:
//
// - model.rs            : Before/after state snapshots
// - math_specs.rs       : Pricing and claim math
// - pool_state_specs.rs : Reserve ledger invariants
// - swap_specs.rs       : Swap operation
// - liquidity_specs.rs  : Deposit and withdrawal
//
// USAGE:
// - Unit tests: cargo test -p amm-pool
// - Certora build: cargo build --features certora -p amm-pool
// - Verification: certoraSorobanProver amm_pool.conf
//
// ============================================================================

pub mod model;

pub mod liquidity_specs;
pub mod math_specs;
pub mod pool_state_specs;
pub mod swap_specs;
