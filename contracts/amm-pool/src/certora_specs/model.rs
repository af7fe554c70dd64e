// ============================================================================
// STATE SNAPSHOTS
// ============================================================================

use amm_types::PoolState;
use soroban_sdk::{Address, Env};

/// Reserve ledger plus one holder's claims, for before/after comparisons
#[derive(Clone)]
pub struct PoolSnapshot {
    pub state: PoolState,
    pub ledger_supply: u128,
    pub holder_claims: u128,
}

impl PoolSnapshot {
    pub fn capture(env: &Env, holder: &Address) -> Self {
        use crate::claims::{ClaimLedger, StorageClaimLedger};

        let ledger = StorageClaimLedger::new(env);
        Self {
            state: crate::storage::get_state(env).unwrap_or_default(),
            ledger_supply: ledger.total_supply(),
            holder_claims: ledger.balance_of(holder),
        }
    }
}
