use amm_types::{AmmError, PoolConfig, PoolState};
use soroban_sdk::{contracttype, Address, Env};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================
// - Config, State, claim supply and the reentrancy flag live in Instance
//   storage: they are touched by every operation and are small.
// - Claim balances live in Persistent storage, one entry per holder.
//   Zero balances are removed.
// - Reserves and total claims are written only through `set_state`.
// ============================================================================

/// Storage keys for the pool contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Pool configuration (Instance storage)
    Config,
    /// Reserve ledger (Instance storage)
    State,
    /// Operation-in-progress flag (Instance storage)
    Locked,
    /// Claim ledger total supply (Instance storage)
    ClaimSupply,
    /// Claim balance: holder -> u128 (Persistent storage)
    Claims(Address),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<PoolConfig, AmmError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(AmmError::NotInitialized)
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === State ===

pub fn get_state(env: &Env) -> Result<PoolState, AmmError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(AmmError::NotInitialized)
}

pub fn set_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(env);
}

// === Reentrancy flag ===

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}

pub fn set_locked(env: &Env, locked: bool) {
    if locked {
        env.storage().instance().set(&DataKey::Locked, &true);
    } else {
        env.storage().instance().remove(&DataKey::Locked);
    }
}

// === Claims ===

pub fn get_claim_supply(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::ClaimSupply)
        .unwrap_or(0)
}

pub fn set_claim_supply(env: &Env, supply: u128) {
    env.storage().instance().set(&DataKey::ClaimSupply, &supply);
}

pub fn get_claims(env: &Env, holder: &Address) -> u128 {
    let key = DataKey::Claims(holder.clone());
    let amount: Option<u128> = env.storage().persistent().get(&key);
    if amount.is_some() {
        extend_persistent_ttl(env, &key);
    }
    amount.unwrap_or(0)
}

pub fn set_claims(env: &Env, holder: &Address, amount: u128) {
    let key = DataKey::Claims(holder.clone());
    if amount == 0 {
        // Remove empty balance
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_persistent_ttl(env, &key);
    }
}
