use amm_types::PoolConfig;
use soroban_sdk::{Address, Env, Symbol};

// Topics are (event name, actor); data carries the exact integer amounts.
// Events of a failed invocation are discarded by the host with its state.

pub fn pool_initialized(env: &Env, config: &PoolConfig) {
    env.events().publish(
        (Symbol::new(env, "pool_initialized"),),
        (config.asset_a.clone(), config.asset_b.clone(), config.add_policy),
    );
}

pub fn liquidity_added(env: &Env, provider: &Address, amount_a: u128, amount_b: u128, claims: u128) {
    env.events().publish(
        (Symbol::new(env, "liquidity_added"), provider.clone()),
        (amount_a, amount_b, claims),
    );
}

pub fn liquidity_removed(
    env: &Env,
    provider: &Address,
    amount_a: u128,
    amount_b: u128,
    claims: u128,
) {
    env.events().publish(
        (Symbol::new(env, "liquidity_removed"), provider.clone()),
        (amount_a, amount_b, claims),
    );
}

pub fn swap(
    env: &Env,
    trader: &Address,
    asset_in: Address,
    asset_out: Address,
    amount_in: u128,
    amount_out: u128,
) {
    env.events().publish(
        (Symbol::new(env, "swap"), trader.clone()),
        (asset_in, asset_out, amount_in, amount_out),
    );
}
