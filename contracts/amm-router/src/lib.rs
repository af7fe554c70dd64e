#![no_std]

use amm_types::{AmmError, PoolState, SwapDirection, SwapQuote};
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, log, Address, Env, IntoVal, Symbol,
};

#[contract]
pub struct AmmRouter;

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Pool,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RouterError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    DeadlineExpired = 3,
    InsufficientOutputAmount = 4,
    ExcessiveInputAmount = 5,
    InsufficientClaimsMinted = 6,
    ZeroAmount = 7,
    EmptyPool = 8,
    InsufficientLiquidity = 9,
    ArithmeticOverflow = 10,
}

#[contractimpl]
impl AmmRouter {
    /// Bind the router to a pool
    pub fn initialize(env: Env, pool: Address) -> Result<(), RouterError> {
        if env.storage().instance().has(&DataKey::Pool) {
            return Err(RouterError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Pool, &pool);
        Ok(())
    }

    /// Swap exactly `amount_in`, failing below `amount_out_min`
    pub fn swap_exact_in(
        env: Env,
        trader: Address,
        direction: SwapDirection,
        amount_in: u128,
        amount_out_min: u128,
        deadline: u64,
    ) -> Result<u128, RouterError> {
        trader.require_auth();
        check_deadline(&env, deadline)?;

        let pool = get_pool(&env)?;
        let amount_out = invoke_swap(&env, &pool, &trader, direction, amount_in);
        if amount_out < amount_out_min {
            return Err(RouterError::InsufficientOutputAmount);
        }

        Ok(amount_out)
    }

    /// Receive at least `amount_out` for the minimal input, failing above `amount_in_max`
    ///
    /// # Returns
    /// Amount of the input asset paid
    pub fn swap_exact_out(
        env: Env,
        trader: Address,
        direction: SwapDirection,
        amount_out: u128,
        amount_in_max: u128,
        deadline: u64,
    ) -> Result<u128, RouterError> {
        trader.require_auth();
        check_deadline(&env, deadline)?;

        let pool = get_pool(&env)?;
        let (reserve_in, reserve_out) = pool_state(&env, &pool).reserves_for(direction);
        let amount_in = match amm_math::get_amount_in(&env, amount_out, reserve_in, reserve_out) {
            Ok(amount_in) => amount_in,
            Err(err) => {
                log!(&env, "exact-out unpriceable", amount_out, reserve_out);
                return Err(pricing_error(err));
            }
        };
        if amount_in > amount_in_max {
            return Err(RouterError::ExcessiveInputAmount);
        }

        let received = invoke_swap(&env, &pool, &trader, direction, amount_in);
        if received < amount_out {
            return Err(RouterError::InsufficientOutputAmount);
        }

        Ok(amount_in)
    }

    /// Deposit through the pool, failing below `claims_min`
    pub fn add_liquidity(
        env: Env,
        provider: Address,
        amount_a: u128,
        amount_b: u128,
        claims_min: u128,
        deadline: u64,
    ) -> Result<u128, RouterError> {
        provider.require_auth();
        check_deadline(&env, deadline)?;

        let pool = get_pool(&env)?;
        let claims: u128 = env.invoke_contract(
            &pool,
            &Symbol::new(&env, "add_liquidity"),
            (provider, amount_a, amount_b).into_val(&env),
        );
        if claims < claims_min {
            return Err(RouterError::InsufficientClaimsMinted);
        }

        Ok(claims)
    }

    /// Withdraw through the pool, failing below either minimum
    pub fn remove_liquidity(
        env: Env,
        provider: Address,
        claims: u128,
        amount_a_min: u128,
        amount_b_min: u128,
        deadline: u64,
    ) -> Result<(u128, u128), RouterError> {
        provider.require_auth();
        check_deadline(&env, deadline)?;

        let pool = get_pool(&env)?;
        let (amount_a, amount_b): (u128, u128) = env.invoke_contract(
            &pool,
            &Symbol::new(&env, "remove_liquidity"),
            (provider, claims).into_val(&env),
        );
        if amount_a < amount_a_min || amount_b < amount_b_min {
            return Err(RouterError::InsufficientOutputAmount);
        }

        Ok((amount_a, amount_b))
    }

    /// Quote an exact-input swap against the pool's current reserves
    pub fn quote_exact_in(
        env: Env,
        direction: SwapDirection,
        amount_in: u128,
    ) -> Result<SwapQuote, RouterError> {
        let pool = get_pool(&env)?;
        Ok(env.invoke_contract(
            &pool,
            &Symbol::new(&env, "quote"),
            (direction, amount_in).into_val(&env),
        ))
    }

    /// Quote the minimal-input swap that yields at least `amount_out`
    ///
    /// Returns `None` when the output cannot be priced, e.g. it would take
    /// the whole output reserve.
    pub fn quote_exact_out(
        env: Env,
        direction: SwapDirection,
        amount_out: u128,
    ) -> Result<Option<SwapQuote>, RouterError> {
        let pool = get_pool(&env)?;
        let (reserve_in, reserve_out) = pool_state(&env, &pool).reserves_for(direction);
        Ok(amm_math::quote_exact_out(&env, amount_out, reserve_in, reserve_out).ok())
    }

    /// Get the bound pool
    pub fn get_pool(env: Env) -> Result<Address, RouterError> {
        get_pool(&env)
    }
}

fn get_pool(env: &Env) -> Result<Address, RouterError> {
    env.storage()
        .instance()
        .get(&DataKey::Pool)
        .ok_or(RouterError::NotInitialized)
}

fn check_deadline(env: &Env, deadline: u64) -> Result<(), RouterError> {
    if env.ledger().timestamp() > deadline {
        return Err(RouterError::DeadlineExpired);
    }
    Ok(())
}

/// Router-side error for an exact-output request the pool cannot price
fn pricing_error(err: AmmError) -> RouterError {
    match err {
        AmmError::ZeroInput => RouterError::ZeroAmount,
        AmmError::InvalidReserves | AmmError::EmptyPool => RouterError::EmptyPool,
        AmmError::InsufficientLiquidity => RouterError::InsufficientLiquidity,
        _ => RouterError::ArithmeticOverflow,
    }
}

fn pool_state(env: &Env, pool: &Address) -> PoolState {
    env.invoke_contract(pool, &Symbol::new(env, "get_state"), ().into_val(env))
}

fn invoke_swap(
    env: &Env,
    pool: &Address,
    trader: &Address,
    direction: SwapDirection,
    amount_in: u128,
) -> u128 {
    env.invoke_contract(
        pool,
        &Symbol::new(env, "swap"),
        (trader, direction, amount_in).into_val(env),
    )
}
