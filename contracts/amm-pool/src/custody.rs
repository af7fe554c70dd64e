use amm_types::AmmError;
use soroban_sdk::{token, Address, Env};

/// Move `amount` of `asset` from `from` into pool custody
pub fn pull(env: &Env, asset: &Address, from: &Address, amount: u128) -> Result<(), AmmError> {
    transfer(env, asset, from, &env.current_contract_address(), amount)
}

/// Pay `amount` of `asset` out of pool custody to `to`
pub fn pay(env: &Env, asset: &Address, to: &Address, amount: u128) -> Result<(), AmmError> {
    transfer(env, asset, &env.current_contract_address(), to, amount)
}

fn transfer(
    env: &Env,
    asset: &Address,
    from: &Address,
    to: &Address,
    amount: u128,
) -> Result<(), AmmError> {
    if amount == 0 {
        return Ok(());
    }

    // Token interface amounts are i128
    let amount = i128::try_from(amount).map_err(|_| AmmError::ArithmeticOverflow)?;

    match token::Client::new(env, asset).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(AmmError::TransferFailed),
    }
}
