use crate::full_math::{mul_wide, u128_from_u256};
use amm_types::AmmError;
use soroban_sdk::{Env, U256};

/// floor(sqrt(a * b)) without overflowing the product
///
/// The product is formed in 256 bits; its square root always fits in u128.
pub fn sqrt_product(env: &Env, a: u128, b: u128) -> Result<u128, AmmError> {
    let n = mul_wide(env, a, b);

    if let Some(small) = n.to_u128() {
        return Ok(small.isqrt());
    }

    // Newton's method from above: u128::MAX >= floor(sqrt(n)) for any n < 2^256
    let two = U256::from_u32(env, 2);
    let mut x = U256::from_u128(env, u128::MAX);
    loop {
        let y = x.add(&n.div(&x)).div(&two);
        if y >= x {
            break;
        }
        x = y;
    }

    u128_from_u256(&x)
}
