#![no_std]

mod error;
mod pool;

pub use error::*;
pub use pool::*;

/// Fee multiplier applied to swap input (0.3% fee)
pub const FEE_NUMERATOR: u128 = 997;

/// Fee denominator
pub const FEE_DENOMINATOR: u128 = 1000;

/// Fixed-point scale of `get_price` (1e18)
pub const PRICE_SCALE: u128 = 1_000_000_000_000_000_000;
