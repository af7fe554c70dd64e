#![no_std]

pub mod full_math;
pub mod liquidity_math;
pub mod pricing;
pub mod sqrt_math;

pub use full_math::*;
pub use liquidity_math::*;
pub use pricing::*;
pub use sqrt_math::*;
