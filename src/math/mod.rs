//! Numeric core of the swap engine.
//!
//! All arithmetic runs on [`rust_decimal::Decimal`] through
//! [`CheckedArithmetic`], so overflow and division by zero surface as
//! [`AmmError`](crate::error::AmmError) values instead of panics.
//!
//! | Module | Contents |
//! |--------|----------|
//! | `tick_math` | tick ⇄ price ⇄ √price codec and protocol bounds |
//! | `sqrt_price_math` | token amounts between √prices, next √price from an amount |
//! | `swap_math` | one constant-liquidity swap step |
//! | `liquidity_math` | liquidity ⇄ token amounts for a range |
//! | `rounding` | directional rounding at [`PRECISION`] digits |

mod checked;
mod liquidity_math;
mod rounding;
mod sqrt_price_math;
mod swap_math;
mod tick_math;

pub use checked::CheckedArithmetic;
pub use liquidity_math::{amounts_for_liquidity, liquidity0, liquidity1, liquidity_from_amounts};
pub use rounding::{div_round, round_to_precision, PRECISION};
pub use sqrt_price_math::{
    amount0_delta, amount1_delta, next_sqrt_price_from_amount0_in,
    next_sqrt_price_from_amount0_out, next_sqrt_price_from_amount1_in,
    next_sqrt_price_from_amount1_out,
};
pub use swap_math::{compute_swap_step, compute_swap_step_exact_out, step_for, SwapStep};
pub use tick_math::{
    price_at_tick, price_to_tick, sqrt_price_to_tick, tick_index_to_sqrt_price,
    tick_to_sqrt_price, MAX_SPOT_PRICE, MAX_SQRT_RATIO, MIN_SPOT_PRICE, MIN_SQRT_RATIO, TICK_BASE,
};
