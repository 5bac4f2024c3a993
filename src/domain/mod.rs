//! Domain value types for the concentrated liquidity swap core.
//!
//! Denominations, coins, ticks, prices, liquidity, pool and tick state,
//! and the swap shape descriptors. All types use newtypes with validated
//! constructors to enforce invariants; decimal quantities are exact
//! (`rust_decimal::Decimal`), never binary floating point.

mod account;
mod amount;
mod coin;
mod denom;
mod denom_pair;
mod fee_rate;
mod liquidity;
mod pool;
mod price;
mod rounding;
mod swap_event;
mod swap_kind;
mod swap_outcome;
mod tick;
mod tick_info;

pub use account::AccountId;
pub use amount::Amount;
pub use coin::Coin;
pub use denom::Denom;
pub use denom_pair::{order_initial_pool_denoms, DenomPair};
pub use fee_rate::FeeRate;
pub use liquidity::Liquidity;
pub use pool::{Pool, PoolId};
pub use price::{Price, SqrtPrice};
pub use rounding::Rounding;
pub use swap_event::SwapEvent;
pub use swap_kind::{SwapDirection, SwapKind, SwapMode};
pub use swap_outcome::SwapOutcome;
pub use tick::Tick;
pub use tick_info::TickInfo;

pub(crate) use tick::{MAX_TICK, MIN_TICK};
