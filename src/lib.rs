//! # Hydra CLMM
//!
//! Swap core of a concentrated liquidity market maker: prices live on a
//! discrete tick lattice, liquidity is provided over tick ranges, and a
//! swap walks the lattice one initialized tick at a time, adjusting active
//! liquidity whenever it crosses a range boundary.
//!
//! The crate provides:
//!
//! - a bidirectional **tick codec** (`tick ↔ price ↔ √price`) over
//!   `[-276324, 276324]` with base `1.0001`
//! - **swap step math** for exact-in and exact-out swaps in both
//!   directions, with directional rounding that always favors the pool
//! - a **traversal loop** that crosses initialized ticks, honors price
//!   limits and bounds its iteration count
//! - an **applier** that commits pool state, settles both legs through a
//!   host bank and emits a swap event, atomically
//!
//! All quantities are exact decimals (`rust_decimal::Decimal`) carried at
//! 18 fractional digits; token amounts are unsigned integers.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for domain, config and request types |
//!
//! # Quick Start
//!
//! ## Create a pool, add liquidity and swap
//!
//! ```rust
//! use hydra_clmm::config::PoolConfig;
//! use hydra_clmm::domain::{AccountId, Amount, Coin, Denom, FeeRate, PoolId, Tick};
//! use hydra_clmm::factory::PoolFactory;
//! use hydra_clmm::store::{MemoryBank, MemoryStore};
//! use hydra_clmm::swap::{ExactInRequest, SwapEngine};
//! use rust_decimal_macros::dec;
//!
//! let eth = Denom::new("eth").expect("valid denom");
//! let usdc = Denom::new("usdc").expect("valid denom");
//! let id = PoolId::new(1);
//!
//! // 1. Create an eth/usdc pool at a spot price of 5000
//! let mut store = MemoryStore::new();
//! let config = PoolConfig::new(id, eth.clone(), usdc.clone(), dec!(5000)).expect("valid config");
//! let pool = PoolFactory::create(&mut store, &config).expect("pool created");
//!
//! // 2. Provide 1 000 000 eth and 5 000 000 000 usdc over [4545, 5500]
//! store
//!     .create_position(
//!         id,
//!         Tick::new(84_222).expect("valid tick"),
//!         Tick::new(86_129).expect("valid tick"),
//!         dec!(1000000),
//!         dec!(5000000000),
//!     )
//!     .expect("position created");
//!
//! // 3. Fund the pool escrow and a trader
//! let trader = AccountId::new("trader").expect("valid account");
//! let mut bank = MemoryBank::new();
//! bank.mint(&pool.address(), &Coin::new(eth.clone(), Amount::new(1_000_000)))
//!     .expect("minted");
//! bank.mint(&trader, &Coin::new(usdc.clone(), Amount::new(42_000_000)))
//!     .expect("minted");
//!
//! // 4. Sell 42 000 000 usdc for at least 8 000 eth
//! let request = ExactInRequest::new(
//!     trader.clone(),
//!     id,
//!     Coin::new(usdc, Amount::new(42_000_000)),
//!     eth.clone(),
//!     Amount::new(8_000),
//!     FeeRate::ZERO,
//! );
//! let out = SwapEngine::default()
//!     .swap_exact_amount_in(&mut store, &mut bank, &request)
//!     .expect("swap succeeded");
//!
//! assert_eq!(out, Amount::new(8_396));
//! assert_eq!(bank.balance(&trader, &eth), out);
//! assert_eq!(bank.events().len(), 1);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  builds ExactInRequest / ExactOutRequest
//! └──────┬───────┘
//!        │ swap_exact_amount_in / _out
//!        ▼
//! ┌──────────────┐
//! │   Applier     │  slippage checks, state write, settlement, event
//! └──────┬───────┘
//!        │ calc_out_given_in / calc_in_given_out
//!        ▼
//! ┌──────────────┐
//! │ Orchestrator  │  tick traversal, crossing, limits, iteration cap
//! └──────┬───────┘
//!        │ step_for, tick codec
//!        ▼
//! ┌──────────────┐
//! │     Math      │  swap step, √price deltas, tick ↔ price
//! └──────────────┘
//!
//! Host seams (traits): PoolStore, TickStore, Bank, EventSink
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Tick`](domain::Tick), [`SqrtPrice`](domain::SqrtPrice), [`Liquidity`](domain::Liquidity), [`Coin`](domain::Coin), etc. |
//! | [`math`] | Checked arithmetic, rounding, tick codec, √price and swap step math |
//! | [`swap`] | [`SwapEngine`](swap::SwapEngine): traversal and settlement |
//! | [`traits`] | Host seams: [`PoolStore`](traits::PoolStore), [`TickStore`](traits::TickStore), [`Bank`](traits::Bank), [`EventSink`](traits::EventSink) |
//! | [`store`] | In-memory host: [`MemoryStore`](store::MemoryStore), [`MemoryBank`](store::MemoryBank) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) and [`SwapParams`](config::SwapParams) |
//! | [`factory`] | [`PoolFactory`](factory::PoolFactory) for config-driven pool creation |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod factory;
pub mod math;
pub mod prelude;
pub mod store;
pub mod swap;
pub mod traits;
