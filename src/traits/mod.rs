//! Seams between the swap core and its host.
//!
//! The core owns no storage. Pool state comes from a [`PoolStore`], tick
//! boundaries from a [`TickStore`], settlement goes through a [`Bank`],
//! and notifications to an [`EventSink`]. The [`store`](crate::store)
//! module provides in-memory implementations of all four.

mod bank;
mod pool_store;
mod tick_store;

pub use bank::{Bank, EventSink};
pub use pool_store::PoolStore;
pub use tick_store::TickStore;
