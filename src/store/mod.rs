//! In-memory implementations of the host traits.
//!
//! [`MemoryStore`] implements [`PoolStore`](crate::traits::PoolStore) and
//! [`TickStore`](crate::traits::TickStore); [`MemoryBank`] implements
//! [`Bank`](crate::traits::Bank) and
//! [`EventSink`](crate::traits::EventSink). They back the tests and are
//! enough to run the engine standalone.

mod memory;
mod memory_bank;

pub use memory::MemoryStore;
pub use memory_bank::MemoryBank;
