//! Swap orchestration and settlement.
//!
//! [`SwapEngine`] exposes two layers:
//!
//! | Layer | Methods | Effect |
//! |-------|---------|--------|
//! | Compute | `calc_out_given_in`, `calc_in_given_out` | none; returns a [`SwapOutcome`](crate::domain::SwapOutcome) |
//! | Apply | `swap_exact_amount_in`, `swap_exact_amount_out` | pool state, balances, event |
//! | Apply state only | `swap_out_amt_given_in`, `swap_in_amt_given_out` | pool state |
//!
//! Compute methods never mutate anything, so a failed precondition or an
//! exhausted traversal leaves the pool exactly as it was.

mod applier;
mod orchestrator;
mod request;
mod state;

#[cfg(test)]
mod proptest_properties;

pub use orchestrator::SwapEngine;
pub use request::{ExactInRequest, ExactOutRequest};
