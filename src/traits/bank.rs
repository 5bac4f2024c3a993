//! Balance transfers and event delivery supplied by the host.

use crate::domain::{AccountId, Coin, SwapEvent};
use crate::error::AmmError;

/// Moves balances between accounts.
///
/// Each call is atomic: it either moves the full coin or leaves both
/// balances untouched. Atomicity *across* the two legs of a swap is the
/// applier's job.
pub trait Bank {
    /// Transfers `coin` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`] if `from` cannot cover the
    /// amount or the transfer is otherwise refused.
    fn send(&mut self, from: &AccountId, to: &AccountId, coin: &Coin) -> Result<(), AmmError>;
}

/// Receives swap notifications.
pub trait EventSink {
    /// Records a committed swap.
    fn emit(&mut self, event: SwapEvent);
}
