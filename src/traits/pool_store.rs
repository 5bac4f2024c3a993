//! Pool state persistence.

use crate::domain::{Pool, PoolId};
use crate::error::AmmError;

/// Reads and writes pool state.
///
/// The swap orchestrator only reads through `&self`; the applier writes
/// through [`set_pool`](Self::set_pool) once a swap has been computed.
///
/// # Errors
///
/// Implementations return [`AmmError::PoolNotFound`] for unknown ids.
pub trait PoolStore {
    /// Loads the pool stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if no such pool exists.
    fn pool(&self, id: PoolId) -> Result<Pool, AmmError>;

    /// Overwrites the stored state of `pool.id()`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if the pool was never created.
    fn set_pool(&mut self, pool: Pool) -> Result<(), AmmError>;
}
