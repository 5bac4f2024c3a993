//! Committing computed swaps: pool state, settlement and events.
//!
//! # Atomicity
//!
//! The new pool state is written first, then the two settlement legs run
//! (input from sender to the pool escrow, output from escrow to sender).
//! If either leg fails, a completed input leg is sent back and the previous
//! pool state is restored before the error is returned, so a failed swap
//! leaves no trace. The one exception is a host that also refuses the
//! refund: the input then stays in escrow and the swap fails with a
//! [`AmmError::TransferFailed`] naming both legs.
//!
//! The input leg moves [`SwapOutcome::charged`], the fee-inclusive amount,
//! while [`SwapOutcome::token_in`] reports what the pool absorbed.

use rust_decimal::Decimal;
use tracing::{info, warn};

use super::{ExactInRequest, ExactOutRequest, SwapEngine};
use crate::domain::{AccountId, Amount, Coin, Denom, FeeRate, Pool, PoolId, SwapEvent, SwapOutcome};
use crate::error::AmmError;
use crate::math::{MAX_SPOT_PRICE, MIN_SPOT_PRICE};
use crate::traits::{Bank, EventSink, PoolStore, TickStore};

impl SwapEngine {
    /// Sells exactly `request.token_in()` and settles the trade.
    ///
    /// The price may move as far as the protocol bounds. Returns the output
    /// amount paid to the sender.
    ///
    /// # Errors
    ///
    /// - Everything [`calc_out_given_in`](Self::calc_out_given_in) returns.
    /// - [`AmmError::SlippageExceeded`] if the output is zero or below
    ///   `token_out_min`.
    /// - [`AmmError::ComputationError`] if the realized input exceeds the
    ///   supplied amount.
    /// - [`AmmError::TransferFailed`] if settlement fails (state restored).
    pub fn swap_exact_amount_in<S, H>(
        &self,
        store: &mut S,
        host: &mut H,
        request: &ExactInRequest,
    ) -> Result<Amount, AmmError>
    where
        S: PoolStore + TickStore,
        H: Bank + EventSink,
    {
        let pool = store.pool(request.pool_id())?;
        let direction = pool
            .denoms()
            .direction(request.token_in().denom(), request.token_out_denom())?;
        let price_limit = if direction.is_zero_for_one() {
            MIN_SPOT_PRICE
        } else {
            MAX_SPOT_PRICE
        };
        let outcome = self.calc_out_given_in(
            &*store,
            request.pool_id(),
            request.token_in(),
            request.token_out_denom(),
            request.fee(),
            price_limit,
        )?;

        check_realized_input(&outcome, request.token_in().amount())?;
        let out = outcome.token_out().amount();
        if out.is_zero() || out < request.token_out_min() {
            return Err(AmmError::SlippageExceeded(
                "output is below the requested minimum",
            ));
        }

        commit(store, host, request.sender(), pool, &outcome)?;
        Ok(out)
    }

    /// Buys exactly `request.token_out()` and settles the trade.
    ///
    /// The price may move anywhere within the protocol bounds. Returns the
    /// input amount taken from the sender.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidArgument`] if the requested output is zero.
    /// - Everything [`calc_in_given_out`](Self::calc_in_given_out) returns.
    /// - [`AmmError::SlippageExceeded`] if the required input exceeds
    ///   `token_in_max`.
    /// - [`AmmError::TransferFailed`] if settlement fails (state restored).
    pub fn swap_exact_amount_out<S, H>(
        &self,
        store: &mut S,
        host: &mut H,
        request: &ExactOutRequest,
    ) -> Result<Amount, AmmError>
    where
        S: PoolStore + TickStore,
        H: Bank + EventSink,
    {
        if request.token_out().is_zero() {
            return Err(AmmError::InvalidArgument("output amount must be positive"));
        }
        let pool = store.pool(request.pool_id())?;
        let outcome = self.calc_in_given_out(
            &*store,
            request.pool_id(),
            request.token_out(),
            request.token_in_denom(),
            request.fee(),
            MIN_SPOT_PRICE,
            MAX_SPOT_PRICE,
        )?;

        let paid = outcome.charged();
        if paid > request.token_in_max() {
            return Err(AmmError::SlippageExceeded(
                "required input exceeds the allowed maximum",
            ));
        }

        commit(store, host, request.sender(), pool, &outcome)?;
        Ok(paid)
    }

    /// Computes an exact-in swap with a caller-chosen limit and writes the
    /// resulting pool state, without moving balances.
    ///
    /// # Errors
    ///
    /// Everything [`calc_out_given_in`](Self::calc_out_given_in) returns,
    /// plus store write errors.
    pub fn swap_out_amt_given_in<S>(
        &self,
        store: &mut S,
        pool_id: PoolId,
        token_in: &Coin,
        token_out_denom: &Denom,
        fee: FeeRate,
        price_limit: Decimal,
    ) -> Result<SwapOutcome, AmmError>
    where
        S: PoolStore + TickStore,
    {
        let outcome =
            self.calc_out_given_in(&*store, pool_id, token_in, token_out_denom, fee, price_limit)?;
        apply_state(store, pool_id, &outcome)?;
        Ok(outcome)
    }

    /// Computes an exact-out swap within `[min_price, max_price]` and writes
    /// the resulting pool state, without moving balances.
    ///
    /// # Errors
    ///
    /// Everything [`calc_in_given_out`](Self::calc_in_given_out) returns,
    /// plus store write errors.
    #[allow(clippy::too_many_arguments)]
    pub fn swap_in_amt_given_out<S>(
        &self,
        store: &mut S,
        pool_id: PoolId,
        token_out: &Coin,
        token_in_denom: &Denom,
        fee: FeeRate,
        min_price: Decimal,
        max_price: Decimal,
    ) -> Result<SwapOutcome, AmmError>
    where
        S: PoolStore + TickStore,
    {
        let outcome = self.calc_in_given_out(
            &*store,
            pool_id,
            token_out,
            token_in_denom,
            fee,
            min_price,
            max_price,
        )?;
        apply_state(store, pool_id, &outcome)?;
        Ok(outcome)
    }
}

/// Neither the absorbed input nor the amount charged may exceed what the
/// trader supplied.
fn check_realized_input(outcome: &SwapOutcome, supplied: Amount) -> Result<(), AmmError> {
    if outcome.token_in().amount() > supplied || outcome.charged() > supplied {
        return Err(AmmError::ComputationError(
            "realized input exceeds the supplied amount",
        ));
    }
    Ok(())
}

fn apply_state<S: PoolStore>(
    store: &mut S,
    pool_id: PoolId,
    outcome: &SwapOutcome,
) -> Result<Pool, AmmError> {
    let previous = store.pool(pool_id)?;
    store.set_pool(previous.with_swap_state(
        outcome.sqrt_price(),
        outcome.tick(),
        outcome.liquidity(),
    ))?;
    Ok(previous)
}

fn commit<S, H>(
    store: &mut S,
    host: &mut H,
    sender: &AccountId,
    previous: Pool,
    outcome: &SwapOutcome,
) -> Result<(), AmmError>
where
    S: PoolStore,
    H: Bank + EventSink,
{
    let pool_id = previous.id();
    let escrow = previous.address();
    apply_state(store, pool_id, outcome)?;

    if let Err(err) = settle(host, sender, &escrow, outcome) {
        warn!(pool = %pool_id, %sender, error = %err, "settlement failed, swap rolled back");
        store.set_pool(previous)?;
        return Err(err);
    }

    let event = SwapEvent::new(
        sender.clone(),
        pool_id,
        outcome.charged_coin(),
        outcome.token_out().clone(),
        outcome.tick(),
    );
    info!(%event, "swap committed");
    host.emit(event);
    Ok(())
}

fn settle<H: Bank>(
    host: &mut H,
    sender: &AccountId,
    escrow: &AccountId,
    outcome: &SwapOutcome,
) -> Result<(), AmmError> {
    let charged = outcome.charged_coin();
    host.send(sender, escrow, &charged)?;
    if let Err(err) = host.send(escrow, sender, outcome.token_out()) {
        if let Err(refund_err) = host.send(escrow, sender, &charged) {
            warn!(
                %sender,
                %escrow,
                input = %charged,
                output_error = %err,
                refund_error = %refund_err,
                "input refund failed after the output leg failed"
            );
            return Err(AmmError::TransferFailed(
                "output leg failed and the input refund failed",
            ));
        }
        return Err(err);
    }
    Ok(())
}
