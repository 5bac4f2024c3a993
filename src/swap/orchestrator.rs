//! Multi-tick swap traversal.
//!
//! Both public entry points validate their request, then run the same
//! traversal parametrized by [`SwapKind`]:
//!
//! 1. Find the next initialized tick in the swap direction.
//! 2. Aim for that tick's √price, or the price limit if it comes first.
//! 3. Swap within the current range with [`step_for`], or jump straight to
//!    the target when the range holds no liquidity.
//! 4. On reaching the tick, cross it: apply its net liquidity (negated
//!    when moving down) and move the working tick past it.
//!
//! The loop ends once the specified amount is exhausted (within
//! [`SwapParams::epsilon`]) or the price limit is reached. Nothing is
//! written; the result is a [`SwapOutcome`] for an applier to commit.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use super::state::SwapState;
use crate::config::SwapParams;
use crate::domain::{
    Amount, Coin, Denom, FeeRate, Pool, PoolId, Price, SqrtPrice, SwapKind, SwapMode,
    SwapOutcome,
};
use crate::error::AmmError;
use crate::math::{
    sqrt_price_to_tick, step_for, tick_to_sqrt_price, CheckedArithmetic, SwapStep,
    MAX_SPOT_PRICE, MAX_SQRT_RATIO, MIN_SPOT_PRICE, MIN_SQRT_RATIO,
};
use crate::traits::{PoolStore, TickStore};

/// Computes and applies concentrated liquidity swaps.
///
/// The engine holds only loop parameters; pool and tick state are passed
/// in per call. Computation methods take the store by shared reference so
/// a traversal observes one consistent snapshot.
///
/// # Examples
///
/// ```
/// use hydra_clmm::config::PoolConfig;
/// use hydra_clmm::domain::{Amount, Coin, Denom, FeeRate, PoolId, Tick};
/// use hydra_clmm::factory::PoolFactory;
/// use hydra_clmm::store::MemoryStore;
/// use hydra_clmm::swap::SwapEngine;
/// use rust_decimal_macros::dec;
///
/// let eth = Denom::new("eth").expect("ok");
/// let usdc = Denom::new("usdc").expect("ok");
/// let id = PoolId::new(1);
/// let mut store = MemoryStore::new();
/// let cfg = PoolConfig::new(id, eth.clone(), usdc.clone(), dec!(5000)).expect("valid");
/// PoolFactory::create(&mut store, &cfg).expect("created");
/// store
///     .create_position(
///         id,
///         Tick::new(84_222).expect("ok"),
///         Tick::new(86_129).expect("ok"),
///         dec!(1000000),
///         dec!(5000000000),
///     )
///     .expect("position");
///
/// let engine = SwapEngine::default();
/// let outcome = engine
///     .calc_out_given_in(
///         &store,
///         id,
///         &Coin::new(usdc, Amount::new(42_000_000)),
///         &eth,
///         FeeRate::ZERO,
///         dec!(5004),
///     )
///     .expect("swap");
/// assert_eq!(outcome.token_out().amount(), Amount::new(8_396));
/// assert_eq!(outcome.tick().get(), 85_184);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwapEngine {
    params: SwapParams,
}

impl SwapEngine {
    /// Creates an engine with the given loop parameters.
    #[must_use]
    pub const fn new(params: SwapParams) -> Self {
        Self { params }
    }

    /// Returns the loop parameters.
    #[must_use]
    pub const fn params(&self) -> &SwapParams {
        &self.params
    }

    /// Output obtained for selling exactly `token_in`, moving the price no
    /// further than `price_limit`.
    ///
    /// A limit equal to the current price yields a zero-amount outcome.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidArgument`] for a zero input, equal denoms, or a
    ///   denom not in the pool.
    /// - [`AmmError::InvalidPrice`] if `price_limit` is not positive.
    /// - [`AmmError::PriceLimitViolation`] if the limit is on the wrong side
    ///   of the current price or outside the protocol bounds.
    /// - [`AmmError::NoLiquidity`] if initialized ticks run out.
    /// - [`AmmError::ComputationDivergence`] past the iteration cap.
    pub fn calc_out_given_in<S>(
        &self,
        store: &S,
        pool_id: PoolId,
        token_in: &Coin,
        token_out_denom: &Denom,
        fee: FeeRate,
        price_limit: Decimal,
    ) -> Result<SwapOutcome, AmmError>
    where
        S: PoolStore + TickStore,
    {
        if token_in.is_zero() {
            return Err(AmmError::InvalidArgument("input amount must be positive"));
        }
        let pool = store.pool(pool_id)?;
        let direction = pool.denoms().direction(token_in.denom(), token_out_denom)?;
        let sqrt_limit = bounded_sqrt(price_limit)?;
        if !direction.admits_limit(pool.sqrt_price().get(), sqrt_limit.get()) {
            return Err(AmmError::PriceLimitViolation(
                "price limit is on the wrong side of the current price",
            ));
        }
        let kind = SwapKind::new(SwapMode::ExactIn, direction);

        let amount_in = token_in.amount().to_decimal()?;
        let after_fee = amount_in.safe_mul(&fee.complement())?;
        debug!(
            pool = %pool_id,
            %kind,
            token_in = %token_in,
            %price_limit,
            "computing exact-in swap"
        );
        let state = self.traverse(kind, store, &pool, after_fee, sqrt_limit)?;

        let consumed = after_fee.safe_sub(&state.amount_remaining)?;
        let realized_in = Amount::from_decimal(consumed, kind.specified_rounding())?;
        let realized_out =
            Amount::from_decimal(state.amount_calculated, kind.calculated_rounding())?;
        // Leftover input flows back to the trader, so it rounds like the output.
        let leftover = state
            .amount_remaining
            .max(Decimal::ZERO)
            .safe_div(&fee.complement())?;
        let refunded = Amount::from_decimal(leftover, kind.calculated_rounding())?;
        let charged = token_in
            .amount()
            .checked_sub(&refunded)
            .ok_or(AmmError::ComputationError("refund exceeds the supplied input"))?;

        let outcome = SwapOutcome::new(
            Coin::new(token_in.denom().clone(), realized_in),
            charged,
            Coin::new(token_out_denom.clone(), realized_out),
            state.tick,
            state.liquidity,
            state.sqrt_price,
        );
        debug!(pool = %pool_id, %outcome, iterations = state.iterations, "exact-in swap computed");
        Ok(outcome)
    }

    /// Input required to buy exactly `token_out` while the price stays
    /// inside `[min_price, max_price]`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidArgument`] for a zero output, equal denoms, or a
    ///   denom not in the pool.
    /// - [`AmmError::InvalidPrice`] if `min_price` is not positive.
    /// - [`AmmError::PriceLimitViolation`] unless
    ///   `min_price < current < max_price` within the protocol bounds, or if
    ///   the band is exhausted before the output is filled.
    /// - [`AmmError::NoLiquidity`] if initialized ticks or liquidity run out.
    /// - [`AmmError::ComputationDivergence`] past the iteration cap.
    #[allow(clippy::too_many_arguments)]
    pub fn calc_in_given_out<S>(
        &self,
        store: &S,
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
        if token_out.is_zero() {
            return Err(AmmError::InvalidArgument("output amount must be positive"));
        }
        let pool = store.pool(pool_id)?;
        let direction = pool.denoms().direction(token_in_denom, token_out.denom())?;
        let sqrt_min = bounded_sqrt(min_price)?;
        let sqrt_max = bounded_sqrt(max_price)?;
        let current = pool.sqrt_price();
        if current <= sqrt_min || current >= sqrt_max {
            return Err(AmmError::PriceLimitViolation(
                "current price must lie strictly inside the price band",
            ));
        }
        let kind = SwapKind::new(SwapMode::ExactOut, direction);
        let sqrt_limit = if direction.is_zero_for_one() {
            sqrt_min
        } else {
            sqrt_max
        };

        let amount_out = token_out.amount().to_decimal()?;
        debug!(
            pool = %pool_id,
            %kind,
            token_out = %token_out,
            %min_price,
            %max_price,
            "computing exact-out swap"
        );
        let state = self.traverse(kind, store, &pool, amount_out, sqrt_limit)?;
        if state.amount_remaining > self.params.epsilon() {
            return Err(AmmError::PriceLimitViolation(
                "price band exhausted before the output was filled",
            ));
        }

        let gross = state.amount_calculated.safe_div(&fee.complement())?;
        let realized_in = Amount::from_decimal(gross, kind.calculated_rounding())?;

        let outcome = SwapOutcome::new(
            Coin::new(token_in_denom.clone(), realized_in),
            realized_in,
            token_out.clone(),
            state.tick,
            state.liquidity,
            state.sqrt_price,
        );
        debug!(pool = %pool_id, %outcome, iterations = state.iterations, "exact-out swap computed");
        Ok(outcome)
    }

    /// Walks initialized ticks until the specified amount is used up or the
    /// limit is reached.
    fn traverse<S>(
        &self,
        kind: SwapKind,
        store: &S,
        pool: &Pool,
        amount_specified: Decimal,
        sqrt_limit: SqrtPrice,
    ) -> Result<SwapState, AmmError>
    where
        S: TickStore,
    {
        let direction = kind.direction();
        let mut state = SwapState::new(pool, amount_specified);

        while state.amount_remaining > self.params.epsilon() && state.sqrt_price != sqrt_limit {
            if state.iterations >= self.params.max_iterations() {
                return Err(AmmError::ComputationDivergence {
                    iterations: state.iterations,
                });
            }
            state.iterations += 1;
            let start = state.sqrt_price;

            let next_tick = store
                .next_initialized_tick(pool.id(), state.tick, direction)?
                .ok_or(AmmError::NoLiquidity(
                    "no initialized tick left in the swap direction",
                ))?;
            let tick_sqrt = tick_to_sqrt_price(next_tick)?;
            let target = if direction.overshoots(tick_sqrt.get(), sqrt_limit.get()) {
                sqrt_limit
            } else {
                tick_sqrt
            };

            let step = if state.liquidity.is_zero() {
                SwapStep {
                    sqrt_price_next: target,
                    amount_in: Decimal::ZERO,
                    amount_out: Decimal::ZERO,
                }
            } else {
                step_for(kind, start, target, state.liquidity, state.amount_remaining)?
            };
            let (specified, calculated) = if kind.is_exact_in() {
                (step.amount_in, step.amount_out)
            } else {
                (step.amount_out, step.amount_in)
            };
            state.amount_remaining = state.amount_remaining.safe_sub(&specified)?;
            state.amount_calculated = state.amount_calculated.safe_add(&calculated)?;
            state.sqrt_price = step.sqrt_price_next;
            trace!(
                iteration = state.iterations,
                tick = %next_tick,
                sqrt_price = %state.sqrt_price,
                liquidity = %state.liquidity,
                remaining = %state.amount_remaining,
                "swap step"
            );

            if state.sqrt_price == tick_sqrt {
                let net = store.cross_tick(pool.id(), next_tick)?;
                state.liquidity = state.liquidity.add_delta(direction.crossing_delta(net))?;
                state.tick = direction.tick_after_cross(next_tick);
                debug!(
                    tick = %next_tick,
                    liquidity_net = %net,
                    liquidity = %state.liquidity,
                    "crossed tick"
                );
                if kind.rejects_depleted_liquidity()
                    && state.liquidity.is_zero()
                    && state.amount_remaining > self.params.epsilon()
                {
                    return Err(AmmError::NoLiquidity(
                        "liquidity depleted before the output was filled",
                    ));
                }
            } else if state.sqrt_price != start {
                state.tick = sqrt_price_to_tick(state.sqrt_price)?;
            }
        }
        Ok(state)
    }
}

/// √ of a price limit, after checking it lies within the protocol bounds.
///
/// The root is clamped to `[MIN_SQRT_RATIO, MAX_SQRT_RATIO]` so the last
/// digit of the square root cannot push a bound limit out of range.
fn bounded_sqrt(price: Decimal) -> Result<SqrtPrice, AmmError> {
    let price = Price::new(price)?;
    if price.get() < MIN_SPOT_PRICE || price.get() > MAX_SPOT_PRICE {
        return Err(AmmError::PriceLimitViolation(
            "price limit is outside the protocol price bounds",
        ));
    }
    let root = price.sqrt()?.get().clamp(MIN_SQRT_RATIO, MAX_SQRT_RATIO);
    SqrtPrice::new(root)
}
