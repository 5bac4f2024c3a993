//! Property-based tests using `proptest` for swap invariants.
//!
//! 1. **Codec round trip**: `price_to_tick(price_at_tick(t)) == t`, same
//!    for √price, and prices strictly increase with the tick.
//! 2. **Output monotonicity**: more input never yields less output.
//! 3. **Round trips favor the pool**: selling then selling back returns no
//!    more than was sold, and buying back the output of a committed sale
//!    costs at least what was sold. From a single pre-swap state, buying
//!    a given output never costs more than the sale that produced it.
//! 4. **Crossing conservation**: crossing a shared boundary swaps one
//!    range's liquidity for the other's, in both directions.
//! 5. **Limit at current price**: yields zero amounts.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::SwapEngine;
use crate::config::PoolConfig;
use crate::domain::{Amount, Coin, Denom, FeeRate, Liquidity, PoolId, Tick};
use crate::factory::PoolFactory;
use crate::math::{
    price_at_tick, price_to_tick, sqrt_price_to_tick, tick_to_sqrt_price, MAX_SPOT_PRICE,
    MIN_SPOT_PRICE,
};
use crate::store::MemoryStore;
use crate::traits::PoolStore;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const ID: PoolId = PoolId::new(1);

fn denom(s: &str) -> Denom {
    let Ok(d) = Denom::new(s) else {
        panic!("valid denom");
    };
    d
}

fn tick(v: i32) -> Tick {
    let Ok(t) = Tick::new(v) else {
        panic!("valid tick");
    };
    t
}

fn coin(d: &str, amount: u128) -> Coin {
    Coin::new(denom(d), Amount::new(amount))
}

fn empty_pool(price: Decimal) -> MemoryStore {
    let mut store = MemoryStore::new();
    let Ok(cfg) = PoolConfig::new(ID, denom("eth"), denom("usdc"), price) else {
        panic!("valid config");
    };
    let Ok(_) = PoolFactory::create(&mut store, &cfg) else {
        panic!("pool created");
    };
    store
}

/// eth/usdc at 5000 with 1M eth / 5B usdc over [84222, 86129).
fn reference_pool() -> MemoryStore {
    let mut store = empty_pool(dec!(5000));
    let Ok(_) = store.create_position(
        ID,
        tick(84_222),
        tick(86_129),
        dec!(1000000),
        dec!(5000000000),
    ) else {
        panic!("position");
    };
    store
}

fn liquidity(units: u64) -> Liquidity {
    let Ok(l) = Liquidity::new(Decimal::from(units)) else {
        panic!("valid liquidity");
    };
    l
}

fn tick_strategy() -> impl Strategy<Value = i32> {
    Tick::MIN.get()..=Tick::MAX.get()
}

fn usdc_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=1_000_000_000u128
}

// ---------------------------------------------------------------------------
// Property 1: Codec round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_price_tick_round_trip(t in tick_strategy()) {
        let Ok(price) = price_at_tick(tick(t)) else {
            return Err(TestCaseError::fail("price at valid tick"));
        };
        prop_assert_eq!(price_to_tick(price.get()), Ok(tick(t)));
    }

    #[test]
    fn prop_sqrt_price_tick_round_trip(t in tick_strategy()) {
        let Ok(sqrt) = tick_to_sqrt_price(tick(t)) else {
            return Err(TestCaseError::fail("sqrt price at valid tick"));
        };
        prop_assert_eq!(sqrt_price_to_tick(sqrt), Ok(tick(t)));
    }

    #[test]
    fn prop_price_strictly_increasing(t in Tick::MIN.get()..Tick::MAX.get()) {
        let (Ok(lo), Ok(hi)) = (price_at_tick(tick(t)), price_at_tick(tick(t + 1))) else {
            return Err(TestCaseError::fail("prices at valid ticks"));
        };
        prop_assert!(lo < hi, "price({}) = {} >= price({}) = {}", t, lo, t + 1, hi);
    }
}

// ---------------------------------------------------------------------------
// Property 2: Output monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_output_monotonic_in_input(a in usdc_strategy(), b in usdc_strategy()) {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        let store = reference_pool();
        let engine = SwapEngine::default();
        let eth = denom("eth");
        let (Ok(lo), Ok(hi)) = (
            engine.calc_out_given_in(&store, ID, &coin("usdc", small), &eth, FeeRate::ZERO, MAX_SPOT_PRICE),
            engine.calc_out_given_in(&store, ID, &coin("usdc", large), &eth, FeeRate::ZERO, MAX_SPOT_PRICE),
        ) else {
            return Err(TestCaseError::fail("swaps within range succeed"));
        };
        prop_assert!(lo.token_out().amount() <= hi.token_out().amount());
    }
}

// ---------------------------------------------------------------------------
// Property 3: Round trips favor the pool
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_sell_and_sell_back_loses(x in usdc_strategy()) {
        let mut store = reference_pool();
        let engine = SwapEngine::default();
        let Ok(fwd) = engine.swap_out_amt_given_in(
            &mut store, ID, &coin("usdc", x), &denom("eth"), FeeRate::ZERO, MAX_SPOT_PRICE,
        ) else {
            return Err(TestCaseError::fail("forward swap"));
        };
        if fwd.token_out().is_zero() {
            return Ok(());
        }
        let Ok(back) = engine.swap_out_amt_given_in(
            &mut store, ID, fwd.token_out(), &denom("usdc"), FeeRate::ZERO, MIN_SPOT_PRICE,
        ) else {
            return Err(TestCaseError::fail("reverse swap"));
        };
        prop_assert!(
            back.token_out().amount().get() <= x,
            "round trip returned {} > {}", back.token_out().amount(), x
        );
    }

    #[test]
    fn prop_exact_out_after_exact_in_costs_at_least_input(x in usdc_strategy()) {
        let mut store = reference_pool();
        let engine = SwapEngine::default();
        let Ok(fwd) = engine.swap_out_amt_given_in(
            &mut store, ID, &coin("usdc", x), &denom("eth"), FeeRate::ZERO, MAX_SPOT_PRICE,
        ) else {
            return Err(TestCaseError::fail("exact-in swap"));
        };
        if fwd.token_out().is_zero() {
            return Ok(());
        }
        let Ok(back) = engine.calc_in_given_out(
            &store, ID, fwd.token_out(), &denom("usdc"), FeeRate::ZERO, MIN_SPOT_PRICE, MAX_SPOT_PRICE,
        ) else {
            return Err(TestCaseError::fail("exact-out after the committed swap"));
        };
        prop_assert!(
            back.token_in().amount().get() >= x,
            "buying {} back costs {} < {}", fwd.token_out(), back.token_in().amount(), x
        );
    }

    #[test]
    fn prop_exact_out_costs_no_more_than_exact_in(x in usdc_strategy()) {
        let store = reference_pool();
        let engine = SwapEngine::default();
        let Ok(fwd) = engine.calc_out_given_in(
            &store, ID, &coin("usdc", x), &denom("eth"), FeeRate::ZERO, MAX_SPOT_PRICE,
        ) else {
            return Err(TestCaseError::fail("exact-in swap"));
        };
        if fwd.token_out().is_zero() {
            return Ok(());
        }
        let Ok(back) = engine.calc_in_given_out(
            &store, ID, fwd.token_out(), &denom("usdc"), FeeRate::ZERO, MIN_SPOT_PRICE, MAX_SPOT_PRICE,
        ) else {
            return Err(TestCaseError::fail("exact-out swap"));
        };
        prop_assert!(back.token_in().amount() <= fwd.token_in().amount());
    }
}

// ---------------------------------------------------------------------------
// Property 4: Crossing conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_crossing_swaps_range_liquidity(
        la in 1_000_000u64..=1_000_000_000_000u64,
        lb in 1_000_000u64..=1_000_000_000_000u64,
    ) {
        // Price 1 sits at tick 0 inside [-100, 50); [50, 200) lies above.
        let mut store = empty_pool(Decimal::ONE);
        let (Ok(()), Ok(())) = (
            store.add_liquidity_range(ID, tick(-100), tick(50), liquidity(la)),
            store.add_liquidity_range(ID, tick(50), tick(200), liquidity(lb)),
        ) else {
            return Err(TestCaseError::fail("ranges added"));
        };
        let engine = SwapEngine::default();

        // Up past tick 50, stopping at the limit before 200.
        let Ok(up) = engine.swap_out_amt_given_in(
            &mut store, ID, &coin("usdc", u128::from(u64::MAX)), &denom("eth"), FeeRate::ZERO, dec!(1.01),
        ) else {
            return Err(TestCaseError::fail("upward swap"));
        };
        prop_assert_eq!(up.liquidity(), liquidity(lb));
        prop_assert!(up.tick() >= tick(50));

        // Back down past tick 50, stopping at the limit above -100.
        let Ok(down) = engine.swap_out_amt_given_in(
            &mut store, ID, &coin("eth", u128::from(u64::MAX)), &denom("usdc"), FeeRate::ZERO, dec!(0.995),
        ) else {
            return Err(TestCaseError::fail("downward swap"));
        };
        prop_assert_eq!(down.liquidity(), liquidity(la));
        prop_assert!(down.tick() < tick(50));
    }
}

// ---------------------------------------------------------------------------
// Property 5: Limit at the current price
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_limit_at_current_price_is_empty(
        price in 1u32..=100_000u32,
        amount in 1u128..=1_000_000u128,
        zero_for_one in any::<bool>(),
    ) {
        let price = Decimal::from(price);
        let mut store = empty_pool(price);
        let Ok(()) = store.add_liquidity_range(ID, Tick::MIN, Tick::MAX, liquidity(1_000_000)) else {
            return Err(TestCaseError::fail("range added"));
        };
        let Ok(before) = store.pool(ID) else {
            return Err(TestCaseError::fail("pool stored"));
        };
        let (input, output) = if zero_for_one { ("eth", "usdc") } else { ("usdc", "eth") };
        let Ok(outcome) = SwapEngine::default().calc_out_given_in(
            &store, ID, &coin(input, amount), &denom(output), FeeRate::ZERO, price,
        ) else {
            return Err(TestCaseError::fail("swap at current price"));
        };
        prop_assert!(outcome.is_empty());
        prop_assert_eq!(outcome.sqrt_price(), before.sqrt_price());
        prop_assert_eq!(outcome.tick(), before.tick());
    }
}
