#![allow(missing_docs, clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal_macros::dec;

use hydra_clmm::config::PoolConfig;
use hydra_clmm::domain::{Amount, Coin, Denom, FeeRate, Liquidity, PoolId, Tick};
use hydra_clmm::factory::PoolFactory;
use hydra_clmm::math::{price_to_tick, sqrt_price_to_tick, tick_to_sqrt_price, MAX_SPOT_PRICE};
use hydra_clmm::store::MemoryStore;
use hydra_clmm::swap::SwapEngine;

const ID: PoolId = PoolId::new(1);

fn tick(v: i32) -> Tick {
    Tick::new(v).expect("valid tick")
}

/// A pool at price 1 with a ladder of 1000-wide ranges of growing depth.
fn ladder_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    let config = PoolConfig::new(
        ID,
        Denom::new("eth").expect("valid denom"),
        Denom::new("usdc").expect("valid denom"),
        dec!(1),
    )
    .expect("valid config");
    PoolFactory::create(&mut store, &config).expect("pool created");
    for (step, lower) in (-1_000..20_000).step_by(1_000).enumerate() {
        let depth = rust_decimal::Decimal::from(step as u64 + 1);
        let liquidity = Liquidity::new(dec!(1000000000) * depth).expect("valid liquidity");
        store
            .add_liquidity_range(ID, tick(lower), tick(lower + 1_000), liquidity)
            .expect("range added");
    }
    store
}

fn bench_tick_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_codec");
    group.bench_function("tick_to_sqrt_price", |b| {
        b.iter(|| tick_to_sqrt_price(black_box(tick(85_176))))
    });
    group.bench_function("price_to_tick", |b| {
        b.iter(|| price_to_tick(black_box(dec!(5000))))
    });
    let sqrt = tick_to_sqrt_price(tick(-123_456)).expect("valid sqrt price");
    group.bench_function("sqrt_price_to_tick", |b| {
        b.iter(|| sqrt_price_to_tick(black_box(sqrt)))
    });
    group.finish();
}

fn bench_swaps(c: &mut Criterion) {
    let store = ladder_store();
    let engine = SwapEngine::default();
    let usdc = Denom::new("usdc").expect("valid denom");
    let eth = Denom::new("eth").expect("valid denom");

    let mut group = c.benchmark_group("swap");
    let small = Coin::new(usdc.clone(), Amount::new(1_000));
    group.bench_function("exact_in_single_range", |b| {
        b.iter(|| {
            engine.calc_out_given_in(&store, ID, black_box(&small), &eth, FeeRate::ZERO, MAX_SPOT_PRICE)
        })
    });
    let large = Coin::new(usdc, Amount::new(1_000_000_000));
    group.bench_function("exact_in_multi_tick", |b| {
        b.iter(|| {
            engine.calc_out_given_in(&store, ID, black_box(&large), &eth, FeeRate::ZERO, MAX_SPOT_PRICE)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_tick_codec, bench_swaps);
criterion_main!(benches);
