//! Criterion benchmarks for the pricing engines.
//!
//! Measures one valuation per engine over a range of resolutions. The grid
//! benchmark includes the solve; the snowball benchmark reuses cached draws.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::calendar::HolidayCalendar;
use pricer_core::traits::PricingEngine;
use pricer_core::types::Date;
use pricer_models::instruments::{
    AutocallableNote, ContractTerms, ExerciseType, OptionType, VanillaContract,
};
use pricer_pricing::analytical::AnalyticEuropeanEngine;
use pricer_pricing::context::ValuationContext;
use pricer_pricing::fd::{FdConfig, FdVanillaEngine};
use pricer_pricing::lattice::{CrrBinomialEngine, LatticeConfig};
use pricer_pricing::mc::{McSnowballEngine, MonteCarloConfig};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn context() -> ValuationContext {
    let calendar = HolidayCalendar::weekends_only(262).unwrap();
    ValuationContext::new(date(2024, 1, 1), Arc::new(calendar))
}

fn terms() -> ContractTerms {
    ContractTerms::new(date(2025, 1, 1), 0.2, 0.05, 0.0)
}

fn vanilla(option_type: OptionType, exercise: ExerciseType) -> VanillaContract {
    VanillaContract::new(terms(), option_type, 100.0, exercise).unwrap()
}

/// Benchmark closed-form valuation and the full Greek set.
fn bench_analytic(c: &mut Criterion) {
    let engine =
        AnalyticEuropeanEngine::new(vanilla(OptionType::Call, ExerciseType::European), context())
            .unwrap();

    c.bench_function("analytic/value", |b| b.iter(|| engine.value_at(black_box(100.0))));
    c.bench_function("analytic/charm", |b| b.iter(|| engine.charm_at(black_box(100.0))));
}

/// Benchmark American put valuation over growing trees.
fn bench_lattice(c: &mut Criterion) {
    let mut group = c.benchmark_group("crr_american_put");

    for steps in [100usize, 500, 2000] {
        let engine = CrrBinomialEngine::new(
            vanilla(OptionType::Put, ExerciseType::American),
            context(),
            LatticeConfig::new(steps).unwrap(),
        )
        .unwrap();
        group.bench_with_input(BenchmarkId::new("value", steps), &engine, |b, engine| {
            b.iter(|| engine.value_at(black_box(100.0)))
        });
    }
    group.finish();
}

/// Benchmark the implicit sweep; a fresh engine per iteration forces a solve.
fn bench_finite_difference(c: &mut Criterion) {
    let mut group = c.benchmark_group("fd_solve");
    group.sample_size(20);

    for nodes in [101usize, 201, 401] {
        let config = FdConfig::builder().n_space(nodes).n_time(nodes).build().unwrap();
        group.bench_with_input(BenchmarkId::new("grid", nodes), &config, |b, config| {
            b.iter(|| {
                let engine = FdVanillaEngine::new(
                    vanilla(OptionType::Call, ExerciseType::European),
                    context(),
                    *config,
                )
                .unwrap();
                engine.value_at(black_box(100.0))
            })
        });
    }
    group.finish();
}

/// Benchmark one snowball valuation on cached draws.
fn bench_snowball(c: &mut Criterion) {
    let observations = vec![
        date(2024, 2, 1),
        date(2024, 3, 1),
        date(2024, 4, 1),
        date(2024, 5, 1),
        date(2024, 6, 3),
        date(2024, 7, 1),
        date(2024, 8, 1),
        date(2024, 9, 2),
        date(2024, 10, 1),
        date(2024, 11, 1),
        date(2024, 12, 2),
        date(2025, 1, 1),
    ];
    let note = AutocallableNote::builder()
        .terms(terms())
        .annual_coupon_rate(0.2)
        .autocall_barrier(1.03)
        .knock_in_barrier(0.75)
        .observation_dates(observations)
        .build()
        .unwrap();

    let mut group = c.benchmark_group("mc_snowball");
    group.sample_size(10);

    for n_paths in [10_000usize, 50_000] {
        let config = MonteCarloConfig::builder().n_paths(n_paths).build().unwrap();
        let engine = McSnowballEngine::new(note.clone(), context(), config).unwrap();
        // build draws outside the measurement
        let _ = engine.value_at(1.0);
        group.bench_with_input(BenchmarkId::new("value", n_paths), &engine, |b, engine| {
            b.iter(|| engine.value_at(black_box(1.0)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_analytic,
    bench_lattice,
    bench_finite_difference,
    bench_snowball
);
criterion_main!(benches);
