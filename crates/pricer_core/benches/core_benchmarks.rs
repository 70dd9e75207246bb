//! Criterion benchmarks for pricer_core numerical helpers.
//!
//! Measures trading-day counting, linear interpolation and tridiagonal
//! solves at the sizes the pricing engines use.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::calendar::{HolidayCalendar, TradingCalendar};
use pricer_core::math::interpolators::{Interpolator, LinearInterpolator};
use pricer_core::math::linalg::TridiagonalLu;
use pricer_core::types::Date;

/// Benchmark closed-form counting against enumeration over growing spans.
fn bench_trading_days(c: &mut Criterion) {
    let mut group = c.benchmark_group("trading_days");
    let start = Date::from_ymd(2020, 1, 1).unwrap();
    let holidays: Vec<Date> = (0..200u64)
        .map(|i| start.add_days(i * 11).unwrap())
        .collect();
    let calendar = HolidayCalendar::new(holidays, 252).unwrap();

    for years in [1u64, 5, 20] {
        let end = start.add_days(365 * years).unwrap();
        group.bench_with_input(BenchmarkId::new("count", years), &end, |b, end| {
            b.iter(|| calendar.count_trading_days(black_box(start), black_box(*end)))
        });
        group.bench_with_input(BenchmarkId::new("enumerate", years), &end, |b, end| {
            b.iter(|| calendar.trading_days(black_box(start), black_box(*end)).len())
        });
    }
    group.finish();
}

/// Benchmark interpolation lookups on uniform grids.
fn bench_linear_interpolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_interpolation");

    for size in [101usize, 401, 1601] {
        let xs: Vec<f64> = (0..size).map(|i| i as f64).collect();
        let ys: Vec<f64> = xs.iter().map(|x| (x * 0.01).sin()).collect();
        let interp = LinearInterpolator::new(xs, ys).unwrap();
        let query = size as f64 * 0.37;

        group.bench_with_input(BenchmarkId::new("lookup", size), &query, |b, q| {
            b.iter(|| interp.interpolate(black_box(*q)))
        });
    }
    group.finish();
}

/// Benchmark factorisation and repeated solves.
fn bench_tridiagonal(c: &mut Criterion) {
    let mut group = c.benchmark_group("tridiagonal");

    for size in [100usize, 400, 1600] {
        let lower = vec![-1.0; size - 1];
        let diag = vec![2.5; size];
        let upper = vec![-1.0; size - 1];
        let rhs = vec![1.0; size];
        let lu = TridiagonalLu::factorise(&lower, &diag, &upper).unwrap();
        let mut out = vec![0.0; size];

        group.bench_with_input(BenchmarkId::new("factorise", size), &size, |b, _| {
            b.iter(|| TridiagonalLu::factorise(black_box(&lower), &diag, &upper))
        });
        group.bench_with_input(BenchmarkId::new("solve", size), &size, |b, _| {
            b.iter(|| lu.solve(black_box(&rhs), &mut out))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_trading_days,
    bench_linear_interpolation,
    bench_tridiagonal
);
criterion_main!(benches);
