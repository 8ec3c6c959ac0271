//! Criterion benchmarks for pricer_models closed forms.
//!
//! Measures the normal CDF, vanilla price-plus-Greeks evaluation and the
//! eight-leg barrier evaluation in both regimes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::config::PrecisionConfig;
use pricer_core::types::OptionType;
use pricer_models::analytical::{
    norm_cdf, price_barrier, price_vanilla, BarrierPricer, BarrierRequest, VanillaPricer,
};

/// Benchmark the normal CDF on both sides of the rational/continued-fraction switch.
fn bench_norm_cdf(c: &mut Criterion) {
    let mut group = c.benchmark_group("norm_cdf");

    for x in [0.5_f64, -3.0, -8.5] {
        group.bench_with_input(BenchmarkId::from_parameter(x), &x, |b, &x| {
            b.iter(|| norm_cdf(black_box(x)));
        });
    }

    group.finish();
}

/// Benchmark vanilla pricing at full precision and through the rounded entry point.
fn bench_vanilla(c: &mut Criterion) {
    let mut group = c.benchmark_group("vanilla");
    let pricer = VanillaPricer::new(100.0_f64, 0.05, 0.2);

    group.bench_function("evaluate_call", |b| {
        b.iter(|| pricer.evaluate(black_box(100.0), black_box(1.0), OptionType::Call));
    });

    group.bench_function("price_vanilla_tagged", |b| {
        b.iter(|| price_vanilla(black_box(100.0), 100.0, 1.0, 0.05, 0.2, black_box("Put")));
    });

    group.finish();
}

/// Benchmark the barrier pricer in each regime.
fn bench_barrier(c: &mut Criterion) {
    let mut group = c.benchmark_group("barrier");
    let precision = PrecisionConfig::default();

    for barrier in [90.0_f64, 120.0] {
        let pricer = BarrierPricer::new(BarrierRequest::new(100.0, 100.0, 1.0, 0.05, 0.2, barrier));

        group.bench_with_input(BenchmarkId::new("evaluate", barrier), &pricer, |b, pricer| {
            b.iter(|| black_box(pricer).evaluate());
        });
        group.bench_with_input(BenchmarkId::new("price", barrier), &pricer, |b, pricer| {
            b.iter(|| black_box(pricer).price(&precision));
        });
    }

    group.bench_function("price_barrier_flat", |b| {
        b.iter(|| price_barrier(black_box(100.0), 100.0, 1.0, 0.05, 0.2, black_box(110.0), 0.0));
    });

    group.finish();
}

criterion_group!(benches, bench_norm_cdf, bench_vanilla, bench_barrier);
criterion_main!(benches);
