//! Criterion benchmarks for u-bisect search drivers.
//!
//! Uses synthetic oracles (fixed thresholds, capacity packing) to measure
//! pure driver overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_bisect::bisect::{BisectRunner, RealBisectConfig, RealDomain, SearchDomain};
use u_bisect::oracle::GroupCapacityOracle;
use u_bisect::partition::PartitionRunner;

fn bench_minimize_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize_threshold");
    group.sample_size(10);

    for &span in &[1_000i64, 1_000_000, 1_000_000_000_000] {
        let domain = SearchDomain::new(0i64, span).unwrap();
        let threshold = span / 3;
        group.bench_with_input(BenchmarkId::from_parameter(span), &domain, |b, d| {
            b.iter(|| {
                let outcome = BisectRunner::minimize(*d, &|c: i64| c >= threshold);
                black_box(outcome)
            })
        });
    }
    group.finish();
}

fn bench_minimize_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize_capacity");
    group.sample_size(10);

    for &n in &[100usize, 1_000, 10_000] {
        let weights: Vec<i64> = (0..n as i64).map(|i| (i * 37) % 500 + 1).collect();
        let sum: i64 = weights.iter().sum();
        let oracle = GroupCapacityOracle::new(weights, n / 10 + 1);
        let domain = SearchDomain::new(1i64, sum).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(oracle, domain),
            |b, (o, d)| {
                b.iter(|| {
                    let outcome = BisectRunner::minimize(*d, o);
                    black_box(outcome)
                })
            },
        );
    }
    group.finish();
}

fn bench_minimize_real(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize_real");
    group.sample_size(10);

    for &epsilon in &[1e-6, 1e-9, 1e-12] {
        let domain = RealDomain::new(0.0, 1_000.0).unwrap();
        let config = RealBisectConfig::new(epsilon);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{epsilon:e}")),
            &config,
            |b, cfg| {
                b.iter(|| {
                    let result =
                        BisectRunner::minimize_real(domain, &|x: f64| x >= 661.977, cfg);
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_kth_of_two(c: &mut Criterion) {
    let mut group = c.benchmark_group("kth_of_two");
    group.sample_size(10);

    for &n in &[1_000usize, 100_000, 1_000_000] {
        let a: Vec<i64> = (0..n as i64).map(|i| i * 2).collect();
        let b: Vec<i64> = (0..n as i64).map(|i| i * 2 + 1).collect();
        let k = n; // middle of the merge
        group.bench_with_input(BenchmarkId::from_parameter(n), &(a, b), |bench, (a, b)| {
            bench.iter(|| {
                let kth = PartitionRunner::kth(black_box(a), black_box(b), k).unwrap();
                black_box(kth)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_minimize_threshold,
    bench_minimize_capacity,
    bench_minimize_real,
    bench_kth_of_two
);
criterion_main!(benches);
