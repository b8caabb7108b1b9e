//! Benchmarks for point arithmetic and dimension-adapting conversion.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ndpoint::{Point, point2_from, point3_from};

/// Sample point of dimension `N` with distinct components.
fn sample<const N: usize>() -> Point<f64, N> {
    Point::from_fn(|i| i as f64 * 0.5 + 1.0)
}

/// Benchmark `+`, `-` and scalar `*` at a few dimensions.
fn bench_arithmetic(c: &mut Criterion) {
    macro_rules! arithmetic_at {
        ($group:ident: $($dim:literal),*) => {
            $(
                let a = sample::<$dim>();
                let b = sample::<$dim>() * 2.0;

                $group.bench_function(BenchmarkId::new("add", $dim), |bench| {
                    bench.iter(|| black_box(a) + black_box(b))
                });
                $group.bench_function(BenchmarkId::new("sub", $dim), |bench| {
                    bench.iter(|| black_box(a) - black_box(b))
                });
                $group.bench_function(BenchmarkId::new("scale", $dim), |bench| {
                    bench.iter(|| black_box(a) * black_box(3.0))
                });
            )*
        };
    }

    let mut group = c.benchmark_group("arithmetic");
    arithmetic_at!(group: 2, 3, 8, 64);

    group.finish();
}

/// Benchmark truncating and padding conversions.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    let wide = sample::<16>();
    let flat = sample::<2>();

    group.bench_function("point2_from/16d", |b| {
        b.iter(|| point2_from(black_box(&wide)))
    });
    group.bench_function("point3_from/2d", |b| {
        b.iter(|| point3_from(black_box(&flat)))
    });
    group.bench_function("resize/2d-to-16d", |b| {
        b.iter(|| black_box(&flat).resize::<16>())
    });

    group.finish();
}

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
mod bench_defs {
    use super::*;
    criterion_group!(benches, bench_arithmetic, bench_convert);
}

pub use bench_defs::benches;
criterion_main!(benches);
