use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use primebench::{Method, SeededSource, TestParams};

/// The four methods side by side on the same inputs.
fn bench_methods(c: &mut Criterion) {
    let params = TestParams::default();
    let mut group = c.benchmark_group("primality");
    // 10^5 + 1 (composite), 100003 (prime), 561 (Carmichael)
    for value in [100_001i64, 100_003, 561] {
        for method in Method::ALL {
            let mut source = SeededSource::new(42);
            group.bench_with_input(
                BenchmarkId::new(method.label(), value),
                &value,
                |b, &v| b.iter(|| method.run(black_box(v), &params, &mut source)),
            );
        }
    }
    group.finish();
}

fn bench_large_prime(c: &mut Criterion) {
    // 2^61 - 1: out of reach for the sieve, slow for trial division
    let n = 2_305_843_009_213_693_951i64;
    let params = TestParams::default();
    let mut group = c.benchmark_group("mersenne_61");
    for method in [Method::Fermat, Method::MillerRabin] {
        let mut source = SeededSource::new(7);
        group.bench_function(method.label(), |b| {
            b.iter(|| method.run(black_box(n), &params, &mut source))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_methods, bench_large_prime);
criterion_main!(benches);
