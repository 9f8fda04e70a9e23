//! GF(2^n) arithmetic benchmarks
//!
//! Usage:
//!   cargo bench -p gf2n-field              # run all benchmarks
//!   cargo bench -p gf2n-field -- inverse   # inversion only

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gf2n_field::{full_divide, moduli, mul_no_reduction, FieldElement, Modulus};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn fields() -> Vec<(&'static str, Modulus)> {
    vec![
        ("2^8", Modulus::from(moduli::GF2_8)),
        ("2^16", Modulus::from(moduli::GF2_16)),
        ("2^17", Modulus::from(moduli::GF2_17)),
    ]
}

fn random_nonzero(rng: &mut ChaCha8Rng, p: &Modulus) -> FieldElement {
    loop {
        let e = FieldElement::random(rng, p);
        if !e.is_zero() {
            return e;
        }
    }
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for (name, p) in fields() {
        let a = random_nonzero(&mut rng, &p);
        let b = random_nonzero(&mut rng, &p);

        group.bench_function(BenchmarkId::new("reduced", name), |bench| {
            bench.iter(|| black_box(black_box(&a).try_mul(black_box(&b)).unwrap()))
        });
        group.bench_function(BenchmarkId::new("unreduced", name), |bench| {
            bench.iter(|| black_box(mul_no_reduction(black_box(&a), black_box(&b)).unwrap()))
        });
    }

    group.finish();
}

fn bench_divide(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_divide");
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    for (name, p) in fields() {
        let a = random_nonzero(&mut rng, &p);
        let b = random_nonzero(&mut rng, &p);
        let product = mul_no_reduction(&a, &b).unwrap();
        let ideal = p.to_element();

        group.bench_function(BenchmarkId::new("reduce", name), |bench| {
            bench.iter(|| black_box(full_divide(black_box(&product), black_box(&ideal)).unwrap()))
        });
    }

    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    for (name, p) in fields() {
        let a = random_nonzero(&mut rng, &p);

        group.bench_function(BenchmarkId::new("euclid", name), |bench| {
            bench.iter(|| black_box(black_box(&a).inverse().unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mul, bench_divide, bench_inverse);
criterion_main!(benches);
