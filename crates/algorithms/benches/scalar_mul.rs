//! Benchmarks for scalar multiplication on every registered curve
//!
//! Covers the fixed-base path (key generation, signing), the variable-base
//! path (ECIES shared secrets) and point decompression.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use secc_algorithms::ec::{Curve, NistP192, NistP224, NistP256, Point, Scalar, Secp160r1, Secp256k1};

fn bench_curve<C: Curve>(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_mul");
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let name = C::PARAMS.name;

    let k = Scalar::<C>::random(&mut rng).unwrap();
    let q = Point::<C>::mul_base(Scalar::<C>::random(&mut rng).unwrap().as_element());
    let encoded = q.to_compressed();

    group.bench_with_input(BenchmarkId::new("fixed_base", name), &k, |b, k| {
        b.iter(|| black_box(Point::<C>::mul_base(black_box(k.as_element()))));
    });

    group.bench_with_input(BenchmarkId::new("variable_base", name), &k, |b, k| {
        b.iter(|| black_box(q.mul(black_box(k.as_element()))));
    });

    group.bench_with_input(BenchmarkId::new("decompress", name), &encoded, |b, bytes| {
        b.iter(|| black_box(Point::<C>::from_compressed(black_box(bytes)).unwrap()));
    });

    group.finish();
}

fn bench_all(c: &mut Criterion) {
    bench_curve::<Secp160r1>(c);
    bench_curve::<NistP192>(c);
    bench_curve::<NistP224>(c);
    bench_curve::<NistP256>(c);
    bench_curve::<Secp256k1>(c);
}

criterion_group!(benches, bench_all);
criterion_main!(benches);
