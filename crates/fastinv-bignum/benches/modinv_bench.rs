//! Modular arithmetic benchmarks.
//!
//! Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fastinv_bignum::{modexp, modinv, BigInt};

/// Mersenne prime 2^e - 1 as a BigInt.
fn mersenne(e: usize) -> BigInt {
    let mut limbs = vec![u64::MAX; e / 64];
    if e % 64 != 0 {
        limbs.push((1u64 << (e % 64)) - 1);
    }
    BigInt::from_limbs(limbs)
}

fn bench_modinv(c: &mut Criterion) {
    let mut group = c.benchmark_group("modinv");

    // Word-sized operands hit the fixed-width fast path.
    let a_small = BigInt::from_u64(0x1234_5678_9ABC);
    let n_small = mersenne(61);
    group.bench_function("word/61", |b| {
        b.iter(|| modinv(&a_small, &n_small).unwrap());
    });

    // Prime moduli, so every nonzero operand is invertible.
    for e in [127usize, 521, 1279] {
        let n = mersenne(e);
        let a = BigInt::from_bytes_be(&vec![0xABu8; e / 8 - 1]);

        group.bench_with_input(BenchmarkId::new("bigint", e), &e, |b, _| {
            b.iter(|| modinv(&a, &n).unwrap());
        });
    }

    group.finish();
}

fn bench_modexp(c: &mut Criterion) {
    let mut group = c.benchmark_group("modexp");

    let g_small = BigInt::from_u64(3);
    let k_small = BigInt::from_u64(0x0FFF_FFFF_FFFF);
    let p_small = mersenne(61);
    group.bench_function("word/61", |b| {
        b.iter(|| modexp(&g_small, &k_small, &p_small).unwrap());
    });

    for e in [127usize, 521] {
        let p = mersenne(e);
        let g = BigInt::from_bytes_be(&vec![0x07u8; e / 8 - 1]);
        let k = BigInt::from_bytes_be(&vec![0x5Au8; e / 16]);

        group.bench_with_input(BenchmarkId::new("bigint", e), &e, |b, _| {
            b.iter(|| modexp(&g, &k, &p).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_modinv, bench_modexp);
criterion_main!(benches);
