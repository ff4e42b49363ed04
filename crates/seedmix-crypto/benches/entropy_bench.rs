//! Performance benchmarks for seedmix-crypto.
//!
//! Run with: `cargo bench -p seedmix-crypto`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use seedmix_crypto::hash::sha3_512;
use seedmix_crypto::mix::mixed_block;
use seedmix_crypto::random::{OsEntropy, RngSource, random_block};
use seedmix_crypto::{Mode, OUTPUT_SIZE, run};

// ============================================================================
// Acquisition Benchmarks
// ============================================================================

fn bench_os_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("acquire");
    group.throughput(Throughput::Bytes(OUTPUT_SIZE as u64));

    group.bench_function("os_block", |b| {
        b.iter(|| random_block(black_box(&mut OsEntropy)).unwrap())
    });

    group.bench_function("seeded_rng_block", |b| {
        let mut source = RngSource::new(StdRng::seed_from_u64(42));
        b.iter(|| random_block(black_box(&mut source)).unwrap())
    });

    group.finish();
}

// ============================================================================
// Mixing Benchmarks
// ============================================================================

fn bench_sha3(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha3_512");

    let sizes = [64, 192, 1024, 65536];

    for size in sizes {
        let data = vec![0xAA; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| sha3_512(black_box(&data)))
        });
    }

    group.finish();
}

fn bench_mixed_block(c: &mut Criterion) {
    c.bench_function("mixed_block_os", |b| {
        b.iter(|| mixed_block(black_box(&mut OsEntropy)).unwrap())
    });
}

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("run");

    for mode in [Mode::Raw, Mode::Mixed] {
        group.bench_with_input(BenchmarkId::from_parameter(mode), &mode, |b, &mode| {
            let mut sink = Vec::with_capacity(OUTPUT_SIZE);
            b.iter(|| {
                sink.clear();
                run(mode, &mut OsEntropy, &mut sink).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(acquire_benches, bench_os_block);

criterion_group!(mix_benches, bench_sha3, bench_mixed_block, bench_run);

criterion_main!(acquire_benches, mix_benches);
