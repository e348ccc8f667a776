//! Execution Strategy Comparison Benchmark
//!
//! Compares the throughput shapes of the same function: sequential one-shot
//! hashing, the interleaved batch walk, Rayon fan-out, and the prefix-replay
//! path used by nonce searches. All four produce bit-identical digests; the
//! interleaved walk exists to keep more table probes in flight per core.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use lxrhash::LxrHash;
use rand::prelude::*;
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("LXRHash Strategies");

    // DRAM-resident table so the memory-level parallelism of the batch walk
    // is visible; smaller tables hide it in the cache.
    let lx = LxrHash::new(lxrhash::constants::DEFAULT_SEED, 25, 32, 5).unwrap();

    for batch in [8usize, 64] {
        let inputs: Vec<Vec<u8>> = (0..batch)
            .map(|_| {
                let mut buf = vec![0u8; 64];
                rand::rng().fill(&mut buf[..]);
                buf
            })
            .collect();
        let views: Vec<&[u8]> = inputs.iter().map(Vec::as_slice).collect();
        group.throughput(Throughput::Bytes((batch * 64) as u64));

        // 1. Sequential baseline
        group.bench_function(format!("Sequential - {batch} inputs"), |b| {
            b.iter(|| {
                views
                    .iter()
                    .map(|v| lx.hash(black_box(v)))
                    .collect::<Vec<_>>()
            });
        });

        // 2. Interleaved batch (single thread, overlapped probes)
        group.bench_function(format!("Interleaved - {batch} inputs"), |b| {
            b.iter(|| lx.hash_batch(black_box(&views)));
        });

        // 3. Rayon fan-out (many threads, independent hashes)
        group.bench_function(format!("Rayon - {batch} inputs"), |b| {
            b.iter(|| lx.hash_many(black_box(&views)));
        });
    }
    group.finish();
}

fn bench_nonce_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Nonce Search");

    let lx = LxrHash::new(lxrhash::constants::DEFAULT_SEED, 25, 32, 5).unwrap();
    let mut header = vec![0u8; 512];
    rand::rng().fill(&mut header[..]);

    // 1. Full rehash per candidate
    group.bench_function("full-rehash", |b| {
        let mut nonce = 0u64;
        b.iter(|| {
            nonce += 1;
            let mut msg = header.clone();
            msg.extend_from_slice(&nonce.to_le_bytes());
            lx.hash(black_box(&msg))
        });
    });

    // 2. Prefix primed once, replayed per candidate
    group.bench_function("prefix-replay", |b| {
        let primed = lx.pre_hash(&header);
        let mut nonce = 0u64;
        b.iter(|| {
            nonce += 1;
            let mut msg = header.clone();
            msg.extend_from_slice(&nonce.to_le_bytes());
            lx.post_hash(black_box(&msg), header.len(), &primed)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_nonce_search);
criterion_main!(benches);
