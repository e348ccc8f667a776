//! LXRHash Criterion Benchmark
//!
//! Statistically rigorous performance measurements across input sizes and
//! table sizes. The interesting axis is the table: once it outgrows the
//! cache hierarchy, every probe is a DRAM round trip and throughput is set
//! by memory latency, not arithmetic.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use lxrhash::LxrHash;
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for small inputs (nonce candidates, block headers).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");
    let lx = LxrHash::new(lxrhash::constants::DEFAULT_SEED, 16, 32, 5).unwrap();

    let sizes = [(16, "16B"), (64, "64B"), (256, "256B"), (KB, "1KB")];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| lx.hash(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: TABLE SIZE
// =============================================================================

/// Same input, growing table: L2-resident, L3-resident, DRAM-resident.
fn bench_table_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Table-Size");
    group.sample_size(50);

    let mut input = vec![0u8; 4 * KB];
    rand::rng().fill(&mut input[..]);

    for bits in [16u64, 20, 25] {
        let lx = LxrHash::new(lxrhash::constants::DEFAULT_SEED, bits, 32, 5).unwrap();
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(format!("2^{bits}")),
            &input,
            |b, data| b.iter(|| lx.hash(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: LONG INPUTS
// =============================================================================

/// Sustained throughput over long messages.
fn bench_long_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Long-Inputs");
    group.sample_size(20);

    let lx = LxrHash::new(lxrhash::constants::DEFAULT_SEED, 20, 32, 5).unwrap();

    let sizes = [(64 * KB, "64KB"), (MB, "1MB"), (4 * MB, "4MB")];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| lx.hash(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: TABLE CONSTRUCTION
// =============================================================================

/// One-time cost of building the shuffled table.
fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Table-Build");
    group.sample_size(10);

    for bits in [16u64, 20] {
        group.bench_function(format!("2^{bits}-5-passes"), |b| {
            b.iter(|| LxrHash::new(black_box(0xFAFA_ECEC_FAFA_ECEC), bits, 32, 5).unwrap())
        });
    }
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_table_size,
    bench_long_inputs,
    bench_table_build,
);

criterion_main!(benches);
