//! Interleaved Multi-Input Engine
//!
//! Runs N independent hash states through the pipeline one mixing line at a
//! time, inner loop over the states. Per-state results are bit-identical to N
//! sequential single hashes; only the memory-access pattern changes. Each
//! mixing line issues its table probe for every state before the next line
//! runs, so the probes overlap as outstanding loads instead of serializing on
//! memory latency.
//!
//! All inputs in one batch must have equal length; the public API groups
//! mixed-length batches before calling in here.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// =============================================================================
// LANE STATE
// =============================================================================

/// One independent hash in flight: its input, its lanes, its running words.
struct Lane<'a> {
    src: &'a [u8],
    hs: Vec<u64>,
    a: u64,
    s1: u64,
    s2: u64,
    s3: u64,
    v2: u64,
}

// =============================================================================
// DRIVER
// =============================================================================

/// Hash `inputs` (all of equal length) in an interleaved walk.
pub(crate) fn run(
    map: &[u8],
    mk: u64,
    seed: u64,
    hash_size: usize,
    inputs: &[&[u8]],
) -> Vec<Vec<u8>> {
    if inputs.is_empty() {
        return Vec::new();
    }
    let len = inputs[0].len();
    debug_assert!(inputs.iter().all(|src| src.len() == len));

    let mut work: Vec<Lane<'_>> = inputs
        .iter()
        .map(|&src| Lane {
            src,
            hs: vec![0; hash_size],
            a: seed,
            s1: 0,
            s2: 0,
            s3: 0,
            v2: 0,
        })
        .collect();

    let probe = |v: u64| u64::from(map[(v & mk) as usize]);

    // Pass 1: priming spin, all states per byte position.
    let mut idx = 0;
    for i in 0..len {
        for h in &mut work {
            let v2 = u64::from(h.src[i]);
            let b = probe(h.a ^ v2);
            h.a = (h.a << 7)
                ^ (h.a >> 5)
                ^ (v2 << 20)
                ^ (v2 << 16)
                ^ v2
                ^ (b << 20)
                ^ (b << 12)
                ^ (b << 4);
            h.s1 = (h.s1 << 9) ^ (h.s1 >> 3) ^ h.hs[idx];
            h.hs[idx] = h.s1 ^ h.a;
            (h.s1, h.s2, h.s3) = (h.s3, h.s1, h.s2);
        }
        idx += 1;
        if idx == hash_size {
            idx = 0;
        }
    }

    // Pass 2: main mixing schedule.
    idx = 0;
    for i in 0..len {
        step(&mut work, map, mk, i, idx, false);
        idx += 1;
        if idx == hash_size {
            idx = 0;
        }
    }

    // Pass 3: reduction, descending over the lanes.
    let mut out: Vec<Vec<u8>> = work.iter().map(|_| vec![0u8; hash_size]).collect();
    for i in (0..hash_size).rev() {
        step(&mut work, map, mk, i, i, true);
        for (digest, h) in out.iter_mut().zip(&work) {
            digest[i] = (probe(h.a) as u8) ^ (probe(h.hs[i]) as u8);
        }
    }
    out
}

// =============================================================================
// INTERLEAVED MIXING STEP
// =============================================================================

/// One `step` of the mixing schedule, applied line by line across all states.
///
/// With `reduce` set, the byte position `i` indexes the lane array instead of
/// the input, feeding the accumulated 64-bit lane back in as `v2`.
#[allow(clippy::too_many_lines)]
fn step(work: &mut [Lane<'_>], map: &[u8], mk: u64, i: usize, idx: usize, reduce: bool) {
    let probe = |v: u64| u64::from(map[(v & mk) as usize]);

    for h in work.iter_mut() {
        h.v2 = if reduce {
            h.hs[i]
        } else {
            u64::from(h.src[i])
        };
        h.s1 = (h.s1 << 9) ^ (h.s1 >> 1) ^ h.a ^ (probe((h.a >> 5) ^ h.v2) << 3);
    }
    for h in work.iter_mut() {
        h.s1 = (h.s1 << 5) ^ (h.s1 >> 3) ^ (probe(h.s1 ^ h.v2) << 7);
    }
    for h in work.iter_mut() {
        h.s1 = (h.s1 << 7) ^ (h.s1 >> 7) ^ (probe(h.a ^ (h.s1 >> 7)) << 5);
    }
    for h in work.iter_mut() {
        h.s1 = (h.s1 << 11) ^ (h.s1 >> 5) ^ (probe(h.v2 ^ (h.a >> 11) ^ h.s1) << 27);
        h.hs[idx] = h.s1 ^ h.a ^ (h.hs[idx] << 7) ^ (h.hs[idx] >> 13);
    }
    for h in work.iter_mut() {
        h.a = (h.a << 17) ^ (h.a >> 5) ^ h.s1 ^ (probe(h.a ^ (h.s1 >> 27) ^ h.v2) << 3);
    }
    for h in work.iter_mut() {
        h.a = (h.a << 13) ^ (h.a >> 3) ^ (probe(h.a ^ h.s1) << 7);
    }
    for h in work.iter_mut() {
        h.a = (h.a << 15) ^ (h.a >> 7) ^ (probe((h.a >> 7) ^ h.s1) << 11);
    }
    for h in work.iter_mut() {
        h.a = (h.a << 9) ^ (h.a >> 11) ^ (probe(h.v2 ^ h.a ^ h.s1) << 3);
    }
    for h in work.iter_mut() {
        h.s1 = (h.s1 << 7) ^ (h.s1 >> 27) ^ h.a ^ (probe(h.a >> 3) << 13);
    }
    for h in work.iter_mut() {
        h.s1 = (h.s1 << 3) ^ (h.s1 >> 13) ^ (probe(h.s1 ^ h.v2) << 11);
    }
    for h in work.iter_mut() {
        h.s1 = (h.s1 << 8) ^ (h.s1 >> 11) ^ (probe(h.a ^ (h.s1 >> 11)) << 9);
    }
    for h in work.iter_mut() {
        h.s1 = (h.s1 << 6) ^ (h.s1 >> 9) ^ (probe(h.v2 ^ h.a ^ h.s1) << 3);
    }
    for h in work.iter_mut() {
        h.a = (h.a << 23) ^ (h.a >> 3) ^ h.s1 ^ (probe(h.a ^ h.v2 ^ (h.s1 >> 3)) << 7);
    }
    for h in work.iter_mut() {
        h.a = (h.a << 17) ^ (h.a >> 7) ^ (probe(h.a ^ (h.s1 >> 3)) << 5);
    }
    for h in work.iter_mut() {
        h.a = (h.a << 13) ^ (h.a >> 5) ^ (probe((h.a >> 5) ^ h.s1) << 1);
    }
    for h in work.iter_mut() {
        h.a = (h.a << 11) ^ (h.a >> 1) ^ (probe(h.v2 ^ h.a ^ h.s1) << 7);
    }

    for h in work.iter_mut() {
        h.s1 = (h.s1 << 5) ^ (h.s1 >> 3) ^ h.a ^ (probe((h.a >> 7) ^ (h.s1 >> 3)) << 6);
    }
    for h in work.iter_mut() {
        h.s1 = (h.s1 << 8) ^ (h.s1 >> 6) ^ (probe(h.s1 ^ h.v2) << 11);
    }
    for h in work.iter_mut() {
        h.s1 = (h.s1 << 11) ^ (h.s1 >> 11) ^ (probe(h.a ^ (h.s1 >> 11)) << 5);
    }
    for h in work.iter_mut() {
        h.s1 = (h.s1 << 7) ^ (h.s1 >> 5) ^ (probe(h.v2 ^ (h.a >> 7) ^ h.a ^ h.s1) << 17);
    }

    for h in work.iter_mut() {
        h.s2 = (h.s2 << 3) ^ (h.s2 >> 17) ^ h.s1 ^ (probe(h.a ^ (h.s2 >> 5) ^ h.v2) << 13);
    }
    for h in work.iter_mut() {
        h.s2 = (h.s2 << 6) ^ (h.s2 >> 13) ^ (probe(h.s2) << 11);
    }
    for h in work.iter_mut() {
        h.s2 = (h.s2 << 11) ^ (h.s2 >> 11) ^ (probe(h.a ^ h.s1 ^ (h.s2 >> 11)) << 23);
    }
    for h in work.iter_mut() {
        h.s2 = (h.s2 << 4) ^ (h.s2 >> 23) ^ (probe(h.v2 ^ (h.a >> 8) ^ h.a ^ (h.s2 >> 10)) << 1);
        h.s1 = (h.s2 << 3) ^ (h.s2 >> 1) ^ h.hs[idx] ^ h.v2;
    }
    for h in work.iter_mut() {
        h.a = (h.a << 9) ^ (h.a >> 7) ^ (h.s1 >> 1) ^ (probe((h.s2 >> 1) ^ h.hs[idx]) << 5);
        (h.s1, h.s2, h.s3) = (h.s3, h.s1, h.s2);
    }
}
