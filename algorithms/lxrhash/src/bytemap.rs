//! ByteMap Builder
//!
//! Constructs the large lookup table every mixing step probes. The table is a
//! deterministic, seeded shuffle of a balanced byte fill: entry `i` starts as
//! `i mod 256`, and every shuffle step is a transposition, so each byte value
//! occurs exactly `map_size / 256` times in the finished table.
//!
//! The shuffle is self-referential: the rolling state that picks each swap
//! partner is stirred with bytes freshly read from the table itself, so the
//! arrangement after pass `n` feeds the swaps of pass `n + 1`.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::constants::WHITEN_ROUNDS;
use crate::types::LxrError;

// =============================================================================
// CONSTRUCTION
// =============================================================================

/// Build the table for `(seed, map_size_bits, passes)`.
///
/// The caller has already validated `map_size_bits`; the only error left is
/// the host refusing the allocation.
pub(crate) fn build(seed: u64, map_size_bits: u64, passes: u64) -> Result<Vec<u8>, LxrError> {
    let map_size = 1u64 << map_size_bits;
    let len = usize::try_from(map_size).map_err(|_| LxrError::Allocation { bytes: map_size })?;
    let mut map = allocate(len, map_size)?;

    // Balanced fill: i mod 256.
    map.extend((0..len).map(|i| i as u8));

    let mk = map_size - 1;
    let (mut a, mut b) = whiten(seed);

    for pass in 0..passes {
        a ^= pass;
        for i in 0..map.len() {
            let v = u64::from(map[i]);
            a = (a << 11) ^ (a >> 5) ^ (v << 27) ^ (v << 3) ^ i as u64;
            b = (b << 23) ^ (b >> 9) ^ (a << 13) ^ (a >> 17);
            let j = ((a ^ (b >> 7)) & mk) as usize;
            map.swap(i, j);
        }
    }

    Ok(map)
}

/// Spread the seed across both rolling words before the first swap.
///
/// A single flipped seed bit must not survive into the early swaps, or the
/// first positions of two neighbouring tables would still agree.
fn whiten(seed: u64) -> (u64, u64) {
    let mut a = seed;
    let mut b = !seed.rotate_left(32);
    for _ in 0..WHITEN_ROUNDS {
        a = (a << 13) ^ (a >> 7) ^ b.rotate_left(41);
        b = (b << 11) ^ (b >> 3) ^ a.rotate_left(29);
    }
    (a, b)
}

fn allocate(len: usize, map_size: u64) -> Result<Vec<u8>, LxrError> {
    let mut map = Vec::new();
    map.try_reserve_exact(len)
        .map_err(|_| LxrError::Allocation { bytes: map_size })?;
    Ok(map)
}

// =============================================================================
// TESTS
// =============================================================================
