//! Public API Layer
//!
//! [`LxrHash`] owns one immutable configuration and its shuffled table, and
//! exposes the one-shot, batched, and split (prefix/replay) hashing forms.
//! The table is never mutated after construction, so a single instance may be
//! shared freely across threads.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use subtle::ConstantTimeEq;

use crate::bytemap;
use crate::constants::{
    DEFAULT_HASH_SIZE, DEFAULT_MAP_SIZE_BITS, DEFAULT_PASSES, DEFAULT_SEED, MAX_MAP_SIZE_BITS,
    MIN_MAP_SIZE_BITS,
};
use crate::engine::{batch, mixer::Mixer};
use crate::types::LxrError;

// =============================================================================
// HASHER
// =============================================================================

/// One instance of the hash function: a seed, a digest length, and the
/// shuffled lookup table built for them.
///
/// # Example
/// ```rust
/// let lx = lxrhash::LxrHash::new(0xFAFA_ECEC_FAFA_ECEC, 10, 32, 5)?;
/// let digest = lx.hash(b"Proof of Work");
/// assert_eq!(digest.len(), 32);
/// # Ok::<(), lxrhash::LxrError>(())
/// ```
#[derive(Clone, Debug)]
pub struct LxrHash {
    byte_map: Vec<u8>,
    map_size_bits: u64,
    hash_size: usize,
    passes: u64,
    seed: u64,
    mk: u64,
}

/// Snapshot of the priming pass over a fixed message prefix.
///
/// Produced by [`LxrHash::pre_hash`] and replayed per candidate suffix by
/// [`LxrHash::post_hash`], so a nonce search pays for the prefix spin once.
#[derive(Clone)]
pub struct PrefixState {
    pub(crate) hs: Vec<u64>,
    pub(crate) a: u64,
    pub(crate) s1: u64,
    pub(crate) s2: u64,
    pub(crate) s3: u64,
}

impl LxrHash {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Build the table for `(seed, map_size_bits, passes)` and store the
    /// configuration. Allocates `1 << map_size_bits` bytes.
    ///
    /// # Errors
    /// [`LxrError::InvalidHashSize`] if `hash_size == 0`,
    /// [`LxrError::MapSizeBits`] if the exponent is outside the supported
    /// range, [`LxrError::Allocation`] if the host refuses the table.
    pub fn new(
        seed: u64,
        map_size_bits: u64,
        hash_size: u64,
        passes: u64,
    ) -> Result<Self, LxrError> {
        let hash_size = check_params(map_size_bits, hash_size)?;
        let byte_map = bytemap::build(seed, map_size_bits, passes)?;
        Ok(Self {
            mk: (byte_map.len() - 1) as u64,
            byte_map,
            map_size_bits,
            hash_size,
            passes,
            seed,
        })
    }

    /// The canonical PoW instance: 32 MiB table, 5 passes, 256-bit digests.
    ///
    /// # Errors
    /// [`LxrError::Allocation`] if the host refuses the 32 MiB table.
    pub fn standard() -> Result<Self, LxrError> {
        Self::new(
            DEFAULT_SEED,
            DEFAULT_MAP_SIZE_BITS,
            DEFAULT_HASH_SIZE,
            DEFAULT_PASSES,
        )
    }

    /// Adopt a previously built table instead of regenerating it.
    ///
    /// Determinism makes the table cacheable as raw bytes; this is the
    /// loading side of that cache. The caller asserts that `byte_map` was
    /// built for the same `(seed, map_size_bits, passes)`; only the length
    /// is checked here.
    ///
    /// # Errors
    /// As [`LxrHash::new`], plus [`LxrError::TableLength`] when the supplied
    /// table is not exactly `1 << map_size_bits` bytes.
    pub fn with_table(
        seed: u64,
        map_size_bits: u64,
        hash_size: u64,
        passes: u64,
        byte_map: Vec<u8>,
    ) -> Result<Self, LxrError> {
        let hash_size = check_params(map_size_bits, hash_size)?;
        let expected = 1u64 << map_size_bits;
        if byte_map.len() as u64 != expected {
            return Err(LxrError::TableLength {
                expected,
                actual: byte_map.len() as u64,
            });
        }
        Ok(Self {
            mk: expected - 1,
            byte_map,
            map_size_bits,
            hash_size,
            passes,
            seed,
        })
    }

    // =========================================================================
    // HASHING
    // =========================================================================

    /// Hash `src` into a `hash_size`-byte digest.
    ///
    /// Pure function of the configuration and the input; cannot fail. The
    /// empty input is valid and produces a digest from the reduction pass
    /// alone.
    #[must_use]
    pub fn hash(&self, src: &[u8]) -> Vec<u8> {
        let mut mixer = Mixer::new(&self.byte_map, self.mk, self.seed, self.hash_size);
        mixer.prime(src, 0);
        mixer.absorb(src);
        let mut out = vec![0u8; self.hash_size];
        mixer.reduce(&mut out);
        out
    }

    /// Compare `hash(input)` against an expected digest in constant time.
    #[must_use]
    pub fn verify(&self, input: &[u8], expected: &[u8]) -> bool {
        let computed = self.hash(input);
        computed.as_slice().ct_eq(expected).into()
    }

    // =========================================================================
    // BATCHED HASHING
    // =========================================================================

    /// Hash many inputs in an interleaved walk, byte position by byte
    /// position across all of them.
    ///
    /// Digests are bit-identical to calling [`hash`](Self::hash) on each
    /// input; only throughput changes, because the per-state table probes
    /// overlap instead of serializing on memory latency. Inputs of unequal
    /// length are grouped by length and each group interleaved on its own.
    #[must_use]
    pub fn hash_batch(&self, inputs: &[&[u8]]) -> Vec<Vec<u8>> {
        let mut order: Vec<usize> = (0..inputs.len()).collect();
        order.sort_by_key(|&i| inputs[i].len());

        let mut out: Vec<Vec<u8>> = vec![Vec::new(); inputs.len()];
        let mut start = 0;
        while start < order.len() {
            let len = inputs[order[start]].len();
            let mut end = start + 1;
            while end < order.len() && inputs[order[end]].len() == len {
                end += 1;
            }
            let group: Vec<&[u8]> = order[start..end].iter().map(|&i| inputs[i]).collect();
            let digests = batch::run(&self.byte_map, self.mk, self.seed, self.hash_size, &group);
            for (&i, digest) in order[start..end].iter().zip(digests) {
                out[i] = digest;
            }
            start = end;
        }
        out
    }

    /// Batched form of hashing `prefix || suffix` for every suffix.
    ///
    /// Equivalent to concatenating each pair and calling
    /// [`hash_batch`](Self::hash_batch).
    #[must_use]
    pub fn hash_batch_prefixed(&self, prefix: &[u8], suffixes: &[&[u8]]) -> Vec<Vec<u8>> {
        let messages: Vec<Vec<u8>> = suffixes
            .iter()
            .map(|suffix| {
                let mut msg = Vec::with_capacity(prefix.len() + suffix.len());
                msg.extend_from_slice(prefix);
                msg.extend_from_slice(suffix);
                msg
            })
            .collect();
        let views: Vec<&[u8]> = messages.iter().map(Vec::as_slice).collect();
        self.hash_batch(&views)
    }

    /// Hash many independent inputs across a thread pool.
    ///
    /// The table is borrowed read-only by every worker; results are
    /// bit-identical to the sequential loop.
    #[cfg(feature = "multithread")]
    #[must_use]
    pub fn hash_many(&self, inputs: &[&[u8]]) -> Vec<Vec<u8>> {
        use rayon::prelude::*;
        inputs.par_iter().map(|src| self.hash(src)).collect()
    }

    // =========================================================================
    // SPLIT HASHING (NONCE SEARCH)
    // =========================================================================

    /// Run the priming pass over a fixed prefix and snapshot the state.
    #[must_use]
    pub fn pre_hash(&self, prefix: &[u8]) -> PrefixState {
        let mut mixer = Mixer::new(&self.byte_map, self.mk, self.seed, self.hash_size);
        mixer.prime(prefix, 0);
        mixer.into_state()
    }

    /// Finish hashing `src` from a prefix snapshot.
    ///
    /// `state` must come from [`pre_hash`](Self::pre_hash) over
    /// `src[..prefix_len]` on this instance; the digest then equals
    /// `self.hash(src)`. The priming pass resumes at `prefix_len`, after
    /// which the main and reduction passes run over the whole message.
    ///
    /// # Panics
    /// If `prefix_len` exceeds `src.len()` or `state` was taken from an
    /// instance with a different digest length.
    #[must_use]
    pub fn post_hash(&self, src: &[u8], prefix_len: usize, state: &PrefixState) -> Vec<u8> {
        assert!(
            prefix_len <= src.len(),
            "prefix length {prefix_len} exceeds message length {}",
            src.len()
        );
        assert_eq!(
            state.hs.len(),
            self.hash_size,
            "prefix state carries {} lanes, configuration has {}",
            state.hs.len(),
            self.hash_size
        );
        let mut mixer = Mixer::resume(&self.byte_map, self.mk, state);
        mixer.prime(&src[prefix_len..], prefix_len);
        mixer.absorb(src);
        let mut out = vec![0u8; self.hash_size];
        mixer.reduce(&mut out);
        out
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// The table seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The table size exponent.
    #[must_use]
    pub const fn map_size_bits(&self) -> u64 {
        self.map_size_bits
    }

    /// The table size in bytes (`1 << map_size_bits`).
    #[must_use]
    pub const fn map_size(&self) -> u64 {
        self.mk + 1
    }

    /// The digest length in bytes.
    #[must_use]
    pub const fn hash_size(&self) -> usize {
        self.hash_size
    }

    /// The number of shuffle passes the table was built with.
    #[must_use]
    pub const fn passes(&self) -> u64 {
        self.passes
    }

    /// The shuffled table itself, e.g. for writing a raw-byte cache file.
    #[must_use]
    pub fn byte_map(&self) -> &[u8] {
        &self.byte_map
    }
}

fn check_params(map_size_bits: u64, hash_size: u64) -> Result<usize, LxrError> {
    if !(MIN_MAP_SIZE_BITS..=MAX_MAP_SIZE_BITS).contains(&map_size_bits) {
        return Err(LxrError::MapSizeBits {
            bits: map_size_bits,
        });
    }
    match usize::try_from(hash_size) {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(LxrError::InvalidHashSize),
    }
}
