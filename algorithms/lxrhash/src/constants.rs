//! LXRHash Parameter Constants
//!
//! The defaults reproduce the canonical PoW configuration: a 32 MiB table
//! (2^25 bytes) shuffled in 5 passes, producing 256-bit digests.

// =============================================================================
// DEFAULT CONFIGURATION
// =============================================================================

/// Default table seed for the canonical PoW instance.
pub const DEFAULT_SEED: u64 = 0xFAFA_ECEC_FAFA_ECEC;

/// Default table size exponent: 2^25 bytes (32 MiB).
pub const DEFAULT_MAP_SIZE_BITS: u64 = 25;

/// Default digest length in bytes (256-bit).
pub const DEFAULT_HASH_SIZE: u64 = 32;

/// Default number of shuffle passes over the table.
pub const DEFAULT_PASSES: u64 = 5;

// =============================================================================
// SUPPORTED RANGES
// =============================================================================

/// Smallest supported table exponent (256-byte table).
///
/// Below this the table cannot hold every byte value once, so the balance
/// invariant of the shuffle would be meaningless.
pub const MIN_MAP_SIZE_BITS: u64 = 8;

/// Largest supported table exponent (16 GiB table).
pub const MAX_MAP_SIZE_BITS: u64 = 34;

/// Number of seed-whitening rounds applied before the table shuffle.
pub(crate) const WHITEN_ROUNDS: usize = 4;
