//! Shared types used across the LXRHash library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

use crate::constants::{MAX_MAP_SIZE_BITS, MIN_MAP_SIZE_BITS};

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error for an invalid or unsatisfiable configuration.
///
/// Surfaced synchronously from [`LxrHash::new`](crate::LxrHash::new) and
/// [`LxrHash::with_table`](crate::LxrHash::with_table); hashing itself cannot
/// fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LxrError {
    /// The digest length must be at least 1 byte.
    InvalidHashSize,
    /// The table exponent is outside the supported range.
    MapSizeBits {
        /// The rejected exponent.
        bits: u64,
    },
    /// The host could not provide the table allocation.
    Allocation {
        /// Requested table size in bytes.
        bytes: u64,
    },
    /// A caller-supplied table does not match the configured map size.
    TableLength {
        /// Expected table length in bytes (`1 << map_size_bits`).
        expected: u64,
        /// Length of the supplied table.
        actual: u64,
    },
}

impl fmt::Display for LxrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHashSize => write!(f, "hash size must be at least 1 byte"),
            Self::MapSizeBits { bits } => write!(
                f,
                "map size of 2^{bits} bytes is outside the supported range \
                 (2^{MIN_MAP_SIZE_BITS} ..= 2^{MAX_MAP_SIZE_BITS})",
            ),
            Self::Allocation { bytes } => {
                write!(f, "failed to allocate {bytes} bytes for the byte map")
            }
            Self::TableLength { expected, actual } => write!(
                f,
                "supplied byte map holds {actual} bytes, configuration requires {expected}",
            ),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for LxrError {}
