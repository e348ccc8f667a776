#![cfg_attr(not(feature = "std"), no_std)]

//! # LXRHash
//!
//! Deterministic, keyed, variable-output hash built around a large seeded
//! lookup table. Every mixing step probes the table at a data-dependent
//! index, so a tuned instance costs ~8 random reads into a multi-megabyte
//! table per input byte: cheap to verify, memory-latency-bound to batch.
//! Built for proof-of-work workloads, not as a general cryptographic hash.

//! # Usage
//! ```rust
//! use lxrhash::LxrHash;
//!
//! // A small instance (1 KiB table) for illustration; PoW deployments use
//! // LxrHash::standard() with its 32 MiB table.
//! let lx = LxrHash::new(0xFAFA_ECEC_FAFA_ECEC, 10, 32, 5)?;
//!
//! // 1. One-shot hashing
//! let digest = lx.hash(b"Proof of Work");
//! assert_eq!(digest.len(), 32);
//!
//! // 2. Batched hashing (bit-identical, memory probes overlapped)
//! let digests = lx.hash_batch(&[b"block-0".as_slice(), b"block-1".as_slice()]);
//! assert_eq!(digests[0], lx.hash(b"block-0"));
//!
//! // 3. Nonce search: prime the shared prefix once, replay per candidate
//! let header = b"block header bytes";
//! let primed = lx.pre_hash(header);
//! let mut msg = header.to_vec();
//! msg.extend_from_slice(&7u64.to_le_bytes());
//! assert_eq!(lx.post_hash(&msg, header.len(), &primed), lx.hash(&msg));
//! # Ok::<(), lxrhash::LxrError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod bytemap;
pub mod constants;
mod engine;
mod hasher;
mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use hasher::{LxrHash, PrefixState};
pub use types::LxrError;
