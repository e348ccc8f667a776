//! Single-Input Mixer
//!
//! Walks one input through the three passes of the pipeline: a cheap priming
//! spin (`fast_step`), the main mixing schedule (`step`), and the descending
//! reduction that collapses each 64-bit lane to one digest byte.
//!
//! Every table probe masks its index expression with `mk`, and the fetched
//! byte is shifted back into the state so that it steers the index of the
//! probes that follow, in the low bits (moving locally in the table) as well
//! as the high bits (jumping across it).

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::hasher::PrefixState;

// =============================================================================
// MIXER STATE
// =============================================================================

/// Transient per-hash state: four running words plus one 64-bit lane per
/// digest byte. `a` carries long-range accumulation; `s1`/`s2`/`s3` rotate
/// after every step to carry recent history.
pub(crate) struct Mixer<'m> {
    map: &'m [u8],
    mk: u64,
    hs: Vec<u64>,
    a: u64,
    s1: u64,
    s2: u64,
    s3: u64,
}

impl<'m> Mixer<'m> {
    pub(crate) fn new(map: &'m [u8], mk: u64, seed: u64, hash_size: usize) -> Self {
        Self {
            map,
            mk,
            hs: vec![0; hash_size],
            a: seed,
            s1: 0,
            s2: 0,
            s3: 0,
        }
    }

    /// Rebuild a mixer from a snapshot taken after the priming pass.
    pub(crate) fn resume(map: &'m [u8], mk: u64, state: &PrefixState) -> Self {
        Self {
            map,
            mk,
            hs: state.hs.clone(),
            a: state.a,
            s1: state.s1,
            s2: state.s2,
            s3: state.s3,
        }
    }

    pub(crate) fn into_state(self) -> PrefixState {
        PrefixState {
            hs: self.hs,
            a: self.a,
            s1: self.s1,
            s2: self.s2,
            s3: self.s3,
        }
    }

    /// One masked table read, widened back to a running word.
    #[inline(always)]
    fn probe(&self, v: u64) -> u64 {
        u64::from(self.map[(v & self.mk) as usize])
    }

    // =========================================================================
    // PASSES
    // =========================================================================

    /// Pass 1: prime the state with one cheap table probe per input byte.
    ///
    /// `pos` is the absolute position of `bytes[0]` in the full message, so a
    /// snapshotted prefix can be resumed mid-stream with the lane index
    /// cycling as if the pass had never stopped.
    pub(crate) fn prime(&mut self, bytes: &[u8], pos: usize) {
        let lanes = self.hs.len();
        let mut idx = pos % lanes;
        for &v in bytes {
            self.fast_step(u64::from(v), idx);
            idx += 1;
            if idx == lanes {
                idx = 0;
            }
        }
    }

    /// Pass 2: the full mixing schedule over every input byte.
    pub(crate) fn absorb(&mut self, src: &[u8]) {
        let lanes = self.hs.len();
        let mut idx = 0;
        for &v in src {
            self.step(u64::from(v), idx);
            idx += 1;
            if idx == lanes {
                idx = 0;
            }
        }
    }

    /// Pass 3: walk the lanes in descending order, feeding each accumulated
    /// 64-bit lane back through the mixing schedule, then emit one byte as
    /// the XOR of two table probes.
    pub(crate) fn reduce(&mut self, out: &mut [u8]) {
        for i in (0..self.hs.len()).rev() {
            let v2 = self.hs[i];
            self.step(v2, i);
            out[i] = (self.probe(self.a) as u8) ^ (self.probe(self.hs[i]) as u8);
        }
    }

    // =========================================================================
    // MIXING STEPS
    // =========================================================================

    #[inline]
    fn fast_step(&mut self, v2: u64, idx: usize) {
        let b = self.probe(self.a ^ v2);
        self.a = (self.a << 7)
            ^ (self.a >> 5)
            ^ (v2 << 20)
            ^ (v2 << 16)
            ^ v2
            ^ (b << 20)
            ^ (b << 12)
            ^ (b << 4);
        self.s1 = (self.s1 << 9) ^ (self.s1 >> 3) ^ self.hs[idx];
        self.hs[idx] = self.s1 ^ self.a;
        (self.s1, self.s2, self.s3) = (self.s3, self.s1, self.s2);
    }

    /// The main mixing schedule: 29 shift-xor lines with 23 table probes,
    /// one lane commit, and the three-way state rotation.
    ///
    /// The line order and every shift amount are load-bearing; two builds
    /// interoperate only if this schedule matches bit for bit.
    #[inline]
    fn step(&mut self, v2: u64, idx: usize) {
        let mut a = self.a;
        let mut s1 = self.s1;
        let mut s2 = self.s2;
        let mut h = self.hs[idx];

        s1 = (s1 << 9) ^ (s1 >> 1) ^ a ^ (self.probe((a >> 5) ^ v2) << 3);
        s1 = (s1 << 5) ^ (s1 >> 3) ^ (self.probe(s1 ^ v2) << 7);
        s1 = (s1 << 7) ^ (s1 >> 7) ^ (self.probe(a ^ (s1 >> 7)) << 5);
        s1 = (s1 << 11) ^ (s1 >> 5) ^ (self.probe(v2 ^ (a >> 11) ^ s1) << 27);

        h = s1 ^ a ^ (h << 7) ^ (h >> 13);

        a = (a << 17) ^ (a >> 5) ^ s1 ^ (self.probe(a ^ (s1 >> 27) ^ v2) << 3);
        a = (a << 13) ^ (a >> 3) ^ (self.probe(a ^ s1) << 7);
        a = (a << 15) ^ (a >> 7) ^ (self.probe((a >> 7) ^ s1) << 11);
        a = (a << 9) ^ (a >> 11) ^ (self.probe(v2 ^ a ^ s1) << 3);

        s1 = (s1 << 7) ^ (s1 >> 27) ^ a ^ (self.probe(a >> 3) << 13);
        s1 = (s1 << 3) ^ (s1 >> 13) ^ (self.probe(s1 ^ v2) << 11);
        s1 = (s1 << 8) ^ (s1 >> 11) ^ (self.probe(a ^ (s1 >> 11)) << 9);
        s1 = (s1 << 6) ^ (s1 >> 9) ^ (self.probe(v2 ^ a ^ s1) << 3);

        a = (a << 23) ^ (a >> 3) ^ s1 ^ (self.probe(a ^ v2 ^ (s1 >> 3)) << 7);
        a = (a << 17) ^ (a >> 7) ^ (self.probe(a ^ (s1 >> 3)) << 5);
        a = (a << 13) ^ (a >> 5) ^ (self.probe((a >> 5) ^ s1) << 1);
        a = (a << 11) ^ (a >> 1) ^ (self.probe(v2 ^ a ^ s1) << 7);

        s1 = (s1 << 5) ^ (s1 >> 3) ^ a ^ (self.probe((a >> 7) ^ (s1 >> 3)) << 6);
        s1 = (s1 << 8) ^ (s1 >> 6) ^ (self.probe(s1 ^ v2) << 11);
        s1 = (s1 << 11) ^ (s1 >> 11) ^ (self.probe(a ^ (s1 >> 11)) << 5);
        s1 = (s1 << 7) ^ (s1 >> 5) ^ (self.probe(v2 ^ (a >> 7) ^ a ^ s1) << 17);

        s2 = (s2 << 3) ^ (s2 >> 17) ^ s1 ^ (self.probe(a ^ (s2 >> 5) ^ v2) << 13);
        s2 = (s2 << 6) ^ (s2 >> 13) ^ (self.probe(s2) << 11);
        s2 = (s2 << 11) ^ (s2 >> 11) ^ (self.probe(a ^ s1 ^ (s2 >> 11)) << 23);
        s2 = (s2 << 4) ^ (s2 >> 23) ^ (self.probe(v2 ^ (a >> 8) ^ a ^ (s2 >> 10)) << 1);

        s1 = (s2 << 3) ^ (s2 >> 1) ^ h ^ v2;
        a = (a << 9) ^ (a >> 7) ^ (s1 >> 1) ^ (self.probe((s2 >> 1) ^ h) << 5);

        self.hs[idx] = h;
        self.a = a;
        (self.s1, self.s2, self.s3) = (self.s3, s1, s2);
    }
}
