//! The randomness seam the core depends on (§6 "external collaborators").
//! Kept as a trait rather than a concrete `rand::Rng` bound so a
//! deterministic stub can stand in during tests without touching the
//! primitives themselves.

use algebra::BigUint;
use num_bigint::RandBigInt;
use rand::RngCore;

pub trait RandomSource {
    /// A uniform value in `[lo, hi)`.
    fn random_range(&mut self, lo: &BigUint, hi: &BigUint) -> BigUint;

    /// `n` bits of fresh randomness, MSB first. Draws `ceil(n/8)` full
    /// bytes and keeps only the high `n` bits of the last byte — no
    /// truncation of entropy for a non-byte-aligned `n` (the original
    /// Python reference's `randbits` reads `n // 2` bytes and zero-pads
    /// the rest, silently halving the entropy for odd `n`; this does not
    /// reproduce that).
    fn random_bits(&mut self, n: usize) -> Vec<bool>;
}

/// The default `RandomSource`, backed by the process-wide thread RNG.
pub struct OsRandomSource {
    rng: rand::rngs::ThreadRng,
}

impl OsRandomSource {
    pub fn new() -> Self {
        OsRandomSource {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for OsRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for OsRandomSource {
    fn random_range(&mut self, lo: &BigUint, hi: &BigUint) -> BigUint {
        self.rng.gen_biguint_range(lo, hi)
    }

    fn random_bits(&mut self, n: usize) -> Vec<bool> {
        random_bits_from_bytes(n, |buf| self.rng.fill_bytes(buf))
    }
}

pub(crate) fn random_bits_from_bytes(n: usize, mut fill: impl FnMut(&mut [u8])) -> Vec<bool> {
    let byte_len = (n + 7) / 8;
    let mut bytes = vec![0u8; byte_len];
    fill(&mut bytes);
    let mut bits = Vec::with_capacity(n);
    'outer: for byte in bytes {
        for i in (0..8).rev() {
            if bits.len() == n {
                break 'outer;
            }
            bits.push((byte >> i) & 1 == 1);
        }
    }
    bits
}

#[cfg(test)]
pub(crate) struct DeterministicRng(pub rand_xorshift::XorShiftRng);

#[cfg(test)]
impl RandomSource for DeterministicRng {
    fn random_range(&mut self, lo: &BigUint, hi: &BigUint) -> BigUint {
        self.0.gen_biguint_range(lo, hi)
    }

    fn random_bits(&mut self, n: usize) -> Vec<bool> {
        random_bits_from_bytes(n, |buf| self.0.fill_bytes(buf))
    }
}
