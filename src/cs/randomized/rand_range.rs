//! Mapping raw 32-bit draws onto an inclusive range `[0, max]`.
//!
//! `modulo` reduces a single draw with `%`. Unless `max + 1` divides `2^32` the low
//! residues are hit once more often than the high ones (modulo bias); for the small
//! ranges used when selecting among matches the bias is below `max / 2^32` and the
//! single draw keeps the hot loop cheap.
//!
//! `rejection` discards draws below `2^32 mod (max + 1)` before reducing, which leaves
//! a whole number of copies of every residue and is therefore exact.
//!
//! Both treat `max == u32::MAX` as the full range and return the draw unchanged,
//! since `max + 1` would wrap to zero.

use super::RandomSource;

/// Biased single-draw reduction: `next % (max + 1)`.
#[inline]
pub fn modulo<R: RandomSource + ?Sized>(rng: &mut R, max: u32) -> u32 {
    let value = rng.next_random();
    match max.checked_add(1) {
        Some(span) => value % span,
        None => value,
    }
}

/// Exact reduction by rejecting the biased tail of the 32-bit range.
pub fn rejection<R: RandomSource + ?Sized>(rng: &mut R, max: u32) -> u32 {
    let Some(span) = max.checked_add(1) else {
        return rng.next_random();
    };
    // 2^32 mod span, computed without 64-bit arithmetic
    let threshold = span.wrapping_neg() % span;
    loop {
        let value = rng.next_random();
        if value >= threshold {
            return value % span;
        }
    }
}
