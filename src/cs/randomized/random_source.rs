use rand::Rng;

use super::rand_range;

/// How a raw 32-bit draw is mapped onto `[0, max]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangeMode {
    /// `next % (max + 1)`. One draw per call, slightly biased towards small values
    /// whenever `max + 1` does not divide `2^32`.
    #[default]
    Modulo,
    /// Rejects draws from the short tail of the 32-bit range, then reduces.
    /// Exactly uniform at the cost of an occasional extra draw.
    Rejection,
}

/// A stream of pseudo-random `u32` values the selection algorithms draw from.
pub trait RandomSource {
    /// Advances the generator and returns the next raw value.
    fn next_random(&mut self) -> u32;

    fn range_mode(&self) -> RangeMode {
        RangeMode::Modulo
    }

    /// Returns a value in `[0, max]`, inclusive.
    ///
    /// `rand_range(0)` is always `0`, but still consumes a draw.
    fn rand_range(&mut self, max: u32) -> u32 {
        match self.range_mode() {
            RangeMode::Modulo => rand_range::modulo(self, max),
            RangeMode::Rejection => rand_range::rejection(self, max),
        }
    }

    /// Returns a value in `[0, max]` for a `usize` bound.
    ///
    /// # Panics
    ///
    /// Panics if `max` does not fit in a `u32`.
    fn rand_index(&mut self, max: usize) -> usize {
        let max = u32::try_from(max)
            .unwrap_or_else(|_| panic!("index bound {max} exceeds the 32-bit generator range"));
        self.rand_range(max) as usize
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_random(&mut self) -> u32 {
        (**self).next_random()
    }

    fn range_mode(&self) -> RangeMode {
        (**self).range_mode()
    }

    fn rand_range(&mut self, max: u32) -> u32 {
        (**self).rand_range(max)
    }
}

/// Drives the selection algorithms from any `rand::Rng`, using rand's own
/// uniform distribution for bounded draws.
///
/// This is the accurate counterpart of `XorShift32` with `RangeMode::Modulo`.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_random(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn range_mode(&self) -> RangeMode {
        RangeMode::Rejection
    }

    fn rand_range(&mut self, max: u32) -> u32 {
        self.rng.gen_range(0..=max)
    }
}
