//! # XorShift32
//!
//! A 32-bit xorshift generator: three shift-and-xor steps over a single state word.
//! It is fast, tiny, and bit-exact across platforms, which makes selection runs
//! reproducible from a seed.
//!
//! **Note**: xorshift is not cryptographically secure, and its low bits are weak for
//! statistical work beyond benchmarking. Use a `rand` generator through
//! [`RngSource`](super::RngSource) when quality matters more than speed.
//!
//! A zero state is a fixed point of the shift/xor steps, so the seed must be non-zero.
//! Every other state maps to another non-zero state.

use log::debug;
use rand::{Error as RandError, RngCore, SeedableRng};

use super::{RandomSource, RangeMode};
use crate::error::{Error, Result};

/// Seed used by `Default` and by `SeedableRng::from_seed` for an all-zero seed.
pub const DEFAULT_SEED: u32 = 2_463_534_242;

/// Seeded xorshift generator producing a stream of `u32` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift32 {
    state: u32,
    mode: RangeMode,
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self {
            state: DEFAULT_SEED,
            mode: RangeMode::Modulo,
        }
    }
}

impl XorShift32 {
    /// Creates a generator from a non-zero seed.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is zero.
    pub fn new(seed: u32) -> Self {
        assert!(seed != 0, "xorshift seed must be non-zero");
        Self {
            state: seed,
            mode: RangeMode::Modulo,
        }
    }

    /// Creates a generator, reporting a zero seed as an error instead of panicking.
    pub fn try_new(seed: u32) -> Result<Self> {
        if seed == 0 {
            return Err(Error::ZeroSeed);
        }
        Ok(Self::new(seed))
    }

    /// Sets how bounded draws are mapped onto their range.
    pub fn with_mode(mut self, mode: RangeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Restarts the stream from `seed`.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is zero.
    pub fn reseed(&mut self, seed: u32) {
        assert!(seed != 0, "xorshift seed must be non-zero");
        debug!("reseeding xorshift32 with {seed:#010x}");
        self.state = seed;
    }

    /// The current state word, i.e. the last value returned (or the seed).
    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn mode(&self) -> RangeMode {
        self.mode
    }

    #[inline]
    fn step(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 15;
        self.state = x;
        x
    }
}

impl RandomSource for XorShift32 {
    #[inline]
    fn next_random(&mut self) -> u32 {
        self.step()
    }

    fn range_mode(&self) -> RangeMode {
        self.mode
    }
}

impl RngCore for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.step() as u64;
        let hi = self.step() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), RandError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorShift32 {
    type Seed = [u8; 4];

    /// Little-endian seed word; an all-zero seed falls back to [`DEFAULT_SEED`].
    fn from_seed(seed: Self::Seed) -> Self {
        match u32::from_le_bytes(seed) {
            0 => Self::default(),
            s => Self::new(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_known_sequence_seed_one() {
        let mut rng = XorShift32::new(1);
        let got: Vec<u32> = (0..5).map(|_| rng.next_random()).collect();
        assert_eq!(
            got,
            vec![268476417, 1157628417, 1158709409, 269814307, 672445067]
        );
    }

    #[test]
    fn test_known_sequence_seed_1234() {
        let mut rng = XorShift32::new(1234);
        let got: Vec<u32> = (0..5).map(|_| rng.next_random()).collect();
        assert_eq!(
            got,
            vec![584434847, 2929224124, 2140813419, 2592556064, 3432250657]
        );
    }

    #[test]
    fn test_default_seed() {
        let mut rng = XorShift32::default();
        assert_eq!(rng.state(), DEFAULT_SEED);
        assert_eq!(rng.next_random(), 901999875);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = XorShift32::new(0xDEAD_BEEF);
        let mut b = XorShift32::new(0xDEAD_BEEF);
        for _ in 0..1000 {
            assert_eq!(a.next_random(), b.next_random());
        }
    }

    #[test]
    fn test_state_never_becomes_zero() {
        let mut rng = XorShift32::new(1);
        for _ in 0..100_000 {
            assert_ne!(rng.next_random(), 0);
        }
    }

    #[test]
    fn test_state_tracks_last_output() {
        let mut rng = XorShift32::new(77);
        let v = rng.next_random();
        assert_eq!(rng.state(), v);
    }

    #[test]
    fn test_try_new_rejects_zero() {
        assert!(matches!(XorShift32::try_new(0), Err(Error::ZeroSeed)));
        assert_eq!(XorShift32::try_new(5).unwrap(), XorShift32::new(5));
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_new_panics_on_zero() {
        XorShift32::new(0);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_reseed_panics_on_zero() {
        XorShift32::new(3).reseed(0);
    }

    #[test]
    fn test_reseed_restarts_stream() {
        let mut rng = XorShift32::new(1234);
        let first = rng.next_random();
        rng.next_random();
        rng.reseed(1234);
        assert_eq!(rng.next_random(), first);
    }

    #[test]
    fn test_mode_is_kept_across_reseed() {
        let mut rng = XorShift32::new(9).with_mode(RangeMode::Rejection);
        rng.reseed(10);
        assert_eq!(rng.mode(), RangeMode::Rejection);
        assert_eq!(rng.range_mode(), RangeMode::Rejection);
    }

    #[test]
    fn test_rng_core_matches_next_random() {
        let mut a = XorShift32::new(42);
        let mut b = XorShift32::new(42);
        assert_eq!(a.next_u32(), b.next_random());
        let lo = b.next_random() as u64;
        let hi = b.next_random() as u64;
        assert_eq!(a.next_u64(), (hi << 32) | lo);
    }

    #[test]
    fn test_fill_bytes_handles_partial_chunk() {
        let mut a = XorShift32::new(42);
        let mut b = XorShift32::new(42);
        let mut buf = [0u8; 6];
        a.fill_bytes(&mut buf);
        let w0 = b.next_random().to_le_bytes();
        let w1 = b.next_random().to_le_bytes();
        assert_eq!(&buf[..4], &w0);
        assert_eq!(&buf[4..], &w1[..2]);
    }

    #[test]
    fn test_from_seed() {
        assert_eq!(XorShift32::from_seed([0; 4]), XorShift32::default());
        assert_eq!(
            XorShift32::from_seed(1234u32.to_le_bytes()),
            XorShift32::new(1234)
        );
    }

    #[test]
    fn test_works_with_rand_api() {
        let mut rng = XorShift32::new(5);
        for _ in 0..100 {
            let v: u8 = rng.gen_range(1..=6);
            assert!((1..=6).contains(&v));
        }
    }
}
