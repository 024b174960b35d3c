//! Free-function access to a per-thread `XorShift32`.
//!
//! Each thread owns its own generator, starting from
//! [`DEFAULT_SEED`](super::xorshift::DEFAULT_SEED), so calls never race. Code that
//! needs an independent or explicitly passed stream should own an `XorShift32`
//! instead.

use std::cell::RefCell;

use super::{RandomSource, XorShift32};

thread_local! {
    static GENERATOR: RefCell<XorShift32> = RefCell::new(XorShift32::default());
}

/// Reseeds this thread's generator.
///
/// # Panics
///
/// Panics if `value` is zero.
pub fn seed(value: u32) {
    GENERATOR.with(|g| g.borrow_mut().reseed(value));
}

/// Raw draw from this thread's generator.
pub fn next_random() -> u32 {
    GENERATOR.with(|g| g.borrow_mut().next_random())
}

/// Bounded draw in `[0, max]` from this thread's generator.
pub fn random_range(max: u32) -> u32 {
    GENERATOR.with(|g| g.borrow_mut().rand_range(max))
}

/// Runs `f` with exclusive access to this thread's generator, e.g. to pass it to a
/// selection algorithm.
pub fn with_generator<F, T>(f: F) -> T
where
    F: FnOnce(&mut XorShift32) -> T,
{
    GENERATOR.with(|g| f(&mut *g.borrow_mut()))
}
