use super::RandomSource;

/// Returns one item matching `test`, chosen uniformly at random, in a single pass.
///
/// This is reservoir sampling with a reservoir of one: the `j`-th match (0-indexed)
/// replaces the current pick with probability `1 / (j + 1)`, so after `k` matches each
/// one has been kept with probability `1 / k`. One draw is taken per match and no
/// auxiliary storage is needed, which makes this the preferred strategy for long or
/// streamed inputs.
///
/// Returns `None` when nothing matches. The slice is not modified.
pub fn random_item_select<T, P, R>(items: &[T], test: P, rng: &mut R) -> Option<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
    R: RandomSource + ?Sized,
{
    sample_one_iter(items.iter().filter(|item| test(*item)), rng).cloned()
}

/// Returns one item from `iter`, chosen uniformly at random, in a single pass.
///
/// The iterator's length does not need to be known; filter it first to select
/// among matching items only.
///
/// # Panics
///
/// Panics if the iterator yields more than `u32::MAX + 1` items.
pub fn sample_one_iter<I, R>(iter: I, rng: &mut R) -> Option<I::Item>
where
    I: IntoIterator,
    R: RandomSource + ?Sized,
{
    let mut matching_count: usize = 0;
    let mut picked = None;
    for item in iter {
        if rng.rand_index(matching_count) == 0 {
            picked = Some(item);
        }
        matching_count += 1;
    }
    picked
}

/// Iterator extension for picking one uniformly random element.
///
/// ```rust
/// use pickone::{TakeRand, XorShift32};
///
/// let meals = ["breakfast", "lunch", "dinner", "snack"];
/// let mut rng = XorShift32::new(7);
/// let with_a = meals.iter().filter(|m| m.contains('a')).take_rand(&mut rng);
/// assert!(with_a.is_some_and(|m| m.contains('a')));
/// ```
pub trait TakeRand: Iterator {
    fn take_rand<R: RandomSource + ?Sized>(self, rng: &mut R) -> Option<Self::Item>
    where
        Self: Sized,
    {
        sample_one_iter(self, rng)
    }
}

impl<I: Iterator> TakeRand for I {}
