use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use rayon::prelude::*;

use crate::cs::randomized::{Algorithm, RandomSource, XorShift32};
use crate::error::{Error, Result};

/// Counts how often each output was selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram<K: Ord> {
    counts: BTreeMap<K, u64>,
    trials: u64,
    misses: u64,
}

impl<K: Ord> Default for Histogram<K> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
            trials: 0,
            misses: 0,
        }
    }
}

impl<K: Ord> Histogram<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one selection result; `None` counts as a miss.
    pub fn record(&mut self, outcome: Option<K>) {
        self.trials += 1;
        match outcome {
            Some(key) => *self.counts.entry(key).or_insert(0) += 1,
            None => self.misses += 1,
        }
    }

    pub fn count(&self, key: &K) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn hits(&self) -> u64 {
        self.trials - self.misses
    }

    /// Distinct outputs seen so far.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.counts.iter().map(|(k, &v)| (k, v))
    }

    pub fn merge(mut self, other: Self) -> Self {
        self.trials += other.trials;
        self.misses += other.misses;
        for (key, n) in other.counts {
            *self.counts.entry(key).or_insert(0) += n;
        }
        self
    }

    /// Pearson's chi-square statistic of the hits against a uniform distribution
    /// over `categories` outputs. Categories never selected contribute their full
    /// expected count.
    ///
    /// Returns `InvalidConfig` if more distinct outputs were seen than `categories`
    /// or nothing was selected.
    pub fn chi_square(&self, categories: usize) -> Result<f64> {
        if categories == 0 || self.counts.len() > categories {
            return Err(Error::invalid_config(format!(
                "{} distinct outputs do not fit {} categories",
                self.counts.len(),
                categories
            )));
        }
        let hits = self.hits();
        if hits == 0 {
            return Err(Error::invalid_config("no selections recorded"));
        }

        let expected = hits as f64 / categories as f64;
        let seen: f64 = self
            .counts
            .values()
            .map(|&observed| {
                let d = observed as f64 - expected;
                d * d / expected
            })
            .sum();
        let unseen = (categories - self.counts.len()) as f64 * expected;
        Ok(seen + unseen)
    }

    /// Whether the chi-square statistic stays below `critical`, the critical value
    /// for `categories - 1` degrees of freedom at the chosen significance level.
    pub fn is_uniform(&self, categories: usize, critical: f64) -> Result<bool> {
        Ok(self.chi_square(categories)? < critical)
    }
}

impl<K: Ord + fmt::Display> fmt::Display for Histogram<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, n) in &self.counts {
            writeln!(f, "{key}: {n}")?;
        }
        if self.misses > 0 {
            writeln!(f, "(none): {}", self.misses)?;
        }
        Ok(())
    }
}

/// Runs `algorithm` `trials` times over a working copy of `items`, drawing from `rng`,
/// and counts which items come out.
pub fn run_trials<T, P, R>(
    algorithm: Algorithm,
    items: &[T],
    test: P,
    trials: usize,
    rng: &mut R,
) -> Histogram<T>
where
    T: Ord + Clone,
    P: Fn(&T) -> bool,
    R: RandomSource + ?Sized,
{
    // Partitioning is idempotent, so one copy serves every trial.
    let mut working = items.to_vec();
    let mut histogram = Histogram::new();
    for _ in 0..trials {
        histogram.record(algorithm.select(&mut working, &test, rng));
    }
    histogram
}

/// Splits `trials` over `batches` independent `XorShift32` streams and runs them on
/// the rayon pool.
///
/// Batch seeds are the first `batches` outputs of a generator seeded with `seed`,
/// so the merged result depends only on the arguments, not on scheduling.
///
/// # Panics
///
/// Panics if `seed` is zero.
pub fn parallel_trials<T, P>(
    algorithm: Algorithm,
    items: &[T],
    test: P,
    trials: usize,
    batches: usize,
    seed: u32,
) -> Histogram<T>
where
    T: Ord + Clone + Send + Sync,
    P: Fn(&T) -> bool + Sync,
{
    let batches = batches.max(1);
    let mut seeder = XorShift32::new(seed);
    let seeds: Vec<u32> = (0..batches).map(|_| seeder.next_random()).collect();
    debug!("{algorithm}: {trials} trials over {batches} batches");

    seeds
        .into_par_iter()
        .enumerate()
        .map(|(batch, batch_seed)| {
            let share = trials / batches + usize::from(batch < trials % batches);
            let mut rng = XorShift32::new(batch_seed);
            run_trials(algorithm, items, &test, share, &mut rng)
        })
        .reduce(Histogram::new, Histogram::merge)
}
