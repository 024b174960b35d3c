use std::hint::black_box;
use std::time::{Duration, Instant};

use log::{debug, info};

use super::{generate_items, BenchConfig};
use crate::cs::randomized::{Algorithm, RandomSource};
use crate::error::Result;

/// Fastest observed pass of one algorithm over one data set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing {
    pub algorithm: Algorithm,
    pub best: Duration,
    /// Letters for which a matching item was found during a pass.
    pub found: usize,
}

impl Timing {
    pub fn best_micros(&self) -> u128 {
        self.best.as_micros()
    }
}

/// Best pass times of every algorithm for one item length.
#[derive(Debug, Clone)]
pub struct ProfileRow {
    pub item_len: usize,
    pub timings: Vec<Timing>,
}

/// Times `algorithm` over `repetitions` passes and keeps the fastest.
///
/// Every pass works on a fresh copy of `data` and selects, for each letter `a..=z`,
/// one item starting with that letter.
pub fn time_algorithm<R>(
    algorithm: Algorithm,
    data: &[String],
    repetitions: u32,
    rng: &mut R,
) -> Timing
where
    R: RandomSource + ?Sized,
{
    let mut best = Duration::MAX;
    let mut found = 0;
    for _ in 0..repetitions.max(1) {
        let mut process = data.to_vec();
        let start = Instant::now();
        found = 0;
        for letter in b'a'..=b'z' {
            let picked = algorithm.select(
                &mut process,
                |s: &String| s.as_bytes().first() == Some(&letter),
                rng,
            );
            if black_box(picked).is_some() {
                found += 1;
            }
        }
        best = best.min(start.elapsed());
    }
    debug!("{algorithm}: best {}us, {found} letters found", best.as_micros());
    Timing {
        algorithm,
        best,
        found,
    }
}

/// Times every algorithm in [`Algorithm::ALL`] order.
pub fn time_all<R>(data: &[String], repetitions: u32, rng: &mut R) -> Vec<Timing>
where
    R: RandomSource + ?Sized,
{
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| time_algorithm(algorithm, data, repetitions, rng))
        .collect()
}

/// Generates a data set for each item length in `1..=config.item_len` and times
/// every algorithm on it.
pub fn profile<R>(config: &BenchConfig, rng: &mut R) -> Result<Vec<ProfileRow>>
where
    R: RandomSource + ?Sized,
{
    config.validate()?;
    let mut rows = Vec::with_capacity(config.item_len);
    for item_len in 1..=config.item_len {
        info!(
            "profiling {} items of length {item_len}",
            config.loop_count
        );
        let data = generate_items(config.loop_count, item_len, rng);
        let timings = time_all(&data, config.test_loop_count, rng);
        rows.push(ProfileRow { item_len, timings });
    }
    Ok(rows)
}
