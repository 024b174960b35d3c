use std::path::PathBuf;

use crate::cs::randomized::{RangeMode, XorShift32};
use crate::error::{Error, Result};

/// Parameters of a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Number of items in each generated data set.
    pub loop_count: usize,
    /// Timing repetitions per algorithm; the fastest one is reported.
    pub test_loop_count: u32,
    /// Data sets are generated for every item length in `1..=item_len`.
    pub item_len: usize,
    /// Selections per algorithm when building output histograms.
    pub histogram_trials: usize,
    /// Independent generator streams the histogram trials are split over.
    pub histogram_batches: usize,
    pub seed: u32,
    pub range_mode: RangeMode,
    pub csv_path: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            loop_count: 1000,
            test_loop_count: 100,
            item_len: 3,
            histogram_trials: 30_000,
            histogram_batches: 1,
            seed: 1234,
            range_mode: RangeMode::Modulo,
            csv_path: PathBuf::from("test_profile.csv"),
        }
    }
}

impl BenchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loop_count(mut self, n: usize) -> Self {
        self.loop_count = n;
        self
    }

    pub fn test_loop_count(mut self, n: u32) -> Self {
        self.test_loop_count = n;
        self
    }

    pub fn item_len(mut self, len: usize) -> Self {
        self.item_len = len;
        self
    }

    pub fn histogram_trials(mut self, n: usize) -> Self {
        self.histogram_trials = n;
        self
    }

    pub fn histogram_batches(mut self, n: usize) -> Self {
        self.histogram_batches = n;
        self
    }

    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn range_mode(mut self, mode: RangeMode) -> Self {
        self.range_mode = mode;
        self
    }

    pub fn csv_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.csv_path = path.into();
        self
    }

    /// Checks that every count is usable.
    pub fn validate(&self) -> Result<()> {
        if self.loop_count == 0 {
            return Err(Error::invalid_config("loop_count must be at least 1"));
        }
        if self.test_loop_count == 0 {
            return Err(Error::invalid_config("test_loop_count must be at least 1"));
        }
        if self.item_len == 0 {
            return Err(Error::invalid_config("item_len must be at least 1"));
        }
        if self.histogram_batches == 0 || self.histogram_batches > self.histogram_trials.max(1) {
            return Err(Error::invalid_config(format!(
                "histogram_batches must be in 1..={}",
                self.histogram_trials.max(1)
            )));
        }
        if self.seed == 0 {
            return Err(Error::ZeroSeed);
        }
        Ok(())
    }

    /// The generator described by `seed` and `range_mode`.
    pub fn rng(&self) -> Result<XorShift32> {
        Ok(XorShift32::try_new(self.seed)?.with_mode(self.range_mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = BenchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.loop_count, 1000);
        assert_eq!(config.test_loop_count, 100);
        assert_eq!(config.csv_path, PathBuf::from("test_profile.csv"));
    }

    #[test]
    fn test_builder() {
        let config = BenchConfig::new()
            .loop_count(10)
            .test_loop_count(2)
            .item_len(5)
            .histogram_trials(100)
            .histogram_batches(4)
            .seed(9)
            .range_mode(RangeMode::Rejection)
            .csv_path("out.csv");
        assert!(config.validate().is_ok());
        assert_eq!(config.rng().unwrap().mode(), RangeMode::Rejection);
        assert_eq!(config.csv_path, PathBuf::from("out.csv"));
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        assert!(matches!(
            BenchConfig::new().loop_count(0).validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            BenchConfig::new().test_loop_count(0).validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            BenchConfig::new().item_len(0).validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            BenchConfig::new().histogram_batches(0).validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            BenchConfig::new().seed(0).validate(),
            Err(Error::ZeroSeed)
        ));
        assert!(matches!(BenchConfig::new().seed(0).rng(), Err(Error::ZeroSeed)));
    }
}
