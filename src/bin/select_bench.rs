//! Benchmarks the single-item selection strategies and checks their output
//! distributions.
//!
//! Writes a CSV profile (best time per algorithm for each item length) and prints,
//! for every algorithm, a histogram of which generated items starting with `a`
//! were picked, together with its chi-square statistic.

use clap::{Parser, ValueEnum};
use log::{info, warn};
use tracing_subscriber::EnvFilter;

use pickone::harness::{self, BenchConfig, CsvReport};
use pickone::{Algorithm, RangeMode, Result};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Single draw reduced with `%` (slightly biased)
    Modulo,
    /// Rejection of the biased tail (exact)
    Rejection,
}

impl From<Mode> for RangeMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Modulo => RangeMode::Modulo,
            Mode::Rejection => RangeMode::Rejection,
        }
    }
}

#[derive(Parser)]
#[command(name = "select_bench")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Items per generated data set
    #[arg(short = 'n', long, default_value_t = 1000)]
    loop_count: usize,

    /// Timing repetitions per algorithm (fastest is reported)
    #[arg(short, long, default_value_t = 100)]
    repetitions: u32,

    /// Longest generated item; data sets are built for every length up to it
    #[arg(short = 'l', long, default_value_t = 3)]
    item_len: usize,

    /// Selections per algorithm for the distribution histograms
    #[arg(short, long, default_value_t = 30_000)]
    trials: usize,

    /// Independent generator streams the histogram trials are split over
    #[arg(short, long, default_value_t = 1)]
    batches: usize,

    /// Non-zero generator seed
    #[arg(short, long, default_value_t = 1234)]
    seed: u32,

    /// How bounded draws are mapped onto their range
    #[arg(short, long, value_enum, default_value_t = Mode::Modulo)]
    mode: Mode,

    /// Only run these algorithms in the distribution check
    #[arg(short, long, value_delimiter = ',')]
    algorithms: Vec<Algorithm>,

    /// CSV profile output path
    #[arg(short, long, default_value = "test_profile.csv")]
    output: String,
}

impl Cli {
    fn config(&self) -> BenchConfig {
        BenchConfig::new()
            .loop_count(self.loop_count)
            .test_loop_count(self.repetitions)
            .item_len(self.item_len)
            .histogram_trials(self.trials)
            .histogram_batches(self.batches)
            .seed(self.seed)
            .range_mode(self.mode.into())
            .csv_path(&self.output)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    config.validate()?;
    let mut rng = config.rng()?;

    let rows = harness::profile(&config, &mut rng)?;
    for row in &rows {
        let line: Vec<String> = row
            .timings
            .iter()
            .map(|t| format!("{}={}us", t.algorithm, t.best_micros()))
            .collect();
        println!("len {}: {}", row.item_len, line.join(" "));
    }
    let mut report = CsvReport::create(&config.csv_path)?;
    report.write_profile(&rows)?;

    // Tag items with their position so duplicate strings stay distinct categories.
    let data: Vec<(usize, String)> =
        harness::generate_items(config.loop_count, config.item_len, &mut rng)
            .into_iter()
            .enumerate()
            .collect();
    let starts_with_a = |item: &(usize, String)| item.1.starts_with('a');
    let categories = data.iter().filter(|item| starts_with_a(*item)).count();
    if categories == 0 {
        warn!("no generated item starts with 'a'; skipping distribution check");
        return Ok(());
    }

    let algorithms = if cli.algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        cli.algorithms.clone()
    };
    for algorithm in algorithms {
        let histogram = harness::parallel_trials(
            algorithm,
            &data,
            starts_with_a,
            config.histogram_trials,
            config.histogram_batches,
            config.seed,
        );
        let chi_square = histogram.chi_square(categories)?;
        println!("{algorithm}: {categories} matches, chi-square {chi_square:.2}");
        for ((index, item), count) in histogram.iter() {
            println!("  {index:>5} {item}: {count}");
        }
        info!("{algorithm}: {} trials, {} misses", histogram.trials(), histogram.misses());
    }
    Ok(())
}
