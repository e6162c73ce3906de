//! Empirical comparison of the two selectors.
//!
//! Generates inputs of several sizes and shapes, times both selectors at the
//! median rank and checks that they agree.

use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{MedianOfMedians, Quickselect, Selector};
use crate::error::{Error, Result};

/// Upper bound (inclusive) of values in a [`Distribution::Random`] input.
const RANDOM_MAX: u64 = 10_000;

/// Values a [`Distribution::Duplicates`] input draws from.
const DUPLICATE_VALUES: [u64; 5] = [1, 2, 3, 4, 5];

/// Shape of a generated input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distribution {
    /// Uniform integers in `0..=10_000`.
    Random,
    /// `0, 1, ..., n - 1`.
    Sorted,
    /// `n, n - 1, ..., 1`.
    Reverse,
    /// Uniform picks from `{1, 2, 3, 4, 5}`.
    Duplicates,
}

impl Distribution {
    pub const ALL: [Distribution; 4] = [
        Distribution::Random,
        Distribution::Sorted,
        Distribution::Reverse,
        Distribution::Duplicates,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Random => "random",
            Distribution::Sorted => "sorted",
            Distribution::Reverse => "reverse",
            Distribution::Duplicates => "duplicates",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Builds an input of length `n` with the given shape.
pub fn generate<R: Rng + ?Sized>(distribution: Distribution, n: usize, rng: &mut R) -> Vec<u64> {
    match distribution {
        Distribution::Random => (0..n).map(|_| rng.gen_range(0..=RANDOM_MAX)).collect(),
        Distribution::Sorted => (0..n as u64).collect(),
        Distribution::Reverse => (1..=n as u64).rev().collect(),
        Distribution::Duplicates => (0..n)
            .map(|_| DUPLICATE_VALUES[rng.gen_range(0..DUPLICATE_VALUES.len())])
            .collect(),
    }
}

/// Configuration for [`run_experiments`].
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Input lengths to measure
    pub sizes: Vec<usize>,
    /// Input shapes to measure at every size
    pub distributions: Vec<Distribution>,
    /// Seed for input generation and for the randomized selector
    pub seed: u64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            sizes: vec![100, 500, 1000, 2000, 5000],
            distributions: Distribution::ALL.to_vec(),
            seed: 0x5E1E_C7ED,
        }
    }
}

/// Timings of both selectors on one input.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub size: usize,
    pub distribution: Distribution,
    /// Wall-clock time of the median-of-medians selector
    pub deterministic: Duration,
    /// Wall-clock time of the randomized selector
    pub randomized: Duration,
    /// The selected median, identical for both selectors
    pub value: u64,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={:<6} {:<10} deterministic: {:.6} sec  randomized: {:.6} sec",
            self.size,
            self.distribution,
            self.deterministic.as_secs_f64(),
            self.randomized.as_secs_f64()
        )
    }
}

/// Times both selectors at rank `n / 2` for every size and distribution.
///
/// Each selector gets its own copy of the generated input. Empty sizes are
/// skipped.
///
/// # Errors
/// * `Error::SelectorsDisagree` - if the two selectors return different values
/// * Selector errors, which cannot occur for generated inputs
pub fn run_experiments(config: &ExperimentConfig) -> Result<Vec<Measurement>> {
    let mut input_rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut deterministic = MedianOfMedians;
    let mut randomized =
        Quickselect::new(ChaCha8Rng::seed_from_u64(config.seed.wrapping_add(1)));
    let mut measurements = Vec::with_capacity(config.sizes.len() * config.distributions.len());

    for &n in config.sizes.iter().filter(|&&n| n > 0) {
        info!("running experiments for n = {}", n);
        let k = n / 2;

        for &distribution in &config.distributions {
            let input = generate(distribution, n, &mut input_rng);

            let (det_value, det_time) = time_selector(&mut deterministic, &input, k)?;
            let (rand_value, rand_time) = time_selector(&mut randomized, &input, k)?;
            check_agreement(distribution, n, det_value, rand_value)?;
            debug!(
                "{} n={} deterministic={:?} randomized={:?}",
                distribution, n, det_time, rand_time
            );

            measurements.push(Measurement {
                size: n,
                distribution,
                deterministic: det_time,
                randomized: rand_time,
                value: det_value,
            });
        }
    }

    Ok(measurements)
}

fn check_agreement(
    distribution: Distribution,
    size: usize,
    deterministic: u64,
    randomized: u64,
) -> Result<()> {
    if deterministic != randomized {
        return Err(Error::SelectorsDisagree {
            distribution: distribution.name(),
            size,
            deterministic,
            randomized,
        });
    }
    Ok(())
}

fn time_selector<S: Selector>(
    selector: &mut S,
    input: &[u64],
    k: usize,
) -> Result<(u64, Duration)> {
    let copy = input.to_vec();
    let start = Instant::now();
    let value = selector.select(&copy, k)?;
    Ok((value, start.elapsed()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shapes() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(generate(Distribution::Sorted, 4, &mut rng), vec![0, 1, 2, 3]);
        assert_eq!(generate(Distribution::Reverse, 4, &mut rng), vec![4, 3, 2, 1]);

        let random = generate(Distribution::Random, 1000, &mut rng);
        assert_eq!(random.len(), 1000);
        assert!(random.iter().all(|&x| x <= RANDOM_MAX));

        let duplicates = generate(Distribution::Duplicates, 1000, &mut rng);
        assert_eq!(duplicates.len(), 1000);
        assert!(duplicates.iter().all(|x| DUPLICATE_VALUES.contains(x)));
    }

    #[test]
    fn test_generate_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for distribution in Distribution::ALL {
            assert!(generate(distribution, 0, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_run_experiments_reports_medians() {
        let config = ExperimentConfig {
            sizes: vec![0, 11, 200],
            ..ExperimentConfig::default()
        };
        let results = run_experiments(&config).unwrap();
        assert_eq!(results.len(), 2 * Distribution::ALL.len());

        for m in &results {
            match m.distribution {
                Distribution::Sorted => assert_eq!(m.value, (m.size / 2) as u64),
                Distribution::Reverse => assert_eq!(m.value, (m.size / 2 + 1) as u64),
                Distribution::Duplicates => assert!(DUPLICATE_VALUES.contains(&m.value)),
                Distribution::Random => assert!(m.value <= RANDOM_MAX),
            }
        }
    }

    #[test]
    fn test_check_agreement() {
        assert_eq!(check_agreement(Distribution::Sorted, 10, 5, 5), Ok(()));
        assert_eq!(
            check_agreement(Distribution::Reverse, 10, 5, 6),
            Err(Error::SelectorsDisagree {
                distribution: "reverse",
                size: 10,
                deterministic: 5,
                randomized: 6,
            })
        );
    }

    #[test]
    fn test_measurement_display() {
        let m = Measurement {
            size: 100,
            distribution: Distribution::Duplicates,
            deterministic: Duration::from_millis(2),
            randomized: Duration::from_micros(500),
            value: 3,
        };
        let line = m.to_string();
        assert!(line.contains("duplicates"));
        assert!(line.contains("deterministic: 0.002000 sec"));
        assert!(line.contains("randomized: 0.000500 sec"));
    }
}
