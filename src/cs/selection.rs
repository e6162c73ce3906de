//! Order-statistic selection.
//!
//! Two selectors find the element of rank `k` (zero-based position in ascending
//! order) without sorting the whole input:
//! - [`median_of_medians`]: deterministic, worst-case linear time
//! - [`randomized_select`]: random pivot quickselect, expected linear time
//!
//! Both share the three-way [`partition`] and never mutate the caller's slice.
//!
//! # Examples
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use selectors::selection::{median_of_medians, randomized_select};
//!
//! let data = [8, 3, 1, 7, 4, 9, 2];
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//!
//! assert_eq!(median_of_medians(&data, 3).unwrap(), 4);
//! assert_eq!(randomized_select(&data, 3, &mut rng).unwrap(), 4);
//! ```

use std::cmp::Ordering;

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::error::{Error, Result};

pub mod experiment;
pub mod median_of_medians;
pub mod partition;
pub mod randomized_quickselect;


pub use experiment::{
    generate, run_experiments, Distribution, ExperimentConfig, Measurement,
};
pub use median_of_medians::median_of_medians;
pub use partition::{partition, Partition};
pub use randomized_quickselect::{randomized_quickselect, randomized_select};

/// Common interface over the selection algorithms.
pub trait Selector {
    /// Short human readable name of the algorithm.
    fn name(&self) -> &'static str;

    /// Returns the element that would sit at index `k` if `sequence` were sorted.
    fn select<T: PartialOrd + Clone>(&mut self, sequence: &[T], k: usize) -> Result<T>;
}

/// Deterministic median-of-medians selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianOfMedians;

impl Selector for MedianOfMedians {
    fn name(&self) -> &'static str {
        "deterministic"
    }

    fn select<T: PartialOrd + Clone>(&mut self, sequence: &[T], k: usize) -> Result<T> {
        median_of_medians(sequence, k)
    }
}

/// Randomized quickselect driven by an owned random source.
#[derive(Debug, Clone)]
pub struct Quickselect<R> {
    rng: R,
}

impl<R: Rng> Quickselect<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for Quickselect<ThreadRng> {
    fn default() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> Selector for Quickselect<R> {
    fn name(&self) -> &'static str {
        "randomized"
    }

    fn select<T: PartialOrd + Clone>(&mut self, sequence: &[T], k: usize) -> Result<T> {
        randomized_select(sequence, k, &mut self.rng)
    }
}

/// Rejects empty input, out of range ranks and self-incomparable elements
/// before any selection work starts.
pub(crate) fn check_preconditions<T: PartialOrd>(sequence: &[T], k: usize) -> Result<()> {
    if k >= sequence.len() {
        return Err(Error::out_of_range(k, sequence.len()));
    }
    if sequence.iter().any(|x| x.partial_cmp(x).is_none()) {
        return Err(Error::IncomparableInput);
    }
    Ok(())
}

/// Orders two elements, failing on pairs without an ordering.
pub(crate) fn compare<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Result<Ordering> {
    a.partial_cmp(b).ok_or(Error::IncomparableInput)
}

/// Insertion sort for the tiny groups the selectors sort directly.
pub(crate) fn sort_small<T: PartialOrd>(items: &mut [T]) -> Result<()> {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j])? == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
    Ok(())
}
