use log::{debug, trace};
use rand::Rng;

use super::check_preconditions;
use super::partition::{partition, Partition};
use crate::error::Result;

/// Returns the element of rank `k` (zero-based, ascending) using quickselect
/// with pivots drawn uniformly from `rng`.
///
/// Runs in expected linear time. An unlucky pivot sequence degrades to
/// quadratic time; use [`median_of_medians`](super::median_of_medians) when a
/// worst-case bound is required. Seeding `rng` makes the result and the whole
/// recursion path reproducible.
///
/// # Errors
/// * `Error::OutOfRange` - if the sequence is empty or `k >= sequence.len()`
/// * `Error::IncomparableInput` - if two elements cannot be ordered
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use selectors::selection::randomized_select;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// assert_eq!(randomized_select(&[100, 90, 80, 70, 60, 50], 1, &mut rng).unwrap(), 60);
/// ```
pub fn randomized_select<T, R>(sequence: &[T], k: usize, rng: &mut R) -> Result<T>
where
    T: PartialOrd + Clone,
    R: Rng + ?Sized,
{
    check_preconditions(sequence, k)?;
    debug!("quickselect: rank {} of {} elements", k, sequence.len());

    let working: Vec<&T> = sequence.iter().collect();
    select(working, k, rng).cloned()
}

/// Same as [`randomized_select`] using the thread-local generator.
pub fn randomized_quickselect<T: PartialOrd + Clone>(sequence: &[T], k: usize) -> Result<T> {
    randomized_select(sequence, k, &mut rand::thread_rng())
}

fn select<'a, T, R>(working: Vec<&'a T>, k: usize, rng: &mut R) -> Result<&'a T>
where
    T: PartialOrd,
    R: Rng + ?Sized,
{
    if working.len() == 1 {
        return Ok(working[0]);
    }

    let pivot = working[rng.gen_range(0..working.len())];
    let Partition {
        less,
        equal,
        greater,
    } = partition(&working, &pivot)?;
    trace!(
        "quickselect level: n={} k={} less={} equal={} greater={}",
        working.len(),
        k,
        less.len(),
        equal.len(),
        greater.len()
    );

    if k < less.len() {
        select(less, k, rng)
    } else if k < less.len() + equal.len() {
        Ok(pivot)
    } else {
        let offset = less.len() + equal.len();
        select(greater, k - offset, rng)
    }
}
