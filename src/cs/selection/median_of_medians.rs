use log::{debug, trace};

use super::partition::{partition, Partition};
use super::{check_preconditions, sort_small};
use crate::error::Result;

/// Elements per group when computing the pivot. Five is the smallest size that
/// keeps the recursion linear.
const GROUP_SIZE: usize = 5;

/// Returns the element of rank `k` (zero-based, ascending) using the
/// median-of-medians algorithm.
///
/// The pivot at every level is the median of the medians of groups of five,
/// which guarantees that at least 30% of the working sequence is discarded per
/// level regardless of input order. The caller's slice is never modified.
///
/// # Arguments
/// * `sequence` - The elements to select from
/// * `k` - Zero-based rank of the element to return
///
/// # Returns
/// * `Ok(element)` - The element that would be at index `k` after sorting
/// * `Err(Error::OutOfRange)` - If the sequence is empty or `k >= sequence.len()`
/// * `Err(Error::IncomparableInput)` - If two elements cannot be ordered
///
/// # Examples
/// ```
/// use selectors::selection::median_of_medians;
///
/// let data = [5, 1, 9, 3, 7, 2, 8, 6, 4];
/// assert_eq!(median_of_medians(&data, 4).unwrap(), 5);
/// ```
///
/// # Complexity
/// * Time: O(n) worst case
/// * Space: O(n)
pub fn median_of_medians<T>(sequence: &[T], k: usize) -> Result<T>
where
    T: PartialOrd + Clone,
{
    check_preconditions(sequence, k)?;
    debug!(
        "median-of-medians: rank {} of {} elements",
        k,
        sequence.len()
    );

    let working: Vec<&T> = sequence.iter().collect();
    select(working, k).cloned()
}

fn select<'a, T: PartialOrd>(mut working: Vec<&'a T>, k: usize) -> Result<&'a T> {
    if working.len() <= GROUP_SIZE {
        sort_small(&mut working)?;
        return Ok(working[k]);
    }

    let pivot = pivot(&working)?;
    let Partition {
        less,
        equal,
        greater,
    } = partition(&working, &pivot)?;
    trace!(
        "median-of-medians level: n={} k={} less={} equal={} greater={}",
        working.len(),
        k,
        less.len(),
        equal.len(),
        greater.len()
    );

    if k < less.len() {
        select(less, k)
    } else if k < less.len() + equal.len() {
        Ok(pivot)
    } else {
        let offset = less.len() + equal.len();
        select(greater, k - offset)
    }
}

/// Median of the group medians, found recursively.
fn pivot<'a, T: PartialOrd>(working: &[&'a T]) -> Result<&'a T> {
    let medians = working
        .chunks(GROUP_SIZE)
        .map(group_median)
        .collect::<Result<Vec<_>>>()?;
    let middle = medians.len() / 2;
    select(medians, middle)
}

fn group_median<'a, T: PartialOrd>(group: &[&'a T]) -> Result<&'a T> {
    let mut group = group.to_vec();
    sort_small(&mut group)?;
    Ok(group[group.len() / 2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_median_of_medians_fixtures() {
        assert_eq!(median_of_medians(&[8, 3, 1, 7, 4, 9, 2], 3).unwrap(), 4);
        assert_eq!(median_of_medians(&[10, 50, 30, 20, 40], 2).unwrap(), 30);
        assert_eq!(median_of_medians(&[5, 1, 9, 3, 7, 2, 8, 6, 4], 4).unwrap(), 5);
        assert_eq!(median_of_medians(&[100, 90, 80, 70, 60, 50], 1).unwrap(), 60);
        assert_eq!(median_of_medians(&[12, 11, 13, 5, 6, 7], 0).unwrap(), 5);
    }

    #[test]
    fn test_median_of_medians_does_not_mutate_input() {
        let data = vec![9, 7, 5, 3, 1, 8, 6, 4, 2, 0];
        let before = data.clone();
        assert_eq!(median_of_medians(&data, 5).unwrap(), 5);
        assert_eq!(data, before);
    }

    #[test]
    fn test_median_of_medians_every_rank() {
        let data: Vec<i64> = (0..37).map(|i| (i * 17 + 5) % 37).collect();
        for k in 0..data.len() {
            assert_eq!(median_of_medians(&data, k).unwrap(), k as i64);
        }
    }

    #[test]
    fn test_median_of_medians_duplicates() {
        let data = [2, 2, 1, 2, 3, 2, 2, 1, 3, 2, 2];
        let mut sorted = data.to_vec();
        sorted.sort();
        for (k, expected) in sorted.iter().enumerate() {
            assert_eq!(median_of_medians(&data, k).unwrap(), *expected);
        }
    }

    #[test]
    fn test_median_of_medians_strings() {
        let words = ["pear", "apple", "fig", "kiwi", "banana", "cherry", "date"];
        assert_eq!(median_of_medians(&words, 0).unwrap(), "apple");
        assert_eq!(median_of_medians(&words, 6).unwrap(), "pear");
    }

    #[test]
    fn test_median_of_medians_floats() {
        let data = [2.5, -1.0, 3.75, 0.0, 10.0, -7.5, 1.25];
        assert_eq!(median_of_medians(&data, 3).unwrap(), 1.25);
    }

    #[test]
    fn test_median_of_medians_out_of_range() {
        assert_eq!(
            median_of_medians(&[1, 2, 3], 3),
            Err(Error::OutOfRange { k: 3, len: 3 })
        );
        assert_eq!(
            median_of_medians(&[] as &[i32], 0),
            Err(Error::OutOfRange { k: 0, len: 0 })
        );
    }

    #[test]
    fn test_median_of_medians_nan() {
        let data = [1.0, 2.0, f64::NAN, 4.0, 5.0, 6.0, 7.0];
        assert_eq!(median_of_medians(&data, 2), Err(Error::IncomparableInput));
    }

    #[test]
    fn test_pivot_discards_constant_fraction() {
        let inputs: Vec<Vec<u32>> = vec![
            (0..1000).collect(),
            (0..1000).rev().collect(),
            (0..1000).map(|i| (i * 7919) % 1000).collect(),
            (0..1000).map(|i| if i % 2 == 0 { i } else { 1000 - i }).collect(),
        ];

        for data in inputs {
            let working: Vec<&u32> = data.iter().collect();
            let n = working.len();
            let pivot = pivot(&working).unwrap();
            let parts = partition(&working, &pivot).unwrap();
            assert!(parts.less.len() <= 7 * n / 10 + 6);
            assert!(parts.greater.len() <= 7 * n / 10 + 6);
        }
    }
}
