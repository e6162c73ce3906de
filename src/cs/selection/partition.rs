use std::cmp::Ordering;

use log::trace;

use super::compare;
use crate::error::Result;

/// The three groups of a sequence split around a pivot value.
///
/// Each group keeps the relative order its elements had in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    /// Elements strictly less than the pivot.
    pub less: Vec<T>,
    /// Elements equal to the pivot.
    pub equal: Vec<T>,
    /// Elements strictly greater than the pivot.
    pub greater: Vec<T>,
}

impl<T> Partition<T> {
    /// Total number of elements across the three groups.
    pub fn len(&self) -> usize {
        self.less.len() + self.equal.len() + self.greater.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits `sequence` into elements less than, equal to and greater than `pivot`.
///
/// The pivot does not have to occur in the sequence. An empty sequence yields
/// three empty groups.
///
/// # Errors
/// * `Error::IncomparableInput` - if an element cannot be ordered against the pivot
///
/// # Examples
/// ```
/// use selectors::selection::partition;
///
/// let parts = partition(&[3, 1, 4, 1, 5], &3).unwrap();
/// assert_eq!(parts.less, vec![1, 1]);
/// assert_eq!(parts.equal, vec![3]);
/// assert_eq!(parts.greater, vec![4, 5]);
/// ```
///
/// # Complexity
/// * Time: O(n), one comparison per element
/// * Space: O(n)
pub fn partition<T>(sequence: &[T], pivot: &T) -> Result<Partition<T>>
where
    T: PartialOrd + Clone,
{
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for item in sequence {
        match compare(item, pivot)? {
            Ordering::Less => less.push(item.clone()),
            Ordering::Equal => equal.push(item.clone()),
            Ordering::Greater => greater.push(item.clone()),
        }
    }

    trace!(
        "partitioned {} elements into {}/{}/{}",
        sequence.len(),
        less.len(),
        equal.len(),
        greater.len()
    );

    let parts = Partition {
        less,
        equal,
        greater,
    };
    debug_assert_eq!(parts.len(), sequence.len());
    Ok(parts)
}
