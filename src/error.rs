use thiserror::Error;

/// Errors produced by the selection algorithms and the container types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested rank does not address an element of the sequence.
    /// An empty sequence reports `len == 0`.
    #[error("rank {k} is out of range for a sequence of length {len}")]
    OutOfRange { k: usize, len: usize },

    /// Two elements could not be ordered against each other (e.g. NaN).
    #[error("input contains elements without a consistent total order")]
    IncomparableInput,

    /// The two selectors returned different values for the same input.
    #[error("selectors disagree on {distribution} input of length {size}: deterministic {deterministic}, randomized {randomized}")]
    SelectorsDisagree {
        distribution: &'static str,
        size: usize,
        deterministic: u64,
        randomized: u64,
    },

    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("cell ({row}, {col}) is out of bounds for a {rows}x{cols} matrix")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A removal or peek on an empty container.
    #[error("{0} is empty")]
    Empty(&'static str),
}

impl Error {
    pub fn out_of_range(k: usize, len: usize) -> Self {
        Error::OutOfRange { k, len }
    }

    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Error::IndexOutOfBounds { index, len }
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::out_of_range(7, 3).to_string(),
            "rank 7 is out of range for a sequence of length 3"
        );
        assert_eq!(Error::Empty("stack").to_string(), "stack is empty");
        assert_eq!(
            Error::CellOutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 3
            }
            .to_string(),
            "cell (2, 0) is out of bounds for a 2x3 matrix"
        );
    }
}
