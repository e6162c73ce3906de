use std::fmt;

use super::fmt_list;
use crate::error::{Error, Result};

/// Fixed-size two dimensional grid stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Creates a `rows` x `cols` matrix with every cell set to `default`.
    pub fn new(rows: usize, cols: usize, default: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![default; rows * cols],
        }
    }
}

impl<T> Matrix<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        let index = self.offset(row, col)?;
        Ok(&self.cells[index])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let index = self.offset(row, col)?;
        self.cells[index] = value;
        Ok(())
    }

    /// Cells of one row. A matrix without columns has empty rows.
    pub fn row(&self, row: usize) -> Result<&[T]> {
        if row >= self.rows {
            return Err(Error::CellOutOfBounds {
                row,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.row_cells(row))
    }

    // Caller guarantees `row < self.rows`.
    fn row_cells(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::CellOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            fmt_list(f, self.row_cells(r))?;
        }
        Ok(())
    }
}
