use std::fmt;

use super::fmt_list;
use crate::error::{Error, Result};

/// A growable array with checked positional access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicArray<T> {
    data: Vec<T>,
}

impl<T> DynamicArray<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Inserts `value` at `index`, shifting later elements right.
    /// `index` may equal the current length.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.data.len() {
            return Err(Error::index_out_of_bounds(index, self.data.len()));
        }
        self.data.insert(index, value);
        Ok(())
    }

    pub fn append(&mut self, value: T) {
        self.data.push(value);
    }

    /// Removes and returns the element at `index`.
    pub fn delete(&mut self, index: usize) -> Result<T> {
        if index >= self.data.len() {
            return Err(Error::index_out_of_bounds(index, self.data.len()));
        }
        Ok(self.data.remove(index))
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.data
            .get(index)
            .ok_or(Error::index_out_of_bounds(index, self.data.len()))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_list(f, &self.data)
    }
}
