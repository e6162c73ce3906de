use std::fmt;

use super::fmt_list;
use crate::error::{Error, Result};

/// Array-backed LIFO stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    pub fn pop(&mut self) -> Result<T> {
        self.data.pop().ok_or(Error::Empty("stack"))
    }

    pub fn peek(&self) -> Result<&T> {
        self.data.last().ok_or(Error::Empty("stack"))
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_list(f, &self.data)
    }
}
