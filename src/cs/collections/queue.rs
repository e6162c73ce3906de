use std::fmt;

use super::fmt_list;
use crate::error::{Error, Result};

/// Array-backed FIFO queue.
///
/// Dequeued slots are reclaimed once they make up half of the buffer, which
/// keeps `dequeue` amortised O(1) without shifting on every call.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    data: Vec<Option<T>>,
    front: usize,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            front: 0,
        }
    }

    pub fn enqueue(&mut self, value: T) {
        self.data.push(Some(value));
    }

    pub fn dequeue(&mut self) -> Result<T> {
        let value = self
            .data
            .get_mut(self.front)
            .and_then(Option::take)
            .ok_or(Error::Empty("queue"))?;
        self.front += 1;
        if self.front * 2 >= self.data.len() {
            self.data.drain(..self.front);
            self.front = 0;
        }
        Ok(value)
    }

    pub fn front(&self) -> Result<&T> {
        self.data
            .get(self.front)
            .and_then(Option::as_ref)
            .ok_or(Error::Empty("queue"))
    }

    pub fn is_empty(&self) -> bool {
        self.front >= self.data.len()
    }

    pub fn len(&self) -> usize {
        self.data.len() - self.front
    }

    /// Live elements from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data[self.front..].iter().flatten()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_list(f, self.iter())
    }
}
