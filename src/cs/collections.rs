//! Elementary bounds-checked containers.
//!
//! Removal or access past the end of a container returns an error instead of
//! panicking.

pub mod dynamic_array;
pub mod linked_list;
pub mod matrix;
pub mod queue;
pub mod rooted_tree;
pub mod stack;

pub use dynamic_array::DynamicArray;
pub use linked_list::LinkedList;
pub use matrix::Matrix;
pub use queue::Queue;
pub use rooted_tree::TreeNode;
pub use stack::Stack;

use std::fmt;

/// Writes `items` as `[a, b, c]`.
pub(crate) fn fmt_list<'a, T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    write!(f, "[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "]")
}
