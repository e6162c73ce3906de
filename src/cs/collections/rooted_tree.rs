use std::fmt;

/// Node of a rooted tree with an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    pub value: T,
    pub children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    pub fn new(value: T) -> Self {
        TreeNode {
            value,
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, child: TreeNode<T>) {
        self.children.push(child);
    }

    /// Pre-order walk yielding `(depth, value)` with the root at depth 0.
    pub fn traverse(&self) -> Vec<(usize, &T)> {
        let mut out = Vec::new();
        let mut stack = vec![(0, self)];
        while let Some((depth, node)) = stack.pop() {
            out.push((depth, &node.value));
            for child in node.children.iter().rev() {
                stack.push((depth + 1, child));
            }
        }
        out
    }
}

impl<T: fmt::Display> fmt::Display for TreeNode<T> {
    /// One value per line, indented two spaces per level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (depth, value)) in self.traverse().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:indent$}{}", "", value, indent = depth * 2)?;
        }
        Ok(())
    }
}
