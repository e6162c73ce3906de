type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Link<T>,
}

/// Singly linked list with owned nodes.
#[derive(Debug)]
pub struct LinkedList<T> {
    head: Link<T>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList { head: None }
    }

    pub fn insert_at_beginning(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
    }

    /// Appends `value` after the last node. O(n).
    pub fn insert_at_end(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
    }

    /// Values from head to tail.
    pub fn traverse(&self) -> Vec<&T> {
        let mut values = Vec::new();
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            values.push(&node.value);
            current = node.next.as_deref();
        }
        values
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Unlinks the first node holding `value`. Returns whether a node was removed.
    pub fn delete_value(&mut self, value: &T) -> bool {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.value != *value) {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }
        match cursor.take() {
            Some(node) => {
                *cursor = node.next;
                true
            }
            None => false,
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Iterative teardown so long lists do not overflow the stack.
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}
