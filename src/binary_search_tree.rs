use std::cmp::Ordering;
use std::collections::VecDeque;

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Node { value, left: None, right: None }
    }
}

/// Unbalanced binary search tree holding distinct values. Every value in a node's left subtree
/// is strictly smaller and every value in its right subtree strictly larger. There is no
/// rebalancing, so the height and the cost of every operation depend on insertion order.
///
/// # Examples
/// ```
///use clavis::BinarySearchTree;
///
///let mut bst: BinarySearchTree<i32> = [5, 3, 7, 1, 9].into_iter().collect();
///assert_eq!(vec![1, 3, 5, 7, 9], bst.inorder());
///assert_eq!(vec![5, 3, 7, 1, 9], bst.level_order());
///assert!(bst.remove(&3));
///assert!(!bst.contains(&3));
///assert!(bst.contains(&1));
/// ```
#[derive(Debug, Clone)]
pub struct BinarySearchTree<T> {
    root: Link<T>,
    node_count: usize,
}

impl<T: Ord> BinarySearchTree<T> {

    pub fn new() -> Self {
        BinarySearchTree { root: None, node_count: 0 }
    }

    /// Inserts `value` as a new leaf. Inserting a value that is already present is a no-op.
    ///
    /// # Returns
    /// * `true` if a node was created.
    pub fn insert(&mut self, value: T) -> bool {
        let mut slot = &mut self.root;
        let mut depth = 0;
        while let Some(node) = slot {
            match value.cmp(&node.value) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => return false,
            }
            depth += 1;
        }
        *slot = Some(Box::new(Node::new(value)));
        self.node_count += 1;
        log::trace!("Inserted node at depth {depth}, tree size is now {}", self.node_count);
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn minimum(&self) -> Option<&T> {
        let mut current = self.root.as_deref()?;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        Some(&current.value)
    }

    pub fn maximum(&self) -> Option<&T> {
        let mut current = self.root.as_deref()?;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        Some(&current.value)
    }

    /// Removes `value` from the tree. A node with two children takes the value of its in-order
    /// successor, and the successor node is unlinked instead.
    ///
    /// # Returns
    /// * `true` if the value was present.
    pub fn remove(&mut self, value: &T) -> bool {
        let mut slot = &mut self.root;
        loop {
            let ordering = match slot.as_deref() {
                Some(node) => value.cmp(&node.value),
                None => return false,
            };
            if ordering == Ordering::Equal {
                break;
            }
            let Some(node) = slot else { return false };
            slot = if ordering == Ordering::Less { &mut node.left } else { &mut node.right };
        }
        Self::unlink(slot);
        self.node_count -= 1;
        log::debug!("Removed a value, tree size is now {}", self.node_count);
        true
    }

    fn unlink(slot: &mut Link<T>) {
        if let Some(node) = slot {
            if node.left.is_some() && node.right.is_some() {
                if let Some(successor) = Self::take_leftmost(&mut node.right) {
                    node.value = successor;
                }
                return;
            }
        }
        // Leaf or single child: the child (if any) takes the node's place.
        if let Some(node) = slot.take() {
            let node = *node;
            *slot = node.left.or(node.right);
        }
    }

    fn take_leftmost(mut slot: &mut Link<T>) -> Option<T> {
        while slot.as_ref().is_some_and(|node| node.left.is_some()) {
            let Some(node) = slot else { return None };
            slot = &mut node.left;
        }
        let mut node = slot.take()?;
        *slot = node.right.take();
        Some(node.value)
    }
}

impl<T> BinarySearchTree<T> {

    /// Visits every value in ascending order, walking the tree with an explicit stack.
    pub fn inorder_traversal<F: FnMut(&T)>(&self, mut visitor: F) {
        let mut stack: Vec<&Node<T>> = Vec::new();
        let mut current = self.root.as_deref();
        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                visitor(&node.value);
                current = node.right.as_deref();
            }
        }
    }

    /// Visits values breadth first: the root, then each depth level from left to right.
    pub fn level_order_traversal<F: FnMut(&T)>(&self, mut visitor: F) {
        let mut process_queue: VecDeque<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = process_queue.pop_front() {
            visitor(&node.value);
            process_queue.extend(node.left.as_deref());
            process_queue.extend(node.right.as_deref());
        }
    }

    pub fn inorder(&self) -> Vec<T> where T: Clone {
        let mut values = Vec::with_capacity(self.node_count);
        self.inorder_traversal(|value| values.push(value.clone()));
        values
    }

    pub fn level_order(&self) -> Vec<T> where T: Clone {
        let mut values = Vec::with_capacity(self.node_count);
        self.level_order_traversal(|value| values.push(value.clone()));
        values
    }

    pub fn len(&self) -> usize {
        self.node_count
    }

    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

impl<T> Drop for BinarySearchTree<T> {
    // Unlinks nodes one at a time so a degenerate, list-shaped tree cannot overflow the stack
    // through nested box drops.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}
