//! Full-tree traversals over a [`BalancedMap`](super::BalancedMap).
//!
//! Both iterators borrow the map immutably and walk it with an explicit
//! stack, so the map cannot change underneath them.

use std::iter::FusedIterator;

use super::node::Node;

// =============================================================================
// In-order
// =============================================================================

/// An iterator visiting entries in ascending key order (left, node, right).
///
/// Created by [`BalancedMap::in_order`](super::BalancedMap::in_order) and
/// [`BalancedMap::iter`](super::BalancedMap::iter).
pub struct InOrder<'a, K, V> {
    /// Nodes whose left subtree has been queued but which are not yet yielded.
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> InOrder<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>, length: usize) -> Self {
        let capacity = super::node::height(root) as usize;
        let mut iterator = Self {
            stack: Vec::with_capacity(capacity),
            remaining: length,
        };
        iterator.push_left_spine(root);
        iterator
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<K, V>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for InOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for InOrder<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for InOrder<'_, K, V> {}

// =============================================================================
// Pre-order
// =============================================================================

/// An iterator visiting every node before its children (node, left, right).
///
/// Pre-order exposes the shape of the tree: the first entry is always the
/// root. Created by [`BalancedMap::pre_order`](super::BalancedMap::pre_order).
pub struct PreOrder<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> PreOrder<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>, length: usize) -> Self {
        // A pending right sibling per level plus the current node.
        let capacity = super::node::height(root) as usize + 1;
        let mut stack = Vec::with_capacity(capacity);
        stack.extend(root);
        Self {
            stack,
            remaining: length,
        }
    }
}

impl<'a, K, V> Iterator for PreOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for PreOrder<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for PreOrder<'_, K, V> {}
