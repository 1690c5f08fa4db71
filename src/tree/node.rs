//! Tree nodes, cached heights and rotations.

use std::cmp::max;

/// An owning link to a child subtree.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A single entry of the AVL tree.
///
/// Each node exclusively owns its children. `height` is the height of the
/// subtree rooted here: 1 for a leaf, 0 is reserved for an absent subtree.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
    pub(crate) height: u32,
}

impl<K, V> Node<K, V> {
    /// Creates a leaf node.
    pub(crate) const fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Height of the left subtree minus height of the right subtree.
    pub(crate) fn balance(&self) -> i64 {
        i64::from(height(self.left.as_deref())) - i64::from(height(self.right.as_deref()))
    }

    /// Recomputes the cached height from the children.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + max(height(self.left.as_deref()), height(self.right.as_deref()));
    }
}

/// Returns the cached height of a subtree, 0 when absent.
pub(crate) fn height<K, V>(node: Option<&Node<K, V>>) -> u32 {
    node.map_or(0, |node| node.height)
}

/// Rotates the subtree to the left around `node`.
///
/// The right child becomes the new subtree root and its left subtree moves
/// across to become `node`'s right child.
fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();

    trace_event!(rotation = "left", height = pivot.height, "rotated subtree");
    pivot
}

/// Rotates the subtree to the right around `node`.
///
/// Mirror image of [`rotate_left`].
fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();

    trace_event!(rotation = "right", height = pivot.height, "rotated subtree");
    pivot
}

/// Refreshes the height of `node` and restores the AVL balance if one side
/// is more than one level taller than the other.
///
/// Returns the root of the rebalanced subtree, which the caller stores back
/// into the slot `node` came from.
pub(crate) fn rebalance<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    node.update_height();
    let balance = node.balance();

    if balance > 1 {
        // Left-right: straighten the left child first.
        if node.left.as_ref().is_some_and(|left| left.balance() < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if balance < -1 {
        // Right-left
        if node.right.as_ref().is_some_and(|right| right.balance() > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}
