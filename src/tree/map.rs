//! Ordered map based on an AVL tree.
//!
//! This module provides [`BalancedMap`], a mutable ordered map that keeps
//! itself height-balanced after every insertion and removal.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::mem;

use super::node::{Link, Node, height, rebalance};
use super::traversal::{InOrder, PreOrder};
use super::validate::{InvariantViolation, check_tree};

// =============================================================================
// BalancedMap Definition
// =============================================================================

/// An ordered map backed by an AVL tree.
///
/// Keys must implement `Ord`. For every node the heights of its two subtrees
/// differ by at most one, which bounds the tree height by roughly
/// `1.44 * log2(n)`.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(1)       |
/// | `search`/`get` | O(log N)   |
/// | `insert`       | O(log N)   |
/// | `remove`       | O(log N)   |
/// | `contains_key` | O(log N)   |
/// | `len`          | O(1)       |
/// | `in_order`     | O(N)       |
///
/// # Examples
///
/// ```rust
/// use balanced_map::BalancedMap;
///
/// let mut map = BalancedMap::new();
/// map.insert(3, "three");
/// map.insert(1, "one");
/// map.insert(2, "two");
///
/// let keys: Vec<&i32> = map.in_order().map(|(key, _)| key).collect();
/// assert_eq!(keys, vec![&1, &2, &3]);
/// assert_eq!(map.search(&4), None);
/// ```
#[derive(Clone)]
pub struct BalancedMap<K, V> {
    /// Root node of the tree
    root: Link<K, V>,
    /// Number of entries
    length: usize,
}

impl<K, V> BalancedMap<K, V> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use balanced_map::BalancedMap;
    ///
    /// let map: BalancedMap<i32, String> = BalancedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Returns the number of entries in the map.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the height of the tree: 0 when empty, 1 for a single entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use balanced_map::BalancedMap;
    ///
    /// let mut map = BalancedMap::new();
    /// for key in 0..7 {
    ///     map.insert(key, ());
    /// }
    /// assert_eq!(map.height(), 3);
    /// ```
    #[must_use]
    pub fn height(&self) -> u32 {
        height(self.root.as_deref())
    }

    /// Removes every entry, dropping each node once.
    pub fn clear(&mut self) {
        self.root = None;
        self.length = 0;
    }

    /// Returns an iterator over the entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use balanced_map::BalancedMap;
    ///
    /// let mut map = BalancedMap::new();
    /// map.insert("b", 2);
    /// map.insert("a", 1);
    ///
    /// let entries: Vec<(&&str, &i32)> = map.in_order().collect();
    /// assert_eq!(entries, vec![(&"a", &1), (&"b", &2)]);
    /// ```
    pub fn in_order(&self) -> InOrder<'_, K, V> {
        InOrder::new(self.root.as_deref(), self.length)
    }

    /// Alias for [`in_order`](Self::in_order).
    pub fn iter(&self) -> InOrder<'_, K, V> {
        self.in_order()
    }

    /// Returns an iterator visiting each node before its left and then its
    /// right subtree.
    ///
    /// The first entry yielded is the root, which makes this traversal
    /// useful for inspecting the shape of the tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use balanced_map::BalancedMap;
    ///
    /// let mut map = BalancedMap::new();
    /// map.insert(30, ());
    /// map.insert(10, ());
    /// map.insert(20, ());
    ///
    /// let keys: Vec<i32> = map.pre_order().map(|(key, _)| *key).collect();
    /// assert_eq!(keys, vec![20, 10, 30]);
    /// ```
    pub fn pre_order(&self) -> PreOrder<'_, K, V> {
        PreOrder::new(self.root.as_deref(), self.length)
    }

    /// Returns the entry with the smallest key.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    /// Returns the entry with the largest key.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }
}

impl<K: Ord, V> BalancedMap<K, V> {
    /// Returns a reference to the value stored under `key`, or `None` if the
    /// key is absent.
    ///
    /// The key may be any borrowed form of the map's key type, but the
    /// ordering on the borrowed form must match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use balanced_map::BalancedMap;
    ///
    /// let mut map = BalancedMap::new();
    /// map.insert("zero".to_string(), 0);
    ///
    /// // A present zero is distinguishable from an absent key.
    /// assert_eq!(map.search("zero"), Some(&0));
    /// assert_eq!(map.search("one"), None);
    /// ```
    #[must_use]
    pub fn search<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// Alias for [`search`](Self::search).
    #[inline]
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key)
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// Only the value can change through the reference, so the shape of the
    /// tree is unaffected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use balanced_map::BalancedMap;
    ///
    /// let mut map = BalancedMap::new();
    /// map.insert(1, 10);
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value += 5;
    /// }
    /// assert_eq!(map.get(&1), Some(&15));
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            }
        }
        None
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the key is already present its value is overwritten in place and
    /// the previous value is returned; the shape of the tree does not change.
    /// Otherwise a new leaf is linked in and every ancestor on the way back
    /// to the root is rebalanced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use balanced_map::BalancedMap;
    ///
    /// let mut map = BalancedMap::new();
    /// assert_eq!(map.insert(1, "one"), None);
    /// assert_eq!(map.insert(1, "ONE"), Some("one"));
    /// assert_eq!(map.get(&1), Some(&"ONE"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (root, previous) = Self::insert_into(self.root.take(), key, value);
        self.root = Some(root);

        if previous.is_none() {
            self.length += 1;
            trace_event!(len = self.length, height = self.height(), "inserted entry");
        }
        previous
    }

    /// Recursive helper for insert.
    /// Returns the new subtree root and the overwritten value, if any.
    fn insert_into(link: Link<K, V>, key: K, value: V) -> (Box<Node<K, V>>, Option<V>) {
        let Some(mut node) = link else {
            return (Box::new(Node::leaf(key, value)), None);
        };

        let previous = match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, previous) = Self::insert_into(node.left.take(), key, value);
                node.left = Some(left);
                previous
            }
            Ordering::Greater => {
                let (right, previous) = Self::insert_into(node.right.take(), key, value);
                node.right = Some(right);
                previous
            }
            Ordering::Equal => {
                let previous = mem::replace(&mut node.value, value);
                return (node, Some(previous));
            }
        };

        if previous.is_some() {
            // Overwrite below: no height changed on this path.
            return (node, previous);
        }
        (rebalance(node), None)
    }

    /// Removes `key` from the map.
    ///
    /// Returns `false`, leaving the map untouched, when the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use balanced_map::BalancedMap;
    ///
    /// let mut map = BalancedMap::new();
    /// map.insert(1, "one");
    ///
    /// assert!(map.remove(&1));
    /// assert!(!map.remove(&1));
    /// assert!(map.is_empty());
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if !self.contains_key(key) {
            return false;
        }

        self.root = self.root.take().and_then(|root| Self::remove_from(root, key));
        self.length -= 1;
        trace_event!(len = self.length, height = self.height(), "removed entry");
        true
    }

    /// Recursive helper for remove. `key` is known to be in the subtree.
    /// Returns the new subtree root, `None` if the subtree became empty.
    fn remove_from<Q>(mut node: Box<Node<K, V>>, key: &Q) -> Link<K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match key.cmp(node.key.borrow()) {
            Ordering::Less => {
                node.left = node.left.take().and_then(|left| Self::remove_from(left, key));
            }
            Ordering::Greater => {
                node.right = node.right.take().and_then(|right| Self::remove_from(right, key));
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => return None,
                (Some(child), None) | (None, Some(child)) => return Some(child),
                (Some(left), Some(right)) => {
                    // Move the in-order successor's entry into this node and
                    // unlink the successor from the right subtree.
                    let (right, successor_key, successor_value) = Self::remove_min(right);
                    node.key = successor_key;
                    node.value = successor_value;
                    node.left = Some(left);
                    node.right = right;
                }
            },
        }

        Some(rebalance(node))
    }

    /// Detaches the leftmost node of a subtree.
    /// Returns the rebalanced remainder together with the detached entry.
    fn remove_min(mut node: Box<Node<K, V>>) -> (Link<K, V>, K, V) {
        match node.left.take() {
            None => {
                let Node {
                    key, value, right, ..
                } = *node;
                (right, key, value)
            }
            Some(left) => {
                let (left, key, value) = Self::remove_min(left);
                node.left = left;
                (Some(rebalance(node)), key, value)
            }
        }
    }

    /// Verifies every structural invariant of the tree.
    ///
    /// Checks that keys ascend strictly in order, that each cached height
    /// matches its subtree, that sibling heights differ by at most one, and
    /// that the entry count matches the number of nodes.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use balanced_map::BalancedMap;
    ///
    /// let mut map = BalancedMap::new();
    /// for key in 0..100 {
    ///     map.insert(key, key);
    /// }
    /// assert_eq!(map.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        check_tree(self.root.as_deref(), self.length)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for BalancedMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K, V> IntoIterator for &'a BalancedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = InOrder<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for BalancedMap<K, V> {
    /// Maps are equal when they hold the same entries, whatever their shape.
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.in_order().eq(other.in_order())
    }
}

impl<K: Eq, V: Eq> Eq for BalancedMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BalancedMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.in_order()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for BalancedMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}
