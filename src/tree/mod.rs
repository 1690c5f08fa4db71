//! AVL tree backed ordered map.
//!
//! This module provides [`BalancedMap`] together with its traversal
//! iterators and the [`InvariantViolation`] diagnostic error.
//!
//! # Structure
//!
//! Every node caches the height of its subtree (a leaf has height 1, an
//! absent subtree height 0). The tree maintains the following invariants:
//! 1. All keys in a left subtree are smaller than the node's key, all keys in
//!    a right subtree are larger
//! 2. No key appears twice
//! 3. A node's height is one more than the taller of its children
//! 4. The heights of a node's two subtrees differ by at most one
//!
//! Insertion and removal restore invariant 4 on the way back up with single
//! or double rotations, so the tree height stays O(log N).
//!
//! # Examples
//!
//! ```rust
//! use balanced_map::tree::BalancedMap;
//!
//! let mut map = BalancedMap::new();
//! for key in [30, 20, 40, 10, 25] {
//!     map.insert(key, key * 2);
//! }
//!
//! // 20 has two children; its in-order successor 25 takes its place.
//! assert!(map.remove(&20));
//! let keys: Vec<i32> = map.in_order().map(|(key, _)| *key).collect();
//! assert_eq!(keys, vec![10, 25, 30, 40]);
//! assert!(map.validate().is_ok());
//! ```

mod map;
mod node;
mod traversal;
mod validate;

pub use map::BalancedMap;
pub use traversal::{InOrder, PreOrder};
pub use validate::InvariantViolation;
