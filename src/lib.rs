//! # balanced-map
//!
//! An ordered in-memory map backed by an AVL tree.
//!
//! ## Overview
//!
//! [`BalancedMap`] stores key-value pairs in a self-balancing binary search
//! tree. Every node caches the height of its subtree and the tree keeps the
//! heights of sibling subtrees within one of each other, so lookups,
//! insertions and removals all run in O(log n).
//!
//! - `insert` overwrites the value of an existing key in place
//! - `search` (alias `get`) returns `None` for absent keys
//! - `remove` reports whether a key was actually removed
//! - `in_order` / `pre_order` walk the whole tree for inspection
//!
//! ## Feature Flags
//!
//! - `tracing`: emit `tracing` trace events for rotations and structural
//!   changes
//!
//! ## Example
//!
//! ```rust
//! use balanced_map::BalancedMap;
//!
//! let mut map = BalancedMap::new();
//! map.insert(10, "ten");
//! map.insert(20, "twenty");
//! map.insert(30, "thirty");
//!
//! // The third insert rotated 20 up to the root.
//! let pre_order: Vec<i32> = map.pre_order().map(|(key, _)| *key).collect();
//! assert_eq!(pre_order, vec![20, 10, 30]);
//!
//! assert_eq!(map.search(&20), Some(&"twenty"));
//! assert!(map.remove(&20));
//! assert_eq!(map.search(&20), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Emits a `tracing` trace event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($argument)*);
    };
}

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use balanced_map::prelude::*;
///
/// let mut map: BalancedMap<&str, u32> = BalancedMap::new();
/// map.insert("answer", 42);
/// assert!(map.validate().is_ok());
/// ```
pub mod prelude {
    pub use crate::tree::*;
}

pub mod tree;

pub use tree::{BalancedMap, InOrder, InvariantViolation, PreOrder};
